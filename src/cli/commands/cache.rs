//! Cache maintenance commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::adapters::sqlite::SqliteCacheStore;
use crate::cli::display::{action_success, output, CommandOutput};
use crate::cli::runtime::{build_index, open_content_pool};
use crate::domain::models::Config;

/// Cache maintenance commands
#[derive(Args, Debug)]
pub struct CacheArgs {
    /// Cache subcommand to run
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Cache subcommands.
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Drop the cached ordering for one scope
    Clear {
        /// Scope key
        scope: String,
    },
    /// Delete expired entries from the SQLite cache
    Purge,
}

/// Output of the cache subcommands.
#[derive(Debug, Serialize)]
pub struct CacheActionOutput {
    /// Whether anything was done.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Number of entries removed.
    pub removed: u64,
}

impl CommandOutput for CacheActionOutput {
    fn to_human(&self) -> String {
        if self.success {
            action_success(&self.message)
        } else {
            self.message.clone()
        }
    }
}

/// Run a `tagfresh cache` subcommand.
pub async fn execute(args: CacheArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = open_content_pool(config).await?;

    let result = match args.command {
        CacheCommands::Clear { scope } => {
            let index = build_index(config, &pool)?;
            let removed = index
                .clear(&scope)
                .await
                .with_context(|| format!("Failed to clear cache for scope '{scope}'"))?;
            CacheActionOutput {
                success: removed,
                message: if removed {
                    format!("Cleared cached tag order for '{scope}'.")
                } else {
                    format!("No cached tag order for '{scope}'.")
                },
                removed: u64::from(removed),
            }
        }
        CacheCommands::Purge => {
            if config.cache.backend == "sqlite" {
                let removed = SqliteCacheStore::new(pool)
                    .purge_expired()
                    .await
                    .context("Failed to purge expired cache entries")?;
                CacheActionOutput {
                    success: true,
                    message: format!("Purged {removed} expired cache entr{}.", if removed == 1 { "y" } else { "ies" }),
                    removed,
                }
            } else {
                CacheActionOutput {
                    success: false,
                    message: format!("Cache backend '{}' keeps nothing to purge.", config.cache.backend),
                    removed: 0,
                }
            }
        }
    };

    output(&result, json_mode);
    Ok(())
}
