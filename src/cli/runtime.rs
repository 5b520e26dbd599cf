//! Wiring from configuration to concrete adapters.

use anyhow::{bail, Context, Result};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use crate::adapters::sqlite::{
    database_url, initialize_database, PoolConfig, SqliteCacheStore, SqliteContentStore,
};
use crate::domain::models::Config;
use crate::domain::ports::{CacheStore, NullCacheStore};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{IndexSettings, TagFreshnessIndex};

/// Index as assembled by the CLI: SQLite content, configurable cache backend.
pub type CliIndex = TagFreshnessIndex<SqliteContentStore, dyn CacheStore>;

/// Load configuration from an explicit file, or from `.tagfresh/` in the
/// current directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Open (and migrate) the content database named by the configuration.
pub async fn open_content_pool(config: &Config) -> Result<SqlitePool> {
    let url = database_url(&config.database.path);
    initialize_database(&url, Some(PoolConfig::from(&config.database)))
        .await
        .with_context(|| format!("Failed to open content database at {}", config.database.path))
}

/// Cache store for the configured backend.
///
/// The in-process `memory` backend is rejected: a CLI run exits right after
/// one lookup, so it could never serve a cached ordering.
pub fn build_cache_store(config: &Config, pool: &SqlitePool) -> Result<Arc<dyn CacheStore>> {
    match config.cache.backend.as_str() {
        "sqlite" => Ok(Arc::new(SqliteCacheStore::new(pool.clone()))),
        "none" => Ok(Arc::new(NullCacheStore::new())),
        other => bail!(
            "Cache backend '{other}' does not persist between CLI runs. Use 'sqlite' or 'none'."
        ),
    }
}

/// Index over the content database with the configured cache backend.
pub fn build_index(config: &Config, pool: &SqlitePool) -> Result<CliIndex> {
    Ok(TagFreshnessIndex::new(
        Arc::new(SqliteContentStore::new(pool.clone())),
        build_cache_store(config, pool)?,
        IndexSettings::from(config),
    ))
}
