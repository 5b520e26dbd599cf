//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::cache::CacheArgs;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::tags::TagsArgs;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "tagfresh")]
#[command(about = "tagfresh - order tags by their most recently updated post", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file to load instead of .tagfresh/config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration and the content database
    Init(InitArgs),

    /// Print tags for a scope, most recently updated first
    Tags(TagsArgs),

    /// Cache maintenance commands
    Cache(CacheArgs),
}
