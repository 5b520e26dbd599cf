//! tagfresh CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use tagfresh::cli::runtime::load_config;
use tagfresh::cli::{report_error, Cli, Commands};
use tagfresh::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    // The logger guard drops when `run` returns, flushing file output.
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let _logger = LoggerImpl::init(&config.logging)?;

    match cli.command {
        Commands::Init(args) => tagfresh::cli::commands::init::execute(args, cli.json).await,
        Commands::Tags(args) => tagfresh::cli::commands::tags::execute(args, &config, cli.json).await,
        Commands::Cache(args) => tagfresh::cli::commands::cache::execute(args, &config, cli.json).await,
    }
}
