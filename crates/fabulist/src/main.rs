//! Fabulist CLI binary.
//!
//! - `fabulist tell <CATEGORY>` writes, illustrates and optionally narrates a story
//! - `fabulist config` prints the resolved configuration

use std::process::ExitCode;

use clap::Parser;
use fabulist::{FabulistConfig, error_message, init_tracing};
use tracing::debug;

mod cli;

use cli::{Cli, Commands, run_tell, show_config};

#[tokio::main]
async fn main() -> ExitCode {
    // Pick up GEMINI_API_KEY and friends from .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.verbose, cli.json_logs) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "Command failed");
            eprintln!("{}", error_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = FabulistConfig::load_with_override(cli.config.as_ref())?;

    match &cli.command {
        Commands::Tell(args) => run_tell(args, &config).await?,
        Commands::Config => show_config(&config)?,
    }

    Ok(())
}
