//! brainscan CLI - scan `src/`, write the memory snapshots, print an overview.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use brainscan::cli::Cli;
use brainscan::{BrainError, console, runner};

fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    let config = cli.into_config();
    debug!("resolved config: {:?}", config);

    let outcome = runner::run(&config)
        .with_context(|| format!("brainscan failed for {}", config.root.display()))?;
    console::print_overview(&outcome, &config, quiet);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the overview; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<BrainError>() {
                Some(BrainError::MissingSourceRoot(path)) => {
                    eprintln!("❌ src/ not found at {}", path.display());
                }
                _ => eprintln!("❌ {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
