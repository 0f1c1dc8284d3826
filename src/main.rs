//! Matrix Exercises - interactive menu
//!
//! Reads answers from stdin, writes prompts and results to stdout, and
//! logs to stderr.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use matrix_exercises::{AppConfig, Console, run_menu};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(
        cli.lang,
        cli.cell_width,
        cli.seed,
    );
    info!(?config, "Starting matrix exercises");

    let mut rng = config.rng();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        *config.language(),
        *config.cell_width(),
    );

    let runs = run_menu(&mut console, &mut rng)?;
    info!(runs, "Session finished");
    Ok(())
}

/// Logs go to stderr; stdout carries the session.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
