//! Command-line interface for pk-index-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Huge profile (CHAR(200) keys, 20000 rows) to stdout
//! pk-index-gen generate
//!
//! # Reproducible small workload written to a file
//! pk-index-gen generate --profile small --seed 42 --output small.sql
//!
//! # Settings from a YAML file, with a flag override
//! pk-index-gen generate --config workload.yaml --row-count 500
//!
//! # Check a script's invariants
//! pk-index-gen verify --input small.sql --profile small --live-floor 100
//! ```
//!
//! Logs go to stderr (`RUST_LOG` controls the level), so stdout carries
//! only the generated SQL.

use clap::Parser;
use pk_index_gen::{run_generate, run_verify, Cli, Commands};

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let summary = run_generate(&args)?;
            tracing::info!("Reproduce this workload with --seed {}", summary.seed);
        }
        Commands::Verify(args) => {
            run_verify(&args)?;
        }
    }

    Ok(())
}
