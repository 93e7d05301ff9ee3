//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tls_profiler` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use tls_profiler::app::render_outcome;
use tls_profiler::initialization::{init_crypto_provider, init_logger_with};
use tls_profiler::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    match run(&config).await {
        Ok(outcome) => {
            let rendered = render_outcome(&outcome, config.output_format)
                .context("Failed to render output")?;
            println!("{rendered}");
            Ok(())
        }
        Err(e) => {
            // Diagnostics share stdout with normal output.
            println!("{e}");
            process::exit(1);
        }
    }
}
