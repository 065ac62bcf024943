//! Unitgraph CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use unitgraph::cli::Cli;

/// Main entry point for the unitgraph CLI.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=unitgraph=trace unitgraph dfs deps.dot
    // Logs go to stderr so `--json` output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unitgraph=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting unitgraph CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Unitgraph CLI completed successfully");
    Ok(())
}
