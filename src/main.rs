//! doc-census main entry point
//!
//! This is the command-line interface for the doc-census auditor.

use anyhow::Context;
use clap::Parser;
use doc_census::config::{load_config_with_hash, Config};
use doc_census::output::{control_output, OutputFormat};
use doc_census::{run_mode, HttpFetcher, Mode};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// doc-census: a documentation status auditor
///
/// Crawls the Python documentation and the PEP index, and reports on what
/// it finds. The `pep` mode counts documents per declared status and lists
/// documents whose status does not fit their category.
#[derive(Parser, Debug)]
#[command(name = "doc-census")]
#[command(version)]
#[command(about = "A documentation status auditor", long_about = None)]
struct Cli {
    /// What to produce
    #[arg(value_enum, value_name = "MODE")]
    mode: Mode,

    /// Clear the response cache before running
    #[arg(short, long)]
    clear_cache: bool,

    /// Output format (default: plain lines on stdout)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);
    tracing::info!("doc-census started");
    tracing::debug!("Command line arguments: {:?}", cli);

    let config = load_configuration(cli.config.as_deref())?;

    let mut fetcher = HttpFetcher::from_config(&config, cli.clear_cache)
        .context("Failed to set up the HTTP fetcher")?;

    let output = run_mode(cli.mode, &mut fetcher, &config)
        .await
        .with_context(|| format!("Mode '{}' failed", cli.mode))?;

    if let Some(table) = &output.table {
        control_output(
            table,
            cli.output,
            cli.mode.as_str(),
            Path::new(&config.output.results_dir),
        )
        .context("Failed to write results")?;
    }

    for discrepancy in &output.discrepancies {
        println!("{}", discrepancy);
    }

    tracing::info!("doc-census finished");
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doc_census=info,warn"),
            1 => EnvFilter::new("doc_census=debug,info"),
            2 => EnvFilter::new("doc_census=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}
