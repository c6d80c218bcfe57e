//! Pydoc-Scraper main entry point
//!
//! This is the command-line interface for the Python documentation scraper.

use anyhow::Context;
use clap::Parser;
use pydoc_scraper::config::{load_config_or_default, Config};
use pydoc_scraper::http::open_session;
use pydoc_scraper::output::{control_output, OutputMode};
use pydoc_scraper::progress::LogProgress;
use pydoc_scraper::{run_mode, Mode};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Pydoc-Scraper: Python documentation scraper
///
/// Collects "what's new" articles, documentation versions and PEP status
/// counts from docs.python.org and peps.python.org, or downloads the PDF
/// documentation archive.
#[derive(Parser, Debug)]
#[command(name = "pydoc-scraper")]
#[command(version)]
#[command(about = "Python documentation scraper", long_about = None)]
struct Cli {
    /// What to scrape
    #[arg(value_enum)]
    mode: Mode,

    /// Clear the HTTP response cache before running
    #[arg(short, long)]
    clear_cache: bool,

    /// How to present the results (plain lines on stdout by default)
    #[arg(short, long, value_enum)]
    output: Option<OutputMode>,

    /// Path to a TOML configuration file
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

    let config = load_config_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Invalid built-in configuration".to_string(),
    })?;

    setup_logging(&config, cli.verbose, cli.quiet)?;

    tracing::info!("Parser started");
    tracing::info!("Command line arguments: {:?}", cli);

    match run(&cli, &config).await {
        Ok(()) => {
            tracing::info!("Parser finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Parser failed: {:#}", e);
            Err(e)
        }
    }
}

/// Sets up console and log-file output based on verbosity level
fn setup_logging(config: &Config, verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pydoc_scraper=info,warn"),
            1 => EnvFilter::new("pydoc_scraper=debug,info"),
            2 => EnvFilter::new("pydoc_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let logs_dir = config.logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;
    let log_path = logs_dir.join("parser.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}

/// Opens the session, runs the selected mode and renders its results
async fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let mut session = open_session(config).context("Failed to open HTTP session")?;

    if cli.clear_cache {
        session.clear_cache().context("Failed to clear HTTP cache")?;
        tracing::info!("HTTP cache cleared");
    }

    let mut progress = LogProgress::new();
    let results = run_mode(cli.mode, &mut session, config, &mut progress)
        .await
        .with_context(|| format!("Mode '{}' failed", cli.mode))?;

    if let Some(table) = results {
        control_output(&table, cli.mode.name(), cli.output, config)
            .context("Failed to write results")?;
    }

    Ok(())
}
