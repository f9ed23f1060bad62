//! Offsync CLI - the once-daily sync entry point.
//!
//! # Usage
//!
//! ```bash
//! # One sync pass for today (the scheduler runs exactly this)
//! offsync
//!
//! # Deterministic run for a specific date
//! offsync --date 2024-06-12
//!
//! # Walk the pipeline without writing to the messaging platform
//! offsync --dry-run
//! ```
//!
//! The process exit code is the success/failure signal consumed by the
//! invoking scheduler: non-zero only when the run aborts (time-off source
//! unavailable or configuration invalid). Per-user problems are warnings
//! in the log and still exit zero.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use offsync_job::{ClockifyClient, SlackClient, SyncConfig, SyncError, run_sync};

#[derive(Parser)]
#[command(name = "offsync")]
#[command(author, version, about = "Sync approved time-off into away statuses")]
struct Cli {
    /// Reference date (YYYY-MM-DD); defaults to the current UTC date
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Compute and log decisions without writing to the messaging platform
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Sync run failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), SyncError> {
    let config = SyncConfig::from_env()?;

    let clockify = ClockifyClient::new(&config.clockify)?;
    let slack = SlackClient::new(&config.slack);

    let reference_date = cli.date.unwrap_or_else(|| Utc::now().date_naive());

    let summary = run_sync(&clockify, &slack, reference_date, cli.dry_run).await?;

    if summary.has_warnings() {
        tracing::warn!(%summary, "Sync completed with warnings");
    }

    Ok(())
}
