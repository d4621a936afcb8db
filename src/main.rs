//! # Up To Date News
//!
//! Command-line entry point: one run over the active sources.
//!
//! ## Usage
//!
//! ```sh
//! up_to_date_news -d ./data
//! ```
//!
//! ## Run
//!
//! 1. **Configuration**: load and validate the roster, apply `--source`
//! 2. **State**: load the snapshot, workbook and reset timestamp; clear the
//!    digest when the day changed
//! 3. **Fetching**: fetch and diff every active source in order
//! 4. **Output**: write report rows, then persist everything unless
//!    `--dry-run`

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use up_to_date_news::cli::Cli;
use up_to_date_news::config::Config;
use up_to_date_news::fetch::HttpFetcher;
use up_to_date_news::outputs::{json, markdown};
use up_to_date_news::pipeline;
use up_to_date_news::registry::SourceRegistry;
use up_to_date_news::state::{self, RESET_FILE, SNAPSHOT_FILE, Snapshot};
use up_to_date_news::utils::{ensure_writable_dir, run_date};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("up_to_date_news starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Roster ----
    let mut config = Config::load_or_default(args.config.as_deref()).await?;
    config.restrict_to(&args.sources)?;
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid roster; nothing fetched");
        return Err(e.into());
    }
    let registry = SourceRegistry::new(&config);
    info!(sources = registry.len(), active = config.active.len(), "Roster ready");

    // ---- State ----
    if !args.dry_run {
        if let Err(e) = ensure_writable_dir(&args.data_dir).await {
            error!(
                path = %args.data_dir.display(),
                error = %e,
                "Data directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }
    let snapshot_path = args.data_dir.join(SNAPSHOT_FILE);
    let reset_path = args.data_dir.join(RESET_FILE);
    let workbook_path = args.data_dir.join(json::WORKBOOK_FILE);

    let mut snapshot = Snapshot::load(&snapshot_path).await?;
    let mut book = json::read_workbook(&workbook_path).await?;

    let now = Local::now();
    let today = run_date(&now);
    let last_reset = state::load_reset_timestamp(&reset_path).await?;
    let reset_due = state::needs_daily_reset(last_reset, now);
    if reset_due {
        info!(%today, "New day; clearing daily digest");
        book.reset_daily();
    }

    // ---- Fetch and diff ----
    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let summary = pipeline::run(&config, &registry, &fetcher, &mut snapshot, &today).await;
    for outcome in summary.outcomes.iter().filter(|o| o.fetched == 0) {
        warn!(source = %outcome.source, "Nothing extracted; will retry next run");
    }

    // ---- Output ----
    pipeline::write_report(&mut book, &registry, &summary, &today, &config.digest_color)?;

    if args.dry_run {
        info!(
            new = summary.total_new(),
            today = summary.digest().len(),
            "Dry run; nothing written"
        );
    } else {
        snapshot.save(&snapshot_path).await?;
        json::write_workbook(&book, &workbook_path).await?;
        if reset_due {
            state::save_reset_timestamp(&reset_path, now).await?;
        }
        if let Some(path) = &args.markdown_output {
            markdown::write_markdown(&book, &today, path).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        elapsed_secs = elapsed.as_secs_f64(),
        new = summary.total_new(),
        "Run finished"
    );

    Ok(())
}
