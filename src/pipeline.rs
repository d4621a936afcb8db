//! The per-run loop: fetch, diff and snapshot update for every active source,
//! then the report rows.
//!
//! Sources are processed one after another. A source whose page cannot be
//! fetched contributes nothing and keeps its previous snapshot entry, so its
//! articles are picked up on the next run.

use crate::config::Config;
use crate::diff::diff;
use crate::error::Result;
use crate::fetch::{PageFetcher, fetch};
use crate::models::{ArticleRecord, DailyDigestEntry, digest_entries};
use crate::outputs::Workbook;
use crate::registry::SourceRegistry;
use crate::state::Snapshot;
use tracing::{error, info, instrument};

/// What one source produced this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    pub source: String,
    /// Records on the live page.
    pub fetched: usize,
    pub new_records: Vec<ArticleRecord>,
    /// New records dated today.
    pub digest: Vec<DailyDigestEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<SourceOutcome>,
}

impl RunSummary {
    pub fn total_new(&self) -> usize {
        self.outcomes.iter().map(|o| o.new_records.len()).sum()
    }

    /// Digest entries of all sources, in run order.
    pub fn digest(&self) -> Vec<DailyDigestEntry> {
        self.outcomes.iter().flat_map(|o| o.digest.iter().cloned()).collect()
    }
}

/// Fetch one source, diff it against `snapshot` and replace its entry.
#[instrument(level = "info", skip(registry, fetcher, snapshot))]
pub async fn process_source<F: PageFetcher>(
    registry: &SourceRegistry,
    fetcher: &F,
    snapshot: &mut Snapshot,
    source_id: &str,
    today: &str,
) -> Result<SourceOutcome> {
    let source = registry.resolve(source_id)?;
    let current = fetch(registry, fetcher, source_id).await?;

    let mut outcome = SourceOutcome {
        source: source_id.to_string(),
        fetched: current.len(),
        new_records: Vec::new(),
        digest: Vec::new(),
    };
    if current.is_empty() {
        info!(source = %source_id, "No articles fetched; snapshot left as is");
        return Ok(outcome);
    }

    let result = diff(&current, &snapshot.get(source_id), source.dedup_mode());
    snapshot.replace(source_id, result.updated_keys);

    outcome.digest = digest_entries(&source.display_name(), &result.new_records, today);
    outcome.new_records = result.new_records;
    if outcome.new_records.is_empty() {
        info!(source = %source_id, "No new articles");
    } else {
        info!(
            source = %source_id,
            new = outcome.new_records.len(),
            today = outcome.digest.len(),
            "Found new articles"
        );
    }
    Ok(outcome)
}

/// Process every active source in order.
///
/// An id that does not resolve is logged and skipped; [`Config::validate`]
/// rejects those before a run starts.
#[instrument(level = "info", skip_all, fields(sources = config.active.len(), %today))]
pub async fn run<F: PageFetcher>(
    config: &Config,
    registry: &SourceRegistry,
    fetcher: &F,
    snapshot: &mut Snapshot,
    today: &str,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for id in &config.active {
        match process_source(registry, fetcher, snapshot, id, today).await {
            Ok(outcome) => summary.outcomes.push(outcome),
            Err(e) => error!(source = %id, error = %e, "Skipping source"),
        }
    }
    info!(
        processed = summary.outcomes.len(),
        new = summary.total_new(),
        today = summary.digest().len(),
        "Run complete"
    );
    summary
}

/// Write a run's rows into the workbook: source sheets, today's digest sheet
/// and the index.
pub fn write_report(
    book: &mut Workbook,
    registry: &SourceRegistry,
    summary: &RunSummary,
    today: &str,
    digest_color: &str,
) -> Result<()> {
    for outcome in &summary.outcomes {
        let source = registry.resolve(&outcome.source)?;
        book.append_source_articles(source, &outcome.new_records);
    }
    book.append_daily(today, &summary.digest(), digest_color);
    book.rebuild_index(digest_color);
    Ok(())
}
