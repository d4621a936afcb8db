//! Persisted run state under the data directory.
//!
//! `past_articles.txt` holds one dedup key per line:
//!
//! ```text
//! Murat-Yetkin|https://yetkinreport.com/2026/10/16/notlar/|16-10-26
//! Murat-Sabuncu|https://t24.com.tr/yazarlar/murat-sabuncu/yazi,100\x1fYazının başlığı
//! ```
//!
//! Dated keys are `source|link|date`. Undated keys are `source|link<US>title`
//! with the ASCII unit separator between link and title. The file is rewritten
//! in full at the end of a run.
//!
//! `last_reset.txt` holds the epoch seconds (float) of the last daily digest
//! reset.

use crate::error::Result;
use crate::models::DedupKey;
use crate::utils::truncate_for_log;
use chrono::{DateTime, Local, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

pub const SNAPSHOT_FILE: &str = "past_articles.txt";
pub const RESET_FILE: &str = "last_reset.txt";

const UNIT_SEPARATOR: char = '\u{1f}';

/// Dedup keys seen in the latest successful fetch of each source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<String, BTreeSet<DedupKey>>,
}

impl Snapshot {
    /// Keys recorded for `source`; empty when the source was never seen.
    pub fn get(&self, source: &str) -> BTreeSet<DedupKey> {
        self.entries.get(source).cloned().unwrap_or_default()
    }

    /// Replace the entry for `source` as a whole.
    pub fn replace(&mut self, source: &str, keys: BTreeSet<DedupKey>) {
        self.entries.insert(source.to_string(), keys);
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse the line format. Blank and malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut snapshot = Self::default();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((source, key)) => {
                    snapshot
                        .entries
                        .entry(source.to_string())
                        .or_default()
                        .insert(key);
                }
                None => warn!(
                    line = n + 1,
                    text = %truncate_for_log(line, 200),
                    "Skipping malformed snapshot line"
                ),
            }
        }
        snapshot
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (source, keys) in &self.entries {
            for key in keys {
                let _ = match key {
                    DedupKey::Dated { link, date } => writeln!(out, "{}|{}|{}", source, link, date),
                    DedupKey::Undated { title, link } => {
                        writeln!(out, "{}|{}{}{}", source, link, UNIT_SEPARATOR, title)
                    }
                };
            }
        }
        out
    }

    /// Read the snapshot file; a missing file is an empty snapshot.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        match fs::read_to_string(path.as_ref()).await {
            Ok(text) => {
                let snapshot = Self::parse(&text);
                info!(keys = snapshot.len(), "Loaded snapshot");
                Ok(snapshot)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No snapshot yet; starting empty");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the snapshot file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.render()).await?;
        info!(keys = self.len(), "Wrote snapshot");
        Ok(())
    }
}

fn parse_line(line: &str) -> Option<(&str, DedupKey)> {
    let (source, rest) = line.split_once('|')?;
    if source.is_empty() {
        return None;
    }
    let key = match rest.split_once(UNIT_SEPARATOR) {
        Some((link, title)) => DedupKey::Undated {
            title: title.to_string(),
            link: link.to_string(),
        },
        None => {
            let (link, date) = rest.rsplit_once('|')?;
            DedupKey::Dated {
                link: link.to_string(),
                date: date.to_string(),
            }
        }
    };
    Some((source, key))
}

/// Epoch seconds of the last digest reset; `0.0` when never reset.
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_reset_timestamp(path: impl AsRef<Path>) -> Result<f64> {
    match fs::read_to_string(path.as_ref()).await {
        Ok(text) => match text.trim().parse::<f64>() {
            Ok(ts) => Ok(ts),
            Err(_) => {
                warn!(text = %text.trim(), "Unreadable reset timestamp; treating as never reset");
                Ok(0.0)
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(0.0),
        Err(e) => Err(e.into()),
    }
}

#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub async fn save_reset_timestamp(path: impl AsRef<Path>, now: DateTime<Local>) -> Result<()> {
    let ts = now.timestamp_millis() as f64 / 1000.0;
    fs::write(path.as_ref(), format!("{}\n", ts)).await?;
    debug!(ts, "Wrote reset timestamp");
    Ok(())
}

/// True when the last reset happened on another local calendar day.
pub fn needs_daily_reset(last_reset: f64, now: DateTime<Local>) -> bool {
    let secs = last_reset.floor();
    let nanos = ((last_reset - secs) * 1e9) as u32;
    match DateTime::<Utc>::from_timestamp(secs as i64, nanos) {
        Some(last) => last.with_timezone(&Local).date_naive() != now.date_naive(),
        None => true,
    }
}
