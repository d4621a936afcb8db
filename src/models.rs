//! Data models shared by the extractors, the diff engine and the report.
//!
//! - [`ArticleRecord`]: one article as scraped from an author page
//! - [`DedupKey`] / [`DedupMode`]: what "seen before" means for a source
//! - [`SourceDescriptor`]: one configured author page
//! - [`DailyDigestEntry`]: an article published today, for the digest sheet

use crate::scrapers::ExtractorKind;
use serde::{Deserialize, Serialize};

/// A single article scraped from a publisher page.
///
/// `title` and `link` are always present and `link` is absolute. `date` is
/// the canonical `dd-mm-yy` form, or `None` for publishers that do not show
/// a per-article date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub link: String,
    pub date: Option<String>,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>, date: Option<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            date,
        }
    }

    /// Build the key this record is deduplicated by under `mode`. A dated
    /// key ignores the title; see [`DedupKey::Dated`].
    pub fn dedup_key(&self, mode: DedupMode) -> DedupKey {
        match mode {
            DedupMode::Dated => DedupKey::Dated {
                link: self.link.clone(),
                date: self.date.clone().unwrap_or_default(),
            },
            DedupMode::Undated => DedupKey::Undated {
                title: self.title.clone(),
                link: self.link.clone(),
            },
        }
    }
}

/// How a source's articles are compared against the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupMode {
    /// Publisher shows a date per article; link and date identify it.
    Dated,
    /// Publisher shows no date; title and link identify it.
    Undated,
}

/// An entry of the persisted "already seen" snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DedupKey {
    /// Link plus canonical date. One snapshot line `source|link|date`; the
    /// title is not part of the key, so a retitled article is not new.
    Dated { link: String, date: String },
    /// Title plus link, for sources that show no per-article date.
    Undated { title: String, link: String },
}

/// One configured author page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Unique, human readable; also the snapshot and sheet key.
    pub id: String,
    pub url: String,
    pub extractor: ExtractorKind,
    /// Six hex digits, used for the source's sheet header.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "000000".to_string()
}

impl SourceDescriptor {
    /// The id with dashes turned into spaces, e.g. `"Hande Fırat"`.
    pub fn display_name(&self) -> String {
        self.id.replace('-', " ")
    }

    pub fn dedup_mode(&self) -> DedupMode {
        self.extractor.dedup_mode()
    }
}

/// An article published on the current run date, collected across sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDigestEntry {
    pub source_display_name: String,
    pub title: String,
    pub link: String,
}

/// Select the digest entries among `new_records`: those dated `today`.
///
/// Order follows `new_records`, which is the publisher's newest-first order.
pub fn digest_entries(
    source_display_name: &str,
    new_records: &[ArticleRecord],
    today: &str,
) -> Vec<DailyDigestEntry> {
    new_records
        .iter()
        .filter(|r| r.date.as_deref() == Some(today))
        .map(|r| DailyDigestEntry {
            source_display_name: source_display_name.to_string(),
            title: r.title.clone(),
            link: r.link.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_key_ignores_title() {
        let a = ArticleRecord::new("Eski başlık", "https://x.test/a", Some("05-01-24".into()));
        let b = ArticleRecord::new("Yeni başlık", "https://x.test/a", Some("05-01-24".into()));
        assert_eq!(a.dedup_key(DedupMode::Dated), b.dedup_key(DedupMode::Dated));
        assert_ne!(a.dedup_key(DedupMode::Undated), b.dedup_key(DedupMode::Undated));
    }

    #[test]
    fn test_dated_key_distinguishes_dates() {
        let a = ArticleRecord::new("T", "https://x.test/a", Some("05-01-24".into()));
        let b = ArticleRecord::new("T", "https://x.test/a", Some("06-01-24".into()));
        assert_ne!(a.dedup_key(DedupMode::Dated), b.dedup_key(DedupMode::Dated));
    }

    #[test]
    fn test_display_name() {
        let d = SourceDescriptor {
            id: "Hande-Fırat".into(),
            url: "https://www.hurriyet.com.tr/yazarlar/hande-firat/".into(),
            extractor: ExtractorKind::Hurriyet,
            color: "1E90FF".into(),
        };
        assert_eq!(d.display_name(), "Hande Fırat");
        assert_eq!(d.dedup_mode(), DedupMode::Dated);
    }

    #[test]
    fn test_digest_entries_keep_only_today_in_order() {
        let records = vec![
            ArticleRecord::new("A", "https://x.test/a", Some("17-10-26".into())),
            ArticleRecord::new("B", "https://x.test/b", Some("16-10-26".into())),
            ArticleRecord::new("C", "https://x.test/c", Some("17-10-26".into())),
            ArticleRecord::new("D", "https://x.test/d", None),
        ];
        let digest = digest_entries("Murat Yetkin", &records, "17-10-26");
        let titles: Vec<_> = digest.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert!(digest.iter().all(|e| e.source_display_name == "Murat Yetkin"));
    }
}
