//! The report workbook: one sheet per source, the daily digest and an index.
//!
//! Layout rules:
//! - source sheets are named by source id, titled by display name, headed
//!   `Title | Link | Date`, newest row first, at most [`MAX_SOURCE_ROWS`] rows
//! - the digest sheet `Daily-Updates-<dd-mm-yy>` is always the first sheet,
//!   headed `Author | Title | Link`, uncapped
//! - the `Index` sheet is rebuilt after every run and sits last

use crate::models::{ArticleRecord, DailyDigestEntry, SourceDescriptor};
use crate::utils::adjust_color;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const MAX_SOURCE_ROWS: usize = 50;
pub const DAILY_PREFIX: &str = "Daily-Updates-";
pub const INDEX_SHEET: &str = "Index";

/// Header rows are this much darker than the sheet colour.
const HEADER_SHADE: i16 = -20;

const SOURCE_HEADERS: [&str; 3] = ["Title", "Link", "Date"];
const DAILY_HEADERS: [&str; 3] = ["Author", "Title", "Link"];
const INDEX_HEADERS: [&str; 3] = ["Sheet", "Articles", "Latest"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub title: String,
    pub color: String,
    pub header_color: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: &str, title: &str, color: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            color: color.to_string(),
            header_color: adjust_color(color, HEADER_SHADE),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Put `rows` above the existing ones, keeping their order.
    fn insert_top(&mut self, rows: Vec<Vec<String>>) {
        let older = std::mem::replace(&mut self.rows, rows);
        self.rows.extend(older);
    }

    pub fn is_daily(&self) -> bool {
        self.name.starts_with(DAILY_PREFIX)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name == name)
    }

    /// Insert new articles at the top of the source's sheet, creating the
    /// sheet on first use, then trim to [`MAX_SOURCE_ROWS`].
    pub fn append_source_articles(&mut self, source: &SourceDescriptor, records: &[ArticleRecord]) {
        if records.is_empty() {
            return;
        }
        let idx = match self.position(&source.id) {
            Some(i) => i,
            None => {
                let sheet = Sheet::new(&source.id, &source.display_name(), &source.color, &SOURCE_HEADERS);
                // Keep the index last when it already exists.
                let at = self.position(INDEX_SHEET).unwrap_or(self.sheets.len());
                self.sheets.insert(at, sheet);
                at
            }
        };
        let sheet = &mut self.sheets[idx];
        sheet.insert_top(
            records
                .iter()
                .map(|r| vec![r.title.clone(), r.link.clone(), r.date.clone().unwrap_or_default()])
                .collect(),
        );
        sheet.rows.truncate(MAX_SOURCE_ROWS);
        debug!(sheet = %source.id, added = records.len(), rows = sheet.rows.len(), "Updated source sheet");
    }

    /// Add today's digest entries, creating `Daily-Updates-<today>` as the
    /// first sheet if needed.
    pub fn append_daily(&mut self, today: &str, entries: &[DailyDigestEntry], color: &str) {
        let name = format!("{}{}", DAILY_PREFIX, today);
        let sheet = match self.position(&name) {
            Some(i) => self.sheets.remove(i),
            None => Sheet::new(&name, &format!("Daily Updates {}", today), color, &DAILY_HEADERS),
        };
        self.sheets.insert(0, sheet);
        self.sheets[0].insert_top(
            entries
                .iter()
                .map(|e| vec![e.source_display_name.clone(), e.title.clone(), e.link.clone()])
                .collect(),
        );
        info!(sheet = %name, added = entries.len(), "Updated daily digest");
    }

    /// Drop every digest sheet. Returns how many were removed.
    pub fn reset_daily(&mut self) -> usize {
        let before = self.sheets.len();
        self.sheets.retain(|s| !s.is_daily());
        let removed = before - self.sheets.len();
        if removed > 0 {
            info!(removed, "Reset daily digest");
        }
        removed
    }

    /// Rebuild the `Index` sheet listing every source sheet with its row
    /// count and newest date.
    pub fn rebuild_index(&mut self, color: &str) {
        self.sheets.retain(|s| s.name != INDEX_SHEET);
        let mut index = Sheet::new(INDEX_SHEET, INDEX_SHEET, color, &INDEX_HEADERS);
        index.rows = self
            .sheets
            .iter()
            .filter(|s| !s.is_daily())
            .map(|s| {
                let latest = s.rows.first().and_then(|r| r.get(2)).cloned().unwrap_or_default();
                vec![s.title.clone(), s.rows.len().to_string(), latest]
            })
            .collect();
        self.sheets.push(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::ExtractorKind;

    fn source(id: &str) -> SourceDescriptor {
        SourceDescriptor {
            id: id.into(),
            url: "https://x.test/".into(),
            extractor: ExtractorKind::Sozcu,
            color: "FFA07A".into(),
        }
    }

    fn rec(n: usize) -> ArticleRecord {
        ArticleRecord::new(format!("T{}", n), format!("https://x.test/{}", n), Some("16-10-26".into()))
    }

    fn entry(title: &str) -> DailyDigestEntry {
        DailyDigestEntry {
            source_display_name: "Deniz Zeyrek".into(),
            title: title.into(),
            link: format!("https://x.test/{}", title),
        }
    }

    #[test]
    fn test_source_sheet_created_and_styled() {
        let mut book = Workbook::default();
        book.append_source_articles(&source("Deniz-Zeyrek"), &[rec(1)]);
        let sheet = book.sheet("Deniz-Zeyrek").unwrap();
        assert_eq!(sheet.title, "Deniz Zeyrek");
        assert_eq!(sheet.header_color, "EB8C66");
        assert_eq!(sheet.headers, vec!["Title", "Link", "Date"]);
        assert_eq!(sheet.rows, vec![vec!["T1", "https://x.test/1", "16-10-26"]]);
    }

    #[test]
    fn test_new_rows_go_on_top_in_order_and_are_capped() {
        let mut book = Workbook::default();
        let s = source("Deniz-Zeyrek");
        book.append_source_articles(&s, &(10..60).map(rec).collect::<Vec<_>>());
        book.append_source_articles(&s, &[rec(1), rec(2)]);

        let rows = &book.sheet("Deniz-Zeyrek").unwrap().rows;
        assert_eq!(rows.len(), MAX_SOURCE_ROWS);
        assert_eq!(rows[0][0], "T1");
        assert_eq!(rows[1][0], "T2");
        assert_eq!(rows[2][0], "T10");
        assert_eq!(rows.last().unwrap()[0], "T57");
    }

    #[test]
    fn test_empty_batch_creates_nothing() {
        let mut book = Workbook::default();
        book.append_source_articles(&source("Deniz-Zeyrek"), &[]);
        assert!(book.sheets.is_empty());
    }

    #[test]
    fn test_daily_sheet_is_first_and_accumulates() {
        let mut book = Workbook::default();
        book.append_source_articles(&source("A"), &[rec(1)]);
        book.append_daily("17-10-26", &[entry("Sabah")], "FFD700");
        book.append_source_articles(&source("B"), &[rec(2)]);
        book.append_daily("17-10-26", &[entry("Öğle")], "FFD700");

        let names: Vec<_> = book.sheet_names().collect();
        assert_eq!(names, vec!["Daily-Updates-17-10-26", "A", "B"]);
        let daily = &book.sheets[0];
        assert_eq!(daily.headers, vec!["Author", "Title", "Link"]);
        assert_eq!(daily.rows[0][1], "Öğle");
        assert_eq!(daily.rows[1][1], "Sabah");
    }

    #[test]
    fn test_reset_daily_removes_old_digest() {
        let mut book = Workbook::default();
        book.append_daily("16-10-26", &[entry("Dün")], "FFD700");
        book.append_source_articles(&source("A"), &[rec(1)]);
        assert_eq!(book.reset_daily(), 1);
        assert_eq!(book.sheet_names().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(book.reset_daily(), 0);
    }

    #[test]
    fn test_index_lists_source_sheets() {
        let mut book = Workbook::default();
        book.append_source_articles(&source("A"), &[rec(1), rec(2)]);
        book.append_daily("17-10-26", &[entry("x")], "FFD700");
        book.rebuild_index("FFD700");
        book.append_source_articles(&source("B"), &[rec(3)]);
        book.rebuild_index("FFD700");

        let names: Vec<_> = book.sheet_names().collect();
        assert_eq!(names, vec!["Daily-Updates-17-10-26", "A", "B", "Index"]);
        let index = book.sheet(INDEX_SHEET).unwrap();
        assert_eq!(
            index.rows,
            vec![vec!["A", "2", "16-10-26"], vec!["B", "1", "16-10-26"]]
        );
    }
}
