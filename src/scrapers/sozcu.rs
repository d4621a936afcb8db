//! Sözcü author archive pages. Links are already absolute.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link, written_date};
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://www.sozcu.com.tr";

static LISTING: Lazy<Selector> = Lazy::new(|| Selector::parse("div.col-lg-8").unwrap());
static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("a.archive-item").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.title").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.date").unwrap());

/// Extract Sözcü archive entries.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    let Some(listing) = document.select(&LISTING).next() else {
        return Vec::new();
    };

    listing
        .select(&ITEM)
        .filter_map(|item| {
            let title = item.select(&TITLE).next().map(clean_text).filter(|t| !t.is_empty())?;
            let link = item.value().attr("href").and_then(|href| resolve_link(ORIGIN, href))?;
            let raw = item.select(&DATE).next().map(clean_text)?;
            let date = date_or_skip(written_date(&raw), &raw, ExtractorKind::Sozcu)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}
