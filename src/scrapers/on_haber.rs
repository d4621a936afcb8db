//! 10haber author pages.
//!
//! Date and title share one text node, `"5 Ocak 2024 - Başlık"`; only the
//! first `" - "` separates them, titles may contain more.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link, written_date};
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://10haber.net";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("p.card-text").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Split each `p.card-text` into date and title.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|item| {
            let text = clean_text(item);
            let (raw, title) = text.split_once(" - ")?;
            let title = title.trim();
            if title.is_empty() {
                return None;
            }
            let link = item
                .select(&LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(ORIGIN, href))?;
            let date = date_or_skip(written_date(raw), raw, ExtractorKind::OnHaber)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}
