//! mahfiegilmez.com, a Blogger site.
//!
//! The freshest post is rendered as a standalone `article.post` ahead of the
//! `article.post-outer-container` list, so both are read and unioned. The
//! byline is Blogger's `"<Month> <day>, <year>"`, sometimes preceded by the
//! weekday, and is reordered to `"<day> <Month> <year>"` before parsing.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link};
use crate::dates;
use crate::error::Result;
use crate::models::ArticleRecord;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

const ORIGIN: &str = "https://www.mahfiegilmez.com";

static TOP_POST: Lazy<Selector> = Lazy::new(|| Selector::parse("article.post").unwrap());
static POSTS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article.post-outer-container").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h3.post-title").unwrap());
static DATE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.byline.post-timestamp").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.timestamp-link[href]").unwrap());

/// Extract the featured post and the post list, featured first, each link
/// kept once.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&TOP_POST)
        .take(1)
        .chain(document.select(&POSTS))
        .filter_map(post)
        .unique_by(|r| r.link.clone())
        .collect()
}

fn post(item: ElementRef<'_>) -> Option<ArticleRecord> {
    let title = item.select(&TITLE).next().map(clean_text).filter(|t| !t.is_empty())?;
    let raw = item.select(&DATE).next().map(clean_text)?;
    let link = item
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| resolve_link(ORIGIN, href))?;
    let date = date_or_skip(blogger_date(&raw), &raw, ExtractorKind::MahfiEgilmez)?;
    Some(ArticleRecord::new(title, link, Some(date)))
}

/// `"Ekim 17, 2026"` / `"Cuma, Ekim 17, 2026"` → `"17-10-26"`.
fn blogger_date(raw: &str) -> Result<String> {
    let cleaned = dates::strip_weekday(&raw.replace(',', " "));
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    match parts.as_slice() {
        [month, day, year] if dates::month_number(month).is_some() => {
            dates::normalize_turkish_date(&format!("{} {} {}", day, month, year))
        }
        _ => dates::normalize_turkish_date(&cleaned),
    }
}
