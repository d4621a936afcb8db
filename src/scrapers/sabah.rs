//! Sabah author archives (`sabah.com.tr/yazarlar/<author>/arsiv?getall=true`).
//!
//! Only the `div.col-sm-12.view20` listing holds columns; other `col-sm-12`
//! blocks on the page are navigation. Dates end with the weekday:
//! `"5 Ocak 2024 Cuma"`.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link, written_date};
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://www.sabah.com.tr";

static LISTING: Lazy<Selector> = Lazy::new(|| Selector::parse("div.col-sm-12.view20").unwrap());
static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.col-sm-12").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("strong.postCaption").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.postTime").unwrap());

/// Extract the archive listing of a Sabah author.
///
/// # Arguments
/// * `document` - the parsed archive page
///
/// # Returns
/// Records in listing order; navigation blocks are ignored.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    let Some(listing) = document.select(&LISTING).next() else {
        return Vec::new();
    };

    listing
        .select(&ITEM)
        .filter_map(|item| {
            let title = item.select(&TITLE).next().map(clean_text).filter(|t| !t.is_empty())?;
            let link = item
                .select(&LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(ORIGIN, href))?;
            let raw = item.select(&DATE).next().map(clean_text)?;
            let date = date_or_skip(written_date(&raw), &raw, ExtractorKind::Sabah)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}
