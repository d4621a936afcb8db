//! Hürriyet author pages (`hurriyet.com.tr/yazarlar/<author>/`).
//!
//! Each column sits in a `div.highlighted-box.mb20` card. The article path is
//! not on an anchor but on the card itself (`data-article-link`), relative to
//! the site origin. Dates read `"16 Mayıs 2023 11:00"`.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link, written_date};
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://www.hurriyet.com.tr";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.highlighted-box.mb20").unwrap());
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.title.title-news-detail").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.date").unwrap());

/// Extract every column card from a Hürriyet author page.
///
/// # Arguments
/// * `document` - the parsed author page
///
/// # Returns
/// One record per card in page order. Cards with no `data-article-link`, no
/// date or an unparsable date are skipped.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|item| {
            let title = item.select(&TITLE).next().map(clean_text).filter(|t| !t.is_empty())?;
            let link = item
                .value()
                .attr("data-article-link")
                .and_then(|href| resolve_link(ORIGIN, href))?;
            let raw = item.select(&DATE).next().map(clean_text)?;
            let date = date_or_skip(written_date(&raw), &raw, ExtractorKind::Hurriyet)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}
