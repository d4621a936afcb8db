//! Perspektif author pages.
//!
//! Nothing useful is visible text: each `div.box` card carries schema.org
//! microdata as `<meta itemprop=... content=...>`. Cards nest, so the same
//! article can be seen twice and is kept once.

use super::{ExtractorKind, date_or_skip, resolve_link};
use crate::dates;
use crate::models::ArticleRecord;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

const ORIGIN: &str = "https://www.perspektif.online";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.box").unwrap());
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"meta[itemprop="name"]"#).unwrap());
static URL: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"meta[itemprop="url"]"#).unwrap());
static PUBLISHED: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[itemprop="datePublished"]"#).unwrap());

fn meta_content(item: ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .and_then(|m| m.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Extract articles from the microdata cards.
///
/// # Returns
/// One record per distinct article URL, in the order first seen.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|item| {
            let title = meta_content(item, &NAME)?;
            let link = meta_content(item, &URL).and_then(|href| resolve_link(ORIGIN, &href))?;
            let raw = meta_content(item, &PUBLISHED)?;
            let date = date_or_skip(dates::normalize_any(&raw), &raw, ExtractorKind::Perspektif)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .unique_by(|r| r.link.clone())
        .collect()
}
