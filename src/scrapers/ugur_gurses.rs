//! ugurses.net: only the first `<article>` (the freshest post) is read.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link};
use crate::dates;
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://ugurses.net";

static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("h2.entry-title a[href]").unwrap());
static TIME: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.posted-on time.entry-date.published[datetime]").unwrap());

/// Extract the freshest post, dated from its `datetime` attribute.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    let Some(article) = document.select(&ARTICLE).next() else {
        return Vec::new();
    };

    let record = (|| {
        let anchor = article.select(&TITLE_LINK).next()?;
        let title = Some(clean_text(anchor)).filter(|t| !t.is_empty())?;
        let link = anchor.value().attr("href").and_then(|href| resolve_link(ORIGIN, href))?;
        let raw = article.select(&TIME).next()?.value().attr("datetime")?;
        let date = date_or_skip(dates::iso_to_canonical(raw), raw, ExtractorKind::UgurGurses)?;
        Some(ArticleRecord::new(title, link, Some(date)))
    })();

    record.into_iter().collect()
}
