//! Paraanaliz author pages. Columns are `<li>` entries with an `<h2>` link.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link, written_date};
use crate::models::ArticleRecord;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://www.paraanaliz.com";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("h2 a[href]").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.yzr_dgr_trh").unwrap());

/// Extract Paraanaliz columns from the `<li>` listing.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|item| {
            let anchor = item.select(&TITLE_LINK).next()?;
            let title = Some(clean_text(anchor)).filter(|t| !t.is_empty())?;
            let link = anchor.value().attr("href").and_then(|href| resolve_link(ORIGIN, href))?;
            let raw = item.select(&DATE).next().map(clean_text)?;
            let date = date_or_skip(written_date(&raw), &raw, ExtractorKind::ParaAnaliz)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .unique_by(|r| r.link.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_entries_with_heading_links() {
        let html = r#"
          <ul>
            <li><a href="/">Ana sayfa</a></li>
            <li>
              <h2><a href="https://www.paraanaliz.com/2026/yazarlar/atilla-yesilada/kur-123/">Kur</a></h2>
              <span class="yzr_dgr_trh">14 Ekim 2026</span>
            </li>
            <li><h2><a href="/tarihsiz/">Tarihsiz</a></h2></li>
          </ul>
        "#;
        let records = extract(&Html::parse_document(html));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Kur");
        assert_eq!(records[0].date.as_deref(), Some("14-10-26"));
    }
}
