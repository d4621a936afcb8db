//! Gazete Oksijen author pages: title and link live in the card heading.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link, written_date};
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://gazeteoksijen.com";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.col-12.col-md-6").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h5.card-title.fs-3").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.fs-7").unwrap());

/// Extract Gazete Oksijen columns. Cards without a readable date are skipped.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|item| {
            let heading = item.select(&HEADING).next()?;
            let title = Some(clean_text(heading)).filter(|t| !t.is_empty())?;
            let link = heading
                .select(&LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(ORIGIN, href))?;
            let raw = item.select(&DATE).next().map(clean_text)?;
            let date = date_or_skip(written_date(&raw), &raw, ExtractorKind::GazeteOksijen)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards() {
        let html = r#"
          <div class="row">
            <div class="col-12 col-md-6">
              <h5 class="card-title fs-3"><a href="/yazarlar/haluk-burumcekci/faiz-kararı">Faiz kararı</a></h5>
              <span class="fs-7">24 Temmuz 2025</span>
            </div>
            <div class="col-12 col-md-6">
              <h5 class="card-title fs-3">Linksiz başlık</h5>
              <span class="fs-7">23 Temmuz 2025</span>
            </div>
          </div>
        "#;
        let records = extract(&Html::parse_document(html));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Faiz kararı");
        assert!(records[0].link.starts_with("https://gazeteoksijen.com/yazarlar/haluk-burumcekci/"));
        assert_eq!(records[0].date.as_deref(), Some("24-07-25"));
    }
}
