//! Ekonomim author pages. Several columnists share this layout.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link, written_date};
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://www.ekonomim.com";

static LISTING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.author-article_list").unwrap());
static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.left-side").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.date").unwrap());

/// Extract the column cards of an Ekonomim author page, in page order.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    let Some(listing) = document.select(&LISTING).next() else {
        return Vec::new();
    };

    listing
        .select(&ITEM)
        .filter_map(|item| {
            let anchor = item.select(&ANCHOR).next()?;
            let title = Some(clean_text(anchor)).filter(|t| !t.is_empty())?;
            let link = anchor.value().attr("href").and_then(|href| resolve_link(ORIGIN, href))?;
            let raw = item.select(&DATE).next().map(clean_text)?;
            let date = date_or_skip(written_date(&raw), &raw, ExtractorKind::Ekonomim)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_article_list() {
        let html = r#"
          <div class="col-12 col-lg mw0 author-article_list">
            <div class="left-side">
              <a href="/kose-yazilari/butce-acigi/700001">Bütçe açığı</a>
              <span class="date">3 Kasım 2025</span>
            </div>
            <div class="left-side">
              <a href="/kose-yazilari/bozuk/700000">Bozuk</a>
              <span class="date">Kasım 2025</span>
            </div>
          </div>
        "#;
        let records = extract(&Html::parse_document(html));
        assert_eq!(
            records,
            vec![ArticleRecord::new(
                "Bütçe açığı",
                "https://www.ekonomim.com/kose-yazilari/butce-acigi/700001",
                Some("03-11-25".into())
            )]
        );
    }
}
