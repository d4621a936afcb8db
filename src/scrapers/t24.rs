//! T24 author pages. No per-article date is shown, so these records are
//! undated and deduplicated by title and link.

use super::{clean_text, resolve_link};
use crate::models::ArticleRecord;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://t24.com.tr";

static ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.author-article-list a[href]").unwrap());

/// Extract T24 columns as undated records.
///
/// # Returns
/// Title and link of each entry under `div.author-article-list`.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|anchor| {
            let title = Some(clean_text(anchor)).filter(|t| !t.is_empty())?;
            let link = anchor.value().attr("href").and_then(|href| resolve_link(ORIGIN, href))?;
            Some(ArticleRecord::new(title, link, None))
        })
        .unique_by(|r| r.link.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undated_links() {
        let html = r#"
          <div class="author-article-list">
            <a href="/yazarlar/murat-sabuncu/gundem,1001">Gündem</a>
            <a href="/yazarlar/murat-sabuncu/gundem,1001">Gündem</a>
            <a href="/yazarlar/murat-sabuncu/bos,1000"> </a>
            <a href="/yazarlar/murat-sabuncu/basin,999">Basın</a>
          </div>
        "#;
        let records = extract(&Html::parse_document(html));
        assert_eq!(
            records,
            vec![
                ArticleRecord::new("Gündem", "https://t24.com.tr/yazarlar/murat-sabuncu/gundem,1001", None),
                ArticleRecord::new("Basın", "https://t24.com.tr/yazarlar/murat-sabuncu/basin,999", None),
            ]
        );
    }
}
