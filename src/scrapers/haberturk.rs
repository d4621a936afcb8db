//! Habertürk special-content author pages.
//!
//! The `<time>` text carries an update marker and an ISO timestamp:
//! `"Güncelleme: 2024-01-05 10:22:00"`.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link};
use crate::dates;
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const ORIGIN: &str = "https://www.haberturk.com";
const UPDATED_PREFIX: &str = "Güncelleme:";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li.mb-16.pb-8.border-b").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h3.text-2xl.font-black").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.block[href]").unwrap());
static TIME: Lazy<Selector> = Lazy::new(|| Selector::parse("time").unwrap());

/// Extract the column list of a Habertürk author page.
///
/// # Arguments
/// * `document` - the parsed author page
///
/// # Returns
/// Records with the date taken from the ISO timestamp in `<time>`, links
/// resolved against the site origin.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|item| {
            let title = item.select(&TITLE).next().map(clean_text).filter(|t| !t.is_empty())?;
            let link = item
                .select(&LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_link(ORIGIN, href))?;
            let raw = item.select(&TIME).next().map(clean_text)?;
            let text = raw.trim_start_matches(UPDATED_PREFIX).trim();
            let date = date_or_skip(dates::normalize_any(text), &raw, ExtractorKind::Haberturk)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_prefix_and_iso_time() {
        let html = r#"
          <ul>
            <li class="mb-16 pb-8 border-b dark:border-gray-800">
              <a class="block" href="/nagehan-alci/yeni-anayasa-1">
                <h3 class="text-2xl max-w-lg mb-3 font-black">Yeni anayasa</h3>
              </a>
              <time>Güncelleme: 2026-10-17 10:22:00</time>
            </li>
            <li class="mb-16 pb-8 border-b dark:border-gray-800">
              <a class="block" href="/nagehan-alci/secim-2">
                <h3 class="text-2xl max-w-lg mb-3 font-black">Seçim</h3>
              </a>
              <time>2026-10-16 08:00:00</time>
            </li>
            <li class="mb-16 pb-8 border-b dark:border-gray-800">
              <a class="block" href="/nagehan-alci/bozuk-3">
                <h3 class="text-2xl max-w-lg mb-3 font-black">Bozuk</h3>
              </a>
              <time>dün</time>
            </li>
          </ul>
        "#;
        let records = extract(&Html::parse_document(html));
        assert_eq!(
            records,
            vec![
                ArticleRecord::new(
                    "Yeni anayasa",
                    "https://www.haberturk.com/nagehan-alci/yeni-anayasa-1",
                    Some("17-10-26".into())
                ),
                ArticleRecord::new(
                    "Seçim",
                    "https://www.haberturk.com/nagehan-alci/secim-2",
                    Some("16-10-26".into())
                ),
            ]
        );
    }
}
