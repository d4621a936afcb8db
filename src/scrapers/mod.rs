//! Per-publisher page extractors.
//!
//! Each submodule knows one author-page layout and turns a parsed document
//! into [`ArticleRecord`]s, newest first, exactly as the page lists them.
//!
//! # Supported layouts
//!
//! | Kind | Module | Date source | Notes |
//! |------|--------|-------------|-------|
//! | `hurriyet` | [`hurriyet`] | `div.date` | link in `data-article-link`, time stripped |
//! | `sabah` | [`sabah`] | `span.postTime` | weekday stripped, relative links |
//! | `sozcu` | [`sozcu`] | `span.date` | archive list |
//! | `ekonomim` | [`ekonomim`] | `span.date` | author article list |
//! | `on_haber` | [`on_haber`] | card text | `"<date> - <title>"` |
//! | `gazete_oksijen` | [`gazete_oksijen`] | `span.fs-7` | |
//! | `mahfi_egilmez` | [`mahfi_egilmez`] | Blogger byline | top post outside the list |
//! | `haberturk` | [`haberturk`] | `<time>` | `"Güncelleme: "` prefix, ISO text |
//! | `yetkin_report` | [`yetkin_report`] | link path | `/YYYY/MM/DD/slug` |
//! | `perspektif` | [`perspektif`] | `itemprop` metas | everything in `<meta content>` |
//! | `para_analiz` | [`para_analiz`] | `span.yzr_dgr_trh` | |
//! | `ugur_gurses` | [`ugur_gurses`] | `time[datetime]` | freshest article only |
//! | `t24` | [`t24`] | none | undated, title+link dedup |
//!
//! # Failure tolerance
//!
//! Extractors never fail. A missing listing container yields nothing, an
//! item missing its title, link or (for dated kinds) date is skipped, and an
//! unparsable date skips that one item with a warning.

use crate::dates;
use crate::error::Result;
use crate::models::{ArticleRecord, DedupMode};
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

pub mod ekonomim;
pub mod gazete_oksijen;
pub mod haberturk;
pub mod hurriyet;
pub mod mahfi_egilmez;
pub mod on_haber;
pub mod para_analiz;
pub mod perspektif;
pub mod sabah;
pub mod sozcu;
pub mod t24;
pub mod ugur_gurses;
pub mod yetkin_report;

/// The fixed set of page layouts a source can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    Hurriyet,
    Sabah,
    Sozcu,
    Ekonomim,
    #[serde(alias = "10haber")]
    OnHaber,
    GazeteOksijen,
    MahfiEgilmez,
    Haberturk,
    YetkinReport,
    Perspektif,
    ParaAnaliz,
    UgurGurses,
    T24,
}

impl ExtractorKind {
    pub const ALL: [ExtractorKind; 13] = [
        ExtractorKind::Hurriyet,
        ExtractorKind::Sabah,
        ExtractorKind::Sozcu,
        ExtractorKind::Ekonomim,
        ExtractorKind::OnHaber,
        ExtractorKind::GazeteOksijen,
        ExtractorKind::MahfiEgilmez,
        ExtractorKind::Haberturk,
        ExtractorKind::YetkinReport,
        ExtractorKind::Perspektif,
        ExtractorKind::ParaAnaliz,
        ExtractorKind::UgurGurses,
        ExtractorKind::T24,
    ];

    /// Run this layout's extraction over `document`.
    pub fn extract(&self, document: &Html) -> Vec<ArticleRecord> {
        match self {
            ExtractorKind::Hurriyet => hurriyet::extract(document),
            ExtractorKind::Sabah => sabah::extract(document),
            ExtractorKind::Sozcu => sozcu::extract(document),
            ExtractorKind::Ekonomim => ekonomim::extract(document),
            ExtractorKind::OnHaber => on_haber::extract(document),
            ExtractorKind::GazeteOksijen => gazete_oksijen::extract(document),
            ExtractorKind::MahfiEgilmez => mahfi_egilmez::extract(document),
            ExtractorKind::Haberturk => haberturk::extract(document),
            ExtractorKind::YetkinReport => yetkin_report::extract(document),
            ExtractorKind::Perspektif => perspektif::extract(document),
            ExtractorKind::ParaAnaliz => para_analiz::extract(document),
            ExtractorKind::UgurGurses => ugur_gurses::extract(document),
            ExtractorKind::T24 => t24::extract(document),
        }
    }

    pub fn dedup_mode(&self) -> DedupMode {
        match self {
            ExtractorKind::T24 => DedupMode::Undated,
            _ => DedupMode::Dated,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExtractorKind::Hurriyet => "hurriyet",
            ExtractorKind::Sabah => "sabah",
            ExtractorKind::Sozcu => "sozcu",
            ExtractorKind::Ekonomim => "ekonomim",
            ExtractorKind::OnHaber => "on_haber",
            ExtractorKind::GazeteOksijen => "gazete_oksijen",
            ExtractorKind::MahfiEgilmez => "mahfi_egilmez",
            ExtractorKind::Haberturk => "haberturk",
            ExtractorKind::YetkinReport => "yetkin_report",
            ExtractorKind::Perspektif => "perspektif",
            ExtractorKind::ParaAnaliz => "para_analiz",
            ExtractorKind::UgurGurses => "ugur_gurses",
            ExtractorKind::T24 => "t24",
        }
    }
}

/// Element text with runs of whitespace collapsed.
pub(crate) fn clean_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve `href` against the publisher origin; absolute links pass through.
pub(crate) fn resolve_link(origin: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let base = Url::parse(origin).ok()?;
    base.join(href).ok().map(String::from)
}

/// Keep a parsed date, or log the offending raw text and drop the item.
pub(crate) fn date_or_skip(parsed: Result<String>, raw: &str, kind: ExtractorKind) -> Option<String> {
    match parsed {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(kind = kind.name(), raw = %raw, error = %e, "Skipping article with unparsable date");
            None
        }
    }
}

/// Turkish written date after removing weekday and time tokens.
pub(crate) fn written_date(raw: &str) -> Result<String> {
    dates::normalize_turkish_date(&dates::strip_time(&dates::strip_weekday(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_link() {
        assert_eq!(
            resolve_link("https://www.sabah.com.tr", "/yazarlar/a/2024/01/05/b").as_deref(),
            Some("https://www.sabah.com.tr/yazarlar/a/2024/01/05/b")
        );
        assert_eq!(
            resolve_link("https://www.sabah.com.tr", "https://other.test/x").as_deref(),
            Some("https://other.test/x")
        );
        assert_eq!(resolve_link("https://www.sabah.com.tr", "  "), None);
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<p>  Bir \n  <b>iki</b>\tüç </p>");
        let sel = scraper::Selector::parse("p").unwrap();
        let p = doc.select(&sel).next().unwrap();
        assert_eq!(clean_text(p), "Bir iki üç");
    }

    #[test]
    fn test_every_kind_tolerates_empty_document() {
        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        for kind in ExtractorKind::ALL {
            assert!(kind.extract(&doc).is_empty(), "{} returned records", kind.name());
        }
    }

    #[test]
    fn test_only_t24_is_undated() {
        for kind in ExtractorKind::ALL {
            let expected = if kind == ExtractorKind::T24 {
                DedupMode::Undated
            } else {
                DedupMode::Dated
            };
            assert_eq!(kind.dedup_mode(), expected);
        }
    }

    #[test]
    fn test_kind_names_round_trip_through_serde() {
        for kind in ExtractorKind::ALL {
            let yaml = serde_yaml::to_string(&kind).unwrap();
            assert_eq!(yaml.trim(), kind.name());
        }
        let legacy: ExtractorKind = serde_yaml::from_str("10haber").unwrap();
        assert_eq!(legacy, ExtractorKind::OnHaber);
    }
}
