//! Yetkin Report (WordPress). No visible date; the permalink is
//! `/<yyyy>/<mm>/<dd>/<slug>/` and the date is read from there.

use super::{ExtractorKind, clean_text, date_or_skip, resolve_link};
use crate::dates;
use crate::error::{Error, Result};
use crate::models::ArticleRecord;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

const ORIGIN: &str = "https://yetkinreport.com";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.kl-blog-item-container").unwrap());
static TITLE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3.itemTitle.kl-blog-item-title a[href]").unwrap());

/// Extract the post list of a Yetkin Report page.
///
/// # Arguments
/// * `document` - the parsed author page
///
/// # Returns
/// Posts in page order, links resolved against the site origin and dated
/// from their permalink. Posts whose permalink carries no date are skipped.
pub fn extract(document: &Html) -> Vec<ArticleRecord> {
    document
        .select(&ITEM)
        .filter_map(|item| {
            let anchor = item.select(&TITLE_LINK).next()?;
            let title = Some(clean_text(anchor)).filter(|t| !t.is_empty())?;
            let link = anchor
                .value()
                .attr("href")
                .and_then(|href| resolve_link(ORIGIN, href))?;
            let date = date_or_skip(permalink_date(&link), &link, ExtractorKind::YetkinReport)?;
            Some(ArticleRecord::new(title, link, Some(date)))
        })
        .collect()
}

fn permalink_date(link: &str) -> Result<String> {
    let malformed = || Error::DateParse(link.to_string());
    let url = Url::parse(link).map_err(|_| malformed())?;
    let segments: Vec<&str> = url.path_segments().ok_or_else(malformed)?.collect();
    let [year, month, day, ..] = segments.as_slice() else {
        return Err(malformed());
    };
    let date = NaiveDate::from_ymd_opt(
        year.parse().map_err(|_| malformed())?,
        month.parse().map_err(|_| malformed())?,
        day.parse().map_err(|_| malformed())?,
    )
    .ok_or_else(malformed)?;
    Ok(dates::canonical(date))
}
