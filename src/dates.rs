//! Turkish date normalisation.
//!
//! Every extractor ends up producing the same canonical `dd-mm-yy` string,
//! whatever the publisher prints: `"5 Ocak 2024"`, `"05 OCA 2024 Cuma"`,
//! `"2024-01-05T09:30:00+03:00"`, ...
//!
//! The two-digit year is the trailing two characters of whatever year the
//! page shows. No century window is applied.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Month names folded to ASCII lower case, in calendar order.
const MONTHS: [&str; 12] = [
    "ocak", "subat", "mart", "nisan", "mayis", "haziran", "temmuz", "agustos", "eylul", "ekim",
    "kasim", "aralik",
];

const WEEKDAYS: [&str; 7] = [
    "pazartesi",
    "sali",
    "carsamba",
    "persembe",
    "cuma",
    "cumartesi",
    "pazar",
];

static TIME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[:.]\d{2}(?:[:.]\d{2})?$").expect("valid time regex"));

static ISO_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{4})-(\d{2})-(\d{2})").expect("valid iso regex"));

/// Lower-case with Turkish dotted/dotless i rules, then drop diacritics.
///
/// `"EKİM"`, `"Ekim"` and `"ekim"` all become `"ekim"`; `"Ağustos"` and
/// `"AGUSTOS"` become `"agustos"`.
fn fold(token: &str) -> String {
    token
        .chars()
        .flat_map(|c| match c {
            'İ' | 'I' | 'ı' => vec!['i'],
            'Ç' | 'ç' => vec!['c'],
            'Ğ' | 'ğ' => vec!['g'],
            'Ö' | 'ö' => vec!['o'],
            'Ş' | 'ş' => vec!['s'],
            'Ü' | 'ü' => vec!['u'],
            'Â' | 'â' => vec!['a'],
            other => other.to_lowercase().collect(),
        })
        .collect()
}

fn bare(token: &str) -> &str {
    token.trim_matches(|c: char| c == ',' || c == '.')
}

/// Map a month name or its three-letter abbreviation to `"01"`..`"12"`.
pub fn month_number(token: &str) -> Option<String> {
    let folded = fold(bare(token));
    MONTHS
        .iter()
        .position(|m| *m == folded || (folded.len() == 3 && m.starts_with(&folded)))
        .map(|i| format!("{:02}", i + 1))
}

/// Convert `"<day> <month> <year>"` to `"dd-mm-yy"`.
///
/// Weekday names and times must already be removed (see [`strip_weekday`]
/// and [`strip_time`]).
pub fn normalize_turkish_date(raw: &str) -> Result<String> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(Error::DateParse(raw.to_string()));
    };

    let malformed = || Error::DateParse(raw.to_string());
    let day: u32 = bare(day).parse().map_err(|_| malformed())?;

    let month = month_number(month).ok_or_else(|| Error::UnrecognizedMonth {
        month: month.to_string(),
        raw: raw.to_string(),
    })?;

    let year = bare(year);
    if year.len() < 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let yy = &year[year.len() - 2..];

    // A two-digit year is checked as 20yy; the output keeps the page's digits.
    let full_year: i32 = if year.len() == 2 {
        2000 + yy.parse::<i32>().map_err(|_| malformed())?
    } else {
        year.parse().map_err(|_| malformed())?
    };
    let month_num: u32 = month.parse().map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(full_year, month_num, day).ok_or_else(malformed)?;

    Ok(format!("{:02}-{}-{}", day, month, yy))
}

/// Remove weekday tokens (`"Cuma"`, `"Salı,"`) wherever they appear.
pub fn strip_weekday(text: &str) -> String {
    text.split_whitespace()
        .filter(|t| !WEEKDAYS.contains(&fold(bare(t)).as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove time-of-day tokens such as `"11:05"` or `"09.30"`.
pub fn strip_time(text: &str) -> String {
    text.split_whitespace()
        .filter(|t| !TIME_TOKEN.is_match(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a text starting with `YYYY-MM-DD` (ISO date or date-time).
pub fn iso_to_canonical(text: &str) -> Result<String> {
    let caps = ISO_PREFIX
        .captures(text)
        .ok_or_else(|| Error::DateParse(text.to_string()))?;
    let date = NaiveDate::parse_from_str(
        &format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]),
        "%Y-%m-%d",
    )
    .map_err(|_| Error::DateParse(text.to_string()))?;
    Ok(canonical(date))
}

/// ISO when the text looks like ISO, Turkish written form otherwise.
pub fn normalize_any(text: &str) -> Result<String> {
    if ISO_PREFIX.is_match(text) {
        iso_to_canonical(text)
    } else {
        normalize_turkish_date(&strip_time(&strip_weekday(text)))
    }
}

/// Format a calendar date the canonical way.
pub fn canonical(date: NaiveDate) -> String {
    date.format("%d-%m-%y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_month_names() {
        assert_eq!(normalize_turkish_date("5 Ocak 2024").unwrap(), "05-01-24");
        assert_eq!(normalize_turkish_date("14 Şubat 2023").unwrap(), "14-02-23");
        assert_eq!(normalize_turkish_date("1 Mayıs 2024").unwrap(), "01-05-24");
        assert_eq!(normalize_turkish_date("30 Ağustos 2022").unwrap(), "30-08-22");
        assert_eq!(normalize_turkish_date("9 Eylül 2021").unwrap(), "09-09-21");
        assert_eq!(normalize_turkish_date("31 Aralık 2019").unwrap(), "31-12-19");
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(normalize_turkish_date("5 Oca 2024").unwrap(), "05-01-24");
        assert_eq!(normalize_turkish_date("12 Ağu 2024").unwrap(), "12-08-24");
        assert_eq!(normalize_turkish_date("3 Kas 2023").unwrap(), "03-11-23");
        assert_eq!(normalize_turkish_date("3 Eki. 2023").unwrap(), "03-10-23");
    }

    #[test]
    fn test_case_and_diacritic_variants() {
        assert_eq!(normalize_turkish_date("5 OCAK 2024").unwrap(), "05-01-24");
        assert_eq!(normalize_turkish_date("7 EKİM 2024").unwrap(), "07-10-24");
        assert_eq!(normalize_turkish_date("2 MAYIS 2024").unwrap(), "02-05-24");
        assert_eq!(normalize_turkish_date("2 Subat 2024").unwrap(), "02-02-24");
        assert_eq!(normalize_turkish_date("2 Kasim 2024").unwrap(), "02-11-24");
    }

    #[test]
    fn test_two_digit_year_is_kept() {
        assert_eq!(normalize_turkish_date("05 Mart 24").unwrap(), "05-03-24");
    }

    #[test]
    fn test_unknown_month() {
        match normalize_turkish_date("5 Xxxxx 2024") {
            Err(Error::UnrecognizedMonth { month, raw }) => {
                assert_eq!(month, "Xxxxx");
                assert_eq!(raw, "5 Xxxxx 2024");
            }
            other => panic!("expected UnrecognizedMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_shapes() {
        assert!(matches!(normalize_turkish_date("5 Ocak"), Err(Error::DateParse(_))));
        assert!(matches!(normalize_turkish_date("x Ocak 2024"), Err(Error::DateParse(_))));
        assert!(matches!(normalize_turkish_date("0 Ocak 2024"), Err(Error::DateParse(_))));
        assert!(matches!(normalize_turkish_date("5 Ocak 2k"), Err(Error::DateParse(_))));
        assert!(matches!(normalize_turkish_date(""), Err(Error::DateParse(_))));
    }

    #[test]
    fn test_strip_weekday_and_time() {
        assert_eq!(strip_weekday("5 Ocak 2024 Cuma"), "5 Ocak 2024");
        assert_eq!(strip_weekday("Salı, 9 Nisan 2024"), "9 Nisan 2024");
        assert_eq!(strip_weekday("10 Nisan 2024 ÇARŞAMBA"), "10 Nisan 2024");
        assert_eq!(strip_time("16 Mayıs 2023 11:00"), "16 Mayıs 2023");
        assert_eq!(strip_time("16 Mayıs 2023 09.30"), "16 Mayıs 2023");
    }

    #[test]
    fn test_iso() {
        assert_eq!(iso_to_canonical("2024-01-05").unwrap(), "05-01-24");
        assert_eq!(iso_to_canonical("2024-01-05 10:22:00").unwrap(), "05-01-24");
        assert_eq!(iso_to_canonical("2024-01-05T10:22:00+03:00").unwrap(), "05-01-24");
        assert!(iso_to_canonical("2024-13-05").is_err());
        assert!(iso_to_canonical("5 Ocak 2024").is_err());
    }

    #[test]
    fn test_impossible_calendar_dates() {
        assert!(matches!(normalize_turkish_date("31 Şubat 2024"), Err(Error::DateParse(_))));
        assert!(matches!(normalize_turkish_date("31 Nisan 2024"), Err(Error::DateParse(_))));
        assert!(matches!(normalize_turkish_date("29 Şubat 2023"), Err(Error::DateParse(_))));
        assert_eq!(normalize_turkish_date("29 Şubat 2024").unwrap(), "29-02-24");
        assert_eq!(normalize_turkish_date("29 Şub 24").unwrap(), "29-02-24");
    }

    #[test]
    fn test_normalize_any() {
        assert_eq!(normalize_any("2023-12-31T23:00:00").unwrap(), "31-12-23");
        assert_eq!(normalize_any("Pazar 31 Aralık 2023 23:00").unwrap(), "31-12-23");
    }
}
