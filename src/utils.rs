//! Small helpers shared by the run loop and the report writers.
//!
//! - Run-date stamping for the digest sheet
//! - Header colour shading
//! - String truncation for logging
//! - Data directory validation

use crate::dates;
use crate::error::Result;
use chrono::{DateTime, Local};
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// The run date in canonical `dd-mm-yy` form, local time.
pub fn run_date(now: &DateTime<Local>) -> String {
    dates::canonical(now.date_naive())
}

/// Shift each RGB channel of a six-digit hex colour by `amount`, clamped to
/// `0..=255`. Returns upper-case hex. Input that is not six hex digits comes
/// back unchanged.
///
/// ```ignore
/// assert_eq!(adjust_color("FFD700", -20), "EBC300");
/// ```
pub fn adjust_color(color: &str, amount: i16) -> String {
    if !crate::config::is_hex_color(color) {
        return color.to_string();
    }
    let channel = |i: usize| {
        let v = i16::from_str_radix(&color[i..i + 2], 16).unwrap_or(0);
        (v + amount).clamp(0, 255)
    };
    format!("{:02X}{:02X}{:02X}", channel(0), channel(2), channel(4))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at a character boundary at or below `max` bytes,
/// with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Data directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // 'ş' is two bytes; cutting at 3 would split the second one.
        let result = truncate_for_log("şşş", 3);
        assert_eq!(result, "ş…(+4 bytes)");
    }

    #[test]
    fn test_adjust_color() {
        assert_eq!(adjust_color("FFD700", -20), "EBC300");
        assert_eq!(adjust_color("1e90ff", -20), "0A7CEB");
        assert_eq!(adjust_color("0A0A0A", -20), "000000");
        assert_eq!(adjust_color("F0F0F0", 20), "FFFFFF");
        assert_eq!(adjust_color("gold", -20), "gold");
    }

    #[test]
    fn test_run_date() {
        let now = Local.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).single().unwrap();
        assert_eq!(run_date(&now), "17-10-26");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_writable_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert!(!nested.join("..__probe_write__").exists());
    }
}
