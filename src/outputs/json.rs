//! JSON persistence of the report workbook.
//!
//! The whole [`Workbook`] is one pretty-printed JSON document,
//! `<data-dir>/Up_To_Date_NEWS.json`, read at the start of a run and
//! rewritten at the end.

use super::workbook::Workbook;
use crate::error::Result;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

pub const WORKBOOK_FILE: &str = "Up_To_Date_NEWS.json";

/// Read the workbook; a missing file is an empty workbook.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn read_workbook(path: impl AsRef<Path>) -> Result<Workbook> {
    match fs::read_to_string(path.as_ref()).await {
        Ok(text) => {
            let book: Workbook = serde_json::from_str(&text)?;
            info!(sheets = book.sheets.len(), "Loaded workbook");
            Ok(book)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No workbook yet; starting empty");
            Ok(Workbook::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Write the workbook, creating the parent directory if needed.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn write_workbook(book: &Workbook, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(book)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create workbook dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(sheets = book.sheets.len(), "Wrote workbook");
    Ok(())
}
