//! Markdown rendering of the report workbook.
//!
//! One `##` section per sheet, in workbook order, each a pipe table with the
//! sheet's headers. Link columns become Markdown links.

use super::workbook::{Sheet, Workbook};
use crate::error::Result;
use std::fmt::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn render_cell(header: &str, value: &str) -> String {
    if header == "Link" && !value.is_empty() {
        format!("[link]({})", value.replace(')', "%29"))
    } else {
        escape_cell(value)
    }
}

fn render_sheet(md: &mut String, sheet: &Sheet) {
    let _ = writeln!(md, "## {}\n", sheet.title);
    let _ = writeln!(md, "| {} |", sheet.headers.join(" | "));
    let _ = writeln!(md, "|{}", "---|".repeat(sheet.headers.len()));
    for row in &sheet.rows {
        let cells: Vec<String> = sheet
            .headers
            .iter()
            .zip(row)
            .map(|(h, v)| render_cell(h, v))
            .collect();
        let _ = writeln!(md, "| {} |", cells.join(" | "));
    }
    md.push('\n');
}

pub fn workbook_to_markdown(book: &Workbook, generated: &str) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Up To Date News\n");
    let _ = writeln!(md, "_Updated {}_\n", generated);
    for sheet in &book.sheets {
        render_sheet(&mut md, sheet);
    }
    md
}

#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn write_markdown(book: &Workbook, generated: &str, path: impl AsRef<Path>) -> Result<()> {
    let md = workbook_to_markdown(book, generated);
    fs::write(path.as_ref(), md).await?;
    info!(sheets = book.sheets.len(), "Wrote Markdown report");
    Ok(())
}
