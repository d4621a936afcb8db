//! Command-line interface definitions.
//!
//! All arguments can be provided via command-line flags; the data directory
//! can also come from `NEWS_DATA_DIR`.

use clap::Parser;
use std::path::PathBuf;

/// Collect new columns from the configured author pages and update the report.
///
/// # Examples
///
/// ```sh
/// # Full run with the built-in roster
/// up_to_date_news -d ./data
///
/// # Two sources only, also rendering Markdown
/// up_to_date_news -s Murat-Yetkin -s Mahfi-Egilmez -m ./data/report.md
///
/// # Custom roster, nothing written
/// up_to_date_news -c roster.yaml --dry-run
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the workbook, snapshot and reset timestamp
    #[arg(short, long, env = "NEWS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Optional path to a YAML roster replacing the built-in one
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only process these source ids (repeatable)
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Also render the workbook as Markdown to this path
    #[arg(short, long)]
    pub markdown_output: Option<PathBuf>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fetch and diff, but persist nothing
    #[arg(long)]
    pub dry_run: bool,
}
