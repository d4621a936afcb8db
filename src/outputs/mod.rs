//! Report generation: the workbook model and its on-disk renderings.
//!
//! # Submodules
//!
//! - [`workbook`]: sheets, row insertion, digest and index maintenance
//! - [`json`]: reads and writes the workbook as JSON
//! - [`markdown`]: renders the workbook as a Markdown document
//!
//! # Output Structure
//!
//! ```text
//! data_dir/
//! ├── Up_To_Date_NEWS.json   # workbook
//! ├── past_articles.txt      # dedup snapshot
//! └── last_reset.txt         # digest reset timestamp
//! ```

pub mod json;
pub mod markdown;
pub mod workbook;

pub use workbook::{Sheet, Workbook};
