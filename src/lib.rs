//! # Up To Date News
//!
//! Collects newly published columns from a roster of Turkish news-site author
//! pages, works out which ones were not seen on the previous run, and keeps a
//! report workbook with one sheet per author, a daily digest and an index.
//!
//! ## Architecture
//!
//! 1. **Configuration**: [`config::Config`] (built-in or YAML roster), validated
//!    up front and loaded into a read-only [`registry::SourceRegistry`]
//! 2. **Fetching**: [`fetch::fetch`] downloads an author page through a
//!    [`fetch::PageFetcher`] and hands it to the source's
//!    [`scrapers::ExtractorKind`]
//! 3. **Diffing**: [`diff::diff`] compares the records against the
//!    [`state::Snapshot`] entry and yields the new ones plus the replacement
//!    entry
//! 4. **Reporting**: [`pipeline::write_report`] adds the new rows to the
//!    [`outputs::Workbook`], which is persisted as JSON and optionally
//!    rendered as Markdown
//!
//! Dates everywhere are canonical `dd-mm-yy` strings produced by [`dates`].

pub mod cli;
pub mod config;
pub mod dates;
pub mod diff;
pub mod error;
pub mod fetch;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod registry;
pub mod scrapers;
pub mod state;
pub mod utils;

pub use error::{Error, Result};
