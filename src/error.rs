//! Crate-wide error type.
//!
//! Only configuration errors are meant to escape a run. Date errors are
//! raised per article and swallowed by the extractors, fetch failures never
//! become errors at all (see [`crate::fetch`]).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("Unrecognized month {month:?} in date {raw:?}")]
    UnrecognizedMonth { month: String, raw: String },

    #[error("Malformed date: {0:?}")]
    DateParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
