// src/error.rs
//! Error kinds for the extraction engine.
//!
//! None of these is fatal to a run. Each is absorbed at a known place and
//! turned into an "unknown" field or an empty area mapping:
//! - [`ParseError`] and [`ExtractError::LinkUnavailable`] at the cell/row that raised them.
//! - [`ExtractError::StructureNotFound`] at the top of the dispatcher.
//! - [`FetchError`] per country document, or per area during backfill.
//!
//! [`ExportError`] is the exception: it is returned to the caller of the export.

use std::path::PathBuf;

use thiserror::Error;

/// Angle text does not match the degrees/minutes/seconds grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an angle: {input:?} ({reason})")]
pub struct ParseError {
    pub input: String,
    pub reason: &'static str,
}

impl ParseError {
    pub fn new(input: &str, reason: &'static str) -> Self {
        Self { input: s!(input), reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// None of the layouts the engine knows matched this document or node.
    #[error("structure not found: {0}")]
    StructureNotFound(&'static str),

    /// No anchor in the cell survived the image/citation filter.
    #[error("no usable link in cell")]
    LinkUnavailable,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Only produced by in-memory fetchers (tests, offline fixtures).
    #[error("no document for {0}")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
