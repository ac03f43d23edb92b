//! Feed provider trait and structured error types.
//!
//! The ScripMasterProvider trait abstracts over the upstream feed source so
//! the pipeline never touches HTTP directly and tests can substitute fixture
//! text.

use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for a run.
///
/// Fetch, parse, and write failures are all fatal for the run; row-level
/// skips are counted in [`super::parse::SkipCounts`] instead.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("feed returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("feed body is empty")]
    EmptyFeed,

    #[error("feed schema unrecognized: missing column '{column}'")]
    MissingColumn { column: String },

    #[error("csv error: {0}")]
    Csv(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json serialization error: {0}")]
    Json(String),
}

/// Trait for scrip-master sources.
///
/// Implementations own retries, timeouts, and transport specifics. The
/// pipeline only ever sees the raw CSV text or a [`FeedError`].
pub trait ScripMasterProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Where the data comes from (URL or fixture tag), recorded in the
    /// run manifest.
    fn source(&self) -> &str;

    /// Fetch the complete scrip-master CSV as text.
    fn fetch(&self) -> Result<String, FeedError>;
}
