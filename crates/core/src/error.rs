//! Error types for Scrutari operations.
//!
//! This module defines the main error type [`ScrutariError`] which represents
//! all possible errors that can occur during fetching, extraction, and
//! analysis, together with the [`FailureKind`] taxonomy used by the
//! extraction error log.
//!
//! # Example
//!
//! ```rust
//! use scrutari_core::{ScrutariError, Result};
//!
//! fn first_line(artifact: &str) -> Result<&str> {
//!     artifact
//!         .lines()
//!         .next()
//!         .ok_or_else(|| ScrutariError::MalformedArtifact("<inline>".into()))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extraction and analysis operations.
///
/// This enum represents all possible errors that can occur during HTTP
/// fetching, HTML parsing, artifact handling, and tabular I/O.
#[derive(Error, Debug)]
pub enum ScrutariError {
    /// HTTP transport errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems. Timeouts are reported separately
    /// as [`ScrutariError::Timeout`].
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Non-success HTTP response status.
    ///
    /// Returned when the server answers with a status outside the 2xx range.
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when HTML cannot be queried, usually due to an invalid
    /// CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// An article artifact that cannot be split into title and body.
    #[error("Malformed article artifact: {0}")]
    MalformedArtifact(PathBuf),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A required column is absent from the input table.
    #[error("Input table is missing required column: {0}")]
    MissingColumn(String),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tabular read/write errors.
    #[error("Tabular I/O error: {0}")]
    Csv(#[from] csv::Error),
}

/// Classification of a failed extraction for the error log.
///
/// The kind is fixed by the error variant constructed at the point of
/// failure; it is never recovered from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request exceeded the configured timeout.
    Timeout,
    /// The server responded with a non-2xx status.
    Http,
    /// Anything else that went wrong while fetching or parsing the page.
    ParsingOrOther,
    /// Failures outside the fetch/parse path, e.g. writing the artifact.
    Unknown,
}

impl FailureKind {
    /// Label used in the `Error_Type` column of the error log.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "Timeout",
            FailureKind::Http => "HTTP",
            FailureKind::ParsingOrOther => "ParsingOrOther",
            FailureKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ScrutariError {
    /// Maps this error to its [`FailureKind`] for the extraction error log.
    ///
    /// Transport errors other than timeouts land in `ParsingOrOther`, which
    /// matches how a batch run groups connection failures with parse
    /// failures; artifact-write and other I/O problems land in `Unknown`.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            ScrutariError::Timeout { .. } => FailureKind::Timeout,
            ScrutariError::HttpStatus { .. } => FailureKind::Http,
            #[cfg(feature = "fetch")]
            ScrutariError::HttpError(_) => FailureKind::ParsingOrOther,
            ScrutariError::InvalidUrl(_)
            | ScrutariError::HtmlParseError(_)
            | ScrutariError::MalformedArtifact(_) => FailureKind::ParsingOrOther,
            ScrutariError::FileNotFound(_)
            | ScrutariError::MissingColumn(_)
            | ScrutariError::Io(_)
            | ScrutariError::Csv(_) => FailureKind::Unknown,
        }
    }
}

/// Result type alias for ScrutariError.
///
/// This is a convenience alias for `std::result::Result<T, ScrutariError>`.
pub type Result<T> = std::result::Result<T, ScrutariError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScrutariError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = ScrutariError::Timeout { timeout: 15 };
        assert!(err.to_string().contains("15"));
        assert_eq!(err.failure_kind(), FailureKind::Timeout);
    }

    #[test]
    fn test_http_status_kind() {
        let err = ScrutariError::HttpStatus { status: 404 };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.failure_kind(), FailureKind::Http);
    }

    #[test]
    fn test_parse_errors_classify_as_parsing_or_other() {
        let err = ScrutariError::HtmlParseError("bad selector".to_string());
        assert_eq!(err.failure_kind(), FailureKind::ParsingOrOther);

        let err = ScrutariError::InvalidUrl("nope".to_string());
        assert_eq!(err.failure_kind(), FailureKind::ParsingOrOther);
    }

    #[test]
    fn test_io_classifies_as_unknown() {
        let err = ScrutariError::Io(std::io::Error::other("disk full"));
        assert_eq!(err.failure_kind(), FailureKind::Unknown);
    }

    #[test]
    fn test_failure_kind_labels() {
        assert_eq!(FailureKind::Timeout.to_string(), "Timeout");
        assert_eq!(FailureKind::Http.to_string(), "HTTP");
        assert_eq!(FailureKind::ParsingOrOther.to_string(), "ParsingOrOther");
        assert_eq!(FailureKind::Unknown.to_string(), "Unknown");
    }
}
