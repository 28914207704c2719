//! Errors and notices produced by the citation rules.

use serde::Serialize;
use thiserror::Error;

/// Errors that stop a citation from being formatted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CitationError {
    /// A required case-metadata field is absent or blank.
    #[error("case metadata is missing the required `{0}` field")]
    MissingField(&'static str),

    /// The input is present but cannot be read as a citation.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Result type alias for the citation rules.
pub type Result<T> = std::result::Result<T, CitationError>;

/// Conditions that reduce accuracy without stopping formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// No tier held a citation, so only the style of cause was rendered.
    NoMatch,

    /// A multi-word reporter was reassembled but matched nothing in the
    /// authority table.
    AmbiguousReporter { citation: String, reporter: String },
}
