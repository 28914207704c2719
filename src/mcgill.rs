//! The McGill 9e case citation rules.
//!
//! [`format_case`] runs the whole pipeline: the parallel citations are parsed,
//! every citation is sorted into a tier, the court designator is derived from
//! the case's own citation, and the winning citation is assembled with any
//! pinpoint. Nothing here performs I/O.

mod assemble;
pub mod casedata;
mod classify;
mod court;
mod error;
mod parallel;
mod pinpoint;
pub mod reporters;
mod year;
pub mod userreporters;

pub use assemble::assemble;
pub use casedata::{build_case_metadata, CaseMetadata, Language};
pub use classify::{classify, SortedCitations};
pub use court::{annotate_court, CourtAnnotationSource};
pub use error::{CitationError, Notice, Result};
pub use parallel::{parse_parallel_citations, ParsedCitation};
pub use pinpoint::Pinpoint;
pub use reporters::{standard_table, AuthorityTable, CitationTier};
pub use year::{annotate_year, AnnotatedStyle};

use serde::Serialize;
use slog::{debug, o, warn};

/// Everything produced for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedCitation {
    pub citation: String,
    pub pinpoint_citation: String,
    pub sorted: SortedCitations,
    pub court: Option<String>,
    pub notices: Vec<Notice>,
}

/// The citation formatter.
pub fn format_case(
    case: &CaseMetadata,
    parallel_citations: &str,
    pinpoint: &Pinpoint,
    table: &AuthorityTable,
) -> Result<FormattedCitation> {
    debug!(slog_scope::logger(), "Starting citation formatter...");

    // Parse the parallel citations
    let parsed = slog_scope::scope(
        &slog_scope::logger().new(o!("fn" => "parse_parallel_citations()")),
        || parse_parallel_citations(parallel_citations),
    );

    // Sort every citation into its tier
    let (sorted, mut notices) =
        slog_scope::scope(&slog_scope::logger().new(o!("fn" => "classify()")), || {
            classify(&case.citation, &parsed, table)
        })?;

    // Derive the court designator
    let court = slog_scope::scope(
        &slog_scope::logger().new(o!("fn" => "annotate_court()")),
        || annotate_court(&case.citation, case),
    );

    // Assemble the citation
    let (citation, pinpoint_citation) =
        slog_scope::scope(&slog_scope::logger().new(o!("fn" => "assemble()")), || {
            assemble(case, &sorted, pinpoint)
        })?;

    if sorted.winner().is_none() {
        warn!(slog_scope::logger(), "No citation tier had any entries");
        notices.push(Notice::NoMatch);
    }

    debug!(slog_scope::logger(), "Citation formatting completed.");
    Ok(FormattedCitation {
        citation,
        pinpoint_citation,
        sorted,
        court,
        notices,
    })
}
