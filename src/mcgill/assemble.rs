//! This module assembles the final citation from the sorted citations.

use super::{
    casedata::CaseMetadata,
    classify::SortedCitations,
    error::Result,
    pinpoint::Pinpoint,
    reporters::CitationTier,
    year::annotate_year,
};
use slog::{debug, o, trace, warn};

/// Build the citation---with and without a pinpoint.
///
/// The highest-precedence tier with a citation wins. A neutral citation is
/// followed by the first official citation, if any, and the pinpoint goes right
/// after the neutral citation. Any other winner gets a year-annotated style of
/// cause and the pinpoint at the end. If no tier has a citation, only the style
/// of cause is returned.
///
/// Like the long-cite builders, the citation is built as a pre-pinpoint and a
/// post-pinpoint part. The bare citation joins the two; the pinpoint citation
/// puts the pinpoint between them and closes with a period.
pub fn assemble(
    case: &CaseMetadata,
    sorted: &SortedCitations,
    pinpoint: &Pinpoint,
) -> Result<(String, String)> {
    debug!(slog_scope::logger(), "Starting assembly...");

    let mut cite_pre_pin = String::with_capacity(256);
    let mut cite_post_pin = String::with_capacity(256);

    match sorted.winner() {
        Some((CitationTier::Neutral, neutral)) => {
            add_italic_style(case, &mut cite_pre_pin);
            add_citation(neutral, &mut cite_pre_pin);
            if let Some(official) = sorted.bucket(CitationTier::Official).first() {
                add_citation(official, &mut cite_post_pin);
            }
        }
        Some((tier, citation)) => {
            let style = slog_scope::scope(
                &slog_scope::logger().new(o!("fn" => "annotate_year()")),
                || annotate_year(citation, case),
            )?;
            trace!(slog_scope::logger(), "{} citation wins: {}", tier, citation);
            cite_pre_pin.push_str(&style.to_html());
            add_citation(citation, &mut cite_pre_pin);
        }
        None => {
            warn!(
                slog_scope::logger(),
                "No citation found for {}; using the style of cause alone", case.title
            );
            add_italic_style(case, &mut cite_pre_pin);
        }
    }

    let mut citation = cite_pre_pin.clone();
    citation.push_str(&cite_post_pin);

    let mut pinpoint_citation = cite_pre_pin;
    pinpoint_citation.push_str(&pinpoint.to_string());
    pinpoint_citation.push_str(&cite_post_pin);
    pinpoint_citation.push('.');

    trace!(slog_scope::logger(), "citation: {}", citation);
    trace!(slog_scope::logger(), "pinpoint_citation: {}", pinpoint_citation);
    debug!(slog_scope::logger(), "Assembly completed");

    Ok((citation, pinpoint_citation))
}

/// Add the italicized style of cause with no year.
fn add_italic_style(case: &CaseMetadata, cite: &mut String) {
    cite.push_str("<em>");
    cite.push_str(&case.style_of_cause());
    cite.push_str("</em>");
}

/// Add a citation after a comma.
fn add_citation(citation: &str, cite: &mut String) {
    cite.push_str(", ");
    cite.push_str(citation);
}
