//! This module sorts citations into the five McGill authority tiers.

use super::{
    error::{CitationError, Notice, Result},
    parallel::ParsedCitation,
    reporters::{AuthorityTable, CitationTier},
};
use serde::Serialize;
use slog::{debug, trace, warn};

/// The number of tokens in a neutral citation (year, court, number).
const NEUTRAL_TOKENS: usize = 3;

/// The number of trailing tokens in an SCR citation (`[2017] 2 SCR 1000`).
const OFFICIAL_TOKENS: usize = 4;

/// Citations sorted by tier, each bucket in the order the citations were
/// encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortedCitations {
    pub neutral: Vec<String>,
    pub official: Vec<String>,
    pub preferred: Vec<String>,
    pub authoritative: Vec<String>,
    pub unofficial: Vec<String>,
}

impl SortedCitations {
    /// The bucket for a tier.
    pub fn bucket(&self, tier: CitationTier) -> &[String] {
        match tier {
            CitationTier::Neutral => &self.neutral,
            CitationTier::Official => &self.official,
            CitationTier::Preferred => &self.preferred,
            CitationTier::Authoritative => &self.authoritative,
            CitationTier::Unofficial => &self.unofficial,
        }
    }

    fn bucket_mut(&mut self, tier: CitationTier) -> &mut Vec<String> {
        match tier {
            CitationTier::Neutral => &mut self.neutral,
            CitationTier::Official => &mut self.official,
            CitationTier::Preferred => &mut self.preferred,
            CitationTier::Authoritative => &mut self.authoritative,
            CitationTier::Unofficial => &mut self.unofficial,
        }
    }

    /// Add a citation to the end of a tier's bucket.
    pub fn push(&mut self, tier: CitationTier, citation: String) {
        trace!(slog_scope::logger(), "{}: {}", tier, citation);
        self.bucket_mut(tier).push(citation);
    }

    /// The first citation of the highest-precedence non-empty tier.
    pub fn winner(&self) -> Option<(CitationTier, &str)> {
        CitationTier::ALL
            .into_iter()
            .find_map(|tier| self.bucket(tier).first().map(|c| (tier, c.as_str())))
    }

    /// The total number of citations across every tier.
    pub fn len(&self) -> usize {
        CitationTier::ALL
            .into_iter()
            .map(|tier| self.bucket(tier).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort the case's own citation and the parallel citations.
///
/// The case's own citation supplies the neutral citation (when its second token
/// is a neutral court code) and, when it contains an SCR component, the
/// official citation; what remains of it is unofficial. Each parallel citation
/// then lands in the highest tier that lists its reporter. Returns the sorted
/// citations and any reporters that could not be trusted.
pub fn classify(
    case_citation: &str,
    parsed: &[ParsedCitation],
    table: &AuthorityTable,
) -> Result<(SortedCitations, Vec<Notice>)> {
    debug!(slog_scope::logger(), "Starting classification...");

    let tokens: Vec<&str> = case_citation.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(CitationError::MalformedInput(
            "the case citation is empty".to_string(),
        ));
    }

    let mut sorted = SortedCitations::default();
    let mut notices = Vec::new();

    // Neutral citation
    if tokens.get(1).map_or(false, |t| table.is_neutral_court(t)) {
        if tokens.len() < NEUTRAL_TOKENS {
            return Err(CitationError::MalformedInput(format!(
                "the neutral citation in {:?} is incomplete",
                case_citation
            )));
        }
        sorted.push(
            CitationTier::Neutral,
            join_tokens(&tokens[..NEUTRAL_TOKENS]),
        );
    }

    // Official reporter within the case's own citation
    if case_citation.contains("SCR") {
        if tokens.len() < OFFICIAL_TOKENS {
            return Err(CitationError::MalformedInput(format!(
                "the SCR citation in {:?} is incomplete",
                case_citation
            )));
        }
        let split = tokens.len() - OFFICIAL_TOKENS;
        sorted.push(CitationTier::Official, join_tokens(&tokens[split..]));
        if split > 0 {
            sorted.push(CitationTier::Unofficial, join_tokens(&tokens[..split]));
        }
    } else {
        sorted.push(CitationTier::Unofficial, join_tokens(&tokens));
    }

    // Parallel citations
    for citation in parsed {
        let tier = table
            .tier_of(&citation.reporter)
            .unwrap_or(CitationTier::Unofficial);

        if tier == CitationTier::Unofficial && citation.is_multiword() {
            warn!(
                slog_scope::logger(),
                "Reporter {:?} in {:?} may not have been read correctly",
                citation.reporter,
                citation.citation
            );
            notices.push(Notice::AmbiguousReporter {
                citation: citation.citation.clone(),
                reporter: citation.reporter.clone(),
            });
        }

        sorted.push(tier, citation.citation.clone());
    }

    debug!(
        slog_scope::logger(),
        "Classification completed ({} citations)",
        sorted.len()
    );
    Ok((sorted, notices))
}

/// Join tokens with spaces, dropping the comma that separates citations.
fn join_tokens(tokens: &[&str]) -> String {
    let joined = tokens.join(" ");
    joined.trim_end_matches(',').to_string()
}
