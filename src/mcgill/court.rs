//! This module builds the court and jurisdiction parenthetical.
//!
//! CanLII citations end with a parenthetical such as `(ON SC)` or `(SCC)`.
//! McGill wants the jurisdiction in its own abbreviated form, so `(ON SC)`
//! becomes `(Ont SC)`. Only CanLII citations are handled; anything else is left
//! for the user to complete.

use super::{casedata::CaseMetadata, reporters::JURISDICTIONS};
use slog::trace;

/// Where a court designator can come from.
#[derive(Debug, PartialEq, Eq)]
pub enum CourtAnnotationSource {
    /// A CanLII citation, with the alphanumeric fragments of its parenthesized
    /// tokens.
    CanLii(Vec<String>),
    /// Any other citation.
    Other,
}

impl CourtAnnotationSource {
    /// Determine the source of a citation.
    pub fn of(citation: &str) -> CourtAnnotationSource {
        if citation.split_whitespace().any(|t| t == "CanLII") {
            let fragments = citation
                .split_whitespace()
                .filter(|t| t.contains('(') || t.contains(')'))
                .map(|t| t.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
                .filter(|f| !f.is_empty())
                .collect();
            CourtAnnotationSource::CanLii(fragments)
        } else {
            CourtAnnotationSource::Other
        }
    }
}

/// The McGill court designator for a citation, if one can be derived.
///
/// One fragment is used as is. Two fragments are read as a CanLII jurisdiction
/// code and a court, and the code is replaced with the McGill abbreviation in
/// the language of the decision.
pub fn annotate_court(citation: &str, case: &CaseMetadata) -> Option<String> {
    let designator = match CourtAnnotationSource::of(citation) {
        CourtAnnotationSource::CanLii(fragments) => match fragments.as_slice() {
            [court] => Some(format!("({})", court)),
            [jurisdiction, court] => JURISDICTIONS
                .get(jurisdiction.as_str())
                .map(|j| format!("({} {})", j.abbreviation(case.language), court)),
            _ => None,
        },
        CourtAnnotationSource::Other => None,
    };

    trace!(slog_scope::logger(), "court designator: {:?}", designator);
    designator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcgill::casedata::Language;

    fn case(citation: &str, language: Language) -> CaseMetadata {
        CaseMetadata::new("A v B", "2004-01-01", citation, language).unwrap()
    }

    #[test]
    fn source() {
        assert_eq!(
            CourtAnnotationSource::of("2004 CanLII 12345 (ON SC)"),
            CourtAnnotationSource::CanLii(vec!["ON".to_string(), "SC".to_string()])
        );
        assert_eq!(
            CourtAnnotationSource::of("2004 ONCA 1"),
            CourtAnnotationSource::Other
        );
        // The token must be exactly `CanLII`.
        assert_eq!(
            CourtAnnotationSource::of("2004 CanLIIDocs 1 (ON)"),
            CourtAnnotationSource::Other
        );
    }

    #[test]
    fn single_fragment() {
        let citation = "1999 CanLII 700 (SCC)";

        assert_eq!(
            annotate_court(citation, &case(citation, Language::En)).as_deref(),
            Some("(SCC)")
        );
    }

    #[test]
    fn jurisdiction_and_court() {
        let citation = "2004 CanLII 12345 (ON SC)";

        assert_eq!(
            annotate_court(citation, &case(citation, Language::En)).as_deref(),
            Some("(Ont SC)")
        );
    }

    #[test]
    fn french_abbreviation() {
        let citation = "2010 CanLII 5 (NB CA)";

        assert_eq!(
            annotate_court(citation, &case(citation, Language::Fr)).as_deref(),
            Some("(N-B CA)")
        );
        assert_eq!(
            annotate_court(citation, &case(citation, Language::En)).as_deref(),
            Some("(NB CA)")
        );
    }

    #[test]
    fn unknown_jurisdiction() {
        let citation = "2004 CanLII 12345 (XX SC)";

        assert_eq!(annotate_court(citation, &case(citation, Language::En)), None);
    }

    #[test]
    fn not_canlii() {
        let citation = "2017 SCC 60, [2017] 2 SCR 1000";

        assert_eq!(annotate_court(citation, &case(citation, Language::En)), None);
    }

    #[test]
    fn no_parenthetical() {
        let citation = "2004 CanLII 12345";

        assert_eq!(annotate_court(citation, &case(citation, Language::En)), None);
    }

    #[test]
    fn too_many_fragments() {
        let citation = "2004 CanLII 12345 (ON SC) (QL)";

        assert_eq!(annotate_court(citation, &case(citation, Language::En)), None);
    }
}
