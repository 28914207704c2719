//! This module decides whether the style of cause needs a year.
//!
//! McGill 9e adds the decision year in parentheses after the style of cause
//! when the citation does not begin with that year:
//!
//! 1. If the citation's year matches the decision year, nothing is added.
//! 2. If the citation has no year, the decision year is added.
//! 3. If the citation's year differs from the decision year, the decision year
//!    is added.
//!
//! Neutral citations always carry the decision year, so this never runs for
//! them.

use super::{
    casedata::CaseMetadata,
    error::{CitationError, Result},
};
use lazy_static::lazy_static;
use regex::Regex;
use slog::trace;
use std::fmt;

lazy_static! {
    /// Regex for a year in square brackets, e.g. `[2017]`.
    static ref BRACKETED_YEAR: Regex = Regex::new(r"\[(?P<year>[0-9]{4})\]").unwrap();

    /// Regex for a bare four-digit year, e.g. `2017` or `(2017),`.
    static ref BARE_YEAR: Regex = Regex::new(r"\b(?P<year>[0-9]{4})\b").unwrap();

    /// Regex for the year at the start of an ISO date.
    static ref DATE_YEAR: Regex = Regex::new(r"^(?P<year>[0-9]{4})(-|$)").unwrap();
}

/// A style of cause and the year, if any, to put after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedStyle {
    pub style_of_cause: String,
    pub year: Option<String>,
}

impl AnnotatedStyle {
    /// The italicized style of cause followed by any year.
    pub fn to_html(&self) -> String {
        match &self.year {
            Some(y) => format!("<em>{}</em> ({})", self.style_of_cause, y),
            None => format!("<em>{}</em>", self.style_of_cause),
        }
    }
}

impl fmt::Display for AnnotatedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.year {
            Some(y) => write!(f, "{} ({})", self.style_of_cause, y),
            None => f.write_str(&self.style_of_cause),
        }
    }
}

/// Annotate the style of cause for a non-neutral citation.
pub fn annotate_year(citation: &str, case: &CaseMetadata) -> Result<AnnotatedStyle> {
    let decision_year = decision_year(&case.decision_date)?;
    let reporter_year = citation_year(citation);

    trace!(
        slog_scope::logger(),
        "decision_year: {} reporter_year: {:?}",
        decision_year,
        reporter_year
    );

    let year = match reporter_year {
        Some(y) if y == decision_year => None,
        _ => Some(decision_year.to_string()),
    };

    Ok(AnnotatedStyle {
        style_of_cause: case.style_of_cause(),
        year,
    })
}

/// The year component of an ISO decision date.
pub fn decision_year(decision_date: &str) -> Result<&str> {
    DATE_YEAR
        .captures(decision_date.trim())
        .and_then(|caps| caps.name("year"))
        .map(|y| y.as_str())
        .ok_or_else(|| {
            CitationError::MalformedInput(format!(
                "decision date {:?} does not start with a four-digit year",
                decision_date
            ))
        })
}

/// The year at the start of a citation, if any.
///
/// Only the first token is examined. A bracketed year takes priority over a bare
/// one.
pub fn citation_year(citation: &str) -> Option<&str> {
    let first = citation.split_whitespace().next()?;

    BRACKETED_YEAR
        .captures(first)
        .or_else(|| BARE_YEAR.captures(first))
        .and_then(|caps| caps.name("year"))
        .map(|y| y.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcgill::casedata::Language;

    fn case(decision_date: &str) -> CaseMetadata {
        CaseMetadata::new("Jones v. Smith.", decision_date, "2020 ONCA 123", Language::En).unwrap()
    }

    mod years {
        use super::*;

        #[test]
        fn matching_year() {
            let style = annotate_year("2020 ONCA 123", &case("2020-05-01")).unwrap();

            assert_eq!(style.year, None);
            assert_eq!(style.to_string(), "Jones v Smith");
            assert_eq!(style.to_html(), "<em>Jones v Smith</em>");
        }

        #[test]
        fn different_year() {
            let style = annotate_year("2019 ONCA 123", &case("2020-05-01")).unwrap();

            assert_eq!(style.to_string(), "Jones v Smith (2020)");
            assert_eq!(style.to_html(), "<em>Jones v Smith</em> (2020)");
        }

        #[test]
        fn bracketed_matching_year() {
            let style = annotate_year("[2020] 2 SCR 1000", &case("2020-05-01")).unwrap();

            assert_eq!(style.year, None);
        }

        #[test]
        fn bracketed_different_year() {
            let style = annotate_year("[2021] 2 SCR 1000", &case("2020-05-01")).unwrap();

            assert_eq!(style.year.as_deref(), Some("2020"));
        }

        #[test]
        fn no_year() {
            let style = annotate_year("64 OR (3d) 1", &case("2020-05-01")).unwrap();

            assert_eq!(style.to_string(), "Jones v Smith (2020)");
        }

        #[test]
        fn parenthesized_year() {
            let style = annotate_year("(2020), 64 OR (3d) 1", &case("2020-05-01")).unwrap();

            assert_eq!(style.year, None);
        }

        #[test]
        fn year_outside_first_token_ignored() {
            assert_eq!(citation_year("EYB 2020-287963"), None);
            assert_eq!(citation_year(""), None);
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn iso_date() {
            assert_eq!(decision_year("2017-11-14").unwrap(), "2017");
            assert_eq!(decision_year("2017").unwrap(), "2017");
        }

        #[test]
        fn bad_date() {
            let err = annotate_year("2019 ONCA 123", &case("14/11/2017")).unwrap_err();

            assert!(matches!(err, CitationError::MalformedInput(_)));
            assert!(decision_year("20171-01-01").is_err());
        }

        #[test]
        fn non_ascii_digits() {
            let err = decision_year("٢٠١٧-11-14").unwrap_err();

            assert!(matches!(err, CitationError::MalformedInput(_)));
            assert_eq!(citation_year("[٢٠١٧] 2 SCR 1000"), None);
            assert_eq!(citation_year("٢٠١٧ ONCA 123"), None);
        }
    }
}
