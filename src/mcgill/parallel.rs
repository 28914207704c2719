//! This module contains the parallel-citation parser. It converts a block of
//! citations copied from CanLII into discrete citation/reporter pairs.
//!
//! CanLII lists parallel citations separated by a long dash (—), e.g.
//!
//! ```text
//! [2017] SCJ No 60 (QL) — EYB 2017-287963 — 142 WCB (2d) 343
//! ```
//!
//! Each segment becomes one [`ParsedCitation`]. The reporter is whatever
//! alphabetic fragments the segment contains, joined by spaces. This reassembles
//! multi-word abbreviations like `Sask R`, but it cannot tell a reporter from
//! other words in the citation, and abbreviations containing non-alphabetic
//! characters (`Nfld & PEIR`) come out wrong. Those cases are flagged by the
//! classifier rather than fixed here.

use lazy_static::lazy_static;
use regex::Regex;
use slog::{debug, trace};

/// The separator CanLII places between parallel citations.
pub const LONG_DASH: char = '—';

/// Tokens dropped from the citation text.
const EXCLUDED_CITATION_ITEMS: [&str; 1] = ["(QL)"];

/// Alphabetic tokens that are never part of a reporter.
const EXCLUDED_REPORTER_ITEMS: [&str; 2] = ["No", "no"];

lazy_static! {
    /// Regex for a bracketed year token, e.g. `[2003]`.
    static ref BRACKETED_YEAR: Regex = Regex::new(r"^\[(?P<year>[0-9]{4})\]$").unwrap();
}

/// A single parallel citation and the reporter found in it.
///
/// `reporter` is empty when the citation has no alphabetic fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCitation {
    pub citation: String,
    pub reporter: String,
}

impl ParsedCitation {
    /// Whether the reporter was reassembled from more than one fragment.
    pub fn is_multiword(&self) -> bool {
        self.reporter.contains(' ')
    }
}

/// The main parser function.
///
/// Blank input produces no citations. Input without a long dash is a single
/// citation. Blank segments between dashes are dropped.
pub fn parse_parallel_citations(raw: &str) -> Vec<ParsedCitation> {
    debug!(slog_scope::logger(), "Starting parallel citation parser...");

    if raw.trim().is_empty() {
        debug!(slog_scope::logger(), "No parallel citations");
        return Vec::new();
    }

    let segments: Vec<&str> = if raw.contains(LONG_DASH) {
        raw.split(LONG_DASH)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    } else {
        vec![raw.trim()]
    };

    let parsed: Vec<ParsedCitation> = segments.into_iter().map(parse_segment).collect();

    debug!(
        slog_scope::logger(),
        "Parallel citation parsing completed ({} citations)",
        parsed.len()
    );
    parsed
}

/// Parse one dash-delimited segment.
///
/// The citation text is rebuilt from the whitespace tokens that survive the
/// exclusion list, so hyphens inside a token (`2017-287963`) are kept. Reporter
/// fragments are taken from each token split on hyphens.
fn parse_segment(segment: &str) -> ParsedCitation {
    trace!(slog_scope::logger(), "segment: {:?}", segment);

    let tokens: Vec<&str> = segment
        .split_whitespace()
        .filter(|t| !EXCLUDED_CITATION_ITEMS.contains(t))
        .collect();

    let mut citation_tokens: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut reporter_fragments: Vec<String> = Vec::new();

    for (i, &token) in tokens.iter().enumerate() {
        // Carswell numbers carry their own year, which loses its brackets. See
        // McGill 9e 3.8.3.
        let before_carswell = tokens
            .get(i + 1)
            .map_or(false, |next| next.starts_with("Carswell"));
        match BRACKETED_YEAR.captures(token) {
            Some(caps) if before_carswell => {
                citation_tokens.push(caps.name("year").map_or(token, |y| y.as_str()))
            }
            _ => citation_tokens.push(token),
        }

        for fragment in token.split('-') {
            let fragment = fragment.replace('.', "");
            if is_reporter_fragment(&fragment) {
                reporter_fragments.push(fragment);
            }
        }
    }

    let parsed = ParsedCitation {
        citation: citation_tokens.join(" "),
        reporter: reporter_fragments.join(" "),
    };

    trace!(slog_scope::logger(), "parsed: {:?}", parsed);
    parsed
}

/// Whether a period-stripped fragment can be part of a reporter abbreviation.
fn is_reporter_fragment(fragment: &str) -> bool {
    !fragment.is_empty()
        && fragment.chars().all(char::is_alphabetic)
        && !EXCLUDED_REPORTER_ITEMS.contains(&fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(citation: &str, reporter: &str) -> ParsedCitation {
        ParsedCitation {
            citation: citation.to_string(),
            reporter: reporter.to_string(),
        }
    }

    mod segments {
        use super::*;

        #[test]
        fn empty() {
            assert!(parse_parallel_citations("").is_empty());
            assert!(parse_parallel_citations("   \n").is_empty());
        }

        #[test]
        fn single_citation_without_dash() {
            let parsed = parse_parallel_citations("  418 DLR (4th) 382 ");

            assert_eq!(parsed, vec![pair("418 DLR (4th) 382", "DLR")]);
        }

        #[test]
        fn two_segments() {
            let parsed = parse_parallel_citations("142 WCB (2d) 343 — [2017] SCJ No 60 (QL)");

            assert_eq!(
                parsed,
                vec![
                    pair("142 WCB (2d) 343", "WCB"),
                    pair("[2017] SCJ No 60", "SCJ"),
                ]
            );
        }

        #[test]
        fn blank_segments_dropped() {
            let parsed = parse_parallel_citations("— 418 DLR (4th) 382 —  — ");

            assert_eq!(parsed, vec![pair("418 DLR (4th) 382", "DLR")]);
        }

        #[test]
        fn full_canlii_block() {
            let raw = "[2017] SCJ No 60 (QL) — EYB 2017-287963 — 142 WCB (2d) 343 — \
                       396 CRR (2d) 212 — 357 CCC (3d) 350 — 42 CR (7th) 74 — \
                       [2017] EXP 3391 — 418 DLR (4th) 382";
            let parsed = parse_parallel_citations(raw);
            let reporters: Vec<&str> = parsed.iter().map(|p| p.reporter.as_str()).collect();

            assert_eq!(parsed.len(), 8);
            assert_eq!(
                reporters,
                vec!["SCJ", "EYB", "WCB", "CRR", "CCC", "CR", "EXP", "DLR"]
            );
            assert_eq!(parsed[1].citation, "EYB 2017-287963");
        }
    }

    mod reporters {
        use super::*;

        #[test]
        fn periods_stripped() {
            let parsed = parse_parallel_citations("[1999] 3 S.C.R. 456");

            assert_eq!(parsed, vec![pair("[1999] 3 S.C.R. 456", "SCR")]);
        }

        #[test]
        fn multiword_reassembled() {
            let parsed = parse_parallel_citations("12 Sask R 345 — 1 W C B 2");

            assert_eq!(parsed[0].reporter, "Sask R");
            assert_eq!(parsed[1].reporter, "W C B");
            assert!(parsed[0].is_multiword());
        }

        #[test]
        fn non_alphabetic_reporter_split() {
            let parsed = parse_parallel_citations("12 Nfld & PEIR 1");

            assert_eq!(parsed, vec![pair("12 Nfld & PEIR 1", "Nfld PEIR")]);
        }

        #[test]
        fn hyphenated_fragments() {
            let parsed = parse_parallel_citations("2005 QCCA-RJQ 12");

            assert_eq!(parsed[0].reporter, "QCCA RJQ");
            assert_eq!(parsed[0].citation, "2005 QCCA-RJQ 12");
        }

        #[test]
        fn no_reporter() {
            let parsed = parse_parallel_citations("2017 287963");

            assert_eq!(parsed, vec![pair("2017 287963", "")]);
        }
    }

    mod carswell {
        use super::*;

        #[test]
        fn brackets_removed_before_carswell() {
            let parsed = parse_parallel_citations("[2003] CarswellOnt 1234");

            assert_eq!(parsed, vec![pair("2003 CarswellOnt 1234", "CarswellOnt")]);
        }

        #[test]
        fn brackets_kept_otherwise() {
            let parsed = parse_parallel_citations("[2003] OJ No 1234 (QL)");

            assert_eq!(parsed, vec![pair("[2003] OJ No 1234", "OJ")]);
        }

        #[test]
        fn only_ascii_years_unbracketed() {
            let parsed = parse_parallel_citations("[٢٠٠٣] CarswellOnt 1234");

            assert_eq!(parsed, vec![pair("[٢٠٠٣] CarswellOnt 1234", "CarswellOnt")]);
        }

        #[test]
        fn stable() {
            let raw = "[2003] CarswellOnt 1234 — 12 Sask R 345";

            assert_eq!(
                parse_parallel_citations(raw),
                parse_parallel_citations(raw)
            );
        }
    }
}
