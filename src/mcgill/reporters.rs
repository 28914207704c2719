//! The reporter authority tables.
//!
//! McGill 9e ranks case reporters by authority. A neutral citation always
//! wins; after that come official reporters (published by the Queen's
//! Printer), preferred (semi-official) reporters, authoritative reporters, and
//! finally everything else. The tables here are compile-time maps and are never
//! mutated. Users can add reporters through a user-reporters file, which is
//! merged into an [`AuthorityTable`] once at startup.

use super::{casedata::Language, userreporters::UserReporters};
use lazy_static::lazy_static;
use phf::{phf_map, phf_set};
use serde::{Deserialize, Serialize};
use slog::trace;
use std::fmt;

/// The authority tiers, in order of precedence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CitationTier {
    Neutral,
    Official,
    Preferred,
    Authoritative,
    Unofficial,
}

impl CitationTier {
    /// Every tier, highest precedence first.
    pub const ALL: [CitationTier; 5] = [
        CitationTier::Neutral,
        CitationTier::Official,
        CitationTier::Preferred,
        CitationTier::Authoritative,
        CitationTier::Unofficial,
    ];

    /// The tiers a printed reporter can be listed under.
    pub const REPORTER_TIERS: [CitationTier; 3] = [
        CitationTier::Official,
        CitationTier::Preferred,
        CitationTier::Authoritative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CitationTier::Neutral => "neutral",
            CitationTier::Official => "official",
            CitationTier::Preferred => "preferred",
            CitationTier::Authoritative => "authoritative",
            CitationTier::Unofficial => "unofficial",
        }
    }
}

impl fmt::Display for CitationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A CanLII jurisdiction code and its McGill abbreviations.
#[derive(Debug, PartialEq, Eq)]
pub struct Jurisdiction {
    pub english: &'static str,
    pub french: &'static str,
}

impl Jurisdiction {
    /// The abbreviation to use for a decision in the given language.
    pub fn abbreviation(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.english,
            Language::Fr => self.french,
        }
    }
}

/// Court-level tokens that mark a neutral citation (McGill 9e, Appendix B3).
pub static NEUTRAL_COURTS: phf::Set<&'static str> = phf_set! {
    // Federal
    "SCC", "CSC", "FCA", "CAF", "FC", "CF", "TCC", "CCI", "CMAC", "CACM",
    "CHRT", "TCDP", "SST", "TSS", "CIRB", "CCRI", "CITT", "TCCE",
    // Alberta
    "ABCA", "ABQB", "ABKB", "ABPC", "ABCJ",
    // British Columbia
    "BCCA", "BCSC", "BCPC",
    // Manitoba
    "MBCA", "MBQB", "MBKB", "MBPC",
    // New Brunswick
    "NBCA", "NBQB", "NBKB", "NBPC",
    // Newfoundland and Labrador
    "NLCA", "NLSC", "NLTD", "NLPC",
    // Northwest Territories
    "NWTCA", "NWTSC", "NWTTC",
    // Nova Scotia
    "NSCA", "NSSC", "NSPC", "NSFC", "NSSM",
    // Nunavut
    "NUCA", "NUCJ",
    // Ontario
    "ONCA", "ONSC", "ONCJ",
    // Prince Edward Island
    "PECA", "PESC", "PESCAD", "PESCTD",
    // Quebec
    "QCCA", "QCCS", "QCCQ", "QCTDP", "QCTAQ", "QCTP",
    // Saskatchewan
    "SKCA", "SKQB", "SKKB", "SKPC",
    // Yukon
    "YKCA", "YKSC", "YKTC",
};

/// Printed reporters with a known McGill tier.
///
/// Reporters with both English and French abbreviations are listed once per
/// abbreviation.
pub static REPORTERS: phf::Map<&'static str, CitationTier> = phf_map! {
    // Official reporters
    "SCR" => CitationTier::Official,
    "RCS" => CitationTier::Official,
    "FC" => CitationTier::Official,
    "CF" => CitationTier::Official,
    "FCR" => CitationTier::Official,
    "Ex CR" => CitationTier::Official,

    // Preferred (semi-official) reporters
    "AR" => CitationTier::Preferred,
    "Alta LR" => CitationTier::Preferred,
    "BCLR" => CitationTier::Preferred,
    "Man R" => CitationTier::Preferred,
    "NBR" => CitationTier::Preferred,
    "RNB" => CitationTier::Preferred,
    "Nfld & PEIR" => CitationTier::Preferred,
    "NSR" => CitationTier::Preferred,
    "NWTR" => CitationTier::Preferred,
    "Nu R" => CitationTier::Preferred,
    "OR" => CitationTier::Preferred,
    "RJQ" => CitationTier::Preferred,
    "Sask R" => CitationTier::Preferred,
    "YR" => CitationTier::Preferred,

    // Authoritative reporters
    "Admin LR" => CitationTier::Authoritative,
    "CBR" => CitationTier::Authoritative,
    "CCC" => CitationTier::Authoritative,
    "CCEL" => CitationTier::Authoritative,
    "CCLT" => CitationTier::Authoritative,
    "CELR" => CitationTier::Authoritative,
    "CPR" => CitationTier::Authoritative,
    "CR" => CitationTier::Authoritative,
    "CRR" => CitationTier::Authoritative,
    "DLR" => CitationTier::Authoritative,
    "ETR" => CitationTier::Authoritative,
    "MPLR" => CitationTier::Authoritative,
    "RFL" => CitationTier::Authoritative,
    "WWR" => CitationTier::Authoritative,
};

/// CanLII jurisdiction codes.
pub static JURISDICTIONS: phf::Map<&'static str, Jurisdiction> = phf_map! {
    "BC" => Jurisdiction { english: "BC", french: "BC" },
    "AB" => Jurisdiction { english: "Alta", french: "Alta" },
    "SK" => Jurisdiction { english: "Sask", french: "Sask" },
    "MB" => Jurisdiction { english: "Man", french: "Man" },
    "ON" => Jurisdiction { english: "Ont", french: "Ont" },
    "QC" => Jurisdiction { english: "Qc", french: "Qc" },
    "NB" => Jurisdiction { english: "NB", french: "N-B" },
    "NS" => Jurisdiction { english: "NS", french: "NS" },
    "PE" => Jurisdiction { english: "PEI", french: "PEI" },
    "NL" => Jurisdiction { english: "NL", french: "Nfld" },
    "YT" => Jurisdiction { english: "Y", french: "Y" },
    "NT" => Jurisdiction { english: "NWT", french: "TN-O" },
    "NU" => Jurisdiction { english: "Nunavut", french: "Nvt" },
};

lazy_static! {
    /// The authority table without any user reporters.
    static ref STANDARD_TABLE: AuthorityTable = AuthorityTable::default();
}

/// Read-only access to the built-in authority table.
pub fn standard_table() -> &'static AuthorityTable {
    &STANDARD_TABLE
}

/// The built-in tables merged with any user reporters.
#[derive(Debug, Default)]
pub struct AuthorityTable {
    user_reporters: UserReporters,
}

impl AuthorityTable {
    /// Merge user reporters into the built-in tables.
    pub fn new(user_reporters: UserReporters) -> AuthorityTable {
        AuthorityTable { user_reporters }
    }

    /// Whether a citation token is a neutral court-level code.
    pub fn is_neutral_court(&self, token: &str) -> bool {
        NEUTRAL_COURTS.contains(token)
    }

    /// The highest tier a reporter is listed under.
    ///
    /// Tiers are checked official, preferred, then authoritative, and the
    /// first tier listing the reporter (in the built-in table or the user
    /// reporters) wins. Matching is exact and case-sensitive.
    pub fn tier_of(&self, reporter: &str) -> Option<CitationTier> {
        let built_in = REPORTERS.get(reporter).copied();
        let user = self.user_reporters.get(reporter).copied();

        let tier = CitationTier::REPORTER_TIERS
            .into_iter()
            .find(|t| built_in == Some(*t) || user == Some(*t));

        trace!(slog_scope::logger(), "reporter: {:?} tier: {:?}", reporter, tier);

        tier
    }
}
