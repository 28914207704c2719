//! The module contains functionality related to loading case metadata.

use super::error::{CitationError, Result};
use serde::Deserialize;
use slog::debug;
use std::convert::TryFrom;

/// The language of a decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

/// Struct holding a case record as returned by the CanLII `caseBrowse` API.
///
/// Only the fields the formatter uses are kept; anything else in the JSON is
/// discarded. Every field is optional here so that a missing field can be
/// reported by name instead of as a generic deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CanLiiCase {
    #[serde(rename(deserialize = "databaseId"))]
    pub database_id: Option<String>,
    #[serde(rename(deserialize = "caseId"))]
    pub case_id: Option<CaseId>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub citation: Option<String>,
    pub language: Option<Language>,
    #[serde(rename(deserialize = "docketNumber"))]
    pub docket_number: Option<String>,
    #[serde(rename(deserialize = "decisionDate"))]
    pub decision_date: Option<String>,
    pub keywords: Option<String>,
}

/// CanLII nests the case id under the decision language.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CaseId {
    Plain(String),
    ByLanguage {
        en: Option<String>,
        fr: Option<String>,
    },
}

impl CaseId {
    fn into_id(self) -> Option<String> {
        match self {
            CaseId::Plain(id) => Some(id),
            CaseId::ByLanguage { en, fr } => en.or(fr),
        }
    }
}

/// Validated case metadata.
///
/// `title`, `decision_date`, and `citation` are guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMetadata {
    pub title: String,
    pub decision_date: String,
    pub citation: String,
    pub language: Language,
    pub keywords: Option<String>,
    pub docket_number: Option<String>,
    pub url: Option<String>,
    pub database_id: Option<String>,
    pub case_id: Option<String>,
}

impl CaseMetadata {
    /// Build metadata from the three required fields.
    pub fn new(title: &str, decision_date: &str, citation: &str, language: Language) -> Result<Self> {
        CaseMetadata::try_from(CanLiiCase {
            title: Some(title.to_string()),
            decision_date: Some(decision_date.to_string()),
            citation: Some(citation.to_string()),
            language: Some(language),
            ..Default::default()
        })
    }

    /// The style of cause: the title with every period removed.
    pub fn style_of_cause(&self) -> String {
        self.title.replace('.', "")
    }
}

impl TryFrom<CanLiiCase> for CaseMetadata {
    type Error = CitationError;

    fn try_from(case: CanLiiCase) -> Result<Self> {
        Ok(CaseMetadata {
            title: required(case.title, "title")?,
            decision_date: required(case.decision_date, "decisionDate")?,
            citation: required(case.citation, "citation")?,
            language: case.language.unwrap_or_default(),
            keywords: case.keywords,
            docket_number: case.docket_number,
            url: case.url,
            database_id: case.database_id,
            case_id: case.case_id.and_then(CaseId::into_id),
        })
    }
}

/// Reject absent and blank fields.
fn required(field: Option<String>, name: &'static str) -> Result<String> {
    match field {
        Some(f) if !f.trim().is_empty() => Ok(f.trim().to_string()),
        _ => Err(CitationError::MissingField(name)),
    }
}

/// Deserialize a CanLII case record.
///
/// Deserialize a string of JSON into a [`CaseMetadata`], reporting missing
/// required fields by name.
pub fn build_case_metadata(json: &str) -> std::result::Result<CaseMetadata, String> {
    debug!(slog_scope::logger(), "Starting case metadata parsing...");
    let case: CanLiiCase = match serde_json::from_str(json) {
        Ok(c) => c,
        Err(e) => {
            let err_msg = format!("error deserializing the case metadata—{}", e);
            return Err(err_msg);
        }
    };

    match CaseMetadata::try_from(case) {
        Ok(c) => {
            debug!(slog_scope::logger(), "Case metadata parsed");
            Ok(c)
        }
        Err(e) => Err(e.to_string()),
    }
}
