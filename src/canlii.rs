//! CanLII URL handling.
//!
//! The `caseBrowse` API needs the decision language, the database id, and the
//! case id, all of which can be read from a long-form CanLII URL such as
//!
//! ```text
//! https://www.canlii.org/en/ca/scc/doc/2017/2017scc60/2017scc60.html
//! ```
//!
//! Short URLs (`canlii.ca/t/...`) resolve behind a CAPTCHA and are rejected.
//! Fetching the record is left to the caller.

use phf::phf_map;
use slog::{debug, trace};
use std::fmt;

/// Short CanLII URLs use the .ca domain.
const CANLII_SHORT: &str = "canlii.ca";

/// Full CanLII URLs use the .org domain.
const CANLII_LONG: &str = "canlii.org";

/// The minimum number of `/`-separated components in a case URL.
const REQ_CANLII_URL_COMPONENTS: usize = 8;

/// URL components that belong to a hyphenated database id.
static HYPHENATED_DATABASE_IDS: phf::Map<&'static str, &'static str> = phf_map! {
    "cbsc" => "cbsc-ccnr",
    "ccnr" => "cbsc-ccnr",
    "citt" => "citt-tcce",
    "tcce" => "citt-tcce",
    "csc-a" => "csc-scc-al",
    "scc-l" => "csc-scc-al",
    "cci" => "cci-tcc",
    "tcc" => "cci-tcc",
    "csc" => "csc-scc",
    "scc" => "csc-scc",
    "casa" => "casa-cala",
    "cala" => "casa-cala",
    "sst" => "sst-tss",
    "tss" => "sst-tss",
    "cmac" => "cmac-cacm",
    "cacm" => "cmac-cacm",
    "cart" => "cart-crac",
    "crac" => "cart-crac",
    "pcc" => "pcc-cvpc",
    "cvpc" => "pcc-cvpc",
    "sct" => "sct-trp",
    "trp" => "sct-trp",
    "cer" => "cer-rec",
    "rec" => "cer-rec",
    "exchc" => "exchc-cech",
    "cech" => "exchc-cech",
};

/// The parts of a CanLII URL the API needs.
#[derive(Debug, PartialEq, Eq)]
pub struct CaseLocator {
    pub language: String,
    pub database_id: String,
    pub case_id: String,
}

impl CaseLocator {
    /// The `caseBrowse` request path, without the API key.
    pub fn api_path(&self) -> String {
        format!(
            "/v1/caseBrowse/{}/{}/{}/",
            self.language, self.database_id, self.case_id
        )
    }
}

impl fmt::Display for CaseLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "language: {}, database: {}, case: {}",
            self.language, self.database_id, self.case_id
        )
    }
}

/// The real database id for a URL component.
///
/// Some databases are hyphenated in the API (`csc-scc`) but appear as one half
/// in URLs (`scc`).
pub fn database_id(component: &str) -> &str {
    HYPHENATED_DATABASE_IDS
        .get(component)
        .copied()
        .unwrap_or(component)
}

/// Read a [`CaseLocator`] from a CanLII URL.
pub fn case_locator(url: &str) -> Result<CaseLocator, String> {
    debug!(slog_scope::logger(), "Reading CanLII URL {}...", url);

    let url = url.trim();
    if url.contains(CANLII_SHORT) {
        return Err(format!(
            "short URL detected ({})—please use the long canlii.org URL",
            url
        ));
    }
    if !url.contains(CANLII_LONG) {
        return Err(format!("{} is not a CanLII URL", url));
    }

    // Remove any query string.
    let url = url.split('?').next().unwrap_or(url);

    let components: Vec<&str> = url.split('/').collect();
    if components.len() < REQ_CANLII_URL_COMPONENTS {
        return Err(format!("{} is not a CanLII case URL", url));
    }
    trace!(slog_scope::logger(), "components: {:?}", components);

    let n = components.len();
    let case_id = components[n - 2];
    let database = components[n - 5];
    let language = components[n - 7];

    // The case id must start with the four-digit year.
    if !case_id
        .get(..4)
        .map_or(false, |year| year.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(format!("{} does not contain a CanLII case id", url));
    }

    let locator = CaseLocator {
        language: language.to_string(),
        database_id: database_id(database).to_string(),
        case_id: case_id.to_string(),
    };

    debug!(slog_scope::logger(), "CanLII URL read ({})", locator);
    Ok(locator)
}
