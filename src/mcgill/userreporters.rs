//! This module contains functionality related to user-reporters files.

use super::reporters::CitationTier;
use ron::de::from_str;
use slog::debug;
use std::collections::HashMap;

/// Reporter abbreviations mapped to the tier the user assigns them.
pub type UserReporters = HashMap<String, CitationTier>;

/// Create the user-reporters list.
///
/// Only the printed-reporter tiers can be assigned; a neutral or unofficial
/// entry is an error.
pub fn build_user_reporters(input: &str) -> Result<UserReporters, String> {
    let user_reporters: UserReporters = match from_str(input) {
        Ok(u) => u,
        Err(e) => {
            let err_msg = format!("error deserializing the user reporters file—{}", e);
            return Err(err_msg);
        }
    };

    for (reporter, tier) in &user_reporters {
        if !CitationTier::REPORTER_TIERS.contains(tier) {
            let err_msg = format!(
                "error in the user reporters file—{} cannot be listed as {}",
                reporter, tier
            );
            return Err(err_msg);
        }
    }

    debug!(
        slog_scope::logger(),
        "User reporters file parsed ({} entries)",
        user_reporters.len()
    );
    Ok(user_reporters)
}
