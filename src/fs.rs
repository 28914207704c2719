//! Functions for interacting with the file system.

mod file_contents;

use ansi_term::Color;
use file_contents::BLANK_USER_REPORTERS_CONTENTS;
use slog::debug;
use std::{fs, path::Path};

/// The name of the blank user-reporters file.
const BLANK_USER_REPORTERS_FILE: &str = "blank-user-reporters.ron";

/// Load a file into a string.
///
/// This function is used to load the case JSON, the parallel citations, and
/// the user reporters into strings, which can then be passed to the formatter.
pub fn load_file(path: &Path) -> Result<String, String> {
    debug!(
        slog_scope::logger(),
        "Loading file {}...",
        path.to_string_lossy()
    );

    match fs::read_to_string(path) {
        Ok(r) => {
            debug!(
                slog_scope::logger(),
                "File {} loaded.",
                path.to_string_lossy()
            );
            Ok(r)
        }
        Err(e) => {
            let err_msg = format!("error reading the file {}—{}", path.to_string_lossy(), e);
            Err(err_msg)
        }
    }
}

/// Save a string in a file.
pub fn save_file(path: &Path, output: &str) -> Result<(), String> {
    debug!(slog_scope::logger(), "Saving {}...", path.to_string_lossy());
    eprintln!(
        "{} Saving {}...",
        Color::Green.paint("INFO"),
        Color::Blue.paint(path.to_string_lossy())
    );

    match fs::write(path, output) {
        Ok(_) => {
            debug!(
                slog_scope::logger(),
                "File {} saved.",
                path.to_string_lossy()
            );
            Ok(())
        }
        Err(e) => {
            let err_msg = format!("error writing the file {}—{}", path.to_string_lossy(), e);
            Err(err_msg)
        }
    }
}

/// Create a blank user-reporters file.
///
/// Users can then fill it in with their own reporters and tiers.
pub fn new_user_reporters_ron() -> Result<(), String> {
    eprintln!(
        "{} Creating blank user-reporters file ({})",
        Color::Green.paint("INFO"),
        Color::Blue.paint(BLANK_USER_REPORTERS_FILE)
    );

    save_file(
        Path::new(BLANK_USER_REPORTERS_FILE),
        BLANK_USER_REPORTERS_CONTENTS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod test_load_file {
        use super::*;

        #[test]
        fn test_load() {
            let file = "./tests/r-v-smith.json";
            let load_result = load_file(Path::new(file));
            assert!(load_result.is_ok());
            assert!(load_result.unwrap().contains("2017 SCC 60"));
        }

        #[test]
        fn fail_load() {
            let file = "./tests/does-not-exist.json";
            let load_result = load_file(Path::new(file));
            assert!(load_result
                .unwrap_err()
                .starts_with("error reading the file ./tests/does-not-exist.json"));
        }
    }

    #[test]
    fn blank_user_reporters_parse() {
        let reporters =
            crate::mcgill::userreporters::build_user_reporters(BLANK_USER_REPORTERS_CONTENTS)
                .unwrap();

        assert_eq!(reporters.len(), 1);
    }
}
