//! This module contains functionality for output options.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for italicized text
    pub static ref ITALICS: Regex = Regex::new(r"<em>(?P<input>.+?)</em>").unwrap();
}

/// Change any italicized HTML text to Markdown italics
pub fn markdown(input: &str) -> String {
    ITALICS.replace_all(input, "*$input*").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italics() {
        assert_eq!(
            markdown("<em>R v Smith</em>, 2017 SCC 60 at para 5, [2017] 2 SCR 1000."),
            "*R v Smith*, 2017 SCC 60 at para 5, [2017] 2 SCR 1000."
        );
        assert_eq!(
            markdown("<em>Jones v Smith</em> (<em>2004</em>)"),
            "*Jones v Smith* (*2004*)"
        );
    }

    #[test]
    fn no_italics() {
        assert_eq!(markdown("2017 SCC 60"), "2017 SCC 60");
    }
}
