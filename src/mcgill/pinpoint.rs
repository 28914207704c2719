//! Pinpoint references (McGill 9e 1.5).

use super::error::{CitationError, Result};
use serde::Serialize;
use std::fmt;

/// A pinpoint to a page or paragraph of the cited source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Pinpoint {
    #[default]
    None,
    Page(u32),
    Para(u32),
}

impl Pinpoint {
    /// Build a pinpoint from a kind (`none`, `page`, `para`, or `paragraph`) and
    /// its value.
    ///
    /// `none` ignores the value. The other kinds need a positive integer.
    pub fn from_parts(kind: &str, value: Option<&str>) -> Result<Pinpoint> {
        let kind = kind.trim().to_lowercase();
        if kind == "none" {
            return Ok(Pinpoint::None);
        }
        if kind != "page" && kind != "para" && kind != "paragraph" {
            return Err(CitationError::MalformedInput(format!(
                "unknown pinpoint type {:?}",
                kind
            )));
        }

        let number = match value.map(|v| v.trim().parse::<u32>()) {
            Some(Ok(n)) if n > 0 => n,
            _ => {
                return Err(CitationError::MalformedInput(format!(
                    "a {} pinpoint needs a positive number, not {:?}",
                    kind,
                    value.unwrap_or_default()
                )))
            }
        };

        if kind == "page" {
            Ok(Pinpoint::Page(number))
        } else {
            Ok(Pinpoint::Para(number))
        }
    }
}

/// The pinpoint fragment that follows a citation.
impl fmt::Display for Pinpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pinpoint::None => Ok(()),
            Pinpoint::Page(n) => write!(f, " at {}", n),
            Pinpoint::Para(n) => write!(f, " at para {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments() {
        assert_eq!(Pinpoint::None.to_string(), "");
        assert_eq!(Pinpoint::Page(12).to_string(), " at 12");
        assert_eq!(Pinpoint::Para(5).to_string(), " at para 5");
    }

    #[test]
    fn from_parts() {
        assert_eq!(Pinpoint::from_parts("none", None).unwrap(), Pinpoint::None);
        assert_eq!(
            Pinpoint::from_parts("none", Some("12")).unwrap(),
            Pinpoint::None
        );
        assert_eq!(
            Pinpoint::from_parts("page", Some("12")).unwrap(),
            Pinpoint::Page(12)
        );
        assert_eq!(
            Pinpoint::from_parts("para", Some(" 5 ")).unwrap(),
            Pinpoint::Para(5)
        );
        assert_eq!(
            Pinpoint::from_parts("Paragraph", Some("5")).unwrap(),
            Pinpoint::Para(5)
        );
    }

    #[test]
    fn bad_parts() {
        assert!(Pinpoint::from_parts("footnote", Some("1")).is_err());
        assert!(Pinpoint::from_parts("page", None).is_err());
        assert!(Pinpoint::from_parts("para", Some("five")).is_err());
        assert!(Pinpoint::from_parts("para", Some("0")).is_err());
    }
}
