//! Domain value objects: the placeholder [`Delimiters`].
//!
//! # Design
//!
//! Delimiters are fixed for a whole run and shared by the resolution and
//! substitution phases, so they are validated once at construction and then
//! passed around by reference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "#{";

/// Suffix used when none is configured.
pub const DEFAULT_SUFFIX: &str = "}#";

/// The literal prefix/suffix pair marking a placeholder: `prefix + key + suffix`.
///
/// Invariant: neither side is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDelimiters")]
pub struct Delimiters {
    prefix: String,
    suffix: String,
}

#[derive(Deserialize)]
struct RawDelimiters {
    prefix: String,
    suffix: String,
}

impl TryFrom<RawDelimiters> for Delimiters {
    type Error = DomainError;

    fn try_from(raw: RawDelimiters) -> Result<Self, Self::Error> {
        Self::new(raw.prefix, raw.suffix)
    }
}

impl Delimiters {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Result<Self, DomainError> {
        let prefix = prefix.into();
        let suffix = suffix.into();

        if prefix.is_empty() {
            return Err(DomainError::InvalidDelimiter {
                side: "prefix",
                reason: "must not be empty".into(),
            });
        }
        if suffix.is_empty() {
            return Err(DomainError::InvalidDelimiter {
                side: "suffix",
                reason: "must not be empty".into(),
            });
        }

        Ok(Self { prefix, suffix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The placeholder text referencing `key`.
    pub fn placeholder(&self, key: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + key.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(key);
        out.push_str(&self.suffix);
        out
    }

    /// True when `text` contains the prefix or the suffix anywhere.
    ///
    /// This is the "unresolved" test of the resolver: a lone suffix counts.
    pub fn appears_in(&self, text: &str) -> bool {
        text.contains(&self.prefix) || text.contains(&self.suffix)
    }

    /// Regex source matching one placeholder, capturing the key.
    ///
    /// Both delimiters are escaped; the key capture is non-greedy and does
    /// not cross line breaks.
    pub fn pattern(&self) -> String {
        format!(
            "(?m){}(.+?){}",
            regex::escape(&self.prefix),
            regex::escape(&self.suffix)
        )
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}key{}", self.prefix, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_prefix() {
        let err = Delimiters::new("", "}#").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidDelimiter { side: "prefix", .. }
        ));
    }

    #[test]
    fn rejects_empty_suffix() {
        let err = Delimiters::new("#{", "").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidDelimiter { side: "suffix", .. }
        ));
    }

    #[test]
    fn placeholder_wraps_key() {
        let d = Delimiters::default();
        assert_eq!(d.placeholder("token1"), "#{token1}#");
    }

    #[test]
    fn lone_suffix_counts_as_appearance() {
        let d = Delimiters::default();
        assert!(d.appears_in("abc}#"));
        assert!(d.appears_in("#{abc"));
        assert!(!d.appears_in("plain text"));
    }

    #[test]
    fn pattern_escapes_metacharacters() {
        let d = Delimiters::new("$(", ")").unwrap();
        assert_eq!(d.pattern(), r"(?m)\$\((.+?)\)");
    }

    #[test]
    fn display_shows_shape() {
        assert_eq!(Delimiters::default().to_string(), "#{key}#");
    }

    #[test]
    fn deserialize_validates() {
        let err = serde_json::from_str::<Delimiters>(r#"{"prefix":"","suffix":"}"}"#);
        assert!(err.is_err());

        let ok: Delimiters = serde_json::from_str(r#"{"prefix":"{{","suffix":"}}"}"#).unwrap();
        assert_eq!(ok.placeholder("x"), "{{x}}");
    }
}
