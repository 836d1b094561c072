//! Placeholder scanning and replacement in text.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::domain::{Delimiters, DomainError, TokenSet};

/// Compiled matcher for `prefix + key + suffix` placeholders.
#[derive(Debug, Clone)]
pub struct Placeholders {
    regex: Regex,
}

impl Placeholders {
    pub fn new(delimiters: &Delimiters) -> Result<Self, DomainError> {
        let pattern = delimiters.pattern();
        let regex = Regex::new(&pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// Keys referenced in `text`, in order of appearance (duplicates kept).
    pub fn keys<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }

    /// Replace every placeholder in `text`.
    ///
    /// Known keys become their value verbatim; unknown keys become the empty
    /// string. Returns `Cow::Borrowed` when nothing matched.
    pub fn replace_all<'t>(&self, text: &'t str, tokens: &TokenSet) -> Cow<'t, str> {
        self.regex.replace_all(text, |caps: &Captures<'_>| {
            tokens.get(&caps[1]).unwrap_or_default().to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Token;

    fn tokens(pairs: &[(&str, &str)]) -> TokenSet {
        pairs.iter().map(|(k, v)| Token::new(*k, *v)).collect()
    }

    fn placeholders() -> Placeholders {
        Placeholders::new(&Delimiters::default()).unwrap()
    }

    #[test]
    fn replaces_known_key() {
        let out = placeholders().replace_all("hello #{token1}#", &tokens(&[("token1", "test")]));
        assert_eq!(out, "hello test");
    }

    #[test]
    fn deletes_unknown_key() {
        let out = placeholders().replace_all("hello #{unknown}#", &TokenSet::new());
        assert_eq!(out, "hello ");
    }

    #[test]
    fn text_without_placeholders_is_borrowed() {
        let out = placeholders().replace_all("nothing here", &tokens(&[("a", "b")]));
        assert!(matches!(out, Cow::Borrowed("nothing here")));
    }

    #[test]
    fn match_is_non_greedy() {
        let out = placeholders().replace_all("#{a}# and #{b}#", &tokens(&[("a", "1"), ("b", "2")]));
        assert_eq!(out, "1 and 2");
    }

    #[test]
    fn key_does_not_span_lines() {
        let text = "#{a\nb}# #{a}#";
        let out = placeholders().replace_all(text, &tokens(&[("a", "X")]));
        assert_eq!(out, "#{a\nb}# X");
    }

    #[test]
    fn empty_key_is_not_a_placeholder() {
        let out = placeholders().replace_all("#{}#", &TokenSet::new());
        assert_eq!(out, "#{}#");
    }

    #[test]
    fn values_are_inserted_literally() {
        let out = placeholders().replace_all("x=#{a}#", &tokens(&[("a", "$1 ${b} \\d+")]));
        assert_eq!(out, "x=$1 ${b} \\d+");
    }

    #[test]
    fn metacharacter_delimiters() {
        let p = Placeholders::new(&Delimiters::new("[[", "]]").unwrap()).unwrap();
        let out = p.replace_all("a [[k]] b [[other]]", &tokens(&[("k", "v")]));
        assert_eq!(out, "a v b ");
    }

    #[test]
    fn lists_keys_in_order() {
        let p = placeholders();
        let keys: Vec<_> = p.keys("#{b}# #{a}# #{b}#").collect();
        assert_eq!(keys, ["b", "a", "b"]);
    }
}
