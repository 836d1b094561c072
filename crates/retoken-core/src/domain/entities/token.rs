//! Tokens and ordered token sets.
//!
//! A [`TokenSet`] is an ordered sequence with unique keys. Inserting a key
//! that already exists overwrites the value where it stands, so the position
//! of a key is decided by the first batch that mentions it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named placeholder and its replacement text.
///
/// Deserializes from the token-file shape `{ "key": "...", "value": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub key: String,
    pub value: String,
}

impl Token {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered collection of tokens with unique keys.
///
/// Built from a list (JSON array or `Vec`), duplicate keys collapse onto the
/// first occurrence and the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Token>", into = "Vec<Token>")]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Value of the token with exactly this key (case-sensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.key.as_str())
    }

    /// Insert or overwrite.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, token: Token) {
        match self.tokens.iter_mut().find(|t| t.key == token.key) {
            Some(existing) => existing.value = token.value,
            None => self.tokens.push(token),
        }
    }

    /// Merge `incoming` into this set, later values overriding by key.
    pub fn merge_from(&mut self, incoming: TokenSet) {
        for token in incoming.tokens {
            self.insert(token);
        }
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

/// Combine two token batches, `incoming` overriding `existing` by key.
///
/// Keys only in `existing` keep their relative order; keys only in
/// `incoming` are appended in their relative order; overridden keys stay
/// where `existing` had them.
pub fn merge(existing: &TokenSet, incoming: &TokenSet) -> TokenSet {
    let mut combined = existing.clone();
    combined.merge_from(incoming.clone());
    combined
}

impl From<Vec<Token>> for TokenSet {
    fn from(tokens: Vec<Token>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<TokenSet> for Vec<Token> {
    fn from(set: TokenSet) -> Self {
        set.tokens
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl Extend<Token> for TokenSet {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl IntoIterator for TokenSet {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
