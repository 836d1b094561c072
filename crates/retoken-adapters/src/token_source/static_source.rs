//! In-memory token source.

use retoken_core::{application::ports::TokenSource, domain::TokenSet, error::RetokenResult};

/// A fixed batch of tokens, e.g. from `--token key=value` flags or tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    tokens: TokenSet,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, tokens: TokenSet) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }
}

impl TokenSource for StaticSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> RetokenResult<TokenSet> {
        Ok(self.tokens.clone())
    }
}
