//! Token Service - gathers and merges token batches.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::TokenSource,
    domain::{Delimiters, Resolution, TokenSet, resolve},
    error::RetokenResult,
};

/// Collects tokens from an ordered list of sources.
///
/// Sources are loaded in the order they were added and merged into one set;
/// a later source overrides an earlier one key by key. The first failing
/// source aborts the whole gather.
pub struct TokenService {
    sources: Vec<Box<dyn TokenSource>>,
}

impl TokenService {
    pub fn new(sources: Vec<Box<dyn TokenSource>>) -> Self {
        Self { sources }
    }

    /// Append a source; it overrides every source added before it.
    pub fn with_source(mut self, source: Box<dyn TokenSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Load every source and merge them into one token set.
    #[instrument(skip_all, fields(sources = self.sources.len()))]
    pub fn gather(&self) -> RetokenResult<TokenSet> {
        let mut tokens = TokenSet::new();

        for source in &self.sources {
            let name = source.name();
            let batch = source.load()?;
            info!(source = %name, count = batch.len(), "Loaded tokens");
            tokens.merge_from(batch);
        }

        debug!(total = tokens.len(), "Tokens merged");
        Ok(tokens)
    }

    /// Gather, then resolve nested references.
    pub fn gather_resolved(&self, delimiters: &Delimiters) -> RetokenResult<Resolution> {
        let tokens = self.gather()?;
        Ok(resolve(delimiters, &tokens))
    }
}
