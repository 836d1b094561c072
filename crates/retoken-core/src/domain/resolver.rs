//! Nested token resolution.
//!
//! Token values may reference other tokens (`"Mr #{name}#"`). Resolution is a
//! bounded fixed-point loop rather than a dependency graph:
//!
//! 1. Split the set into *resolved* values (no prefix or suffix anywhere) and
//!    *unresolved* ones.
//! 2. For every unresolved value, substitute the placeholder of every resolved
//!    token, in sequence order.
//! 3. Promote values that no longer contain a delimiter; stop once nothing is
//!    left, or after [`MAX_RESOLVE_ITERATIONS`] passes.
//!
//! Missing references and cycles look the same to this loop: both keep a
//! delimiter in the value until the cap is hit. Such tokens are left out of
//! the resolved set, so later substitutions treat them as unknown.

use tracing::{debug, trace, warn};

use crate::domain::{Delimiters, Token, TokenSet};

/// Upper bound on resolution passes.
pub const MAX_RESOLVE_ITERATIONS: usize = 20;

/// Warning emitted when the cap is reached with tokens still unresolved.
pub const NON_CONVERGENCE_WARNING: &str =
    "maximum iterations reached; some tokens unresolved - missing values or circular references";

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    resolved: TokenSet,
    unresolved: Vec<Token>,
    passes: usize,
}

impl Resolution {
    /// Fully resolved tokens, safe to substitute.
    pub fn tokens(&self) -> &TokenSet {
        &self.resolved
    }

    pub fn into_tokens(self) -> TokenSet {
        self.resolved
    }

    /// Tokens dropped because they still reference something after the cap,
    /// with their partially substituted values.
    pub fn unresolved(&self) -> &[Token] {
        &self.unresolved
    }

    pub fn unresolved_keys(&self) -> Vec<&str> {
        self.unresolved.iter().map(|t| t.key.as_str()).collect()
    }

    /// Number of substitution passes performed.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn converged(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolve nested references inside `tokens`.
///
/// The input set is not modified. Resolved tokens keep their input order,
/// followed by promoted tokens in the order they were promoted.
pub fn resolve(delimiters: &Delimiters, tokens: &TokenSet) -> Resolution {
    let (mut resolved, mut pending): (Vec<Token>, Vec<Token>) = tokens
        .iter()
        .cloned()
        .partition(|t| !delimiters.appears_in(&t.value));

    debug!(
        resolved = resolved.len(),
        unresolved = pending.len(),
        "Resolving nested tokens"
    );

    let mut passes = 0;
    while !pending.is_empty() && passes < MAX_RESOLVE_ITERATIONS {
        for token in &mut pending {
            for done in &resolved {
                let placeholder = delimiters.placeholder(&done.key);
                if token.value.contains(&placeholder) {
                    token.value = token.value.replace(&placeholder, &done.value);
                }
            }
        }

        let (promoted, still_pending): (Vec<Token>, Vec<Token>) = pending
            .into_iter()
            .partition(|t| !delimiters.appears_in(&t.value));

        passes += 1;
        trace!(pass = passes, promoted = promoted.len(), "Resolution pass");

        resolved.extend(promoted);
        pending = still_pending;
    }

    if !pending.is_empty() {
        warn!(
            unresolved = ?pending.iter().map(|t| t.key.as_str()).collect::<Vec<_>>(),
            "{}",
            NON_CONVERGENCE_WARNING
        );
    }

    Resolution {
        resolved: resolved.into_iter().collect(),
        unresolved: pending,
        passes,
    }
}
