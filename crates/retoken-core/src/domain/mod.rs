//! Core domain layer for retoken.
//!
//! This module contains pure logic with no I/O. Reading token sources and
//! rewriting files are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Components
//!
//! - **Merger** ([`merge`]): combines token batches, later batches override by key
//! - **Resolver** ([`resolve`]): substitutes token references nested in values
//! - **Placeholders** ([`Placeholders`]): finds and replaces placeholders in text
//!
//! ## Rules
//!
//! - **No I/O**: No filesystem, network, or environment access
//! - **Immutable inputs**: resolution builds a new set instead of editing values
//! - **Stable order**: sequences, never hash order, so results are reproducible
pub mod entities;
pub mod error;
pub mod placeholders;
pub mod resolver;
pub mod value_objects;

pub use entities::{Token, TokenSet, merge};
pub use error::{DomainError, ErrorCategory};
pub use placeholders::Placeholders;
pub use resolver::{MAX_RESOLVE_ITERATIONS, NON_CONVERGENCE_WARNING, Resolution, resolve};
pub use value_objects::{DEFAULT_PREFIX, DEFAULT_SUFFIX, Delimiters};
