//! retoken Core - Ports and Adapters Implementation
//!
//! This crate provides the domain and application layers of retoken:
//! merge token batches, resolve tokens that reference other tokens, and
//! substitute `prefix + key + suffix` placeholders in files.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           retoken-cli (CLI)             │
//! │  (args, config, logging, exit codes)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (TokenService, SubstitutionService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, TokenSource)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    retoken-adapters (Infrastructure)    │
//! │ (LocalFilesystem, JsonFileSource, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (TokenSet, Delimiters, resolve, ...)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use retoken_core::{
//!     application::{SubstitutionService, TokenService},
//!     domain::Delimiters,
//! };
//!
//! // 1. Gather tokens from sources (file sources first, remote last)
//! let tokens = TokenService::new(sources).gather()?;
//!
//! // 2. Rewrite files (with an injected filesystem adapter)
//! let service = SubstitutionService::new(filesystem);
//! let report = service.substitute(&files, &tokens, &Delimiters::default())?;
//! for path in report.changed_files() {
//!     println!("Replaced tokens in file: {}.", path.display());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SubstitutionReport, SubstitutionService, TokenService,
        ports::{Filesystem, TokenSource},
    };
    pub use crate::domain::{
        Delimiters, Placeholders, Resolution, Token, TokenSet, merge, resolve,
    };
    pub use crate::error::{RetokenError, RetokenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
