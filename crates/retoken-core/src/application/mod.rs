//! Application layer for retoken.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TokenService, SubstitutionService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! token logic itself. Merging, resolution and matching live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{SubstitutionReport, SubstitutionService, TokenService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TokenSource};

pub use error::ApplicationError;
