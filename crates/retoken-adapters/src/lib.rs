//! Infrastructure adapters for retoken.
//!
//! This crate implements the ports defined in `retoken-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod patterns;
pub mod token_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use patterns::expand_file_patterns;
pub use token_source::{GitHubEnvironmentSource, GitHubRepository, JsonFileSource, StaticSource};
