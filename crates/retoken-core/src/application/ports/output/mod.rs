//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `retoken-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TokenSet;
use crate::error::RetokenResult;

/// Port for reading and rewriting target files.
///
/// Implemented by:
/// - `retoken_adapters::filesystem::LocalFilesystem` (production)
/// - `retoken_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as text.
    ///
    /// Returns `Ok(None)` when the file does not exist or is not UTF-8
    /// text; every other failure is an error.
    fn read_to_string(&self, path: &Path) -> RetokenResult<Option<String>>;

    /// Replace the file's content.
    fn write_file(&self, path: &Path, content: &str) -> RetokenResult<()>;
}

/// Port for a batch of tokens.
///
/// Implemented by:
/// - `retoken_adapters::token_source::JsonFileSource` (token value files)
/// - `retoken_adapters::token_source::GitHubEnvironmentSource` (environment variables)
/// - `retoken_adapters::token_source::StaticSource` (in-memory)
#[cfg_attr(test, mockall::automock)]
pub trait TokenSource: Send + Sync {
    /// Human-readable origin, used in logs and errors.
    fn name(&self) -> String;

    /// Load the whole batch. Sources are read once, fully.
    fn load(&self) -> RetokenResult<TokenSet>;
}
