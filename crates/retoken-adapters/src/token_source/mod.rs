//! Token source adapters.
//!
//! Each adapter produces one batch; the core `TokenService` merges batches in
//! the order the sources are given.

mod github;
mod json_file;
mod static_source;

pub use github::{
    API_VERSION, DEFAULT_API_URL, GitHubEnvironmentSource, GitHubRepository, PER_PAGE,
};
pub use json_file::JsonFileSource;
pub use static_source::StaticSource;
