//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "gather tokens" or "rewrite files".

pub mod substitution_service;
pub mod token_service;

pub use substitution_service::{SubstitutionReport, SubstitutionService};
pub use token_service::TokenService;
