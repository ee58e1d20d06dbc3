//! # AuthKit Core
//!
//! Core token lifecycle domain for the AuthKit backend.
//! This crate contains the claims entities, the token service, the revocation
//! registry interface, and the error types that form the foundation shared by
//! every consumer of the token lifecycle.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{Claims, TokenClass, TokenPair};
pub use services::{TokenService, TokenServiceConfig};
pub use repositories::{InMemoryRevocationRegistry, RevocationRegistry};
pub use errors::{DomainError, DomainResult, TokenError};
