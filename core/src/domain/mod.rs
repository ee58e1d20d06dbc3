//! Domain layer containing the entities carried inside signed tokens.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{Claims, TokenClass, TokenPair};
