//! Token-specific error kinds for verification and issuance failures.
//!
//! Each variant is a distinguishable kind so that callers branch on the
//! failure instead of matching on message strings. Transport-level mapping
//! (HTTP status codes, response bodies) belongs to the presentation layer.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token cannot be parsed into the expected structure
    #[error("Token is malformed")]
    Malformed,

    /// The signature does not verify against the expected key
    #[error("Token signature verification failed")]
    InvalidSignature,

    /// The current time is at or after the token's expiry
    #[error("Token expired")]
    Expired,

    /// The token's JWT ID is present in the revocation registry
    #[error("Token revoked")]
    Revoked,

    /// A token of one class was presented where the other is required
    #[error("Wrong token class")]
    WrongTokenClass,

    /// Signing the claims failed
    #[error("Token generation failed")]
    GenerationFailed,
}
