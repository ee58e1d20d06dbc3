//! Revocation registry trait defining the denylist of token identifiers.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Registry of revoked token identifiers (JWT IDs).
///
/// This trait defines the contract for tracking tokens that were explicitly
/// invalidated before their natural expiry. The registry is consulted by the
/// token service during access token verification and written to by `revoke`.
///
/// Implementations must be safe under concurrent access: inserts and lookups
/// may race from many request handlers at once. Within one registry instance,
/// an `add` must be visible to every subsequent `has` for the same identifier.
///
/// # Example
/// ```no_run
/// # use ak_core::repositories::{InMemoryRevocationRegistry, RevocationRegistry};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = InMemoryRevocationRegistry::new();
///
/// registry.add("1c9f8a1e-revoked-jti").await?;
/// assert!(registry.has("1c9f8a1e-revoked-jti").await?);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RevocationRegistry: Send + Sync {
    /// Record a token identifier as revoked.
    ///
    /// Idempotent: adding an identifier that is already present is a no-op
    /// success. No check is made that the identifier was ever issued.
    ///
    /// # Arguments
    /// * `jti` - The token identifier to revoke
    async fn add(&self, jti: &str) -> Result<(), DomainError>;

    /// Membership test for a token identifier.
    ///
    /// # Arguments
    /// * `jti` - The token identifier to look up
    ///
    /// # Returns
    /// * `Ok(true)` - The identifier has been revoked
    /// * `Ok(false)` - The identifier is not in the registry
    async fn has(&self, jti: &str) -> Result<bool, DomainError>;

    /// Empty the registry.
    ///
    /// Test and reset utility; not part of the production request flow.
    async fn clear(&self) -> Result<(), DomainError>;
}
