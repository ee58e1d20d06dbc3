//! In-memory implementation of the revocation registry.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::r#trait::RevocationRegistry;

/// Process-local revocation registry backed by a `HashSet`.
///
/// Volatile: the set is reset on process restart, so revocations issued
/// before a restart are forgotten. Entries are never evicted, not even after
/// the token carrying them would have expired naturally, so the set grows
/// monotonically for the process lifetime.
///
/// Cloning is cheap and all clones share the same underlying set.
#[derive(Clone)]
pub struct InMemoryRevocationRegistry {
    revoked: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryRevocationRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Number of revoked identifiers currently tracked
    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }

    /// Whether the registry currently tracks no identifiers
    pub async fn is_empty(&self) -> bool {
        self.revoked.read().await.is_empty()
    }
}

impl Default for InMemoryRevocationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRegistry for InMemoryRevocationRegistry {
    async fn add(&self, jti: &str) -> Result<(), DomainError> {
        let mut revoked = self.revoked.write().await;
        revoked.insert(jti.to_string());
        Ok(())
    }

    async fn has(&self, jti: &str) -> Result<bool, DomainError> {
        let revoked = self.revoked.read().await;
        Ok(revoked.contains(jti))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut revoked = self.revoked.write().await;
        revoked.clear();
        Ok(())
    }
}
