//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Default refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// The class of a signed token.
///
/// Encoded explicitly in the payload (`cls` claim) so that "access" is a
/// positive statement rather than the absence of a refresh marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// Short-lived credential authorizing immediate API access
    Access,
    /// Longer-lived credential used solely to obtain new access tokens
    Refresh,
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenClass::Access => write!(f, "access"),
            TokenClass::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated principal)
    pub sub: String,

    /// JWT ID (unique identifier for the token, the unit of revocation)
    pub jti: String,

    /// Token class discriminant
    pub cls: TokenClass,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The subject identifier
    /// * `ttl` - Time until expiry, counted from now
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with a freshly generated `jti`
    pub fn new_access_token(subject: &str, ttl: Duration) -> Self {
        Self::new(subject, TokenClass::Access, ttl)
    }

    /// Creates new claims for a refresh token
    ///
    /// # Arguments
    ///
    /// * `subject` - The subject identifier
    /// * `ttl` - Time until expiry, counted from now
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with a freshly generated `jti`
    pub fn new_refresh_token(subject: &str, ttl: Duration) -> Self {
        Self::new(subject, TokenClass::Refresh, ttl)
    }

    fn new(subject: &str, cls: TokenClass, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: subject.to_string(),
            jti: Uuid::new_v4().to_string(),
            cls,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// # Returns
    ///
    /// `true` if the current time is at or past `exp`, `false` otherwise
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks whether the claims belong to the given token class
    pub fn is_class(&self, cls: TokenClass) -> bool {
        self.cls == cls
    }
}

/// Token pair returned to the client after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    ///
    /// # Arguments
    ///
    /// * `access_token` - The signed access token
    /// * `refresh_token` - The signed refresh token
    /// * `access_expires_in` - Access token lifetime in seconds
    /// * `refresh_expires_in` - Refresh token lifetime in seconds
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let claims = Claims::new_access_token("user1", Duration::minutes(15));

        assert_eq!(claims.sub, "user1");
        assert_eq!(claims.cls, TokenClass::Access);
        assert!(claims.is_class(TokenClass::Access));
        assert!(!claims.is_expired());
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn test_refresh_token_claims() {
        let claims = Claims::new_refresh_token("user2", Duration::days(7));

        assert_eq!(claims.sub, "user2");
        assert_eq!(claims.cls, TokenClass::Refresh);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let claims = Claims::new_access_token("user1", Duration::seconds(-1));

        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_jti_unique_per_construction() {
        let a = Claims::new_access_token("user1", Duration::minutes(15));
        let b = Claims::new_access_token("user1", Duration::minutes(15));

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_token_class_serialization() {
        assert_eq!(
            serde_json::to_string(&TokenClass::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&TokenClass::Refresh).unwrap(),
            "\"refresh\""
        );
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_refresh_token("user2", Duration::days(7));

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new(
            "access_token_jwt".to_string(),
            "refresh_token_jwt".to_string(),
            ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        );

        assert_eq!(pair.access_token, "access_token_jwt");
        assert_eq!(pair.refresh_token, "refresh_token_jwt");
        assert_eq!(pair.access_expires_in, 15 * 60);
        assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
    }
}
