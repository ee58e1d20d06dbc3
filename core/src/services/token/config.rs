//! Configuration for the token service

use jsonwebtoken::Algorithm;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing secret for access tokens
    pub access_secret: String,
    /// Signing secret for refresh tokens
    pub refresh_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Leeway in seconds applied when validating expiry
    pub leeway_seconds: u64,
    /// Default access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Default refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret-please-change-in-production".to_string(),
            refresh_secret: "development-refresh-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            leeway_seconds: 0,
            access_token_expiry_minutes: crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_token_expiry_days: crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }
}
