//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, TokenClass, TokenPair};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevocationRegistry;

use super::config::TokenServiceConfig;

/// Signing key material for one token class.
struct ClassKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl ClassKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Service for issuing, verifying and revoking signed bearer tokens.
///
/// The service holds one symmetric key per token class. Access tokens are
/// only ever verified against the access key and refresh tokens only against
/// the refresh key, so compromise or misuse of one key cannot forge the
/// other class.
///
/// The revocation registry is injected at construction; swapping the
/// in-memory registry for a durable or shared backend does not touch any
/// verification logic.
pub struct TokenService<R: RevocationRegistry> {
    pub(crate) registry: R,
    config: TokenServiceConfig,
    access_keys: ClassKeys,
    refresh_keys: ClassKeys,
    validation: Validation,
}

impl<R: RevocationRegistry> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `registry` - Revocation registry consulted during access token
    ///   verification and written to by [`revoke`](Self::revoke)
    /// * `config` - Token service configuration (secrets, algorithm, TTLs)
    pub fn new(registry: R, config: TokenServiceConfig) -> Self {
        let access_keys = ClassKeys::from_secret(&config.access_secret);
        let refresh_keys = ClassKeys::from_secret(&config.refresh_secret);

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            registry,
            config,
            access_keys,
            refresh_keys,
            validation,
        }
    }

    /// Issues a signed access token for a subject
    ///
    /// # Arguments
    ///
    /// * `subject` - The subject identifier; must be non-empty
    /// * `ttl` - Time until expiry, counted from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token, carrying a freshly generated `jti`
    /// * `Err(DomainError)` - Empty subject or signing failure
    pub fn issue_access_token(&self, subject: &str, ttl: Duration) -> Result<String, DomainError> {
        let claims = self.build_claims(subject, TokenClass::Access, ttl)?;
        self.encode_jwt(&claims, &self.access_keys)
    }

    /// Issues a signed refresh token for a subject
    ///
    /// Same contract as [`issue_access_token`](Self::issue_access_token) but
    /// the claims carry the refresh class discriminant and the token is
    /// signed with the refresh key.
    pub fn issue_refresh_token(&self, subject: &str, ttl: Duration) -> Result<String, DomainError> {
        let claims = self.build_claims(subject, TokenClass::Refresh, ttl)?;
        self.encode_jwt(&claims, &self.refresh_keys)
    }

    /// Issues an access + refresh token pair at the configured default TTLs
    ///
    /// # Arguments
    ///
    /// * `subject` - The subject identifier; must be non-empty
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens plus their lifetimes in seconds
    /// * `Err(DomainError)` - Empty subject or signing failure
    pub fn issue_token_pair(&self, subject: &str) -> Result<TokenPair, DomainError> {
        let access_ttl = Duration::minutes(self.config.access_token_expiry_minutes);
        let refresh_ttl = Duration::days(self.config.refresh_token_expiry_days);

        let access_token = self.issue_access_token(subject, access_ttl)?;
        let refresh_token = self.issue_refresh_token(subject, refresh_ttl)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            access_ttl.num_seconds(),
            refresh_ttl.num_seconds(),
        ))
    }

    /// Verifies an access token and returns its claims
    ///
    /// Checks, in order: parse + signature against the access key, expiry,
    /// token class, and finally membership of the `jti` in the revocation
    /// registry.
    ///
    /// # Arguments
    ///
    /// * `token` - The signed access token to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Verified claims: not expired, not revoked, access class
    /// * `Err(DomainError)` - One of the `TokenError` kinds: `Malformed`,
    ///   `InvalidSignature`, `Expired`, `WrongTokenClass` or `Revoked`
    pub async fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode_jwt(token, TokenClass::Access)?;

        if self.registry.has(&claims.jti).await? {
            warn!(jti = %claims.jti, "rejected revoked access token");
            return Err(DomainError::Token(TokenError::Revoked));
        }

        Ok(claims)
    }

    /// Verifies a refresh token and returns its claims
    ///
    /// Same signature, expiry and class checks as access verification, using
    /// the refresh key. Presenting an access token here fails with
    /// `WrongTokenClass`.
    ///
    /// Refresh tokens are deliberately not checked against the revocation
    /// registry: `revoke` invalidates access tokens only, and a refresh
    /// token can only be retired by letting it expire. Callers that need
    /// individually revocable refresh tokens must layer their own mechanism
    /// on top.
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode_jwt(token, TokenClass::Refresh)?;
        Ok(claims)
    }

    /// Configured default access token lifetime
    pub fn default_access_ttl(&self) -> Duration {
        Duration::minutes(self.config.access_token_expiry_minutes)
    }

    /// Configured default refresh token lifetime
    pub fn default_refresh_ttl(&self) -> Duration {
        Duration::days(self.config.refresh_token_expiry_days)
    }

    /// Revokes a token identifier
    ///
    /// Inserts the `jti` into the revocation registry. Idempotent: revoking
    /// an already-revoked identifier is a no-op success. No check is made
    /// that the identifier belongs to a previously issued token.
    ///
    /// # Arguments
    ///
    /// * `jti` - The token identifier to revoke
    pub async fn revoke(&self, jti: &str) -> Result<(), DomainError> {
        self.registry.add(jti).await?;
        debug!(%jti, "token identifier revoked");
        Ok(())
    }

    fn build_claims(
        &self,
        subject: &str,
        cls: TokenClass,
        ttl: Duration,
    ) -> Result<Claims, DomainError> {
        if subject.is_empty() {
            return Err(DomainError::Validation {
                message: "subject must not be empty".to_string(),
            });
        }

        let claims = match cls {
            TokenClass::Access => Claims::new_access_token(subject, ttl),
            TokenClass::Refresh => Claims::new_refresh_token(subject, ttl),
        };
        debug!(sub = %claims.sub, jti = %claims.jti, class = %cls, "issuing token");
        Ok(claims)
    }

    /// Encodes claims into a JWT signed with the given class key
    fn encode_jwt(&self, claims: &Claims, keys: &ClassKeys) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &keys.encoding)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Decodes a JWT with the key of the expected class and checks the
    /// class discriminant
    fn decode_jwt(&self, token: &str, expected: TokenClass) -> Result<Claims, DomainError> {
        let keys = match expected {
            TokenClass::Access => &self.access_keys,
            TokenClass::Refresh => &self.refresh_keys,
        };

        match decode::<Claims>(token, &keys.decoding, &self.validation) {
            Ok(data) => {
                // The jsonwebtoken validator keeps the expiry second itself
                // valid (it rejects only once exp < now - leeway). A token is
                // expired from the moment now >= exp, so enforce the
                // inclusive boundary here.
                let leeway = self.config.leeway_seconds as i64;
                if Utc::now().timestamp() >= data.claims.exp + leeway {
                    return Err(DomainError::Token(TokenError::Expired));
                }
                if data.claims.cls != expected {
                    return Err(DomainError::Token(TokenError::WrongTokenClass));
                }
                Ok(data.claims)
            }
            Err(e) => Err(self.map_decode_error(token, expected, e)),
        }
    }

    fn map_decode_error(
        &self,
        token: &str,
        expected: TokenClass,
        error: jsonwebtoken::errors::Error,
    ) -> DomainError {
        use jsonwebtoken::errors::ErrorKind;

        let kind = match error.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => {
                // A token minted for the other class is signed with the other
                // key, so the signature check fails before the class field is
                // ever read. Peek at the unverified payload to tell the two
                // cases apart.
                match self.peek_token_class(token) {
                    Some(cls) if cls != expected => TokenError::WrongTokenClass,
                    _ => TokenError::InvalidSignature,
                }
            }
            _ => TokenError::Malformed,
        };
        DomainError::Token(kind)
    }

    /// Reads the class discriminant out of a token without verifying its
    /// signature or expiry. Only used to refine error reporting; the result
    /// is never trusted for authorization.
    fn peek_token_class(&self, token: &str) -> Option<TokenClass> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .ok()
            .map(|data| data.claims.cls)
    }
}
