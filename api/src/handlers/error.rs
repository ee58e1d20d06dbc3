//! Mapping from domain error kinds to HTTP responses.

use actix_web::HttpResponse;

use ak_core::errors::{DomainError, TokenError};

use crate::dto::auth::ErrorResponse;

/// Stable machine-readable code for a token failure kind
fn token_error_code(error: &TokenError) -> &'static str {
    match error {
        TokenError::Malformed => "malformed",
        TokenError::InvalidSignature => "invalid_signature",
        TokenError::Expired => "expired",
        TokenError::Revoked => "revoked",
        TokenError::WrongTokenClass => "wrong_token_class",
        TokenError::GenerationFailed => "generation_failed",
    }
}

/// Converts a domain error into the matching HTTP response.
///
/// Verification failures map to 401 so clients retry with fresh
/// credentials; malformed input is the caller's fault and maps to 400.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) => {
            let body = ErrorResponse::new(token_error.to_string(), token_error_code(token_error));
            match token_error {
                TokenError::Malformed => HttpResponse::BadRequest().json(body),
                TokenError::InvalidSignature
                | TokenError::Expired
                | TokenError::Revoked
                | TokenError::WrongTokenClass => HttpResponse::Unauthorized().json(body),
                TokenError::GenerationFailed => HttpResponse::InternalServerError().json(body),
            }
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message.clone(), "validation"))
        }
        DomainError::Internal { .. } => HttpResponse::InternalServerError()
            .json(ErrorResponse::new("internal error", "internal")),
    }
}
