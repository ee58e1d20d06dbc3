use actix_web::{web, HttpResponse};

use ak_core::errors::{DomainError, TokenError};
use ak_core::repositories::RevocationRegistry;

use crate::app::AppState;
use crate::dto::auth::{ErrorResponse, LogoutRequest, LogoutResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes an access token, given either the full token or its bare JWT ID.
/// When the full token is supplied it is verified first to recover the
/// `jti`; a token that turns out to be already revoked is treated as a
/// successful logout rather than an error.
///
/// # Request Body
///
/// ```json
/// { "token": "eyJ..." }
/// ```
/// or
/// ```json
/// { "jti": "3b2c7e0a-..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "revoked": "3b2c7e0a-..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Neither `token` nor `jti` supplied, or unparseable token
/// - 401 Unauthorized: Forged or expired token supplied
pub async fn logout<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    R: RevocationRegistry + 'static,
{
    let jti = match (&request.jti, &request.token) {
        (Some(jti), _) if !jti.is_empty() => jti.clone(),
        (_, Some(token)) => match state.token_service.verify_access_token(token).await {
            Ok(claims) => claims.jti,
            // Revoking an already-revoked token is an acceptable outcome.
            Err(DomainError::Token(TokenError::Revoked)) => {
                return HttpResponse::Ok().json(LogoutResponse {
                    revoked: "already revoked".to_string(),
                });
            }
            Err(error) => return handle_domain_error(&error),
        },
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("token or jti required", "validation"));
        }
    };

    match state.token_service.revoke(&jti).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse { revoked: jti }),
        Err(error) => handle_domain_error(&error),
    }
}
