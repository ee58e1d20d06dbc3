use actix_web::{web, HttpResponse};

use ak_core::repositories::RevocationRegistry;

use crate::app::AppState;
use crate::dto::auth::{RefreshTokenRequest, RefreshTokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a valid refresh token for a new access token.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "expires_in": 900
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Token cannot be parsed
/// - 401 Unauthorized: Forged, expired, or access-class token presented
/// - 500 Internal Server Error: Token generation failure
pub async fn refresh_token<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    R: RevocationRegistry + 'static,
{
    let claims = match state
        .token_service
        .verify_refresh_token(&request.refresh_token)
        .await
    {
        Ok(claims) => claims,
        Err(error) => return handle_domain_error(&error),
    };

    let ttl = state.token_service.default_access_ttl();
    match state.token_service.issue_access_token(&claims.sub, ttl) {
        Ok(access_token) => HttpResponse::Ok().json(RefreshTokenResponse {
            access_token,
            expires_in: ttl.num_seconds(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
