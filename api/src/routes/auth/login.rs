use actix_web::{web, HttpResponse};

use ak_core::repositories::RevocationRegistry;

use crate::app::AppState;
use crate::dto::auth::{AuthResponse, ErrorResponse, LoginRequest};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/v1/auth/login
///
/// Validates the demo credentials and issues an access + refresh token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "alice",
///     "password": "password"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "access_expires_in": 900,
///     "refresh_expires_in": 604800
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown user or wrong password
/// - 500 Internal Server Error: Token generation failure
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: RevocationRegistry + 'static,
{
    if !state
        .users
        .validate_credentials(&request.user_id, &request.password)
    {
        return HttpResponse::Unauthorized()
            .json(ErrorResponse::new("invalid credentials", "invalid_credentials"));
    }

    match state.token_service.issue_token_pair(&request.user_id) {
        Ok(pair) => HttpResponse::Ok().json(AuthResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
