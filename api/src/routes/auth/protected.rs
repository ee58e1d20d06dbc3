use actix_web::{web, HttpRequest, HttpResponse};

use ak_core::repositories::RevocationRegistry;

use crate::app::AppState;
use crate::dto::auth::{ErrorResponse, ProtectedResponse};
use crate::handlers::error::handle_domain_error;

use super::extract_bearer_token;

/// Handler for GET /api/v1/protected
///
/// Demonstrates access token verification: requires a valid, unexpired and
/// unrevoked access token in the Authorization header.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "protected",
///     "user_id": "alice",
///     "jti": "3b2c7e0a-..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Token cannot be parsed
/// - 401 Unauthorized: Missing, forged, expired or revoked token
pub async fn protected<R>(req: HttpRequest, state: web::Data<AppState<R>>) -> HttpResponse
where
    R: RevocationRegistry + 'static,
{
    let Some(token) = extract_bearer_token(&req) else {
        return HttpResponse::Unauthorized()
            .json(ErrorResponse::new("missing bearer token", "missing_token"));
    };

    match state.token_service.verify_access_token(token).await {
        Ok(claims) => HttpResponse::Ok().json(ProtectedResponse {
            message: "protected".to_string(),
            user_id: claims.sub,
            jti: claims.jti,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
