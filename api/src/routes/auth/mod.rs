//! Authentication routes for the demo server.

mod login;
mod logout;
mod protected;
mod refresh;

use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest};

use ak_core::repositories::RevocationRegistry;

/// Registers the auth routes under `/api/v1`.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: RevocationRegistry + 'static,
{
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(login::login::<R>))
                    .route("/refresh", web::post().to(refresh::refresh_token::<R>))
                    .route("/logout", web::post().to(logout::logout::<R>)),
            )
            .route("/protected", web::get().to(protected::protected::<R>)),
    );
}

/// Extracts the bearer token from the Authorization header, if present.
pub(crate) fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
