//! End-to-end tests for the demo auth routes.

use actix_web::{test, web, App};
use std::sync::Arc;

use ak_api::app::{configure, AppState};
use ak_api::dto::auth::{
    AuthResponse, ErrorResponse, LogoutResponse, ProtectedResponse, RefreshTokenResponse,
};
use ak_api::users::UserDirectory;
use ak_core::repositories::InMemoryRevocationRegistry;
use ak_core::services::token::{TokenService, TokenServiceConfig};

fn test_state() -> web::Data<AppState<InMemoryRevocationRegistry>> {
    let config = TokenServiceConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        ..TokenServiceConfig::default()
    };

    web::Data::new(AppState {
        token_service: Arc::new(TokenService::new(InMemoryRevocationRegistry::new(), config)),
        users: UserDirectory::with_demo_users(),
    })
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(test_state())
                .configure(configure::<InMemoryRevocationRegistry>),
        )
        .await
    };
}

#[actix_web::test]
async fn test_login_rejects_unknown_credentials() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"user_id": "mallory", "password": "password"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_protected_requires_bearer_token() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/protected").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/v1/protected")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_logout_requires_token_or_jti() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .set_json(serde_json::json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_full_token_lifecycle() {
    let app = init_app!();

    // Login for a token pair
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"user_id": "alice", "password": "password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let tokens: AuthResponse = test::read_body_json(resp).await;
    assert_eq!(tokens.access_expires_in, 15 * 60);

    // Access token opens the protected route
    let req = test::TestRequest::get()
        .uri("/api/v1/protected")
        .insert_header(("Authorization", format!("Bearer {}", tokens.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: ProtectedResponse = test::read_body_json(resp).await;
    assert_eq!(body.user_id, "alice");
    let jti = body.jti;

    // Refresh token mints a fresh access token
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({"refresh_token": tokens.refresh_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let refreshed: RefreshTokenResponse = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/protected")
        .insert_header(("Authorization", format!("Bearer {}", refreshed.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // Logout with the original access token
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .set_json(serde_json::json!({"token": tokens.access_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let logout: LogoutResponse = test::read_body_json(resp).await;
    assert_eq!(logout.revoked, jti);

    // The revoked access token is rejected with the revoked kind
    let req = test::TestRequest::get()
        .uri("/api/v1/protected")
        .insert_header(("Authorization", format!("Bearer {}", tokens.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.code, "revoked");

    // Logging out the same token again is still a success
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .set_json(serde_json::json!({"token": tokens.access_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let logout: LogoutResponse = test::read_body_json(resp).await;
    assert_eq!(logout.revoked, "already revoked");
}

#[actix_web::test]
async fn test_access_token_rejected_by_refresh_route() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"user_id": "alice", "password": "password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let tokens: AuthResponse = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({"refresh_token": tokens.access_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.code, "wrong_token_class");
}
