//! Application state and route wiring.

use std::sync::Arc;

use actix_web::web;

use ak_core::repositories::{InMemoryRevocationRegistry, RevocationRegistry};
use ak_core::services::token::TokenService;

use crate::config::Config;
use crate::routes;
use crate::users::UserDirectory;

/// Shared state handed to every route handler.
///
/// Generic over the revocation registry so tests and future deployments can
/// inject their own backend without touching the handlers.
pub struct AppState<R: RevocationRegistry> {
    pub token_service: Arc<TokenService<R>>,
    pub users: UserDirectory,
}

/// Builds the default state: in-memory revocation registry and the seeded
/// demo user directory.
pub fn create_app_state(config: &Config) -> AppState<InMemoryRevocationRegistry> {
    let registry = InMemoryRevocationRegistry::new();
    let token_service = TokenService::new(registry, config.token_service_config());

    AppState {
        token_service: Arc::new(token_service),
        users: UserDirectory::with_demo_users(),
    }
}

/// Registers all routes on the given service config.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: RevocationRegistry + 'static,
{
    routes::auth::configure::<R>(cfg);
}
