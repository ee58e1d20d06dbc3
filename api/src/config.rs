//! Environment-based configuration for the demo server.

use std::env;

use ak_core::services::token::TokenServiceConfig;

/// Server and secret configuration loaded from the environment.
///
/// The secret fallbacks are development placeholders; any real deployment
/// must set `ACCESS_SECRET` and `REFRESH_SECRET` explicitly. The two keys
/// are expected to stay stable for the process lifetime; rotating them
/// mid-process invalidates every outstanding token of that class.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub access_secret: String,
    pub refresh_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("SERVER_PORT must be a valid port number");

        Self {
            server_host,
            server_port,
            access_secret: env::var("ACCESS_SECRET").unwrap_or_else(|_| "access_secret".to_string()),
            refresh_secret: env::var("REFRESH_SECRET")
                .unwrap_or_else(|_| "refresh_secret".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Token service configuration derived from the loaded secrets
    pub fn token_service_config(&self) -> TokenServiceConfig {
        TokenServiceConfig {
            access_secret: self.access_secret.clone(),
            refresh_secret: self.refresh_secret.clone(),
            ..TokenServiceConfig::default()
        }
    }
}
