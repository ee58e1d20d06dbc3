//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Access and refresh JWT issuance under separate signing keys
//! - Signature, expiry and class verification
//! - Revocation of access tokens by JWT ID

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
