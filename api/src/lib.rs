//! HTTP consumer for the AuthKit token service.
//!
//! Thin glue only: route handlers extract bearer credentials from requests,
//! call into `ak_core` and map failure kinds onto transport responses. All
//! token lifecycle logic lives in the core crate.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod users;
