//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared state handed to every handler
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and strict parameter parsing
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &Config) -> Router {
    let services = Arc::new(services::AppServices::build(config));
    let auth_state = middleware::AuthState {
        tokens: services.tokens.clone(),
    };

    // Catalog routes: require a valid bearer token.
    let protected = routes::sweets::router()
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/auth", routes::auth::router())
        .nest("/api/sweets", protected)
        .layer(Extension(services))
}
