//! HTTP service that reports a fixed name under a permissive CORS policy.
//!
//! Exposes a single `GET /` endpoint, with request tracing and CORS headers
//! applied to every response.

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ServerError;

/// Creates the Axum application router with its route and middleware.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::name::get))
        .layer(cors::layer())
        .layer(TraceLayer::new_for_http())
}
