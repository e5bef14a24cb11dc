//! Cross-origin policy applied to every response.
//!
//! Origins, methods and headers are all wildcarded and credentials are
//! advertised as allowed. `CorsLayer` panics when `allow_credentials(true)` is
//! combined with wildcards, so the credentials header is set by a separate
//! response-header layer wrapped around it. Preflight responses produced by
//! `CorsLayer` pass through that outer layer as well.

use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_CREDENTIALS;
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// The composed CORS layer returned by [`layer`].
pub type CorsPolicyLayer =
    ServiceBuilder<Stack<CorsLayer, Stack<SetResponseHeaderLayer<HeaderValue>, Identity>>>;

/// Builds the permissive CORS policy.
pub fn layer() -> CorsPolicyLayer {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
