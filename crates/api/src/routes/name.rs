//! Name endpoint.

use axum::Json;
use serde::Serialize;

/// The name reported by `GET /`.
pub const NAME: &str = "Mohamed";

#[derive(Debug, Serialize)]
pub struct NameResponse {
    pub name: &'static str,
}

/// GET / — returns the fixed name payload.
pub async fn get() -> Json<NameResponse> {
    Json(NameResponse { name: NAME })
}
