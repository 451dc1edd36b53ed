//! API route configuration.

use crate::api::handlers::{create_link_handler, resolve_link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener routes, nested under `/api/v1/shortener`.
///
/// # Endpoints
///
/// - `POST /`        - Create a short link
/// - `GET  /{key}`   - Redirect to the stored URL
/// - `GET  /{key}+`  - Link info as JSON (same capture; see the handler)
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_link_handler))
        .route("/{key}", get(resolve_link_handler))
}
