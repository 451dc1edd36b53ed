//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/v1/shortener/*` - shortener API (create, redirect, info)
//! - `GET /health`         - DB connectivity check
//!
//! # Middleware
//!
//! - **Tracing** - per-request spans with method/uri, response status and latency
//! - **Path normalization** - trailing slash handling (so `POST
//!   /api/v1/shortener` and `POST /api/v1/shortener/` both hit the create route)

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1/shortener", api::routes::shortener_routes())
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
