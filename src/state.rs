//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// State shared across all request handlers.
///
/// Assembled once at startup by explicit constructor injection; handlers hold
/// the service, the service holds repository/generator/validator.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    /// Kept alongside the service for the health check's connectivity probe.
    pub db: PgPool,
}
