//! Link entity representing a short key to URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted short link.
///
/// Immutable once created: links are only ever inserted and looked up, never
/// updated. `id` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub key: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, key: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            key,
            url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// The key has already been assigned (generated or caller-supplied) and the
/// URL has already passed liveness validation by the time this is built.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub key: String,
    pub url: String,
}
