//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// Lookups are exact-match on `key` with no case normalization.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<Link>, AppError>;

    /// Reports whether a link with the given key exists.
    ///
    /// Used to pre-check caller-supplied keys before the (network-expensive)
    /// URL validation step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn exists_by_key(&self, key: &str) -> Result<bool, AppError>;

    /// Inserts a new link, returning the persisted row with its assigned
    /// `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreConflict`] if the unique constraint on `key`
    /// is violated concurrently (the existence check and the insert are two
    /// separate statements; the constraint is the only backstop for that
    /// race). Returns [`AppError::Database`] on other database errors.
    async fn save(&self, new_link: NewLink) -> Result<Link, AppError>;
}
