//! URL liveness validation.
//!
//! Before a link is persisted its target URL must prove it is reachable and
//! answers with a non-error status. [`HttpUrlValidator`] performs the real
//! outbound check; [`NoopValidator`] is the opt-out used when
//! `VALIDATE_URLS=false` and by hermetic integration tests.

pub mod http_validator;
pub mod noop_validator;

pub use http_validator::HttpUrlValidator;
pub use noop_validator::NoopValidator;

use crate::error::AppError;
use async_trait::async_trait;

/// Liveness check for candidate URLs.
///
/// Success is silent; all rejection reasons (malformed URL, connection
/// failure, HTTP error status) collapse to [`AppError::BadUrl`] with a
/// message distinguishing the cause.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlValidator: Send + Sync {
    /// Validates that `url` is reachable and returns a non-error status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadUrl`] when the URL is malformed, the
    /// connection cannot be established, or the response status is 4xx/5xx.
    async fn validate(&self, url: &str) -> Result<(), AppError>;
}
