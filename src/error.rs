//! Application error taxonomy and HTTP problem-document rendering.
//!
//! Every failure surfaced to a client becomes an RFC 7807 problem document
//! (`type`, `title`, `status`, `detail`, `instance`) served as
//! `application/problem+json`. Database failures keep their full detail on the
//! server side and hand the client a generic message.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Central error type for the service.
///
/// Each variant maps to exactly one HTTP status code; the mapping lives in
/// [`AppError::status`].
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted URL is malformed, unreachable, or answered with an
    /// error status. Maps to 400.
    #[error("{0}")]
    BadUrl(String),

    /// The request payload failed field-level validation. Maps to 400.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// A caller-supplied key collides with an existing link. Maps to 409.
    #[error("Key '{0}' already exists")]
    KeyAlreadyExists(String),

    /// Lookup miss. Maps to 404.
    #[error("Link with key '{0}' not found")]
    KeyNotFound(String),

    /// The unique constraint fired at insert time even though the existence
    /// check passed. Maps to 500 and is logged as unexpected.
    #[error("Unique constraint violated on insert (constraint: {constraint:?})")]
    StoreConflict { constraint: Option<String> },

    /// Any other database failure. Maps to 500 with a generic client message.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Invariant breakage inside the service itself. Maps to 500.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_url(message: impl Into<String>) -> Self {
        Self::BadUrl(message.into())
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    pub fn key_already_exists(key: impl Into<String>) -> Self {
        Self::KeyAlreadyExists(key.into())
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadUrl(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::KeyAlreadyExists(_) => StatusCode::CONFLICT,
            Self::KeyNotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreConflict { .. } | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Human-readable cause for the problem document `detail` field.
    ///
    /// Server-side failures collapse to a generic message; the real cause is
    /// logged, never sent to the client.
    pub fn detail(&self) -> String {
        match self {
            Self::StoreConflict { .. } | Self::Database(_) | Self::Internal(_) => {
                "Sorry, something went wrong. Try again later".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Converts the error into a responder carrying the request path.
    pub fn at(self, instance: impl Into<String>) -> ApiError {
        ApiError {
            error: self,
            instance: instance.into(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e)
    }
}

/// RFC 7807 problem document body.
#[derive(Debug, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
    pub instance: String,
}

/// An [`AppError`] bound to the request path it occurred on.
///
/// Handlers produce this via [`AppError::at`] so the problem document can
/// carry a populated `instance` field.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    instance: String,
}

impl ApiError {
    pub fn error(&self) -> &AppError {
        &self.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status();

        match &self.error {
            AppError::BadUrl(_) | AppError::Validation(_) => {
                tracing::warn!(instance = %self.instance, "{}", self.error);
            }
            AppError::KeyAlreadyExists(_) | AppError::KeyNotFound(_) => {
                tracing::info!(instance = %self.instance, "{}", self.error);
            }
            AppError::StoreConflict { .. } => {
                tracing::error!(
                    instance = %self.instance,
                    "insert hit unique constraint after existence check passed: {}",
                    self.error
                );
            }
            AppError::Database(source) => {
                tracing::error!(instance = %self.instance, "database error: {source}");
            }
            AppError::Internal(_) => {
                tracing::error!(instance = %self.instance, "{}", self.error);
            }
        }

        let body = Problem {
            type_: "about:blank",
            title: status.canonical_reason().unwrap_or("Error"),
            status: status.as_u16(),
            detail: self.error.detail(),
            instance: self.instance,
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(body),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_url("nope").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::validation(vec!["URL is mandatory".into()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::key_already_exists("abc").status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::key_not_found("abc").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::StoreConflict { constraint: None }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_side_errors_get_generic_detail() {
        let err = AppError::StoreConflict {
            constraint: Some("links_key_key".to_string()),
        };
        assert_eq!(err.detail(), "Sorry, something went wrong. Try again later");

        let err = AppError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.detail(), "Sorry, something went wrong. Try again later");
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = AppError::key_already_exists("mykey");
        assert_eq!(err.detail(), "Key 'mykey' already exists");

        let err = AppError::validation(vec![
            "URL is mandatory".to_string(),
            "Key length must be between 3 and 30 characters".to_string(),
        ]);
        assert_eq!(
            err.detail(),
            "URL is mandatory; Key length must be between 3 and 30 characters"
        );
    }

    #[test]
    fn test_problem_document_shape() {
        let response = AppError::key_not_found("ghost").at("/api/v1/shortener/ghost");
        let body = Problem {
            type_: "about:blank",
            title: response.error().status().canonical_reason().unwrap(),
            status: response.error().status().as_u16(),
            detail: response.error().detail(),
            instance: "/api/v1/shortener/ghost".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["title"], "Not Found");
        assert_eq!(json["status"], 404);
        assert_eq!(json["detail"], "Link with key 'ghost' not found");
        assert_eq!(json["instance"], "/api/v1/shortener/ghost");
    }

    #[test]
    fn test_sqlx_errors_map_to_database() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
