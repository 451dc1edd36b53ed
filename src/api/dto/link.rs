//! DTOs and payload validation for the shortener endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use crate::domain::entities::Link;

/// Allowed characters for a caller-supplied key.
static KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-_]+$").unwrap());

const KEY_MIN_LENGTH: usize = 3;
const KEY_MAX_LENGTH: usize = 30;

/// Request to create a short link.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    /// The original URL to shorten.
    pub url: String,

    /// Optional caller-supplied key. Blank or absent routes to the
    /// generated-key path.
    #[serde(default)]
    pub custom_key: Option<String>,
}

impl LinkRequest {
    /// The custom key, with blank values treated as absent.
    pub fn custom_key(&self) -> Option<&str> {
        self.custom_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Response body for a created or looked-up link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub key: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            key: link.key,
            url: link.url,
            created_at: link.created_at,
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validates the request payload before the service is invoked.
///
/// Returns every violated rule, not just the first:
/// - `url` must be non-blank and a syntactically valid http(s) URL with a host
/// - `customKey`, when present and non-blank, must be 3-30 characters of
///   letters, digits, `-` and `_`
pub fn validate_link_request(request: &LinkRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let url = request.url.trim();
    if url.is_empty() {
        errors.push(FieldError::new("url", "URL is mandatory"));
    } else if !is_well_formed_url(url) {
        errors.push(FieldError::new("url", "Must be a valid URL"));
    }

    if let Some(key) = request.custom_key() {
        if key.chars().count() < KEY_MIN_LENGTH || key.chars().count() > KEY_MAX_LENGTH {
            errors.push(FieldError::new(
                "customKey",
                "Key length must be between 3 and 30 characters",
            ));
        }
        if !KEY_REGEX.is_match(key) {
            errors.push(FieldError::new(
                "customKey",
                "Key should contain only letters, numbers, `-` and `_`",
            ));
        }
    }

    errors
}

/// Syntactic URL check: parseable, http(s) scheme, host present.
///
/// Liveness is a separate, later concern; this only rejects values that could
/// never name a reachable resource.
fn is_well_formed_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            (parsed.scheme() == "http" || parsed.scheme() == "https") && parsed.host().is_some()
        }
        Err(_) => false,
    }
}
