//! Outbound HTTP implementation of the liveness check.

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::UrlValidator;
use crate::error::AppError;

/// Validates URLs with a single outbound GET request.
///
/// No retries: a transient network failure rejects the URL. No explicit
/// timeout is set; the transport default applies, so a hanging remote host
/// stalls the create request for that long.
pub struct HttpUrlValidator {
    client: Client,
}

impl HttpUrlValidator {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpUrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlValidator for HttpUrlValidator {
    async fn validate(&self, url: &str) -> Result<(), AppError> {
        let response = self.client.get(url.trim()).send().await.map_err(|e| {
            let message = format!("Invalid URL. {e}");
            warn!("{message}");
            AppError::bad_url(message)
        })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let message = format!("URL {url} returned status code {}", status.as_u16());
            warn!("{message}");
            return Err(AppError::bad_url(message));
        }

        Ok(())
    }
}
