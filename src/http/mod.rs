use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;

use crate::models::AppError;

/// Trait for HTTP client operations to enable testing with mocks.
///
/// The relay only ever needs the raw body of a GET, so that is the whole seam.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a GET request and return the response body as text, whatever the status.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UpstreamTimeout` if the request exceeds the client timeout,
    /// or `AppError::UpstreamError` for any other transport failure.
    async fn get_text(&self, url: &str, headers: HeaderMap) -> Result<String, AppError>;
}

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: Client,
    timeout: Duration,
}

impl ReqwestClient {
    /// Builds a client whose every request is bounded by `timeout`, body included.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout })
    }

    fn map_error(&self, error: &reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::UpstreamTimeout(self.timeout)
        } else {
            AppError::UpstreamError(error.to_string())
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &str, headers: HeaderMap) -> Result<String, AppError> {
        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        response.text().await.map_err(|e| self.map_error(&e))
    }
}
