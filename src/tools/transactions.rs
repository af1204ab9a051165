use crate::config::RelayConfig;
use crate::http::HttpClient;
use crate::models::AppError;
use crate::utils::mask_wallet_address;
use lambda_runtime::tracing::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue};

/// Header carrying the Sim API key
pub const API_KEY_HEADER: &str = "X-Sim-Api-Key";

/// Fetches the transaction history of `wallet_address` from the Sim API.
///
/// The body comes back exactly as the API sent it: no JSON parsing and no
/// status inspection, so an error payload from Sim is relayed like any other.
///
/// # Errors
///
/// This function will return an error if:
/// - The configured API key is not a valid header value.
/// - The request times out or fails at the transport level.
pub async fn fetch_wallet_transactions(
    client: &dyn HttpClient,
    config: &RelayConfig,
    wallet_address: &str,
) -> Result<String, AppError> {
    let url = config.transactions_url(wallet_address);
    let headers = build_headers(config)?;

    if config.log_wallet_address {
        debug!(url = %url, "Requesting wallet transactions from Sim API");
    } else {
        debug!(
            url = %config.transactions_url(&mask_wallet_address(wallet_address)),
            "Requesting wallet transactions from Sim API"
        );
    }

    let body = client.get_text(&url, headers).await?;

    info!(body_size = body.len(), "Received Sim API response");

    Ok(body)
}

fn build_headers(config: &RelayConfig) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &config.api_key {
        let mut value = HeaderValue::from_str(api_key).map_err(|_| {
            AppError::ConfigError("SIM_API_KEY is not a valid HTTP header value".to_string())
        })?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the last request and answers with a canned result
    struct RecordingClient {
        reply: fn() -> Result<String, AppError>,
        seen: Mutex<Option<(String, HeaderMap)>>,
    }

    impl RecordingClient {
        fn new(reply: fn() -> Result<String, AppError>) -> Self {
            Self {
                reply,
                seen: Mutex::new(None),
            }
        }

        fn seen(&self) -> (String, HeaderMap) {
            self.seen.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl HttpClient for RecordingClient {
        async fn get_text(&self, url: &str, headers: HeaderMap) -> Result<String, AppError> {
            *self.seen.lock().unwrap() = Some((url.to_string(), headers));
            (self.reply)()
        }
    }

    fn config_with_key(api_key: Option<&str>) -> RelayConfig {
        RelayConfig {
            api_key: api_key.map(str::to_string),
            ..RelayConfig::default()
        }
    }

    #[tokio::test]
    async fn test_sends_api_key_and_url() {
        let client = RecordingClient::new(|| Ok("OK".to_string()));
        let body = fetch_wallet_transactions(&client, &config_with_key(Some("k1")), "0xabc")
            .await
            .unwrap();

        assert_eq!(body, "OK");
        let (url, headers) = client.seen();
        assert_eq!(url, "https://api.sim.dune.com/v1/evm/transactions/0xabc");
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "k1");
        assert!(headers.get(API_KEY_HEADER).unwrap().is_sensitive());
    }

    #[tokio::test]
    async fn test_missing_api_key_omits_header() {
        let client = RecordingClient::new(|| Ok("{\"error\":\"unauthorized\"}".to_string()));
        let body = fetch_wallet_transactions(&client, &config_with_key(None), "0xabc")
            .await
            .unwrap();

        assert_eq!(body, "{\"error\":\"unauthorized\"}");
        assert!(client.seen().1.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_api_key_is_config_error() {
        let client = RecordingClient::new(|| Ok(String::new()));
        let err = fetch_wallet_transactions(&client, &config_with_key(Some("bad\nkey")), "0xabc")
            .await
            .unwrap_err();

        assert_eq!(err.error_type(), "ConfigError");
        assert!(client.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = RecordingClient::new(|| Err(AppError::UpstreamError("connection refused".to_string())));
        let err = fetch_wallet_transactions(&client, &config_with_key(Some("k1")), "0xabc")
            .await
            .unwrap_err();

        assert_eq!(err.error_type(), "UpstreamError");
    }
}
