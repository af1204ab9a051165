use lambda_runtime::tracing::{debug, error, info, warn};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::Value;

use crate::config::RelayConfig;
use crate::http::{HttpClient, ReqwestClient};
use crate::models::{ActionResponse, AppError, InvocationEvent};
use crate::tools::fetch_wallet_transactions;
use crate::utils::mask_wallet_address;

/// Relays Bedrock Agents function calls to the Sim transactions endpoint.
///
/// Holds only immutable configuration and an HTTP client, so one instance
/// serves every invocation of a warm Lambda.
pub struct TransactionRelay {
    config: RelayConfig,
    client: Box<dyn HttpClient>,
}

impl TransactionRelay {
    #[must_use]
    pub fn new(config: RelayConfig, client: Box<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    /// Builds a relay backed by reqwest with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if the HTTP client cannot be built.
    pub fn with_reqwest(config: RelayConfig) -> Result<Self, AppError> {
        let client = ReqwestClient::new(config.timeout)?;
        Ok(Self::new(config, Box::new(client)))
    }

    /// Fetches the transactions for the event's first parameter and wraps the
    /// raw body in the Bedrock response envelope.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: `parameters` is empty
    /// - `UpstreamTimeout` / `UpstreamError`: the Sim API call failed
    /// - `ConfigError`: the API key cannot be sent as a header
    pub async fn handle(&self, event: InvocationEvent) -> Result<ActionResponse, AppError> {
        let wallet_address = event
            .first_parameter_value()
            .ok_or_else(|| AppError::InvalidInput("parameters must contain at least one value".to_string()))?;

        if self.config.log_wallet_address {
            warn!(wallet_address = %wallet_address, "Received wallet_address");
        } else {
            warn!(wallet_address = %mask_wallet_address(wallet_address), "Received wallet_address");
        }

        let body = fetch_wallet_transactions(self.client.as_ref(), &self.config, wallet_address).await?;

        Ok(ActionResponse::from_event(event, body))
    }
}

/// Lambda event handler. Parses the Bedrock Agents event and relays it.
/// Logs the full event when `RUST_LOG=debug/trace` and wallet address logging is on.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `InvalidInput`: The payload is not a valid invocation event or has no parameters
/// - `UpstreamTimeout`: The Sim API did not answer within the timeout
/// - `UpstreamError`: The Sim API request failed at the transport level
/// - `ConfigError`: The configured API key is unusable
pub async fn function_handler(
    event: LambdaEvent<Value>,
    relay: &TransactionRelay,
) -> Result<ActionResponse, Diagnostic> {
    let (payload, context) = event.into_parts();
    if relay.config.log_wallet_address {
        debug!(request_id = %context.request_id, payload = ?payload, "Received invocation event");
    } else {
        // The payload carries the wallet address in its parameters
        debug!(request_id = %context.request_id, "Received invocation event");
    }

    let invocation: InvocationEvent = serde_json::from_value(payload).map_err(|e| {
        error!(error = %e, "Failed to parse invocation event");
        AppError::from(e).into_diagnostic()
    })?;

    info!(
        action_group = %invocation.action_group,
        function = %invocation.function,
        "Invoking function"
    );

    relay.handle(invocation).await.map_err(|e| {
        error!(error = %e, error_type = e.error_type(), "Function invocation failed");
        e.into_diagnostic()
    })
}
