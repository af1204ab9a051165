//! Relay configuration, loaded once per cold start.

use std::time::Duration;

use lambda_runtime::tracing::warn;

use crate::models::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.sim.dune.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_KEY_VAR: &str = "SIM_API_KEY";
const BASE_URL_VAR: &str = "SIM_API_BASE_URL";
const TIMEOUT_VAR: &str = "SIM_API_TIMEOUT_SECS";
const LOG_WALLET_VAR: &str = "LOG_WALLET_ADDRESS";

/// Settings injected into the relay at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Sent as `X-Sim-Api-Key`. When `None` the header is left off.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
    /// Log the raw wallet address on each invocation, otherwise a masked form.
    pub log_wallet_address: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_wallet_address: true,
        }
    }
}

impl RelayConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if a timeout or boolean variable is set
    /// to something unparseable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if a timeout or boolean value is unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR);
        if api_key.is_none() {
            warn!("{API_KEY_VAR} is not set; Sim API requests will be sent without an API key");
        }

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(AppError::ConfigError(format!(
                        "{TIMEOUT_VAR}={raw:?} must be at least one second"
                    )));
                }
                Ok(secs) => Duration::from_secs(secs),
                Err(e) => {
                    return Err(AppError::ConfigError(format!(
                        "{TIMEOUT_VAR}={raw:?} is not a whole number of seconds: {e}"
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let log_wallet_address = match lookup(LOG_WALLET_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::ConfigError(format!("{LOG_WALLET_VAR}={raw:?} is not a boolean"))
            })?,
            None => true,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
            log_wallet_address,
        })
    }

    /// Transactions endpoint for `wallet_address`, interpolated verbatim.
    #[must_use]
    pub fn transactions_url(&self, wallet_address: &str) -> String {
        format!("{}/v1/evm/transactions/{wallet_address}", self.base_url)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
