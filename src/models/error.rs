//! Error types for the Sim transactions relay.
//!
//! Every failure an invocation can hit maps to one variant here, and each
//! variant carries the `errorType` reported back to the Lambda runtime.

use std::fmt;
use std::time::Duration;

use lambda_runtime::Diagnostic;

/// Custom error type for the application.
#[derive(Debug)]
pub enum AppError {
    /// The invocation event is missing required data
    InvalidInput(String),
    /// The Sim API did not answer within the configured timeout
    UpstreamTimeout(Duration),
    /// Transport-level failure talking to the Sim API
    UpstreamError(String),
    /// Relay configuration is unusable
    ConfigError(String),
}

impl AppError {
    /// Name reported as `errorType` in the Lambda error response.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::UpstreamTimeout(_) => "UpstreamTimeout",
            Self::UpstreamError(_) => "UpstreamError",
            Self::ConfigError(_) => "ConfigError",
        }
    }

    #[must_use]
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic {
            error_type: self.error_type().to_string(),
            error_message: self.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::UpstreamTimeout(timeout) => {
                write!(f, "Sim API request timed out after {}s", timeout.as_secs_f64())
            }
            Self::UpstreamError(msg) => write!(f, "Sim API request failed: {msg}"),
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidInput(error.to_string())
    }
}
