//! Internal error types for AWS calls.
//!
//! These errors are internal to `flowctl-aws` and are mapped to the core
//! `ServiceError` at the port boundary.

use std::error::Error as _;

use flowctl_core::{ServiceError, TransportErrorKind};
use thiserror::Error;

/// Result type alias for AWS operations.
pub type AwsResult<T> = Result<T, AwsError>;

#[derive(Debug, Error)]
pub enum AwsError {
    /// The HTTP exchange failed before a response arrived.
    #[error("{message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("{code}: {message} (HTTP {status})")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Credential resolution failed: {0}")]
    Credentials(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Client setup failed: {0}")]
    Configuration(String),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl AwsError {
    /// Map to the core port error, attaching the endpoint for transport failures.
    pub fn into_service_error(self, endpoint: &str) -> ServiceError {
        match self {
            Self::Transport { kind, message } => ServiceError::Transport {
                kind,
                endpoint: endpoint.to_string(),
                message,
            },
            Self::Api {
                status,
                code,
                message,
                request_id,
            } => ServiceError::Api {
                status,
                code,
                message,
                request_id,
            },
            Self::InvalidUrl(e) => ServiceError::Configuration(format!("invalid endpoint URL: {e}")),
            Self::Configuration(message) => ServiceError::Configuration(message),
            Self::Credentials(message) => ServiceError::Credentials(message),
            Self::Signing(message) => ServiceError::Signing(message),
            Self::JsonParse(e) => ServiceError::InvalidResponse(e.to_string()),
        }
    }
}

impl From<reqwest::Error> for AwsError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        Self::Transport {
            kind: classify(&err, &message),
            message,
        }
    }
}

/// Classify a reqwest failure.
///
/// DNS failures surface as connect errors whose source chain carries the
/// resolver's message, so the text decides between the two.
fn classify(err: &reqwest::Error, chain: &str) -> TransportErrorKind {
    if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() && mentions_name_resolution(chain) {
        TransportErrorKind::NameResolution
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Other
    }
}

pub(crate) fn mentions_name_resolution(message: &str) -> bool {
    const MARKERS: &[&str] = &[
        "dns error",
        "failed to lookup address",
        "name or service not known",
        "nodename nor servname",
        "no such host",
        "temporary failure in name resolution",
    ];
    let lower = message.to_ascii_lowercase();
    MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Join an error and all of its sources with `": "`.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
