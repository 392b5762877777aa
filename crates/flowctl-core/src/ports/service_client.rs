//! Remote service client port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{OperationSpec, Request, Response};

/// Classification of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The endpoint host name could not be resolved.
    NameResolution,
    /// TCP/TLS connection could not be established.
    Connect,
    Timeout,
    Other,
}

/// Errors reported by a [`ServiceClient`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with an error document.
    #[error("{code}: {message} (HTTP {status}{})", .request_id.as_ref().map(|id| format!(", request id {id}")).unwrap_or_default())]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// The request never produced an HTTP response.
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        kind: TransportErrorKind,
        endpoint: String,
        message: String,
    },

    /// No usable credentials could be resolved.
    #[error("unable to resolve credentials: {0}")]
    Credentials(String),

    /// The client could not be set up (no region, bad endpoint override, ...).
    #[error("client configuration error: {0}")]
    Configuration(String),

    #[error("failed to sign request: {0}")]
    Signing(String),

    /// The service answered with something that is not a valid response.
    #[error("invalid response from service: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// Endpoint of a name-resolution failure, if this is one.
    pub fn unresolved_endpoint(&self) -> Option<&str> {
        match self {
            Self::Transport {
                kind: TransportErrorKind::NameResolution,
                endpoint,
                ..
            } => Some(endpoint),
            _ => None,
        }
    }
}

/// Port for submitting one operation request to the remote service.
///
/// Implementations own signing, transport and wire encoding. They perform a
/// single attempt per call; the pipeline never retries.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    async fn invoke(
        &self,
        operation: &OperationSpec,
        request: &Request,
    ) -> Result<Response, ServiceError>;

    /// Endpoint URL the client would use for `operation`, for diagnostics.
    fn endpoint_for(&self, operation: &OperationSpec) -> String;

    /// Region the client is bound to.
    fn region(&self) -> &str;
}
