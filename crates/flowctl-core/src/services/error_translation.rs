//! Error translator for invoker failures.

use tracing::warn;

use crate::error::PipelineError;
use crate::ports::ServiceError;

/// Rewrap name-resolution failures with endpoint context; pass everything
/// else through unchanged. Never retries.
pub fn translate(error: ServiceError, region: &str) -> PipelineError {
    let Some(endpoint) = error.unresolved_endpoint().map(str::to_string) else {
        return PipelineError::Service(error);
    };
    warn!(endpoint = %endpoint, region = %region, "Service endpoint could not be resolved");
    PipelineError::EndpointResolution {
        endpoint,
        region: region.to_string(),
        source: error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TransportErrorKind;
    use std::error::Error as _;

    #[test]
    fn test_name_resolution_is_rewrapped() {
        let err = translate(
            ServiceError::Transport {
                kind: TransportErrorKind::NameResolution,
                endpoint: "https://mediaconnect.mars-1.amazonaws.com".into(),
                message: "dns error: failed to lookup address information".into(),
            },
            "mars-1",
        );
        let text = err.to_string();
        assert!(text.contains("https://mediaconnect.mars-1.amazonaws.com"));
        assert!(text.contains("mars-1"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = translate(
            ServiceError::Api {
                status: 400,
                code: "BadRequestException".into(),
                message: "bad".into(),
                request_id: None,
            },
            "us-east-1",
        );
        match err {
            PipelineError::Service(ServiceError::Api { code, .. }) => {
                assert_eq!(code, "BadRequestException");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_connect_failure_is_not_rewrapped() {
        let err = translate(
            ServiceError::Transport {
                kind: TransportErrorKind::Connect,
                endpoint: "http://localhost:1".into(),
                message: "connection refused".into(),
            },
            "us-east-1",
        );
        assert!(matches!(err, PipelineError::Service(ServiceError::Transport { .. })));
    }
}
