//! AWS Signature Version 4 request signing.

use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;

use crate::error::{AwsError, AwsResult};
use crate::http::HttpRequest;

/// Signs requests for one region with credentials from a provider.
#[derive(Clone)]
pub struct RequestSigner {
    credentials: SharedCredentialsProvider,
    region: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(credentials: SharedCredentialsProvider, region: impl Into<String>) -> Self {
        Self {
            credentials,
            region: region.into(),
        }
    }

    /// Signer using fixed credentials.
    pub fn from_static(credentials: Credentials, region: impl Into<String>) -> Self {
        Self::new(SharedCredentialsProvider::new(credentials), region)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Add the SigV4 headers for `service` to `request`, signing at `time`.
    pub async fn sign(
        &self,
        request: &mut HttpRequest,
        service: &str,
        time: SystemTime,
    ) -> AwsResult<()> {
        let credentials = self
            .credentials
            .provide_credentials()
            .await
            .map_err(|e| AwsError::Credentials(e.to_string()))?;
        let identity = credentials.into();

        let body = request.body.as_deref().unwrap_or(&[]);
        let url = request.url.to_string();
        let signable = SignableRequest::new(
            request.method,
            url.as_str(),
            request
                .headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
            SignableBody::Bytes(body),
        )
        .map_err(|e| AwsError::Signing(e.to_string()))?;

        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(service)
            .time(time)
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| AwsError::Signing(e.to_string()))?
            .into();

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|e| AwsError::Signing(e.to_string()))?
            .into_parts();

        for (name, value) in instructions.headers() {
            request.headers.push((name.to_string(), value.to_string()));
        }
        Ok(())
    }
}
