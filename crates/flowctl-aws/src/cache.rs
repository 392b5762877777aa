//! Lazily populated client cache.
//!
//! One client handle per distinct `ClientSettings`, created on first use and
//! shared afterwards. Resolving the AWS configuration chain is the expensive
//! part, so it happens at most once per settings value.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use flowctl_core::{ClientProvider, ClientSettings, ServiceClient, ServiceError};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::client::AwsServiceClient;
use crate::config::AwsClientConfig;
use crate::http::ReqwestBackend;
use crate::signing::RequestSigner;

/// Provider of AWS client handles, keyed by client settings.
pub struct ClientCache {
    config: AwsClientConfig,
    backend: ReqwestBackend,
    clients: Mutex<HashMap<ClientSettings, Arc<dyn ServiceClient>>>,
}

impl ClientCache {
    pub fn new(config: AwsClientConfig) -> Result<Self, ServiceError> {
        let backend = ReqwestBackend::new(&config).map_err(|e| e.into_service_error("<none>"))?;
        Ok(Self {
            config,
            backend,
            clients: Mutex::new(HashMap::new()),
        })
    }

    /// Number of client handles created so far.
    pub async fn len(&self) -> usize {
        self.clients.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.lock().await.is_empty()
    }

    async fn create(&self, settings: &ClientSettings) -> Result<Arc<dyn ServiceClient>, ServiceError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(creds) = &settings.credentials {
            loader = loader.credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                creds.session_token.clone(),
                None,
                "flowctl-command-line",
            ));
        }
        let sdk_config = loader.load().await;

        let region = sdk_config.region().map(ToString::to_string).ok_or_else(|| {
            ServiceError::Configuration(
                "no region configured; pass --Region or set AWS_REGION".to_string(),
            )
        })?;
        let credentials = sdk_config.credentials_provider().ok_or_else(|| {
            ServiceError::Credentials("no credentials provider in the AWS configuration chain".to_string())
        })?;

        let endpoint = settings
            .endpoint_url
            .clone()
            .or_else(|| self.config.endpoint_url.clone());

        info!(
            region = %region,
            profile = settings.profile.as_deref().unwrap_or("<default>"),
            endpoint = endpoint.as_deref().unwrap_or("<regional>"),
            "Created service client"
        );

        Ok(Arc::new(AwsServiceClient::new(
            self.backend.clone(),
            RequestSigner::new(credentials, region),
            endpoint,
        )))
    }
}

#[async_trait]
impl ClientProvider for ClientCache {
    async fn client(&self, settings: &ClientSettings) -> Result<Arc<dyn ServiceClient>, ServiceError> {
        // Held across creation so concurrent lookups for the same settings
        // resolve the configuration chain once.
        let mut clients = self.clients.lock().await;
        if let Some(client) = clients.get(settings) {
            debug!("Reusing cached service client");
            return Ok(Arc::clone(client));
        }
        let client = self.create(settings).await?;
        clients.insert(settings.clone(), Arc::clone(&client));
        Ok(client)
    }
}
