//! Client handle provider port.

use std::sync::Arc;

use async_trait::async_trait;

use super::service_client::{ServiceClient, ServiceError};
use crate::domain::ClientSettings;

/// Hands out client handles for a set of client settings.
///
/// Implementations are expected to create handles lazily and reuse them for
/// identical settings.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn client(&self, settings: &ClientSettings) -> Result<Arc<dyn ServiceClient>, ServiceError>;
}

/// Provider that always returns the same handle, whatever the settings.
#[derive(Clone)]
pub struct FixedClient(pub Arc<dyn ServiceClient>);

#[async_trait]
impl ClientProvider for FixedClient {
    async fn client(&self, _settings: &ClientSettings) -> Result<Arc<dyn ServiceClient>, ServiceError> {
        Ok(Arc::clone(&self.0))
    }
}
