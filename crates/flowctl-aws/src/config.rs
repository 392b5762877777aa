//! Public configuration for the AWS service clients.
//!
//! Per-invocation choices (region, profile, credentials, endpoint) travel in
//! `ClientSettings`; this type holds what is fixed for the whole process.

use std::time::Duration;

/// Configuration shared by every client handle a [`ClientCache`](crate::ClientCache) creates.
///
/// # Example
///
/// ```
/// use flowctl_aws::AwsClientConfig;
/// use std::time::Duration;
///
/// let config = AwsClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct AwsClientConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Overall request timeout
    pub(crate) timeout: Duration,
    /// TCP/TLS connect timeout
    pub(crate) connect_timeout: Duration,
    /// Endpoint used when the invocation does not override it
    pub(crate) endpoint_url: Option<String>,
}

impl Default for AwsClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("flowctl/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            endpoint_url: None,
        }
    }
}

impl AwsClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the overall request timeout.
    ///
    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Send every request to `url` instead of the regional service endpoint.
    #[must_use]
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AwsClientConfig::new();
        assert!(config.user_agent.starts_with("flowctl/"));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AwsClientConfig::new()
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(1))
            .with_endpoint_url("http://localhost:4566");

        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }
}
