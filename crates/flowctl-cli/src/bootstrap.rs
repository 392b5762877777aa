//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the AWS client cache, the terminal confirmer and
//! the command pipeline that uses them. Command handlers receive the
//! composed [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use flowctl_aws::{AwsClientConfig, ClientCache};
use flowctl_core::{
    CancellationToken, ClientProvider, CommandPipeline, Confirmer, InvocationLog,
};
use tracing::debug;

use crate::confirm::TerminalConfirmer;
use crate::error::CliError;

/// Environment variable overriding the HTTP request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "FLOWCTL_HTTP_TIMEOUT_SECS";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Process-wide settings for the AWS clients.
    pub aws: AwsClientConfig,
}

impl CliConfig {
    /// Create config from the process environment.
    pub fn with_defaults() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let mut aws = AwsClientConfig::new();
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            if seconds == 0 {
                return Err(CliError::Config(format!("{TIMEOUT_ENV} must be positive")));
            }
            aws = aws.with_timeout(Duration::from_secs(seconds));
        }
        Ok(Self { aws })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The command pipeline.
    pub pipeline: CommandPipeline,
    /// Completed invocations of this process.
    pub log: InvocationLog,
    /// Fired on Ctrl-C.
    pub cancel: CancellationToken,
}

impl CliContext {
    /// Access the cancellation token.
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

/// Bootstrap the CLI application.
///
/// Creates the shared AWS client cache and wires it, together with the
/// terminal confirmer, into the pipeline.
///
/// # Errors
///
/// Returns a configuration error if the HTTP client cannot be created.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let cache = ClientCache::new(config.aws).map_err(|e| CliError::Config(e.to_string()))?;
    debug!("CLI context bootstrapped");
    Ok(bootstrap_with(Arc::new(cache), Arc::new(TerminalConfirmer)))
}

/// Compose a context from explicit adapters.
pub fn bootstrap_with(
    clients: Arc<dyn ClientProvider>,
    confirmer: Arc<dyn Confirmer>,
) -> CliContext {
    CliContext {
        pipeline: CommandPipeline::new(clients, confirmer),
        log: InvocationLog::new(),
        cancel: CancellationToken::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.aws.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_timeout_override() {
        let config = CliConfig::from_lookup(|key| (key == TIMEOUT_ENV).then(|| "5".to_string()))
            .unwrap();
        assert_eq!(config.aws.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_is_a_config_error() {
        for raw in ["soon", "0"] {
            let err = CliConfig::from_lookup(|_| Some(raw.to_string())).unwrap_err();
            assert_eq!(err.exit_code(), 78);
        }
    }

    #[test]
    fn test_bootstrap_creates_empty_log() {
        let ctx = bootstrap(CliConfig::from_lookup(|_| None).unwrap()).unwrap();
        assert!(ctx.log.records().is_empty());
        assert!(!ctx.cancel_token().is_cancelled());
    }
}
