//! CLI-specific error types and mappings.
//!
//! Maps pipeline failures to exit codes and user-facing messages.

use flowctl_core::{PipelineError, ServiceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The remote service rejected the call or could not be reached.
    #[error("{0}")]
    Service(String),

    /// Bad parameters, caught before any network activity.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The service endpoint host does not resolve.
    #[error("{0}")]
    EndpointUnavailable(String),

    /// Interrupted by the user.
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error (closed stdin, broken pipe, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success (including a declined confirmation)
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    /// - 130: Terminated by Ctrl-C
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Service(_) => 1,
            Self::Arguments(_) => 2,            // EX_USAGE
            Self::EndpointUnavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,                  // EX_IOERR
            Self::Config(_) => 78,              // EX_CONFIG
            Self::Cancelled => 130,
        }
    }
}

/// Exit code for an error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Bind(e) => Self::Arguments(e.to_string()),
            PipelineError::Build(e) => Self::Arguments(e.to_string()),
            PipelineError::Confirmation(msg) => Self::Io(msg),
            err @ PipelineError::EndpointResolution { .. } => {
                Self::EndpointUnavailable(err.to_string())
            }
            PipelineError::Cancelled => Self::Cancelled,
            PipelineError::Service(
                e @ (ServiceError::Configuration(_) | ServiceError::Credentials(_)),
            ) => Self::Config(e.to_string()),
            PipelineError::Service(e) => Self::Service(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
