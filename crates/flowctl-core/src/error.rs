//! Pipeline error types.
//!
//! Port-level failures live in [`crate::ports`]; this module holds the
//! errors raised by the pipeline stages themselves and the top-level
//! [`PipelineError`] adapters map to exit codes.

use thiserror::Error;

use crate::ports::ServiceError;

/// Failure while binding raw inputs to an operation's parameters.
///
/// Always raised before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// The caller supplied a name that is neither a parameter nor an alias.
    #[error("{cmdlet}: unknown parameter '{name}'")]
    UnknownParameter { cmdlet: String, name: String },

    /// One or more mandatory parameters were not supplied.
    #[error("{cmdlet}: missing required parameter(s): {}", .names.join(", "))]
    MissingRequired { cmdlet: String, names: Vec<String> },

    /// A value could not be parsed for the parameter's type.
    #[error("invalid value for parameter '{name}': {message}")]
    InvalidValue { name: String, message: String },

    /// A single-valued parameter was supplied more than once.
    #[error("parameter '{name}' was supplied more than once")]
    DuplicateValue { name: String },

    /// The selector text is malformed.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// A `^Param` selector names a parameter the operation does not have.
    #[error("{cmdlet}: selector '^{name}' does not name a parameter")]
    UnknownSelectorParameter { cmdlet: String, name: String },
}

/// Failure while mapping a bound context onto a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A URI label has no bound value.
    #[error("no value bound for URI label '{label}'")]
    MissingPathParameter { label: String },

    /// Two fields write incompatible values to the same body location.
    #[error("body location '{path}' is written by conflicting parameters")]
    PathConflict { path: String },
}

/// Top-level error of one pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Build(#[from] BuildError),

    /// The confirmation prompt itself failed (e.g. stdin closed).
    #[error("confirmation failed: {0}")]
    Confirmation(String),

    /// Any service failure other than name resolution, unchanged.
    #[error(transparent)]
    Service(ServiceError),

    /// The endpoint host could not be resolved.
    #[error(
        "Name resolution failure attempting to reach service endpoint '{endpoint}' (region: {region}). \
         This can be caused by an incorrect or unsupported region, a mistyped --EndpointUrl, \
         or missing network connectivity."
    )]
    EndpointResolution {
        endpoint: String,
        region: String,
        #[source]
        source: ServiceError,
    },

    /// The invocation was cancelled before the remote call completed.
    #[error("operation cancelled")]
    Cancelled,
}
