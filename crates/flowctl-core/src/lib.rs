#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    ClientSettings, FieldDefault, FieldKind, FieldSpec, HttpBinding, HttpMethod,
    InvocationContext, InvocationLog, InvocationRecord, Location, OperationSpec, ParamValue,
    Projection, Request, Response, Selector, Service, StaticCredentials, SuppliedParams, Verb,
};
pub use error::{BindError, BuildError, PipelineError};
pub use ports::{
    AlwaysConfirm, ClientProvider, ConfirmationPrompt, Confirmer, FixedClient, ServiceClient,
    ServiceError, TransportErrorKind,
};
pub use services::{CommandPipeline, Outcome, PipelineOptions};

// Cancellation type used by `CommandPipeline::run`
pub use tokio_util::sync::CancellationToken;

