//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the pipeline expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP, signing or credential types in any signature
//! - No terminal I/O types in the confirmation port

pub mod client_provider;
pub mod confirmer;
pub mod service_client;

pub use client_provider::{ClientProvider, FixedClient};
pub use confirmer::{AlwaysConfirm, ConfirmationPrompt, Confirmer};
pub use service_client::{ServiceClient, ServiceError, TransportErrorKind};

#[cfg(test)]
pub use confirmer::MockConfirmer;
