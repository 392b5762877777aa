#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod cache;
mod client;
mod config;
mod error;
mod http;
mod signing;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client provider used by the pipeline
pub use cache::ClientCache;

// Single-region client
pub use client::{AwsServiceClient, DefaultAwsClient};
pub use http::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend};
pub use signing::RequestSigner;

// Configuration
pub use config::AwsClientConfig;

// Endpoint naming, for diagnostics
pub use url::regional_endpoint;

