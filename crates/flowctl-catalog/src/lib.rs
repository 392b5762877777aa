#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod appflow;
pub mod mediaconnect;
mod tags;

use flowctl_core::domain::{OperationSpec, Service};

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;

/// Every operation of every service, in listing order.
pub fn all_operations() -> impl Iterator<Item = &'static OperationSpec> {
    appflow::OPERATIONS
        .iter()
        .chain(mediaconnect::OPERATIONS)
        .copied()
}

/// Operations of one service.
pub fn by_service(service: Service) -> &'static [&'static OperationSpec] {
    match service {
        Service::Appflow => appflow::OPERATIONS,
        Service::MediaConnect => mediaconnect::OPERATIONS,
    }
}

/// Look up an operation by cmdlet name, ASCII case-insensitively.
pub fn find(cmdlet: &str) -> Option<&'static OperationSpec> {
    all_operations().find(|op| op.cmdlet_name().eq_ignore_ascii_case(cmdlet))
}
