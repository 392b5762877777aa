//! Built-in subcommands.
//!
//! Cmdlets are not listed here; they are generated from the operation
//! catalog by [`crate::cmdlets`].

use clap::Subcommand;
use flowctl_core::Service;

/// Subcommands that are not remote operations.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the available cmdlets
    List {
        /// Only show cmdlets of one service (AF or EMCN)
        #[arg(long, value_parser = parse_service)]
        service: Option<Service>,
    },
}

fn parse_service(value: &str) -> Result<Service, String> {
    Service::from_short_name(value)
        .ok_or_else(|| format!("unknown service '{value}' (expected AF or EMCN)"))
}
