//! List command handler.
//!
//! Prints the cmdlet catalog, grouped by service.

use std::io::{self, Write};

use anyhow::Result;
use flowctl_core::Service;

use crate::error::CliError;
use crate::presentation::{separator, truncate_string};

const SERVICES: [Service; 2] = [Service::Appflow, Service::MediaConnect];

/// Execute the list command.
///
/// # Arguments
///
/// * `service` - Restrict the listing to one service
pub fn execute(service: Option<Service>) -> Result<()> {
    write_catalog(&mut io::stdout().lock(), service).map_err(CliError::from)?;
    Ok(())
}

/// Write the catalog table to `out`.
pub fn write_catalog<W: Write>(out: &mut W, service: Option<Service>) -> io::Result<()> {
    let services = SERVICES
        .into_iter()
        .filter(|s| service.is_none_or(|wanted| wanted == *s));

    for (index, service) in services.enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        let operations = flowctl_catalog::by_service(service);
        writeln!(
            out,
            "{} ({}): {} cmdlet(s)\n",
            service.title(),
            service.short_name(),
            operations.len()
        )?;
        writeln!(out, "{:<32} {:<30} Description", "Cmdlet", "Operation")?;
        writeln!(out, "{}", separator(110))?;

        for operation in operations {
            writeln!(
                out,
                "{:<32} {:<30} {}",
                operation.cmdlet_name(),
                operation.operation,
                truncate_string(operation.summary, 46)
            )?;
        }
    }
    Ok(())
}
