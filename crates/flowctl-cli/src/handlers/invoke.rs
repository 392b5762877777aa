//! Cmdlet handler.
//!
//! Runs one catalog operation through the pipeline and prints the outcome.

use std::io;

use anyhow::Result;
use flowctl_core::Outcome;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::cmdlets::CmdletInvocation;
use crate::error::CliError;
use crate::presentation::render_outcome;

/// Run the invocation without printing anything.
///
/// # Errors
///
/// Returns the pipeline failure mapped to a [`CliError`].
pub async fn run(ctx: &mut CliContext, invocation: &CmdletInvocation) -> Result<Outcome, CliError> {
    let outcome = ctx
        .pipeline
        .run(
            invocation.operation,
            &invocation.params,
            &invocation.options,
            &mut ctx.log,
            &ctx.cancel,
        )
        .await?;

    if let Some(record) = ctx.log.last() {
        debug!(
            request_id = record.response.request_id.as_deref().unwrap_or("<none>"),
            status = record.response.status,
            "Invocation recorded"
        );
    }
    Ok(outcome)
}

/// Execute a cmdlet.
///
/// A declined confirmation is not an error: a note goes to stderr and the
/// process exits successfully.
pub async fn execute(ctx: &mut CliContext, invocation: &CmdletInvocation) -> Result<()> {
    let outcome = run(ctx, invocation).await?;
    render_outcome(
        invocation.operation,
        &outcome,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .map_err(CliError::from)?;
    Ok(())
}
