//! Confirmation gate for mutating operations.

use tracing::debug;

use crate::domain::InvocationContext;
use crate::error::PipelineError;
use crate::ports::{ConfirmationPrompt, Confirmer};

/// Outcome of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Declined,
}

/// Build the prompt for `ctx`, or `None` for read-only operations.
pub fn prompt_for(ctx: &InvocationContext) -> Option<ConfirmationPrompt> {
    if !ctx.operation.is_mutating() {
        return None;
    }
    Some(ConfirmationPrompt {
        cmdlet: ctx.operation.cmdlet_name(),
        operation: ctx.operation.operation,
        target: render_target(ctx),
    })
}

/// Human-readable identifiers of the resource(s) an invocation targets.
///
/// Falls back to the operation name when no target parameter is bound.
pub fn render_target(ctx: &InvocationContext) -> String {
    let parts: Vec<String> = ctx
        .operation
        .confirm_targets
        .iter()
        .filter_map(|name| ctx.get(name))
        .map(|value| value.to_text().join(", "))
        .collect();
    if parts.is_empty() {
        ctx.operation.operation.to_string()
    } else {
        parts.join(" / ")
    }
}

/// Ask for confirmation unless the operation is read-only or `force` is set.
pub fn check(
    ctx: &InvocationContext,
    force: bool,
    confirmer: &dyn Confirmer,
) -> Result<GateDecision, PipelineError> {
    let Some(prompt) = prompt_for(ctx) else {
        return Ok(GateDecision::Proceed);
    };
    if force {
        debug!(cmdlet = %prompt.cmdlet, "Confirmation skipped (force)");
        return Ok(GateDecision::Proceed);
    }
    match confirmer.confirm(&prompt) {
        Ok(true) => Ok(GateDecision::Proceed),
        Ok(false) => {
            debug!(cmdlet = %prompt.cmdlet, "Confirmation declined");
            Ok(GateDecision::Declined)
        }
        Err(message) => Err(PipelineError::Confirmation(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ClientSettings, FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec,
        Service, SuppliedParams, Verb,
    };
    use crate::ports::MockConfirmer;
    use crate::services::binding::bind;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("FlowArn", Location::Path("flowArn"), FieldKind::String).required(),
        FieldSpec::new("OutputArn", Location::Path("outputArn"), FieldKind::String),
    ];

    const REMOVE_SPEC: OperationSpec = OperationSpec {
        service: Service::MediaConnect,
        verb: Verb::Remove,
        noun: "FlowOutput",
        operation: "RemoveFlowOutput",
        http: HttpBinding::new(HttpMethod::Delete, "/v1/flows/{flowArn}"),
        fields: FIELDS,
        confirm_targets: &["FlowArn", "OutputArn"],
        default_select: "*",
        metadata_fields: &[],
        summary: "",
    };

    static REMOVE: OperationSpec = REMOVE_SPEC;

    static DESCRIBE: OperationSpec = OperationSpec {
        verb: Verb::Get,
        noun: "Flow",
        operation: "DescribeFlow",
        ..REMOVE_SPEC
    };

    fn ctx(op: &'static OperationSpec, pairs: &[(&str, &str)]) -> InvocationContext {
        let params = pairs
            .iter()
            .fold(SuppliedParams::new(), |p, (k, v)| p.with(*k, *v));
        bind(op, &params, None, ClientSettings::default()).unwrap()
    }

    #[test]
    fn test_target_lists_bound_identifiers() {
        let ctx = ctx(&REMOVE, &[("FlowArn", "arn:f"), ("OutputArn", "arn:o")]);
        assert_eq!(render_target(&ctx), "arn:f / arn:o");
    }

    #[test]
    fn test_read_only_operation_never_prompts() {
        let ctx = ctx(&DESCRIBE, &[("FlowArn", "arn:f")]);
        let mut confirmer = MockConfirmer::new();
        confirmer.expect_confirm().never();
        assert_eq!(check(&ctx, false, &confirmer).unwrap(), GateDecision::Proceed);
    }

    #[test]
    fn test_force_skips_prompt() {
        let ctx = ctx(&REMOVE, &[("FlowArn", "arn:f")]);
        let mut confirmer = MockConfirmer::new();
        confirmer.expect_confirm().never();
        assert_eq!(check(&ctx, true, &confirmer).unwrap(), GateDecision::Proceed);
    }

    #[test]
    fn test_decline() {
        let ctx = ctx(&REMOVE, &[("FlowArn", "arn:f")]);
        let mut confirmer = MockConfirmer::new();
        confirmer
            .expect_confirm()
            .withf(|prompt| prompt.target == "arn:f" && prompt.operation == "RemoveFlowOutput")
            .times(1)
            .returning(|_| Ok(false));
        assert_eq!(check(&ctx, false, &confirmer).unwrap(), GateDecision::Declined);
    }

    #[test]
    fn test_prompt_failure_is_an_error() {
        let ctx = ctx(&REMOVE, &[("FlowArn", "arn:f")]);
        let mut confirmer = MockConfirmer::new();
        confirmer
            .expect_confirm()
            .returning(|_| Err("stdin closed".to_string()));
        assert!(matches!(
            check(&ctx, false, &confirmer),
            Err(PipelineError::Confirmation(msg)) if msg == "stdin closed"
        ));
    }
}
