//! The command execution pipeline.
//!
//! bind → confirm → build → invoke → project, with the error translator
//! wrapping the invoker. One pipeline instance serves any operation; the
//! operation schema is the only per-command input.

use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info_span, Instrument};

use crate::domain::{
    ClientSettings, InvocationLog, InvocationRecord, OperationSpec, Projection, Request,
    SuppliedParams,
};
use crate::error::PipelineError;
use crate::ports::{ClientProvider, Confirmer};
use crate::services::confirmation::{self, GateDecision};
use crate::services::{binding, error_translation, projection, request_builder};

/// Per-invocation switches that are not operation parameters.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Skip the confirmation prompt.
    pub force: bool,
    /// Build the request but do not invoke it.
    pub dry_run: bool,
    /// Selector text overriding the operation default.
    pub select: Option<String>,
    pub settings: ClientSettings,
}

/// How an invocation ended when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The remote call succeeded; carries the projected output.
    Completed(Projection),
    /// The user declined confirmation. Nothing was sent.
    Declined,
    /// Dry run: the request that would have been sent.
    DryRun(Request),
}

/// Runs operations through the pipeline stages.
pub struct CommandPipeline {
    clients: Arc<dyn ClientProvider>,
    confirmer: Arc<dyn Confirmer>,
}

impl CommandPipeline {
    pub fn new(clients: Arc<dyn ClientProvider>, confirmer: Arc<dyn Confirmer>) -> Self {
        Self { clients, confirmer }
    }

    /// Run one invocation of `operation`.
    ///
    /// Completed invocations are appended to `log`. `cancel` aborts an
    /// in-flight remote call.
    pub async fn run(
        &self,
        operation: &'static OperationSpec,
        supplied: &SuppliedParams,
        options: &PipelineOptions,
        log: &mut InvocationLog,
        cancel: &CancellationToken,
    ) -> Result<Outcome, PipelineError> {
        let cmdlet = operation.cmdlet_name();
        let span = info_span!("invocation", cmdlet = %cmdlet);

        async move {
            let ctx = binding::bind(
                operation,
                supplied,
                options.select.as_deref(),
                options.settings.clone(),
            )?;

            if options.dry_run {
                let request = request_builder::build_request(&ctx)?;
                debug!("Dry run; request not sent");
                return Ok(Outcome::DryRun(request));
            }

            if confirmation::check(&ctx, options.force, self.confirmer.as_ref())?
                == GateDecision::Declined
            {
                return Ok(Outcome::Declined);
            }

            let request = request_builder::build_request(&ctx)?;
            debug!(
                body_members = request.body.len(),
                query = request.query.len(),
                "Request built"
            );

            if cancel.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }

            let response = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(PipelineError::Cancelled),
                result = self.invoke(&ctx.settings, operation, &request) => result?,
            };
            debug!(status = response.status, "Response received");

            let projection = projection::project(&ctx, &response);
            log.push(InvocationRecord {
                cmdlet,
                operation: operation.operation,
                request,
                response,
                notes: projection.notes.clone(),
                completed_at: Utc::now(),
            });

            Ok(Outcome::Completed(projection))
        }
        .instrument(span)
        .await
    }

    async fn invoke(
        &self,
        settings: &ClientSettings,
        operation: &'static OperationSpec,
        request: &Request,
    ) -> Result<crate::domain::Response, PipelineError> {
        let region_hint = settings.region.clone().unwrap_or_else(|| "<default>".to_string());
        let client = self
            .clients
            .client(settings)
            .await
            .map_err(|e| error_translation::translate(e, &region_hint))?;
        debug!(endpoint = %client.endpoint_for(operation), "Invoking operation");
        client
            .invoke(operation, request)
            .await
            .map_err(|e| error_translation::translate(e, client.region()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, Service, Verb,
    };
    use crate::ports::{AlwaysConfirm, ServiceError};
    use crate::testing::{FakeClientProvider, FakeServiceClient, ScriptedConfirmer};
    use serde_json::json;

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::new("FlowName", Location::Body("flowName"), FieldKind::String).required(),
        FieldSpec::new("ForceDelete", Location::Body("forceDelete"), FieldKind::Boolean),
    ];

    static DELETE: OperationSpec = OperationSpec {
        service: Service::Appflow,
        verb: Verb::Remove,
        noun: "Flow",
        operation: "DeleteFlow",
        http: HttpBinding::new(HttpMethod::Post, "/delete-flow"),
        fields: FIELDS,
        confirm_targets: &["FlowName"],
        default_select: "*",
        metadata_fields: &[],
        summary: "",
    };

    fn pipeline(
        client: FakeServiceClient,
        confirmer: Arc<dyn Confirmer>,
    ) -> (CommandPipeline, FakeClientProvider) {
        let provider = FakeClientProvider::new(client);
        (
            CommandPipeline::new(Arc::new(provider.clone()), confirmer),
            provider,
        )
    }

    fn params() -> SuppliedParams {
        SuppliedParams::new().with("FlowName", "nightly")
    }

    #[tokio::test]
    async fn test_completed_invocation_is_logged() {
        let (pipeline, provider) = pipeline(
            FakeServiceClient::new().with_response(json!({"flowStatus": "Deleted"})),
            Arc::new(AlwaysConfirm),
        );
        let mut log = InvocationLog::new();

        let outcome = pipeline
            .run(
                &DELETE,
                &params(),
                &PipelineOptions::default(),
                &mut log,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let Outcome::Completed(projection) = outcome else {
            panic!("expected completion");
        };
        assert_eq!(projection.value, json!({"flowStatus": "Deleted"}));
        assert_eq!(provider.client.call_count(), 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().cmdlet, "Remove-AFFlow");
    }

    #[tokio::test]
    async fn test_declined_sends_nothing() {
        let confirmer = Arc::new(ScriptedConfirmer::answering(false));
        let (pipeline, provider) = pipeline(FakeServiceClient::new(), confirmer.clone());
        let mut log = InvocationLog::new();

        let outcome = pipeline
            .run(
                &DELETE,
                &params(),
                &PipelineOptions::default(),
                &mut log,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(provider.client.call_count(), 0);
        assert!(provider.requested().is_empty());
        assert!(log.is_empty());
        assert_eq!(confirmer.prompts()[0].target, "nightly");
    }

    #[tokio::test]
    async fn test_dry_run_skips_prompt_and_invocation() {
        let confirmer = Arc::new(ScriptedConfirmer::answering(false));
        let (pipeline, provider) = pipeline(FakeServiceClient::new(), confirmer.clone());
        let options = PipelineOptions {
            dry_run: true,
            ..Default::default()
        };

        let outcome = pipeline
            .run(
                &DELETE,
                &params(),
                &options,
                &mut InvocationLog::new(),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let Outcome::DryRun(request) = outcome else {
            panic!("expected dry run");
        };
        assert_eq!(request.body.get("flowName"), Some(&json!("nightly")));
        assert_eq!(provider.client.call_count(), 0);
        assert!(confirmer.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_binding_error_happens_before_any_lookup() {
        let (pipeline, provider) = pipeline(FakeServiceClient::new(), Arc::new(AlwaysConfirm));

        let err = pipeline
            .run(
                &DELETE,
                &SuppliedParams::new(),
                &PipelineOptions::default(),
                &mut InvocationLog::new(),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Bind(_)));
        assert!(provider.requested().is_empty());
    }

    #[tokio::test]
    async fn test_cancellation_aborts_in_flight_call() {
        let (pipeline, provider) =
            pipeline(FakeServiceClient::new().hanging(), Arc::new(AlwaysConfirm));
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            trigger.cancel();
        });

        let err = pipeline
            .run(
                &DELETE,
                &params(),
                &PipelineOptions::default(),
                &mut InvocationLog::new(),
                &cancel,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Cancelled));
        assert!(provider.client.call_count() <= 1);
    }

    #[tokio::test]
    async fn test_already_cancelled_never_invokes() {
        let (pipeline, provider) = pipeline(FakeServiceClient::new(), Arc::new(AlwaysConfirm));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = pipeline
            .run(
                &DELETE,
                &params(),
                &PipelineOptions::default(),
                &mut InvocationLog::new(),
                &cancel,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Cancelled));
        assert_eq!(provider.client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_service_error_passes_through() {
        let (pipeline, _provider) = pipeline(
            FakeServiceClient::new().with_error(ServiceError::Api {
                status: 404,
                code: "ResourceNotFoundException".into(),
                message: "missing".into(),
                request_id: None,
            }),
            Arc::new(AlwaysConfirm),
        );

        let err = pipeline
            .run(
                &DELETE,
                &params(),
                &PipelineOptions::default(),
                &mut InvocationLog::new(),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Service(ServiceError::Api { status: 404, .. })
        ));
    }
}
