//! In-memory fakes for exercising the pipeline without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ClientSettings, OperationSpec, Request, Response};
use crate::ports::{
    ClientProvider, ConfirmationPrompt, Confirmer, ServiceClient, ServiceError,
    TransportErrorKind,
};

/// A call observed by [`FakeServiceClient`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub request: Request,
}

/// Canned result for the next call.
pub enum CannedResult {
    Ok(Response),
    Err(ServiceError),
    /// Never completes; for cancellation tests.
    Hang,
}

/// Service client returning canned results in order and recording every call.
///
/// When the queue is empty it answers with an empty JSON object.
pub struct FakeServiceClient {
    region: String,
    queue: Mutex<VecDeque<CannedResult>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeServiceClient {
    pub fn new() -> Self {
        Self {
            region: "us-east-1".to_string(),
            queue: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    #[must_use]
    pub fn with_response(self, body: Value) -> Self {
        self.push(CannedResult::Ok(Response::ok(body)));
        self
    }

    #[must_use]
    pub fn with_error(self, error: ServiceError) -> Self {
        self.push(CannedResult::Err(error));
        self
    }

    /// Queue a name-resolution failure for this client's endpoint.
    #[must_use]
    pub fn with_unresolvable_endpoint(self, endpoint: &str) -> Self {
        self.with_error(ServiceError::Transport {
            kind: TransportErrorKind::NameResolution,
            endpoint: endpoint.to_string(),
            message: "dns error: failed to lookup address information".to_string(),
        })
    }

    #[must_use]
    pub fn hanging(self) -> Self {
        self.push(CannedResult::Hang);
        self
    }

    pub fn push(&self, result: CannedResult) {
        self.queue.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for FakeServiceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceClient for FakeServiceClient {
    async fn invoke(
        &self,
        operation: &OperationSpec,
        request: &Request,
    ) -> Result<Response, ServiceError> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation: operation.operation,
            request: request.clone(),
        });
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some(CannedResult::Ok(response)) => Ok(response),
            Some(CannedResult::Err(error)) => Err(error),
            Some(CannedResult::Hang) => std::future::pending().await,
            None => Ok(Response::ok(Value::Object(serde_json::Map::new()))),
        }
    }

    fn endpoint_for(&self, operation: &OperationSpec) -> String {
        format!(
            "https://{}.{}.fake.invalid",
            operation.service.signing_name(),
            self.region
        )
    }

    fn region(&self) -> &str {
        &self.region
    }
}

/// Provider wrapping a shared [`FakeServiceClient`] and counting lookups.
#[derive(Clone)]
pub struct FakeClientProvider {
    pub client: Arc<FakeServiceClient>,
    requested: Arc<Mutex<Vec<ClientSettings>>>,
}

impl FakeClientProvider {
    pub fn new(client: FakeServiceClient) -> Self {
        Self {
            client: Arc::new(client),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Settings passed to every `client()` lookup so far.
    pub fn requested(&self) -> Vec<ClientSettings> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientProvider for FakeClientProvider {
    async fn client(
        &self,
        settings: &ClientSettings,
    ) -> Result<Arc<dyn ServiceClient>, ServiceError> {
        self.requested.lock().unwrap().push(settings.clone());
        Ok(self.client.clone())
    }
}

/// Confirmer answering with a fixed decision and remembering the prompts.
#[derive(Default)]
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Mutex<Vec<ConfirmationPrompt>>,
}

impl ScriptedConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<ConfirmationPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &ConfirmationPrompt) -> Result<bool, String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(self.answer)
    }
}
