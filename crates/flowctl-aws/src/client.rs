//! `ServiceClient` implementation over SigV4-signed REST-JSON.

use std::time::SystemTime;

use async_trait::async_trait;
use flowctl_core::{OperationSpec, Request, Response, ServiceClient, ServiceError};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AwsError, AwsResult};
use crate::http::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend};
use crate::signing::RequestSigner;
use crate::url::{build_request_url, regional_endpoint};

const REQUEST_ID_HEADERS: &[&str] = &["x-amzn-requestid", "x-amz-request-id"];
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Default client using the reqwest backend.
pub type DefaultAwsClient = AwsServiceClient<ReqwestBackend>;

/// Client bound to one region, credential source and endpoint choice.
///
/// Every `invoke` is a single signed HTTP attempt.
pub struct AwsServiceClient<B: HttpBackend> {
    backend: B,
    signer: RequestSigner,
    endpoint_override: Option<String>,
}

impl<B: HttpBackend> AwsServiceClient<B> {
    pub const fn new(backend: B, signer: RequestSigner, endpoint_override: Option<String>) -> Self {
        Self {
            backend,
            signer,
            endpoint_override,
        }
    }

    fn endpoint(&self, operation: &OperationSpec) -> String {
        self.endpoint_override.clone().unwrap_or_else(|| {
            regional_endpoint(operation.service, self.signer.region())
        })
    }

    async fn send(&self, operation: &OperationSpec, request: &Request, endpoint: &str) -> AwsResult<Response> {
        let url = build_request_url(endpoint, operation, request)?;

        let mut headers: Vec<(String, String)> = request
            .headers
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect();
        let body = if request.has_body(operation) {
            headers.push(("content-type".to_string(), "application/json".to_string()));
            Some(serde_json::to_vec(&request.body_json())?)
        } else {
            None
        };

        let mut http_request = HttpRequest {
            method: operation.http.method.as_str(),
            url,
            headers,
            body,
        };
        self.signer
            .sign(
                &mut http_request,
                operation.service.signing_name(),
                SystemTime::now(),
            )
            .await?;

        debug!(
            method = http_request.method,
            url = %http_request.url,
            operation = operation.operation,
            "Sending request"
        );
        let response = self.backend.send(http_request).await?;
        debug!(status = response.status, "Received response");

        parse_response(response)
    }
}

#[async_trait]
impl<B: HttpBackend> ServiceClient for AwsServiceClient<B> {
    async fn invoke(&self, operation: &OperationSpec, request: &Request) -> Result<Response, ServiceError> {
        let endpoint = self.endpoint(operation);
        self.send(operation, request, &endpoint)
            .await
            .map_err(|e| e.into_service_error(&endpoint))
    }

    fn endpoint_for(&self, operation: &OperationSpec) -> String {
        self.endpoint(operation)
    }

    fn region(&self) -> &str {
        self.signer.region()
    }
}

// ============================================================================
// Response parsing
// ============================================================================

fn request_id(response: &HttpResponse) -> Option<String> {
    REQUEST_ID_HEADERS
        .iter()
        .find_map(|name| response.header(name))
        .map(str::to_string)
}

fn parse_response(response: HttpResponse) -> AwsResult<Response> {
    let request_id = request_id(&response);
    if !response.is_success() {
        return Err(parse_error(&response, request_id));
    }

    let body = if response.body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(&response.body)?
    };

    Ok(Response {
        status: response.status,
        request_id,
        body,
    })
}

/// Build an API error from a REST-JSON error response.
///
/// The error code comes from the `x-amzn-ErrorType` header, falling back to
/// the body's `__type` or `code`; namespace prefixes and `:`-suffixes are
/// stripped.
fn parse_error(response: &HttpResponse, request_id: Option<String>) -> AwsError {
    let body: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
    let body_str = |key: &str| body.get(key).and_then(Value::as_str);

    let raw_code = response
        .header(ERROR_TYPE_HEADER)
        .or_else(|| body_str("__type"))
        .or_else(|| body_str("code"))
        .or_else(|| body_str("Code"));
    let code = raw_code.map_or_else(|| fallback_code(response.status), sanitize_error_code);

    let message = body_str("message")
        .or_else(|| body_str("Message"))
        .or_else(|| body_str("errorMessage"))
        .map_or_else(
            || String::from_utf8_lossy(&response.body).trim().to_string(),
            str::to_string,
        );

    if response.status >= 500 {
        warn!(status = response.status, code = %code, "Service returned a server error");
    }

    AwsError::Api {
        status: response.status,
        code,
        message,
        request_id,
    }
}

fn sanitize_error_code(raw: &str) -> String {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    let without_namespace = without_suffix.rsplit('#').next().unwrap_or(without_suffix);
    without_namespace.trim().to_string()
}

fn fallback_code(status: u16) -> String {
    match status {
        400 => "BadRequestException",
        403 => "ForbiddenException",
        404 => "NotFoundException",
        409 => "ConflictException",
        429 => "TooManyRequestsException",
        500 => "InternalServerErrorException",
        503 => "ServiceUnavailableException",
        _ => "UnknownError",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use aws_credential_types::Credentials;
    use flowctl_core::{
        FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, Service, TransportErrorKind,
        Verb,
    };
    use serde_json::json;

    static DESCRIBE_FIELDS: &[FieldSpec] = &[FieldSpec::new(
        "FlowName",
        Location::Body("flowName"),
        FieldKind::String,
    )
    .required()];

    static DESCRIBE: OperationSpec = OperationSpec {
        service: Service::Appflow,
        verb: Verb::Get,
        noun: "Flow",
        operation: "DescribeFlow",
        http: HttpBinding::new(HttpMethod::Post, "/describe-flow"),
        fields: DESCRIBE_FIELDS,
        confirm_targets: &[],
        default_select: "*",
        metadata_fields: &[],
        summary: "",
    };

    static DELETE_FIELDS: &[FieldSpec] = &[FieldSpec::new(
        "FlowArn",
        Location::Path("flowArn"),
        FieldKind::String,
    )
    .required()];

    static DELETE: OperationSpec = OperationSpec {
        service: Service::MediaConnect,
        verb: Verb::Remove,
        noun: "Flow",
        operation: "DeleteFlow",
        http: HttpBinding::new(HttpMethod::Delete, "/v1/flows/{flowArn}"),
        fields: DELETE_FIELDS,
        confirm_targets: &["FlowArn"],
        default_select: "*",
        metadata_fields: &[],
        summary: "",
    };

    fn client(backend: FakeBackend, endpoint: Option<&str>) -> AwsServiceClient<FakeBackend> {
        AwsServiceClient::new(
            backend,
            RequestSigner::from_static(
                Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"),
                "us-west-2",
            ),
            endpoint.map(str::to_string),
        )
    }

    fn describe_request() -> Request {
        let mut request = Request::default();
        request.body.insert("flowName".into(), json!("nightly"));
        request
    }

    fn delete_request() -> Request {
        let mut request = Request::default();
        request.path_params.insert("flowArn", "arn:flow".into());
        request
    }

    #[tokio::test]
    async fn test_post_sends_signed_json_body() {
        let backend = FakeBackend::new().with_response(
            200,
            &[("x-amzn-RequestId", "req-42")],
            r#"{"flowName":"nightly","flowStatus":"Active"}"#,
        );
        let client = client(backend.clone(), None);

        let response = client.invoke(&DESCRIBE, &describe_request()).await.unwrap();

        assert_eq!(response.request_id.as_deref(), Some("req-42"));
        assert_eq!(response.body["flowStatus"], "Active");

        let sent = &backend.sent()[0];
        assert_eq!(sent.method, "POST");
        assert_eq!(
            sent.url.as_str(),
            "https://appflow.us-west-2.amazonaws.com/describe-flow"
        );
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert!(sent
            .header("authorization")
            .unwrap()
            .contains("/us-west-2/appflow/aws4_request"));
        let body: Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"flowName": "nightly"}));
    }

    #[tokio::test]
    async fn test_delete_without_body_fields_sends_no_body() {
        let backend = FakeBackend::new().with_json(202, r#"{"flowArn":"arn:flow","status":"DELETING"}"#);
        let client = client(backend.clone(), Some("http://localhost:4566"));

        let response = client.invoke(&DELETE, &delete_request()).await.unwrap();

        assert_eq!(response.status, 202);
        let sent = &backend.sent()[0];
        assert_eq!(sent.method, "DELETE");
        assert_eq!(sent.url.as_str(), "http://localhost:4566/v1/flows/arn%3Aflow");
        assert!(sent.body.is_none());
        assert!(sent.header("content-type").is_none());
    }

    #[tokio::test]
    async fn test_empty_success_body_is_empty_object() {
        let client = client(FakeBackend::new().with_json(200, ""), None);
        let response = client.invoke(&DESCRIBE, &describe_request()).await.unwrap();
        assert_eq!(response.body, json!({}));
    }

    #[tokio::test]
    async fn test_error_response_is_parsed() {
        let backend = FakeBackend::new().with_response(
            404,
            &[
                ("x-amzn-ErrorType", "ResourceNotFoundException:http://internal.amazon.com/"),
                ("x-amzn-RequestId", "req-7"),
            ],
            r#"{"message":"Flow nightly does not exist"}"#,
        );
        let err = client(backend, None)
            .invoke(&DESCRIBE, &describe_request())
            .await
            .unwrap_err();

        match err {
            ServiceError::Api {
                status,
                code,
                message,
                request_id,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, "ResourceNotFoundException");
                assert_eq!(message, "Flow nightly does not exist");
                assert_eq!(request_id.as_deref(), Some("req-7"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_name_resolution_failure_carries_endpoint() {
        let backend = FakeBackend::new()
            .with_transport_error(TransportErrorKind::NameResolution, "dns error");
        let client = client(backend, None);

        let err = client.invoke(&DELETE, &delete_request()).await.unwrap_err();

        assert_eq!(
            err.unresolved_endpoint(),
            Some("https://mediaconnect.us-west-2.amazonaws.com")
        );
        assert_eq!(client.region(), "us-west-2");
    }

    #[test]
    fn test_error_code_sanitizing() {
        assert_eq!(
            sanitize_error_code("com.amazonaws.appflow#ValidationException"),
            "ValidationException"
        );
        assert_eq!(
            sanitize_error_code("ConflictException:http://internal.amazon.com/"),
            "ConflictException"
        );
    }

    #[test]
    fn test_error_code_fallbacks() {
        let response = HttpResponse {
            status: 429,
            headers: Vec::new(),
            body: b"Rate exceeded".to_vec(),
        };
        match parse_error(&response, None) {
            AwsError::Api { code, message, .. } => {
                assert_eq!(code, "TooManyRequestsException");
                assert_eq!(message, "Rate exceeded");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_for_respects_override() {
        let regional = client(FakeBackend::new(), None);
        assert_eq!(
            regional.endpoint_for(&DELETE),
            "https://mediaconnect.us-west-2.amazonaws.com"
        );
        let local = client(FakeBackend::new(), Some("http://localhost:4566"));
        assert_eq!(local.endpoint_for(&DESCRIBE), "http://localhost:4566");
    }
}
