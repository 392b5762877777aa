//! Response projector.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::{InvocationContext, Projection, Response, Selector};

/// Note key carrying the service request id.
pub const REQUEST_ID_NOTE: &str = "RequestId";

/// Select the command output from `response` according to the context's selector.
///
/// `Param` selections echo the caller's bound input, never the response,
/// even when the response carries a field with the same name.
pub fn project(ctx: &InvocationContext, response: &Response) -> Projection {
    let value = match &ctx.selector {
        Selector::Whole => response.body.clone(),
        Selector::Field(name) => response.field(name).cloned().unwrap_or(Value::Null),
        Selector::Param(name) => ctx.get(name).map_or(Value::Null, |v| v.to_json()),
    };

    Projection {
        value,
        notes: collect_notes(ctx, response),
    }
}

fn collect_notes(ctx: &InvocationContext, response: &Response) -> BTreeMap<String, Value> {
    let mut notes = BTreeMap::new();
    if let Some(id) = &response.request_id {
        notes.insert(REQUEST_ID_NOTE.to_string(), Value::String(id.clone()));
    }
    for name in ctx.operation.metadata_fields {
        if let Some(value) = response.field(name).filter(|v| !v.is_null()) {
            notes.insert((*name).to_string(), value.clone());
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ClientSettings, FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec,
        Service, SuppliedParams, Verb,
    };
    use crate::services::binding::bind;
    use serde_json::json;

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::new("FlowName", Location::Body("flowName"), FieldKind::String).required(),
        FieldSpec::new("MaxResult", Location::Body("maxResults"), FieldKind::Integer),
    ];

    static OP: OperationSpec = OperationSpec {
        service: Service::Appflow,
        verb: Verb::Get,
        noun: "FlowExecutionRecord",
        operation: "DescribeFlowExecutionRecords",
        http: HttpBinding::new(HttpMethod::Post, "/describe-flow-execution-records"),
        fields: FIELDS,
        confirm_targets: &[],
        default_select: "FlowExecutions",
        metadata_fields: &["nextToken"],
        summary: "",
    };

    fn ctx(select: Option<&str>) -> InvocationContext {
        let params = SuppliedParams::new().with("FlowName", "input-name");
        bind(&OP, &params, select, ClientSettings::default()).unwrap()
    }

    fn response() -> Response {
        Response {
            status: 200,
            request_id: Some("req-1".into()),
            body: json!({
                "flowExecutions": [{"executionId": "e1"}],
                "flowName": "server-name",
                "nextToken": "page-2"
            }),
        }
    }

    #[test]
    fn test_default_selector_picks_field() {
        let projection = project(&ctx(None), &response());
        assert_eq!(projection.value, json!([{"executionId": "e1"}]));
    }

    #[test]
    fn test_whole_response() {
        let projection = project(&ctx(Some("*")), &response());
        assert_eq!(projection.value, response().body);
    }

    #[test]
    fn test_param_echo_ignores_response_field() {
        let projection = project(&ctx(Some("^FlowName")), &response());
        assert_eq!(projection.value, json!("input-name"));
    }

    #[test]
    fn test_unbound_param_projects_null() {
        let projection = project(&ctx(Some("^MaxResult")), &response());
        assert_eq!(projection.value, Value::Null);
    }

    #[test]
    fn test_missing_field_projects_null() {
        let projection = project(&ctx(Some("Nothing")), &response());
        assert_eq!(projection.value, Value::Null);
    }

    #[test]
    fn test_notes_carry_request_id_and_metadata() {
        let projection = project(&ctx(None), &response());
        assert_eq!(projection.notes.get(REQUEST_ID_NOTE), Some(&json!("req-1")));
        assert_eq!(projection.notes.get("nextToken"), Some(&json!("page-2")));
    }

    #[test]
    fn test_notes_skip_absent_metadata() {
        let response = Response::ok(json!({"flowExecutions": []}));
        let projection = project(&ctx(None), &response);
        assert!(projection.notes.is_empty());
    }
}
