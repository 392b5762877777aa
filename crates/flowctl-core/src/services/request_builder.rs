//! Request builder: bound context → request object.
//!
//! Pure and deterministic. A field reaches the request only when it is
//! present in the context, and body groups are materialized lazily as their
//! first leaf is written, so a group whose leaves are all unset is omitted
//! rather than sent as an empty object.

use serde_json::{Map, Value};

use crate::domain::{InvocationContext, Location, Request};
use crate::error::BuildError;

/// Map `ctx` onto the operation's request shape.
pub fn build_request(ctx: &InvocationContext) -> Result<Request, BuildError> {
    let operation = ctx.operation;
    let mut request = Request::default();

    for field in operation.fields {
        let Some(value) = ctx.values().get(field.name) else {
            continue;
        };
        match field.location {
            Location::Path(label) => {
                request
                    .path_params
                    .insert(label, value.to_text().join(","));
            }
            Location::Query(key) => {
                request
                    .query
                    .extend(value.to_text().into_iter().map(|v| (key, v)));
            }
            Location::Header(name) => {
                request.headers.push((name, value.to_text().join(",")));
            }
            Location::Body(path) => insert_at(&mut request.body, path, value.to_json())?,
        }
    }

    for label in operation.http.labels() {
        if !request.path_params.contains_key(label) {
            return Err(BuildError::MissingPathParameter {
                label: label.to_string(),
            });
        }
    }

    Ok(request)
}

/// Write `value` at a dotted path, creating intermediate objects as needed.
///
/// Writing an object where an object already exists merges the members, and
/// a scalar written over a scalar (a member of an earlier document) replaces
/// it. Mixing an object and a scalar at one location is a conflict.
fn insert_at(body: &mut Map<String, Value>, path: &str, value: Value) -> Result<(), BuildError> {
    let conflict = || BuildError::PathConflict {
        path: path.to_string(),
    };
    let (parents, leaf) = match path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    };

    let mut current = body;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        current = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(conflict)?;
    }

    let Some(existing) = current.get_mut(leaf) else {
        current.insert(leaf.to_string(), value);
        return Ok(());
    };
    match (existing, value) {
        (Value::Object(existing), Value::Object(incoming)) => {
            existing.extend(incoming);
            Ok(())
        }
        (Value::Object(_), _) | (_, Value::Object(_)) => Err(conflict()),
        (existing, incoming) => {
            *existing = incoming;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ClientSettings, FieldKind, FieldSpec, HttpBinding, HttpMethod, OperationSpec, Service,
        SuppliedParams, Verb,
    };
    use crate::services::binding::bind;
    use serde_json::json;

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::new("FlowArn", Location::Path("flowArn"), FieldKind::String).required(),
        FieldSpec::new("MaxResult", Location::Query("maxResults"), FieldKind::Integer),
        FieldSpec::new("TagKey", Location::Query("tagKeys"), FieldKind::StringList),
        FieldSpec::new("Description", Location::Body("description"), FieldKind::String),
        FieldSpec::new("Enabled", Location::Body("enabled"), FieldKind::Boolean),
        FieldSpec::new(
            "S3_BucketName",
            Location::Body("sourceFlowConfig.sourceConnectorProperties.S3.bucketName"),
            FieldKind::String,
        ),
        FieldSpec::new(
            "S3_BucketPrefix",
            Location::Body("sourceFlowConfig.sourceConnectorProperties.S3.bucketPrefix"),
            FieldKind::String,
        ),
        FieldSpec::new(
            "ConnectorType",
            Location::Body("sourceFlowConfig.connectorType"),
            FieldKind::String,
        ),
        FieldSpec::new("Token", Location::Header("x-client-token"), FieldKind::String),
        FieldSpec::new("Extra", Location::Body("sourceFlowConfig"), FieldKind::Document),
        FieldSpec::new("Clash", Location::Body("description.inner"), FieldKind::String),
        FieldSpec::new("Schedule", Location::Body("schedule"), FieldKind::Document),
        FieldSpec::new("ScheduleMode", Location::Body("schedule.mode"), FieldKind::String),
        FieldSpec::new("ScheduleRate", Location::Body("schedule.rate"), FieldKind::Document),
    ];

    static OP: OperationSpec = OperationSpec {
        service: Service::MediaConnect,
        verb: Verb::Update,
        noun: "Flow",
        operation: "UpdateFlow",
        http: HttpBinding::new(HttpMethod::Put, "/v1/flows/{flowArn}"),
        fields: FIELDS,
        confirm_targets: &["FlowArn"],
        default_select: "*",
        metadata_fields: &[],
        summary: "",
    };

    fn build(pairs: &[(&str, &str)]) -> Result<Request, BuildError> {
        let params = pairs
            .iter()
            .fold(SuppliedParams::new(), |p, (k, v)| p.with(*k, *v));
        let ctx = bind(&OP, &params, None, ClientSettings::default()).unwrap();
        build_request(&ctx)
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let request = build(&[("FlowArn", "arn:flow")]).unwrap();
        assert!(request.body.is_empty());
        assert!(request.query.is_empty());
        assert!(request.headers.is_empty());
        assert_eq!(request.path_params.get("flowArn").map(String::as_str), Some("arn:flow"));
    }

    #[test]
    fn test_falsy_values_are_forwarded() {
        let request = build(&[
            ("FlowArn", "arn:flow"),
            ("Enabled", "false"),
            ("MaxResult", "0"),
            ("Description", ""),
        ])
        .unwrap();
        assert_eq!(request.body.get("enabled"), Some(&json!(false)));
        assert_eq!(request.body.get("description"), Some(&json!("")));
        assert_eq!(request.query_values("maxResults"), vec!["0"]);
    }

    #[test]
    fn test_nested_group_omitted_when_no_leaf_set() {
        let request = build(&[("FlowArn", "arn:flow"), ("Description", "d")]).unwrap();
        assert!(request.body.get("sourceFlowConfig").is_none());
    }

    #[test]
    fn test_nested_groups_built_from_leaves() {
        let request = build(&[
            ("FlowArn", "arn:flow"),
            ("S3_BucketName", "raw-data"),
            ("ConnectorType", "S3"),
        ])
        .unwrap();
        assert_eq!(
            request.body.get("sourceFlowConfig"),
            Some(&json!({
                "connectorType": "S3",
                "sourceConnectorProperties": {"S3": {"bucketName": "raw-data"}}
            }))
        );
    }

    #[test]
    fn test_document_merges_into_existing_group() {
        let request = build(&[
            ("FlowArn", "arn:flow"),
            ("ConnectorType", "S3"),
            ("Extra", r#"{"apiVersion": "v2"}"#),
        ])
        .unwrap();
        assert_eq!(
            request.body.get("sourceFlowConfig"),
            Some(&json!({"connectorType": "S3", "apiVersion": "v2"}))
        );
    }

    #[test]
    fn test_scalar_parent_is_a_conflict() {
        let err = build(&[
            ("FlowArn", "arn:flow"),
            ("Description", "d"),
            ("Clash", "x"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::PathConflict {
                path: "description.inner".into()
            }
        );
    }

    #[test]
    fn test_query_lists_repeat_and_headers_set() {
        let request = build(&[
            ("FlowArn", "arn:flow"),
            ("TagKey", "a,b"),
            ("Token", "tok"),
        ])
        .unwrap();
        assert_eq!(request.query_values("tagKeys"), vec!["a", "b"]);
        assert_eq!(request.headers, vec![("x-client-token", "tok".to_string())]);
    }

    #[test]
    fn test_leaf_overrides_document_member() {
        let request = build(&[
            ("FlowArn", "arn:flow"),
            ("Schedule", r#"{"mode": "Scheduled", "interval": 5}"#),
            ("ScheduleMode", "OnDemand"),
        ])
        .unwrap();
        assert_eq!(
            request.body.get("schedule"),
            Some(&json!({"mode": "OnDemand", "interval": 5}))
        );
    }

    #[test]
    fn test_object_over_document_scalar_is_a_conflict() {
        let err = build(&[
            ("FlowArn", "arn:flow"),
            ("Schedule", r#"{"rate": "hourly"}"#),
            ("ScheduleRate", r#"{"value": 1}"#),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::PathConflict {
                path: "schedule.rate".into()
            }
        );
    }
}
