//! Rendering of pipeline outcomes.

use std::io::{self, Write};

use flowctl_core::{OperationSpec, Outcome, Request};
use serde_json::{Value, json};

/// Notes that are only interesting in debug logs.
const QUIET_NOTES: &[&str] = &["RequestId"];

/// Text printed for a projected value.
///
/// Strings print raw, `null` prints nothing, everything else as
/// pretty JSON.
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(format!("{other:#}")),
    }
}

/// JSON description of a request that was built but not sent.
pub fn dry_run_document(operation: &OperationSpec, request: &Request) -> Value {
    let mut document = json!({
        "cmdlet": operation.cmdlet_name(),
        "operation": operation.operation,
        "method": operation.http.method.as_str(),
        "uri": operation.http.uri,
    });
    if !request.path_params.is_empty() {
        document["pathParameters"] = json!(request.path_params);
    }
    if !request.query.is_empty() {
        document["query"] = json!(request.query);
    }
    if !request.headers.is_empty() {
        document["headers"] = json!(request.headers);
    }
    if request.has_body(operation) {
        document["body"] = request.body_json();
    }
    document
}

/// Write an outcome: results to `out`, notes and messages to `diag`.
pub fn render_outcome<O: Write, D: Write>(
    operation: &OperationSpec,
    outcome: &Outcome,
    out: &mut O,
    diag: &mut D,
) -> io::Result<()> {
    match outcome {
        Outcome::Completed(projection) => {
            if let Some(text) = render_value(&projection.value) {
                writeln!(out, "{text}")?;
            }
            for (key, value) in &projection.notes {
                if QUIET_NOTES.contains(&key.as_str()) || value.is_null() {
                    continue;
                }
                let text = render_value(value).unwrap_or_default();
                writeln!(diag, "{key}: {text}")?;
            }
        }
        Outcome::Declined => {
            writeln!(
                diag,
                "{}: operation cancelled by user; nothing was sent.",
                operation.cmdlet_name()
            )?;
        }
        Outcome::DryRun(request) => {
            writeln!(out, "{:#}", dry_run_document(operation, request))?;
        }
    }
    out.flush()
}
