//! Schema-shaped request objects.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::schema::OperationSpec;

/// The single request built for an invocation.
///
/// Holds only what the caller bound: unset optional fields and nested groups
/// with no set leaf never appear. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Request {
    /// URI label values, unencoded.
    pub path_params: BTreeMap<&'static str, String>,
    /// Query entries; list values repeat the key.
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
    /// JSON body members.
    pub body: Map<String, Value>,
}

impl Request {
    /// Value at a dotted body path, if present.
    pub fn body_at(&self, dotted: &str) -> Option<&Value> {
        let mut segments = dotted.split('.');
        let mut current = self.body.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether the request carries a body for this operation.
    ///
    /// Body-less methods only send one when some field targets the body.
    pub fn has_body(&self, operation: &OperationSpec) -> bool {
        use crate::domain::schema::HttpMethod;
        match operation.http.method {
            HttpMethod::Post | HttpMethod::Put => true,
            HttpMethod::Get | HttpMethod::Delete => !self.body.is_empty(),
        }
    }

    /// The body as a JSON value (an empty object when nothing was bound).
    pub fn body_json(&self) -> Value {
        Value::Object(self.body.clone())
    }
}
