//! Response objects, projections and the caller-owned invocation log.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::request::Request;

/// Raw result of a successful remote call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub request_id: Option<String>,
    pub body: Value,
}

impl Response {
    /// A 200 response with the given body and no request id.
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            request_id: None,
            body,
        }
    }

    /// Top-level body field, matched ASCII case-insensitively.
    ///
    /// Exact matches win over case-folded ones.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let object = self.body.as_object()?;
        object.get(name).or_else(|| {
            object
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }
}

/// What the projector hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// The primary output.
    pub value: Value,
    /// Auxiliary metadata (request id, pagination token, ...).
    pub notes: BTreeMap<String, Value>,
}

/// One completed invocation as recorded in an [`InvocationLog`].
#[derive(Debug, Clone, Serialize)]
pub struct InvocationRecord {
    pub cmdlet: String,
    pub operation: &'static str,
    pub request: Request,
    pub response: Response,
    pub notes: BTreeMap<String, Value>,
    pub completed_at: DateTime<Utc>,
}

/// History of completed invocations, owned by whoever drives the pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvocationLog {
    records: Vec<InvocationRecord>,
    /// Oldest records are dropped past this length; `None` keeps everything.
    capacity: Option<usize>,
}

impl InvocationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity: Some(capacity),
        }
    }

    pub fn push(&mut self, record: InvocationRecord) {
        self.records.push(record);
        if let Some(capacity) = self.capacity {
            let excess = self.records.len().saturating_sub(capacity);
            self.records.drain(..excess);
        }
    }

    pub fn last(&self) -> Option<&InvocationRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[InvocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
