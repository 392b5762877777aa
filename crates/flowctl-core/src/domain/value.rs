//! Typed parameter values.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Number, Value};

use super::schema::FieldKind;

/// A value bound to one parameter.
///
/// Presence of a `ParamValue` in the invocation context is what marks a
/// field as "explicitly supplied"; `Integer(0)` and `Boolean(false)` are
/// ordinary values and are forwarded like any other.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    StringList(Vec<String>),
    Map(BTreeMap<String, String>),
    Document(Value),
}

impl ParamValue {
    /// Parse raw command-line text for a field of `kind`.
    ///
    /// Multi-valued kinds accept every occurrence in `raw`, each of which
    /// may itself be comma separated. In a map entry a comma segment without
    /// `=` continues the previous value, so `note=a,b` keeps its comma.
    /// Single-valued kinds expect exactly one entry; the caller enforces that.
    pub fn parse(kind: FieldKind, raw: &[String]) -> Result<Self, String> {
        match kind {
            FieldKind::StringList => Ok(Self::StringList(
                split_entries(raw).map(str::to_string).collect(),
            )),
            FieldKind::Map => parse_map(raw).map(Self::Map),
            _ => {
                let text = raw.first().map_or("", String::as_str);
                Self::parse_single(kind, text)
            }
        }
    }

    fn parse_single(kind: FieldKind, text: &str) -> Result<Self, String> {
        match kind {
            FieldKind::String => Ok(Self::String(text.to_string())),
            FieldKind::Integer => text
                .trim()
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| format!("'{text}' is not an integer")),
            FieldKind::Double => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Double)
                .ok_or_else(|| format!("'{text}' is not a number")),
            FieldKind::Boolean => parse_bool(text)
                .map(Self::Boolean)
                .ok_or_else(|| format!("'{text}' is not a boolean (true/false)")),
            FieldKind::Timestamp => parse_timestamp(text).map(Self::Timestamp),
            FieldKind::Document => serde_json::from_str(text)
                .map(Self::Document)
                .map_err(|e| format!("invalid JSON: {e}")),
            FieldKind::StringList | FieldKind::Map => Self::parse(kind, &[text.to_string()]),
        }
    }

    /// JSON representation used in request bodies and `^Param` projection.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Integer(i) => Value::Number((*i).into()),
            Self::Double(d) => Number::from_f64(*d).map_or(Value::Null, Value::Number),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Timestamp(ts) if ts.timestamp_subsec_nanos() == 0 => {
                Value::Number(ts.timestamp().into())
            }
            #[allow(clippy::cast_precision_loss)]
            Self::Timestamp(ts) => {
                let secs = ts.timestamp_micros() as f64 / 1_000_000.0;
                Number::from_f64(secs).map_or(Value::Null, Value::Number)
            }
            Self::StringList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect::<Map<String, Value>>(),
            ),
            Self::Document(doc) => doc.clone(),
        }
    }

    /// Text forms used in URI labels, query strings and headers.
    ///
    /// Lists expand to one entry per item; maps to `key=value` entries.
    pub fn to_text(&self) -> Vec<String> {
        match self {
            Self::String(s) => vec![s.clone()],
            Self::Integer(i) => vec![i.to_string()],
            Self::Double(d) => vec![d.to_string()],
            Self::Boolean(b) => vec![b.to_string()],
            Self::Timestamp(ts) => vec![ts.to_rfc3339()],
            Self::StringList(items) => items.clone(),
            Self::Map(map) => map.iter().map(|(k, v)| format!("{k}={v}")).collect(),
            Self::Document(doc) => vec![doc.to_string()],
        }
    }
}

fn split_entries(raw: &[String]) -> impl Iterator<Item = &str> {
    raw.iter()
        .flat_map(|r| r.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_map(raw: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut map = BTreeMap::new();
    for entry in raw {
        let mut pending: Option<(String, String)> = None;
        for segment in entry.split(',') {
            let Some((key, value)) = segment.split_once('=') else {
                if let Some((_, value)) = pending.as_mut() {
                    value.push(',');
                    value.push_str(segment);
                    continue;
                }
                if segment.trim().is_empty() {
                    continue;
                }
                return Err(format!("expected KEY=VALUE, got '{}'", segment.trim()));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("empty key in '{}'", segment.trim()));
            }
            if let Some((key, value)) = pending.replace((key.to_string(), value.to_string())) {
                map.insert(key, value.trim().to_string());
            }
        }
        if let Some((key, value)) = pending {
            map.insert(key, value.trim().to_string());
        }
    }
    Ok(map)
}

// A bare switch arrives as "true" from the parser, so empty text is not a value.
fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, String> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    text.parse::<i64>()
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .ok_or_else(|| format!("'{text}' is not an RFC 3339 timestamp or epoch seconds"))
}
