//! Per-invocation state: raw inputs, client settings and bound values.

use std::collections::BTreeMap;
use std::fmt;

use super::schema::OperationSpec;
use super::selector::Selector;
use super::value::ParamValue;

// ─────────────────────────────────────────────────────────────────────────────
// Raw inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Named raw inputs as collected from the command line (or a library caller).
///
/// Names may be canonical parameter names or aliases. Each occurrence keeps
/// its text; a bare switch is recorded as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppliedParams {
    entries: Vec<(String, Vec<String>)>,
}

impl SuppliedParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one or more values for `name`.
    pub fn push<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((name.into(), values.into_iter().map(Into::into).collect()));
    }

    /// Builder-style variant of [`push`](Self::push) for a single value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, [value.into()]);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client settings
// ─────────────────────────────────────────────────────────────────────────────

/// Explicit credentials supplied on the command line.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

/// Everything that selects which client handle serves an invocation.
///
/// Unset values fall back to the AWS shared configuration chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClientSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub credentials: Option<StaticCredentials>,
}

impl ClientSettings {
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Invocation context
// ─────────────────────────────────────────────────────────────────────────────

/// Bound state of a single invocation.
///
/// Only explicitly supplied (or defaulted) fields are present in `values`;
/// absence means "not provided" and the field is never forwarded.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub operation: &'static OperationSpec,
    values: BTreeMap<&'static str, ParamValue>,
    pub selector: Selector,
    pub settings: ClientSettings,
}

impl InvocationContext {
    pub(crate) fn new(
        operation: &'static OperationSpec,
        values: BTreeMap<&'static str, ParamValue>,
        selector: Selector,
        settings: ClientSettings,
    ) -> Self {
        Self {
            operation,
            values,
            selector,
            settings,
        }
    }

    /// Value bound to a parameter, looked up by canonical name or alias.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let field = self.operation.field(name)?;
        self.values.get(field.name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Bound values keyed by canonical parameter name.
    pub fn values(&self) -> &BTreeMap<&'static str, ParamValue> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_params_keeps_order_and_values() {
        let mut params = SuppliedParams::new().with("FlowName", "nightly");
        params.push("Tag", ["a=1", "b=2"]);

        let collected: Vec<_> = params.iter().collect();
        assert_eq!(collected[0], ("FlowName", &["nightly".to_string()][..]));
        assert_eq!(collected[1].1.len(), 2);
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = StaticCredentials {
            access_key_id: "AKIDEXAMPLE".into(),
            secret_access_key: "wJalrXUtnFEMI".into(),
            session_token: Some("token".into()),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(!rendered.contains("wJalrXUtnFEMI"));
        assert!(!rendered.contains("token\""));
    }
}
