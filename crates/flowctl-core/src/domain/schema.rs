//! Operation schema types.
//!
//! An [`OperationSpec`] is the static description of one remote operation:
//! which cmdlet exposes it, how its parameters map onto the request, and
//! what part of the response becomes the command output. The pipeline is
//! generic over these descriptions; no operation has bespoke code.

use std::fmt;

use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Service / Verb
// ─────────────────────────────────────────────────────────────────────────────

/// A wrapped remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Service {
    /// AWS Elemental MediaConnect.
    MediaConnect,
    /// Amazon Appflow.
    Appflow,
}

impl Service {
    /// Short prefix used in cmdlet nouns (`EMCN`, `AF`).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::MediaConnect => "EMCN",
            Self::Appflow => "AF",
        }
    }

    /// Name used for request signing and endpoint host construction.
    pub const fn signing_name(self) -> &'static str {
        match self {
            Self::MediaConnect => "mediaconnect",
            Self::Appflow => "appflow",
        }
    }

    /// Human-readable service title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::MediaConnect => "AWS Elemental MediaConnect",
            Self::Appflow => "Amazon Appflow",
        }
    }

    /// Parse a short name case-insensitively.
    pub fn from_short_name(name: &str) -> Option<Self> {
        [Self::MediaConnect, Self::Appflow]
            .into_iter()
            .find(|s| s.short_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Cmdlet verb. Everything except `Get` changes remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verb {
    Get,
    New,
    Remove,
    Update,
    Start,
    Stop,
    Add,
    Grant,
    Revoke,
    Register,
    Unregister,
}

impl Verb {
    /// Whether invoking an operation with this verb requires confirmation.
    pub const fn is_mutating(self) -> bool {
        !matches!(self, Self::Get)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::New => "New",
            Self::Remove => "Remove",
            Self::Update => "Update",
            Self::Start => "Start",
            Self::Stop => "Stop",
            Self::Add => "Add",
            Self::Grant => "Grant",
            Self::Revoke => "Revoke",
            Self::Register => "Register",
            Self::Unregister => "Unregister",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP binding
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP method of an operation's REST binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// REST binding: method plus URI template with `{name}` path labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HttpBinding {
    pub method: HttpMethod,
    pub uri: &'static str,
}

impl HttpBinding {
    pub const fn new(method: HttpMethod, uri: &'static str) -> Self {
        Self { method, uri }
    }

    /// Labels referenced by the URI template, in order of appearance.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        let mut rest = self.uri;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            labels.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        labels
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fields
// ─────────────────────────────────────────────────────────────────────────────

/// Where a bound parameter lands in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    /// URI label (`{flowArn}`).
    Path(&'static str),
    /// Query string key.
    Query(&'static str),
    /// Request header name.
    Header(&'static str),
    /// Dotted path inside the JSON body (`sourceFlowConfig.connectorType`).
    Body(&'static str),
}

/// Value type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    String,
    Integer,
    Double,
    Boolean,
    /// RFC 3339 or epoch seconds on input, epoch seconds on the wire.
    Timestamp,
    StringList,
    /// `key=value` pairs.
    Map,
    /// Free-form JSON.
    Document,
}

impl FieldKind {
    /// Whether a parameter of this kind accepts more than one occurrence.
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::StringList | Self::Map)
    }

    pub const fn value_hint(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INT",
            Self::Double => "NUMBER",
            Self::Boolean => "BOOL",
            Self::Timestamp => "TIMESTAMP",
            Self::StringList => "VALUE",
            Self::Map => "KEY=VALUE",
            Self::Document => "JSON",
        }
    }
}

/// Value bound when the caller leaves a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldDefault {
    /// Parsed with the field's kind at bind time.
    Literal(&'static str),
    /// A fresh UUID v4 per invocation.
    IdempotencyToken,
}

/// One bindable parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Canonical parameter name (PascalCase, e.g. `FlowName`).
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub location: Location,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<FieldDefault>,
    pub help: &'static str,
}

impl FieldSpec {
    /// An optional string field with no aliases.
    pub const fn new(name: &'static str, location: Location, kind: FieldKind) -> Self {
        Self {
            name,
            aliases: &[],
            location,
            kind,
            required: false,
            default: None,
            help: "",
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub const fn default_value(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub const fn help(mut self, help: &'static str) -> Self {
        self.help = help;
        self
    }

    /// Whether `name` refers to this field (canonical name or alias, ASCII case-insensitive).
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Static description of one remote operation and the cmdlet exposing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationSpec {
    pub service: Service,
    pub verb: Verb,
    /// Cmdlet noun without the service prefix (`Flow`, `FlowOutput`).
    pub noun: &'static str,
    /// Remote operation name (`CreateFlow`).
    pub operation: &'static str,
    pub http: HttpBinding,
    pub fields: &'static [FieldSpec],
    /// Parameters whose values identify the target in confirmation prompts.
    pub confirm_targets: &'static [&'static str],
    /// Selector used when the caller passes none (`*`, a field, or `^Param`).
    pub default_select: &'static str,
    /// Response fields attached as notes next to the primary output.
    pub metadata_fields: &'static [&'static str],
    pub summary: &'static str,
}

impl OperationSpec {
    /// Cmdlet name, e.g. `New-AFFlow`.
    pub fn cmdlet_name(&self) -> String {
        format!("{}-{}{}", self.verb, self.service.short_name(), self.noun)
    }

    /// Find a field by canonical name or alias.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.answers_to(name))
    }

    pub fn is_mutating(&self) -> bool {
        self.verb.is_mutating()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}
