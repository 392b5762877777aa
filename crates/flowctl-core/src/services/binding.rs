//! Parameter binding: raw named inputs → typed invocation context.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    ClientSettings, FieldDefault, FieldSpec, InvocationContext, OperationSpec, ParamValue,
    Selector, SuppliedParams,
};
use crate::error::BindError;

/// Bind `supplied` inputs to `operation`'s parameters.
///
/// Names resolve through canonical names and aliases. Only supplied fields
/// and fields with a declared default end up in the context. `select`
/// overrides the operation's default selector.
pub fn bind(
    operation: &'static OperationSpec,
    supplied: &SuppliedParams,
    select: Option<&str>,
    settings: ClientSettings,
) -> Result<InvocationContext, BindError> {
    let cmdlet = operation.cmdlet_name();
    let mut values: BTreeMap<&'static str, ParamValue> = BTreeMap::new();

    for (name, raw) in supplied.iter() {
        let field = operation
            .field(name)
            .ok_or_else(|| BindError::UnknownParameter {
                cmdlet: cmdlet.clone(),
                name: name.to_string(),
            })?;

        if !field.kind.is_multi_valued() && (raw.len() > 1 || values.contains_key(field.name)) {
            return Err(BindError::DuplicateValue {
                name: field.name.to_string(),
            });
        }

        let parsed = parse_field(field, raw)?;
        match values.remove(field.name) {
            Some(existing) => {
                values.insert(field.name, merge(existing, parsed));
            }
            None => {
                values.insert(field.name, parsed);
            }
        }
    }

    for field in operation.fields {
        if values.contains_key(field.name) {
            continue;
        }
        if let Some(default) = field.default {
            let value = match default {
                FieldDefault::Literal(text) => parse_field(field, &[text.to_string()])?,
                FieldDefault::IdempotencyToken => ParamValue::String(Uuid::new_v4().to_string()),
            };
            debug!(cmdlet = %cmdlet, field = field.name, "Applied field default");
            values.insert(field.name, value);
        }
    }

    let missing: Vec<String> = operation
        .required_fields()
        .filter(|f| !values.contains_key(f.name))
        .map(|f| f.name.to_string())
        .collect();
    if !missing.is_empty() {
        warn!(
            cmdlet = %cmdlet,
            missing = %missing.join(", "),
            "Required parameters were not supplied"
        );
        return Err(BindError::MissingRequired {
            cmdlet,
            names: missing,
        });
    }

    let selector = resolve_selector(operation, &cmdlet, select)?;
    debug!(cmdlet = %cmdlet, bound = values.len(), selector = %selector, "Bound parameters");

    Ok(InvocationContext::new(operation, values, selector, settings))
}

fn parse_field(field: &FieldSpec, raw: &[String]) -> Result<ParamValue, BindError> {
    ParamValue::parse(field.kind, raw).map_err(|message| BindError::InvalidValue {
        name: field.name.to_string(),
        message,
    })
}

fn merge(existing: ParamValue, next: ParamValue) -> ParamValue {
    match (existing, next) {
        (ParamValue::StringList(mut a), ParamValue::StringList(b)) => {
            a.extend(b);
            ParamValue::StringList(a)
        }
        (ParamValue::Map(mut a), ParamValue::Map(b)) => {
            a.extend(b);
            ParamValue::Map(a)
        }
        (_, next) => next,
    }
}

/// Parse the selector and canonicalize `^Param` references.
fn resolve_selector(
    operation: &OperationSpec,
    cmdlet: &str,
    select: Option<&str>,
) -> Result<Selector, BindError> {
    let text = select.unwrap_or(operation.default_select);
    let selector: Selector = text.parse().map_err(BindError::InvalidSelector)?;
    match selector {
        Selector::Param(name) => operation
            .field(&name)
            .map(|field| Selector::Param(field.name.to_string()))
            .ok_or_else(|| BindError::UnknownSelectorParameter {
                cmdlet: cmdlet.to_string(),
                name,
            }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldKind, HttpBinding, HttpMethod, Location, Service, Verb};

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::new("FlowName", Location::Body("flowName"), FieldKind::String)
            .required()
            .aliases(&["Name"]),
        FieldSpec::new("MaxResult", Location::Body("maxResults"), FieldKind::Integer),
        FieldSpec::new("ForceDelete", Location::Body("forceDelete"), FieldKind::Boolean),
        FieldSpec::new("Tag", Location::Body("tags"), FieldKind::Map),
        FieldSpec::new("ClientToken", Location::Body("clientToken"), FieldKind::String)
            .default_value(FieldDefault::IdempotencyToken),
        FieldSpec::new("Mode", Location::Body("mode"), FieldKind::String)
            .default_value(FieldDefault::Literal("Standard")),
    ];

    static OP: OperationSpec = OperationSpec {
        service: Service::Appflow,
        verb: Verb::Start,
        noun: "Flow",
        operation: "StartFlow",
        http: HttpBinding::new(HttpMethod::Post, "/start-flow"),
        fields: FIELDS,
        confirm_targets: &["FlowName"],
        default_select: "*",
        metadata_fields: &[],
        summary: "",
    };

    fn params(pairs: &[(&str, &str)]) -> SuppliedParams {
        pairs
            .iter()
            .fold(SuppliedParams::new(), |p, (k, v)| p.with(*k, *v))
    }

    #[test]
    fn test_binds_alias_to_canonical_name() {
        let ctx = bind(&OP, &params(&[("name", "nightly")]), None, ClientSettings::default())
            .unwrap();
        assert_eq!(
            ctx.get("FlowName"),
            Some(&ParamValue::String("nightly".into()))
        );
    }

    #[test]
    fn test_unsupplied_optional_fields_are_absent() {
        let ctx = bind(&OP, &params(&[("FlowName", "f")]), None, ClientSettings::default())
            .unwrap();
        assert!(!ctx.is_bound("MaxResult"));
        assert!(!ctx.is_bound("ForceDelete"));
    }

    #[test]
    fn test_defaults_are_applied() {
        let ctx = bind(&OP, &params(&[("FlowName", "f")]), None, ClientSettings::default())
            .unwrap();
        assert_eq!(ctx.get("Mode"), Some(&ParamValue::String("Standard".into())));
        let Some(ParamValue::String(token)) = ctx.get("ClientToken") else {
            panic!("idempotency token not bound");
        };
        assert!(Uuid::parse_str(token).is_ok());
    }

    #[test]
    fn test_supplied_value_beats_default() {
        let ctx = bind(
            &OP,
            &params(&[("FlowName", "f"), ("ClientToken", "mine")]),
            None,
            ClientSettings::default(),
        )
        .unwrap();
        assert_eq!(ctx.get("ClientToken"), Some(&ParamValue::String("mine".into())));
    }

    #[test]
    fn test_missing_required_is_reported() {
        let err = bind(&OP, &params(&[("MaxResult", "5")]), None, ClientSettings::default())
            .unwrap_err();
        assert_eq!(
            err,
            BindError::MissingRequired {
                cmdlet: "Start-AFFlow".into(),
                names: vec!["FlowName".into()],
            }
        );
    }

    #[test]
    fn test_unknown_parameter() {
        let err = bind(&OP, &params(&[("Bogus", "1")]), None, ClientSettings::default())
            .unwrap_err();
        assert!(matches!(err, BindError::UnknownParameter { name, .. } if name == "Bogus"));
    }

    #[test]
    fn test_duplicate_single_valued_parameter() {
        let err = bind(
            &OP,
            &params(&[("FlowName", "a"), ("Name", "b")]),
            None,
            ClientSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err, BindError::DuplicateValue { name: "FlowName".into() });
    }

    #[test]
    fn test_repeated_map_entries_merge() {
        let ctx = bind(
            &OP,
            &params(&[("FlowName", "a"), ("Tag", "env=prod"), ("Tag", "team=media")]),
            None,
            ClientSettings::default(),
        )
        .unwrap();
        let Some(ParamValue::Map(tags)) = ctx.get("Tag") else {
            panic!("tags not bound");
        };
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_invalid_value() {
        let err = bind(
            &OP,
            &params(&[("FlowName", "a"), ("MaxResult", "lots")]),
            None,
            ClientSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::InvalidValue { name, .. } if name == "MaxResult"));
    }

    #[test]
    fn test_param_selector_is_canonicalized() {
        let ctx = bind(
            &OP,
            &params(&[("FlowName", "a")]),
            Some("^name"),
            ClientSettings::default(),
        )
        .unwrap();
        assert_eq!(ctx.selector, Selector::Param("FlowName".into()));
    }

    #[test]
    fn test_param_selector_must_exist() {
        let err = bind(
            &OP,
            &params(&[("FlowName", "a")]),
            Some("^Nope"),
            ClientSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::UnknownSelectorParameter { .. }));
    }
}
