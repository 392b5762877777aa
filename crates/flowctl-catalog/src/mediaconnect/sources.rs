//! Flow sources and entitlements.

use flowctl_core::domain::{
    FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec, Service, Verb,
};

use super::flows::FLOW_ARN;
use FieldKind::{Document, Integer, String};
use Location::{Body, Path};

const SOURCE_ARN: FieldSpec = FieldSpec::new("SourceArn", Path("sourceArn"), String).required();

const ENTITLEMENT_ARN: FieldSpec =
    FieldSpec::new("EntitlementArn", Path("entitlementArn"), String).required();

pub static UPDATE_FLOW_SOURCE: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Update,
    noun: "FlowSource",
    operation: "UpdateFlowSource",
    http: HttpBinding::new(HttpMethod::Put, "/v1/flows/{flowArn}/source/{sourceArn}"),
    fields: &[
        FLOW_ARN,
        SOURCE_ARN,
        FieldSpec::new("Description", Body("description"), String),
        FieldSpec::new("Protocol", Body("protocol"), String),
        FieldSpec::new("IngestPort", Body("ingestPort"), Integer),
        FieldSpec::new("MaxBitrate", Body("maxBitrate"), Integer),
        FieldSpec::new("MaxLatency", Body("maxLatency"), Integer),
        FieldSpec::new("MinLatency", Body("minLatency"), Integer),
        FieldSpec::new("StreamId", Body("streamId"), String),
        FieldSpec::new("WhitelistCidr", Body("whitelistCidr"), String),
        FieldSpec::new("SourceEntitlementArn", Body("entitlementArn"), String)
            .help("Entitlement of another account to subscribe to"),
        FieldSpec::new("Decryption_Algorithm", Body("decryption.algorithm"), String),
        FieldSpec::new("Decryption_KeyType", Body("decryption.keyType"), String),
        FieldSpec::new("Decryption_RoleArn", Body("decryption.roleArn"), String),
        FieldSpec::new("Decryption_SecretArn", Body("decryption.secretArn"), String),
    ],
    confirm_targets: &["SourceArn"],
    default_select: "Source",
    metadata_fields: &[],
    summary: "Updates the source of a flow.",
};

pub static REMOVE_FLOW_SOURCE: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Remove,
    noun: "FlowSource",
    operation: "RemoveFlowSource",
    http: HttpBinding::new(HttpMethod::Delete, "/v1/flows/{flowArn}/source/{sourceArn}"),
    fields: &[FLOW_ARN, SOURCE_ARN],
    confirm_targets: &["SourceArn"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Removes a source from a flow with failover enabled.",
};

pub static GRANT_FLOW_ENTITLEMENT: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Grant,
    noun: "FlowEntitlement",
    operation: "GrantFlowEntitlements",
    http: HttpBinding::new(HttpMethod::Post, "/v1/flows/{flowArn}/entitlements"),
    fields: &[
        FLOW_ARN,
        FieldSpec::new("Entitlement", Body("entitlements"), Document)
            .required()
            .aliases(&["Entitlements"])
            .help("JSON array of entitlements to grant"),
    ],
    confirm_targets: &["FlowArn"],
    default_select: "Entitlements",
    metadata_fields: &[],
    summary: "Grants entitlements on a flow to other accounts.",
};

pub static REVOKE_FLOW_ENTITLEMENT: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Revoke,
    noun: "FlowEntitlement",
    operation: "RevokeFlowEntitlement",
    http: HttpBinding::new(
        HttpMethod::Delete,
        "/v1/flows/{flowArn}/entitlements/{entitlementArn}",
    ),
    fields: &[FLOW_ARN, ENTITLEMENT_ARN],
    confirm_targets: &["EntitlementArn"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Revokes an entitlement; the subscriber loses access immediately.",
};
