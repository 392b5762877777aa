//! Flow lifecycle operations.

use flowctl_core::domain::{
    FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec, Service, Verb,
};

use FieldKind::{Document, Integer, String};
use Location::{Body, Path, Query};

pub(super) const FLOW_ARN: FieldSpec = FieldSpec::new("FlowArn", Path("flowArn"), String)
    .required()
    .help("ARN of the flow");

const FLOW_ARN_ONLY: &[FieldSpec] = &[FLOW_ARN];

pub static NEW_FLOW: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::New,
    noun: "Flow",
    operation: "CreateFlow",
    http: HttpBinding::new(HttpMethod::Post, "/v1/flows"),
    fields: &[
        FieldSpec::new("Name", Body("name"), String).required(),
        FieldSpec::new("AvailabilityZone", Body("availabilityZone"), String),
        FieldSpec::new("Source", Body("source"), Document).help("Full source definition as JSON"),
        FieldSpec::new("Source_Name", Body("source.name"), String),
        FieldSpec::new("Source_Description", Body("source.description"), String),
        FieldSpec::new("Source_Protocol", Body("source.protocol"), String)
            .help("zixi-push, rtp-fec, rtp, rist, srt-listener, ..."),
        FieldSpec::new("Source_IngestPort", Body("source.ingestPort"), Integer),
        FieldSpec::new("Source_WhitelistCidr", Body("source.whitelistCidr"), String),
        FieldSpec::new("Source_MaxBitrate", Body("source.maxBitrate"), Integer),
        FieldSpec::new("Source_MaxLatency", Body("source.maxLatency"), Integer),
        FieldSpec::new("Source_StreamId", Body("source.streamId"), String),
        FieldSpec::new("Source_EntitlementArn", Body("source.entitlementArn"), String),
        FieldSpec::new("Decryption_Algorithm", Body("source.decryption.algorithm"), String),
        FieldSpec::new("Decryption_KeyType", Body("source.decryption.keyType"), String),
        FieldSpec::new("Decryption_RoleArn", Body("source.decryption.roleArn"), String),
        FieldSpec::new("Decryption_SecretArn", Body("source.decryption.secretArn"), String),
        FieldSpec::new("Output", Body("outputs"), Document)
            .aliases(&["Outputs"])
            .help("JSON array of outputs"),
        FieldSpec::new("Entitlement", Body("entitlements"), Document)
            .aliases(&["Entitlements"])
            .help("JSON array of entitlements"),
        FieldSpec::new(
            "SourceFailoverConfig_State",
            Body("sourceFailoverConfig.state"),
            String,
        ),
        FieldSpec::new(
            "SourceFailoverConfig_FailoverMode",
            Body("sourceFailoverConfig.failoverMode"),
            String,
        ),
        FieldSpec::new(
            "SourceFailoverConfig_RecoveryWindow",
            Body("sourceFailoverConfig.recoveryWindow"),
            Integer,
        ),
        FieldSpec::new(
            "Maintenance_MaintenanceDay",
            Body("maintenance.maintenanceDay"),
            String,
        ),
        FieldSpec::new(
            "Maintenance_MaintenanceStartHour",
            Body("maintenance.maintenanceStartHour"),
            String,
        )
        .help("HH:MM in UTC"),
    ],
    confirm_targets: &["Name"],
    default_select: "Flow",
    metadata_fields: &[],
    summary: "Creates a flow with a source and optional outputs and entitlements.",
};

pub static GET_FLOW: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Get,
    noun: "Flow",
    operation: "DescribeFlow",
    http: HttpBinding::new(HttpMethod::Get, "/v1/flows/{flowArn}"),
    fields: FLOW_ARN_ONLY,
    confirm_targets: &[],
    default_select: "Flow",
    metadata_fields: &["messages"],
    summary: "Describes a flow.",
};

pub static GET_FLOW_LIST: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Get,
    noun: "FlowList",
    operation: "ListFlows",
    http: HttpBinding::new(HttpMethod::Get, "/v1/flows"),
    fields: &[
        FieldSpec::new("MaxResult", Query("maxResults"), Integer).aliases(&["MaxResults"]),
        FieldSpec::new("NextToken", Query("nextToken"), String),
    ],
    confirm_targets: &[],
    default_select: "Flows",
    metadata_fields: &["nextToken"],
    summary: "Lists flows in the current region.",
};

pub static REMOVE_FLOW: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Remove,
    noun: "Flow",
    operation: "DeleteFlow",
    http: HttpBinding::new(HttpMethod::Delete, "/v1/flows/{flowArn}"),
    fields: FLOW_ARN_ONLY,
    confirm_targets: &["FlowArn"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Deletes a stopped flow.",
};

pub static START_FLOW: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Start,
    noun: "Flow",
    operation: "StartFlow",
    http: HttpBinding::new(HttpMethod::Post, "/v1/flows/start/{flowArn}"),
    fields: FLOW_ARN_ONLY,
    confirm_targets: &["FlowArn"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Starts a flow.",
};

pub static STOP_FLOW: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Stop,
    noun: "Flow",
    operation: "StopFlow",
    http: HttpBinding::new(HttpMethod::Post, "/v1/flows/stop/{flowArn}"),
    fields: FLOW_ARN_ONLY,
    confirm_targets: &["FlowArn"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Stops a flow.",
};
