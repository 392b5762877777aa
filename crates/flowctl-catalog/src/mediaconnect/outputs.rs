//! Flow outputs.

use flowctl_core::domain::{
    FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec, Service, Verb,
};

use super::flows::FLOW_ARN;
use FieldKind::{Document, Integer, String, StringList};
use Location::{Body, Path};

const OUTPUT_ARN: FieldSpec = FieldSpec::new("OutputArn", Path("outputArn"), String).required();

const OUTPUT_IDENTITY: &[FieldSpec] = &[FLOW_ARN, OUTPUT_ARN];

pub static ADD_FLOW_OUTPUT: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Add,
    noun: "FlowOutput",
    operation: "AddFlowOutputs",
    http: HttpBinding::new(HttpMethod::Post, "/v1/flows/{flowArn}/outputs"),
    fields: &[
        FLOW_ARN,
        FieldSpec::new("Output", Body("outputs"), Document)
            .required()
            .aliases(&["Outputs"])
            .help("JSON array of outputs to add"),
    ],
    confirm_targets: &["FlowArn"],
    default_select: "Outputs",
    metadata_fields: &[],
    summary: "Adds outputs to an existing flow.",
};

pub static UPDATE_FLOW_OUTPUT: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Update,
    noun: "FlowOutput",
    operation: "UpdateFlowOutput",
    http: HttpBinding::new(HttpMethod::Put, "/v1/flows/{flowArn}/outputs/{outputArn}"),
    fields: &[
        FLOW_ARN,
        OUTPUT_ARN,
        FieldSpec::new("Description", Body("description"), String),
        FieldSpec::new("Destination", Body("destination"), String)
            .help("IP address the output is sent to"),
        FieldSpec::new("Port", Body("port"), Integer),
        FieldSpec::new("Protocol", Body("protocol"), String),
        FieldSpec::new("MaxLatency", Body("maxLatency"), Integer),
        FieldSpec::new("MinLatency", Body("minLatency"), Integer),
        FieldSpec::new("SmoothingLatency", Body("smoothingLatency"), Integer),
        FieldSpec::new("RemoteId", Body("remoteId"), String),
        FieldSpec::new("StreamId", Body("streamId"), String),
        FieldSpec::new("CidrAllowList", Body("cidrAllowList"), StringList),
        FieldSpec::new("Encryption_Algorithm", Body("encryption.algorithm"), String)
            .help("aes128, aes192 or aes256"),
        FieldSpec::new("Encryption_KeyType", Body("encryption.keyType"), String),
        FieldSpec::new("Encryption_RoleArn", Body("encryption.roleArn"), String),
        FieldSpec::new("Encryption_SecretArn", Body("encryption.secretArn"), String),
        FieldSpec::new(
            "VpcInterfaceAttachment_VpcInterfaceName",
            Body("vpcInterfaceAttachment.vpcInterfaceName"),
            String,
        ),
    ],
    confirm_targets: &["OutputArn"],
    default_select: "Output",
    metadata_fields: &[],
    summary: "Updates an existing flow output.",
};

pub static REMOVE_FLOW_OUTPUT: OperationSpec = OperationSpec {
    service: Service::MediaConnect,
    verb: Verb::Remove,
    noun: "FlowOutput",
    operation: "RemoveFlowOutput",
    http: HttpBinding::new(HttpMethod::Delete, "/v1/flows/{flowArn}/outputs/{outputArn}"),
    fields: OUTPUT_IDENTITY,
    confirm_targets: &["OutputArn"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Removes an output from a flow.",
};
