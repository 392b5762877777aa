//! Flow lifecycle operations.

use flowctl_core::domain::{
    FieldDefault, FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec,
    Service, Verb,
};

use FieldKind::{Boolean, Document, Integer, Map, String, Timestamp};
use Location::Body;

// ─────────────────────────────────────────────────────────────────────────────
// Shared flow definition fields
// ─────────────────────────────────────────────────────────────────────────────

const FLOW_NAME: FieldSpec = FieldSpec::new("FlowName", Body("flowName"), String)
    .required()
    .help("Name of the flow");

const CLIENT_TOKEN: FieldSpec = FieldSpec::new("ClientToken", Body("clientToken"), String)
    .default_value(FieldDefault::IdempotencyToken)
    .help("Idempotency token; generated when omitted");

/// Field list of a flow definition (name, trigger, source, destinations,
/// tasks, client token) followed by `$extra`.
///
/// Document-valued groups come before the flattened parameters that refine
/// them so both can be combined on one command line.
macro_rules! flow_definition_fields {
    ($($extra:expr),* $(,)?) => {
        &[
            FLOW_NAME,
            FieldSpec::new("Description", Body("description"), String),
            FieldSpec::new("TriggerConfig", Body("triggerConfig"), Document)
                .help("Full trigger configuration as JSON"),
            FieldSpec::new("TriggerType", Body("triggerConfig.triggerType"), String)
                .aliases(&["TriggerConfig_TriggerType"])
                .help("Scheduled, Event or OnDemand"),
            FieldSpec::new(
                "Scheduled_ScheduleExpression",
                Body("triggerConfig.triggerProperties.Scheduled.scheduleExpression"),
                String,
            )
            .help("e.g. rate(1hours)"),
            FieldSpec::new(
                "Scheduled_DataPullMode",
                Body("triggerConfig.triggerProperties.Scheduled.dataPullMode"),
                String,
            )
            .help("Incremental or Complete"),
            FieldSpec::new(
                "Scheduled_ScheduleStartTime",
                Body("triggerConfig.triggerProperties.Scheduled.scheduleStartTime"),
                Timestamp,
            ),
            FieldSpec::new(
                "Scheduled_ScheduleEndTime",
                Body("triggerConfig.triggerProperties.Scheduled.scheduleEndTime"),
                Timestamp,
            ),
            FieldSpec::new(
                "Scheduled_Timezone",
                Body("triggerConfig.triggerProperties.Scheduled.timezone"),
                String,
            ),
            FieldSpec::new(
                "Scheduled_ScheduleOffset",
                Body("triggerConfig.triggerProperties.Scheduled.scheduleOffset"),
                Integer,
            ),
            FieldSpec::new("SourceFlowConfig", Body("sourceFlowConfig"), Document)
                .help("Full source configuration as JSON"),
            FieldSpec::new(
                "SourceFlowConfig_ConnectorType",
                Body("sourceFlowConfig.connectorType"),
                String,
            )
            .help("Source connector type, e.g. S3 or Salesforce"),
            FieldSpec::new(
                "SourceFlowConfig_ConnectorProfileName",
                Body("sourceFlowConfig.connectorProfileName"),
                String,
            ),
            FieldSpec::new(
                "SourceFlowConfig_ApiVersion",
                Body("sourceFlowConfig.apiVersion"),
                String,
            ),
            FieldSpec::new(
                "S3_BucketName",
                Body("sourceFlowConfig.sourceConnectorProperties.S3.bucketName"),
                String,
            )
            .aliases(&["SourceConnectorProperties_S3_BucketName"]),
            FieldSpec::new(
                "S3_BucketPrefix",
                Body("sourceFlowConfig.sourceConnectorProperties.S3.bucketPrefix"),
                String,
            )
            .aliases(&["SourceConnectorProperties_S3_BucketPrefix"]),
            FieldSpec::new(
                "Salesforce_Object",
                Body("sourceFlowConfig.sourceConnectorProperties.Salesforce.object"),
                String,
            )
            .aliases(&["SourceConnectorProperties_Salesforce_Object"]),
            FieldSpec::new(
                "Salesforce_EnableDynamicFieldUpdate",
                Body("sourceFlowConfig.sourceConnectorProperties.Salesforce.enableDynamicFieldUpdate"),
                Boolean,
            ),
            FieldSpec::new(
                "Salesforce_IncludeDeletedRecord",
                Body("sourceFlowConfig.sourceConnectorProperties.Salesforce.includeDeletedRecords"),
                Boolean,
            )
            .aliases(&["Salesforce_IncludeDeletedRecords"]),
            FieldSpec::new(
                "IncrementalPullConfig_DatetimeTypeFieldName",
                Body("sourceFlowConfig.incrementalPullConfig.datetimeTypeFieldName"),
                String,
            ),
            FieldSpec::new(
                "DestinationFlowConfigList",
                Body("destinationFlowConfigList"),
                Document,
            )
            .required()
            .help("JSON array of destination configurations"),
            FieldSpec::new("Task", Body("tasks"), Document)
                .required()
                .aliases(&["Tasks"])
                .help("JSON array of flow tasks"),
            CLIENT_TOKEN,
            $($extra),*
        ]
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────────────────────────────────────

pub static NEW_FLOW: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::New,
    noun: "Flow",
    operation: "CreateFlow",
    http: HttpBinding::new(HttpMethod::Post, "/create-flow"),
    fields: flow_definition_fields![
        FieldSpec::new("KmsArn", Body("kmsArn"), String),
        FieldSpec::new("Tag", Body("tags"), Map).aliases(&["Tags"]),
    ],
    confirm_targets: &["FlowName"],
    default_select: "FlowArn",
    metadata_fields: &[],
    summary: "Creates a flow from a trigger, a source and one or more destinations.",
};

pub static UPDATE_FLOW: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Update,
    noun: "Flow",
    operation: "UpdateFlow",
    http: HttpBinding::new(HttpMethod::Post, "/update-flow"),
    fields: flow_definition_fields![],
    confirm_targets: &["FlowName"],
    default_select: "FlowStatus",
    metadata_fields: &[],
    summary: "Updates an existing flow.",
};

pub static GET_FLOW: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Get,
    noun: "Flow",
    operation: "DescribeFlow",
    http: HttpBinding::new(HttpMethod::Post, "/describe-flow"),
    fields: &[FLOW_NAME],
    confirm_targets: &[],
    default_select: "*",
    metadata_fields: &[],
    summary: "Describes a flow.",
};

pub static GET_FLOW_LIST: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Get,
    noun: "FlowList",
    operation: "ListFlows",
    http: HttpBinding::new(HttpMethod::Post, "/list-flows"),
    fields: &[
        FieldSpec::new("MaxResult", Body("maxResults"), Integer).aliases(&["MaxResults"]),
        FieldSpec::new("NextToken", Body("nextToken"), String),
    ],
    confirm_targets: &[],
    default_select: "Flows",
    metadata_fields: &["nextToken"],
    summary: "Lists the flows in the account.",
};

pub static REMOVE_FLOW: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Remove,
    noun: "Flow",
    operation: "DeleteFlow",
    http: HttpBinding::new(HttpMethod::Post, "/delete-flow"),
    fields: &[
        FLOW_NAME,
        FieldSpec::new("ForceDelete", Body("forceDelete"), Boolean)
            .help("Delete even if the flow is running"),
    ],
    confirm_targets: &["FlowName"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Deletes a flow.",
};

pub static START_FLOW: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Start,
    noun: "Flow",
    operation: "StartFlow",
    http: HttpBinding::new(HttpMethod::Post, "/start-flow"),
    fields: &[FLOW_NAME, CLIENT_TOKEN],
    confirm_targets: &["FlowName"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Runs an on-demand flow or activates a scheduled or event-triggered one.",
};

pub static STOP_FLOW: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Stop,
    noun: "Flow",
    operation: "StopFlow",
    http: HttpBinding::new(HttpMethod::Post, "/stop-flow"),
    fields: &[FLOW_NAME],
    confirm_targets: &["FlowName"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Deactivates a scheduled or event-triggered flow.",
};

pub static GET_FLOW_EXECUTION_RECORD: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Get,
    noun: "FlowExecutionRecord",
    operation: "DescribeFlowExecutionRecords",
    http: HttpBinding::new(HttpMethod::Post, "/describe-flow-execution-records"),
    fields: &[
        FLOW_NAME,
        FieldSpec::new("MaxResult", Body("maxResults"), Integer).aliases(&["MaxResults"]),
        FieldSpec::new("NextToken", Body("nextToken"), String),
    ],
    confirm_targets: &[],
    default_select: "FlowExecutions",
    metadata_fields: &["nextToken"],
    summary: "Lists the execution history of a flow.",
};
