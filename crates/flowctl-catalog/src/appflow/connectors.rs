//! Connector profiles and custom connector registration.

use flowctl_core::domain::{
    FieldDefault, FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec,
    Service, Verb,
};

use FieldKind::{Boolean, Document, Integer, String, StringList};
use Location::Body;

const CLIENT_TOKEN: FieldSpec = FieldSpec::new("ClientToken", Body("clientToken"), String)
    .default_value(FieldDefault::IdempotencyToken);

const PROFILE_NAME: FieldSpec =
    FieldSpec::new("ConnectorProfileName", Body("connectorProfileName"), String).required();

const FORCE_DELETE: FieldSpec = FieldSpec::new("ForceDelete", Body("forceDelete"), Boolean)
    .help("Delete even if the resource is in use");

pub static NEW_CONNECTOR_PROFILE: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::New,
    noun: "ConnectorProfile",
    operation: "CreateConnectorProfile",
    http: HttpBinding::new(HttpMethod::Post, "/create-connector-profile"),
    fields: &[
        PROFILE_NAME,
        FieldSpec::new("ConnectorType", Body("connectorType"), String).required(),
        FieldSpec::new("ConnectionMode", Body("connectionMode"), String)
            .required()
            .help("Public or Private"),
        FieldSpec::new("ConnectorLabel", Body("connectorLabel"), String),
        FieldSpec::new("KmsArn", Body("kmsArn"), String),
        FieldSpec::new("ConnectorProfileConfig", Body("connectorProfileConfig"), Document)
            .help("Full profile properties and credentials as JSON"),
        FieldSpec::new(
            "Salesforce_InstanceUrl",
            Body("connectorProfileConfig.connectorProfileProperties.Salesforce.instanceUrl"),
            String,
        )
        .aliases(&["ConnectorProfileProperties_Salesforce_InstanceUrl"]),
        FieldSpec::new(
            "Salesforce_IsSandboxEnvironment",
            Body("connectorProfileConfig.connectorProfileProperties.Salesforce.isSandboxEnvironment"),
            Boolean,
        ),
        FieldSpec::new(
            "Salesforce_AccessToken",
            Body("connectorProfileConfig.connectorProfileCredentials.Salesforce.accessToken"),
            String,
        )
        .aliases(&["ConnectorProfileCredentials_Salesforce_AccessToken"]),
        FieldSpec::new(
            "Salesforce_RefreshToken",
            Body("connectorProfileConfig.connectorProfileCredentials.Salesforce.refreshToken"),
            String,
        ),
        FieldSpec::new(
            "S3_BucketName",
            Body("connectorProfileConfig.connectorProfileProperties.S3.bucketName"),
            String,
        ),
        CLIENT_TOKEN,
    ],
    confirm_targets: &["ConnectorProfileName"],
    default_select: "ConnectorProfileArn",
    metadata_fields: &[],
    summary: "Creates a connector profile holding connection properties and credentials.",
};

pub static GET_CONNECTOR_PROFILE: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Get,
    noun: "ConnectorProfile",
    operation: "DescribeConnectorProfiles",
    http: HttpBinding::new(HttpMethod::Post, "/describe-connector-profiles"),
    fields: &[
        FieldSpec::new("ConnectorProfileName", Body("connectorProfileNames"), StringList)
            .aliases(&["ConnectorProfileNames"]),
        FieldSpec::new("ConnectorType", Body("connectorType"), String),
        FieldSpec::new("ConnectorLabel", Body("connectorLabel"), String),
        FieldSpec::new("MaxResult", Body("maxResults"), Integer).aliases(&["MaxResults"]),
        FieldSpec::new("NextToken", Body("nextToken"), String),
    ],
    confirm_targets: &[],
    default_select: "ConnectorProfileDetails",
    metadata_fields: &["nextToken"],
    summary: "Describes connector profiles, optionally filtered by name or type.",
};

pub static REMOVE_CONNECTOR_PROFILE: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Remove,
    noun: "ConnectorProfile",
    operation: "DeleteConnectorProfile",
    http: HttpBinding::new(HttpMethod::Post, "/delete-connector-profile"),
    fields: &[PROFILE_NAME, FORCE_DELETE],
    confirm_targets: &["ConnectorProfileName"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Deletes a connector profile.",
};

pub static REGISTER_CONNECTOR: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Register,
    noun: "Connector",
    operation: "RegisterConnector",
    http: HttpBinding::new(HttpMethod::Post, "/register-connector"),
    fields: &[
        FieldSpec::new("ConnectorLabel", Body("connectorLabel"), String).required(),
        FieldSpec::new("Description", Body("description"), String),
        FieldSpec::new(
            "ConnectorProvisioningType",
            Body("connectorProvisioningType"),
            String,
        )
        .default_value(FieldDefault::Literal("LAMBDA")),
        FieldSpec::new(
            "Lambda_LambdaArn",
            Body("connectorProvisioningConfig.lambda.lambdaArn"),
            String,
        )
        .required()
        .aliases(&["ConnectorProvisioningConfig_Lambda_LambdaArn", "LambdaArn"]),
        CLIENT_TOKEN,
    ],
    confirm_targets: &["ConnectorLabel"],
    default_select: "ConnectorArn",
    metadata_fields: &[],
    summary: "Registers a custom connector backed by a Lambda function.",
};

pub static UNREGISTER_CONNECTOR: OperationSpec = OperationSpec {
    service: Service::Appflow,
    verb: Verb::Unregister,
    noun: "Connector",
    operation: "UnregisterConnector",
    http: HttpBinding::new(HttpMethod::Post, "/unregister-connector"),
    fields: &[
        FieldSpec::new("ConnectorLabel", Body("connectorLabel"), String).required(),
        FORCE_DELETE,
    ],
    confirm_targets: &["ConnectorLabel"],
    default_select: "*",
    metadata_fields: &[],
    summary: "Unregisters a custom connector.",
};
