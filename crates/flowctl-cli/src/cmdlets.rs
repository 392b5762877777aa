//! Clap subcommands generated from the operation catalog.
//!
//! Each catalog operation becomes one subcommand named after its cmdlet
//! (`New-AFFlow`, `Get-EMCNFlowList`, ...). Parameter flags keep the
//! PascalCase names and aliases of the operation's fields; values reach the
//! pipeline as raw text so typing and presence rules live in one place.

use clap::{Arg, ArgAction, ArgMatches, Command};
use flowctl_core::{
    ClientSettings, FieldKind, FieldSpec, OperationSpec, PipelineOptions, StaticCredentials,
    SuppliedParams,
};

/// Environment variable backing `--EndpointUrl`.
pub const ENDPOINT_URL_ENV: &str = "FLOWCTL_ENDPOINT_URL";

/// Flags every cmdlet accepts next to its own parameters.
pub const COMMON_PARAMETERS: &[&str] = &[
    "Force",
    "Select",
    "DryRun",
    "Region",
    "ProfileName",
    "EndpointUrl",
    "AccessKey",
    "SecretKey",
    "SessionToken",
];

/// A cmdlet invocation parsed from the command line.
#[derive(Debug, Clone)]
pub struct CmdletInvocation {
    pub operation: &'static OperationSpec,
    pub params: SuppliedParams,
    pub options: PipelineOptions,
}

/// Build the subcommand for one operation.
pub fn command_for(operation: &'static OperationSpec) -> Command {
    let name = operation.cmdlet_name();
    let lowercase = name.to_ascii_lowercase();

    let command = Command::new(name)
        .alias(lowercase)
        .about(operation.summary)
        .long_about(format!(
            "{}\n\nCalls the {} operation of {}.",
            operation.summary,
            operation.operation,
            operation.service.title()
        ))
        .next_help_heading("Parameters")
        .args(operation.fields.iter().map(field_arg));

    command
        .next_help_heading("Common parameters")
        .args(common_args())
}

fn field_arg(field: &'static FieldSpec) -> Arg {
    let arg = Arg::new(field.name)
        .long(field.name)
        .visible_aliases(field.aliases.iter().copied())
        .value_name(field.kind.value_hint())
        .help(field_help(field));

    match field.kind {
        FieldKind::Boolean => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .default_missing_value("true"),
        FieldKind::Integer | FieldKind::Double => {
            arg.action(ArgAction::Set).allow_negative_numbers(true)
        }
        kind if kind.is_multi_valued() => arg.action(ArgAction::Append).num_args(1..),
        _ => arg.action(ArgAction::Set),
    }
}

fn field_help(field: &FieldSpec) -> String {
    match (field.required, field.help.is_empty()) {
        (true, true) => "[required]".to_string(),
        (true, false) => format!("[required] {}", field.help),
        (false, _) => field.help.to_string(),
    }
}

fn common_args() -> [Arg; 9] {
    [
        Arg::new("Force")
            .long("Force")
            .action(ArgAction::SetTrue)
            .help("Do not ask for confirmation before changing remote state"),
        Arg::new("Select")
            .long("Select")
            .value_name("SELECTOR")
            .help("What to output: '*' for the whole response, a response field name, or ^Parameter"),
        Arg::new("DryRun")
            .long("DryRun")
            .action(ArgAction::SetTrue)
            .help("Print the request that would be sent and exit without calling the service"),
        Arg::new("Region")
            .long("Region")
            .value_name("REGION")
            .help("AWS region (defaults to AWS_REGION or the shared config)"),
        Arg::new("ProfileName")
            .long("ProfileName")
            .value_name("PROFILE")
            .help("Shared config profile (defaults to AWS_PROFILE)"),
        Arg::new("EndpointUrl")
            .long("EndpointUrl")
            .value_name("URL")
            .env(ENDPOINT_URL_ENV)
            .help("Send requests to this endpoint instead of the regional one"),
        Arg::new("AccessKey")
            .long("AccessKey")
            .value_name("KEY_ID")
            .requires("SecretKey")
            .help("Access key id; overrides the credential chain"),
        Arg::new("SecretKey")
            .long("SecretKey")
            .value_name("SECRET")
            .requires("AccessKey")
            .help("Secret access key paired with --AccessKey"),
        Arg::new("SessionToken")
            .long("SessionToken")
            .value_name("TOKEN")
            .requires("AccessKey")
            .help("Session token for temporary credentials"),
    ]
}

/// Collect the parameters the user actually typed, under canonical names.
///
/// clap resolves aliases to the field's id, so `--S3_BucketName` lands on
/// the same entry as its canonical flag.
pub fn supplied_params(operation: &OperationSpec, matches: &ArgMatches) -> SuppliedParams {
    let mut supplied = SuppliedParams::new();
    for field in operation.fields {
        if let Some(values) = matches.get_many::<String>(field.name) {
            supplied.push(field.name, values.cloned());
        }
    }
    supplied
}

/// Read the common flags into pipeline options.
pub fn pipeline_options(matches: &ArgMatches) -> PipelineOptions {
    let text = |id: &str| matches.get_one::<String>(id).cloned();

    let credentials = match (text("AccessKey"), text("SecretKey")) {
        (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
            access_key_id,
            secret_access_key,
            session_token: text("SessionToken"),
        }),
        _ => None,
    };

    PipelineOptions {
        force: matches.get_flag("Force"),
        dry_run: matches.get_flag("DryRun"),
        select: text("Select"),
        settings: ClientSettings {
            region: text("Region"),
            profile: text("ProfileName"),
            endpoint_url: text("EndpointUrl"),
            credentials,
        },
    }
}

/// Turn a cmdlet's sub-matches into an invocation.
pub fn invocation(operation: &'static OperationSpec, matches: &ArgMatches) -> CmdletInvocation {
    CmdletInvocation {
        operation,
        params: supplied_params(operation, matches),
        options: pipeline_options(matches),
    }
}
