//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! command pipeline.

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use flowctl_cli::error::exit_code_for;
use flowctl_cli::{CliConfig, Commands, Invocation, bootstrap, build_command, handlers, parse_invocation};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads FLOWCTL_ENDPOINT_URL and friends
    dotenvy::dotenv().ok();

    let parsed = match parse_invocation(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(err) => err.exit(),
    };

    init_tracing(parsed.verbose);

    match run(parsed.invocation).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Logs go to stderr; stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

async fn run(invocation: Invocation) -> anyhow::Result<()> {
    match invocation {
        Invocation::Builtin(Some(Commands::List { service })) => handlers::list::execute(service),
        Invocation::Builtin(None) => {
            build_command().print_help()?;
            Ok(())
        }
        Invocation::Cmdlet(cmdlet) => {
            let mut ctx = bootstrap(CliConfig::with_defaults()?)?;

            // First Ctrl-C cancels the in-flight call; a second one (e.g. while
            // a confirmation prompt is blocking) exits immediately.
            let cancel = ctx.cancel_token().clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
                if tokio::signal::ctrl_c().await.is_ok() {
                    std::process::exit(130);
                }
            });

            handlers::invoke::execute(&mut ctx, &cmdlet).await
        }
    }
}
