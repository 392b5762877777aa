//! Main CLI parser and top-level argument handling.
//!
//! The derive-based [`Cli`] carries the global options and built-in
//! subcommands; [`build_command`] augments it with one subcommand per
//! catalog operation at runtime.

use std::ffi::OsString;

use clap::{ArgMatches, Command, CommandFactory, FromArgMatches, Parser};

use crate::cmdlets::{self, CmdletInvocation};
use crate::commands::Commands;

/// Command-line interface for the Appflow and MediaConnect cmdlets.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser, Debug)]
#[command(name = "flowctl")]
#[command(about = "Manage Amazon Appflow and AWS Elemental MediaConnect resources")]
#[command(version)]
#[command(after_help = "Run 'flowctl list' to see every cmdlet, and 'flowctl <Cmdlet> --help' for its parameters.")]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// What the command line asked for.
#[derive(Debug, Clone)]
pub enum Invocation {
    /// A built-in subcommand, or none at all.
    Builtin(Option<Commands>),
    /// A catalog cmdlet.
    Cmdlet(CmdletInvocation),
}

/// A parsed command line.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub verbose: bool,
    pub invocation: Invocation,
}

/// The full command tree: built-ins plus every catalog cmdlet.
pub fn build_command() -> Command {
    flowctl_catalog::all_operations().fold(Cli::command(), |command, operation| {
        command.subcommand(cmdlets::command_for(operation))
    })
}

/// Parse `args` (including the program name).
///
/// # Errors
///
/// Returns the clap error for usage problems and for `--help`/`--version`,
/// which the caller reports with [`clap::Error::exit`].
pub fn parse_invocation<I, T>(args: I) -> Result<Parsed, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    from_matches(&matches)
}

fn from_matches(matches: &ArgMatches) -> Result<Parsed, clap::Error> {
    if let Some((name, sub)) = matches.subcommand() {
        if let Some(operation) = flowctl_catalog::find(name) {
            return Ok(Parsed {
                verbose: matches.get_flag("verbose"),
                invocation: Invocation::Cmdlet(cmdlets::invocation(operation, sub)),
            });
        }
    }

    let cli = Cli::from_arg_matches(matches)?;
    Ok(Parsed {
        verbose: cli.verbose,
        invocation: Invocation::Builtin(cli.command),
    })
}
