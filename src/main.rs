mod cli;
mod commands;
mod error;
mod logging;
mod report;
mod shared;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use cli::{Cli, Commands};
use error::{PrHelpError, Result};
use shared::command::{CommandRunner, RealCommandRunner};
use shared::config::{Config, load_config};
use shared::env_var::EnvVars;

fn main() -> ExitCode {
    let env = EnvVars::load();
    logging::init(&env);

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run_cli(std::env::args_os(), &env, &mut stdout, &mut stderr)
}

/// Parse `args`, run the command and map the outcome to an exit status.
fn run_cli<I, T>(args: I, env: &EnvVars, out: &mut impl Write, err: &mut impl Write) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Cli { command } = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(clap_err) => return handle_clap_error(&clap_err, out, err),
    };

    let config = match command_config(&command, env) {
        Ok(config) => config,
        Err(e) => return report_failure(&e, out, err),
    };
    let runner = RealCommandRunner::new(config.gh.command.as_str());

    execute(&command, &runner, &config, out, err)
}

fn handle_clap_error(
    clap_err: &clap::Error,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    match clap_err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{clap_err}");
            ExitCode::SUCCESS
        }
        _ => {
            let _ = write!(err, "{clap_err}");
            ExitCode::FAILURE
        }
    }
}

/// The config file is only read by commands that use a value from it.
fn command_config(command: &Commands, env: &EnvVars) -> Result<Config> {
    let config = if command.reads_config() {
        load_config().map_err(|e| PrHelpError::Config(format!("{e:#}")))?
    } else {
        Config::default()
    };
    Ok(config.with_env(env))
}

fn execute(
    command: &Commands,
    runner: &impl CommandRunner,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    match command.run(runner, config, out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, out, err),
    }
}

fn report_failure(
    failure: &PrHelpError,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    debug!(error = %failure, "command failed");

    if let Err(write_err) = report::write_error(out, failure) {
        let _ = writeln!(err, "Error: {failure} ({write_err})");
    }

    if failure.is_usage_error() {
        let _ = write!(err, "Error: {failure}\n\n{}", commands::comments::USAGE);
    }

    ExitCode::FAILURE
}
