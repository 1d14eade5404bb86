//! Identity generator CLI.
//!
//! This binary delegates to `identity_forge::forge_cli` for configuration
//! and generation, keeping the behaviour testable without spawning a
//! process. Logs go to stderr so stdout carries only the generated records.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use identity_forge::forge_cli::{CliError, execute, load_settings};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let settings = load_settings(env::args_os())?;
    let mut stdout = io::stdout().lock();
    execute(&settings, &mut stdout)?;
    stdout.flush().map_err(|err| CliError::Write {
        message: err.to_string(),
    })
}
