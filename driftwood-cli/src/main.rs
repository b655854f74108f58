//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use driftwood_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match driftwood_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("driftwood: {err}");
            ExitCode::FAILURE
        }
    }
}
