//! Command-line interface for the Driftwood trip planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::PlanArgs;

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_GEOGRAPHY: &str = "geography";
const ARG_PLAN_OUTPUT: &str = "output";
const ENV_PLAN_REQUEST: &str = "DRIFTWOOD_CMDS_PLAN_REQUEST_PATH";

/// Run the Driftwood CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, an
/// input file cannot be read or decoded, or the itinerary cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "driftwood",
    about = "Plan multi-day fishing trips along the Pacific coast",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a day-by-day itinerary from a plan request.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
