//! Plan command implementation for the Driftwood CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use driftwood_core::{Geography, Itinerary, ItineraryRow, PlanRequest, Planner};
use driftwood_planner::ItineraryPlanner;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_GEOGRAPHY, ARG_PLAN_OUTPUT, ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST, fs,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build a day-by-day fishing itinerary from a JSON plan \
                 request holding the trip window, site ratings and vetoes. \
                 Plans against the bundled Pacific coast geography unless \
                 another geography file is given.",
    about = "Plan a fishing trip itinerary"
)]
#[ortho_config(prefix = "DRIFTWOOD")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a `PlanRequest`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON geography file replacing the bundled preset.
    #[arg(long = ARG_PLAN_GEOGRAPHY, value_name = "path")]
    #[serde(default)]
    pub(crate) geography: Option<Utf8PathBuf>,
    /// Write the itinerary to this file instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    #[serde(default)]
    pub(crate) pretty: bool,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Geography file; `None` selects the bundled preset.
    pub(crate) geography: Option<Utf8PathBuf>,
    /// Output file; `None` writes to stdout.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Whether to pretty-print the JSON.
    pub(crate) pretty: bool,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        if let Some(path) = &self.geography {
            Self::require_existing(path, ARG_PLAN_GEOGRAPHY)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            geography: args.geography,
            output: args.output,
            pretty: args.pretty,
        })
    }
}

/// A row as written by the CLI: the itinerary row plus its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LabelledRow {
    /// Display label such as `FISH: Chetco`.
    pub(crate) label: String,
    #[serde(flatten)]
    pub(crate) row: ItineraryRow,
}

/// JSON document written by the `plan` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanOutput {
    pub(crate) rows: Vec<LabelledRow>,
    pub(crate) allocation: Vec<(String, u32)>,
    pub(crate) total_miles: f64,
    pub(crate) total_cost: f64,
    /// Geography entries dropped while loading, for display.
    pub(crate) skipped: Vec<String>,
}

impl PlanOutput {
    fn new(itinerary: Itinerary, geography: &Geography) -> Self {
        let total_miles = itinerary.total_miles();
        let total_cost = itinerary.total_cost();
        let rows = itinerary
            .rows
            .into_iter()
            .map(|row| LabelledRow {
                label: row.label(),
                row,
            })
            .collect();
        Self {
            rows,
            allocation: itinerary.allocation,
            total_miles,
            total_cost,
            skipped: geography
                .skipped()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

/// Run the command, writing to `stdout` unless an output file is configured.
pub(super) fn run_plan_with(args: PlanArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let output = execute_plan(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_plan_output(&mut file, &output, config.pretty)?;
            info!("wrote itinerary to {path}");
            Ok(())
        }
        None => write_plan_output(stdout, &output, config.pretty),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(config: &PlanConfig) -> Result<PlanOutput, CliError> {
    let request = load_plan_request(&config.request_path)?;
    let geography = load_geography(config.geography.as_deref())?;
    let planner = ItineraryPlanner::new(&geography);
    let itinerary = planner.plan(&request);
    info!(
        "planned {} rows across {} regions for a {}-day trip",
        itinerary.rows.len(),
        itinerary.allocation.len(),
        request.trip.total_days()
    );
    Ok(PlanOutput::new(itinerary, &geography))
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let json = fs::read_utf8_file(path).map_err(|source| CliError::ReadPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the geography at `path`, or the bundled preset when absent.
pub(super) fn load_geography(path: Option<&Utf8Path>) -> Result<Geography, CliError> {
    let Some(geography_path) = path else {
        debug!("planning against the bundled Pacific coast geography");
        return Geography::pacific_coast().map_err(CliError::BundledGeography);
    };
    debug!("loading geography from {geography_path}");
    let json = fs::read_utf8_file(geography_path).map_err(|source| CliError::ReadGeography {
        path: geography_path.to_path_buf(),
        source,
    })?;
    Geography::from_json_str(&json).map_err(|source| CliError::LoadGeography {
        path: geography_path.to_path_buf(),
        source,
    })
}

fn write_plan_output(
    writer: &mut dyn Write,
    output: &PlanOutput,
    pretty: bool,
) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    }
    .map_err(CliError::SerializeItinerary)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteItinerary)?;
    writer.write_all(b"\n").map_err(CliError::WriteItinerary)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
