//! Error types emitted by the Driftwood CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use driftwood_core::GeographyError;
use thiserror::Error;

/// Errors emitted by the Driftwood CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name the path was given under.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name the path was given under.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name the path was given under.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening or reading the plan request failed.
    #[error("failed to read plan request at {path:?}: {source}")]
    ReadPlanRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Plan request JSON could not be decoded or failed validation.
    #[error("failed to parse plan request JSON at {path:?}: {source}")]
    ParsePlanRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Decoding failure, including trip parameter validation.
        #[source]
        source: serde_json::Error,
    },
    /// Opening or reading a geography file failed.
    #[error("failed to read geography at {path:?}: {source}")]
    ReadGeography {
        /// Geography file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A geography file could not be loaded.
    #[error("failed to load geography from {path:?}: {source}")]
    LoadGeography {
        /// Geography file path.
        path: Utf8PathBuf,
        /// Fatal load failure.
        #[source]
        source: GeographyError,
    },
    /// The bundled Pacific coast geography failed to load.
    #[error("failed to load the bundled geography: {0}")]
    BundledGeography(#[source] GeographyError),
    /// Serializing the itinerary failed.
    #[error("failed to serialize itinerary: {0}")]
    SerializeItinerary(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Output file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the itinerary failed.
    #[error("failed to write itinerary: {0}")]
    WriteItinerary(#[source] std::io::Error),
}
