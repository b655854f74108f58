//! Facade crate for the Driftwood fishing-trip planner.
//!
//! This crate re-exports the core domain types and exposes the default
//! itinerary planner behind the `planner` feature.

#![forbid(unsafe_code)]

pub use driftwood_core::{
    Activity, ActivityKind, DriveEstimator, Geography, GeographyError, GeographySpec, Itinerary,
    ItineraryRow, Leg, PlanRequest, Planner, RatingSource, Ratings, ReturnLeg, TripParameters,
    TripParametersError, Vetoes, VisitKind,
};

#[cfg(feature = "planner")]
pub use driftwood_planner::{DistanceModel, ItineraryPlanner, PlannerPolicy};
