//! Core domain types for the Driftwood trip planner.
//!
//! The static geography (waypoints, regions and sites) is loaded once and
//! shared read-only. Per-call inputs are the trip parameters, ratings and
//! vetoes; the output is an [`Itinerary`]. Constructors return `Result` to
//! surface invalid input early, while planning itself never fails.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geography;
pub mod itinerary;
pub mod planner;
pub mod rating;
pub mod region;
pub mod site;
pub mod trip;
pub mod veto;
pub mod waypoint;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use geography::{EntryKind, Geography, GeographyError, GeographySpec, SkipReason, Skipped};
pub use itinerary::{Activity, ActivityKind, Itinerary, ItineraryRow, ReturnLeg, VisitKind};
pub use planner::{DriveEstimator, Leg, PlanRequest, Planner};
pub use rating::{MAX_RATING, RatingSource, Ratings};
pub use region::{BonusStop, EntryRule, Heading, Region, RegionId, Roles};
pub use site::{Basin, Site, SiteId, TargetRange, TargetRangeError};
pub use trip::{TripParameters, TripParametersError};
pub use veto::Vetoes;
pub use waypoint::{Waypoint, WaypointId};
