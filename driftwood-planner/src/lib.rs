//! Itinerary decision engine for Driftwood.
//!
//! This crate provides [`ItineraryPlanner`], the default implementation of
//! the [`Planner`](driftwood_core::Planner) trait. A planning call runs a
//! fixed pipeline over one immutable [`Geography`](driftwood_core::Geography):
//!
//! 1. select the eligible regions and their visiting order,
//! 2. split the trip's days across them with the tiered allocation model,
//! 3. order each region's fishable sites into a directional walk,
//! 4. build the day-by-day rows, filling leftover days and returning home.
//!
//! Planning never fails. Infeasible inputs degrade to a minimal plan and
//! anomalies are absorbed with a `log` record.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;
mod builder;
mod context;
mod distance;
mod filler;
mod planner;
mod policy;
mod selector;
mod sequencer;

pub use distance::{DistanceModel, fuel_cost};
pub use planner::ItineraryPlanner;
pub use policy::PlannerPolicy;
pub use sequencer::{Rated, directional_order, threshold_filter, threshold_for};
