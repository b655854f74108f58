//! Road distance, drive time and fuel cost estimates.

use driftwood_core::{DriveEstimator, Geography, Leg, TripParameters, Waypoint};
use geo::{Distance, Haversine, Point};
use log::warn;

const METRES_PER_MILE: f64 = 1_609.344;

/// Great-circle distance scaled by a road-curvature factor, driven at a fixed
/// average speed.
///
/// # Examples
/// ```rust
/// use driftwood_core::{DriveEstimator, Geography};
/// use driftwood_planner::DistanceModel;
///
/// # fn main() -> Result<(), driftwood_core::GeographyError> {
/// let geography = Geography::pacific_coast()?;
/// let model = DistanceModel::default();
/// let leg = model.between(&geography, "Redding", "Eureka");
/// assert!(leg.miles > 100.0);
/// assert_eq!(model.between(&geography, "Eureka", "Eureka").miles, 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceModel {
    /// Multiplier from great-circle to road miles.
    pub road_factor: f64,
    /// Average driving speed in miles per hour.
    pub average_mph: f64,
}

impl Default for DistanceModel {
    fn default() -> Self {
        Self {
            road_factor: 1.25,
            average_mph: 55.0,
        }
    }
}

impl DistanceModel {
    /// Leg between two waypoints given by name.
    ///
    /// Unknown names yield [`Leg::ZERO`] rather than an error.
    #[must_use]
    pub fn between(&self, geography: &Geography, from: &str, to: &str) -> Leg {
        match (geography.waypoint_by_name(from), geography.waypoint_by_name(to)) {
            (Some(origin), Some(destination)) => self.leg(origin, destination),
            _ => {
                warn!("Unknown waypoint in leg {from} -> {to}; assuming zero distance");
                Leg::ZERO
            }
        }
    }
}

impl DriveEstimator for DistanceModel {
    #[expect(
        clippy::float_arithmetic,
        reason = "distance estimates scale great-circle metres into road miles and hours"
    )]
    fn leg(&self, from: &Waypoint, to: &Waypoint) -> Leg {
        if from.id() == to.id() {
            return Leg::ZERO;
        }
        let metres = Haversine.distance(Point::from(from.location()), Point::from(to.location()));
        let miles = metres / METRES_PER_MILE * self.road_factor;
        let hours = if self.average_mph > 0.0 {
            miles / self.average_mph
        } else {
            0.0
        };
        Leg { miles, hours }
    }
}

/// Fuel cost of driving `leg` after filling up at `origin`.
///
/// Uses the origin's local price when the geography records one, otherwise
/// the trip's default price.
#[expect(
    clippy::float_arithmetic,
    reason = "fuel cost is gallons burned times price per gallon"
)]
#[must_use]
pub fn fuel_cost(leg: Leg, origin: &Waypoint, trip: &TripParameters) -> f64 {
    let price = origin.fuel_price().unwrap_or_else(|| trip.fuel_price());
    leg.miles / trip.mpg() * price
}
