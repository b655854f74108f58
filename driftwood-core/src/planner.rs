//! Seams between the domain model and itinerary engines.

use crate::{Itinerary, Ratings, TripParameters, Vetoes, Waypoint};

/// Everything a planner needs for one planning call besides the geography.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use driftwood_core::{PlanRequest, Ratings, TripParameters, Vetoes};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = NaiveDate::from_ymd_opt(2025, 10, 1).ok_or("bad date")?;
/// let request = PlanRequest {
///     trip: TripParameters::new(start, 5, 25.0, 4.0)?,
///     ratings: Ratings::new().with_rating("Chetco", 4.0),
///     vetoes: Vetoes::new(),
/// };
/// assert_eq!(request.trip.total_days(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Trip window and fuel economics.
    pub trip: TripParameters,
    /// Site and manual-region ratings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ratings: Ratings,
    /// Excluded regions and sites.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vetoes: Vetoes,
}

/// Build a day-by-day itinerary for a request.
///
/// Planning is infallible: infeasible inputs degrade to a minimal plan rather
/// than an error. Planners must be `Send + Sync` so what-if scenarios can be
/// planned in parallel against one shared geography.
pub trait Planner: Send + Sync {
    /// Plan a trip.
    fn plan(&self, request: &PlanRequest) -> Itinerary;
}

/// Road distance and drive time of a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Leg {
    /// Road miles.
    pub miles: f64,
    /// Hours behind the wheel.
    pub hours: f64,
}

impl Leg {
    /// A leg that goes nowhere.
    pub const ZERO: Self = Self {
        miles: 0.0,
        hours: 0.0,
    };

    /// Half of this leg, used for split returns.
    #[must_use]
    pub fn halved(self) -> Self {
        Self {
            miles: self.miles / 2.0,
            hours: self.hours / 2.0,
        }
    }
}

/// Estimate the drive between two waypoints.
///
/// Estimates must be deterministic and never fail; identical waypoints yield
/// [`Leg::ZERO`].
pub trait DriveEstimator: Send + Sync {
    /// Leg from `from` to `to`.
    fn leg(&self, from: &Waypoint, to: &Waypoint) -> Leg;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedLegEstimator;
    use crate::Geography;
    use rstest::rstest;

    #[rstest]
    fn halved_leg_splits_both_measures() {
        let leg = Leg {
            miles: 500.0,
            hours: 9.0,
        }
        .halved();
        assert!((leg.miles - 250.0).abs() < 1e-9);
        assert!((leg.hours - 4.5).abs() < 1e-9);
    }

    #[rstest]
    fn fixed_estimator_is_zero_for_same_waypoint() {
        let geography = Geography::pacific_coast().expect("preset loads");
        let home = geography.waypoint(geography.home());
        let estimator = FixedLegEstimator::new(Leg {
            miles: 100.0,
            hours: 2.0,
        });
        assert_eq!(estimator.leg(home, home), Leg::ZERO);
    }
}
