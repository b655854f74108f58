//! `ItineraryPlanner`, the default [`Planner`] implementation.

use driftwood_core::{
    DriveEstimator, Geography, Itinerary, PlanRequest, Planner, RatingSource, RegionId,
    TripParameters, Vetoes,
};

use crate::builder::Builder;
use crate::context::PlanContext;
use crate::{DistanceModel, PlannerPolicy, allocator, selector};

/// Heuristic itinerary planner over a shared, read-only geography.
///
/// The planner is generic over the drive estimator so tests can swap in
/// fixed leg lengths; [`DistanceModel`] is the default.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use driftwood_core::{ActivityKind, Geography, Ratings, TripParameters, Vetoes};
/// use driftwood_planner::ItineraryPlanner;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let geography = Geography::pacific_coast()?;
/// let planner = ItineraryPlanner::new(&geography);
/// let start = NaiveDate::from_ymd_opt(2025, 11, 3).ok_or("bad date")?;
/// let trip = TripParameters::new(start, 6, 25.0, 4.25)?;
/// let ratings = Ratings::new()
///     .with_rating("Trinity", 3.6)
///     .with_rating("Chetco", 4.2)
///     .with_rating("Elk", 3.9);
///
/// let itinerary = planner.plan_with(&trip, &ratings, &Vetoes::new());
/// assert!(itinerary.last_date() <= Some(trip.last_day()));
/// assert_eq!(itinerary.rows_of(ActivityKind::Start).count(), 1);
/// assert_eq!(itinerary.allocation.iter().map(|(_, days)| days).sum::<u32>(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryPlanner<'g, D = DistanceModel>
where
    D: DriveEstimator,
{
    geography: &'g Geography,
    estimator: D,
    policy: PlannerPolicy,
}

impl<'g> ItineraryPlanner<'g> {
    /// Construct a planner using the great-circle [`DistanceModel`].
    #[must_use]
    pub fn new(geography: &'g Geography) -> Self {
        Self::with_estimator(geography, DistanceModel::default())
    }
}

impl<'g, D> ItineraryPlanner<'g, D>
where
    D: DriveEstimator,
{
    /// Construct a planner with an explicit drive estimator.
    #[must_use]
    pub fn with_estimator(geography: &'g Geography, estimator: D) -> Self {
        Self {
            geography,
            estimator,
            policy: PlannerPolicy::default(),
        }
    }

    /// Replace the planning thresholds.
    #[must_use]
    pub fn with_policy(self, policy: PlannerPolicy) -> Self {
        Self { policy, ..self }
    }

    /// The planning thresholds in use.
    #[must_use]
    pub const fn policy(&self) -> &PlannerPolicy {
        &self.policy
    }

    /// The geography plans are built against.
    #[must_use]
    pub const fn geography(&self) -> &'g Geography {
        self.geography
    }

    fn context<'a>(&'a self, ratings: &'a dyn RatingSource, vetoes: &'a Vetoes) -> PlanContext<'a> {
        PlanContext {
            geography: self.geography,
            ratings,
            vetoes,
            policy: &self.policy,
        }
    }

    /// Eligible regions in visiting order, base camp first.
    ///
    /// The bonus stop is never part of the sequence; it is slotted in after
    /// the base camp while building.
    #[must_use]
    pub fn region_sequence(&self, ratings: &dyn RatingSource, vetoes: &Vetoes) -> Vec<RegionId> {
        selector::region_sequence(&self.context(ratings, vetoes))
    }

    /// Days per region for a trip of `total_days`, in visiting order.
    ///
    /// This is the diagnostic allocation the builder works from; the days
    /// sum to `total_days` whenever any region is eligible.
    #[must_use]
    pub fn allocation(
        &self,
        total_days: u32,
        ratings: &dyn RatingSource,
        vetoes: &Vetoes,
    ) -> Vec<(RegionId, u32)> {
        let ctx = self.context(ratings, vetoes);
        allocator::allocate(&ctx, &selector::region_sequence(&ctx), total_days)
    }

    /// Build a plan from any rating source.
    #[must_use]
    pub fn plan_with(
        &self,
        trip: &TripParameters,
        ratings: &dyn RatingSource,
        vetoes: &Vetoes,
    ) -> Itinerary {
        let ctx = self.context(ratings, vetoes);
        let sequence = selector::region_sequence(&ctx);
        let allocation = allocator::allocate(&ctx, &sequence, trip.total_days());
        Builder::new(&ctx, &self.estimator, trip).build(&allocation)
    }
}

impl<D> Planner for ItineraryPlanner<'_, D>
where
    D: DriveEstimator,
{
    fn plan(&self, request: &PlanRequest) -> Itinerary {
        self.plan_with(&request.trip, &request.ratings, &request.vetoes)
    }
}
