//! Named drive destinations.
//!
//! A [`Waypoint`] is anywhere the traveller can drive to: the home base or a
//! hub that represents "arrived in this region". Coordinates are WGS84 with
//! `x = longitude` and `y = latitude`.

use geo::Coord;

use crate::RegionId;

/// Index of a [`Waypoint`] inside a loaded [`Geography`](crate::Geography).
///
/// Identifiers are only issued by the geography that owns the waypoint, so a
/// lookup with an id from the same geography always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaypointId(pub(crate) usize);

impl WaypointId {
    /// Position of the waypoint in its geography's table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A location the traveller can drive to.
///
/// # Examples
/// ```
/// use driftwood_core::Geography;
///
/// # fn main() -> Result<(), driftwood_core::GeographyError> {
/// let geography = Geography::pacific_coast()?;
/// let home = geography.waypoint(geography.home());
/// assert_eq!(home.name(), "Redding");
/// assert!(home.region().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub(crate) id: WaypointId,
    pub(crate) name: String,
    pub(crate) location: Coord<f64>,
    pub(crate) fuel_price: Option<f64>,
    pub(crate) region: Option<RegionId>,
}

impl Waypoint {
    /// Identifier within the owning geography.
    #[must_use]
    pub const fn id(&self) -> WaypointId {
        self.id
    }

    /// Display name, also used as the itinerary row location.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Local fuel price, when the geography records one.
    #[must_use]
    pub const fn fuel_price(&self) -> Option<f64> {
        self.fuel_price
    }

    /// Region this waypoint is a hub of. `None` for the home base.
    #[must_use]
    pub const fn region(&self) -> Option<RegionId> {
        self.region
    }
}
