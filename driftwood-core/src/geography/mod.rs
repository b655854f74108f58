//! The immutable static table every planning call reads from.
//!
//! A [`Geography`] is loaded once from a [`GeographySpec`] (usually JSON) and
//! then shared by reference. Loading resolves every name to an index newtype,
//! so planning code never matches on strings.

mod error;
mod load;
mod spec;

use std::collections::HashMap;

pub use error::{EntryKind, GeographyError, SkipReason, Skipped};
pub use spec::{BonusSpec, EntryRuleSpec, GeographySpec, RegionSpec, RolesSpec, SiteSpec, WaypointSpec};

use crate::{Region, RegionId, Roles, Site, SiteId, Waypoint, WaypointId};

#[cfg(feature = "serde")]
const PACIFIC_COAST_JSON: &str = include_str!("../../data/pacific_coast.json");

/// Waypoints, regions, sites and planning roles, resolved and indexed.
///
/// Identifiers handed out by a geography are only meaningful for that
/// geography. The lookup methods panic when given an identifier issued by a
/// different, smaller geography.
///
/// # Examples
/// ```
/// use driftwood_core::Geography;
///
/// # fn main() -> Result<(), driftwood_core::GeographyError> {
/// let geography = Geography::pacific_coast()?;
/// let norcal = geography.region_by_name("NorCal");
/// assert!(norcal.is_some_and(|region| !region.is_manual()));
/// assert!(geography.skipped().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Geography {
    pub(crate) home: WaypointId,
    pub(crate) waypoints: Vec<Waypoint>,
    pub(crate) regions: Vec<Region>,
    pub(crate) sites: Vec<Site>,
    pub(crate) roles: Roles,
    pub(crate) skipped: Vec<Skipped>,
    pub(crate) waypoint_index: HashMap<String, WaypointId>,
    pub(crate) region_index: HashMap<String, RegionId>,
    pub(crate) site_index: HashMap<String, SiteId>,
}

impl Geography {
    /// Resolve a declarative spec.
    ///
    /// # Errors
    /// Returns [`GeographyError::UnknownHome`] when the home waypoint is not
    /// usable and [`GeographyError::DuplicateName`] when a name repeats.
    /// Other defects are tolerated and reported by [`Geography::skipped`].
    pub fn from_spec(spec: &GeographySpec) -> Result<Self, GeographyError> {
        load::load(spec)
    }

    /// Parse and resolve a JSON geography document.
    ///
    /// # Errors
    /// Returns [`GeographyError::Json`] for unparsable input, plus every
    /// error of [`Geography::from_spec`].
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, GeographyError> {
        let spec: GeographySpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    /// The bundled Pacific-coast table: Northern California through the
    /// Olympic Peninsula, based at Redding.
    ///
    /// # Errors
    /// Only fails if the bundled document is corrupt.
    #[cfg(feature = "serde")]
    pub fn pacific_coast() -> Result<Self, GeographyError> {
        Self::from_json_str(PACIFIC_COAST_JSON)
    }

    /// The waypoint the trip starts and ends at.
    #[must_use]
    pub const fn home(&self) -> WaypointId {
        self.home
    }

    /// Look up a waypoint by identifier.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different geography.
    #[must_use]
    pub fn waypoint(&self, id: WaypointId) -> &Waypoint {
        &self.waypoints[id.0]
    }

    /// Look up a region by identifier.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different geography.
    #[must_use]
    pub fn region(&self, id: RegionId) -> &Region {
        &self.regions[id.0]
    }

    /// Look up a site by identifier.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different geography.
    #[must_use]
    pub fn site(&self, id: SiteId) -> &Site {
        &self.sites[id.0]
    }

    /// Every usable waypoint.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Every usable region.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Every usable site.
    #[must_use]
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Planning role assignments.
    #[must_use]
    pub const fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Entries dropped while loading.
    #[must_use]
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Resolve a waypoint name.
    #[must_use]
    pub fn waypoint_id(&self, name: &str) -> Option<WaypointId> {
        self.waypoint_index.get(name).copied()
    }

    /// Resolve a region name.
    #[must_use]
    pub fn region_id(&self, name: &str) -> Option<RegionId> {
        self.region_index.get(name).copied()
    }

    /// Resolve a site name.
    #[must_use]
    pub fn site_id(&self, name: &str) -> Option<SiteId> {
        self.site_index.get(name).copied()
    }

    /// Look up a waypoint by name.
    #[must_use]
    pub fn waypoint_by_name(&self, name: &str) -> Option<&Waypoint> {
        self.waypoint_id(name).map(|id| self.waypoint(id))
    }

    /// Look up a region by name.
    #[must_use]
    pub fn region_by_name(&self, name: &str) -> Option<&Region> {
        self.region_id(name).map(|id| self.region(id))
    }

    /// Look up a site by name.
    #[must_use]
    pub fn site_by_name(&self, name: &str) -> Option<&Site> {
        self.site_id(name).map(|id| self.site(id))
    }

    /// Member sites of `region` in directional order.
    pub fn region_sites(&self, region: RegionId) -> impl Iterator<Item = &Site> + '_ {
        self.region(region).sites().iter().map(|&id| self.site(id))
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn preset() -> Geography {
        Geography::pacific_coast().expect("bundled geography loads")
    }

    #[rstest]
    fn preset_loads_cleanly(preset: Geography) {
        assert!(preset.skipped().is_empty(), "{:?}", preset.skipped());
        assert_eq!(preset.regions().len(), 8);
        assert_eq!(preset.sites().len(), 57);
        assert_eq!(preset.waypoint(preset.home()).name(), "Redding");
    }

    #[rstest]
    fn preset_roles_are_resolved(preset: Geography) {
        let roles = preset.roles();
        let name = |id: RegionId| preset.region(id).name().to_owned();
        assert_eq!(roles.base_camp().map(name), Some("Trinity".to_owned()));
        assert_eq!(
            roles.bonus().map(|bonus| name(bonus.region())),
            Some("Klamath".to_owned())
        );
        assert_eq!(
            roles.long_commitment().map(name),
            Some("Olympic Peninsula".to_owned())
        );
        assert_eq!(roles.open_coastal().len(), 5);
        assert_eq!(roles.priority().len(), 8);
    }

    #[rstest]
    fn manual_regions_have_no_sites(preset: Geography) {
        let trinity = preset.region_by_name("Trinity").expect("base camp");
        assert!(trinity.is_manual());
        assert!(trinity.sites().is_empty());
        assert_eq!(trinity.priority(), Some(0));
    }

    #[rstest]
    fn olympic_order_is_explicit(preset: Geography) {
        let op = preset.region_id("Olympic Peninsula").expect("region");
        let first = preset.region_sites(op).next().expect("has sites");
        assert_eq!(first.name(), "Quinault");
    }

    #[rstest]
    fn targets_parse_both_units(preset: Geography) {
        let elk = preset.site_by_name("Elk").expect("site");
        assert!(elk.target().contains(4.0));
        let chetco = preset.site_by_name("Chetco").expect("site");
        assert!(chetco.target().contains(2000.0));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = Geography::from_json_str("{").expect_err("invalid JSON");
        assert!(matches!(err, GeographyError::Json(_)));
    }
}
