//! Declarative description of a geography, as read from JSON.
//!
//! Every cross-reference is by name. [`Geography::from_spec`] resolves the
//! names into identifiers once.
//!
//! [`Geography::from_spec`]: crate::Geography::from_spec

use crate::{Basin, Heading};

/// The whole static table: waypoints, regions, sites and roles.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographySpec {
    /// Name of the waypoint the trip starts and ends at.
    pub home: String,
    /// Every drive destination, including home and hubs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Vec<WaypointSpec>,
    /// Region definitions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regions: Vec<RegionSpec>,
    /// Site definitions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sites: Vec<SiteSpec>,
    /// Planning roles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: RolesSpec,
}

/// A waypoint entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointSpec {
    /// Unique waypoint name.
    pub name: String,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
    /// Local fuel price per gallon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fuel_price: Option<f64>,
}

/// A region entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionSpec {
    /// Unique region name.
    pub name: String,
    /// Rated as a whole rather than through member sites.
    #[cfg_attr(feature = "serde", serde(default))]
    pub manual: bool,
    /// Hub waypoint names, primary first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hubs: Vec<String>,
    /// Explicit directional order of member site names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: Vec<String>,
    /// Entry-hub rules, checked in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub entry_rules: Vec<EntryRuleSpec>,
}

/// An entry-hub rule.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryRuleSpec {
    /// Site names that trigger the rule when best-rated.
    pub when_best_in: Vec<String>,
    /// Hub waypoint name to enter at.
    pub hub: String,
}

/// A site entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteSpec {
    /// Unique site name.
    pub name: String,
    /// Owning region name.
    pub region: String,
    /// In-condition range, e.g. `"1500-7500 cfs"`.
    pub target: String,
    /// Reading below which the site is unusable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hard_minimum: Option<f64>,
    /// Basin behaviour category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub basin: Basin,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
    /// Hub waypoint name; defaults to the region's primary hub.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hub: Option<String>,
}

/// Role assignments by region name.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RolesSpec {
    /// Base-camp region.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_camp: Option<String>,
    /// Bonus-stop region and heading.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: Option<BonusSpec>,
    /// Long-commitment region.
    #[cfg_attr(feature = "serde", serde(default))]
    pub long_commitment: Option<String>,
    /// Regions consulted by the collapse rule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub open_coastal: Vec<String>,
    /// Geographic priority order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: Vec<String>,
}

/// Bonus-stop role assignment.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusSpec {
    /// Bonus region name.
    pub region: String,
    /// Direction the next region must lie in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heading: Heading,
}
