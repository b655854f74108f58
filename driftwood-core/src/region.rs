//! Regions, hub selection rules and the special planning roles.

use crate::{SiteId, WaypointId};

/// Index of a [`Region`] inside a loaded [`Geography`](crate::Geography).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegionId(pub(crate) usize);

impl RegionId {
    /// Position of the region in its geography's table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Travel direction along the coast's geographic priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heading {
    /// Towards later entries of the priority order.
    #[default]
    North,
    /// Towards earlier entries of the priority order.
    South,
}

/// Entry-hub rule: when the region's best site is one of `sites`, enter the
/// region at `hub`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRule {
    pub(crate) sites: Vec<SiteId>,
    pub(crate) hub: WaypointId,
}

impl EntryRule {
    /// Whether the rule applies when `best` is the highest-rated site.
    #[must_use]
    pub fn matches(&self, best: SiteId) -> bool {
        self.sites.contains(&best)
    }

    /// Hub selected by this rule.
    #[must_use]
    pub const fn hub(&self) -> WaypointId {
        self.hub
    }
}

/// A geographic cluster of sites sharing hubs and a directional order.
///
/// Manual regions have no member sites; the rating source rates the region
/// as a whole under its own name.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub(crate) id: RegionId,
    pub(crate) name: String,
    pub(crate) manual: bool,
    pub(crate) sites: Vec<SiteId>,
    pub(crate) hubs: Vec<WaypointId>,
    pub(crate) entry_rules: Vec<EntryRule>,
    pub(crate) priority: Option<usize>,
}

impl Region {
    /// Identifier within the owning geography.
    #[must_use]
    pub const fn id(&self) -> RegionId {
        self.id
    }

    /// Display name; manual ratings and vetoes are keyed by it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the region is rated as a single entity.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        self.manual
    }

    /// Member sites in directional (south to north) order.
    #[must_use]
    pub fn sites(&self) -> &[SiteId] {
        &self.sites
    }

    /// Hub waypoints, primary hub first.
    #[must_use]
    pub fn hubs(&self) -> &[WaypointId] {
        &self.hubs
    }

    /// The hub used when no entry rule or site hub applies.
    #[must_use]
    pub fn primary_hub(&self) -> Option<WaypointId> {
        self.hubs.first().copied()
    }

    /// Entry-hub rules in priority order.
    #[must_use]
    pub fn entry_rules(&self) -> &[EntryRule] {
        &self.entry_rules
    }

    /// Index in the geographic priority order, when the region takes part in it.
    #[must_use]
    pub const fn priority(&self) -> Option<usize> {
        self.priority
    }
}

/// The bonus-stop role: a short detour taken right after the base camp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusStop {
    pub(crate) region: RegionId,
    pub(crate) heading: Heading,
}

impl BonusStop {
    /// Region visited as the bonus stop.
    #[must_use]
    pub const fn region(&self) -> RegionId {
        self.region
    }

    /// Direction the next planned region must lie in for the stop to be on
    /// the way.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }
}

/// Regions with bespoke planning rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roles {
    pub(crate) base_camp: Option<RegionId>,
    pub(crate) bonus: Option<BonusStop>,
    pub(crate) long_commitment: Option<RegionId>,
    pub(crate) open_coastal: Vec<RegionId>,
    pub(crate) priority: Vec<RegionId>,
}

impl Roles {
    /// Region visited first with tiered stays.
    #[must_use]
    pub const fn base_camp(&self) -> Option<RegionId> {
        self.base_camp
    }

    /// Optional half-day detour after the base camp.
    #[must_use]
    pub const fn bonus(&self) -> Option<BonusStop> {
        self.bonus
    }

    /// Region that needs a multi-day commitment and is admitted conditionally.
    #[must_use]
    pub const fn long_commitment(&self) -> Option<RegionId> {
        self.long_commitment
    }

    /// Regions whose scores drive the collapse rule.
    #[must_use]
    pub fn open_coastal(&self) -> &[RegionId] {
        &self.open_coastal
    }

    /// Geographic priority order used to sequence the trip.
    #[must_use]
    pub fn priority(&self) -> &[RegionId] {
        &self.priority
    }

    /// Whether `region` is the base camp.
    #[must_use]
    pub fn is_base_camp(&self, region: RegionId) -> bool {
        self.base_camp == Some(region)
    }

    /// Whether `region` is the bonus stop.
    #[must_use]
    pub fn is_bonus(&self, region: RegionId) -> bool {
        self.bonus.is_some_and(|bonus| bonus.region == region)
    }

    /// Whether `region` is the long-commitment region.
    #[must_use]
    pub fn is_long_commitment(&self, region: RegionId) -> bool {
        self.long_commitment == Some(region)
    }
}
