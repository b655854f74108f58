//! Deterministic helpers for unit and behaviour tests.
//!
//! Available to this crate's tests and, through the `test-support` feature,
//! to downstream test suites.

use std::collections::HashMap;

use crate::geography::{
    BonusSpec, GeographySpec, RegionSpec, RolesSpec, SiteSpec, WaypointSpec,
};
use crate::{DriveEstimator, Geography, GeographyError, Heading, Leg, Waypoint};

/// A [`DriveEstimator`] returning one leg for every pair of distinct
/// waypoints, with optional per-pair overrides.
///
/// Overrides are symmetric and keyed by waypoint name.
///
/// # Examples
/// ```rust
/// use driftwood_core::Leg;
/// use driftwood_core::test_support::FixedLegEstimator;
///
/// let estimator = FixedLegEstimator::new(Leg { miles: 60.0, hours: 1.0 })
///     .with_leg("Home", "Far Hub", Leg { miles: 500.0, hours: 9.0 });
/// assert_eq!(estimator.default_leg().hours, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedLegEstimator {
    default: Leg,
    overrides: HashMap<(String, String), Leg>,
}

impl FixedLegEstimator {
    /// Use `default` for every pair without an override.
    #[must_use]
    pub fn new(default: Leg) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Override the leg between `a` and `b`, in both directions.
    #[must_use]
    pub fn with_leg(mut self, a: &str, b: &str, leg: Leg) -> Self {
        self.overrides.insert((a.to_owned(), b.to_owned()), leg);
        self.overrides.insert((b.to_owned(), a.to_owned()), leg);
        self
    }

    /// Leg used when no override matches.
    #[must_use]
    pub const fn default_leg(&self) -> Leg {
        self.default
    }
}

impl DriveEstimator for FixedLegEstimator {
    fn leg(&self, from: &Waypoint, to: &Waypoint) -> Leg {
        if from.id() == to.id() {
            return Leg::ZERO;
        }
        self.overrides
            .get(&(from.name().to_owned(), to.name().to_owned()))
            .copied()
            .unwrap_or(self.default)
    }
}

fn waypoint(name: &str, lat: f64, lon: f64) -> WaypointSpec {
    WaypointSpec {
        name: name.to_owned(),
        lat: Some(lat),
        lon: Some(lon),
        fuel_price: None,
    }
}

fn region(name: &str, manual: bool, hubs: &[&str]) -> RegionSpec {
    RegionSpec {
        name: name.to_owned(),
        manual,
        hubs: hubs.iter().map(|&hub| hub.to_owned()).collect(),
        ..RegionSpec::default()
    }
}

fn site(name: &str, region: &str, lat: f64, hub: &str) -> SiteSpec {
    SiteSpec {
        name: name.to_owned(),
        region: region.to_owned(),
        target: "500-1500 cfs".to_owned(),
        lat: Some(lat),
        lon: Some(-124.0),
        hub: Some(hub.to_owned()),
        ..SiteSpec::default()
    }
}

/// A small coastline spec with every planning role assigned.
///
/// - `Home` base, no region.
/// - `Camp`: manual base camp at `Camp Hub`.
/// - `Detour`: manual bonus stop at `Detour Hub`, heading north.
/// - `South Coast`: sites `S1`, `S2`, `S3` at `South Hub`.
/// - `North Coast`: sites `N1`, `N2` at `North Hub`.
/// - `Far North`: long-commitment region; `F1` at `Far South Hub`, `F2` and
///   `F3` at `Far Hub`.
///
/// Priority order is Camp, Detour, South Coast, North Coast, Far North.
#[must_use]
pub fn coast_spec() -> GeographySpec {
    GeographySpec {
        home: "Home".to_owned(),
        waypoints: vec![
            waypoint("Home", 40.5, -122.4),
            waypoint("Camp Hub", 40.9, -123.6),
            waypoint("Detour Hub", 41.5, -124.0),
            waypoint("South Hub", 42.1, -124.2),
            waypoint("North Hub", 44.2, -124.0),
            waypoint("Far South Hub", 47.4, -123.9),
            waypoint("Far Hub", 47.9, -124.4),
        ],
        regions: vec![
            region("Camp", true, &["Camp Hub"]),
            region("Detour", true, &["Detour Hub"]),
            region("South Coast", false, &["South Hub"]),
            region("North Coast", false, &["North Hub"]),
            region("Far North", false, &["Far Hub", "Far South Hub"]),
        ],
        sites: vec![
            site("S1", "South Coast", 42.0, "South Hub"),
            site("S2", "South Coast", 42.2, "South Hub"),
            site("S3", "South Coast", 42.4, "South Hub"),
            site("N1", "North Coast", 44.0, "North Hub"),
            site("N2", "North Coast", 44.3, "North Hub"),
            site("F1", "Far North", 47.4, "Far South Hub"),
            site("F2", "Far North", 47.8, "Far Hub"),
            site("F3", "Far North", 48.0, "Far Hub"),
        ],
        roles: RolesSpec {
            base_camp: Some("Camp".to_owned()),
            bonus: Some(BonusSpec {
                region: "Detour".to_owned(),
                heading: Heading::North,
            }),
            long_commitment: Some("Far North".to_owned()),
            open_coastal: vec!["South Coast".to_owned(), "North Coast".to_owned()],
            priority: ["Camp", "Detour", "South Coast", "North Coast", "Far North"]
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
        },
    }
}

/// Load [`coast_spec`].
///
/// # Errors
/// Never fails for the unmodified spec; the `Result` mirrors
/// [`Geography::from_spec`].
pub fn coast_geography() -> Result<Geography, GeographyError> {
    Geography::from_spec(&coast_spec())
}
