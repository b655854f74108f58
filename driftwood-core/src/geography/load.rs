//! Resolution of a [`GeographySpec`] into an indexed [`Geography`].
//!
//! Only unknown homes and duplicate names are fatal. Any other defect drops
//! the offending entry, logs a warning and records a [`Skipped`] diagnostic.

use std::collections::{HashMap, HashSet};

use geo::Coord;
use log::warn;

use super::error::{EntryKind, GeographyError, SkipReason, Skipped};
use super::spec::{GeographySpec, RegionSpec, RolesSpec, SiteSpec, WaypointSpec};
use super::Geography;
use crate::{
    BonusStop, EntryRule, Region, RegionId, Roles, Site, SiteId, TargetRange, Waypoint, WaypointId,
};

pub(super) fn load(spec: &GeographySpec) -> Result<Geography, GeographyError> {
    let mut loader = Loader::default();
    loader.add_waypoints(&spec.waypoints)?;
    let home = loader
        .waypoint_index
        .get(&spec.home)
        .copied()
        .ok_or_else(|| GeographyError::UnknownHome(spec.home.clone()))?;
    loader.add_regions(&spec.regions, home)?;
    loader.add_sites(&spec.sites)?;
    loader.add_entry_rules(&spec.regions);
    loader.order_sites(&spec.regions);
    let roles = loader.resolve_roles(&spec.roles);
    Ok(Geography {
        home,
        waypoints: loader.waypoints,
        regions: loader.regions,
        sites: loader.sites,
        roles,
        skipped: loader.skipped,
        waypoint_index: loader.waypoint_index,
        region_index: loader.region_index,
        site_index: loader.site_index,
    })
}

fn coordinate(lat: Option<f64>, lon: Option<f64>) -> Option<Coord<f64>> {
    let (lat, lon) = (lat?, lon?);
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon))
        .then_some(Coord { x: lon, y: lat })
}

fn ensure_unique<'a>(
    seen: &mut HashSet<&'a str>,
    kind: EntryKind,
    name: &'a str,
) -> Result<(), GeographyError> {
    if seen.insert(name) {
        Ok(())
    } else {
        Err(GeographyError::DuplicateName {
            kind,
            name: name.to_owned(),
        })
    }
}

#[derive(Default)]
struct Loader {
    waypoints: Vec<Waypoint>,
    regions: Vec<Region>,
    sites: Vec<Site>,
    skipped: Vec<Skipped>,
    waypoint_index: HashMap<String, WaypointId>,
    region_index: HashMap<String, RegionId>,
    site_index: HashMap<String, SiteId>,
}

impl Loader {
    fn skip(&mut self, kind: EntryKind, name: &str, reason: SkipReason) {
        warn!("Skipped geography {kind} '{name}': {reason}");
        self.skipped.push(Skipped {
            kind,
            name: name.to_owned(),
            reason,
        });
    }

    fn add_waypoints(&mut self, specs: &[WaypointSpec]) -> Result<(), GeographyError> {
        let mut seen = HashSet::new();
        for spec in specs {
            ensure_unique(&mut seen, EntryKind::Waypoint, &spec.name)?;
            let Some(location) = coordinate(spec.lat, spec.lon) else {
                self.skip(
                    EntryKind::Waypoint,
                    &spec.name,
                    SkipReason::MissingCoordinates,
                );
                continue;
            };
            let id = WaypointId(self.waypoints.len());
            self.waypoints.push(Waypoint {
                id,
                name: spec.name.clone(),
                location,
                fuel_price: spec
                    .fuel_price
                    .filter(|price| price.is_finite() && *price >= 0.0),
                region: None,
            });
            self.waypoint_index.insert(spec.name.clone(), id);
        }
        Ok(())
    }

    fn add_regions(
        &mut self,
        specs: &[RegionSpec],
        home: WaypointId,
    ) -> Result<(), GeographyError> {
        let mut seen = HashSet::new();
        for spec in specs {
            ensure_unique(&mut seen, EntryKind::Region, &spec.name)?;
            let mut hubs = Vec::with_capacity(spec.hubs.len());
            for hub in &spec.hubs {
                match self.waypoint_index.get(hub) {
                    Some(&id) => hubs.push(id),
                    None => self.skip(
                        EntryKind::HubReference,
                        &spec.name,
                        SkipReason::UnknownWaypoint(hub.clone()),
                    ),
                }
            }
            if hubs.is_empty() {
                self.skip(EntryKind::Region, &spec.name, SkipReason::NoHubs);
                continue;
            }
            let id = RegionId(self.regions.len());
            for hub in hubs.iter().filter(|&&hub| hub != home) {
                if let Some(waypoint) = self.waypoints.get_mut(hub.0)
                    && waypoint.region.is_none()
                {
                    waypoint.region = Some(id);
                }
            }
            self.regions.push(Region {
                id,
                name: spec.name.clone(),
                manual: spec.manual,
                sites: Vec::new(),
                hubs,
                entry_rules: Vec::new(),
                priority: None,
            });
            self.region_index.insert(spec.name.clone(), id);
        }
        Ok(())
    }

    fn add_sites(&mut self, specs: &[SiteSpec]) -> Result<(), GeographyError> {
        let mut seen = HashSet::new();
        for spec in specs {
            ensure_unique(&mut seen, EntryKind::Site, &spec.name)?;
            let id = SiteId(self.sites.len());
            match self.resolve_site(spec, id) {
                Ok(site) => {
                    if let Some(region) = self.regions.get_mut(site.region.0) {
                        region.sites.push(id);
                    }
                    self.site_index.insert(spec.name.clone(), id);
                    self.sites.push(site);
                }
                Err(reason) => self.skip(EntryKind::Site, &spec.name, reason),
            }
        }
        Ok(())
    }

    fn resolve_site(&self, spec: &SiteSpec, id: SiteId) -> Result<Site, SkipReason> {
        let region = self
            .region_index
            .get(&spec.region)
            .and_then(|region| self.regions.get(region.0))
            .ok_or_else(|| SkipReason::UnknownRegion(spec.region.clone()))?;
        if region.manual {
            return Err(SkipReason::ManualRegion(region.name.clone()));
        }
        let target: TargetRange = spec.target.parse()?;
        let location = coordinate(spec.lat, spec.lon).ok_or(SkipReason::MissingCoordinates)?;
        let hub = match &spec.hub {
            Some(name) => self
                .waypoint_index
                .get(name)
                .copied()
                .ok_or_else(|| SkipReason::UnknownWaypoint(name.clone()))?,
            None => region.primary_hub().ok_or(SkipReason::NoHubs)?,
        };
        Ok(Site {
            id,
            name: spec.name.clone(),
            region: region.id,
            target,
            hard_minimum: spec.hard_minimum.filter(|value| value.is_finite()),
            basin: spec.basin,
            location,
            hub,
            position: 0,
        })
    }

    fn site_in_region(&self, name: &str, region: RegionId) -> Option<SiteId> {
        self.site_index
            .get(name)
            .copied()
            .filter(|id| self.sites.get(id.0).is_some_and(|site| site.region == region))
    }

    fn add_entry_rules(&mut self, specs: &[RegionSpec]) {
        for spec in specs {
            let Some(&region) = self.region_index.get(&spec.name) else {
                continue;
            };
            let mut rules = Vec::with_capacity(spec.entry_rules.len());
            for rule in &spec.entry_rules {
                let Some(&hub) = self.waypoint_index.get(&rule.hub) else {
                    self.skip(
                        EntryKind::EntryRule,
                        &spec.name,
                        SkipReason::UnknownWaypoint(rule.hub.clone()),
                    );
                    continue;
                };
                let mut sites = Vec::with_capacity(rule.when_best_in.len());
                for name in &rule.when_best_in {
                    match self.site_in_region(name, region) {
                        Some(site) => sites.push(site),
                        None => self.skip(
                            EntryKind::EntryRule,
                            &spec.name,
                            SkipReason::UnknownSite(name.clone()),
                        ),
                    }
                }
                if !sites.is_empty() {
                    rules.push(EntryRule { sites, hub });
                }
            }
            if let Some(entry) = self.regions.get_mut(region.0) {
                entry.entry_rules = rules;
            }
        }
    }

    fn order_sites(&mut self, specs: &[RegionSpec]) {
        for spec in specs {
            let Some(&region) = self.region_index.get(&spec.name) else {
                continue;
            };
            let mut ordered: Vec<SiteId> = Vec::new();
            for name in &spec.order {
                match self.site_in_region(name, region) {
                    Some(site) if !ordered.contains(&site) => ordered.push(site),
                    Some(_) => {}
                    None => self.skip(
                        EntryKind::OrderEntry,
                        &spec.name,
                        SkipReason::UnknownSite(name.clone()),
                    ),
                }
            }
            let members = self
                .regions
                .get(region.0)
                .map(|entry| entry.sites.clone())
                .unwrap_or_default();
            let mut rest: Vec<SiteId> = members
                .into_iter()
                .filter(|site| !ordered.contains(site))
                .collect();
            let latitude = |site: &SiteId| self.sites.get(site.0).map_or(0.0, |s| s.location.y);
            rest.sort_by(|a, b| latitude(a).total_cmp(&latitude(b)));
            ordered.extend(rest);
            for (position, site) in ordered.iter().enumerate() {
                if let Some(entry) = self.sites.get_mut(site.0) {
                    entry.position = position;
                }
            }
            if let Some(entry) = self.regions.get_mut(region.0) {
                entry.sites = ordered;
            }
        }
    }

    fn role_region(&mut self, role: &str, name: &str) -> Option<RegionId> {
        let found = self.region_index.get(name).copied();
        if found.is_none() {
            self.skip(
                EntryKind::Role,
                role,
                SkipReason::UnknownRegion(name.to_owned()),
            );
        }
        found
    }

    fn resolve_roles(&mut self, spec: &RolesSpec) -> Roles {
        let base_camp = spec
            .base_camp
            .as_deref()
            .and_then(|name| self.role_region("base_camp", name));
        let bonus = spec.bonus.as_ref().and_then(|bonus| {
            self.role_region("bonus", &bonus.region)
                .map(|region| BonusStop {
                    region,
                    heading: bonus.heading,
                })
        });
        let long_commitment = spec
            .long_commitment
            .as_deref()
            .and_then(|name| self.role_region("long_commitment", name));
        let open_coastal = spec
            .open_coastal
            .iter()
            .filter_map(|name| self.role_region("open_coastal", name))
            .collect();
        let mut priority: Vec<RegionId> = Vec::new();
        if spec.priority.is_empty() {
            priority.extend(self.regions.iter().map(|region| region.id));
        }
        for name in &spec.priority {
            if let Some(region) = self.role_region("priority", name)
                && !priority.contains(&region)
            {
                priority.push(region);
            }
        }
        for (index, region) in priority.iter().enumerate() {
            if let Some(entry) = self.regions.get_mut(region.0) {
                entry.priority = Some(index);
            }
        }
        Roles {
            base_camp,
            bonus,
            long_commitment,
            open_coastal,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::spec::{EntryRuleSpec, RegionSpec, SiteSpec, WaypointSpec};
    use rstest::{fixture, rstest};

    fn waypoint(name: &str, lat: f64, lon: f64) -> WaypointSpec {
        WaypointSpec {
            name: name.into(),
            lat: Some(lat),
            lon: Some(lon),
            fuel_price: None,
        }
    }

    fn site(name: &str, lat: f64, target: &str) -> SiteSpec {
        SiteSpec {
            name: name.into(),
            region: "Coast".into(),
            target: target.into(),
            lat: Some(lat),
            lon: Some(-124.0),
            ..SiteSpec::default()
        }
    }

    #[fixture]
    fn spec() -> GeographySpec {
        GeographySpec {
            home: "Home".into(),
            waypoints: vec![
                waypoint("Home", 40.0, -122.0),
                waypoint("South Hub", 41.0, -124.0),
                waypoint("North Hub", 43.0, -124.0),
            ],
            regions: vec![RegionSpec {
                name: "Coast".into(),
                hubs: vec!["South Hub".into(), "North Hub".into()],
                entry_rules: vec![EntryRuleSpec {
                    when_best_in: vec!["Upper".into()],
                    hub: "North Hub".into(),
                }],
                ..RegionSpec::default()
            }],
            sites: vec![
                site("Upper", 42.9, "100-200 cfs"),
                site("Lower", 41.1, "300-600 cfs"),
                site("Middle", 42.0, "2.0-4.0 ft"),
            ],
            roles: RolesSpec::default(),
        }
    }

    #[rstest]
    fn sites_default_to_latitude_order(spec: GeographySpec) {
        let geography = load(&spec).expect("valid geography");
        let region = geography.region_by_name("Coast").expect("region exists");
        let names: Vec<&str> = region
            .sites()
            .iter()
            .map(|&id| geography.site(id).name())
            .collect();
        assert_eq!(names, vec!["Lower", "Middle", "Upper"]);
        let upper = geography.site_by_name("Upper").expect("site exists");
        assert_eq!(upper.position(), 2);
    }

    #[rstest]
    fn explicit_order_wins_and_appends_the_rest(mut spec: GeographySpec) {
        if let Some(region) = spec.regions.first_mut() {
            region.order = vec!["Upper".into(), "Lower".into()];
        }
        let geography = load(&spec).expect("valid geography");
        let region = geography.region_by_name("Coast").expect("region exists");
        let names: Vec<&str> = region
            .sites()
            .iter()
            .map(|&id| geography.site(id).name())
            .collect();
        assert_eq!(names, vec!["Upper", "Lower", "Middle"]);
    }

    #[rstest]
    fn hubs_default_to_primary_and_map_back_to_region(spec: GeographySpec) {
        let geography = load(&spec).expect("valid geography");
        let lower = geography.site_by_name("Lower").expect("site exists");
        let hub = geography.waypoint(lower.hub());
        assert_eq!(hub.name(), "South Hub");
        assert_eq!(hub.region(), Some(lower.region()));
        assert!(geography.waypoint(geography.home()).region().is_none());
    }

    #[rstest]
    fn entry_rules_resolve_sites(spec: GeographySpec) {
        let geography = load(&spec).expect("valid geography");
        let region = geography.region_by_name("Coast").expect("region exists");
        let upper = geography.site_id("Upper").expect("site exists");
        let rule = region.entry_rules().first().expect("rule kept");
        assert!(rule.matches(upper));
        assert_eq!(geography.waypoint(rule.hub()).name(), "North Hub");
    }

    #[rstest]
    fn malformed_site_is_skipped(mut spec: GeographySpec) {
        spec.sites.push(site("Broken", 42.5, "lots"));
        spec.sites.push(SiteSpec {
            lat: None,
            ..site("Nowhere", 0.0, "1-2 cfs")
        });
        let geography = load(&spec).expect("tolerant load");
        assert!(geography.site_id("Broken").is_none());
        assert!(geography.site_id("Nowhere").is_none());
        let reasons: Vec<&SkipReason> = geography
            .skipped()
            .iter()
            .map(|skipped| &skipped.reason)
            .collect();
        assert!(matches!(reasons.as_slice(), [
            SkipReason::Target(_),
            SkipReason::MissingCoordinates
        ]));
    }

    #[rstest]
    fn unknown_hub_is_dropped_but_region_kept(mut spec: GeographySpec) {
        if let Some(region) = spec.regions.first_mut() {
            region.hubs.push("Atlantis".into());
        }
        let geography = load(&spec).expect("tolerant load");
        let region = geography.region_by_name("Coast").expect("region exists");
        assert_eq!(region.hubs().len(), 2);
        assert_eq!(geography.skipped().len(), 1);
    }

    #[rstest]
    fn empty_priority_uses_declaration_order(spec: GeographySpec) {
        let geography = load(&spec).expect("valid geography");
        assert_eq!(geography.roles().priority().len(), 1);
    }

    #[rstest]
    fn unknown_role_is_recorded(mut spec: GeographySpec) {
        spec.roles.base_camp = Some("Atlantis".into());
        let geography = load(&spec).expect("tolerant load");
        assert!(geography.roles().base_camp().is_none());
        let skipped = geography.skipped().first().expect("diagnostic recorded");
        assert_eq!(skipped.kind, EntryKind::Role);
    }

    #[rstest]
    fn unknown_home_is_fatal(mut spec: GeographySpec) {
        spec.home = "Atlantis".into();
        let err = load(&spec).expect_err("home must exist");
        assert!(matches!(err, GeographyError::UnknownHome(name) if name == "Atlantis"));
    }

    #[rstest]
    fn duplicate_site_is_fatal(mut spec: GeographySpec) {
        spec.sites.push(site("Upper", 42.95, "1-2 cfs"));
        let err = load(&spec).expect_err("duplicates are fatal");
        assert!(matches!(
            err,
            GeographyError::DuplicateName {
                kind: EntryKind::Site,
                ..
            }
        ));
    }
}
