//! Behavioural tests for geography loading using rstest-bdd.

use std::cell::RefCell;

use driftwood_core::geography::SiteSpec;
use driftwood_core::test_support::coast_spec;
use driftwood_core::{EntryKind, Geography, GeographyError, SkipReason};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then};

#[derive(Debug, Default)]
struct GeographyWorld {
    outcome: RefCell<Option<Result<Geography, GeographyError>>>,
}

impl GeographyWorld {
    fn loaded(&self) -> Geography {
        match self.outcome.borrow().as_ref().expect("geography loaded") {
            Ok(geography) => geography.clone(),
            Err(err) => panic!("expected geography to load, got {err}"),
        }
    }
}

#[fixture]
fn world() -> GeographyWorld {
    GeographyWorld::default()
}

#[given("the bundled Pacific coast geography")]
fn given_bundled(world: &GeographyWorld) {
    world.outcome.replace(Some(Geography::pacific_coast()));
}

#[given("the small coast fixture with a site whose target is \"lots of water\"")]
fn given_broken_target(world: &GeographyWorld) {
    let mut spec = coast_spec();
    spec.sites.push(SiteSpec {
        name: "Broken".to_owned(),
        region: "South Coast".to_owned(),
        target: "lots of water".to_owned(),
        lat: Some(42.3),
        lon: Some(-124.1),
        ..SiteSpec::default()
    });
    world.outcome.replace(Some(Geography::from_spec(&spec)));
}

#[given("the small coast fixture with home \"Atlantis\"")]
fn given_unknown_home(world: &GeographyWorld) {
    let mut spec = coast_spec();
    spec.home = "Atlantis".to_owned();
    world.outcome.replace(Some(Geography::from_spec(&spec)));
}

#[then("no entries are skipped")]
fn then_nothing_skipped(world: &GeographyWorld) {
    assert!(world.loaded().skipped().is_empty());
}

#[then("the base camp is the manually rated Trinity region")]
fn then_base_camp_is_trinity(world: &GeographyWorld) {
    let geography = world.loaded();
    let base_camp = geography
        .roles()
        .base_camp()
        .map(|id| geography.region(id));
    assert!(base_camp.is_some_and(|region| region.name() == "Trinity" && region.is_manual()));
}

#[then("the broken site is absent")]
fn then_broken_absent(world: &GeographyWorld) {
    let geography = world.loaded();
    assert!(geography.site_id("Broken").is_none());
    assert_eq!(geography.sites().len(), 8);
}

#[then("one skipped site is reported")]
fn then_one_skipped(world: &GeographyWorld) {
    let geography = world.loaded();
    let skipped = geography.skipped();
    assert_eq!(skipped.len(), 1);
    assert!(skipped.iter().all(|entry| entry.kind == EntryKind::Site
        && matches!(entry.reason, SkipReason::Target(_))));
}

#[then("loading fails because the home is unknown")]
fn then_home_unknown(world: &GeographyWorld) {
    let outcome = world.outcome.borrow();
    assert!(matches!(
        outcome.as_ref(),
        Some(Err(GeographyError::UnknownHome(name))) if name == "Atlantis"
    ));
}

#[scenario(path = "tests/features/geography.feature", index = 0)]
fn bundled_geography_loads(world: GeographyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/geography.feature", index = 1)]
fn unparsable_target_is_skipped(world: GeographyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/geography.feature", index = 2)]
fn unknown_home_is_rejected(world: GeographyWorld) {
    let _ = world;
}
