//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{Workspace, plan_request, write_coast_geography, write_request, write_utf8};
use super::*;
use crate::plan::{PlanOutput, run_plan_with};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct PlanWorld {
    _workspace: Workspace,
    request_path: Utf8PathBuf,
    geography_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let request_path = workspace.path("request.json");
        let geography_path = workspace.path("coast.json");
        Self {
            _workspace: workspace,
            request_path,
            geography_path,
            include_request: RefCell::new(true),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, extra: &[String]) -> Vec<String> {
        let mut argv = vec!["driftwood".to_owned(), "plan".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(extra.iter().cloned());
        argv
    }

    fn run(&self, extra: &[String]) {
        let invocation = self.build_command_line(extra);
        let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Plan(args) => {
                let mut buffer = self.stdout.borrow_mut();
                run_plan_with(args, &mut *buffer)
            }
        });
        self.result.replace(Some(outcome));
    }

    fn output(&self) -> PlanOutput {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON itinerary")
    }

    fn error_matches(&self, check: fn(&CliError) -> bool) -> bool {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error)
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a five-day plan request rating the Chetco exists on disk")]
fn chetco_request_exists(#[from(world)] world: &PlanWorld) {
    write_request(&world.request_path, &plan_request(5, &[("Chetco", 4.0)]));
}

#[given("a five-day plan request rating the base camp and S1 exists on disk")]
fn coast_request_exists(#[from(world)] world: &PlanWorld) {
    write_request(
        &world.request_path,
        &plan_request(5, &[("Camp", 3.0), ("S1", 4.0)]),
    );
}

#[given("the coast geography file exists on disk")]
fn coast_geography_exists(#[from(world)] world: &PlanWorld) {
    write_coast_geography(&world.geography_path);
}

#[given("the plan request contains invalid JSON")]
fn plan_request_contains_invalid_json(#[from(world)] world: &PlanWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the plan request path")]
fn omit_plan_request_path(#[from(world)] world: &PlanWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    world.run(&[]);
}

#[when("I run the plan command with the geography file")]
fn run_plan_command_with_geography(#[from(world)] world: &PlanWorld) {
    world.run(&[
        format!("--{ARG_PLAN_GEOGRAPHY}"),
        world.geography_path.as_str().to_owned(),
    ]);
}

#[then("the command succeeds and prints an itinerary from START to RETURN")]
fn command_prints_itinerary(#[from(world)] world: &PlanWorld) {
    let output = world.output();
    let first = output.rows.first().expect("itinerary has rows");
    let last = output.rows.last().expect("itinerary has rows");
    assert_eq!(first.label, "START: Leave home");
    assert!(last.label.starts_with("RETURN:"), "ended with {}", last.label);
    assert_eq!(
        output.allocation.iter().map(|(_, days)| days).sum::<u32>(),
        5
    );
}

#[then("the command succeeds and the itinerary fishes S1")]
fn command_fishes_s1(#[from(world)] world: &PlanWorld) {
    let output = world.output();
    assert!(
        output.rows.iter().any(|row| row.label == "FISH: S1"),
        "no full day at S1 in {:?}",
        output.rows.iter().map(|row| &row.label).collect::<Vec<_>>()
    );
    assert!(output.skipped.is_empty());
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &PlanWorld) {
    assert!(world.error_matches(|error| matches!(error, CliError::ParsePlanRequest { .. })));
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &PlanWorld) {
    assert!(world.error_matches(|error| matches!(
        error,
        CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            ..
        }
    )));
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_bundled_geography, "planning a request against the bundled geography");
register_plan_scenario!(plan_geography_file, "planning against a geography file");
register_plan_scenario!(plan_invalid_json, "rejecting invalid JSON input");
register_plan_scenario!(plan_missing_request, "rejecting missing request paths");
