//! Test helpers for composing plan requests and geography files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use driftwood_core::test_support::coast_spec;
use driftwood_core::{PlanRequest, Ratings, TripParameters, Vetoes};
use tempfile::TempDir;

/// Temporary directory holding the files of one CLI invocation.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A request for `days` days from 1 October 2025 with the given ratings.
pub(super) fn plan_request(days: u32, ratings: &[(&str, f32)]) -> PlanRequest {
    let start = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");
    PlanRequest {
        trip: TripParameters::new(start, days, 25.0, 4.0).expect("valid trip"),
        ratings: ratings
            .iter()
            .fold(Ratings::new(), |table, &(name, rating)| {
                table.with_rating(name, rating)
            }),
        vetoes: Vetoes::new(),
    }
}

pub(super) fn write_request(path: &Utf8Path, request: &PlanRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}

/// Writes the small coast fixture as a geography document.
pub(super) fn write_coast_geography(path: &Utf8Path) {
    let payload = serde_json::to_string(&coast_spec()).expect("serialize geography");
    write_utf8(path, payload.as_bytes());
}
