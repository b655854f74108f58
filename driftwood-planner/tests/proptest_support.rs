//! Proptest strategies for planner property-based tests.
//!
//! Generators produce rated site lists for the sequencer and rating/veto
//! tables over the small coast fixture for whole-plan invariants.

use driftwood_core::{Leg, Ratings, Vetoes};
use driftwood_planner::Rated;
use proptest::prelude::*;

/// Every rateable name in the coast fixture: the two manual regions and the
/// eight sites.
pub const COAST_NAMES: [&str; 10] = [
    "Camp", "Detour", "S1", "S2", "S3", "N1", "N2", "F1", "F2", "F3",
];

/// Region names in the coast fixture, used as veto targets.
pub const COAST_REGIONS: [&str; 5] = ["Camp", "Detour", "South Coast", "North Coast", "Far North"];

/// Strategy for `count` sites with random ratings in `0.0..=5.0`.
///
/// Positions are the list indices, so every site sits at a distinct point of
/// the fixed order.
pub fn rated_sites_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<Rated<usize>>> {
    proptest::collection::vec(0.0_f32..=5.0_f32, min_count..=max_count).prop_map(|ratings| {
        ratings
            .into_iter()
            .enumerate()
            .map(|(index, rating)| Rated {
                item: index,
                rating,
                position: index,
            })
            .collect()
    })
}

/// Strategy for a rating table over [`COAST_NAMES`]; roughly a third of the
/// entries are left unrated.
pub fn coast_ratings_strategy() -> impl Strategy<Value = Ratings> {
    proptest::collection::vec(proptest::option::weighted(0.7, 0.0_f32..=5.0_f32), COAST_NAMES.len())
        .prop_map(|values| {
            COAST_NAMES
                .iter()
                .zip(values)
                .filter_map(|(&name, value)| value.map(|rating| (name, rating)))
                .fold(Ratings::new(), |ratings, (name, rating)| {
                    ratings.with_rating(name, rating)
                })
        })
}

/// Strategy for up to three vetoes over the coast fixture's regions and
/// sites.
pub fn coast_vetoes_strategy() -> impl Strategy<Value = Vetoes> {
    let names: Vec<&'static str> = COAST_REGIONS
        .iter()
        .chain(COAST_NAMES.iter().skip(2))
        .copied()
        .collect();
    proptest::sample::subsequence(names, 0..=3).prop_map(|picked| {
        picked
            .into_iter()
            .fold(Vetoes::new(), |vetoes, name| vetoes.with_veto(name))
    })
}

/// Strategy for a uniform leg length between half an hour and twelve hours.
#[expect(
    clippy::float_arithmetic,
    reason = "leg miles are derived from hours at a fixed speed"
)]
pub fn leg_strategy() -> impl Strategy<Value = Leg> {
    (0.5_f64..=12.0_f64).prop_map(|hours| Leg {
        miles: hours * 50.0,
        hours,
    })
}
