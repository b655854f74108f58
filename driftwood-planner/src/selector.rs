//! Region eligibility and visiting order.

use driftwood_core::RegionId;
use log::debug;

use crate::context::PlanContext;

/// Whether the long-commitment region earns a place in the trip.
///
/// It needs a very high score, or a moderately high one while every
/// open-coastal region scores zero.
fn admits_long_commitment(ctx: &PlanContext<'_>, region: RegionId) -> bool {
    let score = ctx.score(region);
    if score >= ctx.policy.admission_score {
        return true;
    }
    let coast_closed = ctx
        .geography
        .roles()
        .open_coastal()
        .iter()
        .all(|&coastal| ctx.score(coastal) <= 0.0);
    coast_closed && score >= ctx.policy.closed_coast_admission_score
}

/// Eligible regions in visiting order: the base camp first, then the
/// priority order. The bonus stop never appears; the builder handles it.
pub(crate) fn region_sequence(ctx: &PlanContext<'_>) -> Vec<RegionId> {
    let roles = ctx.geography.roles();
    let mut sequence: Vec<RegionId> = roles
        .base_camp()
        .filter(|&base| ctx.is_eligible(base))
        .into_iter()
        .collect();
    for &region in roles.priority() {
        if roles.is_base_camp(region) || roles.is_bonus(region) {
            continue;
        }
        let name = ctx.geography.region(region).name();
        if !ctx.is_eligible(region) {
            debug!("Region {name} is not eligible");
            continue;
        }
        if roles.is_long_commitment(region) && !admits_long_commitment(ctx, region) {
            debug!("Region {name} scores too low for a long commitment");
            continue;
        }
        sequence.push(region);
    }
    sequence
}
