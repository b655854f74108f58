//! Tiered day allocation across the selected regions.
//!
//! Every region starts at a floor. The base camp's floor is tiered by score
//! and the long-commitment region needs at least two days. The pool left
//! after the floors is then either collapsed into the base camp (when the
//! open coast looks poor), trimmed (when the floors overshoot), or handed
//! out to the best-scoring regions. The result always sums to the trip
//! length unless no region was selected.

use driftwood_core::RegionId;
use log::debug;

use crate::context::PlanContext;

#[derive(Debug, Clone, Copy)]
struct Share {
    region: RegionId,
    score: f32,
    days: u32,
    minimum: u32,
}

fn floors(ctx: &PlanContext<'_>, regions: &[RegionId]) -> Vec<Share> {
    let roles = ctx.geography.roles();
    regions
        .iter()
        .map(|&region| {
            let score = ctx.score(region);
            let (days, minimum) = if roles.is_base_camp(region) {
                (ctx.policy.base_camp_days(score), 1)
            } else if roles.is_long_commitment(region) {
                (ctx.policy.long_commitment_floor, ctx.policy.long_commitment_floor)
            } else {
                (1, 1)
            };
            Share {
                region,
                score,
                days,
                minimum,
            }
        })
        .collect()
}

fn assigned(shares: &[Share]) -> i64 {
    shares.iter().map(|share| i64::from(share.days)).sum()
}

/// Index of the lowest-scoring share accepted by `keep`; ties go to the later
/// region.
fn lowest(shares: &[Share], keep: impl Fn(&Share) -> bool) -> Option<usize> {
    shares
        .iter()
        .enumerate()
        .filter(|(_, share)| keep(share))
        .min_by(|(i, a), (j, b)| a.score.total_cmp(&b.score).then_with(|| j.cmp(i)))
        .map(|(index, _)| index)
}

fn add_days(share: Option<&mut Share>, extra: i64) {
    if let Some(target) = share {
        let extra_days = u32::try_from(extra).unwrap_or(0);
        target.days = target.days.saturating_add(extra_days);
    }
}

/// Cut days until the shares fit `total_days`.
///
/// Dropping a multi-day region can undershoot; the shortfall is handed back
/// out through [`distribute`].
fn trim(ctx: &PlanContext<'_>, shares: &mut Vec<Share>, total_days: u32) {
    let roles = ctx.geography.roles();
    while assigned(shares) > i64::from(total_days) {
        if let Some(share) = lowest(shares, |share| share.days > share.minimum)
            .and_then(|index| shares.get_mut(index))
        {
            share.days = share.days.saturating_sub(1);
            continue;
        }
        let Some(index) = lowest(shares, |share| !roles.is_base_camp(share.region)) else {
            break;
        };
        let dropped = shares.remove(index);
        debug!(
            "Dropping region {} to fit {total_days} days",
            ctx.geography.region(dropped.region).name()
        );
    }
    let shortfall = i64::from(total_days).saturating_sub(assigned(shares));
    if shortfall > 0 {
        distribute(ctx, shares, shortfall);
    }
}

/// Index of the base camp share, else the best-scoring one.
fn collapse_target(ctx: &PlanContext<'_>, shares: &[Share]) -> Option<usize> {
    let roles = ctx.geography.roles();
    shares
        .iter()
        .position(|share| roles.is_base_camp(share.region))
        .or_else(|| {
            shares
                .iter()
                .enumerate()
                .max_by(|(i, a), (j, b)| a.score.total_cmp(&b.score).then_with(|| j.cmp(i)))
                .map(|(index, _)| index)
        })
}

/// Give the runner-up its top-up, then the rest to the best region.
fn distribute(ctx: &PlanContext<'_>, shares: &mut [Share], remainder: i64) {
    let roles = ctx.geography.roles();
    let mut ranked: Vec<usize> = shares
        .iter()
        .enumerate()
        .filter(|(_, share)| !roles.is_base_camp(share.region))
        .map(|(index, _)| index)
        .collect();
    ranked.sort_by(|&i, &j| {
        let score_of = |index: usize| shares.get(index).map_or(0.0, |share| share.score);
        score_of(j).total_cmp(&score_of(i)).then_with(|| i.cmp(&j))
    });
    let mut pool = remainder;
    match ranked.as_slice() {
        [] => {
            let target = collapse_target(ctx, shares);
            add_days(target.and_then(|index| shares.get_mut(index)), pool);
        }
        [best] => add_days(shares.get_mut(*best), pool),
        [best, runner_up, ..] => {
            if let Some(share) = shares.get_mut(*runner_up) {
                let wanted = i64::from(ctx.policy.runner_up_days.saturating_sub(share.days));
                let top_up = wanted.min(pool);
                add_days(Some(share), top_up);
                pool = pool.saturating_sub(top_up);
            }
            add_days(shares.get_mut(*best), pool);
        }
    }
}

/// Split `total_days` across `regions`, returned in visiting order.
///
/// Regions may be dropped when their floors cannot be met.
pub(crate) fn allocate(
    ctx: &PlanContext<'_>,
    regions: &[RegionId],
    total_days: u32,
) -> Vec<(RegionId, u32)> {
    let roles = ctx.geography.roles();
    let mut shares = floors(ctx, regions);
    if shares.is_empty() {
        return Vec::new();
    }
    let mut remainder = i64::from(total_days).saturating_sub(assigned(&shares));

    let coast = roles.open_coastal();
    let collapsed = !coast.is_empty()
        && coast
            .iter()
            .all(|&region| ctx.score(region) < ctx.policy.collapse_score);
    if collapsed {
        debug!("Open coast scores below {}; collapsing", ctx.policy.collapse_score);
        if remainder < 0 {
            trim(ctx, &mut shares, total_days);
        } else {
            let target = collapse_target(ctx, &shares);
            add_days(target.and_then(|index| shares.get_mut(index)), remainder);
        }
        return finish(shares);
    }

    let long_floor = i64::from(ctx.policy.long_commitment_floor);
    let starved = shares.iter().position(|share| {
        roles.is_long_commitment(share.region)
            && i64::from(share.days).saturating_add(remainder) < long_floor
    });
    if let Some(index) = starved {
        let dropped = shares.remove(index);
        remainder = remainder.saturating_add(i64::from(dropped.days));
        debug!(
            "Dropping long-commitment region {}; not enough days",
            ctx.geography.region(dropped.region).name()
        );
    }

    if remainder < 0 {
        trim(ctx, &mut shares, total_days);
    } else if remainder > 0 {
        distribute(ctx, &mut shares, remainder);
    }
    finish(shares)
}

fn finish(shares: Vec<Share>) -> Vec<(RegionId, u32)> {
    shares
        .into_iter()
        .map(|share| (share.region, share.days))
        .collect()
}
