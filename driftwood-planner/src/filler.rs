//! Choosing where leftover days are spent.

use driftwood_core::RegionId;

use crate::context::{PlanContext, Spot};

/// Pick the region and spot for one filler day.
///
/// The traveller stays in `current` unless another visited region beats it
/// by the filler switch margin. Away from every visited region, the best one
/// is chosen outright.
#[expect(
    clippy::float_arithmetic,
    reason = "switching needs a score gain over the current region"
)]
pub(crate) fn choose<'a>(
    ctx: &PlanContext<'a>,
    current: Option<RegionId>,
    visited: &[RegionId],
) -> Option<(RegionId, Spot<'a>)> {
    let scored: Vec<(RegionId, f32)> = visited
        .iter()
        .filter(|&&region| ctx.best_spot(region).is_some())
        .map(|&region| (region, ctx.score(region)))
        .collect();
    let best = scored
        .iter()
        .copied()
        .enumerate()
        .max_by(|(i, (_, a)), (j, (_, b))| a.total_cmp(b).then_with(|| j.cmp(i)))
        .map(|(_, entry)| entry)?;
    let stay = current.and_then(|here| scored.iter().copied().find(|&(region, _)| region == here));
    let region = match stay {
        Some((here, score)) if best.1 < score + ctx.policy.filler_switch_margin => here,
        _ => best.0,
    };
    ctx.best_spot(region).map(|spot| (region, spot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlannerPolicy;
    use driftwood_core::test_support::coast_geography;
    use driftwood_core::{Geography, Ratings, Vetoes};
    use rstest::{fixture, rstest};

    #[fixture]
    fn geography() -> Geography {
        coast_geography().expect("coast fixture loads")
    }

    fn pick(
        geography: &Geography,
        ratings: &Ratings,
        current: Option<&str>,
        visited: &[&str],
    ) -> Option<(String, String)> {
        let vetoes = Vetoes::new();
        let policy = PlannerPolicy::default();
        let ctx = PlanContext {
            geography,
            ratings,
            vetoes: &vetoes,
            policy: &policy,
        };
        let id = |name: &str| geography.region_id(name).expect("region");
        let visited_ids: Vec<RegionId> = visited.iter().map(|name| id(name)).collect();
        choose(&ctx, current.map(id), &visited_ids).map(|(region, spot)| {
            (
                geography.region(region).name().to_owned(),
                spot.name.to_owned(),
            )
        })
    }

    fn ratings() -> Ratings {
        Ratings::new()
            .with_rating("Camp", 3.0)
            .with_rating("S1", 2.0)
            .with_rating("S2", 1.5)
            .with_rating("N1", 2.0)
            .with_rating("N2", 1.8)
    }

    #[rstest]
    fn stays_without_a_clear_gain(geography: Geography) {
        let chosen = pick(
            &geography,
            &ratings(),
            Some("South Coast"),
            &["Camp", "South Coast", "North Coast"],
        );
        assert_eq!(chosen, Some(("South Coast".to_owned(), "S1".to_owned())));
    }

    #[rstest]
    fn moves_for_a_clear_gain(geography: Geography) {
        let better = ratings().with_rating("N1", 4.0);
        let chosen = pick(
            &geography,
            &better,
            Some("South Coast"),
            &["Camp", "South Coast", "North Coast"],
        );
        assert_eq!(chosen, Some(("North Coast".to_owned(), "N1".to_owned())));
    }

    #[rstest]
    fn unvisited_location_takes_the_best_region(geography: Geography) {
        let chosen = pick(&geography, &ratings(), None, &["Camp", "South Coast"]);
        assert_eq!(chosen, Some(("South Coast".to_owned(), "S1".to_owned())));
    }

    #[rstest]
    fn manual_region_fills_as_a_whole(geography: Geography) {
        let chosen = pick(&geography, &ratings(), Some("Camp"), &["Camp", "South Coast"]);
        assert_eq!(chosen, Some(("Camp".to_owned(), "Camp".to_owned())));
    }

    #[rstest]
    fn nothing_visited_means_no_filler(geography: Geography) {
        assert_eq!(pick(&geography, &ratings(), None, &[]), None);
    }
}
