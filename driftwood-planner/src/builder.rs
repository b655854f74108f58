//! The day-by-day state machine stitching drives and fishing days together.

use chrono::NaiveDate;
use driftwood_core::{
    Activity, DriveEstimator, Heading, Itinerary, ItineraryRow, Leg, RegionId, ReturnLeg,
    TripParameters, VisitKind, WaypointId,
};
use log::debug;

use crate::context::{PlanContext, Spot};
use crate::distance::fuel_cost;
use crate::filler;
use crate::sequencer::directional_order;

/// Location label of the overnight stop on a split return.
const EN_ROUTE: &str = "En route";

/// Free days a fishing day needs: the day itself plus the reserved return.
const FISH_RESERVE: i64 = 2;

/// Outcome of trying to move the cursor to a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Travel {
    /// Already there or arrived.
    Arrived,
    /// The leg would eat into the reserved days.
    OutOfDays,
}

pub(crate) struct Builder<'p, 'a, D> {
    ctx: &'p PlanContext<'a>,
    estimator: &'p D,
    trip: &'p TripParameters,
    rows: Vec<ItineraryRow>,
    location: WaypointId,
    next: NaiveDate,
    visited: Vec<RegionId>,
}

impl<'p, 'a, D: DriveEstimator> Builder<'p, 'a, D> {
    pub(crate) fn new(ctx: &'p PlanContext<'a>, estimator: &'p D, trip: &'p TripParameters) -> Self {
        Self {
            ctx,
            estimator,
            trip,
            rows: Vec::new(),
            location: ctx.geography.home(),
            next: trip.start_date(),
            visited: Vec::new(),
        }
    }

    /// Run every stage in order and hand back the finished plan.
    pub(crate) fn build(mut self, allocation: &[(RegionId, u32)]) -> Itinerary {
        self.start();
        if allocation.is_empty() {
            self.bail("No eligible regions; staying home");
            return self.finish(allocation);
        }
        let roles = self.ctx.geography.roles();
        let base_camp = allocation
            .iter()
            .copied()
            .find(|&(region, _)| roles.is_base_camp(region));
        let main: Vec<(RegionId, u32)> = allocation
            .iter()
            .copied()
            .filter(|&(region, _)| !roles.is_base_camp(region))
            .collect();
        if let Some((region, allocated)) = base_camp {
            let tier = self.ctx.policy.base_camp_days(self.ctx.score(region));
            self.base_camp(region, tier.min(allocated));
            self.bonus_stop(main.first().map(|&(region, _)| region));
        }
        self.main_loop(&main);
        self.filler_loop();
        self.return_home();
        self.finish(allocation)
    }

    fn finish(self, allocation: &[(RegionId, u32)]) -> Itinerary {
        let geography = self.ctx.geography;
        Itinerary {
            rows: self.rows,
            allocation: allocation
                .iter()
                .map(|&(region, days)| (geography.region(region).name().to_owned(), days))
                .collect(),
        }
    }

    fn free_days(&self) -> i64 {
        (self.trip.last_day() - self.next).num_days() + 1
    }

    fn advance(&mut self) {
        self.next = self.next.succ_opt().unwrap_or(self.next);
    }

    fn waypoint_name(&self, id: WaypointId) -> String {
        self.ctx.geography.waypoint(id).name().to_owned()
    }

    fn start(&mut self) {
        let home = self.waypoint_name(self.location);
        self.rows
            .push(ItineraryRow::stationary(self.next, home, Activity::Start));
    }

    fn bail(&mut self, reason: &str) {
        let home = self.waypoint_name(self.location);
        self.rows.push(ItineraryRow::stationary(
            self.next,
            home,
            Activity::Bail {
                reason: reason.to_owned(),
            },
        ));
    }

    fn drive_row(&self, to: WaypointId, leg: Leg) -> ItineraryRow {
        let geography = self.ctx.geography;
        let origin = geography.waypoint(self.location);
        let destination = geography.waypoint(to);
        ItineraryRow {
            date: self.next,
            location: destination.name().to_owned(),
            activity: Activity::Drive {
                from: origin.name().to_owned(),
                to: destination.name().to_owned(),
            },
            miles: leg.miles,
            hours: leg.hours,
            cost: fuel_cost(leg, origin, self.trip),
        }
    }

    fn leg_to(&self, to: WaypointId) -> Leg {
        let geography = self.ctx.geography;
        self.estimator
            .leg(geography.waypoint(self.location), geography.waypoint(to))
    }

    const fn is_short(&self, leg: Leg) -> bool {
        leg.hours <= self.ctx.policy.same_day_hop_hours
    }

    /// Drive to `to` when the budget allows.
    ///
    /// Short hops share the date of whatever follows; long legs take a day of
    /// their own and so need one more free day than `reserve`.
    fn travel(&mut self, to: WaypointId, reserve: i64) -> Travel {
        if to == self.location {
            return Travel::Arrived;
        }
        let leg = self.leg_to(to);
        let short = self.is_short(leg);
        let needed = if short { reserve } else { reserve + 1 };
        if self.free_days() < needed {
            debug!(
                "Not enough days to drive to {}",
                self.ctx.geography.waypoint(to).name()
            );
            return Travel::OutOfDays;
        }
        let row = self.drive_row(to, leg);
        self.rows.push(row);
        self.location = to;
        if !short {
            self.advance();
        }
        Travel::Arrived
    }

    fn fish(&mut self, spot: Spot<'_>, visit: VisitKind) {
        let hub = self.waypoint_name(spot.hub);
        self.rows.push(ItineraryRow::stationary(
            self.next,
            hub,
            Activity::Fish {
                spot: spot.name.to_owned(),
                visit,
            },
        ));
        if visit != VisitKind::HalfDay {
            self.advance();
        }
    }

    fn mark_visited(&mut self, region: RegionId) {
        if !self.visited.contains(&region) {
            self.visited.push(region);
        }
    }

    /// Fish the base camp for `days`, its tiered stay.
    ///
    /// Days the allocation collapsed into the base camp beyond the tier are
    /// left for the main loop and the filler.
    fn base_camp(&mut self, region: RegionId, days: u32) {
        let Some(spot) = self.ctx.best_spot(region) else {
            return;
        };
        if self.travel(spot.hub, FISH_RESERVE) == Travel::OutOfDays {
            return;
        }
        self.mark_visited(region);
        for _ in 0..days {
            if self.free_days() < FISH_RESERVE {
                break;
            }
            self.fish(spot, VisitKind::Full);
        }
    }

    /// Whether `next` lies in the bonus stop's heading from the base camp.
    fn on_the_way(&self, heading: Heading, next: RegionId) -> bool {
        let geography = self.ctx.geography;
        let base = geography
            .roles()
            .base_camp()
            .and_then(|id| geography.region(id).priority());
        match (base, geography.region(next).priority()) {
            (Some(from), Some(to)) => match heading {
                Heading::North => to > from,
                Heading::South => to < from,
            },
            _ => false,
        }
    }

    fn entry_point(&self, region: RegionId) -> Option<WaypointId> {
        let best = self.ctx.fishable(region).first().map(|site| site.item);
        self.ctx.entry_hub(region, best)
    }

    /// Half-day detour after the base camp, with an optional short hop
    /// onwards on the same date.
    fn bonus_stop(&mut self, next_region: Option<RegionId>) {
        let geography = self.ctx.geography;
        let Some(bonus) = geography.roles().bonus() else {
            return;
        };
        let base_visited = geography
            .roles()
            .base_camp()
            .is_some_and(|base| self.visited.contains(&base));
        let Some(next) = next_region else {
            return;
        };
        if !base_visited
            || !self.ctx.is_eligible(bonus.region())
            || self.free_days() < FISH_RESERVE + 1
            || !self.on_the_way(bonus.heading(), next)
        {
            return;
        }
        let Some(spot) = self.ctx.best_spot(bonus.region()) else {
            return;
        };
        if spot.hub != self.location {
            let leg = self.leg_to(spot.hub);
            let row = self.drive_row(spot.hub, leg);
            self.rows.push(row);
            self.location = spot.hub;
        }
        self.fish(spot, VisitKind::HalfDay);
        self.mark_visited(bonus.region());
        if let Some(entry) = self.entry_point(next).filter(|&hub| hub != self.location) {
            let hop = self.leg_to(entry);
            if self.is_short(hop) {
                let row = self.drive_row(entry, hop);
                self.rows.push(row);
                self.location = entry;
            }
        }
        self.advance();
    }

    fn main_loop(&mut self, regions: &[(RegionId, u32)]) {
        let geography = self.ctx.geography;
        let policy = self.ctx.policy;
        'regions: for &(region, days) in regions {
            if self.free_days() < FISH_RESERVE {
                break;
            }
            let name = geography.region(region).name();
            let fishable = self.ctx.fishable(region);
            if fishable.is_empty() {
                debug!("Skipping {name}: nothing worth fishing");
                continue;
            }
            if geography.roles().is_long_commitment(region)
                && fishable.len() < policy.long_commitment_min_sites
            {
                debug!("Skipping {name}: too few sites for a long commitment");
                continue;
            }
            let Some(entry) = self.ctx.entry_hub(region, fishable.first().map(|site| site.item))
            else {
                continue;
            };
            if self.travel(entry, FISH_RESERVE) == Travel::OutOfDays {
                break;
            }
            self.mark_visited(region);
            let stay = usize::try_from(days).unwrap_or(usize::MAX);
            for site in directional_order(&fishable, policy.reversal_margin)
                .into_iter()
                .take(stay)
            {
                if self.free_days() < FISH_RESERVE {
                    break 'regions;
                }
                let spot = self.ctx.site_spot(site.item);
                if self.travel(spot.hub, FISH_RESERVE) == Travel::OutOfDays {
                    break 'regions;
                }
                self.fish(spot, VisitKind::Full);
            }
        }
    }

    /// Days the drive home from `from` needs.
    fn return_days(&self, from: WaypointId) -> i64 {
        let geography = self.ctx.geography;
        let leg = self
            .estimator
            .leg(geography.waypoint(from), geography.waypoint(geography.home()));
        if leg.hours <= self.ctx.policy.daily_drive_ceiling_hours {
            1
        } else {
            2
        }
    }

    /// Leftover days, stopping early enough for a split return when home is
    /// more than a day's drive away.
    fn filler_loop(&mut self) {
        while self.free_days() >= FISH_RESERVE {
            let current = self.ctx.geography.waypoint(self.location).region();
            let Some((_, spot)) = filler::choose(self.ctx, current, &self.visited) else {
                break;
            };
            let reserve = 1 + self.return_days(spot.hub);
            if self.free_days() < reserve || self.travel(spot.hub, reserve) == Travel::OutOfDays {
                break;
            }
            self.fish(spot, VisitKind::Filler);
        }
    }

    fn return_home(&mut self) {
        let geography = self.ctx.geography;
        let home = geography.home();
        let origin = geography.waypoint(self.location);
        let leg = self.leg_to(home);
        let home_name = self.waypoint_name(home);
        if leg.hours <= self.ctx.policy.daily_drive_ceiling_hours || self.free_days() <= 1 {
            self.rows.push(ItineraryRow {
                date: self.next,
                location: home_name,
                activity: Activity::Return {
                    leg: ReturnLeg::Direct,
                },
                miles: leg.miles,
                hours: leg.hours,
                cost: fuel_cost(leg, origin, self.trip),
            });
            self.location = home;
            return;
        }
        let half = leg.halved();
        let cost = fuel_cost(half, origin, self.trip);
        self.rows.push(ItineraryRow {
            date: self.next,
            location: EN_ROUTE.to_owned(),
            activity: Activity::Return {
                leg: ReturnLeg::First,
            },
            miles: half.miles,
            hours: half.hours,
            cost,
        });
        self.advance();
        self.rows.push(ItineraryRow {
            date: self.next,
            location: home_name,
            activity: Activity::Return {
                leg: ReturnLeg::Second,
            },
            miles: half.miles,
            hours: half.hours,
            cost,
        });
        self.location = home;
    }
}
