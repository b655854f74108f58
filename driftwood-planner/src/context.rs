//! Per-call view joining the geography with ratings, vetoes and policy.

use driftwood_core::{Geography, RatingSource, Region, RegionId, Site, SiteId, Vetoes, WaypointId};

use crate::PlannerPolicy;
use crate::sequencer::{Rated, threshold_filter};

/// Where a day is spent: a site (or manual region) and the hub it is fished
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Spot<'g> {
    pub(crate) name: &'g str,
    pub(crate) hub: WaypointId,
}

pub(crate) struct PlanContext<'a> {
    pub(crate) geography: &'a Geography,
    pub(crate) ratings: &'a dyn RatingSource,
    pub(crate) vetoes: &'a Vetoes,
    pub(crate) policy: &'a PlannerPolicy,
}

impl<'a> PlanContext<'a> {
    pub(crate) fn region_vetoed(&self, region: RegionId) -> bool {
        self.vetoes.is_vetoed(self.geography.region(region).name())
    }

    /// Effective rating of a site; vetoed sites and sites of vetoed regions
    /// rate zero.
    pub(crate) fn site_rating(&self, site: &Site) -> f32 {
        if self.vetoes.is_vetoed(site.name()) || self.region_vetoed(site.region()) {
            0.0
        } else {
            self.ratings.rating_or_unrated(site.name())
        }
    }

    fn manual_rating(&self, region: &Region) -> f32 {
        if self.vetoes.is_vetoed(region.name()) {
            0.0
        } else {
            self.ratings.rating_or_unrated(region.name())
        }
    }

    /// Sites of `region` that may enter a plan, in directional order.
    pub(crate) fn candidates(&self, region: RegionId) -> Vec<Rated<SiteId>> {
        self.geography
            .region_sites(region)
            .filter_map(|site| {
                let rating = self.site_rating(site);
                (rating > 0.0).then_some(Rated {
                    item: site.id(),
                    rating,
                    position: site.position(),
                })
            })
            .collect()
    }

    /// Sites worth fishing in `region`, best first.
    pub(crate) fn fishable(&self, region: RegionId) -> Vec<Rated<SiteId>> {
        threshold_filter(&self.candidates(region))
    }

    /// Manual rating, or the sum of the two best site ratings.
    pub(crate) fn score(&self, region: RegionId) -> f32 {
        let entry = self.geography.region(region);
        if entry.is_manual() {
            return self.manual_rating(entry);
        }
        let mut ratings: Vec<f32> = self
            .candidates(region)
            .iter()
            .map(|site| site.rating)
            .collect();
        ratings.sort_by(|a, b| b.total_cmp(a));
        ratings.into_iter().take(2).sum()
    }

    pub(crate) fn is_eligible(&self, region: RegionId) -> bool {
        let entry = self.geography.region(region);
        if self.vetoes.is_vetoed(entry.name()) {
            return false;
        }
        if entry.is_manual() {
            return self.manual_rating(entry) >= self.policy.manual_rating_floor;
        }
        self.candidates(region)
            .iter()
            .any(|site| site.rating > self.policy.site_rating_floor)
    }

    /// Hub a region is entered through when `best` is its top site.
    pub(crate) fn entry_hub(&self, region: RegionId, best: Option<SiteId>) -> Option<WaypointId> {
        let entry = self.geography.region(region);
        best.and_then(|site| {
            entry
                .entry_rules()
                .iter()
                .find(|rule| rule.matches(site))
                .map(|rule| rule.hub())
        })
        .or_else(|| entry.primary_hub())
    }

    /// The single best place to spend a day in `region`.
    ///
    /// Manual regions are fished as a whole from their primary hub.
    pub(crate) fn best_spot(&self, region: RegionId) -> Option<Spot<'a>> {
        let entry = self.geography.region(region);
        if entry.is_manual() {
            return entry.primary_hub().map(|hub| Spot {
                name: entry.name(),
                hub,
            });
        }
        self.fishable(region).first().map(|best| self.site_spot(best.item))
    }

    pub(crate) fn site_spot(&self, site: SiteId) -> Spot<'a> {
        let entry = self.geography.site(site);
        Spot {
            name: entry.name(),
            hub: entry.hub(),
        }
    }
}
