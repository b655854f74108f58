//! Tunable constants of the planning heuristics.

/// Numeric knobs for [`ItineraryPlanner`](crate::ItineraryPlanner).
///
/// The defaults reproduce the tiered allocation model: three-hour same-day
/// hops, a ten-hour daily driving ceiling and half-point rating margins.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerPolicy {
    /// Legs at or under this many hours do not consume a day.
    pub same_day_hop_hours: f64,
    /// Longest return drive taken in a single day.
    pub daily_drive_ceiling_hours: f64,
    /// A site-rated region is eligible when a site rates above this.
    pub site_rating_floor: f32,
    /// A manual region is eligible when its rating reaches this.
    pub manual_rating_floor: f32,
    /// Rating gain needed before the sequencer backtracks.
    pub reversal_margin: f32,
    /// Score gain needed before filler days move to another region.
    pub filler_switch_margin: f32,
    /// Base-camp score earning the longest stay.
    pub base_camp_long_score: f32,
    /// Days granted at [`Self::base_camp_long_score`].
    pub base_camp_long_days: u32,
    /// Base-camp score earning the middle stay.
    pub base_camp_mid_score: f32,
    /// Days granted at [`Self::base_camp_mid_score`].
    pub base_camp_mid_days: u32,
    /// Floor of the long-commitment region.
    pub long_commitment_floor: u32,
    /// Fishable sites the long-commitment region needs to be worth visiting.
    pub long_commitment_min_sites: usize,
    /// Score admitting the long-commitment region unconditionally.
    pub admission_score: f32,
    /// Score admitting it while every open-coastal region scores zero.
    pub closed_coast_admission_score: f32,
    /// Open-coastal scores below this trigger the collapse rule.
    pub collapse_score: f32,
    /// Days the runner-up region is topped up to before the best takes the rest.
    pub runner_up_days: u32,
}

impl Default for PlannerPolicy {
    fn default() -> Self {
        Self {
            same_day_hop_hours: 3.0,
            daily_drive_ceiling_hours: 10.0,
            site_rating_floor: 0.5,
            manual_rating_floor: 0.5,
            reversal_margin: 0.5,
            filler_switch_margin: 0.5,
            base_camp_long_score: 3.5,
            base_camp_long_days: 3,
            base_camp_mid_score: 3.25,
            base_camp_mid_days: 2,
            long_commitment_floor: 2,
            long_commitment_min_sites: 2,
            admission_score: 7.0,
            closed_coast_admission_score: 5.0,
            collapse_score: 1.0,
            runner_up_days: 2,
        }
    }
}

impl PlannerPolicy {
    /// Tiered base-camp stay for a base-camp score.
    #[must_use]
    pub const fn base_camp_days(&self, score: f32) -> u32 {
        if score >= self.base_camp_long_score {
            self.base_camp_long_days
        } else if score >= self.base_camp_mid_score {
            self.base_camp_mid_days
        } else {
            1
        }
    }
}
