//! In-region site selection and ordering.
//!
//! Two pure steps run per region:
//!
//! 1. [`threshold_filter`] keeps the prefix of best-rated sites that lie
//!    within a rating-dependent threshold of the best one.
//! 2. [`directional_order`] walks the fishable set along the region's fixed
//!    geographic order, only backtracking for a materially better site.
//!
//! Both are generic over the site handle so they can be exercised without a
//! loaded geography.

use std::cmp::Ordering;

use log::debug;

/// Slack absorbing `f32` rounding when comparing rating gaps.
const RATING_EPSILON: f32 = 1e-6;

/// A site handle with its rating and its index in the region's fixed order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rated<T> {
    /// The site handle.
    pub item: T,
    /// Desirability in `0.0..=5.0`.
    pub rating: f32,
    /// Position in the region's directional order.
    pub position: usize,
}

/// Largest rating gap below the best site that is still worth fishing.
///
/// # Examples
/// ```rust
/// use driftwood_planner::threshold_for;
///
/// assert_eq!(threshold_for(4.2), 1.0);
/// assert_eq!(threshold_for(3.6), 0.75);
/// assert_eq!(threshold_for(2.5), 0.5);
/// assert_eq!(threshold_for(1.0), 0.25);
/// ```
#[must_use]
pub const fn threshold_for(best: f32) -> f32 {
    if best >= 4.0 {
        1.0
    } else if best >= 3.5 {
        0.75
    } else if best >= 2.5 {
        0.5
    } else {
        0.25
    }
}

fn best_first<T>(a: &Rated<T>, b: &Rated<T>) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.position.cmp(&b.position))
}

/// Whether `rating` lies within `threshold` of `best`.
#[expect(
    clippy::float_arithmetic,
    reason = "threshold comparison works on rating differences"
)]
const fn within(best: f32, rating: f32, threshold: f32) -> bool {
    best - rating <= threshold + RATING_EPSILON
}

/// Sites worth fishing, best first.
///
/// Candidates are sorted by rating (ties by position); the walk stops at the
/// first site whose gap to the best exceeds [`threshold_for`] the best.
///
/// # Examples
/// ```rust
/// use driftwood_planner::{Rated, threshold_filter};
///
/// let sites = [
///     Rated { item: "C", rating: 1.0, position: 2 },
///     Rated { item: "A", rating: 4.2, position: 0 },
///     Rated { item: "B", rating: 3.5, position: 1 },
/// ];
/// let fishable: Vec<&str> = threshold_filter(&sites).iter().map(|s| s.item).collect();
/// assert_eq!(fishable, ["A", "B"]);
/// ```
#[must_use]
pub fn threshold_filter<T: Copy>(candidates: &[Rated<T>]) -> Vec<Rated<T>> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(best_first);
    let Some(best) = sorted.first().map(|site| site.rating) else {
        return sorted;
    };
    let threshold = threshold_for(best);
    sorted
        .into_iter()
        .take_while(|site| within(best, site.rating, threshold))
        .collect()
}

/// Travel direction along the fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    const fn leads(self, from: usize, to: usize) -> bool {
        match self {
            Self::Forward => to > from,
            Self::Backward => to < from,
        }
    }
}

/// Highest-rated site lying in `direction` from `from`, ties broken by
/// proximity then position.
fn best_towards<T: Copy>(
    remaining: &[Rated<T>],
    from: usize,
    direction: Direction,
) -> Option<(usize, Rated<T>)> {
    remaining
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, site)| direction.leads(from, site.position))
        .min_by(|(_, a), (_, b)| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| from.abs_diff(a.position).cmp(&from.abs_diff(b.position)))
                .then_with(|| a.position.cmp(&b.position))
        })
}

#[expect(
    clippy::float_arithmetic,
    reason = "reversal requires a rating gain over the current site"
)]
const fn worth_reversing(current: f32, candidate: f32, margin: f32) -> bool {
    candidate + RATING_EPSILON >= current + margin
}

/// Order a fishable set into a directional walk.
///
/// The walk starts at the highest-rated site and heads towards the side of
/// the fixed order holding more of the remaining sites (forward on a tie).
/// Each step takes the best unused site ahead. With nothing ahead it reverses
/// only when the best site behind beats the current one by `reversal_margin`;
/// otherwise the walk ends, so trailing sites may be left out.
///
/// # Examples
/// ```rust
/// use driftwood_planner::{Rated, directional_order};
///
/// let sites = [
///     Rated { item: "south", rating: 3.0, position: 0 },
///     Rated { item: "anchor", rating: 4.0, position: 1 },
///     Rated { item: "north", rating: 3.8, position: 2 },
///     Rated { item: "far north", rating: 3.5, position: 3 },
/// ];
/// let walk: Vec<&str> = directional_order(&sites, 0.5).iter().map(|s| s.item).collect();
/// assert_eq!(walk, ["anchor", "north", "far north"]);
/// ```
#[must_use]
pub fn directional_order<T: Copy>(fishable: &[Rated<T>], reversal_margin: f32) -> Vec<Rated<T>> {
    let mut remaining = fishable.to_vec();
    remaining.sort_by(best_first);
    if remaining.is_empty() {
        return remaining;
    }
    let anchor = remaining.remove(0);
    let ahead = remaining
        .iter()
        .filter(|site| site.position > anchor.position)
        .count();
    let behind = remaining
        .iter()
        .filter(|site| site.position < anchor.position)
        .count();
    let mut direction = if ahead >= behind {
        Direction::Forward
    } else {
        Direction::Backward
    };

    let mut walk = Vec::with_capacity(fishable.len());
    walk.push(anchor);
    let mut current = anchor;
    while !remaining.is_empty() {
        let (index, site) = match best_towards(&remaining, current.position, direction) {
            Some(found) => found,
            None => {
                let Some(candidate) =
                    best_towards(&remaining, current.position, direction.flipped())
                else {
                    break;
                };
                if !worth_reversing(current.rating, candidate.1.rating, reversal_margin) {
                    break;
                }
                debug!(
                    "Reversing at position {} for a site rated {:.2} over {:.2}",
                    current.position, candidate.1.rating, current.rating
                );
                direction = direction.flipped();
                candidate
            }
        };
        remaining.remove(index);
        walk.push(site);
        current = site;
    }
    walk
}
