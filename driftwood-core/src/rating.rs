//! Desirability ratings for sites and manually rated regions.
//!
//! The planner never computes ratings. A collaborator turns live river
//! readings into a value in `0.0..=5.0`; this module only stores and looks
//! them up.

use std::collections::HashMap;

/// Highest rating a site or region can carry.
pub const MAX_RATING: f32 = 5.0;

/// Look up the desirability of a named site or manual region.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so what-if plans can
/// be built in parallel. Returning `None` means "not rated"; callers treat
/// that as `0.0` via [`RatingSource::rating_or_unrated`].
///
/// # Examples
///
/// ```rust
/// use driftwood_core::RatingSource;
///
/// struct Flat;
///
/// impl RatingSource for Flat {
///     fn rating(&self, _name: &str) -> Option<f32> {
///         Some(3.0)
///     }
/// }
///
/// assert_eq!(Flat.rating_or_unrated("Chetco"), 3.0);
/// ```
pub trait RatingSource: Send + Sync {
    /// Rating for `name`, if the source knows it.
    fn rating(&self, name: &str) -> Option<f32>;

    /// Rating for `name`, with unrated entries reported as `0.0`.
    fn rating_or_unrated(&self, name: &str) -> f32 {
        self.rating(name).map_or(0.0, sanitise)
    }
}

fn sanitise(rating: f32) -> f32 {
    if !rating.is_finite() {
        return 0.0;
    }
    rating.clamp(0.0, MAX_RATING)
}

/// An in-memory rating table keyed by site or region name.
///
/// Values are sanitised on insertion, so every stored rating is finite and
/// inside `0.0..=5.0`.
///
/// # Examples
/// ```
/// use driftwood_core::{RatingSource, Ratings};
///
/// let ratings = Ratings::new()
///     .with_rating("Chetco", 4.2)
///     .with_rating("Elk", 7.0);
/// assert_eq!(ratings.get("Chetco"), Some(4.2));
/// assert_eq!(ratings.get("Elk"), Some(5.0));
/// assert_eq!(ratings.rating_or_unrated("Sixes"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "HashMap<String, f32>", into = "HashMap<String, f32>")
)]
pub struct Ratings {
    values: HashMap<String, f32>,
}

impl Ratings {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored rating for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Insert or update a rating. Values are clamped into `0.0..=5.0`.
    pub fn set_rating(&mut self, name: impl Into<String>, rating: f32) {
        self.values.insert(name.into(), sanitise(rating));
    }

    /// Add a rating while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, name: impl Into<String>, rating: f32) -> Self {
        self.set_rating(name, rating);
        self
    }

    /// Number of rated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no entry is rated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, f32>> for Ratings {
    fn from(raw: HashMap<String, f32>) -> Self {
        raw.into_iter()
            .fold(Self::new(), |ratings, (name, rating)| {
                ratings.with_rating(name, rating)
            })
    }
}

impl From<Ratings> for HashMap<String, f32> {
    fn from(ratings: Ratings) -> Self {
        ratings.values
    }
}

impl RatingSource for Ratings {
    fn rating(&self, name: &str) -> Option<f32> {
        self.get(name)
    }
}
