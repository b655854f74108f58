//! Visitable sites (rivers) and their static attributes.

use std::fmt;
use std::str::FromStr;

use geo::Coord;
use thiserror::Error;

use crate::{RegionId, WaypointId};

/// Index of a [`Site`] inside a loaded [`Geography`](crate::Geography).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SiteId(pub(crate) usize);

impl SiteId {
    /// Position of the site in its geography's table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Hydrological behaviour of a site's basin.
///
/// The engine carries this through untouched; rating collaborators use it to
/// model how quickly a river clears after a storm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Basin {
    /// Rises and clears within a day or two.
    Flashy,
    /// Moderate colour lag.
    #[default]
    Mixed,
    /// Slow to clear after high water.
    Sedimentary,
    /// Snow- or glacier-fed, long colour lag.
    Glacial,
}

impl Basin {
    /// Return the basin category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flashy => "flashy",
            Self::Mixed => "mixed",
            Self::Sedimentary => "sedimentary",
            Self::Glacial => "glacial",
        }
    }
}

impl fmt::Display for Basin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when parsing a [`TargetRange`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetRangeError {
    /// The text did not contain a `low-high` pair.
    #[error("target range '{0}' is not of the form 'low-high'")]
    Malformed(String),
    /// One of the bounds was not a finite number.
    #[error("target range '{0}' contains a non-numeric bound")]
    NotNumeric(String),
    /// The lower bound exceeded the upper bound.
    #[error("target range '{0}' has its lower bound above its upper bound")]
    Inverted(String),
}

/// The reading interval in which a site is "in condition".
///
/// Parsed from strings such as `"1500-7500 cfs"` or `"3.6-5.6 ft"`; the unit
/// suffix is optional and ignored.
///
/// # Examples
/// ```
/// use driftwood_core::TargetRange;
///
/// let range: TargetRange = "1500-7500 cfs".parse().unwrap();
/// assert_eq!(range.low(), 1500.0);
/// assert!(range.contains(3000.0));
/// assert!(!range.contains(9000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRange {
    low: f64,
    high: f64,
}

impl TargetRange {
    /// Lower bound of the in-condition interval.
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the in-condition interval.
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Whether `reading` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, reading: f64) -> bool {
        (self.low..=self.high).contains(&reading)
    }
}

impl FromStr for TargetRange {
    type Err = TargetRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        let stripped = lowered.replace("cfs", "").replace("ft", "");
        let (low_text, high_text) = stripped
            .trim()
            .split_once('-')
            .ok_or_else(|| TargetRangeError::Malformed(s.to_owned()))?;
        let parse = |text: &str| {
            text.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| TargetRangeError::NotNumeric(s.to_owned()))
        };
        let low = parse(low_text)?;
        let high = parse(high_text)?;
        if low > high {
            return Err(TargetRangeError::Inverted(s.to_owned()));
        }
        Ok(Self { low, high })
    }
}

/// A specific destination inside a region, typically one river.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub(crate) id: SiteId,
    pub(crate) name: String,
    pub(crate) region: RegionId,
    pub(crate) target: TargetRange,
    pub(crate) hard_minimum: Option<f64>,
    pub(crate) basin: Basin,
    pub(crate) location: Coord<f64>,
    pub(crate) hub: WaypointId,
    pub(crate) position: usize,
}

impl Site {
    /// Identifier within the owning geography.
    #[must_use]
    pub const fn id(&self) -> SiteId {
        self.id
    }

    /// Display name; ratings and vetoes are keyed by it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region the site belongs to.
    #[must_use]
    pub const fn region(&self) -> RegionId {
        self.region
    }

    /// In-condition reading interval.
    #[must_use]
    pub const fn target(&self) -> TargetRange {
        self.target
    }

    /// Reading below which the site is unusable, if any.
    #[must_use]
    pub const fn hard_minimum(&self) -> Option<f64> {
        self.hard_minimum
    }

    /// Basin behaviour category.
    #[must_use]
    pub const fn basin(&self) -> Basin {
        self.basin
    }

    /// River-mouth or reach position (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Hub waypoint the traveller stays at while fishing this site.
    #[must_use]
    pub const fn hub(&self) -> WaypointId {
        self.hub
    }

    /// Index in the region's directional (south to north) order.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1500-7500 cfs", 1500.0, 7500.0)]
    #[case("3.6-5.6 ft", 3.6, 5.6)]
    #[case(" 250 - 900 CFS ", 250.0, 900.0)]
    #[case("400-400", 400.0, 400.0)]
    fn parses_target_ranges(#[case] text: &str, #[case] low: f64, #[case] high: f64) {
        let range: TargetRange = text.parse().expect("valid range");
        assert!((range.low() - low).abs() < 1e-9);
        assert!((range.high() - high).abs() < 1e-9);
    }

    #[rstest]
    #[case("", TargetRangeError::Malformed(String::new()))]
    #[case("lots of water", TargetRangeError::Malformed("lots of water".into()))]
    #[case("abc-def", TargetRangeError::NotNumeric("abc-def".into()))]
    #[case("900-250 cfs", TargetRangeError::Inverted("900-250 cfs".into()))]
    fn rejects_malformed_ranges(#[case] text: &str, #[case] expected: TargetRangeError) {
        let err = text.parse::<TargetRange>().expect_err("malformed range");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn contains_is_inclusive() {
        let range: TargetRange = "300-1200 cfs".parse().expect("valid range");
        assert!(range.contains(300.0));
        assert!(range.contains(1200.0));
        assert!(!range.contains(299.9));
    }

    #[test]
    fn basin_display_matches_as_str() {
        assert_eq!(Basin::Sedimentary.to_string(), Basin::Sedimentary.as_str());
    }
}
