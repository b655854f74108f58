//! The engine's output: a chronological list of itinerary rows.
//!
//! Each row carries a structured [`Activity`]. Display layers that only want
//! the closed label vocabulary (`START:`, `DRIVE:`, `FISH:`, `RETURN:`,
//! `BAIL:`) can rely on [`Activity`]'s `Display` implementation.

use std::fmt;

use chrono::NaiveDate;

/// How much of a day a visit occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VisitKind {
    /// A planned full day at a sequenced site.
    Full,
    /// An afternoon visit sharing the day with a drive.
    HalfDay,
    /// A leftover day spent at the best nearby option.
    Filler,
}

/// Which part of the journey home a return row covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReturnLeg {
    /// The whole drive home in one day.
    Direct,
    /// First half of a two-day return.
    First,
    /// Second half of a two-day return, arriving home.
    Second,
}

/// Coarse row category, the tag of an [`Activity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// Trip start marker.
    Start,
    /// Repositioning drive.
    Drive,
    /// Fishing or visiting a site.
    Fish,
    /// Drive home.
    Return,
    /// Nothing worth doing; the trip is abandoned.
    Bail,
}

impl ActivityKind {
    /// Label prefix used by display layers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "START:",
            Self::Drive => "DRIVE:",
            Self::Fish => "FISH:",
            Self::Return => "RETURN:",
            Self::Bail => "BAIL:",
        }
    }
}

/// What the traveller does on an itinerary row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Activity {
    /// Leave home.
    Start,
    /// Drive between two waypoints.
    Drive {
        /// Departure waypoint name.
        from: String,
        /// Arrival waypoint name.
        to: String,
    },
    /// Fish a site, or a manual region as a whole.
    Fish {
        /// Site or region name.
        spot: String,
        /// Share of the day spent there.
        visit: VisitKind,
    },
    /// Drive home, possibly split across two days.
    Return {
        /// Portion of the return covered by this row.
        leg: ReturnLeg,
    },
    /// Abandon the trip.
    Bail {
        /// Human-readable explanation.
        reason: String,
    },
}

impl Activity {
    /// The row category.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Start => ActivityKind::Start,
            Self::Drive { .. } => ActivityKind::Drive,
            Self::Fish { .. } => ActivityKind::Fish,
            Self::Return { .. } => ActivityKind::Return,
            Self::Bail { .. } => ActivityKind::Bail,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind().label();
        match self {
            Self::Start => write!(f, "{label} Leave home"),
            Self::Drive { from, to } => write!(f, "{label} {from} -> {to}"),
            Self::Fish { spot, visit } => match visit {
                VisitKind::Full => write!(f, "{label} {spot}"),
                VisitKind::HalfDay => write!(f, "{label} {spot} (half day)"),
                VisitKind::Filler => write!(f, "{label} {spot} (filler)"),
            },
            Self::Return { leg } => match leg {
                ReturnLeg::Direct => write!(f, "{label} Drive home"),
                ReturnLeg::First => write!(f, "{label} Drive home (day 1 of 2)"),
                ReturnLeg::Second => write!(f, "{label} Drive home (day 2 of 2)"),
            },
            Self::Bail { reason } => write!(f, "{label} {reason}"),
        }
    }
}

/// One line of the day-by-day plan.
///
/// Drive rows carry the leg's distance, time and fuel cost; every other row
/// is zero on all three.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryRow {
    /// Calendar date of the row.
    pub date: NaiveDate,
    /// Waypoint name the traveller is at once the row is done.
    pub location: String,
    /// What happens on this row.
    pub activity: Activity,
    /// Road miles driven.
    pub miles: f64,
    /// Hours behind the wheel.
    pub hours: f64,
    /// Estimated fuel cost.
    pub cost: f64,
}

impl ItineraryRow {
    /// A row that involves no driving.
    #[must_use]
    pub fn stationary(date: NaiveDate, location: impl Into<String>, activity: Activity) -> Self {
        Self {
            date,
            location: location.into(),
            activity,
            miles: 0.0,
            hours: 0.0,
            cost: 0.0,
        }
    }

    /// The display label for the row's activity.
    #[must_use]
    pub fn label(&self) -> String {
        self.activity.to_string()
    }
}

/// A complete plan plus the day allocation it was built from.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Rows in chronological order.
    pub rows: Vec<ItineraryRow>,
    /// Region name to planned days, in visiting order.
    pub allocation: Vec<(String, u32)>,
}

impl Itinerary {
    /// Date of the final row, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|row| row.date)
    }

    /// Total road miles across all rows.
    #[must_use]
    pub fn total_miles(&self) -> f64 {
        self.rows.iter().map(|row| row.miles).sum()
    }

    /// Total estimated fuel cost across all rows.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.rows.iter().map(|row| row.cost).sum()
    }

    /// Rows whose activity is of the given kind.
    pub fn rows_of(&self, kind: ActivityKind) -> impl Iterator<Item = &ItineraryRow> {
        self.rows
            .iter()
            .filter(move |row| row.activity.kind() == kind)
    }
}
