//! Fatal load errors and the record of tolerated defects.

use std::fmt;

use thiserror::Error;

use crate::TargetRangeError;

/// Errors that prevent a geography from loading at all.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// The home waypoint is not among the usable waypoints.
    #[error("home waypoint '{0}' is not defined or has no coordinates")]
    UnknownHome(String),
    /// Two entries of the same kind share a name.
    #[error("duplicate {kind} name '{name}'")]
    DuplicateName {
        /// Entry kind, such as `"site"`.
        kind: EntryKind,
        /// The repeated name.
        name: String,
    },
    /// The geography document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse geography JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kind of geography entry a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntryKind {
    /// A drive destination.
    Waypoint,
    /// A region definition.
    Region,
    /// A site definition.
    Site,
    /// A hub listed by a region.
    HubReference,
    /// An entry-hub rule of a region.
    EntryRule,
    /// A site named in a region's explicit order.
    OrderEntry,
    /// A planning role assignment.
    Role,
}

impl EntryKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waypoint => "waypoint",
            Self::Region => "region",
            Self::Site => "site",
            Self::HubReference => "hub reference",
            Self::EntryRule => "entry rule",
            Self::OrderEntry => "order entry",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a malformed entry was left out of the loaded geography.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Latitude or longitude missing or not finite.
    #[error("missing or invalid coordinates")]
    MissingCoordinates,
    /// Refers to a waypoint that does not exist.
    #[error("unknown waypoint '{0}'")]
    UnknownWaypoint(String),
    /// Refers to a region that does not exist.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    /// Refers to a site that does not exist.
    #[error("unknown site '{0}'")]
    UnknownSite(String),
    /// A site was assigned to a region rated as a whole.
    #[error("region '{0}' is manually rated and cannot hold sites")]
    ManualRegion(String),
    /// The region has no usable hub.
    #[error("no usable hub")]
    NoHubs,
    /// The target range could not be parsed.
    #[error(transparent)]
    Target(#[from] TargetRangeError),
}

/// A malformed entry dropped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Kind of the dropped entry.
    pub kind: EntryKind,
    /// Name of the dropped entry, or of its owner for rules and roles.
    pub name: String,
    /// Why the entry was dropped.
    pub reason: SkipReason,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped {} '{}': {}", self.kind, self.name, self.reason)
    }
}
