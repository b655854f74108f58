//! Exclusion flags for regions and sites.

use std::collections::{BTreeSet, HashMap};

/// Names of regions and sites the traveller refuses to visit.
///
/// Deserialises from a name-to-boolean map; only `true` entries are kept, so
/// a missing or `false` entry means "allowed".
///
/// # Examples
/// ```
/// use driftwood_core::Vetoes;
///
/// let vetoes = Vetoes::new().with_veto("Olympic Peninsula");
/// assert!(vetoes.is_vetoed("Olympic Peninsula"));
/// assert!(!vetoes.is_vetoed("NorCal"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "HashMap<String, bool>", into = "HashMap<String, bool>")
)]
pub struct Vetoes {
    names: BTreeSet<String>,
}

impl Vetoes {
    /// Construct an empty veto set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude `name` from planning.
    pub fn veto(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Exclude `name` while returning `self` for chaining.
    #[must_use]
    pub fn with_veto(mut self, name: impl Into<String>) -> Self {
        self.veto(name);
        self
    }

    /// Whether `name` has been excluded.
    #[must_use]
    pub fn is_vetoed(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate the excluded names in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<HashMap<String, bool>> for Vetoes {
    fn from(raw: HashMap<String, bool>) -> Self {
        Self {
            names: raw
                .into_iter()
                .filter_map(|(name, vetoed)| vetoed.then_some(name))
                .collect(),
        }
    }
}

impl From<Vetoes> for HashMap<String, bool> {
    fn from(vetoes: Vetoes) -> Self {
        vetoes.names.into_iter().map(|name| (name, true)).collect()
    }
}
