//! Category projection of an occurrence set.

use std::fmt;
use std::str::FromStr;

use upkeep_core::MaintenanceCategory;

use crate::recurrence::Occurrence;

/// Filter selection of the calendar view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MaintenanceCategory),
}

impl CategoryFilter {
    pub fn matches(&self, occurrence: &Occurrence) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => occurrence.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "ALL"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Occurrences matching `filter`, order preserved. `All` is the identity.
pub fn project(occurrences: &[Occurrence], filter: CategoryFilter) -> Vec<Occurrence> {
    occurrences
        .iter()
        .filter(|o| filter.matches(o))
        .cloned()
        .collect()
}
