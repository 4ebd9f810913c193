//! Dimensional filtering for reports.

use serde::{Deserialize, Serialize};

use super::catalog::Dimension;
use crate::ledger::LedgerEntry;

/// A single dimension value to filter on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTag {
    /// Dimension.
    pub dimension: Dimension,
    /// Tagged value.
    pub value: String,
}

/// Filter for dimensional queries.
///
/// Values of the same dimension are alternatives; different dimensions must all match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DimensionFilter {
    /// Filter by specific dimension values.
    pub dimension_values: Vec<DimensionTag>,
    /// Include postings that carry no tag for a filtered dimension.
    pub include_untagged: bool,
}

impl DimensionFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dimension value to the filter.
    #[must_use]
    pub fn with_value(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        self.dimension_values.push(DimensionTag {
            dimension,
            value: value.into(),
        });
        self
    }

    /// Sets whether to include untagged postings.
    #[must_use]
    pub const fn include_untagged(mut self, include: bool) -> Self {
        self.include_untagged = include;
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimension_values.is_empty()
    }

    /// Returns true if the posting passes the filter.
    #[must_use]
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        Dimension::ALL.iter().all(|&dimension| {
            let mut wanted = self
                .dimension_values
                .iter()
                .filter(|tag| tag.dimension == dimension)
                .peekable();
            if wanted.peek().is_none() {
                return true;
            }
            match entry.tag(dimension) {
                Some(value) => wanted.any(|tag| tag.value == value),
                None => self.include_untagged,
            }
        })
    }
}
