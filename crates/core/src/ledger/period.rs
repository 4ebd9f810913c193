//! Inclusive date windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reports::ReportError;

/// Inclusive date window; a missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// First date included.
    pub from: Option<NaiveDate>,
    /// Last date included.
    pub to: Option<NaiveDate>,
}

impl Period {
    /// Creates a window from optional bounds.
    #[must_use]
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Creates a closed window.
    #[must_use]
    pub const fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(Some(from), Some(to))
    }

    /// Everything up to and including `to` (cumulative since inception).
    #[must_use]
    pub const fn through(to: NaiveDate) -> Self {
        Self::new(None, Some(to))
    }

    /// Returns true if the date falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Rejects windows whose start is after their end.
    pub fn validate(&self) -> Result<(), ReportError> {
        match (self.from, self.to) {
            (Some(start), Some(end)) if start > end => {
                Err(ReportError::InvalidDateRange { start, end })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.from, self.to) {
            (Some(from), Some(to)) => write!(f, "{from}..={to}"),
            (Some(from), None) => write!(f, "{from}.."),
            (None, Some(to)) => write!(f, "..={to}"),
            (None, None) => f.write_str(".."),
        }
    }
}
