//! Report error types.

use chrono::NaiveDate;
use finstat_shared::AppError;
use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The upstream data feed failed; not retried here.
    #[error("Data unavailable from {operation}: {source}")]
    DataUnavailable {
        /// Collaborator operation that failed.
        operation: &'static str,
        /// Underlying failure.
        #[source]
        source: SourceError,
    },

    /// An enumerated parameter is outside its fixed value set.
    #[error("Invalid {parameter}: '{value}' (expected {expected})")]
    InvalidParameter {
        /// Parameter name.
        parameter: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl ReportError {
    /// Wraps a collaborator failure with the name of the failed operation.
    #[must_use]
    pub const fn unavailable(operation: &'static str, source: SourceError) -> Self {
        Self::DataUnavailable { operation, source }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::DataUnavailable { .. } => Self::DataUnavailable(err.to_string()),
            ReportError::InvalidParameter { .. } | ReportError::InvalidDateRange { .. } => {
                Self::InvalidParameter(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_unavailable_names_operation() {
        let err = ReportError::unavailable(
            "fetch_ledger_entries",
            SourceError::Timeout("5s elapsed".into()),
        );
        assert_eq!(
            err.to_string(),
            "Data unavailable from fetch_ledger_entries: Timed out: 5s elapsed"
        );
        let app: AppError = err.into();
        assert_eq!(app.error_code(), "DATA_UNAVAILABLE");
    }

    #[test]
    fn test_invalid_parameter_maps_to_app_error() {
        let err = ReportError::InvalidParameter {
            parameter: "dimension",
            value: "region".into(),
            expected: "customer, product",
        };
        assert_eq!(err.to_string(), "Invalid dimension: 'region' (expected customer, product)");
        let app: AppError = err.into();
        assert_eq!(app.error_code(), "INVALID_PARAMETER");
    }
}
