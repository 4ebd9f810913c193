//! Application-wide error types.

use serde::Serialize;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// An enumerated parameter is outside its fixed value set.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The upstream data feed failed.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Structured error result returned to callers instead of a crash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Stable error kind.
    pub kind: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl AppError {
    /// Returns the stable error kind.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::DataUnavailable(_) => "DATA_UNAVAILABLE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Converts the error into its structured body.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.error_code(),
            message: self.to_string(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::InvalidParameter(String::new()), "INVALID_PARAMETER")]
    #[case(AppError::DataUnavailable(String::new()), "DATA_UNAVAILABLE")]
    #[case(AppError::NotFound(String::new()), "NOT_FOUND")]
    #[case(AppError::Configuration(String::new()), "CONFIGURATION_ERROR")]
    #[case(AppError::Internal(String::new()), "INTERNAL_ERROR")]
    fn test_error_codes(#[case] err: AppError, #[case] code: &str) {
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::InvalidParameter("msg".into()).to_string(),
            "Invalid parameter: msg"
        );
        assert_eq!(
            AppError::DataUnavailable("msg".into()).to_string(),
            "Data unavailable: msg"
        );
        assert_eq!(
            AppError::Configuration("msg".into()).to_string(),
            "Configuration error: msg"
        );
    }

    #[test]
    fn test_error_body() {
        let body = AppError::DataUnavailable("fetch_accounts: timeout".into()).to_body();
        assert_eq!(body.kind, "DATA_UNAVAILABLE");
        assert_eq!(body.message, "Data unavailable: fetch_accounts: timeout");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["kind"], "DATA_UNAVAILABLE");
    }
}
