//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report derivation settings.
    pub reporting: ReportingConfig,
    /// Snapshot data source settings.
    pub snapshot: SnapshotConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Inclusive range of account numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AccountRange {
    /// First account number in the range.
    pub first: u32,
    /// Last account number in the range.
    pub last: u32,
}

impl AccountRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Returns true if the account number falls in this range.
    #[must_use]
    pub const fn contains(&self, account_number: u32) -> bool {
        account_number >= self.first && account_number <= self.last
    }
}

/// Settings that shape report derivation and presentation.
///
/// Passed explicitly into every report call; nothing here is process-wide.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Decimal places used when rounding ratios and percentages.
    pub precision: u32,
    /// Aggregates with an absolute value below this are hidden from line items.
    pub materiality: Decimal,
    /// Maximum |assets - liabilities - equity| for a balanced balance sheet.
    pub balance_tolerance: Decimal,
    /// Row limit used when a caller gives none.
    pub default_limit: usize,
    /// Fraction of unit price assumed as cost when a line carries no unit cost.
    pub estimated_cost_ratio: Decimal,
    /// Cash and bank accounts.
    pub cash_accounts: AccountRange,
    /// Inventory accounts.
    pub inventory_accounts: AccountRange,
    /// Drop null fields from serialized output.
    pub omit_nulls: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            materiality: Decimal::new(1, 2),
            balance_tolerance: Decimal::new(1, 2),
            default_limit: 50,
            estimated_cost_ratio: Decimal::new(6, 1),
            cash_accounts: AccountRange::new(1900, 1999),
            inventory_accounts: AccountRange::new(1400, 1499),
            omit_nulls: false,
        }
    }
}

/// Snapshot data source configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path of the JSON snapshot used when none is given on the command line.
    pub path: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: "snapshot.json".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "finstat=info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINSTAT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ReportingConfig::default();
        assert_eq!(config.precision, 2);
        assert_eq!(config.materiality, dec!(0.01));
        assert_eq!(config.balance_tolerance, dec!(0.01));
        assert_eq!(config.estimated_cost_ratio, dec!(0.6));
        assert!(config.cash_accounts.contains(1930));
        assert!(!config.cash_accounts.contains(1899));
        assert!(config.inventory_accounts.contains(1460));
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(["FINSTAT__REPORTING__PRECISION", "RUN_MODE"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.reporting.precision, 2);
            assert_eq!(config.logging.filter, "finstat=info");
            assert_eq!(config.snapshot.path, "snapshot.json");
        });
    }

    #[test]
    fn test_load_env_override() {
        temp_env::with_vars(
            [
                ("FINSTAT__REPORTING__PRECISION", Some("4")),
                ("FINSTAT__SNAPSHOT__PATH", Some("/tmp/ledger.json")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.reporting.precision, 4);
                assert_eq!(config.snapshot.path, "/tmp/ledger.json");
            },
        );
    }
}
