//! Data source serving a loaded snapshot.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use finstat_core::aging::ReceivableInvoice;
use finstat_core::dimension::{Dimension, DimensionValue};
use finstat_core::ledger::{Account, LedgerEntry, Period};
use finstat_core::profitability::RevenueCostLine;
use finstat_core::{FinancialDataSource, SourceError};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::SnapshotError;
use crate::model::Snapshot;

/// Serves one immutable snapshot to any number of reports.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Arc<Snapshot>,
}

impl SnapshotSource {
    /// Wraps an already validated snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        Ok(Self {
            snapshot: Arc::new(snapshot),
        })
    }

    /// Reads and validates a snapshot file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let snapshot = Snapshot::from_json(&json)?;
        info!(
            path = %path.display(),
            accounts = snapshot.accounts.len(),
            entries = snapshot.ledger_entries.len(),
            "Snapshot loaded"
        );
        Ok(Self {
            snapshot: Arc::new(snapshot),
        })
    }

    /// Returns the served snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait]
impl FinancialDataSource for SnapshotSource {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, SourceError> {
        Ok(self.snapshot.accounts.clone())
    }

    async fn fetch_ledger_entries(&self, period: Period) -> Result<Vec<LedgerEntry>, SourceError> {
        Ok(self
            .snapshot
            .ledger_entries
            .iter()
            .filter(|e| period.contains(e.voucher_date))
            .cloned()
            .collect())
    }

    async fn fetch_receivables(
        &self,
        as_of: NaiveDate,
    ) -> Result<Vec<ReceivableInvoice>, SourceError> {
        Ok(self
            .snapshot
            .receivables
            .iter()
            .filter(|i| i.invoice_date <= as_of)
            .cloned()
            .collect())
    }

    async fn fetch_revenue_cost_lines(
        &self,
        period: Period,
    ) -> Result<Vec<RevenueCostLine>, SourceError> {
        Ok(self
            .snapshot
            .revenue_cost_lines
            .iter()
            .filter(|l| l.order_date.is_none_or(|d| period.contains(d)))
            .cloned()
            .collect())
    }

    async fn fetch_budget_target(
        &self,
        account_number: u32,
    ) -> Result<Option<Decimal>, SourceError> {
        Ok(self.snapshot.budget_targets.get(&account_number).copied())
    }

    async fn fetch_dimension_values(
        &self,
        dimension: Dimension,
    ) -> Result<Vec<DimensionValue>, SourceError> {
        Ok(self
            .snapshot
            .dimension_values
            .iter()
            .filter(|v| v.dimension == dimension)
            .cloned()
            .collect())
    }
}
