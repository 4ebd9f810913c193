//! Data source collaborator contract.
//!
//! Every report fetches what it needs through this trait once per request.
//! Implementations own connection management and retries; the derivation
//! layer never retries a failed fetch.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::aging::ReceivableInvoice;
use crate::dimension::{Dimension, DimensionValue};
use crate::ledger::{Account, LedgerEntry, Period};
use crate::profitability::RevenueCostLine;

/// Failure reported by a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be reached or read.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// The fetch did not complete in time.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// The store returned data that could not be interpreted.
    #[error("Malformed data: {0}")]
    Malformed(String),
}

/// Read-only access to the ledger, receivables, order lines and budgets.
#[async_trait]
pub trait FinancialDataSource: Send + Sync {
    /// Fetches the chart of accounts.
    async fn fetch_accounts(&self) -> Result<Vec<Account>, SourceError>;

    /// Fetches ledger postings with a voucher date inside the window.
    async fn fetch_ledger_entries(&self, period: Period) -> Result<Vec<LedgerEntry>, SourceError>;

    /// Fetches receivable invoices issued on or before `as_of`.
    async fn fetch_receivables(&self, as_of: NaiveDate)
    -> Result<Vec<ReceivableInvoice>, SourceError>;

    /// Fetches sold order lines inside the window.
    async fn fetch_revenue_cost_lines(
        &self,
        period: Period,
    ) -> Result<Vec<RevenueCostLine>, SourceError>;

    /// Fetches the authored budget target of an account, if one exists.
    async fn fetch_budget_target(&self, account_number: u32)
    -> Result<Option<Decimal>, SourceError>;

    /// Fetches the members of one dimension table.
    async fn fetch_dimension_values(
        &self,
        dimension: Dimension,
    ) -> Result<Vec<DimensionValue>, SourceError>;
}
