//! Snapshot document model.

use std::collections::{BTreeMap, BTreeSet};

use finstat_core::aging::ReceivableInvoice;
use finstat_core::dimension::DimensionValue;
use finstat_core::ledger::{Account, LedgerEntry};
use finstat_core::profitability::RevenueCostLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Everything the reports read, captured at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    /// Chart of accounts.
    pub accounts: Vec<Account>,
    /// General-ledger postings.
    pub ledger_entries: Vec<LedgerEntry>,
    /// Receivable invoices.
    pub receivables: Vec<ReceivableInvoice>,
    /// Sold order lines.
    pub revenue_cost_lines: Vec<RevenueCostLine>,
    /// Authored budget targets keyed by account number.
    pub budget_targets: BTreeMap<u32, Decimal>,
    /// Members of every dimension table.
    pub dimension_values: Vec<DimensionValue>,
}

impl Snapshot {
    /// Parses a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the invariants the derivation relies on.
    ///
    /// Postings on accounts missing from the chart are tolerated here; the
    /// report service logs and excludes them.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut numbers = BTreeSet::new();
        for account in &self.accounts {
            if !numbers.insert(account.number) {
                return Err(SnapshotError::Inconsistent(format!(
                    "account {} listed twice",
                    account.number
                )));
            }
        }

        if let Some(entry) = self.ledger_entries.iter().find(|e| e.amount.is_sign_negative()) {
            return Err(SnapshotError::Inconsistent(format!(
                "negative amount {} on account {} dated {}",
                entry.amount, entry.account_number, entry.voucher_date
            )));
        }

        if let Some(line) = self.revenue_cost_lines.iter().find(|l| l.unit_price.is_sign_negative()) {
            return Err(SnapshotError::Inconsistent(format!(
                "negative unit price on order {}",
                line.order_id
            )));
        }
        Ok(())
    }
}
