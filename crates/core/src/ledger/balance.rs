//! Per-account balance accumulation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side on which an account normally carries its balance.
///
/// - Asset/Expense: balance = debit - credit (debit-normal)
/// - Liability/Equity/Revenue: balance = credit - debit (credit-normal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense)
    DebitNormal,
    /// Credit-normal accounts (Liability, Equity, Revenue)
    CreditNormal,
}

impl NormalBalance {
    /// Converts a debit-positive signed total into this side's natural sign.
    #[must_use]
    pub fn natural_sign(self, signed_total: Decimal) -> Decimal {
        match self {
            Self::DebitNormal => signed_total,
            Self::CreditNormal => -signed_total,
        }
    }
}

/// Debit and credit totals for one account over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTotals {
    /// Total debit amount.
    pub debit_total: Decimal,
    /// Total credit amount.
    pub credit_total: Decimal,
    /// Signed balance, debit positive.
    pub balance: Decimal,
}

impl AccountTotals {
    /// Adds a debit amount.
    pub fn add_debit(&mut self, amount: Decimal) {
        self.debit_total += amount;
        self.balance = self.debit_total - self.credit_total;
    }

    /// Adds a credit amount.
    pub fn add_credit(&mut self, amount: Decimal) {
        self.credit_total += amount;
        self.balance = self.debit_total - self.credit_total;
    }
}
