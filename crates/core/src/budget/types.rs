//! Budget variance types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classifier::AccountType;
use crate::ledger::Period;

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Favorable variance (under budget for expenses, over target for revenue).
    Favorable,
    /// Unfavorable variance (over budget for expenses, under target for revenue).
    Unfavorable,
    /// On budget (no variance).
    OnBudget,
}

/// Variance of one actual against one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceResult {
    /// Actual minus budget.
    pub variance: Decimal,
    /// Variance over |budget|, in percent; zero without a budget.
    pub variance_percentage: Decimal,
    /// Status given the account's polarity.
    pub status: VarianceStatus,
}

/// One account's actual against its budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceRow {
    /// Account number.
    pub account_number: u32,
    /// Account name.
    pub account_name: String,
    /// Broad account type (revenue, expense, ...).
    pub account_type: AccountType,
    /// Actual amount in the account's natural sign.
    pub actual_amount: Decimal,
    /// Budget target.
    pub budget_amount: Decimal,
    /// Actual minus budget.
    pub variance: Decimal,
    /// Variance in percent of |budget|.
    pub variance_percentage: Decimal,
    /// Favorable, unfavorable or on budget.
    pub variance_status: VarianceStatus,
}

/// Net result over every compared account: revenue counts positive and
/// expenses negative, so a positive net variance is favorable overall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceSummary {
    /// Accounts with a budget target.
    pub accounts_compared: usize,
    /// Actual revenue minus actual expenses.
    pub net_actual: Decimal,
    /// Budgeted revenue minus budgeted expenses.
    pub net_budget: Decimal,
    /// Net actual minus net budget.
    pub net_variance: Decimal,
    /// Favorable accounts.
    pub favorable_count: usize,
    /// Unfavorable accounts.
    pub unfavorable_count: usize,
}

/// Budget variance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceReport {
    /// Window of the actuals.
    pub period: Period,
    /// Rows below this absolute percentage were dropped.
    pub threshold_pct: Decimal,
    /// Rows in account order.
    pub rows: Vec<VarianceRow>,
    /// Totals, including dropped rows.
    pub summary: VarianceSummary,
}
