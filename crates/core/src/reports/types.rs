//! Report data types.
//!
//! Every report has a fixed schema; field names serialize in camelCase.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classifier::Category;
use crate::dimension::Dimension;
use crate::ledger::Period;

/// One account line in a statement section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Account number.
    pub account_number: u32,
    /// Account name.
    pub account_name: String,
    /// Statement category.
    pub category: Category,
    /// Amount in presentation sign.
    pub amount: Decimal,
}

/// Subtotal of one category inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// Category.
    pub category: Category,
    /// Category total.
    pub total: Decimal,
}

/// A titled group of line items with its total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSection {
    /// Section total, including suppressed immaterial accounts.
    pub total: Decimal,
    /// Listed accounts.
    pub accounts: Vec<LineItem>,
    /// Per-category subtotals.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtotals: Vec<CategoryTotal>,
}

/// Profit & loss figures for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossFigures {
    /// Revenue, presented positive.
    pub revenue: Decimal,
    /// Cost of goods sold.
    pub cost_of_goods_sold: Decimal,
    /// Revenue minus cost of goods sold.
    pub gross_profit: Decimal,
    /// Operating expenses.
    pub operating_expenses: Decimal,
    /// Gross profit minus operating expenses.
    pub operating_income: Decimal,
    /// Net financial items (debit positive).
    pub financial_items: Decimal,
    /// Net other income/expense (debit positive).
    pub other_income_expense: Decimal,
    /// Net extraordinary items (debit positive).
    pub extraordinary_items: Decimal,
    /// Net income.
    pub net_income: Decimal,
    /// Listed accounts.
    pub accounts: Vec<LineItem>,
}

/// Profit & loss for a comparison period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorPeriodProfitLoss {
    /// Comparison window.
    pub period: Period,
    /// Figures over that window.
    #[serde(flatten)]
    pub figures: ProfitLossFigures,
}

/// Profit & loss report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossReport {
    /// Reporting window.
    pub period: Period,
    /// Figures over the window.
    #[serde(flatten)]
    pub figures: ProfitLossFigures,
    /// Side-by-side comparison period, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_period: Option<PriorPeriodProfitLoss>,
}

/// Balance sheet report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetReport {
    /// Balances are cumulative up to and including this date.
    pub as_of_date: NaiveDate,
    /// Fixed and current assets.
    pub assets: StatementSection,
    /// Long-term and current liabilities plus untaxed reserves, presented positive.
    pub liabilities: StatementSection,
    /// Equity, presented positive.
    pub equity: StatementSection,
    /// Assets minus liabilities minus equity.
    pub balance_check: Decimal,
    /// Whether the balance check is within tolerance.
    pub is_balanced: bool,
}

/// Cash flow report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    /// Reporting window.
    pub period: Period,
    /// Operating activities; inflows positive.
    pub operating_activities: StatementSection,
    /// Investing activities.
    pub investing_activities: StatementSection,
    /// Financing activities.
    pub financing_activities: StatementSection,
    /// Sum of the three activity totals.
    pub net_cash_flow: Decimal,
    /// Net movement on cash and bank accounts.
    pub cash_account_change: Decimal,
    /// Whether net cash flow matches the cash account movement.
    pub reconciles: bool,
}

/// One account in a trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceLine {
    /// Account number.
    pub account_number: u32,
    /// Account name.
    pub account_name: String,
    /// Statement category.
    pub category: Category,
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Debit-positive balance.
    pub balance: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceReport {
    /// As of date.
    pub as_of_date: NaiveDate,
    /// Account balances.
    pub accounts: Vec<TrialBalanceLine>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

/// One dimension value's slice of a dimensional report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionalReportRow {
    /// Tagged value, or `None` for untagged postings.
    pub key: Option<String>,
    /// Display name from the dimension catalog.
    pub name: String,
    /// Parent key from the dimension catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    /// Account balances in presentation sign.
    pub accounts: Vec<LineItem>,
    /// Row total (debit positive).
    pub total: Decimal,
}

/// Dimensional report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionalReport {
    /// Reporting window.
    pub period: Period,
    /// Dimension grouped by.
    pub dimension: Dimension,
    /// Report data rows.
    pub rows: Vec<DimensionalReportRow>,
    /// Grand total (debit positive).
    pub grand_total: Decimal,
}
