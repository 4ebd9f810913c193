//! Statement categories and their accounting properties.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::balance::NormalBalance;

/// Statement category derived from an account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Sales and other operating revenue.
    Revenue,
    /// Cost of goods sold.
    CostOfGoodsSold,
    /// Operating expenses.
    OperatingExpenses,
    /// Financial income and expense.
    FinancialItems,
    /// Other income and expense.
    OtherIncomeExpense,
    /// Extraordinary items, appropriations and tax.
    ExtraordinaryItems,
    /// Fixed (non-current) assets.
    FixedAssets,
    /// Current assets, including cash and inventory.
    CurrentAssets,
    /// Equity.
    Equity,
    /// Untaxed reserves.
    UntaxedReserves,
    /// Long-term liabilities and loans.
    LongTermLiabilities,
    /// Current liabilities.
    CurrentLiabilities,
    /// Anything outside the classification table.
    Other,
}

/// Statement a category reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Statement {
    /// Profit & loss.
    ProfitAndLoss,
    /// Balance sheet.
    BalanceSheet,
    /// Not part of any statement.
    Unreported,
}

/// Direction in which a positive variance is good news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// More than budget is favorable.
    RevenueNatured,
    /// More than budget is unfavorable.
    ExpenseNatured,
}

impl Polarity {
    /// Signs a natural-sign amount for netting: revenue positive, expenses negative.
    #[must_use]
    pub fn net_sign(self, amount: Decimal) -> Decimal {
        match self {
            Self::RevenueNatured => amount,
            Self::ExpenseNatured => -amount,
        }
    }
}

/// Broad account type reported next to variance rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Revenue.
    Revenue,
    /// Any expense category.
    Expense,
    /// Fixed or current asset.
    Asset,
    /// Equity.
    Equity,
    /// Liability or untaxed reserve.
    Liability,
    /// Outside the classification table.
    Other,
}

impl Category {
    /// Every category, in statement order.
    pub const ALL: [Self; 13] = [
        Self::Revenue,
        Self::CostOfGoodsSold,
        Self::OperatingExpenses,
        Self::FinancialItems,
        Self::OtherIncomeExpense,
        Self::ExtraordinaryItems,
        Self::FixedAssets,
        Self::CurrentAssets,
        Self::Equity,
        Self::UntaxedReserves,
        Self::LongTermLiabilities,
        Self::CurrentLiabilities,
        Self::Other,
    ];

    /// Returns the statement this category belongs to.
    #[must_use]
    pub const fn statement(self) -> Statement {
        match self {
            Self::Revenue
            | Self::CostOfGoodsSold
            | Self::OperatingExpenses
            | Self::FinancialItems
            | Self::OtherIncomeExpense
            | Self::ExtraordinaryItems => Statement::ProfitAndLoss,
            Self::FixedAssets
            | Self::CurrentAssets
            | Self::Equity
            | Self::UntaxedReserves
            | Self::LongTermLiabilities
            | Self::CurrentLiabilities => Statement::BalanceSheet,
            Self::Other => Statement::Unreported,
        }
    }

    /// Returns the side on which accounts of this category normally carry their balance.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Revenue
            | Self::Equity
            | Self::UntaxedReserves
            | Self::LongTermLiabilities
            | Self::CurrentLiabilities => NormalBalance::CreditNormal,
            _ => NormalBalance::DebitNormal,
        }
    }

    /// Returns the variance polarity, or `None` for non-P&L categories.
    #[must_use]
    pub const fn polarity(self) -> Option<Polarity> {
        match self {
            Self::Revenue => Some(Polarity::RevenueNatured),
            Self::CostOfGoodsSold
            | Self::OperatingExpenses
            | Self::FinancialItems
            | Self::OtherIncomeExpense
            | Self::ExtraordinaryItems => Some(Polarity::ExpenseNatured),
            _ => None,
        }
    }

    /// Converts a debit-positive signed total into presentation sign.
    ///
    /// Credit-normal categories are negated so that revenue, liabilities and
    /// equity read positive.
    #[must_use]
    pub fn display_amount(self, signed_total: Decimal) -> Decimal {
        self.normal_balance().natural_sign(signed_total)
    }

    /// Returns the broad account type.
    #[must_use]
    pub const fn account_type(self) -> AccountType {
        match self {
            Self::Revenue => AccountType::Revenue,
            Self::CostOfGoodsSold
            | Self::OperatingExpenses
            | Self::FinancialItems
            | Self::OtherIncomeExpense
            | Self::ExtraordinaryItems => AccountType::Expense,
            Self::FixedAssets | Self::CurrentAssets => AccountType::Asset,
            Self::Equity => AccountType::Equity,
            Self::UntaxedReserves | Self::LongTermLiabilities | Self::CurrentLiabilities => {
                AccountType::Liability
            }
            Self::Other => AccountType::Other,
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::CostOfGoodsSold => "Cost of Goods Sold",
            Self::OperatingExpenses => "Operating Expenses",
            Self::FinancialItems => "Financial Items",
            Self::OtherIncomeExpense => "Other Income/Expense",
            Self::ExtraordinaryItems => "Extraordinary Items",
            Self::FixedAssets => "Fixed Assets",
            Self::CurrentAssets => "Current Assets",
            Self::Equity => "Equity",
            Self::UntaxedReserves => "Untaxed Reserves",
            Self::LongTermLiabilities => "Long-term Liabilities",
            Self::CurrentLiabilities => "Current Liabilities",
            Self::Other => "Other",
        }
    }
}
