//! Ratio data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classifier::Category;
use crate::ledger::Period;
use crate::reports::{BalanceSheetReport, ProfitLossFigures};

/// Statement figures the ratios are computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioInputs {
    /// Current assets.
    pub current_assets: Decimal,
    /// Current liabilities.
    pub current_liabilities: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity.
    pub total_equity: Decimal,
    /// Total revenue.
    pub total_revenue: Decimal,
    /// Total expenses, so that revenue minus expenses is net income.
    pub total_expenses: Decimal,
    /// Inventory balance.
    pub inventory: Decimal,
}

impl RatioInputs {
    /// Derives the inputs from a balance sheet and the P&L of the window ending on its date.
    #[must_use]
    pub fn from_statements(
        balance_sheet: &BalanceSheetReport,
        profit_loss: &ProfitLossFigures,
        inventory: Decimal,
    ) -> Self {
        let subtotal = |category: Category| {
            balance_sheet
                .assets
                .subtotals
                .iter()
                .chain(&balance_sheet.liabilities.subtotals)
                .find(|s| s.category == category)
                .map_or(Decimal::ZERO, |s| s.total)
        };

        Self {
            current_assets: subtotal(Category::CurrentAssets),
            current_liabilities: subtotal(Category::CurrentLiabilities),
            total_assets: balance_sheet.assets.total,
            total_liabilities: balance_sheet.liabilities.total,
            total_equity: balance_sheet.equity.total,
            total_revenue: profit_loss.revenue,
            total_expenses: profit_loss.revenue - profit_loss.net_income,
            inventory,
        }
    }
}

/// Liquidity ratios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityRatios {
    /// Current assets / current liabilities.
    pub current_ratio: Decimal,
    /// (Current assets - inventory) / current liabilities.
    pub quick_ratio: Decimal,
    /// Current assets - current liabilities.
    pub working_capital: Decimal,
}

/// Leverage ratios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverageRatios {
    /// Total liabilities / total equity.
    pub debt_to_equity: Decimal,
    /// Total liabilities / total assets.
    pub debt_ratio: Decimal,
    /// Total equity / total assets.
    pub equity_ratio: Decimal,
}

/// Profitability ratios, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityRatios {
    /// Net income / total assets.
    pub return_on_assets: Decimal,
    /// Net income / total equity.
    pub return_on_equity: Decimal,
    /// Net income / revenue.
    pub profit_margin: Decimal,
    /// Reported equal to the profit margin.
    pub gross_profit_margin: Decimal,
}

/// Efficiency ratios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyRatios {
    /// Revenue / total assets.
    pub asset_turnover: Decimal,
    /// Expenses / inventory.
    pub inventory_turnover: Decimal,
}

/// Qualitative reading of the current ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidityRating {
    /// 2.00 or above.
    Strong,
    /// 1.00 up to 2.00.
    Adequate,
    /// Below 1.00.
    Weak,
}

/// Qualitative reading of debt to equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeverageRating {
    /// Below 0.5.
    Conservative,
    /// 0.5 up to 1.
    Moderate,
    /// 1 or above.
    High,
}

/// Qualitative reading of the profit margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitabilityRating {
    /// Above 20%.
    Excellent,
    /// Above 10%.
    Good,
    /// Above zero.
    Marginal,
    /// Zero or negative.
    Loss,
}

/// Interpretation of the headline ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioInterpretation {
    /// From the current ratio.
    pub liquidity: LiquidityRating,
    /// From debt to equity.
    pub leverage: LeverageRating,
    /// From the profit margin.
    pub profitability: ProfitabilityRating,
}

/// Every ratio group with its interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Liquidity ratios.
    pub liquidity_ratios: LiquidityRatios,
    /// Leverage ratios.
    pub leverage_ratios: LeverageRatios,
    /// Profitability ratios.
    pub profitability_ratios: ProfitabilityRatios,
    /// Efficiency ratios.
    pub efficiency_ratios: EfficiencyRatios,
    /// Interpretation.
    pub interpretation: RatioInterpretation,
}

/// Ratio report over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioReport {
    /// P&L window; the balance sheet is taken as of its end.
    pub period: Period,
    /// Statement figures used.
    pub inputs: RatioInputs,
    /// Computed ratios.
    #[serde(flatten)]
    pub ratios: FinancialRatios,
}
