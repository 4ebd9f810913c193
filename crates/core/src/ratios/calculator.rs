//! Ratio formulas.

use finstat_shared::types::{round_display, safe_div};
use rust_decimal::Decimal;

use super::types::{
    EfficiencyRatios, FinancialRatios, LeverageRating, LeverageRatios, LiquidityRating,
    LiquidityRatios, ProfitabilityRating, ProfitabilityRatios, RatioInputs, RatioInterpretation,
};

/// Computes ratios from statement figures.
///
/// Every division is guarded: a zero denominator yields zero.
pub struct RatioCalculator;

impl RatioCalculator {
    /// Computes every ratio group, rounded to `precision` decimal places.
    ///
    /// Interpretation reads the unrounded ratios; rounding is for display only.
    #[must_use]
    pub fn calculate(inputs: &RatioInputs, precision: u32) -> FinancialRatios {
        let round = |value: Decimal| round_display(value, precision);
        let percent = |value: Decimal| round(value * Decimal::ONE_HUNDRED);
        let net_income = inputs.total_revenue - inputs.total_expenses;

        let current_ratio = safe_div(inputs.current_assets, inputs.current_liabilities);
        let debt_to_equity = safe_div(inputs.total_liabilities, inputs.total_equity);
        let margin = safe_div(net_income, inputs.total_revenue);

        let liquidity_ratios = LiquidityRatios {
            current_ratio: round(current_ratio),
            quick_ratio: round(safe_div(
                inputs.current_assets - inputs.inventory,
                inputs.current_liabilities,
            )),
            working_capital: round(inputs.current_assets - inputs.current_liabilities),
        };

        let leverage_ratios = LeverageRatios {
            debt_to_equity: round(debt_to_equity),
            debt_ratio: round(safe_div(inputs.total_liabilities, inputs.total_assets)),
            equity_ratio: round(safe_div(inputs.total_equity, inputs.total_assets)),
        };

        let profit_margin = percent(margin);
        let profitability_ratios = ProfitabilityRatios {
            return_on_assets: percent(safe_div(net_income, inputs.total_assets)),
            return_on_equity: percent(safe_div(net_income, inputs.total_equity)),
            profit_margin,
            gross_profit_margin: profit_margin,
        };

        let efficiency_ratios = EfficiencyRatios {
            asset_turnover: round(safe_div(inputs.total_revenue, inputs.total_assets)),
            inventory_turnover: round(safe_div(inputs.total_expenses, inputs.inventory)),
        };

        let interpretation = RatioInterpretation {
            liquidity: Self::rate_liquidity(current_ratio),
            leverage: Self::rate_leverage(debt_to_equity),
            profitability: Self::rate_profitability(margin * Decimal::ONE_HUNDRED),
        };

        FinancialRatios {
            liquidity_ratios,
            leverage_ratios,
            profitability_ratios,
            efficiency_ratios,
            interpretation,
        }
    }

    /// Rates a current ratio: 2 and above is Strong, above 1 is Adequate.
    #[must_use]
    pub fn rate_liquidity(current_ratio: Decimal) -> LiquidityRating {
        if current_ratio >= Decimal::TWO {
            LiquidityRating::Strong
        } else if current_ratio > Decimal::ONE {
            LiquidityRating::Adequate
        } else {
            LiquidityRating::Weak
        }
    }

    /// Rates a debt to equity ratio.
    #[must_use]
    pub fn rate_leverage(debt_to_equity: Decimal) -> LeverageRating {
        if debt_to_equity < Decimal::new(5, 1) {
            LeverageRating::Conservative
        } else if debt_to_equity < Decimal::ONE {
            LeverageRating::Moderate
        } else {
            LeverageRating::High
        }
    }

    /// Rates a profit margin given in percent.
    #[must_use]
    pub fn rate_profitability(profit_margin_pct: Decimal) -> ProfitabilityRating {
        if profit_margin_pct > Decimal::from(20) {
            ProfitabilityRating::Excellent
        } else if profit_margin_pct > Decimal::TEN {
            ProfitabilityRating::Good
        } else if profit_margin_pct > Decimal::ZERO {
            ProfitabilityRating::Marginal
        } else {
            ProfitabilityRating::Loss
        }
    }
}
