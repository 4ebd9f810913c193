//! Budget variance calculations.

use std::collections::BTreeMap;

use finstat_shared::types::{round_display, safe_div};
use rust_decimal::Decimal;

use super::types::{VarianceResult, VarianceRow, VarianceStatus, VarianceSummary};
use crate::classifier::Polarity;
use crate::ledger::ChartOfAccounts;

/// Compares actuals with budget targets.
pub struct VarianceAnalyzer;

impl VarianceAnalyzer {
    /// Calculates variance for one account.
    ///
    /// variance = actual - budget. For revenue-natured accounts a positive
    /// variance is favorable; for expense-natured accounts it is unfavorable.
    #[must_use]
    pub fn calculate_variance(budget: Decimal, actual: Decimal, polarity: Polarity) -> VarianceResult {
        let variance = actual - budget;
        let variance_percentage = safe_div(variance, budget.abs()) * Decimal::ONE_HUNDRED;

        let status = if variance.is_zero() {
            VarianceStatus::OnBudget
        } else {
            match (polarity, variance > Decimal::ZERO) {
                (Polarity::RevenueNatured, true) | (Polarity::ExpenseNatured, false) => {
                    VarianceStatus::Favorable
                }
                (Polarity::RevenueNatured, false) | (Polarity::ExpenseNatured, true) => {
                    VarianceStatus::Unfavorable
                }
            }
        };

        VarianceResult {
            variance,
            variance_percentage,
            status,
        }
    }

    /// Compares signed actuals with budget targets per account.
    ///
    /// Only accounts with a target, a reportable chart entry and a P&L
    /// polarity are compared. Rows whose absolute variance percentage is
    /// below `threshold_pct` are dropped from the rows but kept in the summary.
    #[must_use]
    pub fn compare(
        actual_signed: &BTreeMap<u32, Decimal>,
        budget: &BTreeMap<u32, Decimal>,
        chart: &ChartOfAccounts,
        threshold_pct: Decimal,
        precision: u32,
    ) -> (Vec<VarianceRow>, VarianceSummary) {
        let round = |value: Decimal| round_display(value, precision);
        let mut rows = Vec::new();
        let mut summary = VarianceSummary::default();

        for (number, target) in budget {
            let Some(account) = chart.reportable(*number) else {
                continue;
            };
            let category = account.category();
            let Some(polarity) = category.polarity() else {
                continue;
            };

            let actual =
                category.display_amount(actual_signed.get(number).copied().unwrap_or_default());
            let result = Self::calculate_variance(*target, actual, polarity);

            summary.accounts_compared += 1;
            summary.net_actual += polarity.net_sign(actual);
            summary.net_budget += polarity.net_sign(*target);
            match result.status {
                VarianceStatus::Favorable => summary.favorable_count += 1,
                VarianceStatus::Unfavorable => summary.unfavorable_count += 1,
                VarianceStatus::OnBudget => {}
            }

            if result.variance_percentage.abs() < threshold_pct {
                continue;
            }
            rows.push(VarianceRow {
                account_number: account.number,
                account_name: account.name.clone(),
                account_type: category.account_type(),
                actual_amount: round(actual),
                budget_amount: round(*target),
                variance: round(result.variance),
                variance_percentage: round(result.variance_percentage),
                variance_status: result.status,
            });
        }

        summary.net_variance = round(summary.net_actual - summary.net_budget);
        summary.net_actual = round(summary.net_actual);
        summary.net_budget = round(summary.net_budget);
        (rows, summary)
    }
}
