//! Gross-margin aggregation.

use std::collections::{BTreeMap, BTreeSet};

use finstat_shared::types::{round_display, safe_div};
use rust_decimal::Decimal;

use super::types::{
    ProfitabilityQuery, ProfitabilityReport, ProfitabilityRow, ProfitabilitySummary,
    RevenueCostLine,
};
use crate::ledger::Period;

#[derive(Default)]
struct KeyTotals<'a> {
    revenue: Decimal,
    cost: Decimal,
    quantity: Decimal,
    orders: BTreeSet<&'a str>,
}

/// Aggregates order lines into per-key gross margins.
pub struct ProfitabilityAnalyzer;

impl ProfitabilityAnalyzer {
    /// Analyzes order lines.
    ///
    /// Keys with zero or negative revenue are left out of the ranking but
    /// still count in the summary.
    #[must_use]
    pub fn analyze(
        lines: &[RevenueCostLine],
        period: Period,
        query: &ProfitabilityQuery,
        precision: u32,
    ) -> ProfitabilityReport {
        let round = |value: Decimal| round_display(value, precision);
        let mut by_key: BTreeMap<&str, KeyTotals<'_>> = BTreeMap::new();

        for line in lines {
            let totals = by_key.entry(line.key(query.dimension)).or_default();
            totals.revenue += line.revenue();
            totals.cost += line.cost(query.estimated_cost_ratio);
            totals.quantity += line.quantity;
            totals.orders.insert(line.order_id.as_str());
        }

        let total_revenue: Decimal = by_key.values().map(|t| t.revenue).sum();
        let total_cost: Decimal = by_key.values().map(|t| t.cost).sum();
        let total_gross_profit = total_revenue - total_cost;
        let excluded_keys = by_key.values().filter(|t| t.revenue <= Decimal::ZERO).count();

        let mut rows: Vec<ProfitabilityRow> = by_key
            .into_iter()
            .filter(|(_, t)| t.revenue > Decimal::ZERO)
            .map(|(key, t)| {
                let gross_profit = t.revenue - t.cost;
                ProfitabilityRow {
                    key: key.to_string(),
                    revenue: round(t.revenue),
                    estimated_cost: round(t.cost),
                    gross_profit: round(gross_profit),
                    gross_profit_margin: round(Self::margin(gross_profit, t.revenue)),
                    quantity: t.quantity,
                    order_count: t.orders.len(),
                }
            })
            .collect();
        let ranked_keys = rows.len();

        rows.sort_by(|a, b| b.gross_profit.cmp(&a.gross_profit).then_with(|| a.key.cmp(&b.key)));
        rows.truncate(query.limit);

        ProfitabilityReport {
            dimension: query.dimension,
            period,
            rows,
            summary: ProfitabilitySummary {
                total_revenue: round(total_revenue),
                total_cost: round(total_cost),
                total_gross_profit: round(total_gross_profit),
                overall_margin: round(Self::margin(total_gross_profit, total_revenue)),
                ranked_keys,
                excluded_keys,
            },
        }
    }

    /// Gross profit over revenue in percent; zero without revenue.
    #[must_use]
    pub fn margin(gross_profit: Decimal, revenue: Decimal) -> Decimal {
        if revenue <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        safe_div(gross_profit, revenue) * Decimal::ONE_HUNDRED
    }
}
