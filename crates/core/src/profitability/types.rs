//! Profitability data types.

use std::str::FromStr;

use chrono::NaiveDate;
use finstat_shared::types::{CustomerId, OrderId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::Period;
use crate::reports::ReportError;

/// One sold order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueCostLine {
    /// Buying customer.
    pub customer_id: CustomerId,
    /// Product sold.
    pub product_id: ProductId,
    /// Order the line belongs to.
    pub order_id: OrderId,
    /// Order date, used for window filtering by the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    /// Quantity sold.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Cost per unit, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<Decimal>,
}

impl RevenueCostLine {
    /// Quantity times unit price.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// Quantity times unit cost, estimating the unit cost as
    /// `estimated_cost_ratio` of the unit price when it is missing.
    #[must_use]
    pub fn cost(&self, estimated_cost_ratio: Decimal) -> Decimal {
        let unit_cost = self
            .unit_cost
            .unwrap_or(self.unit_price * estimated_cost_ratio);
        self.quantity * unit_cost
    }

    /// Key of the line along a dimension.
    #[must_use]
    pub fn key(&self, dimension: ProfitabilityDimension) -> &str {
        match dimension {
            ProfitabilityDimension::Customer => self.customer_id.as_str(),
            ProfitabilityDimension::Product => self.product_id.as_str(),
        }
    }
}

/// Axis profitability is broken down by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitabilityDimension {
    /// Per customer.
    Customer,
    /// Per product.
    Product,
}

impl std::fmt::Display for ProfitabilityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => f.write_str("customer"),
            Self::Product => f.write_str("product"),
        }
    }
}

impl FromStr for ProfitabilityDimension {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "product" => Ok(Self::Product),
            _ => Err(ReportError::InvalidParameter {
                parameter: "profitability dimension",
                value: s.to_string(),
                expected: "customer or product",
            }),
        }
    }
}

/// Parameters of a profitability run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitabilityQuery {
    /// Axis to break down by.
    pub dimension: ProfitabilityDimension,
    /// Maximum number of rows listed.
    pub limit: usize,
    /// Fraction of unit price assumed as cost when a line has no unit cost.
    pub estimated_cost_ratio: Decimal,
}

/// Gross margin of one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityRow {
    /// Customer or product id.
    pub key: String,
    /// Revenue.
    pub revenue: Decimal,
    /// Actual or estimated cost.
    pub estimated_cost: Decimal,
    /// Revenue minus cost.
    pub gross_profit: Decimal,
    /// Gross profit over revenue, in percent.
    pub gross_profit_margin: Decimal,
    /// Quantity sold.
    pub quantity: Decimal,
    /// Distinct orders.
    pub order_count: usize,
}

/// Totals over every key, ranked or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilitySummary {
    /// Revenue.
    pub total_revenue: Decimal,
    /// Cost.
    pub total_cost: Decimal,
    /// Gross profit.
    pub total_gross_profit: Decimal,
    /// Overall gross margin, in percent.
    pub overall_margin: Decimal,
    /// Keys eligible for ranking.
    pub ranked_keys: usize,
    /// Keys without positive revenue.
    pub excluded_keys: usize,
}

/// Profitability report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityReport {
    /// Axis of the breakdown.
    pub dimension: ProfitabilityDimension,
    /// Window of the order lines.
    pub period: Period,
    /// Keys by gross profit, largest first.
    pub rows: Vec<ProfitabilityRow>,
    /// Totals.
    pub summary: ProfitabilitySummary,
}
