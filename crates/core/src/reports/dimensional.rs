//! Per-dimension breakdown of account balances.

use std::collections::BTreeMap;

use finstat_shared::ReportingConfig;
use finstat_shared::types::is_material;
use rust_decimal::Decimal;

use super::statements::StatementBuilder;
use super::types::{DimensionalReport, DimensionalReportRow};
use crate::dimension::{Dimension, DimensionMember, DimensionTable};
use crate::ledger::{Aggregate, ChartOfAccounts, Period};

/// Label of the row collecting postings without a tag.
pub const UNTAGGED_LABEL: &str = "Untagged";

/// Builds dimensional reports from per-value aggregates.
pub struct DimensionalBuilder<'a> {
    statements: StatementBuilder<'a>,
    config: &'a ReportingConfig,
}

impl<'a> DimensionalBuilder<'a> {
    /// Creates a builder over one chart of accounts.
    #[must_use]
    pub const fn new(chart: &'a ChartOfAccounts, config: &'a ReportingConfig) -> Self {
        Self {
            statements: StatementBuilder::new(chart, config),
            config,
        }
    }

    /// Builds the report.
    ///
    /// Tagged rows come first in key order, followed by the untagged row. Keys
    /// missing from `table` are labelled with the key itself.
    #[must_use]
    pub fn build(
        &self,
        period: Period,
        dimension: Dimension,
        groups: &BTreeMap<Option<String>, Aggregate>,
        table: Option<&DimensionTable>,
    ) -> DimensionalReport {
        let mut rows: Vec<DimensionalReportRow> = groups
            .iter()
            .filter(|(key, _)| key.is_some())
            .chain(groups.get_key_value(&None))
            .map(|(key, aggregate)| self.row(key.as_deref(), aggregate, table))
            .collect();
        rows.retain(|row| !row.accounts.is_empty() || !row.total.is_zero());

        let grand_total: Decimal = rows.iter().map(|row| row.total).sum();

        DimensionalReport {
            period,
            dimension,
            rows,
            grand_total: self.statements.round(grand_total),
        }
    }

    fn row(
        &self,
        key: Option<&str>,
        aggregate: &Aggregate,
        table: Option<&DimensionTable>,
    ) -> DimensionalReportRow {
        let member = key.and_then(|k| table.and_then(|t| t.lookup(k)));
        let mut total = Decimal::ZERO;
        let mut accounts = Vec::new();

        for (account, totals) in self.statements.reportable(aggregate) {
            total += totals.balance;
            if is_material(totals.balance, self.config.materiality) {
                let amount = account.category().display_amount(totals.balance);
                accounts.push(self.statements.line_item(account, amount));
            }
        }

        DimensionalReportRow {
            key: key.map(str::to_string),
            name: member
                .map(|m| m.name().to_string())
                .or_else(|| key.map(str::to_string))
                .unwrap_or_else(|| UNTAGGED_LABEL.to_string()),
            parent_key: member.and_then(|m| m.parent_key().map(str::to_string)),
            accounts,
            total: self.statements.round(total),
        }
    }
}
