//! Per-request report orchestration.
//!
//! Each call validates its parameters, fetches one snapshot from the data
//! source, and runs the pure builders over it. A failed fetch fails only that
//! call.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use finstat_shared::ReportingConfig;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::aging::{AgingEngine, AgingQuery, AgingReport};
use crate::budget::{VarianceAnalyzer, VarianceReport};
use crate::classifier::Statement;
use crate::dimension::{Dimension, DimensionTable};
use crate::ledger::{
    Aggregate, AggregationQuery, ChartOfAccounts, LedgerAggregator, LedgerEntry, Period,
};
use crate::profitability::{
    ProfitabilityAnalyzer, ProfitabilityDimension, ProfitabilityQuery, ProfitabilityReport,
};
use crate::ratios::{RatioCalculator, RatioInputs, RatioReport};
use crate::reports::{
    BalanceSheetReport, CashFlowBuilder, CashFlowReport, DimensionalBuilder, DimensionalReport,
    ProfitLossReport, ReportError, StatementBuilder, TrialBalanceReport,
};
use crate::source::FinancialDataSource;

/// Runs reports against a data source.
pub struct ReportService<S> {
    source: S,
    config: ReportingConfig,
}

impl<S: FinancialDataSource> ReportService<S> {
    /// Creates a service over a data source.
    #[must_use]
    pub const fn new(source: S, config: ReportingConfig) -> Self {
        Self { source, config }
    }

    /// Returns the data source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the reporting configuration.
    #[must_use]
    pub const fn config(&self) -> &ReportingConfig {
        &self.config
    }

    /// Profit & loss over `period`, with an optional comparison window.
    #[instrument(skip(self))]
    pub async fn profit_and_loss(
        &self,
        period: Period,
        prior: Option<Period>,
    ) -> Result<ProfitLossReport, ReportError> {
        period.validate()?;
        if let Some(prior) = &prior {
            prior.validate()?;
        }

        let chart = self.chart().await?;
        let entries = self.entries(&chart, period).await?;
        let prior_aggregate = match prior {
            Some(prior) => {
                let prior_entries = self.entries(&chart, prior).await?;
                Some((prior, Self::aggregate(&prior_entries, prior)))
            }
            None => None,
        };

        let report = StatementBuilder::new(&chart, &self.config).profit_and_loss(
            period,
            &Self::aggregate(&entries, period),
            prior_aggregate.as_ref().map(|(p, a)| (*p, a)),
        );
        info!(net_income = %report.figures.net_income, "Profit and loss generated");
        Ok(report)
    }

    /// Balance sheet as of a date, cumulative since inception.
    #[instrument(skip(self))]
    pub async fn balance_sheet(
        &self,
        as_of: NaiveDate,
        include_zero: bool,
    ) -> Result<BalanceSheetReport, ReportError> {
        let period = Period::through(as_of);
        let chart = self.chart().await?;
        let entries = self.entries(&chart, period).await?;

        let report = StatementBuilder::new(&chart, &self.config).balance_sheet(
            as_of,
            &Self::aggregate(&entries, period),
            include_zero,
        );
        if !report.is_balanced {
            warn!(balance_check = %report.balance_check, "Balance sheet does not balance");
        }
        Ok(report)
    }

    /// Cash flow over `period`.
    #[instrument(skip(self))]
    pub async fn cash_flow(&self, period: Period) -> Result<CashFlowReport, ReportError> {
        period.validate()?;
        let chart = self.chart().await?;
        let entries = self.entries(&chart, period).await?;

        let report = CashFlowBuilder::new(&chart, &self.config)
            .build(period, &Self::aggregate(&entries, period));
        if !report.reconciles {
            warn!(
                net_cash_flow = %report.net_cash_flow,
                cash_account_change = %report.cash_account_change,
                "Cash flow does not reconcile with cash accounts"
            );
        }
        Ok(report)
    }

    /// Ratios from the P&L over `period` and the balance sheet as of its end.
    #[instrument(skip(self))]
    pub async fn ratios(&self, period: Period) -> Result<RatioReport, ReportError> {
        period.validate()?;
        let as_of = period.to.ok_or_else(|| ReportError::InvalidParameter {
            parameter: "period end",
            value: period.to_string(),
            expected: "a closing date",
        })?;

        let cumulative = Period::through(as_of);
        let chart = self.chart().await?;
        let entries = self.entries(&chart, cumulative).await?;
        let balances = Self::aggregate(&entries, cumulative);

        let builder = StatementBuilder::new(&chart, &self.config);
        let balance_sheet = builder.balance_sheet(as_of, &balances, false);
        let profit_loss = builder.profit_loss_figures(&Self::aggregate(&entries, period));
        let inventory: Decimal = balances
            .iter()
            .filter(|(number, _)| self.config.inventory_accounts.contains(**number))
            .filter(|(number, _)| chart.reportable(**number).is_some())
            .map(|(_, totals)| totals.balance)
            .sum();

        let inputs = RatioInputs::from_statements(&balance_sheet, &profit_loss, inventory);
        let ratios = RatioCalculator::calculate(&inputs, self.config.precision);
        Ok(RatioReport {
            period,
            inputs,
            ratios,
        })
    }

    /// Trial balance as of a date.
    #[instrument(skip(self))]
    pub async fn trial_balance(&self, as_of: NaiveDate) -> Result<TrialBalanceReport, ReportError> {
        let period = Period::through(as_of);
        let chart = self.chart().await?;
        let entries = self.entries(&chart, period).await?;

        let report = StatementBuilder::new(&chart, &self.config)
            .trial_balance(as_of, &Self::aggregate(&entries, period));
        if !report.totals.is_balanced {
            warn!(
                total_debit = %report.totals.total_debit,
                total_credit = %report.totals.total_credit,
                "Trial balance does not balance"
            );
        }
        Ok(report)
    }

    /// Account balances per value of one dimension over `period`.
    ///
    /// `dimension` accepts `R1`..`R12` or `1`..`12`.
    #[instrument(skip(self))]
    pub async fn dimensional(
        &self,
        dimension: &str,
        period: Period,
    ) -> Result<DimensionalReport, ReportError> {
        let dimension: Dimension = dimension.parse()?;
        period.validate()?;

        let chart = self.chart().await?;
        let entries = self.entries(&chart, period).await?;
        let members = self
            .source
            .fetch_dimension_values(dimension)
            .await
            .map_err(|e| ReportError::unavailable("fetch_dimension_values", e))?;
        debug!(count = members.len(), %dimension, "Fetched dimension values");

        let table = DimensionTable::from_members(dimension, members);
        let groups = LedgerAggregator::aggregate_by_dimension(
            &entries,
            &AggregationQuery::new(period),
            dimension,
        );
        Ok(DimensionalBuilder::new(&chart, &self.config).build(
            period,
            dimension,
            &groups,
            Some(&table),
        ))
    }

    /// Receivables aging as of a date.
    #[instrument(skip(self))]
    pub async fn aging(
        &self,
        as_of: NaiveDate,
        include_paid: bool,
        limit: Option<usize>,
    ) -> Result<AgingReport, ReportError> {
        let invoices = self
            .source
            .fetch_receivables(as_of)
            .await
            .map_err(|e| ReportError::unavailable("fetch_receivables", e))?;
        debug!(count = invoices.len(), "Fetched receivables");

        let mut query = AgingQuery::new(as_of, limit.unwrap_or(self.config.default_limit));
        if include_paid {
            query = query.including_paid();
        }
        let report = AgingEngine::age(&invoices, &query, self.config.precision);
        info!(
            total_outstanding = %report.summary.total_outstanding,
            risk_level = ?report.summary.risk_level,
            "Aging generated"
        );
        Ok(report)
    }

    /// Gross margin by customer or product over `period`.
    ///
    /// `dimension` accepts `customer` or `product`.
    #[instrument(skip(self))]
    pub async fn profitability(
        &self,
        dimension: &str,
        period: Period,
        limit: Option<usize>,
    ) -> Result<ProfitabilityReport, ReportError> {
        let dimension: ProfitabilityDimension = dimension.parse()?;
        period.validate()?;

        let lines = self
            .source
            .fetch_revenue_cost_lines(period)
            .await
            .map_err(|e| ReportError::unavailable("fetch_revenue_cost_lines", e))?;
        debug!(count = lines.len(), "Fetched revenue and cost lines");

        let query = ProfitabilityQuery {
            dimension,
            limit: limit.unwrap_or(self.config.default_limit),
            estimated_cost_ratio: self.config.estimated_cost_ratio,
        };
        Ok(ProfitabilityAnalyzer::analyze(
            &lines,
            period,
            &query,
            self.config.precision,
        ))
    }

    /// Actual against budget per P&L account over `period`.
    #[instrument(skip(self))]
    pub async fn variance(
        &self,
        period: Period,
        threshold_pct: Decimal,
    ) -> Result<VarianceReport, ReportError> {
        if threshold_pct.is_sign_negative() {
            return Err(ReportError::InvalidParameter {
                parameter: "threshold",
                value: threshold_pct.to_string(),
                expected: "a non-negative percentage",
            });
        }
        period.validate()?;

        let chart = self.chart().await?;
        let entries = self.entries(&chart, period).await?;

        let mut budget = BTreeMap::new();
        for account in chart
            .reportable_accounts()
            .filter(|a| a.category().statement() == Statement::ProfitAndLoss)
        {
            let target = self
                .source
                .fetch_budget_target(account.number)
                .await
                .map_err(|e| ReportError::unavailable("fetch_budget_target", e))?;
            if let Some(target) = target {
                budget.insert(account.number, target);
            }
        }
        debug!(count = budget.len(), "Fetched budget targets");

        let actual = LedgerAggregator::signed_totals(&Self::aggregate(&entries, period));
        let (rows, summary) = VarianceAnalyzer::compare(
            &actual,
            &budget,
            &chart,
            threshold_pct,
            self.config.precision,
        );
        Ok(VarianceReport {
            period,
            threshold_pct,
            rows,
            summary,
        })
    }

    async fn chart(&self) -> Result<ChartOfAccounts, ReportError> {
        let accounts = self
            .source
            .fetch_accounts()
            .await
            .map_err(|e| ReportError::unavailable("fetch_accounts", e))?;
        debug!(count = accounts.len(), "Fetched accounts");
        Ok(ChartOfAccounts::new(accounts))
    }

    /// Fetches postings in the window, dropping those on accounts missing from the chart.
    async fn entries(
        &self,
        chart: &ChartOfAccounts,
        period: Period,
    ) -> Result<Vec<LedgerEntry>, ReportError> {
        let mut entries = self
            .source
            .fetch_ledger_entries(period)
            .await
            .map_err(|e| ReportError::unavailable("fetch_ledger_entries", e))?;
        debug!(count = entries.len(), "Fetched ledger entries");

        let unknown: BTreeSet<u32> = entries
            .iter()
            .map(|e| e.account_number)
            .filter(|n| chart.get(*n).is_none())
            .collect();
        if !unknown.is_empty() {
            warn!(accounts = ?unknown, "Ledger entries reference unknown accounts; excluded");
            entries.retain(|e| !unknown.contains(&e.account_number));
        }
        Ok(entries)
    }

    fn aggregate(entries: &[LedgerEntry], period: Period) -> Aggregate {
        LedgerAggregator::aggregate(entries, &AggregationQuery::new(period))
    }
}
