//! Profit & loss, balance sheet and trial balance derivation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use finstat_shared::ReportingConfig;
use finstat_shared::types::{is_material, round_display};
use rust_decimal::Decimal;

use super::types::{
    BalanceSheetReport, CategoryTotal, LineItem, PriorPeriodProfitLoss, ProfitLossFigures,
    ProfitLossReport, StatementSection, TrialBalanceLine, TrialBalanceReport, TrialBalanceTotals,
};
use crate::classifier::{Category, Statement};
use crate::ledger::{Account, AccountTotals, Aggregate, ChartOfAccounts, Period};

const ASSET_CATEGORIES: [Category; 2] = [Category::FixedAssets, Category::CurrentAssets];
const LIABILITY_CATEGORIES: [Category; 3] = [
    Category::LongTermLiabilities,
    Category::CurrentLiabilities,
    Category::UntaxedReserves,
];
const EQUITY_CATEGORIES: [Category; 1] = [Category::Equity];

/// Builds statements from aggregated ledger totals.
///
/// Accounts absent from the chart, outside the reportable range or carrying a
/// placeholder name never reach a statement.
pub struct StatementBuilder<'a> {
    chart: &'a ChartOfAccounts,
    config: &'a ReportingConfig,
}

impl<'a> StatementBuilder<'a> {
    /// Creates a builder over one chart of accounts.
    #[must_use]
    pub const fn new(chart: &'a ChartOfAccounts, config: &'a ReportingConfig) -> Self {
        Self { chart, config }
    }

    /// Computes profit & loss figures from an aggregate over a window.
    #[must_use]
    pub fn profit_loss_figures(&self, aggregate: &Aggregate) -> ProfitLossFigures {
        let mut by_category: BTreeMap<Category, Decimal> = BTreeMap::new();
        let mut accounts = Vec::new();

        for (account, totals) in self.reportable(aggregate) {
            let category = account.category();
            if category.statement() != Statement::ProfitAndLoss {
                continue;
            }
            *by_category.entry(category).or_default() += totals.balance;
            if is_material(totals.balance, self.config.materiality) {
                accounts.push(self.line_item(account, category.display_amount(totals.balance)));
            }
        }

        let signed = |category: Category| by_category.get(&category).copied().unwrap_or_default();
        let revenue = -signed(Category::Revenue);
        let cost_of_goods_sold = signed(Category::CostOfGoodsSold);
        let operating_expenses = signed(Category::OperatingExpenses);
        let financial_items = signed(Category::FinancialItems);
        let other_income_expense = signed(Category::OtherIncomeExpense);
        let extraordinary_items = signed(Category::ExtraordinaryItems);

        let gross_profit = revenue - cost_of_goods_sold;
        let operating_income = gross_profit - operating_expenses;
        let net_income = revenue
            - (cost_of_goods_sold
                + operating_expenses
                + financial_items.abs()
                + other_income_expense.abs()
                + extraordinary_items.abs());

        ProfitLossFigures {
            revenue: self.round(revenue),
            cost_of_goods_sold: self.round(cost_of_goods_sold),
            gross_profit: self.round(gross_profit),
            operating_expenses: self.round(operating_expenses),
            operating_income: self.round(operating_income),
            financial_items: self.round(financial_items),
            other_income_expense: self.round(other_income_expense),
            extraordinary_items: self.round(extraordinary_items),
            net_income: self.round(net_income),
            accounts,
        }
    }

    /// Builds a profit & loss report, optionally with a comparison window.
    #[must_use]
    pub fn profit_and_loss(
        &self,
        period: Period,
        aggregate: &Aggregate,
        prior: Option<(Period, &Aggregate)>,
    ) -> ProfitLossReport {
        ProfitLossReport {
            period,
            figures: self.profit_loss_figures(aggregate),
            prior_period: prior.map(|(prior_period, prior_aggregate)| PriorPeriodProfitLoss {
                period: prior_period,
                figures: self.profit_loss_figures(prior_aggregate),
            }),
        }
    }

    /// Builds a balance sheet from an aggregate running from inception to `as_of`.
    ///
    /// Imbalances are reported through `is_balanced`; figures are never adjusted.
    #[must_use]
    pub fn balance_sheet(
        &self,
        as_of: NaiveDate,
        aggregate: &Aggregate,
        include_zero: bool,
    ) -> BalanceSheetReport {
        let assets = self.section(aggregate, &ASSET_CATEGORIES, include_zero);
        let liabilities = self.section(aggregate, &LIABILITY_CATEGORIES, include_zero);
        let equity = self.section(aggregate, &EQUITY_CATEGORIES, include_zero);

        let balance_check = assets.total - liabilities.total - equity.total;
        let is_balanced = balance_check.abs() < self.config.balance_tolerance;

        BalanceSheetReport {
            as_of_date: as_of,
            assets: self.rounded(assets),
            liabilities: self.rounded(liabilities),
            equity: self.rounded(equity),
            balance_check: self.round(balance_check),
            is_balanced,
        }
    }

    /// Builds a trial balance from an aggregate running from inception to `as_of`.
    ///
    /// Every chart account with activity is listed, reportable or not.
    #[must_use]
    pub fn trial_balance(&self, as_of: NaiveDate, aggregate: &Aggregate) -> TrialBalanceReport {
        let accounts: Vec<TrialBalanceLine> = aggregate
            .iter()
            .filter_map(|(number, totals)| {
                self.chart.get(*number).map(|account| TrialBalanceLine {
                    account_number: account.number,
                    account_name: account.name.clone(),
                    category: account.category(),
                    total_debit: totals.debit_total,
                    total_credit: totals.credit_total,
                    balance: totals.balance,
                })
            })
            .collect();

        let total_debit: Decimal = accounts.iter().map(|a| a.total_debit).sum();
        let total_credit: Decimal = accounts.iter().map(|a| a.total_credit).sum();

        TrialBalanceReport {
            as_of_date: as_of,
            accounts,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: total_debit == total_credit,
            },
        }
    }

    /// Reportable accounts present in the aggregate, in account-number order.
    pub(crate) fn reportable<'b>(
        &'b self,
        aggregate: &'b Aggregate,
    ) -> impl Iterator<Item = (&'a Account, &'b AccountTotals)> + 'b {
        aggregate
            .iter()
            .filter_map(|(number, totals)| self.chart.reportable(*number).map(|a| (a, totals)))
    }

    pub(crate) fn line_item(&self, account: &Account, amount: Decimal) -> LineItem {
        LineItem {
            account_number: account.number,
            account_name: account.name.clone(),
            category: account.category(),
            amount: self.round(amount),
        }
    }

    pub(crate) fn round(&self, value: Decimal) -> Decimal {
        round_display(value, self.config.precision)
    }

    pub(crate) fn rounded(&self, section: StatementSection) -> StatementSection {
        StatementSection {
            total: self.round(section.total),
            accounts: section.accounts,
            subtotals: section
                .subtotals
                .into_iter()
                .map(|s| CategoryTotal {
                    category: s.category,
                    total: self.round(s.total),
                })
                .collect(),
        }
    }

    fn section(
        &self,
        aggregate: &Aggregate,
        categories: &[Category],
        include_zero: bool,
    ) -> StatementSection {
        let mut section = StatementSection::default();
        let mut subtotals: BTreeMap<Category, Decimal> = BTreeMap::new();

        for account in self.chart.reportable_accounts() {
            let category = account.category();
            if !categories.contains(&category) {
                continue;
            }
            let signed = aggregate.get(&account.number).map(|t| t.balance);
            let amount = category.display_amount(signed.unwrap_or_default());

            section.total += amount;
            if signed.is_some() || include_zero {
                *subtotals.entry(category).or_default() += amount;
            }

            let listed = if amount.is_zero() {
                include_zero
            } else {
                is_material(amount, self.config.materiality)
            };
            if listed {
                section.accounts.push(self.line_item(account, amount));
            }
        }

        section.subtotals = categories
            .iter()
            .filter_map(|category| {
                subtotals.get(category).map(|total| CategoryTotal {
                    category: *category,
                    total: *total,
                })
            })
            .collect();
        section
    }
}
