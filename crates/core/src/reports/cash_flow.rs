//! Indirect cash flow derivation.

use finstat_shared::ReportingConfig;
use finstat_shared::types::is_material;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::statements::StatementBuilder;
use super::types::{CashFlowReport, StatementSection};
use crate::classifier::Category;
use crate::ledger::{Aggregate, ChartOfAccounts, Period};

/// Cash flow activity an account's movement is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CashFlowActivity {
    /// Day-to-day operations; the default.
    Operating,
    /// Purchase and sale of fixed assets.
    Investing,
    /// Long-term borrowing and repayment.
    Financing,
}

impl CashFlowActivity {
    /// Maps a category to its activity.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::FixedAssets => Self::Investing,
            Category::LongTermLiabilities => Self::Financing,
            _ => Self::Operating,
        }
    }
}

/// Builds cash flow reports from the movements of non-cash accounts.
pub struct CashFlowBuilder<'a> {
    statements: StatementBuilder<'a>,
    config: &'a ReportingConfig,
}

impl<'a> CashFlowBuilder<'a> {
    /// Creates a builder over one chart of accounts.
    #[must_use]
    pub const fn new(chart: &'a ChartOfAccounts, config: &'a ReportingConfig) -> Self {
        Self {
            statements: StatementBuilder::new(chart, config),
            config,
        }
    }

    /// Builds the report from an aggregate over the window.
    ///
    /// Every debit on a non-cash account is a use of cash and every credit a
    /// source, so an account's flow is its negated signed total. Cash and bank
    /// accounts are only used to check the result.
    #[must_use]
    pub fn build(&self, period: Period, aggregate: &Aggregate) -> CashFlowReport {
        let mut operating = StatementSection::default();
        let mut investing = StatementSection::default();
        let mut financing = StatementSection::default();
        let mut cash_account_change = Decimal::ZERO;

        for (account, totals) in self.statements.reportable(aggregate) {
            if self.config.cash_accounts.contains(account.number) {
                cash_account_change += totals.balance;
                continue;
            }

            let flow = -totals.balance;
            let section = match CashFlowActivity::for_category(account.category()) {
                CashFlowActivity::Operating => &mut operating,
                CashFlowActivity::Investing => &mut investing,
                CashFlowActivity::Financing => &mut financing,
            };
            section.total += flow;
            if is_material(flow, self.config.materiality) {
                section.accounts.push(self.statements.line_item(account, flow));
            }
        }

        let net_cash_flow = operating.total + investing.total + financing.total;
        let reconciles = (net_cash_flow - cash_account_change).abs() < self.config.balance_tolerance;

        CashFlowReport {
            period,
            operating_activities: self.statements.rounded(operating),
            investing_activities: self.statements.rounded(investing),
            financing_activities: self.statements.rounded(financing),
            net_cash_flow: self.statements.round(net_cash_flow),
            cash_account_change: self.statements.round(cash_account_change),
            reconciles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Category::FixedAssets, CashFlowActivity::Investing)]
    #[case(Category::LongTermLiabilities, CashFlowActivity::Financing)]
    #[case(Category::Revenue, CashFlowActivity::Operating)]
    #[case(Category::OperatingExpenses, CashFlowActivity::Operating)]
    #[case(Category::CurrentLiabilities, CashFlowActivity::Operating)]
    #[case(Category::Equity, CashFlowActivity::Operating)]
    fn test_activity_for_category(#[case] category: Category, #[case] expected: CashFlowActivity) {
        assert_eq!(CashFlowActivity::for_category(category), expected);
    }
}
