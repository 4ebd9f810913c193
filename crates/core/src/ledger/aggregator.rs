//! Signed aggregation of ledger postings.

use std::collections::{BTreeMap, BTreeSet};

use finstat_shared::config::AccountRange;
use rust_decimal::Decimal;

use super::balance::AccountTotals;
use super::entry::LedgerEntry;
use super::period::Period;
use crate::dimension::{Dimension, DimensionFilter};

/// Aggregated totals keyed by account number.
pub type Aggregate = BTreeMap<u32, AccountTotals>;

/// Restricts which accounts take part in an aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccountFilter {
    /// Every account.
    #[default]
    All,
    /// Accounts inside an inclusive number range.
    Range(AccountRange),
    /// An explicit set of account numbers.
    Only(BTreeSet<u32>),
}

impl AccountFilter {
    /// Returns true if the account passes the filter.
    #[must_use]
    pub fn matches(&self, account_number: u32) -> bool {
        match self {
            Self::All => true,
            Self::Range(range) => range.contains(account_number),
            Self::Only(numbers) => numbers.contains(&account_number),
        }
    }
}

/// Parameters of one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct AggregationQuery {
    /// Date window, bounds inclusive.
    pub period: Period,
    /// Account restriction.
    pub accounts: AccountFilter,
    /// Dimension restriction.
    pub dimensions: DimensionFilter,
}

impl AggregationQuery {
    /// Creates a query over a window with no other restriction.
    #[must_use]
    pub fn new(period: Period) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Restricts the accounts.
    #[must_use]
    pub fn with_accounts(mut self, accounts: AccountFilter) -> Self {
        self.accounts = accounts;
        self
    }

    /// Restricts the dimension tags.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: DimensionFilter) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Returns true if the posting is selected by this query.
    #[must_use]
    pub fn selects(&self, entry: &LedgerEntry) -> bool {
        self.period.contains(entry.voucher_date)
            && self.accounts.matches(entry.account_number)
            && self.dimensions.matches(entry)
    }
}

/// Sums signed ledger amounts per account.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Aggregates every selected posting into per-account totals.
    ///
    /// All postings contribute regardless of size; materiality is only applied
    /// when line items are listed.
    #[must_use]
    pub fn aggregate(entries: &[LedgerEntry], query: &AggregationQuery) -> Aggregate {
        let mut aggregate = Aggregate::new();
        for entry in entries.iter().filter(|e| query.selects(e)) {
            Self::post(aggregate.entry(entry.account_number).or_default(), entry);
        }
        aggregate
    }

    /// Aggregates selected postings grouped by their value for one dimension.
    ///
    /// Postings without a tag for `dimension` are grouped under `None`.
    #[must_use]
    pub fn aggregate_by_dimension(
        entries: &[LedgerEntry],
        query: &AggregationQuery,
        dimension: Dimension,
    ) -> BTreeMap<Option<String>, Aggregate> {
        let mut groups: BTreeMap<Option<String>, Aggregate> = BTreeMap::new();
        for entry in entries.iter().filter(|e| query.selects(e)) {
            let key = entry.tag(dimension).map(str::to_string);
            let totals = groups
                .entry(key)
                .or_default()
                .entry(entry.account_number)
                .or_default();
            Self::post(totals, entry);
        }
        groups
    }

    /// Reduces an aggregate to signed totals per account.
    #[must_use]
    pub fn signed_totals(aggregate: &Aggregate) -> BTreeMap<u32, Decimal> {
        aggregate
            .iter()
            .map(|(number, totals)| (*number, totals.balance))
            .collect()
    }

    fn post(totals: &mut AccountTotals, entry: &LedgerEntry) {
        if entry.is_credit {
            totals.add_credit(entry.amount);
        } else {
            totals.add_debit(entry.amount);
        }
    }
}
