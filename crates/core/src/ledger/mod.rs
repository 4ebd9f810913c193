//! General-ledger data and signed aggregation.
//!
//! This module implements the ledger side of report derivation:
//! - Account master data and the chart index
//! - Ledger postings (debits and credits)
//! - Per-account debit/credit totals
//! - Date windows
//! - Aggregation over a window, account filter, and dimension filter

pub mod account;
pub mod aggregator;
pub mod balance;
pub mod entry;
pub mod period;


pub use account::{Account, ChartOfAccounts};
pub use aggregator::{AccountFilter, Aggregate, AggregationQuery, LedgerAggregator};
pub use balance::{AccountTotals, NormalBalance};
pub use entry::{EntryType, LedgerEntry};
pub use period::Period;
