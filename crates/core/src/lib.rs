//! Core derivation logic for finstat.
//!
//! This crate turns general-ledger postings and account master data into
//! standardized financial reports. It performs no I/O: every report is a pure
//! transform over a snapshot fetched through [`source::FinancialDataSource`].
//!
//! # Modules
//!
//! - `classifier` - Account number to statement category mapping
//! - `ledger` - Accounts, postings, and signed aggregation
//! - `dimension` - R1-R12 organizational dimensions and filters
//! - `reports` - Profit & loss, balance sheet, cash flow, trial balance
//! - `ratios` - Liquidity, leverage, profitability, efficiency ratios
//! - `aging` - Accounts receivable aging
//! - `profitability` - Gross margin by customer or product
//! - `budget` - Budget variance analysis
//! - `source` - Data source collaborator contract
//! - `service` - Per-request orchestration over a data source

pub mod aging;
pub mod budget;
pub mod classifier;
pub mod dimension;
pub mod format;
pub mod ledger;
pub mod profitability;
pub mod ratios;
pub mod reports;
pub mod service;
pub mod source;

pub use reports::ReportError;
pub use service::ReportService;
pub use source::{FinancialDataSource, SourceError};
