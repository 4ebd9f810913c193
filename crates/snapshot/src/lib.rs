//! JSON snapshot data source for finstat.
//!
//! This crate provides:
//! - The on-disk snapshot model (accounts, postings, receivables, order lines,
//!   budget targets, dimension tables)
//! - A [`finstat_core::FinancialDataSource`] implementation serving one snapshot

pub mod error;
pub mod model;
pub mod source;

pub use error::SnapshotError;
pub use model::Snapshot;
pub use source::SnapshotSource;
