//! Budget variance analysis.
//!
//! Budget targets are authored externally and fetched per account; this
//! module only compares them with actuals.

pub mod types;
pub mod variance;


pub use types::{VarianceReport, VarianceResult, VarianceRow, VarianceStatus, VarianceSummary};
pub use variance::VarianceAnalyzer;
