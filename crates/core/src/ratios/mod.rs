//! Financial ratio calculation and interpretation.
//!
//! Ratios are derived from a balance sheet and a profit & loss statement:
//! - Liquidity (current ratio, quick ratio, working capital)
//! - Leverage (debt to equity, debt ratio, equity ratio)
//! - Profitability (ROA, ROE, margins)
//! - Efficiency (asset and inventory turnover)

mod calculator;
mod types;

pub use calculator::RatioCalculator;
pub use types::*;
