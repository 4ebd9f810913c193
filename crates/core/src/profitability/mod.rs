//! Gross-margin breakdowns by customer or product.

mod analyzer;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::ProfitabilityAnalyzer;
pub use types::*;
