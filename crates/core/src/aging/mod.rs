//! Accounts receivable aging.
//!
//! Open invoices are bucketed by days overdue as of a reference date and
//! rolled up per customer, with a portfolio-wide risk summary.

mod engine;
mod types;

#[cfg(test)]
mod tests;

pub use engine::AgingEngine;
pub use types::*;
