//! Financial statement generation.
//!
//! This module provides pure business logic for generating financial reports:
//! - Profit & Loss (with optional prior-period comparison)
//! - Balance Sheet
//! - Cash Flow
//! - Trial Balance
//! - Dimensional Reports

pub mod cash_flow;
pub mod dimensional;
pub mod error;
pub mod statements;
pub mod types;


pub use cash_flow::{CashFlowActivity, CashFlowBuilder};
pub use dimensional::DimensionalBuilder;
pub use error::ReportError;
pub use statements::StatementBuilder;
pub use types::*;
