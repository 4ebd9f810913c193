//! Account classification into statement categories.
//!
//! Classification is a pure function of the account number, driven by an
//! ordered table of mutually exclusive numeric ranges.

pub mod category;
pub mod rules;

pub use category::{AccountType, Category, Polarity, Statement};
pub use rules::AccountClassifier;
