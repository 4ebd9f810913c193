//! Organizational dimensions (R1-R12) and dimensional filtering.

pub mod catalog;
pub mod filter;

pub use catalog::{Dimension, DimensionMember, DimensionTable, DimensionValue};
pub use filter::{DimensionFilter, DimensionTag};
