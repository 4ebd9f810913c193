//! Common types used across the application.

pub mod decimal;
pub mod id;

pub use decimal::{is_material, round_display, safe_div};
pub use id::*;
