//! Decimal helpers shared by every report.
//!
//! CRITICAL: Never use floating-point for money calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value for display, half away from zero.
#[must_use]
pub fn round_display(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides, returning zero when the denominator is zero.
#[must_use]
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Returns true if the amount is large enough to be listed as a line item.
#[must_use]
pub fn is_material(amount: Decimal, epsilon: Decimal) -> bool {
    amount.abs() >= epsilon
}
