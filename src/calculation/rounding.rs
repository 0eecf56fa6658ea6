//! Rounding helpers shared by all calculators.
//!
//! Monetary amounts are rounded half-up to two decimal places; rates
//! are reported to four. Report formatting reuses the same rounded
//! figures, so displayed values always sum.

use rust_decimal::Decimal;

/// Rounds a monetary amount to cents using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, the standard
/// financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use clt_engine::calculation::round_currency;
///
/// let v = Decimal::from_str("437.90275").unwrap();
/// assert_eq!(round_currency(v), Decimal::from_str("437.90").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a rate (fraction, not percentage) to four decimal places.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
