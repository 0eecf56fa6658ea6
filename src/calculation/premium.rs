//! Shared proportional-premium arithmetic.
//!
//! Night-shift, hazard, and unhealthiness premiums all apply a fixed
//! legal percentage to a base amount, either over the full period or
//! weighted by the exposed fraction of it. The wrappers in their own
//! modules supply the rate and base; the math lives here.

use rust_decimal::Decimal;

use crate::models::{PremiumMode, PremiumResult};

use super::rounding::{round_currency, round_rate};

/// Applies a fixed-percentage premium to a base amount.
///
/// - When `applies` is false the result short-circuits to zero with a
///   descriptive trace; the rate math never runs.
/// - The effective rate is the fixed rate for full-period requests, or
///   `(exposure / total) × fixed` for proportional ones. Exposure at or
///   above the total implies full-period regardless of the requested
///   mode: exposure cannot exceed 100%.
/// - A month multiplier scales base and premium before totals and
///   percentages are derived, so multi-month figures never drift from
///   the single-month rounding.
pub fn apply_premium(
    label: &str,
    base: Decimal,
    fixed_rate: Decimal,
    applies: bool,
    exposure_hours: Decimal,
    total_hours: Decimal,
    mode: PremiumMode,
    months: Option<u32>,
) -> PremiumResult {
    let factor = Decimal::from(months.unwrap_or(1).max(1));
    let base_amount = round_currency(base * factor);

    if !applies {
        return PremiumResult {
            base_amount,
            applied_rate: Decimal::ZERO,
            premium: Decimal::ZERO,
            total: base_amount,
            trace: format!("{label}: condition does not apply, no premium due"),
        };
    }

    let full_period = mode == PremiumMode::FullPeriod || exposure_hours >= total_hours;
    let effective_rate = if full_period {
        fixed_rate
    } else {
        fixed_rate * exposure_hours / total_hours
    };

    let premium = round_currency(base * effective_rate * factor);
    let total = base_amount + premium;
    let applied_rate = if base_amount > Decimal::ZERO {
        round_rate(premium / base_amount)
    } else {
        Decimal::ZERO
    };

    let trace = if full_period {
        format!(
            "{label}: {} x {}% = {} over the full period",
            base.normalize(),
            (fixed_rate * Decimal::ONE_HUNDRED).normalize(),
            premium.normalize(),
        )
    } else {
        format!(
            "{label}: {}/{} hours exposed x {}% = {}%; {} x {}% = {}",
            exposure_hours.normalize(),
            total_hours.normalize(),
            (fixed_rate * Decimal::ONE_HUNDRED).normalize(),
            (round_rate(effective_rate) * Decimal::ONE_HUNDRED).normalize(),
            base.normalize(),
            (round_rate(effective_rate) * Decimal::ONE_HUNDRED).normalize(),
            premium.normalize(),
        )
    };

    PremiumResult {
        base_amount,
        applied_rate,
        premium,
        total,
        trace,
    }
}
