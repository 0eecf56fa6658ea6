//! Unhealthiness premium (adicional de insalubridade) calculation.
//!
//! Unlike the hazard premium, this one is drawn from the minimum wage,
//! at 10%, 20%, or 40% depending on the exposure degree.

use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::models::{PremiumResult, UnhealthinessDegree, UnhealthinessInput};

use super::premium::apply_premium;

/// Returns the legal rate for an exposure degree.
pub fn degree_rate(degree: UnhealthinessDegree, tables: &LaborTables) -> Decimal {
    match degree {
        UnhealthinessDegree::Low => tables.premiums.unhealthiness.low,
        UnhealthinessDegree::Medium => tables.premiums.unhealthiness.medium,
        UnhealthinessDegree::High => tables.premiums.unhealthiness.high,
    }
}

/// Calculates the unhealthiness premium for a validated input.
///
/// The base amount is the minimum wage from the year tables, not the
/// worker's salary.
pub fn calculate_unhealthiness(
    input: &UnhealthinessInput,
    tables: &LaborTables,
) -> PremiumResult {
    apply_premium(
        "unhealthiness premium",
        tables.metadata.minimum_wage,
        degree_rate(input.degree, tables),
        input.applies,
        input.exposure_hours,
        input.total_hours,
        input.mode,
        input.months,
    )
}
