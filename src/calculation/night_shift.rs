//! Night-shift premium (adicional noturno) calculation.
//!
//! A 20% premium over the base salary, in full or proportional to the
//! hours worked inside the legal night window.

use crate::config::LaborTables;
use crate::models::{PremiumInput, PremiumResult};

use super::premium::apply_premium;

/// Calculates the night-shift premium for a validated input.
pub fn calculate_night_shift(input: &PremiumInput, tables: &LaborTables) -> PremiumResult {
    apply_premium(
        "night-shift premium",
        input.base_salary,
        tables.premiums.night_shift,
        input.applies,
        input.exposure_hours,
        input.total_hours,
        input.mode,
        input.months,
    )
}
