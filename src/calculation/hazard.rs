//! Hazard premium (adicional de periculosidade) calculation.
//!
//! A 30% premium over the base salary for work under hazardous
//! conditions, in full or proportional to the exposed hours.

use crate::config::LaborTables;
use crate::models::{PremiumInput, PremiumResult};

use super::premium::apply_premium;

/// Calculates the hazard premium for a validated input.
pub fn calculate_hazard(input: &PremiumInput, tables: &LaborTables) -> PremiumResult {
    apply_premium(
        "hazard premium",
        input.base_salary,
        tables.premiums.hazard,
        input.applies,
        input.exposure_hours,
        input.total_hours,
        input.mode,
        input.months,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::PremiumMode;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn load_tables() -> LaborTables {
        ConfigLoader::load("./config/br2024")
            .expect("Failed to load config")
            .tables()
            .clone()
    }

    /// HAZ-001: the reference scenario. Base 2000.00 at 30% with 100 of
    /// 200 hours exposed: effective rate 15%, premium 300.00.
    #[test]
    fn test_reference_scenario() {
        let tables = load_tables();
        let input = PremiumInput {
            base_salary: dec("2000.00"),
            applies: true,
            exposure_hours: dec("100"),
            total_hours: dec("200"),
            mode: PremiumMode::Proportional,
            months: None,
        };

        let result = calculate_hazard(&input, &tables);
        assert_eq!(result.applied_rate, dec("0.15"));
        assert_eq!(result.premium, dec("300.00"));
        assert_eq!(result.total, dec("2300.00"));
    }

    /// HAZ-002: full-period hazard work earns the full 30%.
    #[test]
    fn test_full_period_hazard() {
        let tables = load_tables();
        let input = PremiumInput {
            base_salary: dec("2000.00"),
            applies: true,
            exposure_hours: Decimal::ZERO,
            total_hours: Decimal::ZERO,
            mode: PremiumMode::FullPeriod,
            months: None,
        };

        let result = calculate_hazard(&input, &tables);
        assert_eq!(result.premium, dec("600.00"));
    }

    /// HAZ-003: exposure equal to the total matches full-period output
    /// even when proportional mode was requested.
    #[test]
    fn test_boundary_exposure_equals_full_period() {
        let tables = load_tables();
        let proportional = PremiumInput {
            base_salary: dec("3100.00"),
            applies: true,
            exposure_hours: dec("200"),
            total_hours: dec("200"),
            mode: PremiumMode::Proportional,
            months: None,
        };
        let full = PremiumInput {
            mode: PremiumMode::FullPeriod,
            ..proportional.clone()
        };

        let a = calculate_hazard(&proportional, &tables);
        let b = calculate_hazard(&full, &tables);
        assert_eq!(a.premium, b.premium);
    }
}
