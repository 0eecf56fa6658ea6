//! Thirteenth salary (13º salário) calculation.
//!
//! One extra salary per year, proportional to months worked, paid in
//! two installments. The first half carries no withholding; INSS and
//! IRRF are settled in full against the second.

use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::error::EngineResult;
use crate::models::{CalculationMode, TaxInput, ThirteenthInput, ThirteenthResult};

use super::inss::calculate_inss;
use super::irrf::calculate_irrf;
use super::rounding::round_currency;

const MONTHS_IN_YEAR: u32 = 12;

/// Calculates the thirteenth salary and its installment split for a
/// validated input.
pub fn calculate_thirteenth(
    input: &ThirteenthInput,
    tables: &LaborTables,
) -> EngineResult<ThirteenthResult> {
    let months = input.months_worked.min(MONTHS_IN_YEAR);
    let gross = round_currency(
        input.gross_salary * Decimal::from(months) / Decimal::from(MONTHS_IN_YEAR),
    );

    let first_installment = round_currency(gross / Decimal::from(2u32));

    let inss = calculate_inss(
        &TaxInput {
            gross_salary: gross,
            dependents: 0,
            prior_deductions: Decimal::ZERO,
            mode: CalculationMode::SinglePeriod,
            months: None,
        },
        tables,
    )?
    .tax;

    let irrf = calculate_irrf(
        &TaxInput {
            gross_salary: gross,
            dependents: input.dependents,
            prior_deductions: inss,
            mode: CalculationMode::SinglePeriod,
            months: None,
        },
        tables,
    )?
    .tax;

    let second_installment = gross - first_installment - inss - irrf;
    let net = gross - inss - irrf;

    Ok(ThirteenthResult {
        gross,
        first_installment,
        inss,
        irrf,
        second_installment,
        net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
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

    fn input(salary: &str, months: u32) -> ThirteenthInput {
        ThirteenthInput {
            gross_salary: dec(salary),
            months_worked: months,
            dependents: 0,
        }
    }

    /// THR-001: a full year at 3000.00.
    #[test]
    fn test_full_year() {
        let tables = load_tables();
        let result = calculate_thirteenth(&input("3000.00", 12), &tables).unwrap();

        assert_eq!(result.gross, dec("3000.00"));
        assert_eq!(result.first_installment, dec("1500.00"));
        // INSS 258.82; IRRF base 2741.18 at 7.5% - 158.40 = 47.19
        assert_eq!(result.inss, dec("258.82"));
        assert_eq!(result.irrf, dec("47.19"));
        assert_eq!(result.second_installment, dec("1193.99"));
        assert_eq!(result.net, dec("2693.99"));
    }

    /// THR-002: seven months worked earn 7/12 of a salary.
    #[test]
    fn test_proportional_months() {
        let tables = load_tables();
        let result = calculate_thirteenth(&input("3000.00", 7), &tables).unwrap();

        assert_eq!(result.gross, dec("1750.00"));
        assert_eq!(result.first_installment, dec("875.00"));
        // INSS 136.32; base 1613.68 is exempt from IRRF.
        assert_eq!(result.inss, dec("136.32"));
        assert_eq!(result.irrf, Decimal::ZERO);
        assert_eq!(result.net, dec("1613.68"));
    }

    /// THR-003: installments and withholdings always reconcile with the
    /// gross amount.
    #[test]
    fn test_installments_reconcile() {
        let tables = load_tables();
        let result = calculate_thirteenth(&input("4731.27", 10), &tables).unwrap();

        assert_eq!(
            result.gross,
            result.first_installment + result.second_installment + result.inss + result.irrf
        );
        assert_eq!(result.net, result.first_installment + result.second_installment);
    }

    /// THR-004: months are capped at twelve.
    #[test]
    fn test_months_capped() {
        let tables = load_tables();
        let a = calculate_thirteenth(&input("3000.00", 12), &tables).unwrap();
        let b = calculate_thirteenth(&input("3000.00", 14), &tables).unwrap();

        assert_eq!(a.gross, b.gross);
    }

    /// THR-005: dependents reduce the IRRF base.
    #[test]
    fn test_dependents_reduce_irrf() {
        let tables = load_tables();
        let mut with_deps = input("5000.00", 12);
        with_deps.dependents = 2;

        let a = calculate_thirteenth(&with_deps, &tables).unwrap();
        let b = calculate_thirteenth(&input("5000.00", 12), &tables).unwrap();

        assert!(a.irrf < b.irrf);
        assert_eq!(a.inss, b.inss);
    }
}
