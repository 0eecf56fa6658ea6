//! Unemployment insurance (seguro-desemprego) calculation.
//!
//! The benefit value is drawn from the average of the last salaries
//! through a tiered table, capped at the benefit ceiling and floored at
//! the minimum wage. The number of installments depends on how often
//! the worker has claimed before and on the months worked.

use rust_decimal::Decimal;

use crate::config::{LaborTables, UnemploymentTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{UnemploymentInput, UnemploymentRequest, UnemploymentResult};

use super::rounding::round_currency;

/// Minimum months worked to qualify, per request number.
fn minimum_months(request: UnemploymentRequest, table: &UnemploymentTable) -> u32 {
    match request {
        UnemploymentRequest::First => table.minimum_months.first,
        UnemploymentRequest::Second => table.minimum_months.second,
        UnemploymentRequest::ThirdOrMore => table.minimum_months.third_or_more,
    }
}

/// Number of installments granted, given an eligible request.
fn installment_count(table: &UnemploymentTable, months_worked: u32) -> EngineResult<u32> {
    table
        .installments
        .iter()
        .find(|rule| rule.upper_months.is_none_or(|upper| months_worked <= upper))
        .map(|rule| rule.count)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no installment band covers {months_worked} months worked"),
        })
}

/// Calculates the unemployment insurance benefit for a validated input.
pub fn calculate_unemployment(
    input: &UnemploymentInput,
    tables: &LaborTables,
) -> EngineResult<UnemploymentResult> {
    let minimum = minimum_months(input.request, &tables.unemployment);
    if input.months_worked < minimum {
        return Err(EngineError::Ineligible {
            field: "months_worked".to_string(),
            message: format!(
                "this request requires at least {minimum} months worked, got {}",
                input.months_worked
            ),
        });
    }

    if input.salaries.is_empty() {
        return Err(EngineError::CalculationError {
            message: "cannot average an empty salary list".to_string(),
        });
    }

    let sum: Decimal = input.salaries.iter().copied().sum();
    let average_salary = round_currency(sum / Decimal::from(input.salaries.len() as u32));

    let tier = tables
        .unemployment
        .tiers
        .iter()
        .find(|t| t.upper.is_none_or(|u| average_salary <= u))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no benefit tier covers average salary {average_salary}"),
        })?;

    let raw = round_currency(average_salary * tier.multiplier + tier.addend);
    let installment_value = raw
        .min(tables.unemployment.cap)
        .max(tables.metadata.minimum_wage);

    let installments = installment_count(&tables.unemployment, input.months_worked)?;

    Ok(UnemploymentResult {
        average_salary,
        installment_value,
        installments,
        total: installment_value * Decimal::from(installments),
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

    fn input(salaries: &[&str], months: u32, request: UnemploymentRequest) -> UnemploymentInput {
        UnemploymentInput {
            salaries: salaries.iter().map(|s| dec(s)).collect(),
            months_worked: months,
            request,
        }
    }

    /// UNE-001: first tier pays 80% of the average.
    #[test]
    fn test_first_tier() {
        let tables = load_tables();
        let i = input(&["1800.00", "1800.00", "1800.00"], 14, UnemploymentRequest::First);

        let result = calculate_unemployment(&i, &tables).unwrap();
        assert_eq!(result.average_salary, dec("1800.00"));
        assert_eq!(result.installment_value, dec("1440.00"));
        assert_eq!(result.installments, 4);
        assert_eq!(result.total, dec("5760.00"));
    }

    /// UNE-002: middle tier pays half the average plus the fixed addend.
    #[test]
    fn test_middle_tier() {
        let tables = load_tables();
        let i = input(&["2500.00", "2500.00", "2500.00"], 14, UnemploymentRequest::First);

        let result = calculate_unemployment(&i, &tables).unwrap();
        // 2500.00 * 0.50 + 612.41 = 1862.41
        assert_eq!(result.installment_value, dec("1862.41"));
    }

    /// UNE-003: high averages are capped at the benefit ceiling.
    #[test]
    fn test_ceiling() {
        let tables = load_tables();
        let i = input(&["5000.00", "5200.00", "5100.00"], 26, UnemploymentRequest::First);

        let result = calculate_unemployment(&i, &tables).unwrap();
        assert_eq!(result.installment_value, dec("2313.74"));
        assert_eq!(result.installments, 5);
    }

    /// UNE-004: the installment never falls below the minimum wage.
    #[test]
    fn test_minimum_wage_floor() {
        let tables = load_tables();
        let i = input(&["1300.00", "1300.00", "1300.00"], 12, UnemploymentRequest::First);

        let result = calculate_unemployment(&i, &tables).unwrap();
        // 80% of 1300.00 is 1040.00, below the 1412.00 floor.
        assert_eq!(result.installment_value, dec("1412.00"));
    }

    /// UNE-005: a first request needs twelve months worked.
    #[test]
    fn test_first_request_ineligible() {
        let tables = load_tables();
        let i = input(&["2000.00"], 10, UnemploymentRequest::First);

        let err = calculate_unemployment(&i, &tables).unwrap_err();
        assert!(matches!(err, EngineError::Ineligible { .. }));
    }

    /// UNE-006: later requests qualify earlier and with fewer
    /// installments.
    #[test]
    fn test_installment_counts() {
        let tables = load_tables();

        let third = input(&["2000.00"], 6, UnemploymentRequest::ThirdOrMore);
        let result = calculate_unemployment(&third, &tables).unwrap();
        assert_eq!(result.installments, 3);

        let second = input(&["2000.00"], 9, UnemploymentRequest::Second);
        let result = calculate_unemployment(&second, &tables).unwrap();
        assert_eq!(result.installments, 3);

        let long = input(&["2000.00"], 24, UnemploymentRequest::ThirdOrMore);
        let result = calculate_unemployment(&long, &tables).unwrap();
        assert_eq!(result.installments, 5);
    }

    /// UNE-007: the average rounds to cents before the tier lookup.
    #[test]
    fn test_average_rounds() {
        let tables = load_tables();
        let i = input(&["2000.00", "2000.01"], 14, UnemploymentRequest::First);

        let result = calculate_unemployment(&i, &tables).unwrap();
        // (2000.00 + 2000.01) / 2 = 2000.005 -> 2000.01
        assert_eq!(result.average_salary, dec("2000.01"));
    }

    /// UNE-008: eligibility thresholds and installment bands come from
    /// the table, not the calculator.
    #[test]
    fn test_rules_are_table_driven() {
        let mut tables = load_tables();
        tables.unemployment.minimum_months.first = 6;
        tables.unemployment.installments = vec![crate::config::InstallmentRule {
            upper_months: None,
            count: 2,
        }];

        let i = input(&["2000.00"], 7, UnemploymentRequest::First);
        let result = calculate_unemployment(&i, &tables).unwrap();
        assert_eq!(result.installments, 2);
    }
}
