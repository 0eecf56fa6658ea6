//! INSS social-security contribution calculation.
//!
//! Cumulative-sum style: each slice of the salary is taxed at its own
//! bracket rate, and salaries above the contribution ceiling contribute
//! exactly what the ceiling salary contributes.

use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::error::EngineResult;
use crate::models::{CalculationMode, MatchedBracket, TaxInput, TaxResult};

use super::brackets::{cumulative_tax, find_bracket};
use super::rounding::{round_currency, round_rate};

/// Calculates the INSS contribution for a validated input.
///
/// The base is capped at the contribution ceiling before the bracket
/// walk, so the ceiling applies to the summed amount, never per
/// bracket. Multi-month modes scale gross, contribution, and breakdown
/// linearly by the month count; the effective rate is recomputed from
/// the scaled totals.
pub fn calculate_inss(input: &TaxInput, tables: &LaborTables) -> EngineResult<TaxResult> {
    let ceiling = tables.inss.ceiling()?;
    let base = input.gross_salary.min(ceiling).max(Decimal::ZERO);

    let (monthly_tax, mut breakdown) = cumulative_tax(&tables.inss.brackets, base);
    let bracket = find_bracket(&tables.inss.brackets, base)?;

    let months = period_months(input);
    let factor = Decimal::from(months);

    for slice in &mut breakdown {
        slice.taxed_amount *= factor;
        slice.contribution *= factor;
    }

    let gross = round_currency(input.gross_salary.max(Decimal::ZERO) * factor);
    let tax = monthly_tax * factor;
    let net = gross - tax;
    let effective_rate = if gross > Decimal::ZERO {
        round_rate(tax / gross)
    } else {
        Decimal::ZERO
    };

    Ok(TaxResult {
        gross,
        tax,
        net,
        effective_rate,
        marginal_rate: bracket.rate,
        bracket: MatchedBracket {
            lower: bracket.lower,
            upper: bracket.upper,
            rate: bracket.rate,
            deduction: bracket.deduction,
        },
        breakdown,
    })
}

/// Month count the input's mode calls for; single-period is one month.
pub(crate) fn period_months(input: &TaxInput) -> u32 {
    match input.mode {
        CalculationMode::SinglePeriod => 1,
        CalculationMode::Annualized | CalculationMode::Projected => {
            input.months.unwrap_or(1).max(1)
        }
    }
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

    fn input(gross: &str) -> TaxInput {
        TaxInput {
            gross_salary: dec(gross),
            dependents: 0,
            prior_deductions: Decimal::ZERO,
            mode: CalculationMode::SinglePeriod,
            months: None,
        }
    }

    /// INSS-001: salary inside the first bracket.
    #[test]
    fn test_first_bracket_salary() {
        let tables = load_tables();
        let result = calculate_inss(&input("1412.00"), &tables).unwrap();

        assert_eq!(result.tax, dec("105.90"));
        assert_eq!(result.net, dec("1306.10"));
        assert_eq!(result.marginal_rate, dec("0.075"));
        assert_eq!(result.breakdown.len(), 1);
    }

    /// INSS-002: salary spanning three brackets.
    #[test]
    fn test_mid_table_salary() {
        let tables = load_tables();
        let result = calculate_inss(&input("3000.00"), &tables).unwrap();

        // 105.90 + 112.92 + 40.00
        assert_eq!(result.tax, dec("258.82"));
        assert_eq!(result.marginal_rate, dec("0.12"));
        assert_eq!(result.breakdown.len(), 3);
        let sum: Decimal = result.breakdown.iter().map(|c| c.contribution).sum();
        assert_eq!(sum, result.tax);
    }

    /// INSS-003: contribution at the ceiling.
    #[test]
    fn test_ceiling_salary() {
        let tables = load_tables();
        let result = calculate_inss(&input("7786.02"), &tables).unwrap();

        assert_eq!(result.tax, dec("908.86"));
        assert_eq!(result.marginal_rate, dec("0.14"));
    }

    /// INSS-004: salaries above the ceiling contribute the ceiling amount.
    #[test]
    fn test_above_ceiling_capped() {
        let tables = load_tables();
        let at_ceiling = calculate_inss(&input("7786.02"), &tables).unwrap();

        for gross in ["7786.03", "10000.00", "50000.00"] {
            let result = calculate_inss(&input(gross), &tables).unwrap();
            assert_eq!(result.tax, at_ceiling.tax, "gross {}", gross);
        }
    }

    /// INSS-005: effective rate falls as salary rises past the ceiling.
    #[test]
    fn test_effective_rate_above_ceiling() {
        let tables = load_tables();
        let result = calculate_inss(&input("10000.00"), &tables).unwrap();

        // 908.86 / 10000.00
        assert_eq!(result.effective_rate, dec("0.0909"));
        assert_eq!(result.net, dec("9091.14"));
    }

    /// INSS-006: projected mode scales gross, tax, and breakdown.
    #[test]
    fn test_projected_mode_scales_linearly() {
        let tables = load_tables();
        let mut projected = input("3000.00");
        projected.mode = CalculationMode::Projected;
        projected.months = Some(12);

        let single = calculate_inss(&input("3000.00"), &tables).unwrap();
        let result = calculate_inss(&projected, &tables).unwrap();

        assert_eq!(result.gross, dec("36000.00"));
        assert_eq!(result.tax, single.tax * Decimal::from(12));
        // Linear scaling leaves the effective rate unchanged.
        assert_eq!(result.effective_rate, single.effective_rate);
        let sum: Decimal = result.breakdown.iter().map(|c| c.contribution).sum();
        assert_eq!(sum, result.tax);
    }

    /// INSS-007: repeated calls are bit-identical.
    #[test]
    fn test_idempotence() {
        let tables = load_tables();
        let a = calculate_inss(&input("4523.87"), &tables).unwrap();
        let b = calculate_inss(&input("4523.87"), &tables).unwrap();
        assert_eq!(a, b);
    }

    /// INSS-008: contribution never exceeds the gross it is drawn from.
    #[test]
    fn test_tax_never_exceeds_gross() {
        let tables = load_tables();
        for gross in ["0.01", "100.00", "1412.00", "7786.02", "9999.99"] {
            let result = calculate_inss(&input(gross), &tables).unwrap();
            assert!(result.tax <= result.gross, "gross {}", gross);
            assert!(result.net >= Decimal::ZERO);
        }
    }
}
