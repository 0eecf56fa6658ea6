//! Vacation pay calculation.
//!
//! Vacation pay = daily salary × days taken, plus the constitutional
//! one-third. Selling one third of the entitlement (10 days) produces a
//! tax-exempt pecuniary allowance (abono). Withholdings are computed by
//! the bracket calculators over the taxable portion only.

use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::error::EngineResult;
use crate::models::{CalculationMode, TaxInput, VacationInput, VacationResult};

use super::inss::calculate_inss;
use super::irrf::calculate_irrf;
use super::rounding::round_currency;

const DAYS_IN_MONTH: u32 = 30;
const ABONO_DAYS: u32 = 10;

/// Calculates vacation pay, the one-third addition, the optional
/// abono, and the withholdings for a validated input.
pub fn calculate_vacation(input: &VacationInput, tables: &LaborTables) -> EngineResult<VacationResult> {
    let daily = input.gross_salary / Decimal::from(DAYS_IN_MONTH);

    let vacation_pay = round_currency(daily * Decimal::from(input.vacation_days));
    let constitutional_third = round_currency(vacation_pay / Decimal::from(3u32));

    let abono = if input.sell_one_third {
        let abono_base = round_currency(daily * Decimal::from(ABONO_DAYS));
        let abono_third = round_currency(abono_base / Decimal::from(3u32));
        abono_base + abono_third
    } else {
        Decimal::ZERO
    };

    let taxable = vacation_pay + constitutional_third;

    let inss = calculate_inss(
        &TaxInput {
            gross_salary: taxable,
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
            gross_salary: taxable,
            dependents: input.dependents,
            prior_deductions: inss,
            mode: CalculationMode::SinglePeriod,
            months: None,
        },
        tables,
    )?
    .tax;

    let gross = taxable + abono;
    let net = gross - inss - irrf;

    Ok(VacationResult {
        vacation_pay,
        constitutional_third,
        abono,
        gross,
        inss,
        irrf,
        net,
    })
}
