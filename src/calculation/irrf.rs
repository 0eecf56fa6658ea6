//! IRRF income-tax withholding calculation.
//!
//! Single-bracket-lookup style: the matched bracket's deduction
//! constant already linearizes the cumulative effect, so only one
//! bracket is consulted and the breakdown stays empty.

use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::error::EngineResult;
use crate::models::{MatchedBracket, TaxInput, TaxResult};

use super::brackets::single_bracket_tax;
use super::inss::period_months;
use super::rounding::{round_currency, round_rate};

/// Calculates the IRRF withholding for a validated input.
///
/// Taxable base = gross − dependents × dependent-deduction − prior
/// deductions (typically the INSS contribution), floored at zero.
/// Multi-month modes scale gross and tax linearly by the month count.
pub fn calculate_irrf(input: &TaxInput, tables: &LaborTables) -> EngineResult<TaxResult> {
    let dependent_deduction =
        Decimal::from(input.dependents) * tables.irrf.dependent_deduction;
    let base = (input.gross_salary - dependent_deduction - input.prior_deductions)
        .max(Decimal::ZERO);

    let (monthly_tax, bracket) = single_bracket_tax(&tables.irrf.brackets, base)?;

    let months = period_months(input);
    let factor = Decimal::from(months);

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
        breakdown: Vec::new(),
    })
}
