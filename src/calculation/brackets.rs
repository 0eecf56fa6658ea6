//! The progressive-rate bracket engine.
//!
//! Two variants of bracket arithmetic exist and are kept distinct:
//!
//! - **Single-bracket lookup**: find the one bracket containing the
//!   base, then `base × rate − deduction` (floored at zero). The table's
//!   deduction constants already encode the cumulative effect. Used by
//!   the IRRF calculator.
//! - **Cumulative sum**: walk brackets from the lowest and tax each
//!   slice of the base at its own rate. Used by the INSS calculator.
//!
//! Bracket bounds are inclusive on both ends; the next bracket's lower
//! bound sits one cent above the previous upper bound, so every base
//! amount matches exactly one bracket. Slice widths are derived from
//! that convention (`min(base, upper_i) − upper_{i−1}`) rather than
//! patching a literal cent onto each width.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::error::{EngineError, EngineResult};
use crate::models::BracketContribution;

use super::rounding::round_currency;

/// Finds the unique bracket containing `base`.
///
/// Returns a `CalculationError` when no bracket matches; on a validated
/// table this can only happen for a capped table when the caller forgot
/// to cap the base at the ceiling first, which is a programming defect.
pub fn find_bracket(brackets: &[TaxBracket], base: Decimal) -> EngineResult<&TaxBracket> {
    let base = base.max(Decimal::ZERO);
    brackets
        .iter()
        .find(|b| base >= b.lower && b.upper.is_none_or(|u| base <= u))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no bracket contains base amount {}", base),
        })
}

/// Single-bracket-lookup tax: `base × rate − deduction`, floored at
/// zero and rounded to cents.
///
/// A base at or below zero produces a zero amount in the table's first
/// bracket.
pub fn single_bracket_tax(
    brackets: &[TaxBracket],
    base: Decimal,
) -> EngineResult<(Decimal, &TaxBracket)> {
    let base = base.max(Decimal::ZERO);
    let bracket = find_bracket(brackets, base)?;
    let amount = round_currency((base * bracket.rate - bracket.deduction).max(Decimal::ZERO));
    Ok((amount, bracket))
}

/// Cumulative-sum tax: each slice of the base is taxed at its own
/// bracket rate.
///
/// Each slice's contribution is rounded to cents before summing, so the
/// reported breakdown always adds up to the total. A base at or below
/// zero touches no bracket and returns an empty breakdown. Any
/// contribution ceiling must be applied by capping the base *before*
/// the walk, never per bracket.
pub fn cumulative_tax(
    brackets: &[TaxBracket],
    base: Decimal,
) -> (Decimal, Vec<BracketContribution>) {
    let mut breakdown = Vec::new();
    let mut total = Decimal::ZERO;

    if base <= Decimal::ZERO {
        return (total, breakdown);
    }

    let mut prev_upper = Decimal::ZERO;
    for bracket in brackets {
        let reach = match bracket.upper {
            Some(upper) => base.min(upper),
            None => base,
        };
        let slice = reach - prev_upper;
        if slice <= Decimal::ZERO {
            break;
        }

        let contribution = round_currency(slice * bracket.rate);
        total += contribution;
        breakdown.push(BracketContribution {
            lower: bracket.lower,
            upper: bracket.upper,
            rate: bracket.rate,
            taxed_amount: slice,
            contribution,
        });

        match bracket.upper {
            Some(upper) => {
                if base <= upper {
                    break;
                }
                prev_upper = upper;
            }
            None => break,
        }
    }

    (total, breakdown)
}
