//! FGTS deposit projection and termination penalty.
//!
//! Employers deposit 8% of the monthly salary into the worker's FGTS
//! account. On dismissal without cause the employer also pays a 40%
//! penalty over the accumulated balance (20% on mutual agreement).

use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::models::{FgtsInput, FgtsResult, TerminationType};

use super::rounding::round_currency;

/// Returns the penalty rate owed over the FGTS balance for a
/// termination type, if any.
pub fn penalty_rate(termination: TerminationType, tables: &LaborTables) -> Decimal {
    match termination {
        TerminationType::DismissalWithoutCause => tables.premiums.fgts_penalty_dismissal,
        TerminationType::MutualAgreement => tables.premiums.fgts_penalty_agreement,
        TerminationType::DismissalWithCause
        | TerminationType::Resignation
        | TerminationType::EndOfContract => Decimal::ZERO,
    }
}

/// Projects FGTS deposits over a period and the penalty due on
/// termination, for a validated input.
pub fn calculate_fgts(input: &FgtsInput, tables: &LaborTables) -> FgtsResult {
    let monthly_deposit = round_currency(input.gross_salary * tables.premiums.fgts_deposit);
    let period_deposits = monthly_deposit * Decimal::from(input.months);
    let balance = input.opening_balance + period_deposits;

    let penalty = match input.termination {
        Some(termination) => round_currency(balance * penalty_rate(termination, tables)),
        None => Decimal::ZERO,
    };

    FgtsResult {
        monthly_deposit,
        period_deposits,
        balance,
        penalty,
        total: balance + penalty,
    }
}
