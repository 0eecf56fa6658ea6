//! Termination pay (rescisão) calculation.
//!
//! Aggregates every amount due at the end of an employment contract:
//! salary balance for the final month, prior notice, accrued and
//! proportional vacation with their constitutional thirds, the
//! proportional thirteenth salary, and the FGTS penalty. Which lines
//! are owed depends on the termination type.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::error::EngineResult;
use crate::models::{
    CalculationMode, NoticeKind, SeveranceInput, SeveranceResult, TaxInput, TerminationType,
};

use super::fgts::penalty_rate;
use super::inss::calculate_inss;
use super::irrf::calculate_irrf;
use super::rounding::round_currency;
use super::service_period::{completed_service_years, pro_rata_months};

const DAYS_IN_MONTH: u32 = 30;
const MONTHS_IN_YEAR: u32 = 12;
const BASE_NOTICE_DAYS: u32 = 30;
const NOTICE_DAYS_PER_YEAR: u32 = 3;
const MAX_NOTICE_DAYS: u32 = 90;

/// Prior notice length in days: 30 plus 3 per completed service year,
/// capped at 90.
pub fn notice_days(service_years: u32) -> u32 {
    (BASE_NOTICE_DAYS + NOTICE_DAYS_PER_YEAR * service_years).min(MAX_NOTICE_DAYS)
}

fn withholdings_on(
    base: Decimal,
    dependents: u32,
    tables: &LaborTables,
) -> EngineResult<(Decimal, Decimal)> {
    if base <= Decimal::ZERO {
        return Ok((Decimal::ZERO, Decimal::ZERO));
    }
    let inss = calculate_inss(
        &TaxInput {
            gross_salary: base,
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
            gross_salary: base,
            dependents,
            prior_deductions: inss,
            mode: CalculationMode::SinglePeriod,
            months: None,
        },
        tables,
    )?
    .tax;
    Ok((inss, irrf))
}

/// Calculates the full termination settlement for a validated input.
pub fn calculate_severance(
    input: &SeveranceInput,
    tables: &LaborTables,
) -> EngineResult<SeveranceResult> {
    let service_months = pro_rata_months(input.admission_date, input.termination_date);
    let service_years = completed_service_years(input.admission_date, input.termination_date);
    let daily = input.gross_salary / Decimal::from(DAYS_IN_MONTH);

    let salary_balance = round_currency(daily * Decimal::from(input.termination_date.day()));

    // Notice pay is only indemnified on the employer's initiative: in
    // full without cause, halved on mutual agreement.
    let days = notice_days(service_years);
    let notice_pay = match (input.termination_type, input.notice) {
        (TerminationType::DismissalWithoutCause, NoticeKind::Indemnified) => {
            round_currency(daily * Decimal::from(days))
        }
        (TerminationType::MutualAgreement, NoticeKind::Indemnified) => {
            round_currency(daily * Decimal::from(days) / Decimal::from(2u32))
        }
        _ => Decimal::ZERO,
    };

    let accrued_vacation = round_currency(daily * Decimal::from(input.accrued_vacation_days));
    let accrued_vacation_third = round_currency(accrued_vacation / Decimal::from(3u32));

    // Dismissal with cause forfeits the proportional lines.
    let keeps_proportional = input.termination_type != TerminationType::DismissalWithCause;

    let (proportional_vacation, proportional_vacation_third) = if keeps_proportional {
        let months = service_months % MONTHS_IN_YEAR;
        let pay = round_currency(
            input.gross_salary * Decimal::from(months) / Decimal::from(MONTHS_IN_YEAR),
        );
        (pay, round_currency(pay / Decimal::from(3u32)))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let thirteenth_salary = if keeps_proportional {
        let year_start = input
            .termination_date
            .with_day(1)
            .and_then(|d| d.with_month(1))
            .unwrap_or(input.termination_date);
        let start = input.admission_date.max(year_start);
        let months = pro_rata_months(start, input.termination_date).min(MONTHS_IN_YEAR);
        round_currency(input.gross_salary * Decimal::from(months) / Decimal::from(MONTHS_IN_YEAR))
    } else {
        Decimal::ZERO
    };

    let fgts_penalty = round_currency(
        input.fgts_balance * penalty_rate(input.termination_type, tables),
    );

    let gross = salary_balance
        + notice_pay
        + accrued_vacation
        + accrued_vacation_third
        + proportional_vacation
        + proportional_vacation_third
        + thirteenth_salary
        + fgts_penalty;

    // Withholdings apply to the salary balance and the thirteenth as
    // separate bases; indemnities are exempt.
    let (inss_salary, irrf_salary) = withholdings_on(salary_balance, input.dependents, tables)?;
    let (inss_thirteenth, irrf_thirteenth) =
        withholdings_on(thirteenth_salary, input.dependents, tables)?;

    let inss = inss_salary + inss_thirteenth;
    let irrf = irrf_salary + irrf_thirteenth;

    Ok(SeveranceResult {
        service_months,
        notice_days: days,
        salary_balance,
        notice_pay,
        accrued_vacation,
        accrued_vacation_third,
        proportional_vacation,
        proportional_vacation_third,
        thirteenth_salary,
        fgts_penalty,
        gross,
        inss,
        irrf,
        net: gross - inss - irrf,
    })
}
