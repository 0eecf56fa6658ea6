//! Input validation for the calculators.
//!
//! Every calculator input is checked before it reaches the engine. All
//! problems with an input are collected into a single
//! [`EngineError::InvalidInput`] so callers can surface them together,
//! each naming the offending field.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult, FieldIssue};
use crate::models::{
    CalculationMode, FgtsInput, OvertimeInput, PremiumInput, PremiumMode, SeveranceInput,
    TaxInput, ThirteenthInput, UnemploymentInput, UnhealthinessInput, VacationInput,
};

/// Largest monthly salary accepted, a sanity bound against typos.
pub const MAX_SALARY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Largest period length accepted, fifty years in months.
pub const MAX_MONTHS: u32 = 600;
/// Largest number of dependents accepted.
pub const MAX_DEPENDENTS: u32 = 20;

/// Collects field issues and turns them into a single error at the end.
#[derive(Debug, Default)]
struct Issues(Vec<FieldIssue>);

impl Issues {
    fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.0.push(FieldIssue {
            field: field.to_string(),
            reason: reason.into(),
        });
    }

    fn finish(self) -> EngineResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(EngineError::InvalidInput { issues: self.0 })
        }
    }
}

fn check_salary(issues: &mut Issues, field: &str, value: Decimal) {
    if value <= Decimal::ZERO {
        issues.push(field, "must be greater than zero");
    } else if value > MAX_SALARY {
        issues.push(field, format!("must not exceed {MAX_SALARY}"));
    }
}

fn check_dependents(issues: &mut Issues, dependents: u32) {
    if dependents > MAX_DEPENDENTS {
        issues.push("dependents", format!("must not exceed {MAX_DEPENDENTS}"));
    }
}

fn check_premium_fields(
    issues: &mut Issues,
    applies: bool,
    exposure_hours: Decimal,
    total_hours: Decimal,
    mode: PremiumMode,
    months: Option<u32>,
) {
    if exposure_hours < Decimal::ZERO {
        issues.push("exposure_hours", "must not be negative");
    }
    if total_hours < Decimal::ZERO {
        issues.push("total_hours", "must not be negative");
    }
    if !applies && exposure_hours > Decimal::ZERO {
        issues.push(
            "exposure_hours",
            "must be zero when the premium does not apply",
        );
    }
    if applies {
        if mode == PremiumMode::Proportional && total_hours <= Decimal::ZERO {
            issues.push("total_hours", "must be positive in proportional mode");
        }
        if mode == PremiumMode::Proportional && exposure_hours <= Decimal::ZERO {
            issues.push("exposure_hours", "must be positive in proportional mode");
        } else if total_hours >= Decimal::ZERO && exposure_hours > total_hours {
            issues.push("exposure_hours", "must not exceed total_hours");
        }
    }
    if let Some(m) = months {
        if m == 0 || m > MAX_MONTHS {
            issues.push("months", format!("must be between 1 and {MAX_MONTHS}"));
        }
    }
}

/// Validates an INSS or IRRF input.
pub fn validate_tax_input(input: &TaxInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_salary(&mut issues, "gross_salary", input.gross_salary);
    check_dependents(&mut issues, input.dependents);
    if input.prior_deductions < Decimal::ZERO {
        issues.push("prior_deductions", "must not be negative");
    }
    if input.mode != CalculationMode::SinglePeriod {
        match input.months {
            None => issues.push("months", "is required for this calculation mode"),
            Some(m) if m == 0 || m > MAX_MONTHS => {
                issues.push("months", format!("must be between 1 and {MAX_MONTHS}"));
            }
            Some(_) => {}
        }
    }
    issues.finish()
}

/// Validates a night-shift or hazard premium input.
pub fn validate_premium_input(input: &PremiumInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_salary(&mut issues, "base_salary", input.base_salary);
    check_premium_fields(
        &mut issues,
        input.applies,
        input.exposure_hours,
        input.total_hours,
        input.mode,
        input.months,
    );
    issues.finish()
}

/// Validates an unhealthiness premium input.
pub fn validate_unhealthiness_input(input: &UnhealthinessInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_premium_fields(
        &mut issues,
        input.applies,
        input.exposure_hours,
        input.total_hours,
        input.mode,
        input.months,
    );
    issues.finish()
}

/// Validates an overtime input.
pub fn validate_overtime_input(input: &OvertimeInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_salary(&mut issues, "gross_salary", input.gross_salary);
    if input.overtime_hours < Decimal::ZERO {
        issues.push("overtime_hours", "must not be negative");
    }
    let working_days_ok = (1..=31).contains(&input.working_days);
    if !working_days_ok {
        issues.push("working_days", "must be between 1 and 31");
    }
    let rest_days_ok = input.rest_days <= 31;
    if !rest_days_ok {
        issues.push("rest_days", "must not exceed 31");
    }
    // Both counts are known to be small here, so the sum cannot wrap.
    if working_days_ok && rest_days_ok && input.working_days + input.rest_days > 31 {
        issues.push("rest_days", "working_days plus rest_days must not exceed 31");
    }
    issues.finish()
}

/// Validates a vacation input.
pub fn validate_vacation_input(input: &VacationInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_salary(&mut issues, "gross_salary", input.gross_salary);
    check_dependents(&mut issues, input.dependents);
    if input.vacation_days == 0 || input.vacation_days > 30 {
        issues.push("vacation_days", "must be between 1 and 30");
    }
    issues.finish()
}

/// Validates a thirteenth-salary input.
pub fn validate_thirteenth_input(input: &ThirteenthInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_salary(&mut issues, "gross_salary", input.gross_salary);
    check_dependents(&mut issues, input.dependents);
    if input.months_worked == 0 || input.months_worked > 12 {
        issues.push("months_worked", "must be between 1 and 12");
    }
    issues.finish()
}

/// Validates an FGTS input.
pub fn validate_fgts_input(input: &FgtsInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_salary(&mut issues, "gross_salary", input.gross_salary);
    if input.months == 0 || input.months > MAX_MONTHS {
        issues.push("months", format!("must be between 1 and {MAX_MONTHS}"));
    }
    if input.opening_balance < Decimal::ZERO {
        issues.push("opening_balance", "must not be negative");
    }
    issues.finish()
}

/// Validates a severance input.
pub fn validate_severance_input(input: &SeveranceInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    check_salary(&mut issues, "gross_salary", input.gross_salary);
    check_dependents(&mut issues, input.dependents);
    if input.termination_date < input.admission_date {
        issues.push("termination_date", "must not precede admission_date");
    }
    if input.fgts_balance < Decimal::ZERO {
        issues.push("fgts_balance", "must not be negative");
    }
    if input.accrued_vacation_days > 30 {
        issues.push("accrued_vacation_days", "must not exceed 30");
    }
    issues.finish()
}

/// Validates an unemployment insurance input.
pub fn validate_unemployment_input(input: &UnemploymentInput) -> EngineResult<()> {
    let mut issues = Issues::default();
    if input.salaries.is_empty() {
        issues.push("salaries", "must contain at least one salary");
    }
    for (i, salary) in input.salaries.iter().enumerate() {
        if *salary <= Decimal::ZERO {
            issues.push(&format!("salaries[{i}]"), "must be greater than zero");
        } else if *salary > MAX_SALARY {
            issues.push(&format!("salaries[{i}]"), format!("must not exceed {MAX_SALARY}"));
        }
    }
    if input.months_worked > MAX_MONTHS {
        issues.push("months_worked", format!("must not exceed {MAX_MONTHS}"));
    }
    issues.finish()
}
