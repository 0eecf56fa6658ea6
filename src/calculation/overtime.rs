//! Overtime pay calculation with the DSR reflection.
//!
//! Overtime hours earn the hourly rate plus a surcharge (50% on
//! weekdays, 100% on Sundays and holidays). Because overtime raises the
//! month's earnings, the paid weekly rest (DSR) must reflect it:
//! DSR = overtime pay / working days × rest days.

use rust_decimal::Decimal;

use crate::config::LaborTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{OvertimeInput, OvertimeKind, OvertimeResult};

use super::rounding::round_currency;

/// Calculates overtime pay and its DSR reflection for a validated input.
pub fn calculate_overtime(input: &OvertimeInput, tables: &LaborTables) -> EngineResult<OvertimeResult> {
    let monthly_hours = tables.premiums.monthly_hours;
    if monthly_hours <= Decimal::ZERO {
        return Err(EngineError::InvalidTable {
            table: "premiums".to_string(),
            message: "monthly_hours must be positive".to_string(),
        });
    }

    let surcharge_rate = match input.kind {
        OvertimeKind::Weekday => tables.premiums.overtime.weekday,
        OvertimeKind::SundayHoliday => tables.premiums.overtime.sunday_holiday,
    };

    let hourly_rate = input.gross_salary / monthly_hours;
    let overtime_pay =
        round_currency(input.overtime_hours * hourly_rate * (Decimal::ONE + surcharge_rate));

    let dsr = if input.include_dsr && input.overtime_hours > Decimal::ZERO {
        round_currency(
            overtime_pay / Decimal::from(input.working_days) * Decimal::from(input.rest_days),
        )
    } else {
        Decimal::ZERO
    };

    let total_earnings = round_currency(input.gross_salary) + overtime_pay + dsr;

    let trace = format!(
        "overtime: {} hours x {} x (1 + {}%) = {}; DSR {} / {} working days x {} rest days = {}",
        input.overtime_hours.normalize(),
        round_currency(hourly_rate).normalize(),
        (surcharge_rate * Decimal::ONE_HUNDRED).normalize(),
        overtime_pay.normalize(),
        overtime_pay.normalize(),
        input.working_days,
        input.rest_days,
        dsr.normalize(),
    );

    Ok(OvertimeResult {
        hourly_rate: round_currency(hourly_rate),
        surcharge_rate,
        overtime_pay,
        dsr,
        total_earnings,
        trace,
    })
}
