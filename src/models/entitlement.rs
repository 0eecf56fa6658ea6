//! Input and result records for the composite-entitlement calculators
//! (overtime, vacation, thirteenth salary, FGTS, severance,
//! unemployment insurance).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The legal ground on which an employment contract ended.
///
/// A closed enumeration: each variant selects a fixed set of severance
/// components. There is no run-time extension of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationType {
    /// Employer-initiated dismissal without just cause.
    DismissalWithoutCause,
    /// Employer-initiated dismissal with just cause.
    DismissalWithCause,
    /// Worker-initiated resignation.
    Resignation,
    /// Termination by mutual agreement (art. 484-A).
    MutualAgreement,
    /// Natural end of a fixed-term contract.
    EndOfContract,
}

/// Whether the prior notice period was worked or indemnified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The notice period was worked; no indemnity is due.
    Worked,
    /// The notice period is paid out as an indemnity.
    #[default]
    Indemnified,
}

/// Which overtime surcharge applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeKind {
    /// Ordinary weekday overtime (50% surcharge).
    #[default]
    Weekday,
    /// Sunday and holiday overtime (100% surcharge).
    SundayHoliday,
}

/// Input for the overtime calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeInput {
    /// Base monthly salary.
    pub gross_salary: Decimal,
    /// Overtime hours worked in the month.
    pub overtime_hours: Decimal,
    /// Which surcharge applies.
    #[serde(default)]
    pub kind: OvertimeKind,
    /// Working days in the month, for the DSR reflection.
    pub working_days: u32,
    /// Paid rest days (Sundays and holidays) in the month.
    pub rest_days: u32,
    /// Whether to add the DSR reflection of the overtime pay.
    #[serde(default = "default_true")]
    pub include_dsr: bool,
}

fn default_true() -> bool {
    true
}

/// Result of the overtime calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Salary divided by the standard monthly hours.
    pub hourly_rate: Decimal,
    /// The surcharge applied (0.50 or 1.00).
    pub surcharge_rate: Decimal,
    /// Overtime pay for the month.
    pub overtime_pay: Decimal,
    /// DSR reflection of the overtime pay (zero when excluded).
    pub dsr: Decimal,
    /// Salary plus overtime pay plus DSR.
    pub total_earnings: Decimal,
    /// Human-readable computation trace.
    pub trace: String,
}

/// Input for the vacation calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationInput {
    /// Base monthly salary.
    pub gross_salary: Decimal,
    /// Vacation days taken (1 to 30).
    pub vacation_days: u32,
    /// Whether one third of the entitlement (10 days) is sold as a
    /// pecuniary allowance (abono).
    #[serde(default)]
    pub sell_one_third: bool,
    /// Declared dependents, for the IRRF withholding on the taxable
    /// portion.
    #[serde(default)]
    pub dependents: u32,
}

/// Result of the vacation calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationResult {
    /// Pay for the vacation days taken.
    pub vacation_pay: Decimal,
    /// Constitutional one-third addition on the vacation pay.
    pub constitutional_third: Decimal,
    /// Pecuniary allowance for the sold days plus its one-third
    /// (tax-exempt); zero when nothing is sold.
    pub abono: Decimal,
    /// Sum of all gross components.
    pub gross: Decimal,
    /// INSS withheld from the taxable portion.
    pub inss: Decimal,
    /// IRRF withheld from the taxable portion.
    pub irrf: Decimal,
    /// Gross minus withholdings.
    pub net: Decimal,
}

/// Input for the thirteenth-salary calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthInput {
    /// Base monthly salary.
    pub gross_salary: Decimal,
    /// Pro-rata months worked in the year (1 to 12, after the 15-day
    /// rounding rule).
    pub months_worked: u32,
    /// Declared dependents, for the IRRF withholding.
    #[serde(default)]
    pub dependents: u32,
}

/// Result of the thirteenth-salary calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthResult {
    /// Full thirteenth salary for the worked months.
    pub gross: Decimal,
    /// First installment (half the gross, no withholding).
    pub first_installment: Decimal,
    /// INSS on the full gross, withheld from the second installment.
    pub inss: Decimal,
    /// IRRF on the full gross, withheld from the second installment.
    pub irrf: Decimal,
    /// Second installment after withholdings.
    pub second_installment: Decimal,
    /// Gross minus withholdings.
    pub net: Decimal,
}

/// Input for the FGTS calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FgtsInput {
    /// Base monthly salary.
    pub gross_salary: Decimal,
    /// Months of deposits to project.
    pub months: u32,
    /// Fund balance already accrued before the projected period.
    #[serde(default)]
    pub opening_balance: Decimal,
    /// When present, adds the termination penalty the variant selects
    /// (40% without cause, 20% mutual agreement, otherwise none).
    #[serde(default)]
    pub termination: Option<TerminationType>,
}

/// Result of the FGTS calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FgtsResult {
    /// One monthly deposit (salary × 8%).
    pub monthly_deposit: Decimal,
    /// Deposits accumulated over the projected months.
    pub period_deposits: Decimal,
    /// Opening balance plus period deposits.
    pub balance: Decimal,
    /// Termination penalty on the balance (zero when not applicable).
    pub penalty: Decimal,
    /// Balance plus penalty.
    pub total: Decimal,
}

/// Input for the severance calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceInput {
    /// Base monthly salary at termination.
    pub gross_salary: Decimal,
    /// Date the contract started.
    pub admission_date: NaiveDate,
    /// Date the contract ended.
    pub termination_date: NaiveDate,
    /// The legal ground for the termination.
    pub termination_type: TerminationType,
    /// FGTS balance at termination, the base for the penalty.
    #[serde(default)]
    pub fgts_balance: Decimal,
    /// Whether the notice period was worked or indemnified.
    #[serde(default)]
    pub notice: NoticeKind,
    /// Fully accrued but untaken vacation days (0 to 30).
    #[serde(default)]
    pub accrued_vacation_days: u32,
    /// Declared dependents, for the IRRF withholding.
    #[serde(default)]
    pub dependents: u32,
}

/// Result of the severance calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Completed service months (15-day rule applied).
    pub service_months: u32,
    /// Notice period length in days (30 + 3 per service year, max 90).
    pub notice_days: u32,
    /// Salary for the days worked in the final month.
    pub salary_balance: Decimal,
    /// Indemnified notice pay (zero when worked or not due).
    pub notice_pay: Decimal,
    /// Pay for fully accrued untaken vacation.
    pub accrued_vacation: Decimal,
    /// One-third addition on the accrued vacation.
    pub accrued_vacation_third: Decimal,
    /// Proportional vacation for the incomplete accrual year.
    pub proportional_vacation: Decimal,
    /// One-third addition on the proportional vacation.
    pub proportional_vacation_third: Decimal,
    /// Proportional thirteenth salary for the termination year.
    pub thirteenth_salary: Decimal,
    /// FGTS penalty on the fund balance.
    pub fgts_penalty: Decimal,
    /// Sum of all components (penalty included).
    pub gross: Decimal,
    /// INSS withheld (salary balance and thirteenth, each taxed
    /// separately).
    pub inss: Decimal,
    /// IRRF withheld (salary balance and thirteenth, each taxed
    /// separately).
    pub irrf: Decimal,
    /// Gross minus withholdings.
    pub net: Decimal,
}

/// Which unemployment-insurance request this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnemploymentRequest {
    /// First request; requires the longest qualifying period.
    First,
    /// Second request.
    Second,
    /// Third or later request; qualifies soonest.
    ThirdOrMore,
}

/// Input for the unemployment-insurance calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentInput {
    /// The last salaries (up to three) used for the benefit average.
    pub salaries: Vec<Decimal>,
    /// Months worked in the qualifying period.
    pub months_worked: u32,
    /// Which request this is.
    pub request: UnemploymentRequest,
}

/// Result of the unemployment-insurance calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentResult {
    /// Average of the provided salaries.
    pub average_salary: Decimal,
    /// Value of each installment (tiered, capped, floored at the
    /// minimum wage).
    pub installment_value: Decimal,
    /// Number of installments granted.
    pub installments: u32,
    /// Installment value times the installment count.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_termination_type_snake_case() {
        let t: TerminationType = serde_json::from_str("\"dismissal_without_cause\"").unwrap();
        assert_eq!(t, TerminationType::DismissalWithoutCause);
    }

    #[test]
    fn test_overtime_input_defaults() {
        let json = r#"{
            "gross_salary": "2200.00",
            "overtime_hours": "10",
            "working_days": 25,
            "rest_days": 5
        }"#;
        let input: OvertimeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.kind, OvertimeKind::Weekday);
        assert!(input.include_dsr);
    }

    #[test]
    fn test_severance_input_defaults() {
        let json = r#"{
            "gross_salary": "3000.00",
            "admission_date": "2020-03-01",
            "termination_date": "2024-06-20",
            "termination_type": "resignation"
        }"#;
        let input: SeveranceInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.notice, NoticeKind::Indemnified);
        assert_eq!(input.fgts_balance, Decimal::ZERO);
        assert_eq!(input.accrued_vacation_days, 0);
    }

    #[test]
    fn test_unemployment_request_snake_case() {
        let r: UnemploymentRequest = serde_json::from_str("\"third_or_more\"").unwrap();
        assert_eq!(r, UnemploymentRequest::ThirdOrMore);
    }
}
