//! Plain-text report rendering.
//!
//! Turns a calculation input and its result into the Brazilian display
//! conventions: `R$ 1.234,56` for currency and a comma decimal for
//! percentages. The reports only format figures the calculators already
//! rounded; no arithmetic happens here.

use rust_decimal::Decimal;

use crate::calculation::round_currency;
use crate::models::{
    CalculationMode, FgtsInput, FgtsResult, OvertimeInput, OvertimeKind, OvertimeResult,
    PremiumInput, PremiumMode, PremiumResult, SeveranceInput, SeveranceResult, TaxInput,
    TaxResult, TerminationType, ThirteenthInput, ThirteenthResult, UnemploymentInput,
    UnemploymentRequest, UnemploymentResult, UnhealthinessDegree, UnhealthinessInput,
    VacationInput, VacationResult,
};

/// Formats a currency amount as `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();
    let (integer, cents) = match text.split_once('.') {
        Some((i, c)) => (i.to_string(), format!("{c:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents}")
}

/// Formats a fractional rate as a percentage, e.g. `0.075` as `7,5%`.
pub fn format_percent(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    format!("{}%", percent.to_string().replace('.', ","))
}

fn termination_label(termination: TerminationType) -> &'static str {
    match termination {
        TerminationType::DismissalWithoutCause => "dismissal without cause",
        TerminationType::DismissalWithCause => "dismissal with cause",
        TerminationType::Resignation => "resignation",
        TerminationType::MutualAgreement => "mutual agreement",
        TerminationType::EndOfContract => "end of contract",
    }
}

fn degree_label(degree: UnhealthinessDegree) -> &'static str {
    match degree {
        UnhealthinessDegree::Low => "low",
        UnhealthinessDegree::Medium => "medium",
        UnhealthinessDegree::High => "high",
    }
}

fn overtime_label(kind: OvertimeKind) -> &'static str {
    match kind {
        OvertimeKind::Weekday => "weekday",
        OvertimeKind::SundayHoliday => "sunday/holiday",
    }
}

fn request_label(request: UnemploymentRequest) -> &'static str {
    match request {
        UnemploymentRequest::First => "first",
        UnemploymentRequest::Second => "second",
        UnemploymentRequest::ThirdOrMore => "third or later",
    }
}

/// Renders an INSS or IRRF result, with the bracket breakdown when the
/// calculation produced one.
pub fn tax_report(title: &str, input: &TaxInput, result: &TaxResult) -> String {
    let mut lines = vec![title.to_string()];
    if input.dependents > 0 {
        lines.push(format!("Dependents: {}", input.dependents));
    }
    if input.mode != CalculationMode::SinglePeriod {
        if let Some(months) = input.months {
            lines.push(format!("Period: {months} months"));
        }
    }
    lines.push(format!("Gross: {}", format_brl(result.gross)));
    for slice in &result.breakdown {
        let upper = match slice.upper {
            Some(u) => format_brl(u),
            None => "above".to_string(),
        };
        lines.push(format!(
            "  {} to {} at {}: {}",
            format_brl(slice.lower),
            upper,
            format_percent(slice.rate),
            format_brl(slice.contribution),
        ));
    }
    lines.push(format!(
        "Tax: {} (effective {}, marginal {})",
        format_brl(result.tax),
        format_percent(result.effective_rate),
        format_percent(result.marginal_rate),
    ));
    lines.push(format!("Net: {}", format_brl(result.net)));
    lines.join("\n")
}

fn premium_body(result: &PremiumResult) -> [String; 4] {
    [
        format!("Base: {}", format_brl(result.base_amount)),
        format!("Applied rate: {}", format_percent(result.applied_rate)),
        format!("Premium: {}", format_brl(result.premium)),
        format!("Total: {}", format_brl(result.total)),
    ]
}

fn exposure_line(exposure: Decimal, total: Decimal) -> String {
    format!(
        "Exposure: {} of {} hours",
        exposure.normalize(),
        total.normalize()
    )
}

/// Renders a night-shift or hazard premium result.
pub fn premium_report(title: &str, input: &PremiumInput, result: &PremiumResult) -> String {
    let mut lines = vec![title.to_string()];
    if input.mode == PremiumMode::Proportional {
        lines.push(exposure_line(input.exposure_hours, input.total_hours));
    }
    lines.extend(premium_body(result));
    lines.join("\n")
}

/// Renders an unhealthiness premium result, naming the exposure degree.
pub fn unhealthiness_report(input: &UnhealthinessInput, result: &PremiumResult) -> String {
    let mut lines = vec![format!(
        "Unhealthiness premium ({} degree)",
        degree_label(input.degree)
    )];
    if input.mode == PremiumMode::Proportional {
        lines.push(exposure_line(input.exposure_hours, input.total_hours));
    }
    lines.extend(premium_body(result));
    lines.join("\n")
}

/// Renders an overtime result.
pub fn overtime_report(input: &OvertimeInput, result: &OvertimeResult) -> String {
    let mut lines = vec![
        format!("Overtime ({})", overtime_label(input.kind)),
        format!("Hours: {}", input.overtime_hours.normalize()),
        format!("Hourly rate: {}", format_brl(result.hourly_rate)),
        format!("Surcharge: {}", format_percent(result.surcharge_rate)),
        format!("Overtime pay: {}", format_brl(result.overtime_pay)),
    ];
    if input.include_dsr {
        lines.push(format!(
            "DSR ({} working days, {} rest days): {}",
            input.working_days,
            input.rest_days,
            format_brl(result.dsr)
        ));
    }
    lines.push(format!(
        "Total earnings: {}",
        format_brl(result.total_earnings)
    ));
    lines.join("\n")
}

/// Renders a vacation result.
pub fn vacation_report(input: &VacationInput, result: &VacationResult) -> String {
    let mut lines = vec![
        format!("Vacation ({} days)", input.vacation_days),
        format!("Vacation pay: {}", format_brl(result.vacation_pay)),
        format!(
            "Constitutional third: {}",
            format_brl(result.constitutional_third)
        ),
    ];
    if input.sell_one_third {
        lines.push(format!("Abono: {}", format_brl(result.abono)));
    }
    lines.push(format!("Gross: {}", format_brl(result.gross)));
    lines.push(format!("INSS: {}", format_brl(result.inss)));
    lines.push(format!("IRRF: {}", format_brl(result.irrf)));
    lines.push(format!("Net: {}", format_brl(result.net)));
    lines.join("\n")
}

/// Renders a thirteenth-salary result.
pub fn thirteenth_report(input: &ThirteenthInput, result: &ThirteenthResult) -> String {
    [
        format!("Thirteenth salary ({} months)", input.months_worked),
        format!("Gross: {}", format_brl(result.gross)),
        format!("First installment: {}", format_brl(result.first_installment)),
        format!("INSS: {}", format_brl(result.inss)),
        format!("IRRF: {}", format_brl(result.irrf)),
        format!("Second installment: {}", format_brl(result.second_installment)),
        format!("Net: {}", format_brl(result.net)),
    ]
    .join("\n")
}

/// Renders an FGTS result.
pub fn fgts_report(input: &FgtsInput, result: &FgtsResult) -> String {
    let mut lines = vec![
        format!("FGTS ({} months)", input.months),
        format!("Monthly deposit: {}", format_brl(result.monthly_deposit)),
        format!("Period deposits: {}", format_brl(result.period_deposits)),
        format!("Balance: {}", format_brl(result.balance)),
    ];
    if let Some(termination) = input.termination {
        lines.push(format!(
            "Penalty ({}): {}",
            termination_label(termination),
            format_brl(result.penalty)
        ));
    }
    lines.push(format!("Total: {}", format_brl(result.total)));
    lines.join("\n")
}

/// Renders a severance result, omitting lines that are not owed.
pub fn severance_report(input: &SeveranceInput, result: &SeveranceResult) -> String {
    let mut lines = vec![
        "Termination settlement".to_string(),
        format!("Ground: {}", termination_label(input.termination_type)),
        format!(
            "Period: {} to {}",
            input.admission_date, input.termination_date
        ),
        format!("Service: {} months", result.service_months),
        format!("Salary balance: {}", format_brl(result.salary_balance)),
    ];
    if result.notice_pay > Decimal::ZERO {
        lines.push(format!(
            "Notice pay ({} days): {}",
            result.notice_days,
            format_brl(result.notice_pay)
        ));
    }
    if result.accrued_vacation > Decimal::ZERO {
        lines.push(format!(
            "Accrued vacation: {} + {}",
            format_brl(result.accrued_vacation),
            format_brl(result.accrued_vacation_third)
        ));
    }
    if result.proportional_vacation > Decimal::ZERO {
        lines.push(format!(
            "Proportional vacation: {} + {}",
            format_brl(result.proportional_vacation),
            format_brl(result.proportional_vacation_third)
        ));
    }
    if result.thirteenth_salary > Decimal::ZERO {
        lines.push(format!(
            "Thirteenth salary: {}",
            format_brl(result.thirteenth_salary)
        ));
    }
    if result.fgts_penalty > Decimal::ZERO {
        lines.push(format!("FGTS penalty: {}", format_brl(result.fgts_penalty)));
    }
    lines.push(format!("Gross: {}", format_brl(result.gross)));
    lines.push(format!("INSS: {}", format_brl(result.inss)));
    lines.push(format!("IRRF: {}", format_brl(result.irrf)));
    lines.push(format!("Net: {}", format_brl(result.net)));
    lines.join("\n")
}

/// Renders an unemployment insurance result.
pub fn unemployment_report(input: &UnemploymentInput, result: &UnemploymentResult) -> String {
    [
        "Unemployment insurance".to_string(),
        format!(
            "Months worked: {} ({} request)",
            input.months_worked,
            request_label(input.request)
        ),
        format!("Average salary: {}", format_brl(result.average_salary)),
        format!(
            "Installments: {} x {}",
            result.installments,
            format_brl(result.installment_value)
        ),
        format!("Total: {}", format_brl(result.total)),
    ]
    .join("\n")
}
