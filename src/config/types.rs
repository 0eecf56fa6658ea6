//! Configuration types for the yearly legal tables.
//!
//! This module contains the strongly-typed table structures that are
//! deserialized from YAML configuration files. Tables are plain data:
//! they are passed by reference into the calculators, so several tax
//! years can be loaded side by side.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the table year.
#[derive(Debug, Clone, Deserialize)]
pub struct YearMetadata {
    /// ISO country code the tables apply to (e.g., "BR").
    pub country: String,
    /// The calendar year the tables are in force.
    pub year: i32,
    /// The national minimum wage for the year.
    pub minimum_wage: Decimal,
    /// URL to the official source of the tables.
    pub source_url: String,
}

/// A single progressive-rate bracket.
///
/// Bounds are inclusive on both ends; the next bracket's lower bound is
/// this bracket's upper bound plus one currency cent. A missing upper
/// bound means the bracket extends to infinity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of the bracket.
    pub lower: Decimal,
    /// Inclusive upper bound; `None` for the unbounded top bracket.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate applied within the bracket.
    pub rate: Decimal,
    /// Subtraction constant for lookup-style tables (zero for
    /// cumulative tables).
    #[serde(default)]
    pub deduction: Decimal,
}

/// The INSS contribution table (`inss.yaml`).
///
/// Cumulative style: each slice of salary is taxed at its own bracket
/// rate, and the top bracket's upper bound is the contribution ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct InssTable {
    /// Ordered, contiguous brackets starting at zero.
    pub brackets: Vec<TaxBracket>,
}

impl InssTable {
    /// Returns the contribution ceiling (the top bracket's upper bound).
    pub fn ceiling(&self) -> EngineResult<Decimal> {
        self.brackets
            .last()
            .and_then(|b| b.upper)
            .ok_or_else(|| EngineError::InvalidTable {
                table: "inss".to_string(),
                message: "top bracket must carry the contribution ceiling".to_string(),
            })
    }
}

/// The IRRF withholding table (`irrf.yaml`).
///
/// Lookup style: the matched bracket's rate and deduction constant
/// already encode the cumulative effect.
#[derive(Debug, Clone, Deserialize)]
pub struct IrrfTable {
    /// Fixed deduction per declared dependent.
    pub dependent_deduction: Decimal,
    /// Ordered, contiguous brackets starting at zero; top bracket is
    /// unbounded.
    pub brackets: Vec<TaxBracket>,
}

/// Unhealthiness premium rates by exposure degree, applied over the
/// minimum wage.
#[derive(Debug, Clone, Deserialize)]
pub struct UnhealthinessRates {
    /// Low-degree rate (10%).
    pub low: Decimal,
    /// Medium-degree rate (20%).
    pub medium: Decimal,
    /// High-degree rate (40%).
    pub high: Decimal,
}

/// Overtime surcharge rates.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeRates {
    /// Surcharge for ordinary weekday overtime (50%).
    pub weekday: Decimal,
    /// Surcharge for Sunday and holiday overtime (100%).
    pub sunday_holiday: Decimal,
}

/// Fixed legal percentages from `premiums.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PremiumRates {
    /// Night-shift premium over the base salary (20%).
    pub night_shift: Decimal,
    /// Hazard premium over the base salary (30%).
    pub hazard: Decimal,
    /// Unhealthiness rates by degree.
    pub unhealthiness: UnhealthinessRates,
    /// Overtime surcharge rates.
    pub overtime: OvertimeRates,
    /// Monthly FGTS deposit rate over the salary (8%).
    pub fgts_deposit: Decimal,
    /// FGTS penalty on dismissal without cause (40%).
    pub fgts_penalty_dismissal: Decimal,
    /// FGTS penalty on termination by mutual agreement (20%).
    pub fgts_penalty_agreement: Decimal,
    /// Standard contractual hours per month (220).
    pub monthly_hours: Decimal,
}

/// A benefit tier for unemployment insurance.
///
/// Benefit value within the tier = average salary × `multiplier` +
/// `addend`.
#[derive(Debug, Clone, Deserialize)]
pub struct BenefitTier {
    /// Inclusive upper bound of the average salary range; `None` for
    /// the unbounded top tier.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Multiplier over the average salary.
    pub multiplier: Decimal,
    /// Fixed addend.
    pub addend: Decimal,
}

/// Months worked needed to qualify, by request number.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityMonths {
    /// First request.
    pub first: u32,
    /// Second request.
    pub second: u32,
    /// Third request onward.
    pub third_or_more: u32,
}

/// Installments granted for a band of months worked.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallmentRule {
    /// Inclusive upper bound on months worked; `None` for the open top
    /// band.
    #[serde(default)]
    pub upper_months: Option<u32>,
    /// Number of installments within the band.
    pub count: u32,
}

/// Unemployment insurance table (`unemployment.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct UnemploymentTable {
    /// Benefit tiers ordered by upper bound, top tier unbounded.
    pub tiers: Vec<BenefitTier>,
    /// Maximum installment value.
    pub cap: Decimal,
    /// Qualification thresholds per request number.
    pub minimum_months: EligibilityMonths,
    /// Installment bands ordered by upper bound, top band unbounded.
    pub installments: Vec<InstallmentRule>,
}

/// The complete set of legal tables for one calendar year.
#[derive(Debug, Clone)]
pub struct LaborTables {
    /// Year metadata, including the minimum wage.
    pub metadata: YearMetadata,
    /// INSS contribution brackets.
    pub inss: InssTable,
    /// IRRF withholding brackets.
    pub irrf: IrrfTable,
    /// Fixed premium percentages.
    pub premiums: PremiumRates,
    /// Unemployment insurance tiers.
    pub unemployment: UnemploymentTable,
}

impl LaborTables {
    /// Checks every table for structural defects.
    ///
    /// Brackets must start at zero, be totally ordered and contiguous
    /// (next lower bound = previous upper bound + 0.01), and end with a
    /// bounded bracket for INSS (the ceiling) or an unbounded one for
    /// IRRF. A defect here is a configuration error, treated as fatal.
    pub fn validate(&self) -> EngineResult<()> {
        validate_brackets(&self.inss.brackets, "inss", TableBound::Capped)?;
        validate_brackets(&self.irrf.brackets, "irrf", TableBound::Open)?;
        validate_tiers(&self.unemployment.tiers)?;
        validate_installments(&self.unemployment.installments)?;
        Ok(())
    }
}

/// Whether the top bracket of a table must be bounded or unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBound {
    /// Top bracket carries a finite upper bound (contribution ceiling).
    Capped,
    /// Top bracket extends to infinity.
    Open,
}

/// One currency cent, the gap between adjacent bracket bounds.
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

fn table_error(table: &str, message: String) -> EngineError {
    EngineError::InvalidTable {
        table: table.to_string(),
        message,
    }
}

/// Validates a bracket list for ordering, contiguity, and coverage.
pub fn validate_brackets(
    brackets: &[TaxBracket],
    table: &str,
    bound: TableBound,
) -> EngineResult<()> {
    let first = brackets
        .first()
        .ok_or_else(|| table_error(table, "table has no brackets".to_string()))?;

    if !first.lower.is_zero() {
        return Err(table_error(
            table,
            format!("first bracket must start at 0, found {}", first.lower),
        ));
    }

    for (i, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(table_error(
                table,
                format!("bracket {} rate {} outside [0, 1]", i, bracket.rate),
            ));
        }
        match bracket.upper {
            Some(upper) => {
                if upper < bracket.lower {
                    return Err(table_error(
                        table,
                        format!("bracket {} upper bound {} below lower bound {}", i, upper, bracket.lower),
                    ));
                }
                if let Some(next) = brackets.get(i + 1) {
                    if next.lower != upper + CENT {
                        return Err(table_error(
                            table,
                            format!(
                                "gap or overlap between brackets {} and {}: {} then {}",
                                i,
                                i + 1,
                                upper,
                                next.lower
                            ),
                        ));
                    }
                }
            }
            None => {
                if i + 1 != brackets.len() {
                    return Err(table_error(
                        table,
                        format!("bracket {} is unbounded but not last", i),
                    ));
                }
            }
        }
    }

    let top_upper = brackets.last().and_then(|b| b.upper);
    match bound {
        TableBound::Capped if top_upper.is_none() => Err(table_error(
            table,
            "top bracket must carry the contribution ceiling".to_string(),
        )),
        TableBound::Open if top_upper.is_some() => Err(table_error(
            table,
            "top bracket must be unbounded".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_tiers(tiers: &[BenefitTier]) -> EngineResult<()> {
    if tiers.is_empty() {
        return Err(table_error("unemployment", "table has no tiers".to_string()));
    }
    for (i, tier) in tiers.iter().enumerate() {
        if tier.upper.is_none() && i + 1 != tiers.len() {
            return Err(table_error(
                "unemployment",
                format!("tier {} is unbounded but not last", i),
            ));
        }
        if let (Some(a), Some(b)) = (
            tier.upper,
            tiers.get(i + 1).and_then(|t| t.upper.or(Some(Decimal::MAX))),
        ) {
            if b <= a {
                return Err(table_error(
                    "unemployment",
                    format!("tier {} upper bound {} not above previous {}", i + 1, b, a),
                ));
            }
        }
    }
    if tiers.last().is_some_and(|t| t.upper.is_some()) {
        return Err(table_error(
            "unemployment",
            "top tier must be unbounded".to_string(),
        ));
    }
    Ok(())
}

fn validate_installments(rules: &[InstallmentRule]) -> EngineResult<()> {
    if rules.is_empty() {
        return Err(table_error(
            "unemployment",
            "table has no installment bands".to_string(),
        ));
    }
    let mut previous: Option<u32> = None;
    for (i, rule) in rules.iter().enumerate() {
        match rule.upper_months {
            Some(upper) => {
                if previous.is_some_and(|p| upper <= p) {
                    return Err(table_error(
                        "unemployment",
                        format!("installment band {} upper bound {} not above previous", i, upper),
                    ));
                }
                previous = Some(upper);
            }
            None => {
                if i + 1 != rules.len() {
                    return Err(table_error(
                        "unemployment",
                        format!("installment band {} is unbounded but not last", i),
                    ));
                }
            }
        }
    }
    if rules.last().is_some_and(|r| r.upper_months.is_some()) {
        return Err(table_error(
            "unemployment",
            "top installment band must be unbounded".to_string(),
        ));
    }
    Ok(())
}
