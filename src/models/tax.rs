//! Input and result records for the withholding calculators (INSS/IRRF).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the requested period maps onto the monthly legal tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// One month against the monthly table.
    #[default]
    SinglePeriod,
    /// A closed multi-month period scaled linearly by the month count.
    Annualized,
    /// A forward projection scaled linearly by the month count.
    Projected,
}

/// Input for a withholding calculation (INSS or IRRF).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Gross monthly salary.
    pub gross_salary: Decimal,
    /// Number of declared dependents (IRRF only; ignored by INSS).
    #[serde(default)]
    pub dependents: u32,
    /// Deductions already withheld from the base (e.g., the INSS
    /// contribution when computing IRRF).
    #[serde(default)]
    pub prior_deductions: Decimal,
    /// Period mapping mode.
    #[serde(default)]
    pub mode: CalculationMode,
    /// Period length in months; required when `mode` is not
    /// single-period.
    #[serde(default)]
    pub months: Option<u32>,
}

/// The bracket an input salary matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedBracket {
    /// Inclusive lower bound.
    pub lower: Decimal,
    /// Inclusive upper bound; `None` for the unbounded top bracket.
    pub upper: Option<Decimal>,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// Subtraction constant (zero for cumulative tables).
    pub deduction: Decimal,
}

/// One bracket's slice of a cumulative-sum calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    /// Inclusive lower bound of the bracket.
    pub lower: Decimal,
    /// Inclusive upper bound; `None` for the unbounded top bracket.
    pub upper: Option<Decimal>,
    /// Rate applied to the slice.
    pub rate: Decimal,
    /// The portion of the base taxed in this bracket.
    pub taxed_amount: Decimal,
    /// The contribution produced by this slice, rounded to cents.
    pub contribution: Decimal,
}

/// Result of a withholding calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Gross amount for the requested period.
    pub gross: Decimal,
    /// Computed tax/contribution for the period.
    pub tax: Decimal,
    /// Net amount (`gross - tax`).
    pub net: Decimal,
    /// `tax / gross`, recomputed from the (possibly scaled) period
    /// totals, rounded to four decimal places.
    pub effective_rate: Decimal,
    /// Rate of the matched bracket.
    pub marginal_rate: Decimal,
    /// The bracket the (capped) base fell into.
    pub bracket: MatchedBracket,
    /// Per-bracket contributions; populated by the cumulative-sum
    /// calculator, empty for single-bracket-lookup.
    #[serde(default)]
    pub breakdown: Vec<BracketContribution>,
}
