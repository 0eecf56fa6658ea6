//! Input and result records for the proportional-premium calculators
//! (night shift, hazard, unhealthiness).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a premium covers the whole period or is weighted by the
/// exposed fraction of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PremiumMode {
    /// The fixed legal rate applies to the entire period.
    #[default]
    FullPeriod,
    /// The rate is scaled by `exposure_hours / total_hours`.
    Proportional,
}

/// Input for a proportional-premium calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumInput {
    /// Base monthly salary the premium is drawn from.
    pub base_salary: Decimal,
    /// Whether the premium condition applies at all. When false the
    /// calculator short-circuits to a zero result.
    pub applies: bool,
    /// Hours exposed to the premium condition (proportional mode).
    #[serde(default)]
    pub exposure_hours: Decimal,
    /// Total hours in the period (proportional mode).
    #[serde(default)]
    pub total_hours: Decimal,
    /// Full-period or exposure-weighted application.
    #[serde(default)]
    pub mode: PremiumMode,
    /// Optional multi-month multiplier.
    #[serde(default)]
    pub months: Option<u32>,
}

/// Exposure degree for the unhealthiness premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhealthinessDegree {
    /// Low degree, 10% of the minimum wage.
    Low,
    /// Medium degree, 20% of the minimum wage.
    Medium,
    /// High degree, 40% of the minimum wage.
    High,
}

/// Input for the unhealthiness premium, which is drawn from the
/// minimum wage rather than the worker's salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnhealthinessInput {
    /// Exposure degree selecting the legal rate.
    pub degree: UnhealthinessDegree,
    /// Whether the premium condition applies at all.
    pub applies: bool,
    /// Hours exposed to the unhealthy condition (proportional mode).
    #[serde(default)]
    pub exposure_hours: Decimal,
    /// Total hours in the period (proportional mode).
    #[serde(default)]
    pub total_hours: Decimal,
    /// Full-period or exposure-weighted application.
    #[serde(default)]
    pub mode: PremiumMode,
    /// Optional multi-month multiplier.
    #[serde(default)]
    pub months: Option<u32>,
}

/// Result of a proportional-premium calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumResult {
    /// Base amount for the period (salary × months).
    pub base_amount: Decimal,
    /// The rate actually applied (fixed rate or exposure-weighted
    /// fraction of it), rounded to four decimal places.
    pub applied_rate: Decimal,
    /// Premium amount for the period.
    pub premium: Decimal,
    /// Base plus premium.
    pub total: Decimal,
    /// Human-readable computation trace.
    pub trace: String,
}
