//! Configuration loading and legal-table types.
//!
//! The yearly legal tables (bracket boundaries, fixed percentages,
//! minimum wage, contribution ceiling) are configuration data injected
//! into the calculators, never compiled-in constants. Updating a table
//! year means adding a YAML directory, not touching calculator logic.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BenefitTier, CENT, EligibilityMonths, InssTable, InstallmentRule, IrrfTable, LaborTables,
    OvertimeRates, PremiumRates, TableBound, TaxBracket, UnemploymentTable, UnhealthinessRates,
    YearMetadata, validate_brackets,
};
