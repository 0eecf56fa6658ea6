//! Calculation engine for withholdings, premiums, and entitlements.
//!
//! Each calculator is a pure function over a validated input and the
//! loaded year tables. All currency arithmetic uses [`rust_decimal`]
//! and rounds half-up to cents at each published figure.

pub mod brackets;
pub mod fgts;
pub mod hazard;
pub mod inss;
pub mod irrf;
pub mod night_shift;
pub mod overtime;
pub mod premium;
pub mod rounding;
pub mod service_period;
pub mod severance;
pub mod thirteenth;
pub mod unemployment;
pub mod unhealthiness;
pub mod vacation;

pub use brackets::{cumulative_tax, find_bracket, single_bracket_tax};
pub use fgts::calculate_fgts;
pub use hazard::calculate_hazard;
pub use inss::calculate_inss;
pub use irrf::calculate_irrf;
pub use night_shift::calculate_night_shift;
pub use overtime::calculate_overtime;
pub use premium::apply_premium;
pub use rounding::{round_currency, round_rate};
pub use service_period::{completed_service_years, pro_rata_months};
pub use severance::calculate_severance;
pub use thirteenth::calculate_thirteenth;
pub use unemployment::calculate_unemployment;
pub use unhealthiness::calculate_unhealthiness;
pub use vacation::calculate_vacation;
