//! Calculation engine for Brazilian labor-law (CLT) entitlements
//!
//! This crate computes the amounts a CLT employment relationship
//! produces: INSS and IRRF withholdings, night-shift, hazard, and
//! unhealthiness premiums, overtime with its DSR reflection, vacation
//! pay, the thirteenth salary, FGTS deposits, termination settlements,
//! and unemployment insurance. Legal tables are loaded from YAML per
//! reference year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod report;
pub mod validation;
