//! Error types for the CLT calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during calculation.

use thiserror::Error;

/// A single rejected input field with a human-readable reason.
///
/// Validation never clamps or guesses: each offending field is reported
/// by name so callers can surface field-level messages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldIssue {
    /// The name of the offending input field.
    pub field: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl FieldIssue {
    /// Creates a new field issue.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// The main error type for the CLT calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use clt_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A legal table is malformed (gaps, overlaps, wrong bounds).
    ///
    /// This is a configuration defect, never a user error. It must fail
    /// loudly instead of silently defaulting any amount to zero.
    #[error("Invalid legal table '{table}': {message}")]
    InvalidTable {
        /// The name of the malformed table.
        table: String,
        /// A description of the defect.
        message: String,
    },

    /// User input was rejected by the validation layer.
    ///
    /// Carries one issue per offending field; calculators are never
    /// invoked when this is produced.
    #[error("Invalid input: {}", format_issues(.issues))]
    InvalidInput {
        /// The rejected fields and reasons.
        issues: Vec<FieldIssue>,
    },

    /// The worker does not meet an eligibility threshold for a benefit.
    #[error("Not eligible ({field}): {message}")]
    Ineligible {
        /// The field that fell short of the threshold.
        field: String,
        /// A description of the shortfall.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
