//! Data models for the CLT calculation engine.
//!
//! Every calculator consumes a typed input record and produces a typed
//! result record. Records are created fresh per invocation and carry no
//! identity beyond it; only the history record (see [`crate::history`])
//! outlives a call.

mod entitlement;
mod premium;
mod tax;

pub use entitlement::{
    FgtsInput, FgtsResult, NoticeKind, OvertimeInput, OvertimeKind, OvertimeResult,
    SeveranceInput, SeveranceResult, TerminationType, ThirteenthInput, ThirteenthResult,
    UnemploymentInput, UnemploymentRequest, UnemploymentResult, VacationInput, VacationResult,
};
pub use premium::{
    PremiumInput, PremiumMode, PremiumResult, UnhealthinessDegree, UnhealthinessInput,
};
pub use tax::{BracketContribution, CalculationMode, MatchedBracket, TaxInput, TaxResult};
