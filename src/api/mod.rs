//! HTTP API for the labor-law calculation engine.
//!
//! This module provides the REST endpoints for the calculators and the
//! calculation history.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
