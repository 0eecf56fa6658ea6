//! HTTP request handlers for the calculation API.
//!
//! One POST endpoint per calculator plus the history endpoints. Every
//! handler validates its input, runs the pure calculator, appends a
//! history record, and returns the result as JSON.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_fgts, calculate_hazard, calculate_inss, calculate_irrf, calculate_night_shift,
    calculate_overtime, calculate_severance, calculate_thirteenth, calculate_unemployment,
    calculate_unhealthiness, calculate_vacation,
};
use crate::error::EngineError;
use crate::history::{HistoryRecord, HistorySummary};
use crate::models::{
    FgtsInput, OvertimeInput, PremiumInput, SeveranceInput, TaxInput, ThirteenthInput,
    UnemploymentInput, UnhealthinessInput, VacationInput,
};
use crate::report::format_brl;
use crate::validation::{
    validate_fgts_input, validate_overtime_input, validate_premium_input,
    validate_severance_input, validate_tax_input, validate_thirteenth_input,
    validate_unemployment_input, validate_unhealthiness_input, validate_vacation_input,
};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/inss", post(inss_handler))
        .route("/calculate/irrf", post(irrf_handler))
        .route("/calculate/night-shift", post(night_shift_handler))
        .route("/calculate/hazard", post(hazard_handler))
        .route("/calculate/unhealthiness", post(unhealthiness_handler))
        .route("/calculate/overtime", post(overtime_handler))
        .route("/calculate/vacation", post(vacation_handler))
        .route("/calculate/thirteenth", post(thirteenth_handler))
        .route("/calculate/fgts", post(fgts_handler))
        .route("/calculate/severance", post(severance_handler))
        .route("/calculate/unemployment", post(unemployment_handler))
        .route(
            "/history",
            get(history_list_handler).delete(history_clear_handler),
        )
        .route("/history/:id", axum::routing::delete(history_remove_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn failure_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
    ApiErrorResponse::from(err).into_response()
}

/// Appends a history record for a completed calculation. Recording
/// failures are logged and never affect the response.
fn record<I: Serialize, R: Serialize>(
    state: &AppState,
    correlation_id: Uuid,
    kind: &str,
    title: &str,
    input: &I,
    result: &R,
    gross: Decimal,
    net: Decimal,
) {
    let (input_json, result_json) =
        match (serde_json::to_value(input), serde_json::to_value(result)) {
            (Ok(i), Ok(r)) => (i, r),
            _ => {
                warn!(correlation_id = %correlation_id, kind, "Skipped history record");
                return;
            }
        };

    let id = state.history().append(HistoryRecord::new(
        kind,
        title,
        input_json,
        result_json,
        HistorySummary {
            gross,
            net,
            description: format!("{}: {}", title, format_brl(net)),
        },
    ));
    info!(correlation_id = %correlation_id, record_id = %id, kind, "Recorded calculation");
}

async fn inss_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing INSS calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_tax_input(&input) {
        return failure_response(err, correlation_id);
    }
    match calculate_inss(&input, state.config().tables()) {
        Ok(result) => {
            record(
                &state,
                correlation_id,
                "inss",
                "INSS contribution",
                &input,
                &result,
                result.gross,
                result.net,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

async fn irrf_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing IRRF calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_tax_input(&input) {
        return failure_response(err, correlation_id);
    }
    match calculate_irrf(&input, state.config().tables()) {
        Ok(result) => {
            record(
                &state,
                correlation_id,
                "irrf",
                "IRRF withholding",
                &input,
                &result,
                result.gross,
                result.net,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

async fn night_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<PremiumInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing night-shift calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_premium_input(&input) {
        return failure_response(err, correlation_id);
    }
    let result = calculate_night_shift(&input, state.config().tables());
    record(
        &state,
        correlation_id,
        "night_shift",
        "Night-shift premium",
        &input,
        &result,
        result.total,
        result.total,
    );
    (StatusCode::OK, Json(result)).into_response()
}

async fn hazard_handler(
    State(state): State<AppState>,
    payload: Result<Json<PremiumInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hazard calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_premium_input(&input) {
        return failure_response(err, correlation_id);
    }
    let result = calculate_hazard(&input, state.config().tables());
    record(
        &state,
        correlation_id,
        "hazard",
        "Hazard premium",
        &input,
        &result,
        result.total,
        result.total,
    );
    (StatusCode::OK, Json(result)).into_response()
}

async fn unhealthiness_handler(
    State(state): State<AppState>,
    payload: Result<Json<UnhealthinessInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing unhealthiness calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_unhealthiness_input(&input) {
        return failure_response(err, correlation_id);
    }
    let result = calculate_unhealthiness(&input, state.config().tables());
    record(
        &state,
        correlation_id,
        "unhealthiness",
        "Unhealthiness premium",
        &input,
        &result,
        result.total,
        result.total,
    );
    (StatusCode::OK, Json(result)).into_response()
}

async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_overtime_input(&input) {
        return failure_response(err, correlation_id);
    }
    match calculate_overtime(&input, state.config().tables()) {
        Ok(result) => {
            record(
                &state,
                correlation_id,
                "overtime",
                "Overtime with DSR",
                &input,
                &result,
                result.total_earnings,
                result.total_earnings,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

async fn vacation_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_vacation_input(&input) {
        return failure_response(err, correlation_id);
    }
    match calculate_vacation(&input, state.config().tables()) {
        Ok(result) => {
            record(
                &state,
                correlation_id,
                "vacation",
                "Vacation pay",
                &input,
                &result,
                result.gross,
                result.net,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

async fn thirteenth_handler(
    State(state): State<AppState>,
    payload: Result<Json<ThirteenthInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing thirteenth-salary calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_thirteenth_input(&input) {
        return failure_response(err, correlation_id);
    }
    match calculate_thirteenth(&input, state.config().tables()) {
        Ok(result) => {
            record(
                &state,
                correlation_id,
                "thirteenth",
                "Thirteenth salary",
                &input,
                &result,
                result.gross,
                result.net,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

async fn fgts_handler(
    State(state): State<AppState>,
    payload: Result<Json<FgtsInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing FGTS calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_fgts_input(&input) {
        return failure_response(err, correlation_id);
    }
    let result = calculate_fgts(&input, state.config().tables());
    record(
        &state,
        correlation_id,
        "fgts",
        "FGTS projection",
        &input,
        &result,
        result.total,
        result.total,
    );
    (StatusCode::OK, Json(result)).into_response()
}

async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_severance_input(&input) {
        return failure_response(err, correlation_id);
    }
    match calculate_severance(&input, state.config().tables()) {
        Ok(result) => {
            record(
                &state,
                correlation_id,
                "severance",
                "Termination settlement",
                &input,
                &result,
                result.gross,
                result.net,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

async fn unemployment_handler(
    State(state): State<AppState>,
    payload: Result<Json<UnemploymentInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing unemployment calculation");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if let Err(err) = validate_unemployment_input(&input) {
        return failure_response(err, correlation_id);
    }
    match calculate_unemployment(&input, state.config().tables()) {
        Ok(result) => {
            record(
                &state,
                correlation_id,
                "unemployment",
                "Unemployment insurance",
                &input,
                &result,
                result.total,
                result.total,
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

async fn history_list_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.history().list())).into_response()
}

async fn history_remove_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    if state.history().remove(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(
                "RECORD_NOT_FOUND",
                format!("No history record with id {}", id),
            )),
        )
            .into_response()
    }
}

async fn history_clear_handler(State(state): State<AppState>) -> Response {
    state.history().clear();
    StatusCode::NO_CONTENT.into_response()
}
