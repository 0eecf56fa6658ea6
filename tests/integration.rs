//! Integration tests for the labor-law calculation API.
//!
//! Exercises every endpoint end to end:
//! - INSS and IRRF withholdings, including the reference scenarios
//! - Night-shift, hazard, and unhealthiness premiums
//! - Overtime with the DSR reflection
//! - Vacation, thirteenth salary, FGTS, severance
//! - Unemployment insurance, including ineligibility
//! - Validation rejections and the history lifecycle

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use clt_engine::api::{create_router, AppState};
use clt_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/br2024").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

// =============================================================================
// Withholdings
// =============================================================================

#[tokio::test]
async fn test_irrf_reference_scenario() {
    // 5000.00 with one dependent lands in the top bracket.
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/irrf",
        json!({ "gross_salary": "5000.00", "dependents": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tax"], "437.90");
    assert_eq!(body["net"], "4562.10");
    assert_eq!(body["bracket"]["rate"], "0.275");
}

#[tokio::test]
async fn test_inss_progressive_slices() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/inss",
        json!({ "gross_salary": "3000.00" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tax"], "258.82");
    assert_eq!(body["breakdown"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_inss_ceiling_caps_contribution() {
    let (_, at_ceiling) = post(
        create_router_for_test(),
        "/calculate/inss",
        json!({ "gross_salary": "7786.02" }),
    )
    .await;
    let (_, above) = post(
        create_router_for_test(),
        "/calculate/inss",
        json!({ "gross_salary": "20000.00" }),
    )
    .await;

    assert_eq!(at_ceiling["tax"], "908.86");
    assert_eq!(above["tax"], "908.86");
}

#[tokio::test]
async fn test_irrf_projected_mode_scales() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/irrf",
        json!({ "gross_salary": "5000.00", "dependents": 1, "mode": "projected", "months": 12 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 437.90 * 12
    assert_eq!(body["tax"], "5254.80");
}

// =============================================================================
// Premiums and overtime
// =============================================================================

#[tokio::test]
async fn test_hazard_proportional_exposure() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/hazard",
        json!({
            "base_salary": "2000.00",
            "applies": true,
            "exposure_hours": "100",
            "total_hours": "200",
            "mode": "proportional"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied_rate"], "0.15");
    assert_eq!(body["premium"], "300.00");
    assert_eq!(body["total"], "2300.00");
}

#[tokio::test]
async fn test_night_shift_full_period() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/night-shift",
        json!({ "base_salary": "2200.00", "applies": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["premium"], "440.00");
}

#[tokio::test]
async fn test_unhealthiness_uses_minimum_wage() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/unhealthiness",
        json!({ "degree": "high", "applies": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 40% of the 1412.00 minimum wage, whatever the worker earns.
    assert_eq!(body["base_amount"], "1412.00");
    assert_eq!(body["premium"], "564.80");
}

#[tokio::test]
async fn test_overtime_with_dsr() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/overtime",
        json!({
            "gross_salary": "2200.00",
            "overtime_hours": "10",
            "working_days": 25,
            "rest_days": 5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overtime_pay"], "150.00");
    assert_eq!(body["dsr"], "30.00");
    assert_eq!(body["total_earnings"], "2380.00");
}

// =============================================================================
// Entitlements
// =============================================================================

#[tokio::test]
async fn test_vacation_with_abono() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/vacation",
        json!({
            "gross_salary": "3000.00",
            "vacation_days": 30,
            "sell_one_third": true,
            "dependents": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vacation_pay"], "3000.00");
    assert_eq!(body["constitutional_third"], "1000.00");
    assert_eq!(body["abono"], "1333.33");
    // Withholdings over the taxable 4000.00 only.
    assert_eq!(body["inss"], "378.82");
    assert_eq!(body["irrf"], "172.78");
}

#[tokio::test]
async fn test_thirteenth_installments() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/thirteenth",
        json!({ "gross_salary": "3000.00", "months_worked": 12 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_installment"], "1500.00");
    assert_eq!(body["second_installment"], "1193.99");
    assert_eq!(body["net"], "2693.99");
}

#[tokio::test]
async fn test_fgts_with_dismissal_penalty() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/fgts",
        json!({
            "gross_salary": "3000.00",
            "months": 12,
            "opening_balance": "5000.00",
            "termination": "dismissal_without_cause"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["monthly_deposit"], "240.00");
    assert_eq!(body["balance"], "7880.00");
    assert_eq!(body["penalty"], "3152.00");
}

#[tokio::test]
async fn test_severance_dismissal_without_cause() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/severance",
        json!({
            "gross_salary": "3000.00",
            "admission_date": "2022-03-01",
            "termination_date": "2024-08-20",
            "termination_type": "dismissal_without_cause",
            "fgts_balance": "7000.00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service_months"], 30);
    assert_eq!(body["notice_days"], 36);
    assert_eq!(body["salary_balance"], "2000.00");
    assert_eq!(body["notice_pay"], "3600.00");
    assert_eq!(body["thirteenth_salary"], "2000.00");
    assert_eq!(body["fgts_penalty"], "2800.00");
    assert_eq!(body["net"], "12082.36");
}

#[tokio::test]
async fn test_unemployment_capped() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/unemployment",
        json!({
            "salaries": ["5000.00", "5200.00", "5100.00"],
            "months_worked": 26,
            "request": "first"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["installment_value"], "2313.74");
    assert_eq!(body["installments"], 5);
}

#[tokio::test]
async fn test_unemployment_ineligible_returns_422() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/unemployment",
        json!({ "salaries": ["2000.00"], "months_worked": 3, "request": "first" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INELIGIBLE");
    assert!(body["message"].as_str().unwrap().contains("months_worked"));
}

// =============================================================================
// Validation and parsing
// =============================================================================

#[tokio::test]
async fn test_validation_names_every_bad_field() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/vacation",
        json!({ "gross_salary": "-1.00", "vacation_days": 45, "sell_one_third": false }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("gross_salary"));
    assert!(details.contains("vacation_days"));
}

#[tokio::test]
async fn test_contradictory_premium_input_rejected() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/hazard",
        json!({ "base_salary": "2000.00", "applies": false, "exposure_hours": "5" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("exposure_hours"));
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate/irrf")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_months_in_projected_mode() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate/inss",
        json!({ "gross_salary": "3000.00", "mode": "projected" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("months"));
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn test_history_lifecycle() {
    let state = create_test_state();

    // Two calculations leave two records, newest first.
    let (status, _) = post(
        create_router(state.clone()),
        "/calculate/inss",
        json!({ "gross_salary": "3000.00" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = post(
        create_router(state.clone()),
        "/calculate/hazard",
        json!({ "base_salary": "2000.00", "applies": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, records) = send(create_router(state.clone()), Method::GET, "/history", None).await;
    assert_eq!(status, StatusCode::OK);
    let records = records.as_array().unwrap().clone();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["kind"], "hazard");
    assert_eq!(records[1]["kind"], "inss");

    // Remove one record by id.
    let id = records[0]["id"].as_str().unwrap();
    let (status, _) = send(
        create_router(state.clone()),
        Method::DELETE,
        &format!("/history/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Removing it again is a 404.
    let (status, body) = send(
        create_router(state.clone()),
        Method::DELETE,
        &format!("/history/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "RECORD_NOT_FOUND");

    // Clear wipes the rest.
    let (status, _) = send(create_router(state.clone()), Method::DELETE, "/history", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, records) = send(create_router(state), Method::GET, "/history", None).await;
    assert!(records.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_history_summary_fields() {
    let state = create_test_state();
    let (status, _) = post(
        create_router(state.clone()),
        "/calculate/irrf",
        json!({ "gross_salary": "5000.00", "dependents": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, records) = send(create_router(state), Method::GET, "/history", None).await;
    let record = &records.as_array().unwrap()[0];
    assert_eq!(record["summary"]["gross"], "5000.00");
    assert_eq!(record["summary"]["net"], "4562.10");
    assert_eq!(record["input"]["gross_salary"], "5000.00");
    assert_eq!(record["result"]["tax"], "437.90");
}
