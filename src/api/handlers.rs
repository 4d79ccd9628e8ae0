//! HTTP request handlers for the CPF contribution engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::processing::{
    CalculationInput, DEFAULT_MAX_BATCH_SIZE, calculate_and_record, process_batch,
};

use super::request::{
    BulkCalculationRequest, CalculationRequest, HistoryQuery, RateUpdateRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate-bulk", post(calculate_bulk_handler))
        .route("/history/:employee_id", get(history_handler))
        .route("/records", get(list_records_handler))
        .route("/rates", put(update_rates_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /calculate.
///
/// Calculates contributions for one employee, persists the record, and
/// returns the contribution breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let input: CalculationInput = request.into();
    match calculate_and_record(state.rates(), state.store(), &input) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                record_id = %record.id,
                total_contribution = %record.contributions.total_contribution,
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(record.contributions)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %input.employee_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /calculate-bulk.
///
/// Processes up to 1000 employees, isolating failures per record.
async fn calculate_bulk_handler(
    State(state): State<AppState>,
    payload: Result<Json<BulkCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bulk calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let inputs: Vec<CalculationInput> = request.employees.into_iter().map(Into::into).collect();
    match process_batch(
        state.rates_handle(),
        state.store_handle(),
        inputs,
        DEFAULT_MAX_BATCH_SIZE,
    )
    .await
    {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                total_processed = outcome.summary.total_processed,
                successful_count = outcome.summary.successful_count,
                failed_count = outcome.summary.failed_count,
                "Bulk calculation completed"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Bulk calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /history/:employee_id.
///
/// Returns an employee's calculation records, newest first, optionally
/// bounded by inclusive `start_date` / `end_date` query parameters.
async fn history_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing history request"
    );

    if let Err(err) = query.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid history query");
        return ApiErrorResponse::from(err).into_response();
    }

    match state
        .store()
        .history_for_employee(&employee_id, query.start_date, query.end_date)
    {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                records = records.len(),
                "History query completed"
            );
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "History query failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /records.
///
/// Returns every stored calculation record, newest first.
async fn list_records_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record listing request");

    match state.store().all_records() {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                "Record listing completed"
            );
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Record listing failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /rates.
///
/// Replaces one bracket's rate entry. The update applies to subsequent
/// calculations only.
async fn update_rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateUpdateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rate update request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid rate update");
        return ApiErrorResponse::from(err).into_response();
    }

    state.rates().update(
        request.citizenship,
        request.age_group,
        request.employee_share,
        request.employer_share,
    );
    info!(
        correlation_id = %correlation_id,
        citizenship = %request.citizenship,
        age_group = %request.age_group,
        employee_share = %request.employee_share,
        employer_share = %request.employer_share,
        "Contribution rates updated"
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Contribution rates updated" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateTable;
    use crate::models::ContributionResult;
    use crate::store::InMemoryRecordStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        AppState::new(RateTable::with_defaults(), InMemoryRecordStore::new())
    }

    fn calculate_body(employee_id: &str, basic_salary: &str) -> String {
        serde_json::json!({
            "employee_id": employee_id,
            "citizenship": "CITIZEN",
            "age_group": "BELOW_55",
            "salary_details": { "basic_salary": basic_salary }
        })
        .to_string()
    }

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_calculation_returns_200() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, "/calculate", calculate_body("EMP123", "5000")).await;

        assert_eq!(status, StatusCode::OK);
        let result: ContributionResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.total_contribution, dec("1850"));
        assert_eq!(result.employee_contribution, dec("1000"));
        assert_eq!(result.employer_contribution, dec("850"));
        assert_eq!(result.net_salary, dec("4000"));
    }

    #[tokio::test]
    async fn test_calculation_persists_a_record() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let (status, _) = post_json(router, "/calculate", calculate_body("EMP123", "5000")).await;
        assert_eq!(status, StatusCode::OK);

        let history = state
            .store()
            .history_for_employee("EMP123", None, None)
            .unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) =
            post_json(router, "/calculate", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_employee_id_returns_400() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "citizenship": "CITIZEN",
            "age_group": "BELOW_55",
            "salary_details": { "basic_salary": "5000" }
        })
        .to_string();

        let (status, body) = post_json(router, "/calculate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("employee_id"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_zero_basic_salary_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, "/calculate", calculate_body("EMP123", "0")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("basic_salary"));
    }

    #[tokio::test]
    async fn test_rate_update_affects_subsequent_calculations() {
        let state = create_test_state();

        let update_body = serde_json::json!({
            "citizenship": "CITIZEN",
            "age_group": "BELOW_55",
            "employee_share": "0.1",
            "employer_share": "0.1"
        })
        .to_string();

        let response = create_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/rates")
                    .header("Content-Type", "application/json")
                    .body(Body::from(update_body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, body) = post_json(
            create_router(state),
            "/calculate",
            calculate_body("EMP123", "5000"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let result: ContributionResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.total_contribution, dec("1000"));
        assert_eq!(result.employee_contribution, dec("500"));
    }

    #[tokio::test]
    async fn test_out_of_range_share_returns_400() {
        let router = create_router(create_test_state());
        let update_body = serde_json::json!({
            "citizenship": "CITIZEN",
            "age_group": "BELOW_55",
            "employee_share": "1.5",
            "employer_share": "0.17"
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/rates")
                    .header("Content-Type", "application/json")
                    .body(Body::from(update_body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
