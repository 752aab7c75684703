//! HTTP request handlers for the Timeclock Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::build_submission;
use crate::error::EngineError;
use crate::ledger::LedgerCommand;
use crate::models::PayPeriod;

use super::request::{ApproveRequest, PeriodsRequest, RejectRequest, SubmitPayrollRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods", post(periods_handler))
        .route(
            "/payroll/submissions",
            post(submit_payroll_handler).get(list_submissions_handler),
        )
        .route(
            "/payroll/submissions/:id/approve",
            post(approve_submission_handler),
        )
        .route(
            "/payroll/submissions/:id/reject",
            post(reject_submission_handler),
        )
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(err: EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for the POST /periods endpoint.
///
/// Caches the posted clock events and returns the bi-weekly pay periods
/// partitioned from them, newest first.
async fn periods_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing periods request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().naive_utc());
    let event_count = request.events.len();

    let mut ledger = state.ledger().write().await;
    if let Err(err) = ledger.apply(LedgerCommand::LoadEvents(request.events)) {
        return engine_error_response(err);
    }
    let periods = ledger.periods(as_of);
    drop(ledger);

    info!(
        correlation_id = %correlation_id,
        event_count,
        period_count = periods.len(),
        "Periods computed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(periods),
    )
        .into_response()
}

/// Handler for POST /payroll/submissions.
///
/// Builds a pending payroll submission for the pay period starting on the
/// requested date and records it in the submission history.
async fn submit_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll submission request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().naive_utc());
    let config = state.config();
    let hourly_rate = request.hourly_rate.unwrap_or(config.default_hourly_rate());

    let mut ledger = state.ledger().write().await;
    if let Err(err) = ledger.apply(LedgerCommand::LoadEvents(request.events)) {
        return engine_error_response(err);
    }

    let periods = ledger.periods(as_of);
    let period: &PayPeriod = match periods
        .iter()
        .find(|p| p.start_date == request.period_start)
    {
        Some(period) => period,
        None => {
            warn!(
                correlation_id = %correlation_id,
                period_start = %request.period_start,
                "Period not found"
            );
            return engine_error_response(EngineError::PeriodNotFound {
                start_date: request.period_start,
            });
        }
    };

    let submission = build_submission(
        period,
        &request.user_id,
        &request.user_name,
        hourly_rate,
        config.period_threshold_hours(),
        config.overtime_multiplier(),
        request.notes.as_deref().unwrap_or(""),
        as_of,
    );
    let submission_id = submission.id;

    if let Err(err) = ledger.apply(LedgerCommand::RecordSubmission(submission.clone())) {
        return engine_error_response(err);
    }
    drop(ledger);

    info!(
        correlation_id = %correlation_id,
        submission_id = %submission_id,
        user_id = %submission.user_id,
        gross_pay = %submission.gross_pay,
        "Payroll submission recorded"
    );
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        Json(submission),
    )
        .into_response()
}

/// Handler for GET /payroll/submissions.
async fn list_submissions_handler(State(state): State<AppState>) -> impl IntoResponse {
    let ledger = state.ledger().read().await;
    let submissions = ledger.submissions().to_vec();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(submissions),
    )
        .into_response()
}

/// Handler for POST /payroll/submissions/{id}/approve.
async fn approve_submission_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ApproveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, submission_id = %id, "Processing approval");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let mut ledger = state.ledger().write().await;
    let command = LedgerCommand::ApproveSubmission {
        id,
        approved_by: request.approved_by,
        at: Utc::now().naive_utc(),
    };
    if let Err(err) = ledger.apply(command) {
        warn!(correlation_id = %correlation_id, error = %err, "Approval failed");
        return engine_error_response(err);
    }

    match ledger.submission(id) {
        Some(submission) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(submission.clone()),
        )
            .into_response(),
        None => engine_error_response(EngineError::SubmissionNotFound { id }),
    }
}

/// Handler for POST /payroll/submissions/{id}/reject.
async fn reject_submission_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<RejectRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, submission_id = %id, "Processing rejection");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let mut ledger = state.ledger().write().await;
    let command = LedgerCommand::RejectSubmission {
        id,
        rejected_by: request.rejected_by,
        at: Utc::now().naive_utc(),
        reason: request.reason,
    };
    if let Err(err) = ledger.apply(command) {
        warn!(correlation_id = %correlation_id, error = %err, "Rejection failed");
        return engine_error_response(err);
    }

    match ledger.submission(id) {
        Some(submission) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(submission.clone()),
        )
            .into_response(),
        None => engine_error_response(EngineError::SubmissionNotFound { id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{ClockEvent, ClockEventType, PayPeriod, PayrollSubmission};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDateTime;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_event(id: &str, event_type: ClockEventType, ts: &str) -> ClockEvent {
        ClockEvent {
            id: id.to_string(),
            event_type,
            timestamp: make_datetime(ts),
            user_id: "drv_042".to_string(),
            user_name: "Dana Reyes".to_string(),
        }
    }

    fn create_periods_request() -> PeriodsRequest {
        PeriodsRequest {
            events: vec![
                // Monday 2025-03-03, anchored period starts Sunday 2025-03-02
                make_event("e1", ClockEventType::ClockIn, "2025-03-03 08:00:00"),
                make_event("e2", ClockEventType::ClockOut, "2025-03-03 16:00:00"),
            ],
            as_of: Some(make_datetime("2025-03-20 12:00:00")),
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_periods_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let body = serde_json::to_string(&create_periods_request()).unwrap();
        let response = post_json(router, "/periods", body).await;

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let periods: Vec<PayPeriod> = serde_json::from_slice(&body).unwrap();

        assert!(!periods.is_empty());
        // Newest first, and the oldest period starts on the anchored Sunday.
        let oldest = periods.last().unwrap();
        assert_eq!(oldest.start_date.to_string(), "2025-03-02");
    }

    #[tokio::test]
    async fn test_periods_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/periods", "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_submit_payroll_unknown_period_returns_404() {
        let router = create_router(create_test_state());

        let request = SubmitPayrollRequest {
            user_id: "drv_042".to_string(),
            user_name: "Dana Reyes".to_string(),
            events: create_periods_request().events,
            period_start: chrono::NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            notes: None,
            hourly_rate: None,
            as_of: Some(make_datetime("2025-03-20 12:00:00")),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/payroll/submissions", body).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "PERIOD_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_submit_payroll_returns_pending_submission() {
        let router = create_router(create_test_state());

        let request = SubmitPayrollRequest {
            user_id: "drv_042".to_string(),
            user_name: "Dana Reyes".to_string(),
            events: create_periods_request().events,
            period_start: chrono::NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            notes: Some("first half of March".to_string()),
            hourly_rate: None,
            as_of: Some(make_datetime("2025-03-20 12:00:00")),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/payroll/submissions", body).await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let submission: PayrollSubmission = serde_json::from_slice(&body).unwrap();

        assert_eq!(submission.user_id, "drv_042");
        assert_eq!(submission.status.to_string(), "pending");
        // 8 hours at the configured $25 default, no overtime.
        assert_eq!(
            submission.gross_pay,
            rust_decimal::Decimal::from_str("200").unwrap()
        );
    }

    #[tokio::test]
    async fn test_approve_unknown_submission_returns_404() {
        let router = create_router(create_test_state());

        let body = serde_json::to_string(&ApproveRequest {
            approved_by: "mgr_007".to_string(),
        })
        .unwrap();
        let uri = format!("/payroll/submissions/{}/approve", Uuid::new_v4());

        let response = post_json(router, &uri, body).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
