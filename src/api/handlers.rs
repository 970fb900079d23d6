//! HTTP request handlers for the Absence Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    holidays_for_year_with, month_overview_with, tally_with_audit, working_days_with,
};
use crate::error::EngineError;
use crate::models::{AuditTrace, RequestStatus, TallyReport};

use super::request::{
    CalendarRequest, DecisionRequest, TallyRequest, WorkingDaysRequest, validate_all,
};
use super::response::{ApiError, ApiErrorResponse, HolidaysResponse, WorkingDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays/:year", get(holidays_handler))
        .route("/working-days", post(working_days_handler))
        .route("/tally", post(tally_handler))
        .route("/calendar", post(calendar_handler))
        .route("/requests/decision", post(decision_handler))
        .with_state(state)
}

/// Handler for GET /holidays/:year.
async fn holidays_handler(State(state): State<AppState>, Path(year): Path<i32>) -> Response {
    let holidays = holidays_for_year_with(state.rules(), year);
    info!(year, count = holidays.len(), "Listed holidays");

    json_response(
        StatusCode::OK,
        HolidaysResponse {
            year,
            calendar: state.rules().metadata.code.clone(),
            holidays,
        },
    )
}

/// Handler for POST /working-days.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return error_response(correlation_id, err);
    }

    let working_days = working_days_with(state.rules(), request.start_date, request.end_date);
    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        working_days,
        "Counted working days"
    );

    json_response(
        StatusCode::OK,
        WorkingDaysResponse {
            start_date: request.start_date,
            end_date: request.end_date,
            working_days,
        },
    )
}

/// Handler for POST /tally.
///
/// Validates the supplied requests, then returns the tally with its audit
/// trace.
async fn tally_handler(
    State(state): State<AppState>,
    payload: Result<Json<TallyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tally request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_all(&request.requests) {
        return error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let outcome = tally_with_audit(
        state.rules(),
        &request.requests,
        &request.employee,
        request.year,
    );
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        employee = %request.employee,
        year = request.year,
        requests_count = request.requests.len(),
        counted = outcome.audit_steps.len(),
        total = outcome.tally.total,
        duration_us,
        "Tally completed successfully"
    );
    if !outcome.warnings.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            warnings = outcome.warnings.len(),
            "Tally used fallback rules"
        );
    }

    json_response(
        StatusCode::OK,
        TallyReport {
            report_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            tally: outcome.tally,
            audit_trace: AuditTrace {
                steps: outcome.audit_steps,
                warnings: outcome.warnings,
                duration_us,
            },
        },
    )
}

/// Handler for POST /calendar.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let month = match request.year_month() {
        Ok(month) => month,
        Err(err) => return error_response(correlation_id, err),
    };

    if let Err(err) = validate_all(&request.requests) {
        return error_response(correlation_id, err);
    }

    let overview = month_overview_with(state.rules(), &request.requests, month);
    info!(
        correlation_id = %correlation_id,
        month = %month,
        employees = overview.rows.len(),
        "Built month overview"
    );

    json_response(StatusCode::OK, overview)
}

/// Handler for POST /requests/decision.
///
/// Applies an administrator's decision to a pending request and returns the
/// updated request for the caller to store.
async fn decision_handler(payload: Result<Json<DecisionRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let DecisionRequest {
        mut request,
        decision,
        decided_by,
    } = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return error_response(correlation_id, err);
    }

    let now = Utc::now();
    let result = match decision {
        RequestStatus::Approved => request.approve(decided_by.as_str(), now),
        RequestStatus::Rejected => request.reject(decided_by.as_str(), now),
        RequestStatus::Pending => {
            warn!(correlation_id = %correlation_id, "Decision must be approved or rejected");
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error("decision must be 'approved' or 'rejected'"),
            );
        }
    };

    if let Err(err) = result {
        return error_response(correlation_id, err);
    }

    info!(
        correlation_id = %correlation_id,
        request_id = %request.id,
        status = %request.status,
        decided_by = %decided_by,
        "Absence request decided"
    );

    json_response(StatusCode::OK, request)
}

/// Serializes `body` as a JSON response.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns an engine error into its JSON error response.
fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    ApiErrorResponse::from(err).into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}
