//! Response types for the Absence Engine API.
//!
//! This module defines the success bodies that are not domain models, the
//! error response structure, and the mapping from [`EngineError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::Holiday;

/// Response body for `GET /holidays/:year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The year requested.
    pub year: i32,
    /// Code of the calendar the holidays come from.
    pub calendar: String,
    /// The holidays of the year, sorted by date.
    pub holidays: Vec<Holiday>,
}

/// Response body for `POST /working-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysResponse {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Number of working days in the range.
    pub working_days: u32,
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `INVALID_REQUEST`.
    pub code: String,
    /// What went wrong, naming the offending request where there is one.
    pub message: String,
    /// Extra context for the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// A body that parsed but failed a field-level check.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A body that is not valid JSON for the endpoint.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// JSON body of the response.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, error) = match error {
            EngineError::ConfigNotFound { path } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CONFIG_ERROR", "Holiday calendar is unavailable")
                    .with_details(format!("No calendar file at {}", path)),
            ),
            EngineError::ConfigParseError { path, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CONFIG_ERROR", "Holiday calendar could not be read")
                    .with_details(format!("{}: {}", path, message)),
            ),
            EngineError::InvalidRequest {
                request_id,
                message,
            } => (
                StatusCode::BAD_REQUEST,
                ApiError::new(
                    "INVALID_REQUEST",
                    format!("Invalid absence request '{}': {}", request_id, message),
                )
                .with_details("Fix the stored request before tallying it"),
            ),
            EngineError::InvalidStatusTransition {
                request_id,
                from,
                to,
            } => (
                StatusCode::CONFLICT,
                ApiError::new(
                    "INVALID_STATUS_TRANSITION",
                    format!(
                        "Cannot move absence request '{}' from {} to {}",
                        request_id, from, to
                    ),
                )
                .with_details("Only pending requests can be approved or rejected"),
            ),
            EngineError::InvalidMonth { month } => (
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(format!(
                    "month must be between 1 and 12, got {}",
                    month
                )),
            ),
            EngineError::RangeTooLong {
                start,
                end,
                max_days,
            } => (
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(format!(
                    "date range {} to {} is longer than {} days",
                    start, end, max_days
                )),
            ),
        };

        ApiErrorResponse { status, error }
    }
}
