//! Error types for the Absence Engine.
//!
//! The calculation core never fails: inverted ranges, unknown categories and
//! unmatched filters all fall back to zero. These errors belong to the
//! boundaries around it (configuration loading, request validation and the
//! approval workflow).

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::RequestStatus;

/// The main error type for the Absence Engine.
///
/// # Example
///
/// ```
/// use absence_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Holiday calendar not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No `calendar.yaml` exists where the loader looked.
    #[error("Holiday calendar not found: {path}")]
    ConfigNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// `calendar.yaml` is not valid YAML or holds an impossible rule.
    #[error("Invalid holiday calendar '{path}': {message}")]
    ConfigParseError {
        /// The file that was rejected.
        path: String,
        /// What is wrong with it.
        message: String,
    },

    /// An absence request failed validation at the data-store boundary.
    #[error("Invalid absence request '{request_id}': {message}")]
    InvalidRequest {
        /// The ID of the invalid request.
        request_id: String,
        /// A description of what made the request invalid.
        message: String,
    },

    /// A decision was attempted on a request that is no longer pending.
    #[error("Cannot move absence request '{request_id}' from {from} to {to}")]
    InvalidStatusTransition {
        /// The ID of the request.
        request_id: String,
        /// The current status of the request.
        from: RequestStatus,
        /// The status that was requested.
        to: RequestStatus,
    },

    /// A month number outside 1..=12.
    #[error("Invalid month: {month}")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// A date range longer than the API accepts.
    #[error("Date range {start} to {end} spans more than {max_days} days")]
    RangeTooLong {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
        /// The longest accepted span, in days.
        max_days: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
