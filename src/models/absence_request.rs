//! Absence request model and the approval workflow.
//!
//! An [`AbsenceRequest`] mirrors one row of the backend's
//! `vacation_requests` table. The employee is identified by email; the
//! optional name is only used for display.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AbsenceCategory, RequestStatus};

/// A date-range absence request for one employee.
///
/// Both dates are inclusive. The core calculations never reject a request;
/// [`AbsenceRequest::validate`] is meant for the boundary where records
/// enter the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRequest {
    /// Unique identifier of the request.
    pub id: String,
    /// Email of the employee, the stable identity key.
    pub user_email: String,
    /// Display name entered on the request form.
    #[serde(default)]
    pub name: Option<String>,
    /// First day of the absence (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the absence (inclusive).
    pub end_date: NaiveDate,
    /// The kind of absence.
    #[serde(rename = "type")]
    pub category: AbsenceCategory,
    /// Current workflow status.
    #[serde(default)]
    pub status: RequestStatus,
    /// Free-text comment from the employee.
    #[serde(default)]
    pub comment: Option<String>,
    /// Email of the administrator who decided the request.
    #[serde(default)]
    pub approved_by: Option<String>,
    /// When the decision was made.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

impl AbsenceRequest {
    /// Creates a new pending request.
    ///
    /// # Example
    ///
    /// ```
    /// use absence_engine::models::{AbsenceCategory, AbsenceRequest, RequestStatus};
    /// use chrono::NaiveDate;
    ///
    /// let request = AbsenceRequest::new(
    ///     "req_001",
    ///     "jean.dupont@example.ch",
    ///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
    ///     AbsenceCategory::Vacation,
    /// );
    /// assert_eq!(request.status, RequestStatus::Pending);
    /// assert_eq!(request.display_name(), "jean.dupont");
    /// ```
    pub fn new(
        id: impl Into<String>,
        user_email: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category: AbsenceCategory,
    ) -> Self {
        Self {
            id: id.into(),
            user_email: user_email.into(),
            name: None,
            start_date,
            end_date,
            category,
            status: RequestStatus::Pending,
            comment: None,
            approved_by: None,
            approved_at: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the status directly, bypassing the workflow.
    ///
    /// Used when loading records whose status was decided elsewhere.
    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the name to display for the employee.
    ///
    /// Falls back to the local part of the email when no (non-blank) name
    /// was entered.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self
                .user_email
                .split_once('@')
                .map_or(self.user_email.as_str(), |(local, _)| local),
        }
    }

    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == RequestStatus::Approved
    }

    /// Returns true if `date` lies within the request's inclusive range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the inclusive range shares at least one day with
    /// `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }

    /// Returns true if the request starts and ends in different years.
    pub fn spans_year_boundary(&self) -> bool {
        self.start_date.year() != self.end_date.year()
    }

    /// Checks the request before it is accepted into the system.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRequest`] if the email is blank or the
    /// end date is before the start date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.user_email.trim().is_empty() {
            return Err(EngineError::InvalidRequest {
                request_id: self.id.clone(),
                message: "employee email is required".to_string(),
            });
        }

        if self.end_date < self.start_date {
            return Err(EngineError::InvalidRequest {
                request_id: self.id.clone(),
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }

        Ok(())
    }

    /// Approves a pending request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStatusTransition`] if the request has
    /// already been decided.
    pub fn approve(&mut self, by: impl Into<String>, at: DateTime<Utc>) -> EngineResult<()> {
        self.decide(RequestStatus::Approved, by.into(), at)
    }

    /// Rejects a pending request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStatusTransition`] if the request has
    /// already been decided.
    pub fn reject(&mut self, by: impl Into<String>, at: DateTime<Utc>) -> EngineResult<()> {
        self.decide(RequestStatus::Rejected, by.into(), at)
    }

    fn decide(&mut self, to: RequestStatus, by: String, at: DateTime<Utc>) -> EngineResult<()> {
        if self.status != RequestStatus::Pending {
            return Err(EngineError::InvalidStatusTransition {
                request_id: self.id.clone(),
                from: self.status,
                to,
            });
        }

        self.status = to;
        self.approved_by = Some(by);
        self.approved_at = Some(at);
        Ok(())
    }
}
