//! Request types for the Absence Engine API.
//!
//! This module defines the JSON request bodies for the POST endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceRequest, RequestStatus, YearMonth};

/// Longest date range, in days, the API will count over.
pub const MAX_RANGE_DAYS: i64 = 3660;

/// Request body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl WorkingDaysRequest {
    /// Rejects ranges longer than [`MAX_RANGE_DAYS`].
    ///
    /// Inverted ranges are accepted and count zero days.
    pub fn validate(&self) -> EngineResult<()> {
        check_range(self.start_date, self.end_date)
    }
}

/// Request body for the `/tally` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyRequest {
    /// Email of the employee to tally.
    pub employee: String,
    /// The calendar year to tally.
    pub year: i32,
    /// Absence requests as read from the data store.
    #[serde(default)]
    pub requests: Vec<AbsenceRequest>,
}

/// Request body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The calendar year shown.
    pub year: i32,
    /// The month shown, 1 to 12.
    pub month: u32,
    /// Absence requests as read from the data store.
    #[serde(default)]
    pub requests: Vec<AbsenceRequest>,
}

impl CalendarRequest {
    /// Returns the requested month, rejecting numbers outside 1..=12.
    pub fn year_month(&self) -> EngineResult<YearMonth> {
        YearMonth::new(self.year, self.month)
    }
}

/// Request body for the `/requests/decision` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// The request being decided, as currently stored.
    pub request: AbsenceRequest,
    /// The new status, `approved` or `rejected`.
    pub decision: RequestStatus,
    /// Email of the administrator making the decision.
    pub decided_by: String,
}

/// Validates every absence request at the boundary.
pub(crate) fn validate_all(requests: &[AbsenceRequest]) -> EngineResult<()> {
    requests.iter().try_for_each(|request| {
        request.validate()?;
        check_range(request.start_date, request.end_date)
    })
}

fn check_range(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if (end - start).num_days() >= MAX_RANGE_DAYS {
        return Err(EngineError::RangeTooLong {
            start,
            end,
            max_days: MAX_RANGE_DAYS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbsenceCategory;

    #[test]
    fn test_deserialize_tally_request() {
        let json = r#"{
            "employee": "jean.dupont@example.ch",
            "year": 2025,
            "requests": [
                {
                    "id": "req_001",
                    "user_email": "jean.dupont@example.ch",
                    "name": "Jean Dupont",
                    "start_date": "2025-06-02",
                    "end_date": "2025-06-06",
                    "type": "vacation",
                    "status": "approved"
                }
            ]
        }"#;

        let request: TallyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee, "jean.dupont@example.ch");
        assert_eq!(request.year, 2025);
        assert_eq!(request.requests.len(), 1);
        assert_eq!(request.requests[0].category, AbsenceCategory::Vacation);
    }

    #[test]
    fn test_tally_request_without_requests_defaults_to_empty() {
        let json = r#"{ "employee": "a@example.ch", "year": 2025 }"#;
        let request: TallyRequest = serde_json::from_str(json).unwrap();
        assert!(request.requests.is_empty());
    }

    #[test]
    fn test_calendar_request_rejects_month_13() {
        let request = CalendarRequest {
            year: 2025,
            month: 13,
            requests: vec![],
        };
        assert!(matches!(
            request.year_month(),
            Err(EngineError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn test_deserialize_decision_request() {
        let json = r#"{
            "request": {
                "id": "req_001",
                "user_email": "jean.dupont@example.ch",
                "start_date": "2025-06-02",
                "end_date": "2025-06-06",
                "type": "vacation"
            },
            "decision": "rejected",
            "decided_by": "admin@example.ch"
        }"#;

        let request: DecisionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.decision, RequestStatus::Rejected);
        assert_eq!(request.request.status, RequestStatus::Pending);
    }

    #[test]
    fn test_validate_all_reports_first_invalid_request() {
        let good = AbsenceRequest::new(
            "good",
            "a@example.ch",
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            AbsenceCategory::Vacation,
        );
        let mut bad = good.clone();
        bad.id = "bad".to_string();
        bad.end_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        match validate_all(&[good, bad]) {
            Err(EngineError::InvalidRequest { request_id, .. }) => assert_eq!(request_id, "bad"),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_working_days_range_is_capped() {
        let request = WorkingDaysRequest {
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
        };
        assert!(matches!(
            request.validate(),
            Err(EngineError::RangeTooLong { max_days: MAX_RANGE_DAYS, .. })
        ));

        let decade = WorkingDaysRequest {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2029, 12, 31).unwrap(),
        };
        assert!(decade.validate().is_ok());
    }

    #[test]
    fn test_inverted_working_days_range_is_accepted() {
        let request = WorkingDaysRequest {
            start_date: NaiveDate::MAX,
            end_date: NaiveDate::MIN,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_all_rejects_oversized_absence() {
        let huge = AbsenceRequest::new(
            "huge",
            "a@example.ch",
            NaiveDate::from_ymd_opt(-200000, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(200000, 1, 1).unwrap(),
            AbsenceCategory::Vacation,
        );
        assert!(matches!(
            validate_all(&[huge]),
            Err(EngineError::RangeTooLong { .. })
        ));
    }
}
