//! Absence tally engine.
//!
//! Aggregates the working days of one employee's approved absence requests
//! for one calendar year into per-category buckets.

use chrono::Datelike;

use crate::config::CalendarRules;
use crate::models::{AbsenceRequest, AbsenceTally, AuditStep, AuditWarning};

use super::holidays::default_rules;
use super::working_days::working_days_with;

/// The tally together with the audit steps and warnings that explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyOutcome {
    /// The computed tally.
    pub tally: AbsenceTally,
    /// One step per request that was counted.
    pub audit_steps: Vec<AuditStep>,
    /// Requests that were handled by a fallback rule.
    pub warnings: Vec<AuditWarning>,
}

/// Computes the absence tally of `employee` for `year` under the built-in
/// calendar.
///
/// A request is counted when its `user_email` equals `employee`, it is
/// approved, and its start date falls in `year`. The whole request is
/// attributed to its start year even when it runs into the next one.
/// Requests with an unknown category count towards no bucket.
///
/// # Example
///
/// ```
/// use absence_engine::calculation::tally;
/// use absence_engine::models::{AbsenceCategory, AbsenceRequest, RequestStatus};
/// use chrono::NaiveDate;
///
/// let requests = vec![AbsenceRequest::new(
///     "req_001",
///     "jean.dupont@example.ch",
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
///     AbsenceCategory::Vacation,
/// )
/// .with_status(RequestStatus::Approved)];
///
/// let result = tally(&requests, "jean.dupont@example.ch", 2025);
/// assert_eq!(result.vacation_days, 5);
/// assert_eq!(result.total, 5);
/// ```
pub fn tally(requests: &[AbsenceRequest], employee: &str, year: i32) -> AbsenceTally {
    tally_with_audit(default_rules(), requests, employee, year).tally
}

/// Computes the absence tally under `rules`, recording how it was reached.
pub fn tally_with_audit(
    rules: &CalendarRules,
    requests: &[AbsenceRequest],
    employee: &str,
    year: i32,
) -> TallyOutcome {
    let mut tally = AbsenceTally::empty(employee, year);
    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let matching = requests.iter().filter(|r| {
        r.user_email == employee && r.is_approved() && r.start_date.year() == year
    });

    for request in matching {
        if !request.category.is_known() {
            warnings.push(AuditWarning::new(
                "UNKNOWN_CATEGORY",
                format!(
                    "Request '{}' has unknown category '{}' and was not counted",
                    request.id, request.category
                ),
                "medium",
            ));
            continue;
        }

        if request.end_date < request.start_date {
            warnings.push(AuditWarning::new(
                "INVERTED_RANGE",
                format!(
                    "Request '{}' ends ({}) before it starts ({}); counted as 0 days",
                    request.id, request.end_date, request.start_date
                ),
                "medium",
            ));
        }

        if request.spans_year_boundary() {
            warnings.push(AuditWarning::new(
                "SPANS_YEAR_BOUNDARY",
                format!(
                    "Request '{}' runs into {}; all its days are attributed to {}",
                    request.id,
                    request.end_date.year(),
                    year
                ),
                "low",
            ));
        }

        let days = working_days_with(rules, request.start_date, request.end_date);
        tally.add(&request.category, days);

        audit_steps.push(AuditStep {
            step_number,
            rule_id: "working_days".to_string(),
            rule_name: "Working Day Count".to_string(),
            request_id: request.id.clone(),
            input: serde_json::json!({
                "start_date": request.start_date.to_string(),
                "end_date": request.end_date.to_string(),
                "category": request.category.code(),
                "calendar": rules.metadata.code,
            }),
            output: serde_json::json!({
                "working_days": days,
                "running_total": tally.total,
            }),
            reasoning: format!(
                "{} to {}: {} working day(s) of {} after excluding weekends and holidays",
                request.start_date,
                request.end_date,
                days,
                request.category.label()
            ),
        });
        step_number += 1;
    }

    TallyOutcome {
        tally,
        audit_steps,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbsenceCategory, RequestStatus};
    use chrono::NaiveDate;

    const JEAN: &str = "jean.dupont@example.ch";

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn approved(
        id: &str,
        email: &str,
        start: &str,
        end: &str,
        category: AbsenceCategory,
    ) -> AbsenceRequest {
        AbsenceRequest::new(id, email, make_date(start), make_date(end), category)
            .with_name("Jean Dupont")
            .with_status(RequestStatus::Approved)
    }

    #[test]
    fn test_single_vacation_week() {
        let requests = vec![approved(
            "req_001",
            JEAN,
            "2025-06-02",
            "2025-06-06",
            AbsenceCategory::Vacation,
        )];

        let result = tally(&requests, JEAN, 2025);

        assert_eq!(result.vacation_days, 5);
        assert_eq!(result.sick_days, 0);
        assert_eq!(result.training_days, 0);
        assert_eq!(result.overtime_days, 0);
        assert_eq!(result.bereavement_days, 0);
        assert_eq!(result.accident_days, 0);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn test_pending_and_rejected_requests_are_excluded() {
        let mut requests = vec![approved(
            "req_001",
            JEAN,
            "2025-06-02",
            "2025-06-06",
            AbsenceCategory::Vacation,
        )];
        let baseline = tally(&requests, JEAN, 2025);

        requests.push(
            approved("req_002", JEAN, "2025-07-07", "2025-07-11", AbsenceCategory::Vacation)
                .with_status(RequestStatus::Pending),
        );
        requests.push(
            approved("req_003", JEAN, "2025-08-04", "2025-08-08", AbsenceCategory::Training)
                .with_status(RequestStatus::Rejected),
        );

        assert_eq!(tally(&requests, JEAN, 2025), baseline);
    }

    #[test]
    fn test_sick_leave_over_christmas() {
        let requests = vec![approved(
            "req_001",
            JEAN,
            "2025-12-25",
            "2025-12-26",
            AbsenceCategory::SickLeave,
        )];

        let result = tally(&requests, JEAN, 2025);
        assert_eq!(result.sick_days, 1);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn test_other_employees_are_excluded() {
        let requests = vec![
            approved("req_001", JEAN, "2025-06-02", "2025-06-06", AbsenceCategory::Vacation),
            approved(
                "req_002",
                "marie.martin@example.ch",
                "2025-06-02",
                "2025-06-06",
                AbsenceCategory::Vacation,
            ),
        ];

        assert_eq!(tally(&requests, JEAN, 2025).total, 5);
    }

    #[test]
    fn test_employee_match_is_exact() {
        let requests = vec![approved(
            "req_001",
            JEAN,
            "2025-06-02",
            "2025-06-06",
            AbsenceCategory::Vacation,
        )];

        assert_eq!(tally(&requests, "Jean Dupont", 2025).total, 0);
        assert_eq!(tally(&requests, "JEAN.DUPONT@example.ch", 2025).total, 0);
    }

    #[test]
    fn test_request_is_bucketed_by_start_year() {
        // Mon 2024-12-23 .. Fri 2025-01-03.
        let requests = vec![approved(
            "req_001",
            JEAN,
            "2024-12-23",
            "2025-01-03",
            AbsenceCategory::Vacation,
        )];

        // Dec 23, 24, 26, 27, 30, 31 and Jan 3.
        assert_eq!(tally(&requests, JEAN, 2024).vacation_days, 7);
        assert_eq!(tally(&requests, JEAN, 2025).vacation_days, 0);
    }

    #[test]
    fn test_unknown_category_is_dropped_with_warning() {
        let requests = vec![
            approved(
                "req_001",
                JEAN,
                "2025-06-02",
                "2025-06-06",
                AbsenceCategory::Other("sabbatical".to_string()),
            ),
            approved("req_002", JEAN, "2025-06-10", "2025-06-10", AbsenceCategory::Accident),
        ];

        let outcome = tally_with_audit(default_rules(), &requests, JEAN, 2025);

        assert_eq!(outcome.tally.accident_days, 1);
        assert_eq!(outcome.tally.total, 1);
        assert_eq!(outcome.audit_steps.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].code, "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_inverted_range_counts_zero_with_warning() {
        let requests = vec![approved(
            "req_001",
            JEAN,
            "2025-06-06",
            "2025-06-02",
            AbsenceCategory::Training,
        )];

        let outcome = tally_with_audit(default_rules(), &requests, JEAN, 2025);

        assert_eq!(outcome.tally.total, 0);
        assert_eq!(outcome.warnings[0].code, "INVERTED_RANGE");
    }

    #[test]
    fn test_year_boundary_warning() {
        let requests = vec![approved(
            "req_001",
            JEAN,
            "2024-12-30",
            "2025-01-06",
            AbsenceCategory::Vacation,
        )];

        let outcome = tally_with_audit(default_rules(), &requests, JEAN, 2024);
        assert!(outcome.warnings.iter().any(|w| w.code == "SPANS_YEAR_BOUNDARY"));
    }

    #[test]
    fn test_all_categories_and_sum() {
        let requests = vec![
            approved("r1", JEAN, "2025-03-03", "2025-03-07", AbsenceCategory::Vacation),
            approved("r2", JEAN, "2025-03-10", "2025-03-11", AbsenceCategory::SickLeave),
            approved("r3", JEAN, "2025-03-12", "2025-03-12", AbsenceCategory::Training),
            approved("r4", JEAN, "2025-03-13", "2025-03-14", AbsenceCategory::Overtime),
            approved("r5", JEAN, "2025-03-17", "2025-03-19", AbsenceCategory::Bereavement),
            approved("r6", JEAN, "2025-03-20", "2025-03-24", AbsenceCategory::Accident),
        ];

        let result = tally(&requests, JEAN, 2025);

        assert_eq!(result.vacation_days, 5);
        assert_eq!(result.sick_days, 2);
        assert_eq!(result.training_days, 1);
        assert_eq!(result.overtime_days, 2);
        assert_eq!(result.bereavement_days, 3);
        // Thu 20, Fri 21, Mon 24.
        assert_eq!(result.accident_days, 3);
        assert_eq!(result.total, result.bucket_sum());
        assert_eq!(result.total, 16);
    }

    #[test]
    fn test_empty_request_list() {
        let result = tally(&[], JEAN, 2025);
        assert_eq!(result, AbsenceTally::empty(JEAN, 2025));
    }

    #[test]
    fn test_tally_is_idempotent() {
        let requests = vec![
            approved("r1", JEAN, "2025-04-14", "2025-04-25", AbsenceCategory::Vacation),
            approved("r2", JEAN, "2025-05-26", "2025-05-30", AbsenceCategory::SickLeave),
        ];

        assert_eq!(tally(&requests, JEAN, 2025), tally(&requests, JEAN, 2025));
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let requests = vec![
            approved("r1", JEAN, "2025-04-14", "2025-04-25", AbsenceCategory::Vacation),
            approved("r2", JEAN, "2025-05-26", "2025-05-30", AbsenceCategory::SickLeave),
        ];

        let outcome = tally_with_audit(default_rules(), &requests, JEAN, 2025);

        assert_eq!(outcome.audit_steps.len(), 2);
        assert_eq!(outcome.audit_steps[0].step_number, 1);
        assert_eq!(outcome.audit_steps[0].request_id, "r1");
        assert_eq!(outcome.audit_steps[1].step_number, 2);
        // Apr 14-25 2025 holds Good Friday and Easter Monday: 8 days.
        assert_eq!(outcome.audit_steps[0].output["working_days"], 8);
        // May 26-30 holds Ascension (May 29): 4 days.
        assert_eq!(outcome.audit_steps[1].output["working_days"], 4);
        assert_eq!(outcome.audit_steps[1].output["running_total"], 12);
    }
}
