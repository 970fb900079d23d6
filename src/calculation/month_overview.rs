//! Monthly absence overview.
//!
//! Builds the employee-by-day grid shown on the absence calendar from the
//! approved requests overlapping one month.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use crate::config::CalendarRules;
use crate::models::{
    AbsenceCell, AbsenceRequest, CalendarDay, EmployeeRow, MonthOverview, YearMonth,
};

use super::holidays::{default_rules, holidays_for_year_with};
use super::working_days::is_weekend;

/// Builds the overview for `month` under the built-in calendar.
///
/// # Example
///
/// ```
/// use absence_engine::calculation::month_overview;
/// use absence_engine::models::{AbsenceCategory, AbsenceRequest, RequestStatus, YearMonth};
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
/// let overview = month_overview(&requests, YearMonth::new(2025, 6).unwrap());
/// assert_eq!(overview.days.len(), 30);
/// assert_eq!(overview.rows.len(), 1);
/// assert_eq!(overview.rows[0].absent_days(), 5);
/// ```
pub fn month_overview(requests: &[AbsenceRequest], month: YearMonth) -> MonthOverview {
    month_overview_with(default_rules(), requests, month)
}

/// Builds the overview for `month` under `rules`.
///
/// Only approved requests overlapping the month appear. Rows are sorted by
/// display name (case-insensitive), then by email. When several requests
/// cover the same day, the first one in `requests` wins.
pub fn month_overview_with(
    rules: &CalendarRules,
    requests: &[AbsenceRequest],
    month: YearMonth,
) -> MonthOverview {
    let Some((first, last)) = month
        .first_day()
        .and_then(|first| Some((first, month.last_day()?)))
    else {
        return MonthOverview {
            month,
            days: Vec::new(),
            rows: Vec::new(),
        };
    };

    let holiday_names: HashMap<_, _> = holidays_for_year_with(rules, month.year)
        .into_iter()
        .map(|h| (h.date, h.name))
        .collect();

    let days: Vec<CalendarDay> = first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| CalendarDay {
            date,
            weekday: date.weekday(),
            is_weekend: is_weekend(date),
            holiday: holiday_names.get(&date).cloned(),
        })
        .collect();

    let mut by_employee: BTreeMap<&str, Vec<&AbsenceRequest>> = BTreeMap::new();
    for request in requests
        .iter()
        .filter(|r| r.is_approved() && r.overlaps(first, last))
    {
        by_employee
            .entry(request.user_email.as_str())
            .or_default()
            .push(request);
    }

    let mut rows: Vec<EmployeeRow> = by_employee
        .into_iter()
        .map(|(employee, employee_requests)| {
            let display_name = employee_requests
                .iter()
                .find(|r| r.name.as_deref().is_some_and(|n| !n.trim().is_empty()))
                .unwrap_or(&employee_requests[0])
                .display_name()
                .to_string();

            let cells = days
                .iter()
                .map(|day| {
                    employee_requests
                        .iter()
                        .find(|r| r.covers(day.date))
                        .map(|r| AbsenceCell {
                            request_id: r.id.clone(),
                            category: r.category.clone(),
                            status: r.status,
                        })
                })
                .collect();

            EmployeeRow {
                employee: employee.to_string(),
                display_name,
                cells,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
            .then_with(|| a.employee.cmp(&b.employee))
    });

    MonthOverview { month, days, rows }
}
