//! Day classification and working-day counting.
//!
//! A working day is a date that is not a Saturday, not a Sunday, and not a
//! holiday of its year.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::CalendarRules;

use super::holidays::{default_rules, holiday_dates_with};

/// The kind of a calendar date for absence counting.
///
/// # Example
///
/// ```
/// use absence_engine::calculation::DayKind;
///
/// let kind = DayKind::Weekend;
/// assert_eq!(kind.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday to Friday, not a holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A weekday listed in the holiday set.
    Holiday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "Working"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Returns true on Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies `date` against a precomputed holiday set.
///
/// A holiday falling on a weekend is reported as [`DayKind::Weekend`].
pub fn classify_day(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> DayKind {
    if is_weekend(date) {
        DayKind::Weekend
    } else if holidays.contains(&date) {
        DayKind::Holiday
    } else {
        DayKind::Working
    }
}

/// Returns true if `date` is neither a weekend nor in `holidays`.
pub fn is_working_day(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> bool {
    classify_day(date, holidays) == DayKind::Working
}

/// Collects the holiday dates of every year from `start` to `end`.
pub fn holidays_between(rules: &CalendarRules, start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
    (start.year()..=end.year())
        .flat_map(|year| holiday_dates_with(rules, year))
        .collect()
}

/// Counts the working days from `start` to `end`, both inclusive, under the
/// built-in calendar.
///
/// An inverted range (`start > end`) counts zero days.
///
/// # Example
///
/// ```
/// use absence_engine::calculation::working_days;
/// use chrono::NaiveDate;
///
/// // Monday 2 June to Friday 6 June 2025.
/// let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
/// assert_eq!(working_days(start, end), 5);
/// assert_eq!(working_days(end, start), 0);
/// ```
pub fn working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    working_days_with(default_rules(), start, end)
}

/// Counts the working days from `start` to `end` under `rules`.
///
/// Holidays of every year the range touches are taken into account, so a
/// range from late December to early January skips the New Year holidays.
pub fn working_days_with(rules: &CalendarRules, start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }

    let holidays = holidays_between(rules, start, end);
    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day, &holidays))
        .count();

    u32::try_from(count).unwrap_or(u32::MAX)
}
