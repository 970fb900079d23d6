//! Holiday calendar provider.
//!
//! This module expands [`CalendarRules`] into the concrete holidays of a
//! given year. The free functions without a `_with` suffix use the built-in
//! Vaud calendar.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

use crate::config::{CalendarRules, WeekdayAnchorRule};
use crate::models::{Holiday, HolidayKind};

use super::easter::easter_sunday;

static DEFAULT_RULES: LazyLock<CalendarRules> = LazyLock::new(CalendarRules::default);

/// Returns the built-in Vaud calendar rules.
pub(crate) fn default_rules() -> &'static CalendarRules {
    &DEFAULT_RULES
}

/// Returns the holidays of `year` under the built-in calendar.
///
/// Produces 11 holidays, sorted by date: five fixed (New Year, Jan 2,
/// May 1, Aug 1, Christmas) and six moving (Good Friday, Easter Monday,
/// Ascension, Whit Monday, Corpus Christi and the Federal Fast Monday).
///
/// # Example
///
/// ```
/// use absence_engine::calculation::holidays_for_year;
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2024);
/// assert_eq!(holidays.len(), 11);
/// assert!(holidays.iter().any(|h| h.date == NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()));
/// ```
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    holidays_for_year_with(default_rules(), year)
}

/// Returns the holidays of `year` under `rules`, sorted by date.
///
/// Holidays whose date cannot be represented (years at the edge of the
/// `NaiveDate` range) are left out and logged.
pub fn holidays_for_year_with(rules: &CalendarRules, year: i32) -> Vec<Holiday> {
    let mut holidays = Vec::with_capacity(rules.holiday_count());

    for rule in &rules.fixed {
        if let Some(date) = NaiveDate::from_ymd_opt(year, rule.month, rule.day) {
            holidays.push(Holiday {
                date,
                name: rule.name.clone(),
                kind: HolidayKind::Fixed,
            });
        }
    }

    match easter_sunday(year) {
        Some(easter) => {
            for rule in &rules.easter_offsets {
                if let Some(date) = easter.checked_add_signed(Duration::days(rule.offset_days)) {
                    holidays.push(Holiday {
                        date,
                        name: rule.name.clone(),
                        kind: HolidayKind::Moving,
                    });
                }
            }
        }
        None if !rules.easter_offsets.is_empty() => {
            warn!(year, "Easter date out of range, skipping Easter-based holidays");
        }
        None => {}
    }

    for rule in &rules.weekday_anchors {
        if let Some(date) = anchored_weekday(rule, year) {
            holidays.push(Holiday {
                date,
                name: rule.name.clone(),
                kind: HolidayKind::Moving,
            });
        }
    }

    if holidays.len() < rules.holiday_count() {
        warn!(
            year,
            expected = rules.holiday_count(),
            produced = holidays.len(),
            "Some holidays could not be represented for this year"
        );
    }

    holidays.sort_by(|a, b| a.date.cmp(&b.date));
    holidays
}

/// Returns the first `rule.weekday` on or after the rule's anchor day.
fn anchored_weekday(rule: &WeekdayAnchorRule, year: i32) -> Option<NaiveDate> {
    let anchor = NaiveDate::from_ymd_opt(year, rule.month, rule.day)?;
    let ahead = (7 + rule.weekday.num_days_from_monday() as i64
        - anchor.weekday().num_days_from_monday() as i64)
        % 7;
    anchor.checked_add_signed(Duration::days(ahead))
}

/// Returns the set of holiday dates in `year` under the built-in calendar.
///
/// Two holidays can share a date (Ascension falls on May 1 when Easter is
/// on March 23, as in 2008), so the set may hold fewer dates than
/// [`holidays_for_year`] returns holidays.
pub fn holiday_dates(year: i32) -> BTreeSet<NaiveDate> {
    holiday_dates_with(default_rules(), year)
}

/// Returns the set of holiday dates in `year` under `rules`.
pub fn holiday_dates_with(rules: &CalendarRules, year: i32) -> BTreeSet<NaiveDate> {
    holidays_for_year_with(rules, year)
        .into_iter()
        .map(|h| h.date)
        .collect()
}

/// Returns true if `date` is a holiday under the built-in calendar.
///
/// ```
/// use absence_engine::calculation::is_holiday;
/// use chrono::NaiveDate;
///
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()));
/// ```
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_dates(date.year()).contains(&date)
}
