//! Monthly absence overview models.
//!
//! This module contains [`YearMonth`], the navigation unit of the absence
//! calendar, and the [`MonthOverview`] grid built for one month.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AbsenceCategory, RequestStatus};

/// A calendar month of a given year.
///
/// # Example
///
/// ```
/// use absence_engine::models::YearMonth;
///
/// let december = YearMonth::new(2024, 12).unwrap();
/// let january = december.next().unwrap();
/// assert_eq!((january.year, january.month), (2025, 1));
/// assert_eq!(january.previous(), Some(december));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// The calendar year.
    pub year: i32,
    /// The month number, 1 to 12.
    pub month: u32,
}

impl YearMonth {
    /// Creates a year-month, rejecting months outside 1..=12.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] for an out-of-range month.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the following month, rolling over into the next year.
    ///
    /// Returns `None` past December of `i32::MAX`.
    pub fn next(self) -> Option<Self> {
        if self.month == 12 {
            Some(Self {
                year: self.year.checked_add(1)?,
                month: 1,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// Returns the preceding month, rolling back into the previous year.
    ///
    /// Returns `None` before January of `i32::MIN`.
    pub fn previous(self) -> Option<Self> {
        if self.month == 1 {
            Some(Self {
                year: self.year.checked_sub(1)?,
                month: 12,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    /// Returns the first day of the month, or `None` if the year is outside
    /// the representable date range.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Returns the last day of the month, or `None` if the year is outside
    /// the representable date range.
    pub fn last_day(self) -> Option<NaiveDate> {
        if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)?.pred_opt()
        }
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(self) -> u32 {
        self.last_day().map_or(0, |d| d.day())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One column header of the overview grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The date.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// True on Saturdays and Sundays.
    pub is_weekend: bool,
    /// Name of the public holiday on this date, if any.
    pub holiday: Option<String>,
}

impl CalendarDay {
    /// Returns true if the day is neither a weekend nor a holiday.
    pub fn is_working_day(&self) -> bool {
        !self.is_weekend && self.holiday.is_none()
    }
}

/// The absence shown in one cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceCell {
    /// The ID of the request covering the day.
    pub request_id: String,
    /// The kind of absence.
    pub category: AbsenceCategory,
    /// The request's status.
    pub status: RequestStatus,
}

/// One employee's line in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// The employee's email.
    pub employee: String,
    /// The name shown in the first column.
    pub display_name: String,
    /// One entry per day of the month, `None` when present at work.
    pub cells: Vec<Option<AbsenceCell>>,
}

impl EmployeeRow {
    /// Counts the days of the month with an absence marked.
    pub fn absent_days(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// The absence calendar for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOverview {
    /// The month shown.
    pub month: YearMonth,
    /// One entry per day of the month.
    pub days: Vec<CalendarDay>,
    /// Employees with at least one absence overlapping the month.
    pub rows: Vec<EmployeeRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(YearMonth::new(2025, 0).is_err());
        assert!(YearMonth::new(2025, 13).is_err());
        assert!(YearMonth::new(2025, 12).is_ok());
    }

    #[test]
    fn test_next_and_previous_within_year() {
        let june = YearMonth::new(2025, 6).unwrap();
        assert_eq!(june.next(), YearMonth::new(2025, 7).ok());
        assert_eq!(june.previous(), YearMonth::new(2025, 5).ok());
    }

    #[test]
    fn test_previous_wraps_to_december() {
        let january = YearMonth::new(2025, 1).unwrap();
        assert_eq!(january.previous(), YearMonth::new(2024, 12).ok());
    }

    #[test]
    fn test_next_and_previous_stop_at_year_limits() {
        assert_eq!(YearMonth::new(i32::MAX, 12).unwrap().next(), None);
        assert_eq!(YearMonth::new(i32::MIN, 1).unwrap().previous(), None);
    }

    #[test]
    fn test_last_day_of_unrepresentable_year_is_none() {
        let month = YearMonth::new(i32::MAX, 12).unwrap();
        assert_eq!(month.first_day(), None);
        assert_eq!(month.last_day(), None);
        assert_eq!(month.days_in_month(), 0);
    }

    #[test]
    fn test_december_of_last_representable_year() {
        let year = NaiveDate::MAX.year();
        let month = YearMonth::new(year, 12).unwrap();
        assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(year, 12, 31));
        assert_eq!(month.days_in_month(), 31);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2025, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_first_and_last_day() {
        let month = YearMonth::new(2025, 12).unwrap();
        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2025, 12, 1));
        assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2025, 12, 31));
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        assert_eq!(YearMonth::of(date), YearMonth::new(2025, 9).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(YearMonth::new(2025, 3).unwrap().to_string(), "2025-03");
    }
}
