//! Calculation logic for the Absence Engine.
//!
//! This module contains the Easter computation, the holiday calendar
//! provider, day classification and working-day counting, the absence tally
//! engine and the monthly absence overview. Every function here is pure.

mod easter;
mod holidays;
mod month_overview;
mod tally;
mod working_days;

pub use easter::easter_sunday;
pub use holidays::{
    holiday_dates, holiday_dates_with, holidays_for_year, holidays_for_year_with, is_holiday,
};
pub use month_overview::{month_overview, month_overview_with};
pub use tally::{TallyOutcome, tally, tally_with_audit};
pub use working_days::{
    DayKind, classify_day, holidays_between, is_weekend, is_working_day, working_days,
    working_days_with,
};
