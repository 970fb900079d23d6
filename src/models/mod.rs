//! Core data models for the Absence Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence_category;
mod absence_request;
mod absence_tally;
mod audit;
mod holiday;
mod month_overview;

pub use absence_category::{AbsenceCategory, RequestStatus};
pub use absence_request::AbsenceRequest;
pub use absence_tally::{AbsenceTally, TallyReport};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use holiday::{Holiday, HolidayKind};
pub use month_overview::{
    AbsenceCell, CalendarDay, EmployeeRow, MonthOverview, YearMonth,
};
