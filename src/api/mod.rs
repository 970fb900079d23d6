//! HTTP API module for the Absence Engine.
//!
//! This module exposes the holiday calendar, the working-day counter, the
//! absence tally, the monthly overview and the approval workflow as JSON
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalendarRequest, DecisionRequest, MAX_RANGE_DAYS, TallyRequest, WorkingDaysRequest,
};
pub use response::{ApiError, ApiErrorResponse, HolidaysResponse, WorkingDaysResponse};
pub use state::AppState;
