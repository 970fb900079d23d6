//! Absence tally models.
//!
//! This module contains the [`AbsenceTally`] produced by the tally engine
//! and the [`TallyReport`] envelope returned over HTTP.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AbsenceCategory, AuditTrace};

/// Working-day counts per absence category for one employee and one year.
///
/// `total` is always the sum of the six buckets; [`AbsenceTally::add`]
/// keeps it in step.
///
/// # Example
///
/// ```
/// use absence_engine::models::{AbsenceCategory, AbsenceTally};
///
/// let mut tally = AbsenceTally::empty("jean.dupont@example.ch", 2025);
/// tally.add(&AbsenceCategory::Vacation, 5);
/// tally.add(&AbsenceCategory::SickLeave, 1);
///
/// assert_eq!(tally.vacation_days, 5);
/// assert_eq!(tally.total, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceTally {
    /// The employee email the tally was computed for.
    pub employee: String,
    /// The calendar year the tally covers.
    pub year: i32,
    /// Working days of vacation.
    pub vacation_days: u32,
    /// Working days of sick leave.
    pub sick_days: u32,
    /// Working days of training.
    pub training_days: u32,
    /// Working days compensating overtime.
    pub overtime_days: u32,
    /// Working days of bereavement leave.
    pub bereavement_days: u32,
    /// Working days lost to accidents.
    pub accident_days: u32,
    /// Sum of all six buckets.
    pub total: u32,
}

impl AbsenceTally {
    /// Creates a tally with every bucket at zero.
    pub fn empty(employee: impl Into<String>, year: i32) -> Self {
        Self {
            employee: employee.into(),
            year,
            vacation_days: 0,
            sick_days: 0,
            training_days: 0,
            overtime_days: 0,
            bereavement_days: 0,
            accident_days: 0,
            total: 0,
        }
    }

    /// Adds `days` to the bucket for `category`.
    ///
    /// Returns false, leaving the tally untouched, when the category has no
    /// bucket. Counts saturate at `u32::MAX`.
    pub fn add(&mut self, category: &AbsenceCategory, days: u32) -> bool {
        let bucket = match category {
            AbsenceCategory::Vacation => &mut self.vacation_days,
            AbsenceCategory::SickLeave => &mut self.sick_days,
            AbsenceCategory::Training => &mut self.training_days,
            AbsenceCategory::Overtime => &mut self.overtime_days,
            AbsenceCategory::Bereavement => &mut self.bereavement_days,
            AbsenceCategory::Accident => &mut self.accident_days,
            AbsenceCategory::Other(_) => return false,
        };
        *bucket = bucket.saturating_add(days);
        self.total = self.total.saturating_add(days);
        true
    }

    /// Returns the days counted for `category` (0 for unknown categories).
    pub fn days_for(&self, category: &AbsenceCategory) -> u32 {
        match category {
            AbsenceCategory::Vacation => self.vacation_days,
            AbsenceCategory::SickLeave => self.sick_days,
            AbsenceCategory::Training => self.training_days,
            AbsenceCategory::Overtime => self.overtime_days,
            AbsenceCategory::Bereavement => self.bereavement_days,
            AbsenceCategory::Accident => self.accident_days,
            AbsenceCategory::Other(_) => 0,
        }
    }

    /// Recomputes the sum of the six buckets, saturating like [`add`](Self::add).
    pub fn bucket_sum(&self) -> u32 {
        [
            self.sick_days,
            self.training_days,
            self.overtime_days,
            self.bereavement_days,
            self.accident_days,
        ]
        .into_iter()
        .fold(self.vacation_days, u32::saturating_add)
    }
}

/// The tally of one HTTP request, with an identifier and its audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The computed tally.
    pub tally: AbsenceTally,
    /// How the tally was reached.
    pub audit_trace: AuditTrace,
}
