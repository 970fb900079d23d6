//! Absence categories and request statuses.
//!
//! These are the two fixed enumerations carried by every absence request
//! stored by the facility's backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of absence an employee requested.
///
/// Serialized as the snake_case strings stored by the backend
/// (`"vacation"`, `"sick_leave"`, ...). A string outside the fixed set
/// deserializes to [`AbsenceCategory::Other`] instead of failing, so a
/// stray record never prevents a tally from being computed; such requests
/// simply count towards no bucket.
///
/// # Example
///
/// ```
/// use absence_engine::models::AbsenceCategory;
///
/// let category: AbsenceCategory = serde_json::from_str("\"sick_leave\"").unwrap();
/// assert_eq!(category, AbsenceCategory::SickLeave);
///
/// let unknown: AbsenceCategory = serde_json::from_str("\"sabbatical\"").unwrap();
/// assert_eq!(unknown, AbsenceCategory::Other("sabbatical".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AbsenceCategory {
    /// Paid vacation.
    Vacation,
    /// Sick leave.
    SickLeave,
    /// Courses and training.
    Training,
    /// Time off compensating overtime.
    Overtime,
    /// Bereavement leave.
    Bereavement,
    /// Absence following a work or non-work accident.
    Accident,
    /// Any category outside the fixed enumeration.
    Other(String),
}

impl AbsenceCategory {
    /// The six categories that have a tally bucket, in display order.
    pub const KNOWN: [AbsenceCategory; 6] = [
        AbsenceCategory::Vacation,
        AbsenceCategory::SickLeave,
        AbsenceCategory::Training,
        AbsenceCategory::Overtime,
        AbsenceCategory::Bereavement,
        AbsenceCategory::Accident,
    ];

    /// Returns the wire code of the category.
    pub fn code(&self) -> &str {
        match self {
            AbsenceCategory::Vacation => "vacation",
            AbsenceCategory::SickLeave => "sick_leave",
            AbsenceCategory::Training => "training",
            AbsenceCategory::Overtime => "overtime",
            AbsenceCategory::Bereavement => "bereavement",
            AbsenceCategory::Accident => "accident",
            AbsenceCategory::Other(code) => code,
        }
    }

    /// Returns the label shown to staff.
    ///
    /// ```
    /// use absence_engine::models::AbsenceCategory;
    ///
    /// assert_eq!(AbsenceCategory::Training.label(), "Cours / Formation");
    /// ```
    pub fn label(&self) -> &str {
        match self {
            AbsenceCategory::Vacation => "Vacances",
            AbsenceCategory::SickLeave => "Maladie",
            AbsenceCategory::Training => "Cours / Formation",
            AbsenceCategory::Overtime => "Heures Sup.",
            AbsenceCategory::Bereavement => "Congé décès",
            AbsenceCategory::Accident => "Accident",
            AbsenceCategory::Other(code) => code,
        }
    }

    /// Returns true for the six categories that have a tally bucket.
    pub fn is_known(&self) -> bool {
        !matches!(self, AbsenceCategory::Other(_))
    }
}

impl From<String> for AbsenceCategory {
    fn from(code: String) -> Self {
        match code.as_str() {
            "vacation" => AbsenceCategory::Vacation,
            "sick_leave" => AbsenceCategory::SickLeave,
            "training" => AbsenceCategory::Training,
            "overtime" => AbsenceCategory::Overtime,
            "bereavement" => AbsenceCategory::Bereavement,
            "accident" => AbsenceCategory::Accident,
            _ => AbsenceCategory::Other(code),
        }
    }
}

impl From<AbsenceCategory> for String {
    fn from(category: AbsenceCategory) -> Self {
        match category {
            AbsenceCategory::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for AbsenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lifecycle status of an absence request.
///
/// Requests are created `Pending` and an administrator moves them to
/// `Approved` or `Rejected` exactly once. Only approved requests count
/// towards official statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting an administrator's decision.
    #[default]
    Pending,
    /// Accepted by an administrator.
    Approved,
    /// Refused by an administrator.
    Rejected,
}

impl RequestStatus {
    /// Returns the label shown to staff.
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "En attente",
            RequestStatus::Approved => "Approuvée",
            RequestStatus::Rejected => "Rejetée",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}
