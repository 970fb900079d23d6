//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a holiday falls on the same day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Same day and month every year.
    Fixed,
    /// Derived from the Easter date or another yearly anchor.
    Moving,
}

/// A non-working calendar date.
///
/// # Example
///
/// ```
/// use absence_engine::models::{Holiday, HolidayKind};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     name: "Fête nationale".to_string(),
///     kind: HolidayKind::Fixed,
/// };
/// assert!(holiday.is_fixed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// How the date is determined.
    pub kind: HolidayKind,
}

impl Holiday {
    /// Returns true for holidays on the same day every year.
    pub fn is_fixed(&self) -> bool {
        self.kind == HolidayKind::Fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_serialization() {
        let holiday = Holiday {
            date: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(),
            name: "Vendredi Saint".to_string(),
            kind: HolidayKind::Moving,
        };

        let json = serde_json::to_value(&holiday).unwrap();
        assert_eq!(json["date"], "2025-04-18");
        assert_eq!(json["kind"], "moving");
        assert!(!holiday.is_fixed());
    }
}
