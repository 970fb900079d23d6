//! Configuration types for the holiday calendar.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from `calendar.yaml`, plus the built-in Vaud calendar used
//! when no file is loaded.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Metadata about the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMetadata {
    /// Short code of the calendar (e.g., "CH-VD").
    pub code: String,
    /// Human-readable name of the calendar.
    pub name: String,
    /// The region whose public holidays the calendar lists.
    pub region: String,
    /// Where the holiday list comes from.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// A holiday on the same day and month every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHolidayRule {
    /// Name of the holiday.
    pub name: String,
    /// Month number, 1 to 12.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}

/// A holiday a fixed number of days before or after Easter Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterOffsetRule {
    /// Name of the holiday.
    pub name: String,
    /// Days relative to Easter Sunday (negative for earlier dates).
    pub offset_days: i64,
}

/// A holiday on the first given weekday on or after a fixed day.
///
/// The Federal Fast Monday is the first Monday on or after September 15.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayAnchorRule {
    /// Name of the holiday.
    pub name: String,
    /// Month of the anchor day.
    pub month: u32,
    /// Day of the month the search starts from (inclusive).
    pub day: u32,
    /// The weekday the holiday falls on.
    pub weekday: Weekday,
}

/// The complete set of holiday rules for one region.
///
/// # Example
///
/// ```
/// use absence_engine::config::CalendarRules;
///
/// let rules = CalendarRules::default();
/// assert_eq!(rules.metadata.code, "CH-VD");
/// assert_eq!(rules.holiday_count(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRules {
    /// Calendar metadata.
    pub metadata: CalendarMetadata,
    /// Holidays on a fixed day and month.
    #[serde(default)]
    pub fixed: Vec<FixedHolidayRule>,
    /// Holidays derived from Easter Sunday.
    #[serde(default)]
    pub easter_offsets: Vec<EasterOffsetRule>,
    /// Holidays anchored on a weekday after a fixed day.
    #[serde(default)]
    pub weekday_anchors: Vec<WeekdayAnchorRule>,
}

impl CalendarRules {
    /// Returns the number of holidays the rules produce per year.
    pub fn holiday_count(&self) -> usize {
        self.fixed.len() + self.easter_offsets.len() + self.weekday_anchors.len()
    }

    /// Checks that every rule names a date that exists in every year.
    ///
    /// Returns a description of the first invalid rule.
    pub fn validate(&self) -> Result<(), String> {
        // 2001 is not a leap year, so Feb 29 is rejected as a fixed day.
        const PROBE_YEAR: i32 = 2001;

        for rule in &self.fixed {
            if rule.name.trim().is_empty() {
                return Err("fixed holiday with an empty name".to_string());
            }
            if NaiveDate::from_ymd_opt(PROBE_YEAR, rule.month, rule.day).is_none() {
                return Err(format!(
                    "fixed holiday '{}' has invalid date {:02}-{:02}",
                    rule.name, rule.month, rule.day
                ));
            }
        }

        for rule in &self.easter_offsets {
            if rule.name.trim().is_empty() {
                return Err("Easter holiday with an empty name".to_string());
            }
            if rule.offset_days.abs() > 200 {
                return Err(format!(
                    "Easter holiday '{}' offset {} is out of range",
                    rule.name, rule.offset_days
                ));
            }
        }

        for rule in &self.weekday_anchors {
            if rule.name.trim().is_empty() {
                return Err("weekday-anchored holiday with an empty name".to_string());
            }
            if NaiveDate::from_ymd_opt(PROBE_YEAR, rule.month, rule.day).is_none() {
                return Err(format!(
                    "weekday-anchored holiday '{}' has invalid anchor {:02}-{:02}",
                    rule.name, rule.month, rule.day
                ));
            }
        }

        Ok(())
    }
}

impl Default for CalendarRules {
    /// The public holidays of the canton of Vaud.
    fn default() -> Self {
        let fixed = |name: &str, month, day| FixedHolidayRule {
            name: name.to_string(),
            month,
            day,
        };
        let easter = |name: &str, offset_days| EasterOffsetRule {
            name: name.to_string(),
            offset_days,
        };

        Self {
            metadata: CalendarMetadata {
                code: "CH-VD".to_string(),
                name: "Jours fériés du canton de Vaud".to_string(),
                region: "Vaud".to_string(),
                source_url: None,
            },
            fixed: vec![
                fixed("Nouvel An", 1, 1),
                fixed("Saint-Berchtold", 1, 2),
                fixed("Fête du travail", 5, 1),
                fixed("Fête nationale", 8, 1),
                fixed("Noël", 12, 25),
            ],
            easter_offsets: vec![
                easter("Vendredi Saint", -2),
                easter("Lundi de Pâques", 1),
                easter("Ascension", 39),
                easter("Lundi de Pentecôte", 50),
                easter("Fête-Dieu", 60),
            ],
            weekday_anchors: vec![WeekdayAnchorRule {
                name: "Lundi du Jeûne fédéral".to_string(),
                month: 9,
                day: 15,
                weekday: Weekday::Mon,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        assert_eq!(CalendarRules::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_rules_have_five_fixed_and_six_moving() {
        let rules = CalendarRules::default();
        assert_eq!(rules.fixed.len(), 5);
        assert_eq!(rules.easter_offsets.len() + rules.weekday_anchors.len(), 6);
    }

    #[test]
    fn test_validate_rejects_impossible_fixed_date() {
        let mut rules = CalendarRules::default();
        rules.fixed.push(FixedHolidayRule {
            name: "Nowhere Day".to_string(),
            month: 2,
            day: 30,
        });

        let err = rules.validate().unwrap_err();
        assert!(err.contains("Nowhere Day"));
    }

    #[test]
    fn test_validate_rejects_leap_day() {
        let mut rules = CalendarRules::default();
        rules.fixed.push(FixedHolidayRule {
            name: "Leap Day".to_string(),
            month: 2,
            day: 29,
        });
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut rules = CalendarRules::default();
        rules.easter_offsets[0].name = " ".to_string();
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_far_easter_offset() {
        let mut rules = CalendarRules::default();
        rules.easter_offsets[0].offset_days = 400;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_rules_deserialize_from_yaml() {
        let yaml = r#"
metadata:
  code: TEST
  name: Test calendar
  region: Nowhere
fixed:
  - { name: New Year, month: 1, day: 1 }
easter_offsets:
  - { name: Easter Monday, offset_days: 1 }
weekday_anchors:
  - { name: Fast Monday, month: 9, day: 15, weekday: Mon }
"#;

        let rules: CalendarRules = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.metadata.code, "TEST");
        assert!(rules.metadata.source_url.is_none());
        assert_eq!(rules.holiday_count(), 3);
        assert_eq!(rules.weekday_anchors[0].weekday, Weekday::Mon);
    }
}
