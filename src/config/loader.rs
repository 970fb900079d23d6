//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading holiday
//! calendars from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CalendarMetadata, CalendarRules};

/// The file name read from a calendar directory.
const CALENDAR_FILE: &str = "calendar.yaml";

/// Loads and provides access to the holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/vaud/
/// └── calendar.yaml   # Metadata plus fixed, Easter-based and weekday-anchored holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use absence_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/vaud").unwrap();
/// println!("Loaded calendar: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: CalendarRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `calendar.yaml` is missing
    /// - [`EngineError::ConfigParseError`] if it is not valid YAML or names
    ///   a date that does not exist every year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let calendar_path = path.as_ref().join(CALENDAR_FILE);
        let path_str = calendar_path.display().to_string();

        let content =
            fs::read_to_string(&calendar_path).map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        let rules = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            calendar = %rules.metadata.code,
            holidays = rules.holiday_count(),
            "Loaded holiday calendar"
        );

        Ok(Self { rules })
    }

    /// Wraps rules that were built in code.
    pub fn from_rules(rules: CalendarRules) -> Self {
        Self { rules }
    }

    /// Parses and validates the content of a calendar file.
    fn parse(content: &str, path: &str) -> EngineResult<CalendarRules> {
        let rules: CalendarRules =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        rules
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: path.to_string(),
                message,
            })?;

        Ok(rules)
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &CalendarRules {
        &self.rules
    }

    /// Consumes the loader, returning the rules.
    pub fn into_rules(self) -> CalendarRules {
        self.rules
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.rules.metadata
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_rules(CalendarRules::default())
    }
}
