//! Application state for the Absence Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CalendarRules, ConfigLoader};

/// Shared application state.
///
/// Holds the holiday calendar every handler computes against; handlers
/// never reach for a global calendar.
#[derive(Clone)]
pub struct AppState {
    /// The loaded holiday calendar.
    rules: Arc<CalendarRules>,
}

impl AppState {
    /// Creates a new application state from a configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            rules: Arc::new(config.into_rules()),
        }
    }

    /// Returns the holiday calendar rules.
    pub fn rules(&self) -> &CalendarRules {
        &self.rules
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
