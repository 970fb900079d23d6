//! Configuration loading and management for the Absence Engine.
//!
//! This module loads holiday calendars from YAML files. When no file is
//! loaded, [`CalendarRules::default`] provides the public holidays of the
//! canton of Vaud.
//!
//! # Example
//!
//! ```no_run
//! use absence_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vaud").unwrap();
//! println!("Loaded calendar: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalendarMetadata, CalendarRules, EasterOffsetRule, FixedHolidayRule, WeekdayAnchorRule,
};
