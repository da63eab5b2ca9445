//! Error types for presence-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresenceError {
    /// A (day, hour) cell of the weekly grid has no status entry.
    #[error("Schedule gap: no entry for day {day}, hour {hour}")]
    ScheduleGap { day: u32, hour: u32 },

    #[error("Invalid month-day key: {0}")]
    InvalidMonthDay(String),

    #[error("Invalid day of week: {0} (expected 0=Sunday..6=Saturday)")]
    InvalidDay(u32),

    #[error("Invalid hour of day: {0} (expected 0..=23)")]
    InvalidHour(u32),

    #[error("Invalid UTC offset: {0} hours (expected 0..=23)")]
    InvalidOffset(u32),

    #[error("Invalid year: {0} (the Gregorian computus needs 1583 or later)")]
    InvalidYear(i32),
}

pub type Result<T> = std::result::Result<T, PresenceError>;
