//! # presence-engine
//!
//! Deterministic "am I available?" status for a personal homepage.
//!
//! Given a UTC timestamp, the engine reports whether the day is a holiday
//! (a fixed month-day table plus the year's Easter Sunday) and otherwise the
//! weekly schedule entry for the weekday and offset hour. Everything is pure
//! computation over tables built once per year.
//!
//! ## Modules
//!
//! - [`easter`]: Anonymous Gregorian computus
//! - [`holiday`]: `MM-DD` keys and the merged fixed + movable holiday table
//! - [`schedule`]: Weekly 7×24 status grid built from hour-range templates
//! - [`oracle`]: Composite status for a timestamp
//! - [`contact`]: Whether an outgoing contact action should be blocked
//! - [`now_playing`]: Randomised "now playing" line during listening hours
//! - [`error`]: Error types

pub mod contact;
pub mod easter;
pub mod error;
pub mod holiday;
pub mod now_playing;
pub mod oracle;
pub mod schedule;

pub use contact::{ContactDecision, ContactGate};
pub use easter::easter_sunday;
pub use error::PresenceError;
pub use holiday::{HolidayTable, MonthDay};
pub use now_playing::{now_playing, NowPlaying, Song};
pub use oracle::{AvailabilityOracle, CurrentStatus, OracleConfig};
pub use schedule::{Status, StatusEntry, WeeklySchedule};
