//! Composite availability status for a UTC timestamp.
//!
//! Holidays take precedence over the weekly schedule. Schedule lookups use
//! the UTC weekday together with the UTC hour plus a fixed offset; the offset
//! hour is not carried into the next weekday when it passes midnight.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PresenceError, Result};
use crate::holiday::{HolidayTable, MonthDay};
use crate::schedule::{StatusEntry, WeeklySchedule};

/// Hours added to the UTC hour before the schedule lookup.
pub const DEFAULT_UTC_OFFSET_HOURS: u32 = 3;

/// Largest accepted offset.
pub const MAX_UTC_OFFSET_HOURS: u32 = 23;

pub const HOLIDAY: &str = "🎉 On a holiday celebration with my family!";

/// Tunables for status derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    pub utc_offset_hours: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl OracleConfig {
    /// Check the offset is within `0..=23`.
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidOffset` otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_hours > MAX_UTC_OFFSET_HOURS {
            return Err(PresenceError::InvalidOffset(self.utc_offset_hours));
        }
        Ok(())
    }

    /// Weekday and unwrapped offset hour used for schedule lookups.
    ///
    /// Saturates instead of overflowing for unvalidated configs.
    pub fn schedule_slot(&self, now: DateTime<Utc>) -> (Weekday, u32) {
        (now.weekday(), now.hour().saturating_add(self.utc_offset_hours))
    }
}

/// Status reported for a single instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentStatus {
    pub is_holiday: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    pub message: String,
    pub do_not_disturb: bool,
}

/// Status text shown on a holiday.
pub fn holiday_message(name: &str) -> String {
    format!("{} Today is {} 👨‍👩‍👧‍👦", HOLIDAY, name)
}

/// Holiday table and weekly schedule for one year.
///
/// Immutable once built. A long-running caller rebuilds it when the UTC year
/// changes, see [`refreshed_for`](Self::refreshed_for).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityOracle {
    config: OracleConfig,
    holidays: HolidayTable,
    schedule: WeeklySchedule,
}

impl AvailabilityOracle {
    /// Oracle for `year` with the default configuration.
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidYear` for years before 1583.
    pub fn new(year: i32) -> Result<Self> {
        Self::with_config(year, OracleConfig::default())
    }

    /// Oracle for `year` with an explicit configuration.
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidOffset` for offsets above 23,
    /// `PresenceError::InvalidYear` for years before 1583, or a schedule error
    /// if the built-in templates leave a gap.
    pub fn with_config(year: i32, config: OracleConfig) -> Result<Self> {
        config.validate()?;
        let holidays = HolidayTable::for_year(year)?;
        let schedule = WeeklySchedule::standard()?;
        tracing::debug!(
            year,
            utc_offset_hours = config.utc_offset_hours,
            "availability oracle initialised"
        );
        Ok(Self::from_parts(config, holidays, schedule))
    }

    /// Oracle for the UTC year of `now`.
    pub fn for_timestamp(now: DateTime<Utc>, config: OracleConfig) -> Result<Self> {
        Self::with_config(now.year(), config)
    }

    /// Assemble an oracle from prebuilt tables. `config` is not validated.
    pub fn from_parts(
        config: OracleConfig,
        holidays: HolidayTable,
        schedule: WeeklySchedule,
    ) -> Self {
        Self {
            config,
            holidays,
            schedule,
        }
    }

    pub fn year(&self) -> i32 {
        self.holidays.year()
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Whether the holiday table was built for `now`'s UTC year.
    pub fn is_current_for(&self, now: DateTime<Utc>) -> bool {
        now.year() == self.year()
    }

    /// A rebuilt oracle when `now` falls in a different UTC year, else `None`.
    pub fn refreshed_for(&self, now: DateTime<Utc>) -> Result<Option<Self>> {
        if self.is_current_for(now) {
            return Ok(None);
        }
        tracing::info!(
            from = self.year(),
            to = now.year(),
            "year changed, rebuilding holiday table"
        );
        Self::for_timestamp(now, self.config).map(Some)
    }

    /// Schedule entry for `now`, ignoring holidays.
    pub fn schedule_entry(&self, now: DateTime<Utc>) -> StatusEntry {
        let (weekday, hour) = self.config.schedule_slot(now);
        self.schedule.resolve(weekday, hour)
    }

    /// Status for `now`: the holiday if the UTC month-day has one, otherwise
    /// the weekly schedule entry.
    pub fn current_status(&self, now: DateTime<Utc>) -> CurrentStatus {
        if !self.is_current_for(now) {
            tracing::warn!(
                oracle_year = self.year(),
                year = now.year(),
                "status requested outside the oracle's year; movable holidays may be stale"
            );
        }

        if let Some(holiday) = self.holidays.get(MonthDay::of(&now)) {
            return CurrentStatus {
                is_holiday: true,
                holiday_name: Some(holiday.name.to_string()),
                message: holiday_message(holiday.name),
                do_not_disturb: true,
            };
        }

        let entry = self.schedule_entry(now);
        CurrentStatus {
            is_holiday: false,
            holiday_name: None,
            message: entry.message.to_string(),
            do_not_disturb: entry.do_not_disturb,
        }
    }
}
