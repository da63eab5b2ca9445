//! Weekly availability grid.
//!
//! The grid maps every (weekday, hour) pair to a [`StatusEntry`]. It is built
//! from day templates, each of which replicates a set of hour ranges across a
//! range of weekdays. Ranges are cyclic: a day range `6..=7` covers Saturday
//! and Sunday, an hour range `22..=25` covers 22:00 through 01:00.
//!
//! Construction checks that all 7 × 24 cells are covered and fails otherwise,
//! so lookups never have a missing entry.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{PresenceError, Result};

pub const DAYS_PER_WEEK: u32 = 7;
pub const HOURS_PER_DAY: u32 = 24;

pub const SLEEPING: &str = "💤 Sleeping...";
pub const BUSY: &str = "⚠️ Busy. ⛔ Do Not Disturb";
pub const AVAILABLE: &str = "✅ Available for messaging, calls will be declined 📵";
pub const WEEKEND: &str = "✨ On a weekend. 📳 Enjoying real life 🏞️";

/// The kind of status shown for a schedule cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Sleeping,
    Busy,
    Available,
    Weekend,
}

impl Status {
    pub const fn message(self) -> &'static str {
        match self {
            Status::Sleeping => SLEEPING,
            Status::Busy => BUSY,
            Status::Available => AVAILABLE,
            Status::Weekend => WEEKEND,
        }
    }
}

/// One cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub status: Status,
    pub message: &'static str,
    /// Contact attempts should be blocked.
    pub do_not_disturb: bool,
}

impl StatusEntry {
    pub const fn new(status: Status, do_not_disturb: bool) -> Self {
        Self {
            status,
            message: status.message(),
            do_not_disturb,
        }
    }
}

/// Inclusive hour range, taken modulo 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
    pub entry: StatusEntry,
}

/// Hour ranges applied to an inclusive weekday range (0 = Sunday), taken
/// modulo 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTemplate {
    pub first_day: u32,
    pub last_day: u32,
    pub hours: &'static [HourRange],
}

pub const WEEKDAY_HOURS: &[HourRange] = &[
    HourRange {
        start: 0,
        end: 6,
        entry: StatusEntry::new(Status::Sleeping, true),
    },
    HourRange {
        start: 7,
        end: 17,
        entry: StatusEntry::new(Status::Busy, false),
    },
    HourRange {
        start: 18,
        end: 23,
        entry: StatusEntry::new(Status::Available, false),
    },
];

pub const WEEKEND_HOURS: &[HourRange] = &[HourRange {
    start: 0,
    end: 23,
    entry: StatusEntry::new(Status::Weekend, true),
}];

/// Monday–Friday follow [`WEEKDAY_HOURS`]; Saturday and Sunday are weekend.
pub const STANDARD_WEEK: &[DayTemplate] = &[
    DayTemplate {
        first_day: 1,
        last_day: 5,
        hours: WEEKDAY_HOURS,
    },
    DayTemplate {
        first_day: 6,
        last_day: 7,
        hours: WEEKEND_HOURS,
    },
];

fn cyclic(start: u32, end: u32, base: u32) -> impl Iterator<Item = u32> {
    (start..=end).map(move |i| i % base)
}

/// Index of a weekday with Sunday as 0.
pub fn day_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// Weekdays in grid order, Sunday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Weekday for a Sunday-based index.
///
/// # Errors
/// Returns `PresenceError::InvalidDay` for indices above 6.
pub fn weekday_from_index(day: u32) -> Result<Weekday> {
    WEEK.get(day as usize)
        .copied()
        .ok_or(PresenceError::InvalidDay(day))
}

/// Fully covered 7 × 24 status grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    // Indexed by Sunday-based day, then hour. Always 7 rows of 24.
    grid: Vec<Vec<StatusEntry>>,
}

impl WeeklySchedule {
    /// The built-in Monday–Friday / weekend schedule.
    pub fn standard() -> Result<Self> {
        Self::from_templates(STANDARD_WEEK)
    }

    /// Build a grid from day templates. Later templates overwrite earlier ones
    /// where they overlap.
    ///
    /// # Errors
    /// - `PresenceError::InvalidDay` if a template's day range is empty or
    ///   starts past Saturday.
    /// - `PresenceError::InvalidHour` if an hour range is empty or starts past 23.
    /// - `PresenceError::ScheduleGap` for the first uncovered (day, hour) cell.
    pub fn from_templates(templates: &[DayTemplate]) -> Result<Self> {
        let mut slots: [[Option<StatusEntry>; 24]; 7] = [[None; 24]; 7];

        for template in templates {
            if template.first_day >= DAYS_PER_WEEK || template.last_day < template.first_day {
                return Err(PresenceError::InvalidDay(template.first_day));
            }
            for range in template.hours {
                if range.start >= HOURS_PER_DAY || range.end < range.start {
                    return Err(PresenceError::InvalidHour(range.start));
                }
            }

            for day in cyclic(template.first_day, template.last_day, DAYS_PER_WEEK) {
                for range in template.hours {
                    for hour in cyclic(range.start, range.end, HOURS_PER_DAY) {
                        slots[day as usize][hour as usize] = Some(range.entry);
                    }
                }
            }
        }

        let mut grid = Vec::with_capacity(DAYS_PER_WEEK as usize);
        for (day, hours) in slots.iter().enumerate() {
            let row = hours
                .iter()
                .enumerate()
                .map(|(hour, slot)| {
                    slot.ok_or(PresenceError::ScheduleGap {
                        day: day as u32,
                        hour: hour as u32,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            grid.push(row);
        }

        tracing::debug!(templates = templates.len(), "weekly schedule built");
        Ok(Self { grid })
    }

    /// Entry for a weekday and hour. The hour is reduced modulo 24 first, so
    /// offset hours past midnight (24, 25, ...) wrap onto the same weekday.
    pub fn resolve(&self, weekday: Weekday, hour: u32) -> StatusEntry {
        self.grid[day_index(weekday) as usize][(hour % HOURS_PER_DAY) as usize]
    }

    /// [`resolve`](Self::resolve) with a Sunday-based numeric day.
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidDay` for days above 6.
    pub fn resolve_index(&self, day: u32, hour: u32) -> Result<StatusEntry> {
        Ok(self.resolve(weekday_from_index(day)?, hour))
    }

    /// Every cell as `(weekday, hour, entry)`, Sunday first.
    pub fn cells(&self) -> impl Iterator<Item = (Weekday, u32, StatusEntry)> + '_ {
        WEEK.iter().zip(&self.grid).flat_map(|(&weekday, row)| {
            row.iter()
                .enumerate()
                .map(move |(hour, entry)| (weekday, hour as u32, *entry))
        })
    }
}
