//! Holiday lookup keyed by `MM-DD`.
//!
//! The table merges a static list of fixed-date holidays with the movable
//! holidays of a single year (currently Easter Sunday). Movable entries are
//! inserted last, so a movable holiday replaces a fixed one falling on the
//! same month-day.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::easter::{easter_sunday, FIRST_GREGORIAN_YEAR};
use crate::error::{PresenceError, Result};

/// A calendar date irrespective of year, written `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub(crate) month: u32,
    pub(crate) day: u32,
}

impl MonthDay {
    /// Build a key, rejecting days that never occur (February 29 is allowed).
    pub fn new(month: u32, day: u32) -> Result<Self> {
        // 2000 is a leap year, so every real month-day has a date in it.
        NaiveDate::from_ymd_opt(2000, month, day)
            .map(|_| Self { month, day })
            .ok_or_else(|| PresenceError::InvalidMonthDay(format!("{:02}-{:02}", month, day)))
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The month-day of any date-like value (typically a UTC timestamp).
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = PresenceError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PresenceError::InvalidMonthDay(s.to_string());
        let (month, day) = s.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        Self::new(month, day).map_err(|_| invalid())
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Name given to the computed Easter entry.
pub const EASTER_SUNDAY: &str = "Easter Sunday";

/// Recurring holidays, keyed by `MM-DD`.
pub const FIXED_HOLIDAYS: &[(&str, &str)] = &[
    ("01-01", "Feast of the Circumcision of Christ (New Year's Day)"),
    ("01-02", "Saint Basil's Day (New Year's 2nd Day)"),
    ("01-06", "Epiphany (Three Kings’ Day)"),
    ("02-02", "Candlemas (Presentation of Jesus at the Temple)"),
    ("02-14", "Saint Valentine's Day"),
    ("03-17", "Saint Patrick's Day"),
    ("03-19", "Saint Joseph's Day"),
    ("03-25", "Annunciation"),
    ("04-23", "Saint George's Day"),
    ("04-25", "Saint Mark's Day"),
    ("05-01", "Saint James the Great Day"),
    ("05-09", "Europe Day"),
    ("05-31", "Visitation of Mary"),
    ("06-24", "Nativity of Saint John the Baptist"),
    ("06-29", "Saints Peter and Paul's Day"),
    ("07-17", "my Sister's Birthday"),
    ("07-20", "Saint Elijah's the Prophet Day"),
    ("07-25", "Saint James the Great Day"),
    ("07-29", "my Birthday!"),
    ("08-06", "Transfiguration of Jesus"),
    ("08-15", "Assumption of Mary (Assumption Day)"),
    ("09-14", "Holy Cross Day"),
    ("09-29", "Michaelmas (Feast of Saint Michael and All Angels)"),
    ("10-04", "Saint Francis of Assisi Day"),
    ("10-18", "Saint Luke's Day"),
    ("10-31", "Reformation Day"),
    ("11-01", "All Saints' Day"),
    ("11-02", "All Souls' Day"),
    ("11-30", "Saint Andrew's Day"),
    ("12-06", "Saint Nicholas Day"),
    ("12-08", "Feast of the Immaculate Conception"),
    ("12-24", "Christmas Eve"),
    ("12-25", "Christmas Day"),
    ("12-26", "Saint Stephen's Day"),
    ("12-28", "Holy Innocents' Day"),
    ("12-29", "my Dad's Birthday"),
    ("12-31", "New Year's Eve"),
];

/// Whether a holiday recurs on the same date or is computed per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    Fixed,
    Movable,
}

/// A single entry of the merged holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: MonthDay,
    pub name: &'static str,
    pub kind: HolidayKind,
}

/// Fixed plus movable holidays for one year. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayTable {
    year: i32,
    entries: BTreeMap<MonthDay, Holiday>,
}

impl HolidayTable {
    /// The built-in fixed holidays merged with `year`'s Easter Sunday.
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidYear` for years before 1583.
    pub fn for_year(year: i32) -> Result<Self> {
        if year < FIRST_GREGORIAN_YEAR {
            return Err(PresenceError::InvalidYear(year));
        }
        Self::merge(year, FIXED_HOLIDAYS, &[(easter_sunday(year), EASTER_SUNDAY)])
    }

    /// Merge a fixed table with movable entries; later entries win on collision.
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidMonthDay` if a fixed key is not `MM-DD`.
    pub fn merge(
        year: i32,
        fixed: &[(&str, &'static str)],
        movable: &[(MonthDay, &'static str)],
    ) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for &(key, name) in fixed {
            let date: MonthDay = key.parse()?;
            entries.insert(
                date,
                Holiday {
                    date,
                    name,
                    kind: HolidayKind::Fixed,
                },
            );
        }

        for &(date, name) in movable {
            let replaced = entries.insert(
                date,
                Holiday {
                    date,
                    name,
                    kind: HolidayKind::Movable,
                },
            );
            if let Some(previous) = replaced {
                tracing::debug!(
                    year,
                    date = %date,
                    replaced = previous.name,
                    holiday = name,
                    "movable holiday overrides fixed entry"
                );
            }
        }

        tracing::debug!(year, entries = entries.len(), "holiday table built");
        Ok(Self { year, entries })
    }

    /// The year whose movable holidays are merged in.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Holiday name for an `MM-DD` key, or `None` when the key is absent or
    /// malformed.
    pub fn resolve(&self, key: &str) -> Option<&'static str> {
        let date: MonthDay = key.parse().ok()?;
        self.get(date).map(|h| h.name)
    }

    /// Full entry for a month-day.
    pub fn get(&self, date: MonthDay) -> Option<&Holiday> {
        self.entries.get(&date)
    }

    /// Entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
