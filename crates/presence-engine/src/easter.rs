//! Easter Sunday via the Anonymous Gregorian algorithm (Meeus/Jones/Butcher).
//!
//! Pure integer arithmetic with floor division throughout. Every intermediate
//! value is non-negative for Gregorian years, so `div_euclid`/`rem_euclid`
//! agree with the textbook `floor` formulation. The arithmetic runs in `i64`
//! so that no `i32` year can overflow.

use chrono::NaiveDate;

use crate::holiday::MonthDay;

/// First year of the Gregorian calendar for which the computus is defined.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Month and day of Easter Sunday in the given Gregorian year.
///
/// The result always lies between March 22 and April 25 inclusive.
///
/// ```
/// use presence_engine::easter_sunday;
///
/// let easter = easter_sunday(2024);
/// assert_eq!((easter.month(), easter.day()), (3, 31));
/// ```
pub fn easter_sunday(year: i32) -> MonthDay {
    let year = i64::from(year);
    // Golden number minus one.
    let g = year.rem_euclid(19);
    let c = year.div_euclid(100);
    // Related to the epact.
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    // Days from March 21 to the Paschal full moon.
    let i = h - h.div_euclid(28) * (1 - 29_i64.div_euclid(h + 1) * (21 - g).div_euclid(11));
    // Weekday of the Paschal full moon.
    let j = (year + year.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    // Days from March 21 to the Sunday on or before the Paschal full moon.
    let l = i - j;

    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);

    MonthDay {
        month: month as u32,
        day: day as u32,
    }
}

/// Easter Sunday as a full calendar date.
///
/// Returns `None` for years before [`FIRST_GREGORIAN_YEAR`] or after
/// `NaiveDate::MAX`.
pub fn easter_date(year: i32) -> Option<NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }
    let easter = easter_sunday(year);
    NaiveDate::from_ymd_opt(year, easter.month(), easter.day())
}
