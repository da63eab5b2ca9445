//! Tests for the weekly status grid.

use chrono::Weekday;
use presence_engine::schedule::{
    day_index, weekday_from_index, DayTemplate, HourRange, AVAILABLE, BUSY, SLEEPING, WEEKDAY_HOURS,
    WEEKEND, WEEKEND_HOURS,
};
use presence_engine::{PresenceError, Status, StatusEntry, WeeklySchedule};

fn standard() -> WeeklySchedule {
    WeeklySchedule::standard().unwrap()
}

// ── Standard week ───────────────────────────────────────────────────────────

#[test]
fn weekday_nights_are_sleeping_and_dnd() {
    let schedule = standard();
    for day in 1..=5 {
        for hour in 0..=6 {
            let entry = schedule.resolve_index(day, hour).unwrap();
            assert_eq!(entry.status, Status::Sleeping, "day {} hour {}", day, hour);
            assert_eq!(entry.message, SLEEPING);
            assert!(entry.do_not_disturb);
        }
    }
}

#[test]
fn weekday_work_hours_are_busy() {
    let schedule = standard();
    for day in 1..=5 {
        for hour in 7..=17 {
            let entry = schedule.resolve_index(day, hour).unwrap();
            assert_eq!(entry, StatusEntry::new(Status::Busy, false), "day {} hour {}", day, hour);
            assert_eq!(entry.message, BUSY);
        }
    }
}

#[test]
fn weekday_evenings_are_available() {
    let schedule = standard();
    for day in 1..=5 {
        for hour in 18..=23 {
            let entry = schedule.resolve_index(day, hour).unwrap();
            assert_eq!(entry, StatusEntry::new(Status::Available, false), "day {} hour {}", day, hour);
            assert_eq!(entry.message, AVAILABLE);
        }
    }
}

#[test]
fn weekends_are_dnd_all_day() {
    let schedule = standard();
    for weekday in [Weekday::Sat, Weekday::Sun] {
        for hour in 0..24 {
            let entry = schedule.resolve(weekday, hour);
            assert_eq!(entry.status, Status::Weekend);
            assert_eq!(entry.message, WEEKEND);
            assert!(entry.do_not_disturb);
        }
    }
}

#[test]
fn offset_hours_past_midnight_wrap_on_the_same_day() {
    let schedule = standard();
    // 24..=26 are what UTC 21..=23 become after the +3 offset.
    assert_eq!(schedule.resolve(Weekday::Mon, 24).status, Status::Sleeping);
    assert_eq!(schedule.resolve(Weekday::Fri, 26).status, Status::Sleeping);
    assert_eq!(schedule.resolve(Weekday::Sun, 25).status, Status::Weekend);
    assert_eq!(schedule.resolve(Weekday::Wed, 31), schedule.resolve(Weekday::Wed, 7));
}

#[test]
fn covers_the_full_grid() {
    let schedule = standard();
    let cells: Vec<_> = schedule.cells().collect();
    assert_eq!(cells.len(), 7 * 24);
    assert_eq!(cells[0].0, Weekday::Sun);
    assert_eq!(cells[0].1, 0);
    assert_eq!(cells[167].0, Weekday::Sat);
    assert_eq!(cells[167].1, 23);
    let dnd_hours = cells.iter().filter(|(_, _, e)| e.do_not_disturb).count();
    // 2 weekend days plus 7 night hours on 5 weekdays.
    assert_eq!(dnd_hours, 2 * 24 + 5 * 7);
}

#[test]
fn day_outside_week_is_rejected() {
    let schedule = standard();
    assert_eq!(schedule.resolve_index(7, 10), Err(PresenceError::InvalidDay(7)));
    assert_eq!(weekday_from_index(42), Err(PresenceError::InvalidDay(42)));
}

#[test]
fn day_index_is_sunday_based() {
    assert_eq!(day_index(Weekday::Sun), 0);
    assert_eq!(day_index(Weekday::Mon), 1);
    assert_eq!(day_index(Weekday::Sat), 6);
    for day in 0..7 {
        assert_eq!(day_index(weekday_from_index(day).unwrap()), day);
    }
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn missing_weekend_template_is_a_gap() {
    let templates = [DayTemplate {
        first_day: 1,
        last_day: 5,
        hours: WEEKDAY_HOURS,
    }];
    let err = WeeklySchedule::from_templates(&templates).unwrap_err();
    assert_eq!(err, PresenceError::ScheduleGap { day: 0, hour: 0 });
}

#[test]
fn missing_hour_range_is_a_gap() {
    const PARTIAL: &[HourRange] = &[HourRange {
        start: 0,
        end: 20,
        entry: StatusEntry::new(Status::Busy, false),
    }];
    let templates = [
        DayTemplate {
            first_day: 1,
            last_day: 5,
            hours: PARTIAL,
        },
        DayTemplate {
            first_day: 6,
            last_day: 7,
            hours: WEEKEND_HOURS,
        },
    ];
    let err = WeeklySchedule::from_templates(&templates).unwrap_err();
    assert_eq!(err, PresenceError::ScheduleGap { day: 1, hour: 21 });
}

#[test]
fn cyclic_hour_range_wraps_past_midnight() {
    const NIGHT_SHIFT: &[HourRange] = &[
        HourRange {
            start: 6,
            end: 21,
            entry: StatusEntry::new(Status::Available, false),
        },
        HourRange {
            start: 22,
            end: 29,
            entry: StatusEntry::new(Status::Sleeping, true),
        },
    ];
    let templates = [DayTemplate {
        first_day: 0,
        last_day: 6,
        hours: NIGHT_SHIFT,
    }];
    let schedule = WeeklySchedule::from_templates(&templates).unwrap();
    assert_eq!(schedule.resolve(Weekday::Tue, 23).status, Status::Sleeping);
    assert_eq!(schedule.resolve(Weekday::Tue, 3).status, Status::Sleeping);
    assert_eq!(schedule.resolve(Weekday::Tue, 6).status, Status::Available);
}

#[test]
fn later_templates_overwrite_earlier_ones() {
    let templates = [
        DayTemplate {
            first_day: 0,
            last_day: 6,
            hours: WEEKDAY_HOURS,
        },
        DayTemplate {
            first_day: 3,
            last_day: 3,
            hours: WEEKEND_HOURS,
        },
    ];
    let schedule = WeeklySchedule::from_templates(&templates).unwrap();
    assert_eq!(schedule.resolve(Weekday::Wed, 10).status, Status::Weekend);
    assert_eq!(schedule.resolve(Weekday::Thu, 10).status, Status::Busy);
}

#[test]
fn invalid_template_ranges_are_rejected() {
    let bad_day = [DayTemplate {
        first_day: 7,
        last_day: 8,
        hours: WEEKEND_HOURS,
    }];
    assert_eq!(
        WeeklySchedule::from_templates(&bad_day).unwrap_err(),
        PresenceError::InvalidDay(7)
    );

    const BAD_HOURS: &[HourRange] = &[HourRange {
        start: 24,
        end: 30,
        entry: StatusEntry::new(Status::Busy, false),
    }];
    let bad_hour = [DayTemplate {
        first_day: 0,
        last_day: 6,
        hours: BAD_HOURS,
    }];
    assert_eq!(
        WeeklySchedule::from_templates(&bad_hour).unwrap_err(),
        PresenceError::InvalidHour(24)
    );
}

#[test]
fn status_entry_serializes_snake_case() {
    let json = serde_json::to_value(StatusEntry::new(Status::Sleeping, true)).unwrap();
    assert_eq!(json["status"], "sleeping");
    assert_eq!(json["do_not_disturb"], true);
    assert_eq!(json["message"], SLEEPING);
}
