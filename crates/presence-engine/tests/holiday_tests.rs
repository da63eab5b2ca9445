//! Tests for `MM-DD` keys and the merged holiday table.

use presence_engine::holiday::{HolidayKind, EASTER_SUNDAY, FIXED_HOLIDAYS};
use presence_engine::{HolidayTable, MonthDay, PresenceError};

// ── MonthDay ────────────────────────────────────────────────────────────────

#[test]
fn month_day_parses_and_formats() {
    let key: MonthDay = "07-29".parse().unwrap();
    assert_eq!(key, MonthDay::new(7, 29).unwrap());
    assert_eq!(key.to_string(), "07-29");
}

#[test]
fn month_day_rejects_malformed_keys() {
    for raw in ["13-01", "00-10", "02-30", "04-31", "7-29", "07/29", "", "ab-cd", "07-29-01"] {
        assert!(
            matches!(raw.parse::<MonthDay>(), Err(PresenceError::InvalidMonthDay(_))),
            "{:?} should be rejected",
            raw
        );
    }
}

#[test]
fn month_day_exposes_components() {
    let key = MonthDay::new(12, 25).unwrap();
    assert_eq!((key.month(), key.day()), (12, 25));
    assert_eq!(MonthDay::new(13, 40), Err(PresenceError::InvalidMonthDay("13-40".to_string())));
}

#[test]
fn month_day_accepts_leap_day() {
    assert!(MonthDay::new(2, 29).is_ok());
}

#[test]
fn month_day_orders_by_calendar() {
    let mut keys: Vec<MonthDay> = ["12-31", "01-02", "01-01", "03-17"]
        .iter()
        .map(|k| k.parse().unwrap())
        .collect();
    keys.sort();
    let formatted: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(formatted, ["01-01", "01-02", "03-17", "12-31"]);
}

#[test]
fn month_day_serializes_as_string() {
    let key = MonthDay::new(1, 6).unwrap();
    assert_eq!(serde_json::to_string(&key).unwrap(), r#""01-06""#);
    let back: MonthDay = serde_json::from_str(r#""01-06""#).unwrap();
    assert_eq!(back, key);
}

// ── HolidayTable ────────────────────────────────────────────────────────────

#[test]
fn resolves_fixed_holidays() {
    let table = HolidayTable::for_year(2025).unwrap();
    assert_eq!(table.resolve("12-25"), Some("Christmas Day"));
    assert_eq!(table.resolve("07-29"), Some("my Birthday!"));
    assert_eq!(table.resolve("01-01"), Some("Feast of the Circumcision of Christ (New Year's Day)"));
}

#[test]
fn unknown_or_invalid_key_is_not_a_holiday() {
    let table = HolidayTable::for_year(2025).unwrap();
    assert_eq!(table.resolve("03-03"), None);
    assert_eq!(table.resolve("13-01"), None);
    assert_eq!(table.resolve("garbage"), None);
}

#[test]
fn easter_is_merged_for_the_table_year() {
    let table = HolidayTable::for_year(2026).unwrap();
    assert_eq!(table.resolve("04-05"), Some(EASTER_SUNDAY));
    assert_eq!(table.get(MonthDay::new(4, 5).unwrap()).unwrap().kind, HolidayKind::Movable);
    // Easter 2025 was April 20; it is not a holiday in the 2026 table.
    assert_eq!(table.resolve("04-20"), None);
    assert_eq!(table.len(), FIXED_HOLIDAYS.len() + 1);
}

#[test]
fn computed_easter_overrides_colliding_fixed_entry() {
    // Easter 2000 fell on Saint George's Day.
    let table = HolidayTable::for_year(2000).unwrap();
    assert_eq!(table.resolve("04-23"), Some(EASTER_SUNDAY));
    assert_eq!(table.len(), FIXED_HOLIDAYS.len());

    // Easter 2035 falls on the Annunciation, Easter 2038 on Saint Mark's Day.
    assert_eq!(HolidayTable::for_year(2035).unwrap().resolve("03-25"), Some(EASTER_SUNDAY));
    assert_eq!(HolidayTable::for_year(2038).unwrap().resolve("04-25"), Some(EASTER_SUNDAY));

    // Without a collision the fixed entry stays.
    assert_eq!(HolidayTable::for_year(2001).unwrap().resolve("04-23"), Some("Saint George's Day"));
}

#[test]
fn merge_is_last_write_wins() {
    let table = HolidayTable::merge(
        2030,
        &[("05-01", "Labour Day"), ("05-02", "Other")],
        &[(MonthDay::new(5, 1).unwrap(), "Movable Feast")],
    )
    .unwrap();
    assert_eq!(table.resolve("05-01"), Some("Movable Feast"));
    assert_eq!(table.resolve("05-02"), Some("Other"));
    assert_eq!(table.len(), 2);
}

#[test]
fn merge_rejects_malformed_fixed_key() {
    let err = HolidayTable::merge(2030, &[("5-1", "Bad")], &[]).unwrap_err();
    assert_eq!(err, PresenceError::InvalidMonthDay("5-1".to_string()));
}

#[test]
fn fixed_table_keys_are_unique_and_valid() {
    let table = HolidayTable::merge(2030, FIXED_HOLIDAYS, &[]).unwrap();
    assert_eq!(table.len(), FIXED_HOLIDAYS.len());
}

#[test]
fn iterates_in_calendar_order() {
    let table = HolidayTable::for_year(2024).unwrap();
    let dates: Vec<MonthDay> = table.iter().map(|h| h.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(table.iter().next().unwrap().date.to_string(), "01-01");
}

#[test]
fn builds_table_for_years_past_chrono_range() {
    let table = HolidayTable::for_year(2_000_000_000).unwrap();
    assert_eq!(table.year(), 2_000_000_000);
    assert_eq!(table.resolve("12-25"), Some("Christmas Day"));
    assert!(table.iter().any(|h| h.name == EASTER_SUNDAY));
}

#[test]
fn rejects_years_before_the_gregorian_calendar() {
    assert_eq!(HolidayTable::for_year(1582).unwrap_err(), PresenceError::InvalidYear(1582));
}
