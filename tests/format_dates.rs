//! Directive rendering with the default English locale.

use chrono::{DateTime, FixedOffset, TimeZone, Timelike};
use datefmt::DateFormatter;

fn date(
    (year, month, day): (i32, u32, u32),
    (hour, minute, second, millis): (u32, u32, u32, u32),
    offset_minutes_east: i32,
) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_minutes_east * 60)
        .unwrap()
        .with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
        .with_nanosecond(millis * 1_000_000)
        .unwrap()
}

fn check_all(d: DateTime<FixedOffset>, cases: &[(&str, &str)]) {
    let formatter = DateFormatter::new();
    for (pattern, expected) in cases {
        assert_eq!(
            formatter.render(pattern, d).unwrap(),
            *expected,
            "pattern {:?}",
            pattern
        );
    }
}

#[test]
fn test_evening_west_of_utc() {
    let d = date((2024, 3, 20), (22, 52, 42, 7), -7 * 60);
    check_all(
        d,
        &[
            ("YYYY", "2024"),
            ("YY", "24"),
            ("MMMM", "March"),
            ("MMM", "Mar"),
            ("MM", "03"),
            ("M", "3"),
            ("DDD", "Wednesday"),
            ("DD", "Wed"),
            ("D", "We"),
            ("dd", "20"),
            ("d", "20"),
            ("HH", "22"),
            ("H", "22"),
            ("hh", "10"),
            ("h", "10"),
            ("mm", "52"),
            ("m", "52"),
            ("ss", "42"),
            ("s", "42"),
            ("ff", "007"),
            ("f", "7"),
            ("A", "PM"),
            ("a", "pm"),
            ("ZZ", "-0700"),
            ("Z", "-07:00"),
        ],
    );
}

#[test]
fn test_early_morning_east_of_utc() {
    let d = date((2024, 7, 4), (3, 5, 9, 0), 5 * 60 + 30);
    check_all(
        d,
        &[
            ("MMMM", "July"),
            ("MM", "07"),
            ("M", "7"),
            ("DDD", "Thursday"),
            ("DD", "Thu"),
            ("D", "Th"),
            ("dd", "04"),
            ("d", "4"),
            ("HH", "03"),
            ("H", "3"),
            ("hh", "03"),
            ("h", "3"),
            ("mm", "05"),
            ("m", "5"),
            ("ss", "09"),
            ("s", "9"),
            ("ff", "000"),
            ("f", "0"),
            ("A", "AM"),
            ("a", "am"),
            ("ZZ", "+0530"),
            ("Z", "+05:30"),
        ],
    );
}

#[test]
fn test_midnight_and_noon_on_twelve_hour_clock() {
    check_all(
        date((2024, 1, 1), (0, 0, 0, 0), 0),
        &[("hh", "12"), ("h", "12"), ("A", "AM")],
    );
    check_all(
        date((2024, 1, 1), (12, 0, 0, 0), 0),
        &[("hh", "12"), ("h", "12"), ("A", "PM")],
    );
}

#[test]
fn test_short_years() {
    check_all(date((2005, 6, 1), (0, 0, 0, 0), 0), &[("YY", "05"), ("YYYY", "2005")]);
    check_all(date((5, 6, 1), (0, 0, 0, 0), 0), &[("YY", "05"), ("YYYY", "5")]);
}

#[test]
fn test_long_date_scenario() {
    let d = date((2024, 3, 20), (22, 52, 42, 0), 0);
    check_all(d, &[("DDD - dd.MM.YYYY", "Wednesday - 20.03.2024")]);
}

#[test]
fn test_escape_keeps_text() {
    let d = date((2024, 3, 20), (22, 52, 42, 0), 0);
    check_all(
        d,
        &[
            ("[YYYY]", "YYYY"),
            ("[Today is] DDD", "Today is Wednesday"),
            ("[[]YYYY", "[2024"),
        ],
    );
}

#[test]
fn test_iso_presets() {
    let d = date((2024, 3, 20), (22, 52, 42, 0), -7 * 60);
    check_all(
        d,
        &[
            ("ISODate", "2024-03-20"),
            ("ISOTime", "22:52:42"),
            ("ISODateTime", "2024-03-20T22:52:42"),
            ("ISODateTimeTZ", "2024-03-20T22:52:42-07:00"),
        ],
    );
}

#[test]
fn test_repeated_renders_agree() {
    let formatter = DateFormatter::new();
    let d = date((2024, 11, 23), (6, 20, 0, 0), 60);
    let first = formatter.render("DDD dd MMMM YYYY HH:mm ZZ", d).unwrap();
    for _ in 0..3 {
        assert_eq!(
            formatter.render("DDD dd MMMM YYYY HH:mm ZZ", d).unwrap(),
            first
        );
    }
    assert_eq!(first, "Saturday 23 November 2024 06:20 +0100");
}
