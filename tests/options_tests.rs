use chrono::{FixedOffset, Local, NaiveDate, TimeZone, Utc};
use datefmt::{DateFormatter, DateValue, FormatOptions, Zone};

#[test]
fn test_default_zone_is_local() {
    assert_eq!(FormatOptions::default().zone, Zone::Local);
    assert_eq!(DateFormatter::new().options().zone, Zone::Local);
}

#[test]
fn test_timestamp_shown_in_fixed_zone() {
    let tokyo = Zone::Fixed(FixedOffset::east_opt(9 * 3600).unwrap());
    let formatter = DateFormatter::with_options(FormatOptions::with_zone(tokyo));
    assert_eq!(
        formatter.render("YYYY-MM-dd HH:mm Z", 0_i64).unwrap(),
        "1970-01-01 09:00 +09:00"
    );
}

#[test]
fn test_timestamp_in_local_zone_matches_chrono() {
    let formatter = DateFormatter::new();
    let millis = 1_710_975_162_000_i64;
    let expected = Utc
        .timestamp_millis_opt(millis)
        .unwrap()
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();
    assert_eq!(formatter.render("YYYY-MM-dd HH:mm", millis).unwrap(), expected);
}

#[test]
fn test_offset_carrying_inputs_ignore_zone() {
    let formatter = DateFormatter::with_options(FormatOptions::with_zone(Zone::utc()));
    let date = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 9, 30, 0)
        .unwrap();
    assert_eq!(formatter.render("HH:mm ZZ", date).unwrap(), "09:30 -0500");
    assert_eq!(
        formatter
            .render("HH:mm ZZ", "2024-01-01T09:30:00-05:00")
            .unwrap(),
        "09:30 -0500"
    );
}

#[test]
fn test_naive_inputs_use_zone() {
    let berlin_winter = Zone::Fixed(FixedOffset::east_opt(3600).unwrap());
    let formatter = DateFormatter::with_options(FormatOptions::with_zone(berlin_winter));
    let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    assert_eq!(formatter.render("HH:mm Z", naive).unwrap(), "09:30 +01:00");
    assert_eq!(
        formatter.render("HH:mm Z", "2024-01-01 09:30").unwrap(),
        "09:30 +01:00"
    );
}

#[test]
fn test_zone_convert_and_localize() {
    let zone = Zone::Fixed(FixedOffset::west_opt(3 * 3600).unwrap());
    let instant = Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();
    assert_eq!(zone.convert(instant).to_rfc3339(), "2023-12-31T23:00:00-03:00");

    let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(2, 0, 0)
        .unwrap();
    let localized = zone.localize(&naive).unwrap();
    assert_eq!(localized.to_rfc3339(), "2024-01-01T02:00:00-03:00");
}

#[test]
fn test_none_means_now() {
    let formatter = DateFormatter::with_options(FormatOptions::with_zone(Zone::utc()));
    let before = Utc::now().format("%Y").to_string();
    let rendered = formatter.render("YYYY", None::<i64>).unwrap();
    let after = Utc::now().format("%Y").to_string();
    assert!(rendered == before || rendered == after);
    assert_eq!(DateValue::from(None::<&str>), DateValue::Now);
}

#[test]
fn test_iso_strings_without_seconds() {
    let formatter = DateFormatter::with_options(FormatOptions::with_zone(Zone::utc()));
    let cases = [
        ("2024-03-20T22:52Z", "2024-03-20 22:52:00 +00:00"),
        ("2024-03-20T22:52+02:00", "2024-03-20 22:52:00 +02:00"),
        ("2024-03-20T22:52-0700", "2024-03-20 22:52:00 -07:00"),
        ("2024-03-20 22:52+05:30", "2024-03-20 22:52:00 +05:30"),
        ("2024-03-20T22:52", "2024-03-20 22:52:00 +00:00"),
        ("2024-03", "2024-03-01 00:00:00 +00:00"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            formatter.render("YYYY-MM-dd HH:mm:ss Z", input).unwrap(),
            expected,
            "input {:?}",
            input
        );
    }
}
