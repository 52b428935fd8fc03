//! Directive resolution

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::error::ResolutionError;
use crate::locale::{ActiveLocale, NameContext};
use crate::parser::tokens::Directive;

/// Resolve a single directive against a date and the active locale.
pub fn format_directive(
    directive: Directive,
    date: &DateTime<FixedOffset>,
    active: &ActiveLocale,
    ctx: NameContext,
) -> Result<String, ResolutionError> {
    let locale = &active.locale;
    let month_index = date.month0() as usize;
    // Sunday = 0, the order of locale weekday lists
    let weekday_index = date.weekday().num_days_from_sunday() as usize;

    let formatted = match directive {
        // Year formatting
        Directive::Year4 => date.year().to_string(),
        Directive::Year2 => format!("{:02}", date.year().rem_euclid(100)),

        // Month formatting
        Directive::MonthFull => locale.months.name(month_index, ctx),
        Directive::MonthAbbr => locale.months_short.name(month_index, ctx),
        Directive::Month2 => format!("{:02}", date.month()),
        Directive::Month => date.month().to_string(),

        // Weekday formatting
        Directive::WeekdayFull => locale.weekdays.name(weekday_index, ctx),
        Directive::WeekdayAbbr => locale.weekdays_short.name(weekday_index, ctx),
        Directive::WeekdayMin => locale.weekdays_min.name(weekday_index, ctx),

        // Day formatting
        Directive::Day2 => format!("{:02}", date.day()),
        Directive::Day => date.day().to_string(),

        // Hour formatting
        Directive::Hour2 => format!("{:02}", date.hour()),
        Directive::Hour => date.hour().to_string(),
        Directive::Hour12x2 => format!("{:02}", to_12_hour(date.hour())),
        Directive::Hour12 => to_12_hour(date.hour()).to_string(),

        // Minute and second formatting
        Directive::Minute2 => format!("{:02}", date.minute()),
        Directive::Minute => date.minute().to_string(),
        Directive::Second2 => format!("{:02}", date.second()),
        Directive::Second => date.second().to_string(),

        // Sub-second formatting
        Directive::Millis3 => format!("{:03}", millis(date)),
        Directive::Millis => millis(date).to_string(),

        Directive::MeridiemUpper => format_meridiem(active, date.hour(), false)?,
        Directive::MeridiemLower => format_meridiem(active, date.hour(), true)?,

        Directive::OffsetBasic => format_offset(date.offset(), false),
        Directive::OffsetExtended => format_offset(date.offset(), true),
    };

    Ok(formatted)
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

/// Milliseconds within the second. A leap second's extra nanoseconds wrap.
fn millis(date: &DateTime<FixedOffset>) -> u32 {
    date.nanosecond() / 1_000_000 % 1000
}

fn format_meridiem(
    active: &ActiveLocale,
    hour: u32,
    lowercase: bool,
) -> Result<String, ResolutionError> {
    let meridiem =
        active
            .locale
            .meridiem
            .as_ref()
            .ok_or_else(|| ResolutionError::MissingMeridiem {
                locale: active.code.clone(),
            })?;
    Ok(meridiem.label(hour, lowercase))
}

/// Format a UTC offset as `±HHMM` or, extended, `±HH:MM`.
///
/// The sign follows the stored "minutes behind UTC" convention: a zone
/// west of UTC stores a positive value and is written with `-`.
fn format_offset(offset: &FixedOffset, extended: bool) -> String {
    let minutes_behind = -offset.local_minus_utc() / 60;
    let sign = if minutes_behind > 0 { '-' } else { '+' };
    let total = minutes_behind.unsigned_abs();
    let (hours, minutes) = (total / 60, total % 60);

    if extended {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}{:02}", sign, hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), 12);
        assert_eq!(to_12_hour(1), 1);
        assert_eq!(to_12_hour(11), 11);
        assert_eq!(to_12_hour(12), 12);
        assert_eq!(to_12_hour(13), 1);
        assert_eq!(to_12_hour(23), 11);
    }

    #[test]
    fn test_format_offset() {
        let west = FixedOffset::west_opt(7 * 3600).unwrap();
        assert_eq!(format_offset(&west, false), "-0700");
        assert_eq!(format_offset(&west, true), "-07:00");

        let india = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(format_offset(&india, false), "+0530");
        assert_eq!(format_offset(&india, true), "+05:30");

        let newfoundland = FixedOffset::west_opt(3 * 3600 + 30 * 60).unwrap();
        assert_eq!(format_offset(&newfoundland, true), "-03:30");

        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_offset(&utc, true), "+00:00");
    }
}
