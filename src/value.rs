//! Date inputs accepted by a render call.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::ArgumentError;
use crate::options::Zone;

/// A value that can be rendered as a date.
///
/// Every accepted shape is normalized into a `DateTime<FixedOffset>` before
/// any directive is resolved. `Bool` exists only so that callers passing
/// through loosely typed data get the argument error instead of a silent
/// conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue<'a> {
    /// The current system time
    Now,
    /// A date-time with a known offset, rendered in that offset
    DateTime(DateTime<FixedOffset>),
    /// A wall-clock date-time, interpreted in the configured zone
    Naive(NaiveDateTime),
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
    /// A number of milliseconds since the Unix epoch; must be integral
    Number(f64),
    /// An ISO-8601 date or date-time string
    Text(&'a str),
    /// A boolean, never a valid date
    Bool(bool),
}

impl<'a> From<()> for DateValue<'a> {
    fn from(_: ()) -> Self {
        DateValue::Now
    }
}

impl<'a, Tz: TimeZone> From<DateTime<Tz>> for DateValue<'a> {
    fn from(dt: DateTime<Tz>) -> Self {
        DateValue::DateTime(dt.fixed_offset())
    }
}

impl<'a> From<NaiveDateTime> for DateValue<'a> {
    fn from(dt: NaiveDateTime) -> Self {
        DateValue::Naive(dt)
    }
}

impl<'a> From<NaiveDate> for DateValue<'a> {
    fn from(d: NaiveDate) -> Self {
        DateValue::Naive(d.and_time(NaiveTime::MIN))
    }
}

impl<'a> From<i64> for DateValue<'a> {
    fn from(millis: i64) -> Self {
        DateValue::Timestamp(millis)
    }
}

impl<'a> From<f64> for DateValue<'a> {
    fn from(n: f64) -> Self {
        DateValue::Number(n)
    }
}

impl<'a> From<&'a str> for DateValue<'a> {
    fn from(s: &'a str) -> Self {
        DateValue::Text(s)
    }
}

impl<'a> From<&'a String> for DateValue<'a> {
    fn from(s: &'a String) -> Self {
        DateValue::Text(s.as_str())
    }
}

impl<'a> From<bool> for DateValue<'a> {
    fn from(b: bool) -> Self {
        DateValue::Bool(b)
    }
}

impl<'a, T: Into<DateValue<'a>>> From<Option<T>> for DateValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateValue::Now, Into::into)
    }
}

/// Layouts with an offset but without seconds. A trailing `Z` is rewritten
/// to `+00:00` before these are tried.
const OFFSET_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

/// Wall-clock layouts accepted after the offset-bearing ones fail.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl<'a> DateValue<'a> {
    /// Converts the value into the instant it denotes, shown in `zone`
    /// unless it carries its own offset.
    pub fn normalize(&self, zone: Zone) -> Result<DateTime<FixedOffset>, ArgumentError> {
        match self {
            DateValue::Now => Ok(zone.convert(Utc::now())),
            DateValue::DateTime(dt) => Ok(*dt),
            DateValue::Naive(naive) => zone
                .localize(naive)
                .ok_or_else(|| ArgumentError::InvalidLocalTime {
                    input: naive.to_string(),
                }),
            DateValue::Timestamp(millis) => from_millis(*millis, zone),
            DateValue::Number(n) => {
                if !n.is_finite() || n.fract() != 0.0 || n.abs() > i64::MAX as f64 {
                    return Err(ArgumentError::Date);
                }
                from_millis(*n as i64, zone)
            }
            DateValue::Text(s) => parse_iso(s, zone),
            DateValue::Bool(_) => Err(ArgumentError::Date),
        }
    }
}

fn from_millis(millis: i64, zone: Zone) -> Result<DateTime<FixedOffset>, ArgumentError> {
    DateTime::from_timestamp_millis(millis)
        .map(|instant| zone.convert(instant))
        .ok_or(ArgumentError::Date)
}

/// Parses an ISO-8601 string.
///
/// Strings with an offset keep it. Date-times without one are wall-clock
/// times in `zone`. A bare date or year-month is midnight UTC on that day
/// (the first of the month), shown in `zone`.
fn parse_iso(input: &str, zone: Zone) -> Result<DateTime<FixedOffset>, ArgumentError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let zulu = s
        .strip_suffix(|c: char| c.eq_ignore_ascii_case(&'z'))
        .map(|head| format!("{head}+00:00"));
    let with_offset = zulu.as_deref().unwrap_or(s);
    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(with_offset, layout) {
            return Ok(dt);
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return zone
                .localize(&naive)
                .ok_or_else(|| ArgumentError::InvalidLocalTime {
                    input: input.to_string(),
                });
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"));
    if let Ok(date) = date {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        return Ok(zone.convert(midnight));
    }

    Err(ArgumentError::InvalidIsoDate {
        input: input.to_string(),
    })
}
