//! Formatting options and configuration.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

/// The time zone applied to inputs that carry no offset of their own.
///
/// Epoch timestamps, naive date-times, ISO strings without an offset and
/// "now" are all shown in this zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host's local time zone
    #[default]
    Local,
    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

impl Zone {
    /// UTC as a fixed zone.
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Converts an instant into this zone.
    pub fn convert(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Local => instant.with_timezone(&Local).fixed_offset(),
            Zone::Fixed(offset) => instant.with_timezone(offset),
        }
    }

    /// Interprets a wall-clock time in this zone.
    ///
    /// Returns `None` for a local time skipped by a DST transition. An
    /// ambiguous local time resolves to its earlier instant.
    pub fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            Zone::Fixed(offset) => offset.from_local_datetime(naive).single(),
        }
    }
}

/// Options for rendering dates.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Zone used for zoneless inputs.
    pub zone: Zone,
}

impl FormatOptions {
    /// Options rendering zoneless inputs in the given zone.
    pub fn with_zone(zone: Zone) -> Self {
        FormatOptions { zone }
    }
}
