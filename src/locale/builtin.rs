//! Built-in English locale data.

use super::{Locale, Vocabulary};

impl Locale {
    /// English. Always registered under `en`.
    pub fn en() -> Self {
        Locale::new(
            Vocabulary::plain([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            Vocabulary::plain([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            Vocabulary::plain([
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            Vocabulary::plain(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            Vocabulary::plain(["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]),
        )
        .with_meridiem(|hour, lowercase| {
            let label = if hour < 12 { "AM" } else { "PM" };
            if lowercase {
                label.to_lowercase()
            } else {
                label.to_string()
            }
        })
    }
}
