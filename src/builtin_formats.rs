//! Built-in named formats and their patterns.
//!
//! Every alias registry starts with these four ISO-8601 presets.

/// The preset aliases, in registration order.
pub const BUILTIN_FORMATS: [(&str, &str); 4] = [
    ("ISODate", "YYYY-MM-dd"),
    ("ISOTime", "HH:mm:ss"),
    ("ISODateTime", "YYYY-MM-ddTHH:mm:ss"),
    ("ISODateTimeTZ", "YYYY-MM-ddTHH:mm:ssZ"),
];

/// Get the pattern of a built-in alias.
///
/// # Examples
/// ```
/// use datefmt::builtin_pattern;
///
/// assert_eq!(builtin_pattern("ISODate"), Some("YYYY-MM-dd"));
/// assert_eq!(builtin_pattern("long date"), None);
/// ```
pub fn builtin_pattern(alias: &str) -> Option<&'static str> {
    BUILTIN_FORMATS
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, pattern)| *pattern)
}
