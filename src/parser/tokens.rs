//! Token types for the pattern lexer.

/// A date/time directive recognized in a pattern.
///
/// The set is closed: anything in a pattern that is not one of these tokens
/// is literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `YYYY` - Full year
    Year4,
    /// `YY` - Year modulo 100, two digits
    Year2,
    /// `MMMM` - Full month name
    MonthFull,
    /// `MMM` - Abbreviated month name
    MonthAbbr,
    /// `MM` - Month number with leading zero (01-12)
    Month2,
    /// `M` - Month number (1-12)
    Month,
    /// `DDD` - Full weekday name
    WeekdayFull,
    /// `DD` - Abbreviated weekday name
    WeekdayAbbr,
    /// `D` - Minimal weekday name
    WeekdayMin,
    /// `dd` - Day of month with leading zero
    Day2,
    /// `d` - Day of month
    Day,
    /// `HH` - Hour, 24-hour clock, with leading zero
    Hour2,
    /// `H` - Hour, 24-hour clock
    Hour,
    /// `hh` - Hour, 12-hour clock, with leading zero
    Hour12x2,
    /// `h` - Hour, 12-hour clock
    Hour12,
    /// `mm` - Minutes with leading zero
    Minute2,
    /// `m` - Minutes
    Minute,
    /// `ss` - Seconds with leading zero
    Second2,
    /// `s` - Seconds
    Second,
    /// `ff` - Milliseconds, three digits
    Millis3,
    /// `f` - Milliseconds
    Millis,
    /// `A` - Meridiem, upper case
    MeridiemUpper,
    /// `a` - Meridiem, lower case
    MeridiemLower,
    /// `ZZ` - UTC offset, basic format (`+0200`)
    OffsetBasic,
    /// `Z` - UTC offset, extended format (`+02:00`)
    OffsetExtended,
}

/// Directive spellings, longest first so that the first hit is the
/// longest match.
pub(crate) const DIRECTIVES: [(&str, Directive); 25] = [
    ("YYYY", Directive::Year4),
    ("MMMM", Directive::MonthFull),
    ("MMM", Directive::MonthAbbr),
    ("DDD", Directive::WeekdayFull),
    ("YY", Directive::Year2),
    ("MM", Directive::Month2),
    ("DD", Directive::WeekdayAbbr),
    ("dd", Directive::Day2),
    ("HH", Directive::Hour2),
    ("hh", Directive::Hour12x2),
    ("mm", Directive::Minute2),
    ("ss", Directive::Second2),
    ("ff", Directive::Millis3),
    ("ZZ", Directive::OffsetBasic),
    ("M", Directive::Month),
    ("D", Directive::WeekdayMin),
    ("d", Directive::Day),
    ("H", Directive::Hour),
    ("h", Directive::Hour12),
    ("m", Directive::Minute),
    ("s", Directive::Second),
    ("f", Directive::Millis),
    ("A", Directive::MeridiemUpper),
    ("a", Directive::MeridiemLower),
    ("Z", Directive::OffsetExtended),
];

impl Directive {
    /// Returns the pattern spelling of this directive.
    pub fn token(&self) -> &'static str {
        DIRECTIVES
            .iter()
            .find(|(_, d)| d == self)
            .map_or("", |(token, _)| token)
    }

    /// Returns true for the day-of-month directives (`d`, `dd`).
    pub fn is_day_of_month(&self) -> bool {
        matches!(self, Directive::Day | Directive::Day2)
    }
}

/// A token in a pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A recognized directive
    Directive(Directive),
    /// A single character outside any directive
    Literal(char),
    /// The content of a `[...]` escape, brackets removed
    Escaped(&'a str),
    /// End of input
    Eof,
}

/// A token with its byte span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken<'a> {
    pub token: Token<'a>,
    pub start: usize,
    pub end: usize,
}
