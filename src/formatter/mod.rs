//! Rendering of compiled patterns

mod date;

pub use date::format_directive;

use chrono::{DateTime, Datelike, FixedOffset};

use crate::ast::{CompiledFormat, Segment};
use crate::error::ResolutionError;
use crate::locale::{ActiveLocale, NameContext};

impl CompiledFormat {
    /// Render a date with this format and the given locale.
    ///
    /// Fails as a whole if any directive cannot be resolved; no partial
    /// output is returned.
    pub fn render(
        &self,
        date: &DateTime<FixedOffset>,
        active: &ActiveLocale,
    ) -> Result<String, ResolutionError> {
        let mut result = String::with_capacity(self.pattern().len() * 2);

        // A name follows a day number when only whitespace separates them
        let mut just_after_day = false;
        let mut day_then_space = false;

        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => {
                    result.push_str(text);
                    day_then_space =
                        (just_after_day || day_then_space) && segment.is_blank_literal();
                    just_after_day = false;
                }
                Segment::Directive(directive) => {
                    let ctx = NameContext {
                        day_of_month: date.day(),
                        after_day: day_then_space,
                    };
                    result.push_str(&format_directive(*directive, date, active, ctx)?);
                    just_after_day = directive.is_day_of_month();
                    day_then_space = false;
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, Vocabulary};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn marker_locale() -> ActiveLocale {
        let months = Vocabulary::derived(|i, ctx| {
            if ctx.after_day {
                format!("of-{}", i + 1)
            } else {
                format!("m{}", i + 1)
            }
        });
        let months_short = Vocabulary::derived(|i, ctx| {
            if ctx.after_day {
                format!("of{}", i + 1)
            } else {
                format!("s{}", i + 1)
            }
        });
        let mut locale = Locale::en();
        locale.months = months;
        locale.months_short = months_short;
        ActiveLocale {
            code: "marker".to_string(),
            locale: Arc::new(locale),
        }
    }

    fn sample() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 20, 22, 52, 42)
            .unwrap()
    }

    #[test]
    fn test_month_after_day_and_space() {
        let fmt = CompiledFormat::compile("dd MMMM");
        assert_eq!(fmt.render(&sample(), &marker_locale()).unwrap(), "20 of-3");
    }

    #[test]
    fn test_month_standalone() {
        let fmt = CompiledFormat::compile("MMMM dd");
        assert_eq!(fmt.render(&sample(), &marker_locale()).unwrap(), "m3 20");
    }

    #[test]
    fn test_month_after_punctuation_is_standalone() {
        let fmt = CompiledFormat::compile("dd.MMMM");
        assert_eq!(fmt.render(&sample(), &marker_locale()).unwrap(), "20.m3");
    }

    #[test]
    fn test_month_directly_after_day_is_standalone() {
        let fmt = CompiledFormat::compile("ddMMMM");
        assert_eq!(fmt.render(&sample(), &marker_locale()).unwrap(), "20m3");
    }

    #[test]
    fn test_month_after_day_and_several_spaces() {
        let fmt = CompiledFormat::compile("dd   MMMM");
        assert_eq!(fmt.render(&sample(), &marker_locale()).unwrap(), "20   of-3");
    }

    #[test]
    fn test_short_month_after_day() {
        let fmt = CompiledFormat::compile("dd MMM");
        assert_eq!(fmt.render(&sample(), &marker_locale()).unwrap(), "20 of3");
        let fmt = CompiledFormat::compile("MMM dd");
        assert_eq!(fmt.render(&sample(), &marker_locale()).unwrap(), "s3 20");
    }

    #[test]
    fn test_inflection_does_not_carry_past_another_directive() {
        let fmt = CompiledFormat::compile("dd YYYY MMMM");
        assert_eq!(
            fmt.render(&sample(), &marker_locale()).unwrap(),
            "20 2024 m3"
        );
    }
}
