//! Compiled pattern types.

use crate::parser::tokens::Directive;

/// A single run of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text emitted as-is (unmatched characters and `[...]` content)
    Literal(String),
    /// A directive resolved against the date and locale
    Directive(Directive),
}

impl Segment {
    /// Returns true if this literal consists only of whitespace.
    pub fn is_blank_literal(&self) -> bool {
        match self {
            Segment::Literal(s) => s.chars().all(char::is_whitespace),
            Segment::Directive(_) => false,
        }
    }
}

/// A compiled pattern.
///
/// This is the main type returned by compilation. It can be reused to
/// render many dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    pattern: String,
    segments: Vec<Segment>,
}

impl CompiledFormat {
    /// Create a CompiledFormat from its source pattern and segments.
    pub fn from_segments(pattern: impl Into<String>, segments: Vec<Segment>) -> Self {
        CompiledFormat {
            pattern: pattern.into(),
            segments,
        }
    }

    /// The raw pattern this was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the segments of this format.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the directives of this format, in order.
    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Directive(d) => Some(*d),
            Segment::Literal(_) => None,
        })
    }

    /// Returns true if this format contains any meridiem directive.
    pub fn has_meridiem(&self) -> bool {
        self.directives()
            .any(|d| matches!(d, Directive::MeridiemUpper | Directive::MeridiemLower))
    }

    /// Compile a pattern string into a CompiledFormat, bypassing the cache.
    pub fn compile(pattern: &str) -> CompiledFormat {
        crate::parser::compile(pattern)
    }
}
