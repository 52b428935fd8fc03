//! Locale vocabularies and the registry of known locales.
//!
//! A [`Locale`] supplies the words a pattern can ask for: month and weekday
//! names and, optionally, meridiem labels. The [`LocaleRegistry`] maps
//! language codes to locales and tracks which one is active.

mod builtin;
#[cfg(feature = "locales")]
mod lang;

#[cfg(feature = "locales")]
pub use lang::builtin_locales;

use std::fmt;
use std::sync::Arc;

/// Context passed to vocabulary lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameContext {
    /// Day of the month being rendered (1-31)
    pub day_of_month: u32,
    /// True when the name directly follows a day-of-month directive,
    /// separated from it by whitespace only (`dd MMMM`)
    pub after_day: bool,
}

type NameFn = dyn Fn(usize, NameContext) -> String + Send + Sync;
type MeridiemFn = dyn Fn(u32, bool) -> String + Send + Sync;

/// An ordered list of `N` names, or a rule deriving them.
///
/// Months use `N = 12` (January first), weekdays `N = 7` (Sunday first).
#[derive(Clone)]
pub enum Vocabulary<const N: usize> {
    /// One fixed name per index
    Plain([String; N]),
    /// Standalone names, plus the grammatical form used after a day number
    Inflected {
        standalone: [String; N],
        after_day: [String; N],
    },
    /// Names computed from the index and rendering context
    Derived(Arc<NameFn>),
}

impl<const N: usize> Vocabulary<N> {
    pub fn plain(names: [&str; N]) -> Self {
        Vocabulary::Plain(names.map(String::from))
    }

    pub fn inflected(standalone: [&str; N], after_day: [&str; N]) -> Self {
        Vocabulary::Inflected {
            standalone: standalone.map(String::from),
            after_day: after_day.map(String::from),
        }
    }

    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(usize, NameContext) -> String + Send + Sync + 'static,
    {
        Vocabulary::Derived(Arc::new(f))
    }

    /// Returns the name at `index` in the given context.
    ///
    /// An out-of-range index yields an empty string.
    pub fn name(&self, index: usize, ctx: NameContext) -> String {
        let names = match self {
            Vocabulary::Plain(names) => names,
            Vocabulary::Inflected {
                standalone,
                after_day,
            } => {
                if ctx.after_day {
                    after_day
                } else {
                    standalone
                }
            }
            Vocabulary::Derived(f) => return f(index, ctx),
        };
        names.get(index).cloned().unwrap_or_default()
    }
}

impl<const N: usize> fmt::Debug for Vocabulary<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vocabulary::Plain(names) => f.debug_tuple("Plain").field(names).finish(),
            Vocabulary::Inflected {
                standalone,
                after_day,
            } => f
                .debug_struct("Inflected")
                .field("standalone", standalone)
                .field("after_day", after_day)
                .finish(),
            Vocabulary::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// A meridiem rule: `(hour 0..=23, lowercase) -> label`.
#[derive(Clone)]
pub struct Meridiem(Arc<MeridiemFn>);

impl Meridiem {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(u32, bool) -> String + Send + Sync + 'static,
    {
        Meridiem(Arc::new(f))
    }

    /// Returns the label for `hour` (0-23).
    pub fn label(&self, hour: u32, lowercase: bool) -> String {
        (self.0)(hour, lowercase)
    }
}

impl fmt::Debug for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Meridiem(..)")
    }
}

/// Locale vocabulary for rendering.
///
/// Name lists are required. The meridiem is optional: a locale without one
/// is valid, but cannot render `A` or `a`.
#[derive(Debug, Clone)]
pub struct Locale {
    pub months: Vocabulary<12>,
    pub months_short: Vocabulary<12>,
    pub weekdays: Vocabulary<7>,
    pub weekdays_short: Vocabulary<7>,
    pub weekdays_min: Vocabulary<7>,
    pub meridiem: Option<Meridiem>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

impl Locale {
    /// Creates a locale without a meridiem.
    pub fn new(
        months: Vocabulary<12>,
        months_short: Vocabulary<12>,
        weekdays: Vocabulary<7>,
        weekdays_short: Vocabulary<7>,
        weekdays_min: Vocabulary<7>,
    ) -> Self {
        Locale {
            months,
            months_short,
            weekdays,
            weekdays_short,
            weekdays_min,
            meridiem: None,
        }
    }

    pub fn with_meridiem<F>(mut self, f: F) -> Self
    where
        F: Fn(u32, bool) -> String + Send + Sync + 'static,
    {
        self.meridiem = Some(Meridiem::new(f));
        self
    }

    pub fn without_meridiem(mut self) -> Self {
        self.meridiem = None;
        self
    }
}

/// Outcome of a locale selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSelection {
    /// No code was given; this is the active code
    Current(String),
    /// The code was known and is now active
    Selected(String),
    /// The code was unknown; the active code is unchanged
    KeptPrevious(String),
}

impl LocaleSelection {
    /// The active code after the selection.
    pub fn code(&self) -> &str {
        match self {
            LocaleSelection::Current(code)
            | LocaleSelection::Selected(code)
            | LocaleSelection::KeptPrevious(code) => code,
        }
    }
}

/// The active locale, captured for one render.
#[derive(Debug, Clone)]
pub struct ActiveLocale {
    pub code: String,
    pub locale: Arc<Locale>,
}

/// Mapping of language codes to locales, plus the active code.
///
/// Entries keep insertion order and are never removed, so the active index
/// always points at a registered locale.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<(String, Arc<Locale>)>,
    active: usize,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleRegistry {
    /// The code of the locale every registry starts with.
    pub const DEFAULT_CODE: &'static str = "en";

    /// A registry holding only `en`, which is active.
    pub fn new() -> Self {
        LocaleRegistry {
            locales: vec![(Self::DEFAULT_CODE.to_string(), Arc::new(Locale::en()))],
            active: 0,
        }
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.locales.iter().position(|(c, _)| c == code)
    }

    /// Registers a locale, replacing any locale with the same code.
    pub fn register(&mut self, code: impl Into<String>, locale: Locale) {
        let code = code.into();
        let locale = Arc::new(locale);
        match self.position(&code) {
            Some(index) => self.locales[index].1 = locale,
            None => self.locales.push((code, locale)),
        }
    }

    /// Gets or sets the active code.
    ///
    /// Selecting an unknown code leaves the active locale in place.
    pub fn select(&mut self, code: Option<&str>) -> LocaleSelection {
        let Some(code) = code else {
            return LocaleSelection::Current(self.active_code().to_string());
        };
        match self.position(code) {
            Some(index) => {
                self.active = index;
                LocaleSelection::Selected(code.to_string())
            }
            None => LocaleSelection::KeptPrevious(self.active_code().to_string()),
        }
    }

    pub fn active_code(&self) -> &str {
        &self.locales[self.active].0
    }

    /// Returns the active locale.
    pub fn active(&self) -> ActiveLocale {
        let (code, locale) = &self.locales[self.active];
        ActiveLocale {
            code: code.clone(),
            locale: Arc::clone(locale),
        }
    }

    pub fn get(&self, code: &str) -> Option<Arc<Locale>> {
        self.position(code).map(|i| Arc::clone(&self.locales[i].1))
    }

    /// Registered codes, in insertion order.
    pub fn codes(&self) -> Vec<String> {
        self.locales.iter().map(|(code, _)| code.clone()).collect()
    }
}
