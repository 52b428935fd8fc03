//! The render entry point and its registries.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::aliases::FormatRegistry;
use crate::cache;
use crate::error::{ArgumentError, RenderError};
use crate::locale::{ActiveLocale, Locale, LocaleRegistry, LocaleSelection};
use crate::options::FormatOptions;
use crate::value::DateValue;

/// A date renderer with its own locales and named formats.
///
/// All methods take `&self`; registration and locale selection lock the
/// registries internally, so one instance can be shared across threads.
/// A render works on a snapshot of the active locale: a concurrent
/// selection shows up as either the old or the new locale.
#[derive(Debug, Default)]
pub struct DateFormatter {
    locales: RwLock<LocaleRegistry>,
    formats: RwLock<FormatRegistry>,
    options: FormatOptions,
}

impl DateFormatter {
    /// A renderer with `en` active, the ISO presets and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer with `en` active, the ISO presets and the given options.
    pub fn with_options(options: FormatOptions) -> Self {
        DateFormatter {
            options,
            ..Self::default()
        }
    }

    /// The options this renderer was created with.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    fn locales(&self) -> RwLockReadGuard<'_, LocaleRegistry> {
        self.locales.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn locales_mut(&self) -> RwLockWriteGuard<'_, LocaleRegistry> {
        self.locales.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn formats(&self) -> RwLockReadGuard<'_, FormatRegistry> {
        self.formats.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn formats_mut(&self) -> RwLockWriteGuard<'_, FormatRegistry> {
        self.formats.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render `date` with `format`, a pattern or a registered alias.
    ///
    /// `date` is anything convertible into a [`DateValue`]; pass `()` for
    /// the current time.
    ///
    /// # Examples
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use datefmt::DateFormatter;
    ///
    /// let formatter = DateFormatter::new();
    /// let date = FixedOffset::east_opt(0)
    ///     .unwrap()
    ///     .with_ymd_and_hms(2024, 3, 20, 22, 52, 42)
    ///     .unwrap();
    /// assert_eq!(
    ///     formatter.render("DDD - dd.MM.YYYY", date).unwrap(),
    ///     "Wednesday - 20.03.2024"
    /// );
    /// ```
    pub fn render<'a>(
        &self,
        format: &str,
        date: impl Into<DateValue<'a>>,
    ) -> Result<String, RenderError> {
        if format.is_empty() {
            return Err(ArgumentError::Format.into());
        }
        let date: DateValue<'a> = date.into();
        let date = date.normalize(self.options.zone)?;

        let compiled = {
            let formats = self.formats();
            cache::get_or_compile(formats.resolve(format))
        };
        let active = self.locales().active();

        Ok(compiled.render(&date, &active)?)
    }

    /// Render the current time with `format`.
    pub fn render_now(&self, format: &str) -> Result<String, RenderError> {
        self.render(format, DateValue::Now)
    }

    /// Gets the active language code, or switches to `code`.
    ///
    /// Switching to a code that was never registered changes nothing and
    /// reports the code that stays active.
    pub fn select_locale(&self, code: Option<&str>) -> LocaleSelection {
        let selection = self.locales_mut().select(code);
        match &selection {
            LocaleSelection::Current(_) => {}
            LocaleSelection::Selected(active) => {
                tracing::debug!(locale = %active, "selected locale");
            }
            LocaleSelection::KeptPrevious(active) => {
                tracing::debug!(
                    requested = code.unwrap_or_default(),
                    locale = %active,
                    "unknown locale, keeping the active one"
                );
            }
        }
        selection
    }

    /// The active language code.
    pub fn active_locale(&self) -> String {
        self.locales().active_code().to_string()
    }

    /// A snapshot of the active locale.
    pub fn current_locale(&self) -> ActiveLocale {
        self.locales().active()
    }

    /// Registers a locale under `code`, replacing any existing one.
    ///
    /// The locale is not checked for completeness: a missing meridiem only
    /// fails once a pattern asks for it.
    pub fn register_locale(&self, code: impl Into<String>, locale: Locale) {
        let code = code.into();
        tracing::debug!(
            locale = %code,
            meridiem = locale.meridiem.is_some(),
            "registered locale"
        );
        self.locales_mut().register(code, locale);
    }

    /// Registered language codes, in insertion order.
    pub fn locale_codes(&self) -> Vec<String> {
        self.locales().codes()
    }

    /// Registers every bundled locale. `en` stays active.
    #[cfg(feature = "locales")]
    pub fn register_builtin_locales(&self) {
        let mut locales = self.locales_mut();
        for (code, locale) in crate::locale::builtin_locales() {
            locales.register(code, locale);
        }
    }

    /// Registers a named format. Returns the alias names known afterwards.
    pub fn register_format(
        &self,
        alias: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Vec<String> {
        let alias = alias.into();
        let pattern = pattern.into();
        tracing::debug!(%alias, %pattern, "registered format");
        self.formats_mut().register(alias, pattern)
    }

    /// Registered alias names, in insertion order.
    pub fn list_formats(&self) -> Vec<String> {
        self.formats().list()
    }
}
