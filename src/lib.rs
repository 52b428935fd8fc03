//! datefmt - pattern-driven date rendering
//!
//! This crate renders a point in time through a pattern such as
//! `"DDD - dd.MM.YYYY"`, using month and weekday names from a pluggable
//! locale and named formats registered at runtime.
//!
//! The free functions operate on one process-wide [`DateFormatter`]. Create
//! your own instance for isolated locales and aliases.

pub mod aliases;
pub mod ast;
pub mod builtin_formats;
pub mod engine;
pub mod error;
pub mod locale;
pub mod options;
pub mod parser;
pub mod value;

mod cache;
mod formatter;

use std::sync::OnceLock;

pub use aliases::FormatRegistry;
pub use ast::{CompiledFormat, Segment};
pub use builtin_formats::{builtin_pattern, BUILTIN_FORMATS};
pub use engine::DateFormatter;
pub use error::{ArgumentError, RenderError, ResolutionError};
pub use locale::{
    ActiveLocale, Locale, LocaleRegistry, LocaleSelection, Meridiem, NameContext, Vocabulary,
};
pub use options::{FormatOptions, Zone};
pub use parser::tokens::Directive;
pub use value::DateValue;

/// The process-wide instance (initialized lazily)
static GLOBAL: OnceLock<DateFormatter> = OnceLock::new();

/// The process-wide renderer used by the free functions.
pub fn global() -> &'static DateFormatter {
    GLOBAL.get_or_init(DateFormatter::new)
}

/// Render `date` with `format` using the process-wide renderer.
///
/// ```
/// let out = datefmt::render("[year] YYYY", "2024-03-20T22:52:42Z").unwrap();
/// assert!(out.starts_with("year 20"));
/// ```
pub fn render<'a>(format: &str, date: impl Into<DateValue<'a>>) -> Result<String, RenderError> {
    global().render(format, date)
}

/// Render the current time with `format` using the process-wide renderer.
pub fn render_now(format: &str) -> Result<String, RenderError> {
    global().render_now(format)
}

/// Gets or sets the process-wide active language code.
pub fn select_locale(code: Option<&str>) -> LocaleSelection {
    global().select_locale(code)
}

/// Registers a locale with the process-wide renderer.
pub fn register_locale(code: impl Into<String>, locale: Locale) {
    global().register_locale(code, locale)
}

/// Registers a named format with the process-wide renderer.
pub fn register_format(alias: impl Into<String>, pattern: impl Into<String>) -> Vec<String> {
    global().register_format(alias, pattern)
}

/// Alias names known to the process-wide renderer.
pub fn list_formats() -> Vec<String> {
    global().list_formats()
}

/// Returns the process-wide renderer itself.
///
/// Rust exposes no global binding that could clash with another library, so
/// there is nothing to release; callers get the same instance the free
/// functions use.
pub fn detach_global() -> &'static DateFormatter {
    global()
}
