//! Additional locale tables, enabled by the `locales` feature.

mod be;
mod cs;
mod kk;
mod pl;
mod ru;
mod tr;
mod tt;
mod uk;

use super::Locale;

/// Every bundled locale with its language code, `en` first.
pub fn builtin_locales() -> Vec<(&'static str, Locale)> {
    vec![
        ("en", Locale::en()),
        ("be", Locale::be()),
        ("cs", Locale::cs()),
        ("kk", Locale::kk()),
        ("pl", Locale::pl()),
        ("ru", Locale::ru()),
        ("tr", Locale::tr()),
        ("tt", Locale::tt()),
        ("uk", Locale::uk()),
    ]
}
