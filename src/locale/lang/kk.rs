//! Kazakh.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Kazakh. No meridiem.
    pub fn kk() -> Self {
        Locale::new(
            Vocabulary::plain([
                "қаңтар",
                "ақпан",
                "наурыз",
                "сәуір",
                "мамыр",
                "маусым",
                "шілде",
                "тамыз",
                "қыркүйек",
                "қазан",
                "қараша",
                "желтоқсан",
            ]),
            Vocabulary::plain([
                "қаң", "ақп", "нау", "сәу", "мам", "мау", "шіл", "там", "қыр", "қаз", "қар", "жел",
            ]),
            Vocabulary::plain([
                "жексенбі",
                "дүйсенбі",
                "сейсенбі",
                "сәрсенбі",
                "бейсенбі",
                "жұма",
                "сенбі",
            ]),
            Vocabulary::plain(["жс", "дс", "сс", "ср", "бс", "жм", "сб"]),
            Vocabulary::plain(["жс", "дс", "сс", "ср", "бс", "жм", "сб"]),
        )
    }
}
