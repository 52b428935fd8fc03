//! Turkish.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Turkish. Month names are capitalized and do not inflect.
    pub fn tr() -> Self {
        Locale::new(
            Vocabulary::plain([
                "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül",
                "Ekim", "Kasım", "Aralık",
            ]),
            Vocabulary::plain([
                "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
            ]),
            Vocabulary::plain([
                "Pazar",
                "Pazartesi",
                "Salı",
                "Çarşamba",
                "Perşembe",
                "Cuma",
                "Cumartesi",
            ]),
            Vocabulary::plain(["Paz", "Pts", "Sal", "Çar", "Per", "Cum", "Cmt"]),
            Vocabulary::plain(["Pa", "Pt", "Sa", "Ça", "Pe", "Cu", "Cm"]),
        )
        .with_meridiem(|hour, lowercase| {
            match (hour < 12, lowercase) {
                (true, false) => "ÖÖ",
                (true, true) => "öö",
                (false, false) => "ÖS",
                (false, true) => "ös",
            }
            .to_string()
        })
    }
}
