//! Polish.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Polish. Month names take the genitive after a day number; the
    /// meridiem labels only the morning.
    pub fn pl() -> Self {
        Locale::new(
            Vocabulary::inflected(
                [
                    "styczeń",
                    "luty",
                    "marzec",
                    "kwiecień",
                    "maj",
                    "czerwiec",
                    "lipiec",
                    "sierpień",
                    "wrzesień",
                    "październik",
                    "listopad",
                    "grudzień",
                ],
                [
                    "stycznia",
                    "lutego",
                    "marca",
                    "kwietnia",
                    "maja",
                    "czerwca",
                    "lipca",
                    "sierpnia",
                    "września",
                    "października",
                    "listopada",
                    "grudnia",
                ],
            ),
            Vocabulary::plain([
                "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
            ]),
            Vocabulary::plain([
                "niedziela",
                "poniedziałek",
                "wtorek",
                "środa",
                "czwartek",
                "piątek",
                "sobota",
            ]),
            Vocabulary::plain(["nie", "pon", "wt", "śr", "czw", "pt", "sb"]),
            Vocabulary::plain(["N", "Pn", "Wt", "Śr", "Cz", "Pt", "So"]),
        )
        .with_meridiem(|hour, _| if hour < 12 { "rano" } else { "" }.to_string())
    }
}
