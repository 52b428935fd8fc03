//! Ukrainian.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Ukrainian. Month names take the genitive after a day number.
    pub fn uk() -> Self {
        Locale::new(
            Vocabulary::inflected(
                [
                    "січень", "лютий", "березень", "квітень", "травень", "червень", "липень",
                    "серпень", "вересень", "жовтень", "листопад", "грудень",
                ],
                [
                    "січня", "лютого", "березня", "квітня", "травня", "червня", "липня",
                    "серпня", "вересня", "жовтня", "листопада", "грудня",
                ],
            ),
            Vocabulary::plain([
                "січ", "лют", "бер", "квіт", "трав", "черв", "лип", "серп", "вер", "жовт", "лист",
                "груд",
            ]),
            Vocabulary::plain([
                "неділя",
                "понеділок",
                "вівторок",
                "середа",
                "четвер",
                "п’ятниця",
                "субота",
            ]),
            Vocabulary::plain(["нд", "пн", "вт", "ср", "чт", "пт", "сб"]),
            Vocabulary::plain(["нд", "пн", "вт", "ср", "чт", "пт", "сб"]),
        )
        .with_meridiem(|hour, _| {
            match hour {
                0..=3 => "ночі",
                4..=11 => "ранку",
                12..=16 => "дня",
                _ => "вечора",
            }
            .to_string()
        })
    }
}
