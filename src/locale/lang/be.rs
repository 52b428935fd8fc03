//! Belarusian.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Belarusian. Month names take the genitive after a day number.
    pub fn be() -> Self {
        Locale::new(
            Vocabulary::inflected(
                [
                    "студзень", "люты", "сакавік", "красавік", "травень", "чэрвень", "ліпень",
                    "жнівень", "верасень", "кастрычнік", "лістапад", "снежань",
                ],
                [
                    "студзеня", "лютага", "сакавіка", "красавіка", "траўня", "чэрвеня",
                    "ліпеня", "жніўня", "верасня", "кастрычніка", "лістапада", "снежня",
                ],
            ),
            Vocabulary::plain([
                "сту", "лют", "сак", "кра", "тра", "чэр", "ліп", "жні", "вер", "кас", "ліс", "сне",
            ]),
            Vocabulary::plain([
                "нядзеля",
                "панядзелак",
                "аўторак",
                "серада",
                "чацвер",
                "пятніца",
                "субота",
            ]),
            Vocabulary::plain(["ндз", "пн", "аўт", "ср", "чц", "пт", "сб"]),
            Vocabulary::plain(["ндз", "пн", "аўт", "ср", "чц", "пт", "сб"]),
        )
        .with_meridiem(|hour, _| {
            match hour {
                0..=3 => "ночы",
                4..=11 => "раніцы",
                12..=16 => "дня",
                _ => "вечара",
            }
            .to_string()
        })
    }
}
