//! Russian.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Russian. Full and short month names take the genitive after a day
    /// number.
    pub fn ru() -> Self {
        Locale::new(
            Vocabulary::inflected(
                [
                    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август",
                    "сентябрь", "октябрь", "ноябрь", "декабрь",
                ],
                [
                    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа",
                    "сентября", "октября", "ноября", "декабря",
                ],
            ),
            Vocabulary::inflected(
                [
                    "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя",
                    "дек",
                ],
                [
                    "янв", "февр", "мар", "апр", "мая", "июн", "июл", "авг", "сент", "окт",
                    "нояб", "дек",
                ],
            ),
            Vocabulary::plain([
                "воскресенье",
                "понедельник",
                "вторник",
                "среда",
                "четверг",
                "пятница",
                "суббота",
            ]),
            Vocabulary::plain(["вс", "пн", "вт", "ср", "чт", "пт", "сб"]),
            Vocabulary::plain(["вс", "пн", "вт", "ср", "чт", "пт", "сб"]),
        )
        .with_meridiem(|hour, _| {
            match hour {
                0..=3 => "ночи",
                4..=11 => "утра",
                12..=16 => "дня",
                _ => "вечера",
            }
            .to_string()
        })
    }
}
