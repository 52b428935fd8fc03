//! Tatar.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Tatar. No meridiem.
    pub fn tt() -> Self {
        Locale::new(
            Vocabulary::plain([
                "гыйнвар", "февраль", "март", "апрель", "май", "июнь", "июль", "август",
                "сентябрь", "октябрь", "ноябрь", "декабрь",
            ]),
            Vocabulary::plain([
                "гый", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
            ]),
            Vocabulary::plain([
                "якшәмбе",
                "дүшәмбе",
                "сишәмбе",
                "чәршәмбе",
                "пәнҗешәмбе",
                "җомга",
                "шимбә",
            ]),
            Vocabulary::plain(["якш", "дш", "сиш", "чәр", "пәнҗ", "җом", "шим"]),
            Vocabulary::plain(["як", "дш", "си", "чә", "пә", "җо", "ши"]),
        )
    }
}
