//! Czech.

use crate::locale::{Locale, Vocabulary};

impl Locale {
    /// Czech. Month names take the genitive after a day number.
    pub fn cs() -> Self {
        Locale::new(
            Vocabulary::inflected(
                [
                    "leden", "únor", "březen", "duben", "květen", "červen", "červenec", "srpen",
                    "září", "říjen", "listopad", "prosinec",
                ],
                [
                    "ledna", "února", "března", "dubna", "května", "června", "července",
                    "srpna", "září", "října", "listopadu", "prosince",
                ],
            ),
            Vocabulary::plain([
                "led", "úno", "bře", "dub", "kvě", "čvn", "čvc", "srp", "zář", "říj", "lis", "pro",
            ]),
            Vocabulary::plain([
                "neděle", "pondělí", "úterý", "středa", "čtvrtek", "pátek", "sobota",
            ]),
            Vocabulary::plain(["ne", "po", "út", "stř", "čt", "pá", "so"]),
            Vocabulary::plain(["ne", "po", "út", "stř", "čt", "pá", "so"]),
        )
        .with_meridiem(|hour, _| {
            if hour < 12 { "dopoledne" } else { "odpoledne" }.to_string()
        })
    }
}
