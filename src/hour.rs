//! The twelve traditional two-hour divisions of the day.

use crate::i18n::Catalog;
use crate::locale::Language;

/// Number of hour slots in a day.
pub const SLOTS: u8 = 12;

/// Message keys of the hour slots, indexed `0..=11`, from the early rat hour
/// (子) to the pig hour (亥).
pub const CHINESE_TIME: [&str; SLOTS as usize] = [
    "earlyRatHour",
    "oxHour",
    "tigerHour",
    "rabbitHour",
    "dragonHour",
    "snakeHour",
    "horseHour",
    "goatHour",
    "monkeyHour",
    "roosterHour",
    "dogHour",
    "pigHour",
];

/// Localized label of an hour slot; empty when `slot` is out of range.
///
/// ```
/// use palace_center::{Catalog, Language, hour};
///
/// let catalog = Catalog::builtin();
/// assert_eq!("亥时", hour::label(&catalog, Language::ZhCn, 11));
/// assert_eq!("", hour::label(&catalog, Language::ZhCn, 12));
/// ```
pub fn label(catalog: &Catalog, lang: Language, slot: u8) -> String {
    CHINESE_TIME
        .get(usize::from(slot))
        .map(|key| catalog.t(lang, key))
        .unwrap_or_default()
}
