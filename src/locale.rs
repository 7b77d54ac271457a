//! Supported display languages and locale-specific lunar date strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chinese::LunarDate;
use crate::error::Error;

/// Display language of the panel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "ko-KR")]
    KoKr,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "vi-VN")]
    ViVn,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::ZhCn,
        Language::ZhTw,
        Language::KoKr,
        Language::JaJp,
        Language::EnUs,
        Language::ViVn,
    ];

    /// The language tag, e.g. `"zh-CN"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::ZhTw => "zh-TW",
            Language::KoKr => "ko-KR",
            Language::JaJp => "ja-JP",
            Language::EnUs => "en-US",
            Language::ViVn => "vi-VN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses a language tag. Matching is case-insensitive and accepts `_` in
/// place of `-`.
///
/// ```
/// use palace_center::Language;
///
/// assert_eq!(Language::EnUs, "en-US".parse::<Language>().unwrap());
/// assert_eq!(Language::ZhTw, "zh_tw".parse::<Language>().unwrap());
/// assert!("fr-FR".parse::<Language>().is_err());
/// ```
impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| Error::UnknownLanguage(s.to_owned()))
    }
}

/// English ordinal of a month number: `1st`, `2nd`, `3rd`, otherwise `Nth`.
///
/// Only meant for month numbers; `11`, `12` and `13` come out as `11th`,
/// `12th` and `13th` by falling through to the default arm.
pub fn ordinal(n: u32) -> String {
    match n {
        1 => format!("{n}st"),
        2 => format!("{n}nd"),
        3 => format!("{n}rd"),
        _ => format!("{n}th"),
    }
}

/// Renders a lunar date for `lang`.
///
/// Simplified Chinese keeps the engine's raw string, traditional Chinese only
/// swaps the glyphs of the leap and twelfth-month markers, and every other
/// language is rendered from the structured `lunar` fields.
///
/// ```
/// use palace_center::{Language, chinese::LunarDate, locale::to_locale_lunar_str};
///
/// let lunar = LunarDate { year: 2024, month: 1, day: 15, is_leap: true };
/// assert_eq!(
///     "2024-1-15(Leap 1st Month)",
///     to_locale_lunar_str("二〇二四年闰正月十五", &lunar, Language::EnUs),
/// );
/// assert_eq!(
///     "二〇二四年閏正月十五",
///     to_locale_lunar_str("二〇二四年闰正月十五", &lunar, Language::ZhTw),
/// );
/// ```
pub fn to_locale_lunar_str(raw: &str, lunar: &LunarDate, lang: Language) -> String {
    let &LunarDate {
        year,
        month,
        day,
        is_leap,
    } = lunar;
    match lang {
        Language::ZhCn => raw.to_owned(),
        Language::ZhTw => raw.replace('闰', "閏").replace('腊', "臘"),
        Language::EnUs => {
            let mut rt = format!("{year}-{month}-{day}");
            if is_leap {
                rt += &format!("(Leap {} Month)", ordinal(month));
            }
            rt
        }
        Language::JaJp => {
            let mut rt = format!("{year}年{month}月{day}日");
            if is_leap {
                rt += &format!("（閏{month}月）");
            }
            rt
        }
        Language::KoKr => {
            let mut rt = format!("{year}년 {month}월 {day}일");
            if is_leap {
                rt += &format!(" (윤{month}월)");
            }
            rt
        }
        Language::ViVn => {
            let leap = if is_leap { " Nhuận" } else { "" };
            format!("{day} Tháng {month}{leap} Năm {year}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(month: u32, is_leap: bool) -> LunarDate {
        LunarDate {
            year: 2024,
            month,
            day: 15,
            is_leap,
        }
    }

    #[test]
    fn ordinals() {
        for (std, n) in [("1st", 1), ("2nd", 2), ("3rd", 3), ("4th", 4), ("12th", 12)] {
            assert_eq!(std, ordinal(n));
        }
    }

    #[test]
    fn english() {
        assert_eq!("2024-1-15", to_locale_lunar_str("", &lunar(1, false), Language::EnUs));
        assert_eq!(
            "2024-1-15(Leap 1st Month)",
            to_locale_lunar_str("", &lunar(1, true), Language::EnUs)
        );
        assert_eq!(
            "2024-4-15(Leap 4th Month)",
            to_locale_lunar_str("", &lunar(4, true), Language::EnUs)
        );
    }

    #[test]
    fn simplified_keeps_raw() {
        let raw = "二〇二四年闰正月十五";
        assert_eq!(raw, to_locale_lunar_str(raw, &lunar(1, true), Language::ZhCn));
    }

    #[test]
    fn traditional_substitutes_glyphs_only() {
        assert_eq!("臘月初一", to_locale_lunar_str("腊月初一", &lunar(6, true), Language::ZhTw));
        assert_eq!(
            "二〇二三年閏二月初一",
            to_locale_lunar_str("二〇二三年闰二月初一", &lunar(1, false), Language::ZhTw)
        );
    }

    #[test]
    fn east_asian_templates() {
        assert_eq!("2024年6月15日", to_locale_lunar_str("", &lunar(6, false), Language::JaJp));
        assert_eq!(
            "2024年6月15日（閏6月）",
            to_locale_lunar_str("", &lunar(6, true), Language::JaJp)
        );
        assert_eq!("2024년 6월 15일", to_locale_lunar_str("", &lunar(6, false), Language::KoKr));
        assert_eq!(
            "2024년 6월 15일 (윤6월)",
            to_locale_lunar_str("", &lunar(6, true), Language::KoKr)
        );
    }

    #[test]
    fn vietnamese() {
        assert_eq!(
            "15 Tháng 6 Năm 2024",
            to_locale_lunar_str("", &lunar(6, false), Language::ViVn)
        );
        assert_eq!(
            "15 Tháng 6 Nhuận Năm 2024",
            to_locale_lunar_str("", &lunar(6, true), Language::ViVn)
        );
    }

    #[test]
    fn parse_tags() {
        for lang in Language::ALL {
            assert_eq!(lang, lang.tag().parse::<Language>().unwrap());
        }
        assert!(matches!("xx".parse::<Language>(), Err(Error::UnknownLanguage(_))));
    }
}
