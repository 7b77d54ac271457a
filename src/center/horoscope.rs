use chrono::NaiveDate;

use super::navigation::today;
use crate::chinese::{self, LunarDate};
use crate::date::solar_str;
use crate::locale::{Language, to_locale_lunar_str};

/// The horoscope date as displayed: canonical solar string and localized
/// lunar string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeDate {
    pub date: NaiveDate,
    /// `Y-M-D`, no zero padding.
    pub solar: String,
    /// Localized lunar date; empty outside the supported lunar range.
    pub lunar: String,
    pub lunar_date: Option<LunarDate>,
}

/// Derives the displayed horoscope date; `None` means today.
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::{Language, center::horoscope_date};
///
/// let view = horoscope_date(NaiveDate::from_ymd_opt(2000, 1, 1), Language::EnUs);
/// assert_eq!("2000-1-1", view.solar);
/// assert_eq!("1999-11-25", view.lunar);
/// ```
pub fn horoscope_date(date: Option<NaiveDate>, lang: Language) -> HoroscopeDate {
    let date = date.unwrap_or_else(today);
    let lunar_date = chinese::solar_to_lunar(date);
    tracing::debug!(%date, ?lunar_date, "horoscope lunar date");
    let lunar = lunar_date
        .map(|lunar| to_locale_lunar_str(&lunar.to_string(), &lunar, lang))
        .unwrap_or_default();
    HoroscopeDate {
        date,
        solar: solar_str(date),
        lunar,
        lunar_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 22);
        assert_eq!("二〇二三年闰二月初一", horoscope_date(date, Language::ZhCn).lunar);
        assert_eq!("二〇二三年閏二月初一", horoscope_date(date, Language::ZhTw).lunar);
        assert_eq!("2023-2-1(Leap 2nd Month)", horoscope_date(date, Language::EnUs).lunar);
        assert_eq!("2023年2月1日（閏2月）", horoscope_date(date, Language::JaJp).lunar);
    }

    #[test]
    fn last_supported_month() {
        let view = horoscope_date(NaiveDate::from_ymd_opt(2100, 12, 15), Language::ZhCn);
        assert_eq!("二一〇〇年冬月十五", view.lunar);
        let view = horoscope_date(NaiveDate::from_ymd_opt(2057, 9, 28), Language::EnUs);
        assert_eq!("2057-8-30", view.lunar);
    }

    #[test]
    fn out_of_lunar_range() {
        let view = horoscope_date(NaiveDate::from_ymd_opt(1850, 5, 1), Language::ZhCn);
        assert_eq!("1850-5-1", view.solar);
        assert_eq!("", view.lunar);
        assert_eq!(None, view.lunar_date);
    }

    #[test]
    fn defaults_to_today() {
        let before = today();
        let view = horoscope_date(None, Language::ZhCn);
        assert!((before..=today()).contains(&view.date));
    }
}
