//! Chart and horoscope records as produced by the astrology engine.
//!
//! These are read-only snapshots; field names follow the engine's JSON
//! output. Every field is optional and an absent field renders as empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chinese::LunarDate;
use crate::date::parse_date;

/// A subject's natal chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Astrolabe {
    pub gender: Option<String>,
    /// Solar birth date, e.g. `"2000-8-16"`.
    pub solar_date: Option<String>,
    /// Lunar birth date in Chinese, e.g. `"二〇〇〇年七月十七"`.
    pub lunar_date: Option<String>,
    /// Four pillars.
    pub chinese_date: Option<String>,
    pub raw_dates: Option<RawDates>,
    /// Chinese hour of birth, e.g. `"寅时"`.
    pub time: Option<String>,
    /// Clock range of the chinese hour, e.g. `"03:00~05:00"`.
    pub time_range: Option<String>,
    pub sign: Option<String>,
    pub zodiac: Option<String>,
    pub earthly_branch_of_soul_palace: Option<String>,
    pub earthly_branch_of_body_palace: Option<String>,
    pub soul: Option<String>,
    pub body: Option<String>,
    pub five_elements_class: Option<String>,
}

/// Structured dates behind the chart's display strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDates {
    pub lunar_date: Option<LunarDate>,
}

impl Astrolabe {
    /// The structured lunar birth date, if present.
    pub fn raw_lunar_date(&self) -> Option<&LunarDate> {
        self.raw_dates.as_ref()?.lunar_date.as_ref()
    }

    /// The solar birth date; `None` when absent or unparsable.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use palace_center::Astrolabe;
    ///
    /// let chart = Astrolabe { solar_date: Some("2000-8-16".into()), ..Default::default() };
    /// assert_eq!(NaiveDate::from_ymd_opt(2000, 8, 16), chart.birth_date());
    /// ```
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_date(self.solar_date.as_deref()?).ok()
    }

    pub fn gender(&self) -> Option<Gender> {
        Gender::from_name(self.gender.as_deref()?)
    }
}

/// Derived values for the selected evaluation date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Horoscope {
    pub age: Option<Age>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Age {
    pub nominal_age: Option<u32>,
}

impl Horoscope {
    pub fn nominal_age(&self) -> Option<u32> {
        self.age.as_ref()?.nominal_age
    }
}

/// Gender of the chart subject.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Recognizes the gender names the engine emits in its supported
    /// languages.
    ///
    /// ```
    /// use palace_center::chart::Gender;
    ///
    /// assert_eq!(Some(Gender::Male), Gender::from_name("男"));
    /// assert_eq!(Some(Gender::Female), Gender::from_name("Female"));
    /// assert_eq!(None, Gender::from_name("?"));
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "男" | "男性" | "남" | "남자" | "male" | "nam" => Some(Gender::Male),
            "女" | "女性" | "여" | "여자" | "female" | "nữ" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Gender::Male => '♂',
            Gender::Female => '♀',
        }
    }
}

/// A chart and its horoscope in one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDocument {
    pub astrolabe: Option<Astrolabe>,
    pub horoscope: Option<Horoscope>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_engine_output() {
        let chart: Astrolabe = serde_json::from_str(
            r#"{
                "gender": "女",
                "solarDate": "2000-8-16",
                "lunarDate": "二〇〇〇年七月十七",
                "chineseDate": "庚辰 甲申 丙午 庚寅",
                "rawDates": {
                    "lunarDate": {"lunarYear": 2000, "lunarMonth": 7, "lunarDay": 17, "isLeap": false}
                },
                "time": "寅时",
                "timeRange": "03:00~05:00",
                "palaces": []
            }"#,
        )
        .unwrap();
        assert_eq!(Some(Gender::Female), chart.gender());
        assert_eq!(NaiveDate::from_ymd_opt(2000, 8, 16), chart.birth_date());
        assert_eq!(17, chart.raw_lunar_date().unwrap().day);
        assert_eq!(None, chart.soul);
    }

    #[test]
    fn missing_fields() {
        let chart = Astrolabe::default();
        assert_eq!(None, chart.birth_date());
        assert_eq!(None, chart.raw_lunar_date());
        let horoscope: Horoscope = serde_json::from_str(r#"{"age": {"nominalAge": 25}}"#).unwrap();
        assert_eq!(Some(25), horoscope.nominal_age());
        assert_eq!(None, Horoscope::default().nominal_age());
    }

    #[test]
    fn unparsable_birth_date() {
        let chart = Astrolabe {
            solar_date: Some("unknown".into()),
            ..Default::default()
        };
        assert_eq!(None, chart.birth_date());
    }
}
