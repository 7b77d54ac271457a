use crate::chart::{Astrolabe, Horoscope};
use crate::i18n::{Catalog, keys};
use crate::locale::{Language, to_locale_lunar_str};

/// One labeled line of the basic information list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub content: String,
}

/// Projects chart and horoscope fields onto the basic information list, in
/// display order. Absent fields give empty content.
///
/// ```
/// use palace_center::{Astrolabe, Catalog, Language, center::records};
///
/// let chart = Astrolabe { zodiac: Some("龙".into()), ..Default::default() };
/// let list = records(Some(&chart), None, Language::ZhCn, &Catalog::builtin());
///
/// assert_eq!(12, list.len());
/// assert_eq!(("生肖", "龙"), (list[6].title.as_str(), list[6].content.as_str()));
/// assert_eq!("", list[0].content);
/// ```
pub fn records(
    astrolabe: Option<&Astrolabe>,
    horoscope: Option<&Horoscope>,
    lang: Language,
    catalog: &Catalog,
) -> Vec<Record> {
    let field = |get: fn(&Astrolabe) -> &Option<String>| {
        astrolabe.and_then(|a| get(a).clone()).unwrap_or_default()
    };
    let record = |key: &str, content: String| Record {
        title: catalog.t(lang, key),
        content,
    };

    let age = horoscope
        .and_then(Horoscope::nominal_age)
        .map(|age| catalog.t_with(lang, keys::AGE, &[("age", &age.to_string())]))
        .unwrap_or_default();
    let lunar = astrolabe
        .and_then(|a| Some(to_locale_lunar_str(a.lunar_date.as_deref()?, a.raw_lunar_date()?, lang)))
        .unwrap_or_default();
    let hour = astrolabe
        .and_then(|a| {
            let time = a.time.as_deref()?;
            Some(format!("{time}({})", a.time_range.as_deref().unwrap_or_default()))
        })
        .unwrap_or_default();

    vec![
        record(keys::LABEL_ELEMENT_TYPE, field(|a| &a.five_elements_class)),
        record(keys::LABEL_NOMINAL_AGE, age),
        record(keys::LABEL_FOUR_PILLARS, field(|a| &a.chinese_date)),
        record(keys::LABEL_SOLAR_CALENDAR, field(|a| &a.solar_date)),
        record(keys::LABEL_LUNAR_CALENDAR, lunar),
        record(keys::LABEL_CHINESE_HOUR, hour),
        record(keys::LABEL_CHINESE_ZODIAC_SIGN, field(|a| &a.zodiac)),
        record(keys::LABEL_ZODIAC_SIGN, field(|a| &a.sign)),
        record(keys::LABEL_SOUL_RULER, field(|a| &a.soul)),
        record(keys::LABEL_BODY_RULER, field(|a| &a.body)),
        record(keys::LABEL_SOUL_PALACE, field(|a| &a.earthly_branch_of_soul_palace)),
        record(keys::LABEL_BODY_PALACE, field(|a| &a.earthly_branch_of_body_palace)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Age, RawDates};
    use crate::chinese::LunarDate;

    fn chart() -> Astrolabe {
        Astrolabe {
            gender: Some("男".into()),
            solar_date: Some("2000-8-16".into()),
            lunar_date: Some("二〇〇〇年七月十七".into()),
            chinese_date: Some("庚辰 甲申 丙午 庚寅".into()),
            raw_dates: Some(RawDates {
                lunar_date: Some(LunarDate {
                    year: 2000,
                    month: 7,
                    day: 17,
                    is_leap: false,
                }),
            }),
            time: Some("寅时".into()),
            time_range: Some("03:00~05:00".into()),
            sign: Some("狮子座".into()),
            zodiac: Some("龙".into()),
            earthly_branch_of_soul_palace: Some("午".into()),
            earthly_branch_of_body_palace: Some("戌".into()),
            soul: Some("破军".into()),
            body: Some("文昌".into()),
            five_elements_class: Some("木三局".into()),
        }
    }

    fn contents(list: &[Record]) -> Vec<&str> {
        list.iter().map(|r| r.content.as_str()).collect()
    }

    #[test]
    fn full_chart() {
        let horoscope = Horoscope {
            age: Some(Age {
                nominal_age: Some(25),
            }),
        };
        let list = records(Some(&chart()), Some(&horoscope), Language::ZhCn, &Catalog::builtin());
        assert_eq!(
            vec![
                "木三局",
                "25 岁",
                "庚辰 甲申 丙午 庚寅",
                "2000-8-16",
                "二〇〇〇年七月十七",
                "寅时(03:00~05:00)",
                "龙",
                "狮子座",
                "破军",
                "文昌",
                "午",
                "戌",
            ],
            contents(&list)
        );
        assert_eq!("五行局", list[0].title);
        assert_eq!("身宫", list[11].title);
    }

    #[test]
    fn lunar_follows_language() {
        let list = records(Some(&chart()), None, Language::EnUs, &Catalog::builtin());
        assert_eq!("Lunar Date", list[4].title);
        assert_eq!("2000-7-17", list[4].content);
    }

    #[test]
    fn lunar_needs_both_forms() {
        let mut chart = chart();
        chart.raw_dates = None;
        let list = records(Some(&chart), None, Language::ZhCn, &Catalog::builtin());
        assert_eq!("", list[4].content);
    }

    #[test]
    fn nothing_to_show() {
        let list = records(None, None, Language::ZhCn, &Catalog::builtin());
        assert!(list.iter().all(|r| r.content.is_empty()));

        let list = records(None, None, Language::EnUs, &Catalog::builtin());
        assert_eq!(12, list.len());
        assert!(list.iter().all(|r| r.content.is_empty()));
        assert_eq!("Nominal Age", list[1].title);
    }
}
