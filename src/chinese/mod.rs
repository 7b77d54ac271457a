//! 農曆（夏曆）
//!
//! 本模塊術語繁多，文檔以中文撰寫。
//!
//! 月首與節氣時刻皆由 [`ephemeris`] 即時算出，再按「無中氣置閏」排定月序。

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::add_days;
use crate::time_scales::{Tdb, Ut};

pub mod ephemeris;
pub mod fmt;

/// 農曆日期，字段名與排盤引擎輸出的 `rawDates.lunarDate` 一致。
///
/// # 用例
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::chinese::{self, LunarDate};
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let lunar = chinese::solar_to_lunar(date).unwrap();
///
/// assert_eq!(LunarDate { year: 1999, month: 11, day: 25, is_leap: false }, lunar);
/// assert_eq!("一九九九年冬月廿五", lunar.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    #[serde(rename = "lunarYear")]
    pub year: i32,
    #[serde(rename = "lunarMonth")]
    pub month: u32,
    #[serde(rename = "lunarDay")]
    pub day: u32,
    #[serde(rename = "isLeap", default)]
    pub is_leap: bool,
}

impl LunarDate {
    pub fn month(&self) -> Month {
        if self.is_leap {
            Month::Leap(self.month)
        } else {
            Month::Common(self.month)
        }
    }
}

/// 漢字寫法，如「二〇二三年闰二月初一」，見 [`fmt::lunar_date`]。
impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fmt::lunar_date(self))
    }
}

/// 一「歲」之月：自含冬至之十一月起，至次一冬至所在月止。
///
/// 年始於正月，而置閏須以冬至到冬至為單位推算，故此處按歲排月，再由日期折回所屬之年。
/// 可用範圍同 [`ephemeris::MIN_ANNUS`]`..=`[`ephemeris::MAX_ANNUS`]。
///
/// # 用例
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::chinese::{Annus, Month};
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let annus = Annus::from_date(date).unwrap();
///
/// assert_eq!(2000, annus.annus);
/// assert_eq!(Ok((1999, Month::Common(11), 25)), annus.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct Annus {
    /// 以冬至次年的公元年為號
    pub annus: i32,
    /// 各月首日；末項為下一歲的十一月，僅作本歲終點
    pub months: Vec<NewMoon>,
}

#[derive(Debug, Copy, Clone)]
pub struct NewMoon {
    pub month: Month,
    /// 朔日（北京時間）
    pub date: NaiveDate,
}

/// 月名：`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 月序，不分平閏
    pub fn num(&self) -> u32 {
        match *self {
            Month::Common(n) | Month::Leap(n) => n,
        }
    }

    pub fn is_leap(&self) -> bool {
        matches!(self, Month::Leap(_))
    }
}

impl Annus {
    /// 排出公元 `annus` 歲的各月；曆表不及則為 `None`。
    ///
    /// ```
    /// use palace_center::chinese::{Annus, Month};
    ///
    /// let annus = Annus::new(2017).unwrap();
    /// assert_eq!(14, annus.months.len());
    /// assert_eq!(Month::Leap(6), annus.months[8].month);
    /// ```
    pub fn new(annus: i32) -> Option<Self> {
        let ephemeris = ephemeris::Annus::get(annus)?;
        let starts: Vec<NaiveDate> = dates_cst(&ephemeris.new_moon)?
            .into_iter()
            .map(published_month_start)
            .collect();
        let terms = dates_cst(&ephemeris.solar_term)?;
        // 偶數項為中氣，首末兩項即兩冬至
        let principal: Vec<NaiveDate> = terms.iter().step_by(2).copied().collect();
        let month_of = |day: NaiveDate| starts.partition_point(|&start| start <= day).checked_sub(1);
        let first = month_of(terms[0])?;
        let last = month_of(terms[24])?;

        let without_principal = |i: usize| {
            let span = starts[i]..starts[i + 1];
            !principal.iter().any(|day| span.contains(day))
        };
        let leap = match last - first {
            12 => None,
            13 => Some((first + 1..last).find(|&i| without_principal(i))?),
            count => {
                tracing::warn!(annus, count, "unexpected month count between winter solstices");
                return None;
            }
        };

        let mut num = 10;
        let months = (first..=last)
            .map(|i| {
                let month = if leap == Some(i) {
                    Month::Leap(num)
                } else {
                    num = num % 12 + 1;
                    Month::Common(num)
                };
                NewMoon {
                    month,
                    date: starts[i],
                }
            })
            .collect();
        Some(Annus { annus, months })
    }

    /// 求日期所在之歲。
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use palace_center::chinese::Annus;
    ///
    /// let annus = Annus::from_date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()).unwrap();
    /// assert_eq!(2000, annus.annus);
    /// ```
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        let mut annus = Self::new(date.year())?;
        loop {
            annus = match annus.ymd_for(date) {
                Ok(_) => return Some(annus),
                Err(OtherAnnus::Before) => Self::new(annus.annus - 1)?,
                Err(OtherAnnus::After) => Self::new(annus.annus + 1)?,
            };
        }
    }

    /// 日期在本歲中的 `(年, 月, 日)`；不在本歲則指明在前或在後。
    pub fn ymd_for(&self, date: NaiveDate) -> Result<(i32, Month, u32), OtherAnnus> {
        let idx = self.months.partition_point(|m| m.date <= date);
        if idx == 0 {
            return Err(OtherAnnus::Before);
        }
        if idx == self.months.len() {
            return Err(OtherAnnus::After);
        }
        let NewMoon { month, date: start } = self.months[idx - 1];
        let day = (date - start).num_days() as u32 + 1;
        // 十一、十二月屬上一年
        let year = self.annus - i32::from(month.num() >= 11);
        Ok((year, month, day))
    }
}

/// 頒行曆書所定月首與推算不同者，皆因合朔距子夜僅數分鐘，超出曆表精度。
/// 每項為 `(推算之朔日, 改定天數)`。
const MONTH_START_CORRECTIONS: [((i32, u32, u32), i64); 6] = [
    ((1914, 11, 18), -1),
    ((1916, 2, 4), -1),
    ((1920, 11, 11), -1),
    ((2057, 9, 28), 1),
    ((2089, 9, 4), 1),
    ((2097, 8, 7), 1),
];

fn published_month_start(date: NaiveDate) -> NaiveDate {
    let ymd = (date.year(), date.month(), date.day());
    MONTH_START_CORRECTIONS
        .iter()
        .find(|&&(computed, _)| computed == ymd)
        .and_then(|&(_, shift)| add_days(date, shift))
        .unwrap_or(date)
}

/// 日期不在所查之歲
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherAnnus {
    Before,
    After,
}

/// 曆表時刻所在的北京時間（UTC+8）日期
pub fn date_cst(tdb: Tdb) -> Option<NaiveDate> {
    Ut::convert(tdb).date_in_timezone(480)
}

fn dates_cst(instants: &[Tdb]) -> Option<Vec<NaiveDate>> {
    instants.iter().map(|&tdb| date_cst(tdb)).collect()
}

/// 公曆轉農曆；超出曆表範圍為 `None`。
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::chinese::solar_to_lunar;
///
/// let lunar = solar_to_lunar(NaiveDate::from_ymd_opt(2017, 7, 23).unwrap()).unwrap();
/// assert_eq!((2017, 6, 1, true), (lunar.year, lunar.month, lunar.day, lunar.is_leap));
/// ```
pub fn solar_to_lunar(date: NaiveDate) -> Option<LunarDate> {
    let (year, month, day) = Annus::from_date(date)?.ymd_for(date).ok()?;
    Some(LunarDate {
        year,
        month: month.num(),
        day,
        is_leap: month.is_leap(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::{Common, Leap};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn layout(annus: &Annus) -> Vec<(Month, NaiveDate)> {
        annus.months.iter().map(|m| (m.month, m.date)).collect()
    }

    #[test]
    fn annus_of_date() {
        for (date, expected) in [
            (ymd(2017, 1, 27), 2017),
            (ymd(2017, 12, 17), 2017),
            (ymd(2017, 12, 18), 2018),
            (ymd(1999, 12, 7), 1999),
        ] {
            assert_eq!(Some(expected), Annus::from_date(date).map(|a| a.annus), "{date}");
        }
    }

    #[test]
    fn common_annus() {
        let annus = Annus::new(2000).unwrap();
        assert_eq!(
            vec![
                (Common(11), ymd(1999, 12, 8)),
                (Common(12), ymd(2000, 1, 7)),
                (Common(1), ymd(2000, 2, 5)),
                (Common(2), ymd(2000, 3, 6)),
                (Common(3), ymd(2000, 4, 5)),
                (Common(4), ymd(2000, 5, 4)),
                (Common(5), ymd(2000, 6, 2)),
                (Common(6), ymd(2000, 7, 2)),
                (Common(7), ymd(2000, 7, 31)),
                (Common(8), ymd(2000, 8, 29)),
                (Common(9), ymd(2000, 9, 28)),
                (Common(10), ymd(2000, 10, 27)),
                (Common(11), ymd(2000, 11, 26)),
            ],
            layout(&annus)
        );
    }

    #[test]
    fn leap_sixth_month() {
        let annus = Annus::new(2017).unwrap();
        assert_eq!(
            vec![
                (Common(11), ymd(2016, 11, 29)),
                (Common(12), ymd(2016, 12, 29)),
                (Common(1), ymd(2017, 1, 28)),
                (Common(2), ymd(2017, 2, 26)),
                (Common(3), ymd(2017, 3, 28)),
                (Common(4), ymd(2017, 4, 26)),
                (Common(5), ymd(2017, 5, 26)),
                (Common(6), ymd(2017, 6, 24)),
                (Leap(6), ymd(2017, 7, 23)),
                (Common(7), ymd(2017, 8, 22)),
                (Common(8), ymd(2017, 9, 20)),
                (Common(9), ymd(2017, 10, 20)),
                (Common(10), ymd(2017, 11, 18)),
                (Common(11), ymd(2017, 12, 18)),
            ],
            layout(&annus)
        );
    }

    #[test]
    fn days_within_annus() {
        let annus = Annus::new(2017).unwrap();
        assert_eq!(Err(OtherAnnus::Before), annus.ymd_for(ymd(2016, 11, 28)));
        assert_eq!(Ok((2016, Common(11), 1)), annus.ymd_for(ymd(2016, 11, 29)));
        assert_eq!(Ok((2016, Common(12), 30)), annus.ymd_for(ymd(2017, 1, 27)));
        assert_eq!(Ok((2017, Common(1), 1)), annus.ymd_for(ymd(2017, 1, 28)));
        assert_eq!(Ok((2017, Common(6), 29)), annus.ymd_for(ymd(2017, 7, 22)));
        assert_eq!(Ok((2017, Leap(6), 1)), annus.ymd_for(ymd(2017, 7, 23)));
        assert_eq!(Ok((2017, Common(10), 30)), annus.ymd_for(ymd(2017, 12, 17)));
        assert_eq!(Err(OtherAnnus::After), annus.ymd_for(ymd(2017, 12, 18)));
    }

    #[test]
    fn lunar_dates() {
        let data = [
            ((2023, 3, 22), (2023, 2, 1, true)),
            ((2023, 1, 22), (2023, 1, 1, false)),
            ((2024, 2, 10), (2024, 1, 1, false)),
            ((2020, 5, 23), (2020, 4, 1, true)),
        ];
        for ((y, m, d), std) in data {
            let lunar = solar_to_lunar(ymd(y, m, d)).unwrap();
            assert_eq!(std, (lunar.year, lunar.month, lunar.day, lunar.is_leap), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn matches_published_tables() {
        let data = [
            // 正月初一
            ((1901, 2, 19), (1901, 1, 1, false)),
            ((1929, 2, 10), (1929, 1, 1, false)),
            ((1950, 2, 17), (1950, 1, 1, false)),
            ((1984, 2, 2), (1984, 1, 1, false)),
            ((2033, 1, 31), (2033, 1, 1, false)),
            ((2076, 2, 5), (2076, 1, 1, false)),
            ((2100, 2, 9), (2100, 1, 1, false)),
            // 合朔近子夜之月
            ((1914, 11, 17), (1914, 10, 1, false)),
            ((1916, 2, 3), (1916, 1, 1, false)),
            ((1920, 11, 10), (1920, 10, 1, false)),
            ((2057, 9, 28), (2057, 8, 30, false)),
            ((2057, 10, 1), (2057, 9, 3, false)),
            ((2089, 9, 11), (2089, 8, 7, false)),
            ((2097, 8, 11), (2097, 7, 4, false)),
            // 末歲
            ((2100, 12, 1), (2100, 11, 1, false)),
            ((2100, 12, 15), (2100, 11, 15, false)),
            ((2100, 12, 31), (2100, 12, 1, false)),
        ];
        for ((y, m, d), std) in data {
            let lunar = solar_to_lunar(ymd(y, m, d)).unwrap();
            assert_eq!(std, (lunar.year, lunar.month, lunar.day, lunar.is_leap), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn corrected_month_lengths() {
        let annus = Annus::new(2057).unwrap();
        let ninth = annus.months.iter().position(|m| m.month == Common(9)).unwrap();
        assert_eq!(ymd(2057, 9, 29), annus.months[ninth].date);
        assert_eq!(30, (annus.months[ninth].date - annus.months[ninth - 1].date).num_days());
    }

    #[test]
    fn out_of_range() {
        assert_eq!(None, solar_to_lunar(ymd(1800, 1, 1)));
        assert_eq!(None, solar_to_lunar(ymd(2200, 1, 1)));
    }

    #[test]
    fn lunar_date_serde() {
        let lunar: LunarDate =
            serde_json::from_str(r#"{"lunarYear":2024,"lunarMonth":1,"lunarDay":15,"isLeap":false}"#)
                .unwrap();
        assert_eq!(Month::Common(1), lunar.month());
        assert_eq!(15, lunar.day);
    }
}
