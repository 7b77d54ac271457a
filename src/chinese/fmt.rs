//! 農曆日期的漢字寫法
//!
//! 輸出與排盤引擎的農曆字串一致，採簡體字形（「闰」「腊」），正體轉換見
//! [`locale`](crate::locale)。

use super::{LunarDate, Month};

/// 日名用數字；下標即個位數，個位為 0 時寫「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 紀年用數字，逐位書寫，零作「〇」。
const YEAR_DIGITS: &[char] = &['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 逐位書寫年份，如 `2024` 作「二〇二四」。
///
/// # 用例
///
/// ```
/// use palace_center::chinese;
///
/// assert_eq!("一九九九", chinese::fmt::year(1999));
/// ```
pub fn year(y: i32) -> String {
    let mut rt = String::new();
    if y < 0 {
        rt.push('前');
    }
    rt.extend(
        y.unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| YEAR_DIGITS[(b - b'0') as usize]),
    );
    rt
}

/// 月名連「月」字，一、十一、十二月作「正」「冬」「腊」。
///
/// # 用例
///
/// ```
/// use palace_center::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// 月序號不在 `1..=12` 間則以阿拉伯數字輸出。
pub fn month(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    match num {
        1 => rt += "正",
        2..=9 => rt += NUM_CHINESE[num as usize],
        10 => rt += "十",
        11 => rt += "冬",
        12 => rt += "腊",
        _ => rt += &num.to_string(),
    }
    rt += "月";
    rt
}

/// 日名：「初一」至「初十」、「十一」至「二十」、「廿一」至「三十」。
///
/// # 用例
///
/// ```
/// use palace_center::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// 日序號不在 `1..=30` 間則以阿拉伯數字輸出。
pub fn day(d: u32) -> String {
    let prefix = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return d.to_string(),
    };
    prefix.to_owned() + NUM_CHINESE[(d % 10) as usize]
}

/// 農曆日期全稱，如「二〇二三年闰二月初一」。
///
/// # 用例
///
/// ```
/// use palace_center::chinese::{self, LunarDate};
///
/// let lunar = LunarDate { year: 2023, month: 12, day: 1, is_leap: false };
/// assert_eq!("二〇二三年腊月初一", chinese::fmt::lunar_date(&lunar));
/// ```
pub fn lunar_date(date: &LunarDate) -> String {
    year(date.year) + "年" + &month(date.month()) + &day(date.day)
}
