//! 月相節氣曆表
//!
//! 曆表由公式即時計算，不依賴外部數據：
//!
//! - 節氣：求太陽視黃經達 15° 整數倍的時刻，黃經採 Meeus《Astronomical
//!   Algorithms》第 25 章低精度算法（誤差約 0.01°，即十餘分鐘）；
//! - 朔：採同書第 49 章算法，含全部週期項及行星修正項。
//!
//! 所得時刻均為力學時（TDB），須經 [`Ut::convert`](crate::time_scales::Ut::convert)
//! 轉為世界時方可定日。交節或合朔若恰在子夜前後十數分鐘內，所定日期可能差一日；
//! 已知與頒行曆書不合的月首在 [`Annus::new`](super::Annus::new) 中改定。

use chrono::NaiveDate;

use crate::date::jdn;
use crate::time_scales::Tdb;

/// 曆表支持的最早一歲
pub const MIN_ANNUS: i32 = 1900;
/// 曆表支持的最晚一歲
pub const MAX_ANNUS: i32 = 2101;

/// 朔望月平均長度（日）
const MEAN_SYNODIC_MONTH: f64 = 29.530588861;
/// 回歸年平均長度（日）
const MEAN_TROPICAL_YEAR: f64 = 365.2422;
/// 每歲列出的朔數，自冬至前兩月起算，足以覆蓋至次歲冬至後一月
const NEW_MOONS: usize = 17;

/// 保存一歲的曆表數據
#[derive(Debug, Clone)]
pub struct Annus {
    /// 序號，為該歲大部分時段所在公元年
    pub annus: i32,
    /// 從冬至開始的各節氣時刻，亦含次歲冬至以便計算末日
    pub solar_term: [Tdb; 25],
    /// 連續的合朔時刻，首項早於該歲冬至
    pub new_moon: Vec<Tdb>,
}

impl Annus {
    /// 計算公元 `annus` 年對應的歲的曆表。
    ///
    /// 超出 [`MIN_ANNUS`]`..=`[`MAX_ANNUS`] 則返回 `None`。
    pub fn get(annus: i32) -> Option<Self> {
        if !(MIN_ANNUS..=MAX_ANNUS).contains(&annus) {
            return None;
        }
        let guess = julian_day(NaiveDate::from_ymd_opt(annus - 1, 12, 22)?);
        let winter_solstice = solar_longitude_time(270.0, guess);

        let mut solar_term = [Tdb(0.0); 25];
        for (i, term) in solar_term.iter_mut().enumerate() {
            let i = i as f64;
            let guess = winter_solstice.0 + i * MEAN_TROPICAL_YEAR / 24.0;
            *term = solar_longitude_time(270.0 + 15.0 * i, guess);
        }

        let k0 = ((winter_solstice.0 - 2451550.09766) / MEAN_SYNODIC_MONTH).floor() - 1.0;
        let new_moon = (0..NEW_MOONS).map(|i| new_moon(k0 + i as f64)).collect();

        Some(Annus {
            annus,
            solar_term,
            new_moon,
        })
    }
}

/// 所給日期零時（世界時）的儒略日
fn julian_day(date: NaiveDate) -> f64 {
    jdn(date) as f64 - 0.5
}

/// 將角度歸入 `[-180, 180)`
fn wrap180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// 太陽視黃經（度），`jde` 為力學時儒略日。
///
/// # 用例
///
/// ```
/// use palace_center::chinese::ephemeris::apparent_solar_longitude;
///
/// // Meeus 例 25.a：1992 年 10 月 13.0 日
/// let lon = apparent_solar_longitude(2448908.5);
/// assert!((lon - 199.90895).abs() < 0.01);
/// ```
pub fn apparent_solar_longitude(jde: f64) -> f64 {
    let t = (jde - 2451545.0) / 36525.0;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

/// 求太陽視黃經達 `target` 度的時刻，`guess` 為相距不出數日的初值。
pub fn solar_longitude_time(target: f64, guess: f64) -> Tdb {
    let mut jde = guess;
    for _ in 0..10 {
        let step = wrap180(target - apparent_solar_longitude(jde)) * MEAN_TROPICAL_YEAR / 360.0;
        jde += step;
        if step.abs() < 1e-7 {
            break;
        }
    }
    Tdb(jde)
}

/// 第 `k` 個合朔時刻，`k = 0` 為 2000 年 1 月 6 日之朔，負數為其前。
///
/// # 用例
///
/// ```
/// use palace_center::chinese::ephemeris::new_moon;
///
/// // Meeus 例 49.a：1977 年 2 月之朔
/// let jde = new_moon(-283.0).0;
/// assert!((jde - 2443192.65118).abs() < 1e-4);
/// ```
pub fn new_moon(k: f64) -> Tdb {
    let t = k / 1236.85;
    let (t2, t3, t4) = (t * t, t * t * t, t * t * t * t);

    let mut jde = 2451550.09766 + MEAN_SYNODIC_MONTH * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = (2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3).to_radians();
    let mp = (201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3
        - 0.000000058 * t4)
        .to_radians();
    let f = (160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3
        + 0.000000011 * t4)
        .to_radians();
    let omega = (124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3).to_radians();

    jde += -0.40720 * mp.sin()
        + 0.17241 * e * m.sin()
        + 0.01608 * (2.0 * mp).sin()
        + 0.01039 * (2.0 * f).sin()
        + 0.00739 * e * (mp - m).sin()
        - 0.00514 * e * (mp + m).sin()
        + 0.00208 * e * e * (2.0 * m).sin()
        - 0.00111 * (mp - 2.0 * f).sin()
        - 0.00057 * (mp + 2.0 * f).sin()
        + 0.00056 * e * (2.0 * mp + m).sin()
        - 0.00042 * (3.0 * mp).sin()
        + 0.00042 * e * (m + 2.0 * f).sin()
        + 0.00038 * e * (m - 2.0 * f).sin()
        - 0.00024 * e * (2.0 * mp - m).sin()
        - 0.00017 * omega.sin()
        - 0.00007 * (mp + 2.0 * m).sin()
        + 0.00004 * (2.0 * mp - 2.0 * f).sin()
        + 0.00004 * (3.0 * m).sin()
        + 0.00003 * (mp + m - 2.0 * f).sin()
        + 0.00003 * (2.0 * mp + 2.0 * f).sin()
        - 0.00003 * (mp + m + 2.0 * f).sin()
        + 0.00003 * (mp - m + 2.0 * f).sin()
        - 0.00002 * (mp - m - 2.0 * f).sin()
        - 0.00002 * (3.0 * mp + m).sin()
        + 0.00002 * (4.0 * mp).sin();

    // 行星修正項
    const PLANETARY: [(f64, f64, f64); 14] = [
        (299.77, 0.107408, 0.000325),
        (251.88, 0.016321, 0.000165),
        (251.83, 26.651886, 0.000164),
        (349.42, 36.412478, 0.000126),
        (84.66, 18.206239, 0.000110),
        (141.74, 53.303771, 0.000062),
        (207.14, 2.453732, 0.000060),
        (154.84, 7.306860, 0.000056),
        (34.52, 27.261239, 0.000047),
        (207.19, 0.121824, 0.000042),
        (291.34, 1.844379, 0.000040),
        (161.72, 24.198154, 0.000037),
        (239.56, 25.513099, 0.000035),
        (331.55, 3.592518, 0.000023),
    ];
    for (i, &(a0, a1, coef)) in PLANETARY.iter().enumerate() {
        let mut a = a0 + a1 * k;
        if i == 0 {
            a -= 0.009173 * t2;
        }
        jde += coef * a.to_radians().sin();
    }

    Tdb(jde)
}
