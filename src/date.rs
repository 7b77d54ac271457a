//! Gregorian date helpers on top of [`chrono::NaiveDate`].
//!
//! Dates coming from the chart engine are loosely formatted strings such as
//! `"2000-1-1"` or `"2000/01/01 12:30"`; [`normalize_date_str`] turns them
//! into `(year, month, day)`.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{Error, Result};

/// Offset between the Julian day number and chrono's day count from
/// 0001-01-01 (which is day 1).
const JDN_CE_OFFSET: i32 = 1_721_425;

/// Splits a loosely formatted date string into `(year, month, day)`.
///
/// Fields may be separated by `-`, `/` or `.`; anything after the third field
/// (a time of day, for instance) is ignored. The month and day are range
/// checked but not validated against the month length.
///
/// # Example
///
/// ```
/// use palace_center::date::normalize_date_str;
///
/// assert_eq!((2000, 1, 1), normalize_date_str("2000-1-1").unwrap());
/// assert_eq!((1999, 12, 31), normalize_date_str("1999/12/31 23:59").unwrap());
/// assert!(normalize_date_str("yesterday").is_err());
/// ```
pub fn normalize_date_str(s: &str) -> Result<(i32, u32, u32)> {
    let invalid = || Error::InvalidDate(s.to_owned());
    let mut fields = s
        .trim()
        .split(|c: char| matches!(c, '-' | '/' | '.' | ' ' | 'T' | ':'))
        .filter(|f| !f.is_empty());
    let mut next = || fields.next().ok_or_else(invalid);

    let year: i32 = next()?.parse().map_err(|_| invalid())?;
    let month: u32 = next()?.parse().map_err(|_| invalid())?;
    let day: u32 = next()?.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok((year, month, day))
}

/// Parses a loosely formatted date string into a [`NaiveDate`].
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::date::parse_date;
///
/// assert_eq!(NaiveDate::from_ymd_opt(2000, 2, 29), parse_date("2000-2-29").ok());
/// assert!(parse_date("2001-2-29").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let (y, m, d) = normalize_date_str(s)?;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| Error::InvalidDate(s.to_owned()))
}

/// Formats the date as `Y-M-D` without zero padding.
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::date::solar_str;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!("2024-3-5", solar_str(date));
/// ```
pub fn solar_str(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Returns the Julian day number (JDN) of the date.
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::date::jdn;
///
/// assert_eq!(2451545, jdn(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()));
/// ```
pub fn jdn(date: NaiveDate) -> i32 {
    date.num_days_from_ce() + JDN_CE_OFFSET
}

/// Creates a date from a Julian day number.
///
/// Returns `None` if the result is out of chrono's range.
pub fn from_jdn(jdn: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(jdn - JDN_CE_OFFSET)
}

/// Adds (or subtracts) calendar months keeping the day of month, letting a
/// day that does not exist in the target month spill into the following
/// month: January 31 plus one month is March 2 (or 3 in a common year).
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::date::add_months;
///
/// let date = NaiveDate::from_ymd_opt(2001, 1, 31).unwrap();
/// assert_eq!(NaiveDate::from_ymd_opt(2001, 3, 3), add_months(date, 1));
/// ```
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let total = date
        .year()
        .checked_mul(12)?
        .checked_add(date.month0() as i32)?
        .checked_add(months)?;
    let first = NaiveDate::from_ymd_opt(total.div_euclid(12), total.rem_euclid(12) as u32 + 1, 1)?;
    first.checked_add_days(Days::new(u64::from(date.day0())))
}

/// Adds (or subtracts) years with the same spill-over rule as
/// [`add_months`]: February 29 plus one year is March 1.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// Adds a signed number of days.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}
