//! Stepping the horoscope date and hour slot.
//!
//! Navigation is a pure function from the current [`NavState`] to a proposed
//! one. The caller owns the state; this module only proposes replacements and
//! rejects any proposal that would move before the subject's birth date.

use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::date::{add_days, add_months, add_years};
use crate::error::{Error, Result};
use crate::hour::SLOTS;

/// Granularity of a navigation step.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Scope {
    Hourly,
    Daily,
    Monthly,
    Yearly,
    /// Steps years like [`Scope::Yearly`]; the caller passes ±10.
    Decadal,
}

impl Scope {
    pub fn name(&self) -> &'static str {
        match self {
            Scope::Hourly => "hourly",
            Scope::Daily => "daily",
            Scope::Monthly => "monthly",
            Scope::Yearly => "yearly",
            Scope::Decadal => "decadal",
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" | "hour" => Ok(Scope::Hourly),
            "daily" | "day" => Ok(Scope::Daily),
            "monthly" | "month" => Ok(Scope::Monthly),
            "yearly" | "year" => Ok(Scope::Yearly),
            "decadal" | "decade" => Ok(Scope::Decadal),
            _ => Err(Error::UnknownScope(s.to_owned())),
        }
    }
}

/// The moment a horoscope is evaluated for: a date and an hour slot `0..=11`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NavState {
    date: NaiveDate,
    hour: u8,
}

impl NavState {
    /// ```
    /// use chrono::NaiveDate;
    /// use palace_center::NavState;
    ///
    /// let date = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
    /// assert!(NavState::new(date, 11).is_ok());
    /// assert!(NavState::new(date, 12).is_err());
    /// ```
    pub fn new(date: NaiveDate, hour: u8) -> Result<Self> {
        if hour >= SLOTS {
            return Err(Error::HourSlot(hour));
        }
        Ok(Self { date, hour })
    }

    /// Today in local time, first hour slot.
    pub fn now() -> Self {
        Self {
            date: today(),
            hour: 0,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }
}

/// Receives accepted navigation proposals.
///
/// Implemented by whatever owns the navigation state; it is free to apply
/// the values, store them elsewhere or ignore them.
pub trait NavigationSink {
    fn set_date(&mut self, date: NaiveDate);
    fn set_hour(&mut self, hour: u8);
}

impl NavigationSink for NavState {
    fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    fn set_hour(&mut self, hour: u8) {
        if hour < SLOTS {
            self.hour = hour;
        }
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Computes the state `value` units of `scope` away, without the birth-date
/// check. `None` only when the date leaves chrono's range.
///
/// Hour steps roll over into neighbouring days: one step past the last slot
/// lands on slot 0 of the next day, and larger steps carry whole days the
/// same way.
pub fn candidate(state: NavState, scope: Scope, value: i32) -> Option<NavState> {
    let NavState { date, hour } = state;
    match scope {
        Scope::Hourly => {
            let total = i64::from(hour) + i64::from(value);
            let slots = i64::from(SLOTS);
            Some(NavState {
                date: add_days(date, total.div_euclid(slots))?,
                hour: total.rem_euclid(slots) as u8,
            })
        }
        Scope::Daily => Some(NavState {
            date: add_days(date, i64::from(value))?,
            hour,
        }),
        Scope::Monthly => Some(NavState {
            date: add_months(date, value)?,
            hour,
        }),
        Scope::Yearly | Scope::Decadal => Some(NavState {
            date: add_years(date, value)?,
            hour,
        }),
    }
}

/// Proposes the state `value` units of `scope` away.
///
/// Returns `None` when the candidate date precedes `birth` (the birth date
/// itself is allowed) or when there is no birth date at all.
///
/// ```
/// use chrono::NaiveDate;
/// use palace_center::{NavState, Scope, center::navigation::step};
///
/// let birth = NaiveDate::from_ymd_opt(2000, 1, 1);
/// let state = NavState::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 5).unwrap();
///
/// assert_eq!(None, step(state, Scope::Daily, -1, birth));
/// let next = step(state, Scope::Daily, 1, birth).unwrap();
/// assert_eq!((NaiveDate::from_ymd_opt(2000, 1, 2).unwrap(), 5), (next.date(), next.hour()));
/// ```
pub fn step(state: NavState, scope: Scope, value: i32, birth: Option<NaiveDate>) -> Option<NavState> {
    let birth = birth?;
    let next = candidate(state, scope, value)?;
    if next.date >= birth {
        tracing::trace!(scope = scope.name(), value, date = %next.date, hour = next.hour, "step accepted");
        Some(next)
    } else {
        tracing::trace!(scope = scope.name(), value, date = %next.date, %birth, "step before birth date");
        None
    }
}

/// Whether [`step`] would reject this step.
pub fn is_disabled(state: NavState, scope: Scope, value: i32, birth: Option<NaiveDate>) -> bool {
    step(state, scope, value, birth).is_none()
}

/// Applies an accepted step to `sink`. Returns whether the step was accepted.
pub fn apply(
    state: NavState,
    scope: Scope,
    value: i32,
    birth: Option<NaiveDate>,
    sink: &mut impl NavigationSink,
) -> bool {
    match step(state, scope, value, birth) {
        Some(next) => {
            sink.set_date(next.date);
            sink.set_hour(next.hour);
            true
        }
        None => false,
    }
}
