//! View model of the center palace of a Zi Wei Dou Shu chart, with
//! locale-specific lunar date formatting.
//!
//! The chart and horoscope are computed elsewhere and handed in as
//! [`Astrolabe`] and [`Horoscope`] records. This crate formats their fields,
//! derives the displayed horoscope date in the solar and lunar calendars, and
//! steps that date by hour, day, month, year or decade without ever going
//! before the subject's birth date.
//!
//! # Examples
//!
//! Formatting a lunar date:
//!
//! ```
//! use chrono::NaiveDate;
//! use palace_center::{Language, chinese, locale::to_locale_lunar_str};
//!
//! let lunar = chinese::solar_to_lunar(NaiveDate::from_ymd_opt(2023, 3, 22).unwrap()).unwrap();
//! let raw = lunar.to_string();
//!
//! assert_eq!("二〇二三年闰二月初一", raw);
//! assert_eq!("2023-2-1(Leap 2nd Month)", to_locale_lunar_str(&raw, &lunar, Language::EnUs));
//! ```
//!
//! Stepping the horoscope date:
//!
//! ```
//! use chrono::NaiveDate;
//! use palace_center::{NavState, Scope, center::navigation};
//!
//! let birth = NaiveDate::from_ymd_opt(2000, 1, 1);
//! let state = NavState::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 11).unwrap();
//!
//! let next = navigation::step(state, Scope::Hourly, 1, birth).unwrap();
//! assert_eq!((NaiveDate::from_ymd_opt(2000, 1, 2).unwrap(), 0), (next.date(), next.hour()));
//! assert!(navigation::is_disabled(state, Scope::Yearly, -1, birth));
//! ```
//!
//! The Chinese calendar is supported for years 1900 through 2100.

pub mod center;
pub mod chart;
pub mod chinese;
pub mod date;
pub mod error;
pub mod hour;
pub mod i18n;
pub mod locale;
pub mod time_scales;

pub use center::{CenterPalace, NavState, NavigationSink, PanelView, Scope};
pub use chart::{Astrolabe, ChartDocument, Horoscope};
pub use error::{Error, Result};
pub use i18n::Catalog;
pub use locale::Language;
