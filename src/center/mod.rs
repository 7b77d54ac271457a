//! The center palace: basic chart information, the horoscope date and the
//! controls that step it.
//!
//! [`CenterPalace`] ties a chart, its horoscope, a [`Catalog`], a language and
//! the caller's [`NavState`] together and derives a [`PanelView`] from them.
//! Deriving is pure and may be repeated whenever any input changes. Clicks
//! go through [`CenterPalace::click`], which reports accepted steps to a
//! [`NavigationSink`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use palace_center::{Astrolabe, Catalog, CenterPalace, Language, NavState, Scope};
//!
//! let chart = Astrolabe { solar_date: Some("2000-1-1".into()), ..Default::default() };
//! let catalog = Catalog::builtin();
//! let mut state = NavState::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 0).unwrap();
//!
//! let palace = CenterPalace::new(&catalog, Language::EnUs, state).with_astrolabe(&chart);
//! let view = palace.view();
//! assert_eq!("2000-1-1", view.horoscope.solar);
//! assert!(view.buttons.iter().filter(|b| b.step < 0).all(|b| b.disabled));
//!
//! assert!(!palace.click(Scope::Daily, -1, &mut state));
//! assert!(palace.click(Scope::Daily, 1, &mut state));
//! assert_eq!(NaiveDate::from_ymd_opt(2000, 1, 2).unwrap(), state.date());
//! ```

use chrono::NaiveDate;

use crate::chart::{Astrolabe, Gender, Horoscope};
use crate::hour;
use crate::i18n::{Catalog, keys};
use crate::locale::Language;

mod horoscope;
pub mod navigation;
mod records;

pub use horoscope::{HoroscopeDate, horoscope_date};
pub use navigation::{NavState, NavigationSink, Scope};
pub use records::{Record, records};

/// Navigation controls in display order: backward from the largest step,
/// then forward to the largest step.
pub const BUTTONS: [(Scope, i32); 10] = [
    (Scope::Decadal, -10),
    (Scope::Yearly, -1),
    (Scope::Monthly, -1),
    (Scope::Daily, -1),
    (Scope::Hourly, -1),
    (Scope::Hourly, 1),
    (Scope::Daily, 1),
    (Scope::Monthly, 1),
    (Scope::Yearly, 1),
    (Scope::Decadal, 10),
];

/// Inputs of the center palace.
#[derive(Debug, Clone, Copy)]
pub struct CenterPalace<'a> {
    pub astrolabe: Option<&'a Astrolabe>,
    pub horoscope: Option<&'a Horoscope>,
    pub catalog: &'a Catalog,
    pub lang: Language,
    pub state: NavState,
}

/// Everything the center palace displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// ♂ for a male subject, ♀ otherwise.
    pub gender_symbol: char,
    pub basic_info_title: String,
    pub records: Vec<Record>,
    pub horoscope_info_title: String,
    pub horoscope: HoroscopeView,
    /// Label of the current hour slot.
    pub hour_label: String,
    pub buttons: Vec<Button>,
}

/// The horoscope date block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeView {
    pub lunar_title: String,
    pub lunar: String,
    pub solar_title: String,
    pub solar: String,
    pub now_label: String,
}

/// A navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub scope: Scope,
    pub step: i32,
    pub disabled: bool,
}

impl Button {
    /// Label with its direction arrow, `◀年` or `年▶`.
    pub fn caption(&self) -> String {
        if self.step < 0 {
            format!("◀{}", self.label)
        } else {
            format!("{}▶", self.label)
        }
    }
}

impl<'a> CenterPalace<'a> {
    pub fn new(catalog: &'a Catalog, lang: Language, state: NavState) -> Self {
        Self {
            astrolabe: None,
            horoscope: None,
            catalog,
            lang,
            state,
        }
    }

    pub fn with_astrolabe(mut self, astrolabe: &'a Astrolabe) -> Self {
        self.astrolabe = Some(astrolabe);
        self
    }

    pub fn with_horoscope(mut self, horoscope: &'a Horoscope) -> Self {
        self.horoscope = Some(horoscope);
        self
    }

    /// The birth floor; `None` when the chart has no usable solar date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.astrolabe?.birth_date()
    }

    /// The state one click on (`scope`, `value`) would move to, if allowed.
    pub fn propose(&self, scope: Scope, value: i32) -> Option<NavState> {
        navigation::step(self.state, scope, value, self.birth_date())
    }

    /// Handles a click on a navigation control. Accepted steps are reported to
    /// `sink`; rejected ones leave it untouched.
    pub fn click(&self, scope: Scope, value: i32, sink: &mut impl NavigationSink) -> bool {
        navigation::apply(self.state, scope, value, self.birth_date(), sink)
    }

    /// Handles a click on the "now" control: proposes today's date and keeps
    /// the hour slot.
    pub fn now(&self, sink: &mut impl NavigationSink) {
        sink.set_date(navigation::today());
    }

    pub fn view(&self) -> PanelView {
        let t = |key| self.catalog.t(self.lang, key);
        let birth = self.birth_date();
        let date = horoscope_date(Some(self.state.date()), self.lang);

        let buttons = BUTTONS
            .iter()
            .map(|&(scope, step)| Button {
                label: t(button_key(scope)),
                scope,
                step,
                disabled: step < 0 && navigation::is_disabled(self.state, scope, step, birth),
            })
            .collect();

        let gender = self.astrolabe.and_then(Astrolabe::gender);
        PanelView {
            gender_symbol: match gender {
                Some(Gender::Male) => Gender::Male.symbol(),
                _ => Gender::Female.symbol(),
            },
            basic_info_title: t(keys::TITLE_BASIC_INFO),
            records: records(self.astrolabe, self.horoscope, self.lang, self.catalog),
            horoscope_info_title: t(keys::TITLE_HOROSCOPE_INFO),
            horoscope: HoroscopeView {
                lunar_title: t(keys::LABEL_LUNAR_CALENDAR),
                lunar: date.lunar,
                solar_title: t(keys::LABEL_SOLAR_CALENDAR),
                solar: date.solar,
                now_label: t(keys::BUTTON_NOW),
            },
            hour_label: hour::label(self.catalog, self.lang, self.state.hour()),
            buttons,
        }
    }
}

fn button_key(scope: Scope) -> &'static str {
    match scope {
        Scope::Hourly => keys::BUTTON_HOUR,
        Scope::Daily => keys::BUTTON_DAY,
        Scope::Monthly => keys::BUTTON_MONTH,
        Scope::Yearly => keys::BUTTON_YEAR,
        Scope::Decadal => keys::BUTTON_DECADE,
    }
}
