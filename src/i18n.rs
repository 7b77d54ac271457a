//! Message catalog.
//!
//! A [`Catalog`] maps each [`Language`] to a table of message templates. It is
//! an ordinary value owned by the application and handed to whatever renders
//! text; there is no process-wide registry. Templates may reference arguments
//! as `{{name}}`.
//!
//! Lookups fall back to Simplified Chinese and then to the key itself, so a
//! partially translated catalog still renders.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Language;

/// Message keys used by the center palace.
pub mod keys {
    pub const TITLE_BASIC_INFO: &str = "titleBasicInfo";
    pub const TITLE_HOROSCOPE_INFO: &str = "titleHoroscopeInfo";
    pub const LABEL_ELEMENT_TYPE: &str = "labelElementType";
    pub const LABEL_NOMINAL_AGE: &str = "labelNominalAge";
    pub const AGE: &str = "age";
    pub const LABEL_FOUR_PILLARS: &str = "labelFourPillars";
    pub const LABEL_SOLAR_CALENDAR: &str = "labelSolarCalendar";
    pub const LABEL_LUNAR_CALENDAR: &str = "labelLunarCalendar";
    pub const LABEL_CHINESE_HOUR: &str = "labelChineseHour";
    pub const LABEL_CHINESE_ZODIAC_SIGN: &str = "labelChineseZodiacSign";
    pub const LABEL_ZODIAC_SIGN: &str = "labelZodiacSign";
    pub const LABEL_SOUL_RULER: &str = "labelSoulRuler";
    pub const LABEL_BODY_RULER: &str = "labelBodyRuler";
    pub const LABEL_SOUL_PALACE: &str = "labelSoulPalace";
    pub const LABEL_BODY_PALACE: &str = "labelBodyPalace";
    pub const BUTTON_NOW: &str = "buttonNow";
    pub const BUTTON_DECADE: &str = "buttonDecade";
    pub const BUTTON_YEAR: &str = "buttonYear";
    pub const BUTTON_MONTH: &str = "buttonMonth";
    pub const BUTTON_DAY: &str = "buttonDay";
    pub const BUTTON_HOUR: &str = "buttonHour";
}

/// Language consulted when a message is missing from the requested one.
pub const FALLBACK: Language = Language::ZhCn;

static BUILTIN_DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json"));
static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Per-language message templates.
///
/// # Example
///
/// ```
/// use palace_center::{Catalog, Language};
///
/// let mut catalog = Catalog::builtin();
/// assert_eq!("五行局", catalog.t(Language::ZhCn, "labelElementType"));
/// assert_eq!("Five Elements", catalog.t(Language::EnUs, "labelElementType"));
/// // not translated: falls back to zh-CN
/// assert_eq!("五行局", catalog.t(Language::KoKr, "labelElementType"));
///
/// catalog.add_resources(Language::KoKr, [("labelElementType", "오행국")]);
/// assert_eq!("오행국", catalog.t(Language::KoKr, "labelElementType"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    resources: BTreeMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a catalog holding the bundled zh-CN and en-US messages.
    pub fn builtin() -> Self {
        BUILTIN
            .get_or_init(|| {
                Self::from_json_str(BUILTIN_DATA)
                    .unwrap_or_else(|e| panic!("error parsing bundled catalog: {e:?}"))
            })
            .clone()
    }

    /// Parses a catalog document: a JSON object keyed by language tag, each
    /// value an object of message templates.
    ///
    /// ```
    /// use palace_center::{Catalog, Language};
    ///
    /// let catalog = Catalog::from_json_str(r#"{"ja-JP": {"buttonNow": "今"}}"#).unwrap();
    /// assert_eq!("今", catalog.t(Language::JaJp, "buttonNow"));
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a catalog document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Adds the messages of `other`, overriding messages already present.
    pub fn merge(&mut self, other: Catalog) {
        for (lang, messages) in other.resources {
            self.resources.entry(lang).or_default().extend(messages);
        }
    }

    /// Adds messages for one language, overriding messages already present.
    pub fn add_resources<I, K, V>(&mut self, lang: Language, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resources
            .entry(lang)
            .or_default()
            .extend(messages.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Looks up a template in `lang`, then in [`FALLBACK`].
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        [lang, FALLBACK]
            .into_iter()
            .find_map(|l| self.resources.get(&l)?.get(key))
            .map(String::as_str)
    }

    /// Translates `key`; a missing key renders as the key itself.
    pub fn t(&self, lang: Language, key: &str) -> String {
        self.t_with(lang, key, &[])
    }

    /// Translates `key`, substituting `{{name}}` placeholders from `args`.
    /// Placeholders without an argument render as empty.
    ///
    /// ```
    /// use palace_center::{Catalog, Language};
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!("36 岁", catalog.t_with(Language::ZhCn, "age", &[("age", "36")]));
    /// ```
    pub fn t_with(&self, lang: Language, key: &str, args: &[(&str, &str)]) -> String {
        match self.lookup(lang, key) {
            Some(template) => interpolate(template, args),
            None => {
                tracing::warn!(%lang, key, "missing message");
                key.to_owned()
            }
        }
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut rt = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        rt += &rest[..start];
        let name = rest[start + 2..start + 2 + len].trim();
        if let Some((_, value)) = args.iter().find(|(n, _)| *n == name) {
            rt += value;
        }
        rest = &rest[start + 2 + len + 2..];
    }
    rt += rest;
    rt
}
