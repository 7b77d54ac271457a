//! Errors reported when parsing input or loading configuration.
//!
//! Display logic never fails; only the boundaries that turn text into typed
//! values return [`Error`].

use std::path::PathBuf;

/// Errors of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A date string could not be split into year, month and day.
    #[error("invalid date string {0:?}")]
    InvalidDate(String),
    /// The language tag is not one of the supported locales.
    #[error("unsupported language tag {0:?}")]
    UnknownLanguage(String),
    /// Hour slots are numbered `0..=11`.
    #[error("hour slot {0} out of range 0..=11")]
    HourSlot(u8),
    /// A navigation scope name was not recognized.
    #[error("unknown scope {0:?}")]
    UnknownScope(String),
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON document")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
