//! Dog profile model
//!
//! The caller-supplied description of a dog used by the feeding calculator.
//! Profiles are loaded elsewhere and handed in per request; nothing here is stored.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date formats accepted for birth dates, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Date-time formats whose date part is used as the birth date
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A dog's date of birth, which may not be known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum BirthDate {
    Known(NaiveDate),
    #[default]
    Unknown,
}

impl BirthDate {
    /// Parse a birth date from text.
    ///
    /// Accepts ISO dates (`2024-03-01`, `2024/03/01`), RFC 3339 and naive
    /// timestamps (only the date part is kept), and spelled-out forms such as
    /// `March 1, 2024` or `1 March 2024`. Anything else is `Unknown`.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return BirthDate::Unknown;
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return BirthDate::Known(date);
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return BirthDate::Known(dt.date_naive());
        }

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return BirthDate::Known(dt.date());
            }
        }

        BirthDate::Unknown
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            BirthDate::Known(date) => Some(*date),
            BirthDate::Unknown => None,
        }
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        BirthDate::Known(date)
    }
}

impl From<Option<String>> for BirthDate {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map_or(BirthDate::Unknown, BirthDate::parse)
    }
}

impl From<BirthDate> for Option<String> {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.date().map(|d| d.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthDate::Known(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            BirthDate::Unknown => f.write_str("unknown"),
        }
    }
}

/// Feeding-relevant information about a dog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DogProfile {
    pub name: Option<String>,
    pub date_of_birth: BirthDate,
    /// Opt-in to age-indexed puppy feeding; unset behaves as `true`
    pub use_puppy_guidelines: Option<bool>,
    /// Caregiver-specified percentage used when no puppy bracket applies
    pub manual_intake_ratio: Option<f64>,
}

impl DogProfile {
    pub fn new(date_of_birth: impl Into<BirthDate>) -> Self {
        Self {
            date_of_birth: date_of_birth.into(),
            ..Self::default()
        }
    }

    pub fn with_puppy_guidelines(mut self, enabled: bool) -> Self {
        self.use_puppy_guidelines = Some(enabled);
        self
    }

    pub fn with_manual_intake_ratio(mut self, ratio: f64) -> Self {
        self.manual_intake_ratio = Some(ratio);
        self
    }

    /// Whether the caregiver opted into puppy guidelines (unset counts as yes)
    pub fn puppy_guidelines_enabled(&self) -> bool {
        self.use_puppy_guidelines.unwrap_or(true)
    }
}
