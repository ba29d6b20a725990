//! Intake calculations
//!
//! Decides what share of body weight a dog should eat per day and turns that
//! into grams. Every function here is total: missing or invalid input degrades
//! to `None`, `0`, or the default rate instead of an error.

use chrono::NaiveDate;
use serde::Serialize;

use super::age::{age_in_months, today};
use super::units::G_PER_KG;
use crate::models::DogProfile;

/// Daily intake for dogs aged 12 months or more, percent of body weight
pub const ADULT_INTAKE_PERCENT: f64 = 2.5;
/// Daily intake when nothing else applies, percent of body weight
pub const DEFAULT_INTAKE_PERCENT: f64 = 2.5;
/// Age at which a dog stops being a puppy
pub const ADULT_AGE_MONTHS: u32 = 12;

/// A half-open age range `[from_months, until_months)` with a flat intake rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PuppyBracket {
    pub from_months: u32,
    pub until_months: u32,
    pub percent: f64,
}

/// Puppy feeding guidelines, ordered by age
pub const PUPPY_BRACKETS: [PuppyBracket; 5] = [
    PuppyBracket { from_months: 0, until_months: 2, percent: 10.0 },
    PuppyBracket { from_months: 2, until_months: 4, percent: 10.0 },
    PuppyBracket { from_months: 4, until_months: 6, percent: 8.0 },
    PuppyBracket { from_months: 6, until_months: 8, percent: 6.0 },
    PuppyBracket { from_months: 8, until_months: ADULT_AGE_MONTHS, percent: 4.0 },
];

/// Which rule produced an intake percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeSource {
    Adult,
    PuppyGuideline,
    Manual,
    Default,
}

impl IntakeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeSource::Adult => "adult",
            IntakeSource::PuppyGuideline => "puppy_guideline",
            IntakeSource::Manual => "manual",
            IntakeSource::Default => "default",
        }
    }
}

/// An intake percentage together with how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntakeDecision {
    pub percent: f64,
    pub source: IntakeSource,
    pub age_months: Option<u32>,
}

/// Flat puppy rate for an age, or `None` outside the puppy brackets
pub fn puppy_intake_percent(age_months: Option<u32>) -> Option<f64> {
    let age = age_months?;
    PUPPY_BRACKETS
        .iter()
        .find(|b| age >= b.from_months && age < b.until_months)
        .map(|b| b.percent)
}

/// Puppy mode: a known age under 12 months with guidelines not switched off
fn puppy_mode_applies(age_months: Option<u32>, profile: &DogProfile) -> bool {
    matches!(age_months, Some(age) if age < ADULT_AGE_MONTHS) && profile.puppy_guidelines_enabled()
}

fn valid_percent(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

pub(crate) fn valid_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Choose the intake percentage for a profile as of `today`.
///
/// Adults always get the adult rate. Puppies in guideline mode get their
/// bracket's rate. Everyone else gets the manual ratio if it is a usable
/// positive number, otherwise the default rate.
pub fn intake_decision_on(profile: &DogProfile, today: NaiveDate) -> IntakeDecision {
    let age_months = age_in_months(&profile.date_of_birth, today);

    if matches!(age_months, Some(age) if age >= ADULT_AGE_MONTHS) {
        return IntakeDecision {
            percent: ADULT_INTAKE_PERCENT,
            source: IntakeSource::Adult,
            age_months,
        };
    }

    if puppy_mode_applies(age_months, profile) {
        if let Some(percent) = puppy_intake_percent(age_months) {
            return IntakeDecision {
                percent,
                source: IntakeSource::PuppyGuideline,
                age_months,
            };
        }
    }

    match valid_percent(profile.manual_intake_ratio) {
        Some(percent) => IntakeDecision {
            percent,
            source: IntakeSource::Manual,
            age_months,
        },
        None => IntakeDecision {
            percent: DEFAULT_INTAKE_PERCENT,
            source: IntakeSource::Default,
            age_months,
        },
    }
}

/// Intake percentage for a profile as of `today`
pub fn current_intake_percent_on(profile: &DogProfile, today: NaiveDate) -> f64 {
    intake_decision_on(profile, today).percent
}

/// Intake percentage for a profile as of the local current date
pub fn current_intake_percent(profile: &DogProfile) -> f64 {
    current_intake_percent_on(profile, today())
}

/// Whether puppy guidelines drive the intake for this profile as of `today`
pub fn is_effective_puppy_mode_on(profile: &DogProfile, today: NaiveDate) -> bool {
    puppy_mode_applies(age_in_months(&profile.date_of_birth, today), profile)
}

/// Whether puppy guidelines drive the intake for this profile right now
pub fn is_effective_puppy_mode(profile: &DogProfile) -> bool {
    is_effective_puppy_mode_on(profile, today())
}

/// Daily food in whole grams for a body weight and intake percentage.
///
/// Returns 0 when either input is missing, negative, or not finite.
pub fn daily_intake_grams(weight_kg: Option<f64>, intake_percent: Option<f64>) -> u64 {
    let (Some(weight), Some(percent)) = (valid_amount(weight_kg), valid_amount(intake_percent))
    else {
        return 0;
    };

    (weight * G_PER_KG * percent / 100.0).round() as u64
}
