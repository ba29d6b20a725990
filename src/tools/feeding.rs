//! Feeding MCP Tools
//!
//! Turns a dog profile and weight into a feeding recommendation the client
//! can render, including notes on what data is missing.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PawfeedError, PawfeedResult};
use crate::feeding::intake::valid_amount;
use crate::feeding::{
    daily_intake_grams, format_age, intake_decision_on, is_effective_puppy_mode_on,
    weight_to_kg, IntakeSource, ADULT_AGE_MONTHS, ADULT_INTAKE_PERCENT, PUPPY_BRACKETS,
};
use crate::models::DogProfile;

/// Usage guide returned by the `feeding_instructions` tool
pub const FEEDING_INSTRUCTIONS: &str = r#"
# Pawfeed Feeding Instructions

Pawfeed recommends a daily food amount for a dog as a share of its body weight.

## What to Provide

| Field | Required | Notes |
|-------|----------|-------|
| `date_of_birth` | no | `YYYY-MM-DD` preferred; unreadable dates count as unknown |
| `weight` | no | Current body weight |
| `weight_unit` | no | `kg` (default), `g`, `lb`, `oz` |
| `use_puppy_guidelines` | no | Defaults to on for dogs under 12 months |
| `manual_intake_ratio` | no | Percent of body weight, used when no puppy bracket applies |

## How the Rate Is Chosen

1. **12 months or older:** always 2.5% of body weight. The manual ratio is ignored.
2. **Under 12 months with puppy guidelines on:** the puppy bracket rate (see `puppy_guidelines`).
3. **Otherwise:** the manual ratio if set, else 2.5%.

## Reading the Result

- `daily_grams: 0` means there is not enough data to recommend a portion. Ask for the dog's weight.
- `age_months: null` means the birth date is unknown. Ask for it before relying on puppy rates.
- Always show the `notes` to the user.
"#;

/// A feeding recommendation for one dog
#[derive(Debug, Clone, Serialize)]
pub struct FeedingPlan {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub age_months: Option<u32>,
    pub age_display: String,
    pub puppy_mode: bool,
    pub intake_percent: f64,
    pub intake_source: IntakeSource,
    pub weight_kg: Option<f64>,
    pub daily_grams: u64,
    pub notes: Vec<String>,
}

/// One row of the guideline table
#[derive(Debug, Clone, Serialize)]
pub struct GuidelineBracket {
    pub age_range: String,
    pub from_months: u32,
    pub until_months: Option<u32>,
    pub percent: f64,
}

/// Response for convert_weight
#[derive(Debug, Serialize)]
pub struct ConvertWeightResponse {
    pub value: f64,
    pub unit: String,
    pub weight_kg: f64,
}

/// Build the feeding recommendation for a profile and weight as of `today`
pub fn build_feeding_plan(
    profile: &DogProfile,
    weight_kg: Option<f64>,
    today: NaiveDate,
) -> FeedingPlan {
    let decision = intake_decision_on(profile, today);
    let puppy_mode = is_effective_puppy_mode_on(profile, today);
    let daily_grams = daily_intake_grams(weight_kg, Some(decision.percent));

    let mut notes = Vec::new();

    if decision.age_months.is_none() {
        notes.push(
            "Date of birth unknown; add it to apply age-based feeding guidelines.".to_string(),
        );
    }

    if valid_amount(weight_kg).is_none() {
        if let Some(weight) = weight_kg {
            warn!("Ignoring unusable weight {}", weight);
        }
        notes.push("Insufficient data to recommend a portion; add a current weight.".to_string());
    }

    if matches!(decision.age_months, Some(age) if age < ADULT_AGE_MONTHS)
        && !profile.puppy_guidelines_enabled()
    {
        notes.push(format!(
            "Puppy guidelines are turned off; using the {} rate of {}%.",
            decision.source.as_str(),
            decision.percent
        ));
    }

    if decision.source == IntakeSource::Adult && profile.manual_intake_ratio.is_some() {
        notes.push(format!(
            "Adult dogs use the fixed {}% rate; the manual ratio is ignored.",
            ADULT_INTAKE_PERCENT
        ));
    }

    debug!(
        "Feeding plan: age={:?} source={} percent={} grams={}",
        decision.age_months,
        decision.source.as_str(),
        decision.percent,
        daily_grams
    );

    FeedingPlan {
        name: profile.name.clone(),
        date_of_birth: profile.date_of_birth.into(),
        age_months: decision.age_months,
        age_display: format_age(decision.age_months),
        puppy_mode,
        intake_percent: decision.percent,
        intake_source: decision.source,
        weight_kg,
        daily_grams,
        notes,
    }
}

/// Puppy brackets followed by the adult rate
pub fn puppy_guideline_table() -> Vec<GuidelineBracket> {
    let mut rows: Vec<GuidelineBracket> = PUPPY_BRACKETS
        .iter()
        .map(|b| GuidelineBracket {
            age_range: format!("{}-{} months", b.from_months, b.until_months),
            from_months: b.from_months,
            until_months: Some(b.until_months),
            percent: b.percent,
        })
        .collect();

    rows.push(GuidelineBracket {
        age_range: format!("{}+ months", ADULT_AGE_MONTHS),
        from_months: ADULT_AGE_MONTHS,
        until_months: None,
        percent: ADULT_INTAKE_PERCENT,
    });

    rows
}

/// Convert a weight to kilograms, failing on an unknown unit
pub fn convert_weight(value: f64, unit: &str) -> PawfeedResult<ConvertWeightResponse> {
    let weight_kg =
        weight_to_kg(value, unit).ok_or_else(|| PawfeedError::UnknownUnit(unit.to_string()))?;

    Ok(ConvertWeightResponse {
        value,
        unit: unit.trim().to_lowercase(),
        weight_kg,
    })
}

/// Normalize an optional weight in an optional unit (kg when absent) to kilograms
pub fn resolve_weight(weight: Option<f64>, unit: Option<&str>) -> PawfeedResult<Option<f64>> {
    match (weight, unit) {
        (None, _) => Ok(None),
        (Some(value), None) => Ok(Some(value)),
        (Some(value), Some(unit)) => convert_weight(value, unit).map(|r| Some(r.weight_kg)),
    }
}

/// Read a dog profile from JSON; unreadable birth dates become unknown
pub fn parse_profile_json(json: &str) -> PawfeedResult<DogProfile> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize any tool response as pretty JSON
pub fn to_pretty_json<T: Serialize>(value: &T) -> PawfeedResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BirthDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_puppy_plan() {
        let profile = DogProfile {
            name: Some("Mochi".to_string()),
            ..DogProfile::new(BirthDate::parse("2026-07-01"))
        };
        let plan = build_feeding_plan(&profile, Some(3.0), today());

        assert_eq!(plan.name.as_deref(), Some("Mochi"));
        assert_eq!(plan.date_of_birth.as_deref(), Some("2026-07-01"));
        assert_eq!(plan.age_months, Some(3));
        assert_eq!(plan.age_display, "3 months");
        assert!(plan.puppy_mode);
        assert_eq!(plan.intake_percent, 10.0);
        assert_eq!(plan.intake_source, IntakeSource::PuppyGuideline);
        assert_eq!(plan.daily_grams, 300);
        assert!(plan.notes.is_empty());
    }

    #[test]
    fn test_adult_plan_notes_ignored_manual_ratio() {
        let profile = DogProfile::new(BirthDate::parse("2020-01-15")).with_manual_intake_ratio(5.0);
        let plan = build_feeding_plan(&profile, Some(20.0), today());

        assert!(!plan.puppy_mode);
        assert_eq!(plan.intake_percent, 2.5);
        assert_eq!(plan.daily_grams, 500);
        assert_eq!(plan.notes.len(), 1);
        assert!(plan.notes[0].contains("manual ratio is ignored"));
    }

    #[test]
    fn test_plan_without_data() {
        let plan = build_feeding_plan(&DogProfile::default(), None, today());

        assert_eq!(plan.age_months, None);
        assert_eq!(plan.age_display, "unknown age");
        assert_eq!(plan.date_of_birth, None);
        assert_eq!(plan.intake_source, IntakeSource::Default);
        assert_eq!(plan.daily_grams, 0);
        assert_eq!(plan.notes.len(), 2);
    }

    #[test]
    fn test_plan_with_guidelines_disabled() {
        let profile = DogProfile::new(BirthDate::parse("2026-07-01"))
            .with_puppy_guidelines(false)
            .with_manual_intake_ratio(7.0);
        let plan = build_feeding_plan(&profile, Some(4.0), today());

        assert!(!plan.puppy_mode);
        assert_eq!(plan.intake_percent, 7.0);
        assert_eq!(plan.daily_grams, 280);
        assert!(plan.notes[0].contains("manual rate of 7%"));
    }

    #[test]
    fn test_tiny_weight_is_not_missing_data() {
        let profile = DogProfile::new(BirthDate::parse("2020-01-15"));
        let plan = build_feeding_plan(&profile, Some(0.004), today());

        assert_eq!(plan.daily_grams, 0);
        assert_eq!(plan.weight_kg, Some(0.004));
        assert!(plan.notes.is_empty());
    }

    #[test]
    fn test_invalid_weight_is_missing_data() {
        let profile = DogProfile::new(BirthDate::parse("2020-01-15"));
        for weight in [-2.0, f64::NAN] {
            let plan = build_feeding_plan(&profile, Some(weight), today());
            assert_eq!(plan.daily_grams, 0);
            assert_eq!(plan.notes.len(), 1);
            assert!(plan.notes[0].starts_with("Insufficient data"));
        }
    }

    #[test]
    fn test_parse_profile_json() {
        let profile = parse_profile_json(
            r#"{"name": "Pip", "date_of_birth": "2026-07-01", "use_puppy_guidelines": false, "manual_intake_ratio": 5}"#,
        )
        .unwrap();
        let plan = build_feeding_plan(&profile, Some(2.0), today());

        assert_eq!(plan.name.as_deref(), Some("Pip"));
        assert_eq!(plan.intake_source, IntakeSource::Manual);
        assert_eq!(plan.daily_grams, 100);

        assert!(matches!(
            parse_profile_json("[1, 2]"),
            Err(PawfeedError::Serialization(_))
        ));
    }

    #[test]
    fn test_puppy_guideline_table() {
        let table = puppy_guideline_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table[0].age_range, "0-2 months");
        assert_eq!(table[4].percent, 4.0);
        assert_eq!(table[5].age_range, "12+ months");
        assert_eq!(table[5].until_months, None);
    }

    #[test]
    fn test_convert_weight() {
        let response = convert_weight(500.0, " G ").unwrap();
        assert_eq!(response.unit, "g");
        assert!((response.weight_kg - 0.5).abs() < 1e-9);

        let err = convert_weight(1.0, "stone").unwrap_err();
        assert!(matches!(err, PawfeedError::UnknownUnit(u) if u == "stone"));
    }

    #[test]
    fn test_resolve_weight() {
        assert_eq!(resolve_weight(None, Some("lb")).unwrap(), None);
        assert_eq!(resolve_weight(Some(8.0), None).unwrap(), Some(8.0));
        assert!(resolve_weight(Some(8.0), Some("stone")).is_err());
    }

    #[test]
    fn test_plan_serializes_snake_case_source() {
        let plan = build_feeding_plan(&DogProfile::default(), Some(10.0), today());
        let json = to_pretty_json(&plan).unwrap();
        assert!(json.contains("\"intake_source\": \"default\""));
        assert!(json.contains("\"daily_grams\": 250"));
    }
}
