//! Feeding calculation module
//!
//! Ages, intake percentages, and daily portions for dogs.

pub mod age;
pub mod intake;
pub mod units;

pub use age::{age_in_months, format_age, today};
pub use intake::{
    current_intake_percent, current_intake_percent_on, daily_intake_grams, intake_decision_on,
    is_effective_puppy_mode, is_effective_puppy_mode_on, puppy_intake_percent, IntakeDecision,
    IntakeSource, PuppyBracket, ADULT_AGE_MONTHS, ADULT_INTAKE_PERCENT, DEFAULT_INTAKE_PERCENT,
    PUPPY_BRACKETS,
};
pub use units::{kg_per_unit, weight_to_kg, G_PER_KG, KG_PER_G, KG_PER_LB, KG_PER_OZ};
