//! Age calculations
//!
//! Whole-month ages from birth dates, and their human-readable form.

use chrono::{Datelike, NaiveDate};

use crate::models::BirthDate;

/// The current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Whole months elapsed between `date_of_birth` and `today`.
///
/// A month counts once its monthly anniversary has been reached, so a dog born
/// on the 20th turns one month old on the 20th of the next month. Birth dates
/// after `today` clamp to 0. Returns `None` when the birth date is unknown.
pub fn age_in_months(date_of_birth: &BirthDate, today: NaiveDate) -> Option<u32> {
    let dob = date_of_birth.date()?;

    let mut months = (today.year() - dob.year()) * 12 + today.month() as i32 - dob.month() as i32;
    if today.day() < dob.day() {
        months -= 1;
    }

    Some(months.max(0) as u32)
}

/// Render an age in months as text, e.g. "1 year 3 months"
pub fn format_age(age_months: Option<u32>) -> String {
    let Some(months) = age_months else {
        return "unknown age".to_string();
    };

    let years = months / 12;
    let rest = months % 12;

    match (years, rest) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
