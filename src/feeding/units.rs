//! Weight units
//!
//! Conversion factors for body weights entered in units other than kilograms.

// ============================================================================
// Weight Conversion Constants
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Kilograms per gram
pub const KG_PER_G: f64 = 0.001;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592_37;
/// Kilograms per ounce
pub const KG_PER_OZ: f64 = 0.028_349_523_125;

/// Get the conversion factor to kilograms for a weight unit
pub fn kg_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => Some(1.0),
        "g" | "gram" | "grams" => Some(KG_PER_G),
        "lb" | "lbs" | "pound" | "pounds" => Some(KG_PER_LB),
        "oz" | "ounce" | "ounces" => Some(KG_PER_OZ),
        _ => None,
    }
}

/// Convert a weight in the given unit to kilograms
///
/// Returns None for an unrecognized unit.
pub fn weight_to_kg(value: f64, unit: &str) -> Option<f64> {
    kg_per_unit(unit).map(|factor| value * factor)
}
