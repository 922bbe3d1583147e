use crate::measurement_parser::{parse_measurement, ParsedMeasurement};
use crate::models::format_kcal;

/// Calories for `metric` given the reference serving, when the two are comparable.
///
/// Returns `None` when either side lacks a quantity or unit, the units differ,
/// or the reference quantity is zero or not finite.
pub fn scaled_calories(reference_serving: &str, reference_calories: f64, metric: &str) -> Option<f64> {
    let base = parse_measurement(reference_serving);
    let actual = if metric.trim().is_empty() {
        ParsedMeasurement::default()
    } else {
        parse_measurement(metric)
    };

    let (Some(base_qty), Some(base_unit)) = (base.quantity, base.unit.as_deref()) else {
        return None;
    };
    let (Some(actual_qty), Some(actual_unit)) = (actual.quantity, actual.unit.as_deref()) else {
        return None;
    };
    if base_unit != actual_unit || base_qty == 0.0 || !base_qty.is_finite() {
        return None;
    }

    let scaled = actual_qty / base_qty * reference_calories;
    scaled.is_finite().then_some(scaled)
}

/// Display string for an ingredient's calories: scaled and rounded to whole
/// kcal when units match, otherwise the reference value as is.
pub fn scale_calories(reference_serving: &str, reference_calories: f64, metric: &str) -> String {
    match scaled_calories(reference_serving, reference_calories, metric) {
        Some(scaled) => format!("{:.0} kcal", scaled),
        None => format_kcal(reference_calories),
    }
}
