use crate::entities::bmi::{BmiCategory, BmiResult};
use crate::entities::measurement::MeasurementInput;

/// Round to one decimal place from the exact binary value
///
/// Matches a browser's `toFixed(1)`: the stored double decides, so 24.95
/// (really 24.9499...) rounds down. Exact ties only occur at odd quarters
/// (x.25, x.75) and go away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value.abs() * 10.0).ceil().copysign(value) / 10.0;
    }

    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Raw BMI: weight in kg over height in meters squared
pub fn bmi_value(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Categorize a BMI value
///
/// Intended for the rounded value. The upper bounds are half-open so values
/// between 24.9 and 25.0 (or 29.9 and 30.0) still land in exactly one bucket.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// Compute the rounded BMI and its category
///
/// Returns `None` when the value is not finite, which only happens when the
/// input skipped the positivity check (height of zero in basic mode).
pub fn calculate_bmi(input: &MeasurementInput) -> Option<BmiResult> {
    let value = round_one_decimal(bmi_value(input.weight_kg, input.height_cm));
    if !value.is_finite() {
        return None;
    }

    Some(BmiResult {
        value,
        category: categorize_bmi(value),
    })
}
