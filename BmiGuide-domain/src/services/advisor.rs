use crate::entities::bmi::{BmiCategory, NormalRange, WeightAdvice};
use crate::entities::measurement::{Gender, MeasurementInput};
use crate::services::calculator::round_one_decimal;

/// Lowest BMI counted as normal weight
pub const NORMAL_BMI_MIN: f64 = 18.5;

/// Highest BMI counted as normal weight
pub const NORMAL_BMI_MAX: f64 = 24.9;

/// Weight interval giving a normal BMI at this height
pub fn normal_range(height_cm: f64) -> NormalRange {
    let height_m = height_cm / 100.0;
    let height_sq = height_m * height_m;

    NormalRange {
        min_weight_kg: round_one_decimal(NORMAL_BMI_MIN * height_sq),
        max_weight_kg: round_one_decimal(NORMAL_BMI_MAX * height_sq),
    }
}

/// Signed distance from the top of the normal range, one decimal place
pub fn weight_difference(weight_kg: f64, range: &NormalRange) -> f64 {
    round_one_decimal(weight_kg - range.max_weight_kg)
}

/// Pick the advisory text for a calculated category
///
/// Outside the normal range the advice is measured against the upper bound
/// of the range: positive means lose, anything else means gain.
pub fn advise(
    input: &MeasurementInput,
    category: BmiCategory,
    range: &NormalRange,
    gender: Gender,
) -> WeightAdvice {
    if category == BmiCategory::NormalWeight {
        return WeightAdvice::Note { gender };
    }

    let diff = weight_difference(input.weight_kg, range);
    if diff > 0.0 {
        WeightAdvice::Lose { kg: diff }
    } else {
        WeightAdvice::Gain { kg: diff.abs() }
    }
}
