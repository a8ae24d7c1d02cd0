use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::measurement::{Gender, MeasurementInput};

/// BMI category based on the rounded BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(rename = "Underweight")]
    Underweight,

    /// BMI from 18.5 to 24.9
    #[serde(rename = "Normal weight")]
    NormalWeight,

    /// BMI from 25.0 to 29.9
    #[serde(rename = "Overweight")]
    Overweight,

    /// BMI of 30.0 or more
    #[serde(rename = "Obesity")]
    Obesity,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI value and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,

    /// Category of the rounded value
    pub category: BmiCategory,
}

/// Weight interval that yields a normal BMI at a given height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    /// Lowest normal weight in kilograms, one decimal place
    pub min_weight_kg: f64,

    /// Highest normal weight in kilograms, one decimal place
    pub max_weight_kg: f64,
}

/// Guidance shown under the result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WeightAdvice {
    /// Weight is above the normal range by this many kilograms
    Lose { kg: f64 },

    /// Weight is below the upper bound by this many kilograms
    Gain { kg: f64 },

    /// Weight is already normal; a static note for the selected gender
    Note { gender: Gender },
}

impl WeightAdvice {
    /// User-facing advisory text
    pub fn message(&self) -> String {
        match self {
            WeightAdvice::Lose { kg } => {
                format!("You need to lose {:.1} kg to reach the normal weight range.", kg)
            }
            WeightAdvice::Gain { kg } => {
                format!("You need to gain {:.1} kg to reach the normal weight range.", kg)
            }
            WeightAdvice::Note { gender: Gender::Male } => {
                "Your weight is in the normal range. Men usually carry more muscle mass, \
                 so a BMI near the top of the range is still healthy for most."
                    .to_string()
            }
            WeightAdvice::Note { gender: Gender::Female } => {
                "Your weight is in the normal range. Women naturally carry a higher share \
                 of body fat at the same BMI, which is healthy."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for WeightAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Everything one "Calculate" produces
///
/// `normal_range` and `advice` are only filled in extended mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub measurement: MeasurementInput,
    pub result: BmiResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_range: Option<NormalRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<WeightAdvice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Underweight");
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
        assert_eq!(BmiCategory::Overweight.to_string(), "Overweight");
        assert_eq!(BmiCategory::Obesity.to_string(), "Obesity");
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&BmiCategory::NormalWeight).unwrap();
        assert_eq!(json, "\"Normal weight\"");

        let parsed: BmiCategory = serde_json::from_str("\"Obesity\"").unwrap();
        assert_eq!(parsed, BmiCategory::Obesity);
    }

    #[test]
    fn test_advice_messages() {
        let lose = WeightAdvice::Lose { kg: 18.0 };
        assert_eq!(
            lose.message(),
            "You need to lose 18.0 kg to reach the normal weight range."
        );

        let gain = WeightAdvice::Gain { kg: 2.5 };
        assert!(gain.to_string().contains("gain 2.5 kg"));

        let male = WeightAdvice::Note { gender: Gender::Male }.message();
        let female = WeightAdvice::Note { gender: Gender::Female }.message();
        assert_ne!(male, female);
        assert!(male.starts_with("Your weight is in the normal range."));
    }

    #[test]
    fn test_report_omits_missing_sections() {
        let report = BmiReport {
            measurement: MeasurementInput::new(70.0, 175.0),
            result: BmiResult {
                value: 22.9,
                category: BmiCategory::NormalWeight,
            },
            normal_range: None,
            advice: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"]["category"], "Normal weight");
        assert!(json.get("normal_range").is_none());
        assert!(json.get("advice").is_none());
    }
}
