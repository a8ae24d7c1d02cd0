use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Upper bound for a plausible body weight, in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Upper bound for a plausible body height, in centimeters
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Raw form input as typed by the user, before any validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateBmiRequest {
    /// Weight field text, expected in kilograms
    pub weight: String,

    /// Height field text, expected in centimeters
    pub height: String,

    /// Gender selector, only used for the normal-weight note
    #[serde(default)]
    pub gender: Gender,
}

impl CalculateBmiRequest {
    pub fn new(weight: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
            gender: Gender::default(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

/// A parsed weight/height pair
///
/// The `Validate` derive only carries the plausibility ceilings; presence and
/// positivity are checked before this struct is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct MeasurementInput {
    /// Weight in kilograms
    #[validate(range(
        max = 500.0,
        code = "unrealistic_weight",
        message = "Weight cannot exceed 500 kg"
    ))]
    pub weight_kg: f64,

    /// Height in centimeters
    #[validate(range(
        max = 300.0,
        code = "unrealistic_height",
        message = "Height cannot exceed 300 cm"
    ))]
    pub height_cm: f64,
}

impl MeasurementInput {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self { weight_kg, height_cm }
    }

    /// Height converted to meters
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}

/// Gender selector shown next to the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(ChoiceParseError::Gender(other.to_string())),
        }
    }
}

/// How strictly the form checks its input
///
/// `Basic` reproduces the simple screen: it only refuses to calculate when a
/// field is empty, and does so silently. `Extended` applies the full set of
/// checks and reports every failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Basic,
    #[default]
    Extended,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Basic => write!(f, "basic"),
            ValidationMode::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(ValidationMode::Basic),
            "extended" => Ok(ValidationMode::Extended),
            other => Err(ChoiceParseError::Mode(other.to_string())),
        }
    }
}

/// Error returned when a selector value is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceParseError {
    #[error("Unknown gender '{0}', expected 'male' or 'female'")]
    Gender(String),

    #[error("Unknown validation mode '{0}', expected 'basic' or 'extended'")]
    Mode(String),
}
