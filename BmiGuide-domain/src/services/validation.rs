use thiserror::Error;
use tracing::warn;
use validator::Validate;

use crate::entities::measurement::{
    CalculateBmiRequest, MeasurementInput, ValidationMode, MAX_HEIGHT_CM, MAX_WEIGHT_KG,
};

/// Reasons the form refuses to calculate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BmiInputError {
    /// A field is empty or does not hold a number
    #[error("Please enter both weight and height.")]
    MissingInput,

    /// A field is zero or negative
    #[error("Weight and height must be greater than zero.")]
    NonPositiveValue,

    /// A field is beyond what a human body can measure
    #[error("Please enter realistic values (weight up to {} kg, height up to {} cm).", MAX_WEIGHT_KG, MAX_HEIGHT_CM)]
    UnrealisticValue,
}

impl BmiInputError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            BmiInputError::MissingInput => "missing_input",
            BmiInputError::NonPositiveValue => "non_positive_value",
            BmiInputError::UnrealisticValue => "unrealistic_value",
        }
    }
}

/// Read a form field the way a browser number input does
///
/// Blank text, text that is not a number, and non-finite numbers all read as
/// an empty field.
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Validate raw form input
///
/// Checks run in order (missing, non-positive, unrealistic) and the first
/// failure is returned. Basic mode stops after the missing-input check.
pub fn validate_request(
    request: &CalculateBmiRequest,
    mode: ValidationMode,
) -> Result<MeasurementInput, BmiInputError> {
    let (weight_kg, height_cm) = match (parse_field(&request.weight), parse_field(&request.height)) {
        (Some(weight), Some(height)) => (weight, height),
        _ => return Err(BmiInputError::MissingInput),
    };

    let input = MeasurementInput::new(weight_kg, height_cm);
    if mode == ValidationMode::Basic {
        return Ok(input);
    }

    if weight_kg <= 0.0 || height_cm <= 0.0 {
        warn!(weight_kg, height_cm, "Rejected non-positive measurement");
        return Err(BmiInputError::NonPositiveValue);
    }

    if let Err(validation_errors) = input.validate() {
        let fields: Vec<&str> = validation_errors.field_errors().keys().copied().collect();
        warn!(?fields, weight_kg, height_cm, "Rejected unrealistic measurement");
        return Err(BmiInputError::UnrealisticValue);
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extended(weight: &str, height: &str) -> Result<MeasurementInput, BmiInputError> {
        validate_request(&CalculateBmiRequest::new(weight, height), ValidationMode::Extended)
    }

    #[test]
    fn test_valid_request() {
        let input = extended("70", "175").unwrap();
        assert_eq!(input, MeasurementInput::new(70.0, 175.0));

        let input = extended(" 72.5 ", "180.2").unwrap();
        assert_eq!(input.weight_kg, 72.5);
        assert_eq!(input.height_cm, 180.2);
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(extended("", "175"), Err(BmiInputError::MissingInput));
        assert_eq!(extended("70", "   "), Err(BmiInputError::MissingInput));
        assert_eq!(extended("abc", "175"), Err(BmiInputError::MissingInput));
        assert_eq!(extended("inf", "175"), Err(BmiInputError::MissingInput));
    }

    #[test]
    fn test_non_positive_value() {
        assert_eq!(extended("0", "175"), Err(BmiInputError::NonPositiveValue));
        assert_eq!(extended("70", "0"), Err(BmiInputError::NonPositiveValue));
        assert_eq!(extended("-5", "175"), Err(BmiInputError::NonPositiveValue));
    }

    #[test]
    fn test_unrealistic_value() {
        assert_eq!(extended("600", "175"), Err(BmiInputError::UnrealisticValue));
        assert_eq!(extended("70", "301"), Err(BmiInputError::UnrealisticValue));
        assert!(extended("500", "300").is_ok());
    }

    #[test]
    fn test_checks_run_in_order() {
        // Missing wins over non-positive, non-positive wins over unrealistic
        assert_eq!(extended("", "0"), Err(BmiInputError::MissingInput));
        assert_eq!(extended("600", "0"), Err(BmiInputError::NonPositiveValue));
    }

    #[test]
    fn test_basic_mode_only_checks_presence() {
        let basic = |w: &str, h: &str| {
            validate_request(&CalculateBmiRequest::new(w, h), ValidationMode::Basic)
        };

        assert_eq!(basic("", "175"), Err(BmiInputError::MissingInput));
        assert!(basic("0", "175").is_ok());
        assert!(basic("600", "175").is_ok());
        assert!(basic("70", "0").is_ok());
    }

    #[test]
    fn test_error_messages_and_codes() {
        assert_eq!(
            BmiInputError::MissingInput.to_string(),
            "Please enter both weight and height."
        );
        assert!(BmiInputError::UnrealisticValue.to_string().contains("500 kg"));
        assert_eq!(BmiInputError::NonPositiveValue.code(), "non_positive_value");
    }
}
