use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::entities::bmi::{BmiReport, BmiResult};
use crate::entities::measurement::{CalculateBmiRequest, MeasurementInput, ValidationMode};
use crate::services::advisor;
use crate::services::calculator;
use crate::services::validation::{self, BmiInputError};

/// BMI service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BmiServiceError {
    /// The form input was refused
    #[error(transparent)]
    Input(#[from] BmiInputError),

    /// Unchecked input produced a value that is not a number
    #[error("Calculation error: {0}")]
    Calculation(String),
}

/// Trait for BMI service operations
#[cfg_attr(test, mockall::automock)]
pub trait BmiServiceTrait {
    /// Validation mode this service applies
    fn mode(&self) -> ValidationMode;

    /// Validate raw form input
    fn validate_request(
        &self,
        request: &CalculateBmiRequest,
    ) -> Result<MeasurementInput, BmiInputError>;

    /// Compute BMI and category for validated input
    fn calculate(&self, input: &MeasurementInput) -> Result<BmiResult, BmiServiceError>;

    /// Validate, calculate and, in extended mode, attach range and advice
    fn generate_report(&self, request: &CalculateBmiRequest) -> Result<BmiReport, BmiServiceError>;
}

/// BMI service for domain logic
#[derive(Debug, Clone, Copy, Default)]
pub struct BmiService {
    mode: ValidationMode,
}

impl BmiService {
    /// Create a new BMI service
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }
}

impl BmiServiceTrait for BmiService {
    fn mode(&self) -> ValidationMode {
        self.mode
    }

    fn validate_request(
        &self,
        request: &CalculateBmiRequest,
    ) -> Result<MeasurementInput, BmiInputError> {
        validation::validate_request(request, self.mode)
    }

    fn calculate(&self, input: &MeasurementInput) -> Result<BmiResult, BmiServiceError> {
        calculator::calculate_bmi(input).ok_or_else(|| {
            warn!(?input, "BMI is not a finite number");
            BmiServiceError::Calculation(format!(
                "BMI is undefined for weight {} kg and height {} cm",
                input.weight_kg, input.height_cm
            ))
        })
    }

    #[instrument(skip(self), fields(mode = %self.mode))]
    fn generate_report(&self, request: &CalculateBmiRequest) -> Result<BmiReport, BmiServiceError> {
        let measurement = self.validate_request(request)?;
        let result = self.calculate(&measurement)?;
        debug!(bmi = result.value, category = %result.category, "Calculated BMI");

        let (normal_range, advice) = match self.mode {
            ValidationMode::Basic => (None, None),
            ValidationMode::Extended => {
                let range = advisor::normal_range(measurement.height_cm);
                let advice = advisor::advise(&measurement, result.category, &range, request.gender);
                (Some(range), Some(advice))
            }
        };

        Ok(BmiReport {
            measurement,
            result,
            normal_range,
            advice,
        })
    }
}

/// Create a BMI service with the full set of input checks
pub fn create_default_bmi_service() -> impl BmiServiceTrait {
    BmiService::new(ValidationMode::Extended)
}
