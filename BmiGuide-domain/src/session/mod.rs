//! State of the single calculator form
//!
//! The form owns the raw field text, the gender selector and whatever the
//! last "Calculate" produced. Nothing outlives a `reset`.

use tracing::{debug, info};

use crate::entities::bmi::BmiReport;
use crate::entities::measurement::{CalculateBmiRequest, Gender, ValidationMode};
use crate::services::bmi::{BmiService, BmiServiceError, BmiServiceTrait};
use crate::services::validation::BmiInputError;

/// What a "Calculate" did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculateOutcome {
    /// A new report replaced the previous one
    Calculated,
    /// The input was refused and an error message is now shown
    Rejected,
    /// Basic mode with an empty field: nothing changed
    Skipped,
}

/// The calculator form
#[derive(Debug)]
pub struct BmiForm<S = BmiService> {
    service: S,
    weight: String,
    height: String,
    gender: Gender,
    report: Option<BmiReport>,
    error: Option<BmiServiceError>,
}

impl BmiForm<BmiService> {
    /// Form backed by the standard service in the given mode
    pub fn with_mode(mode: ValidationMode) -> Self {
        Self::new(BmiService::new(mode))
    }
}

impl<S: BmiServiceTrait> BmiForm<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            weight: String::new(),
            height: String::new(),
            gender: Gender::default(),
            report: None,
            error: None,
        }
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight = weight.into();
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.height = height.into();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn mode(&self) -> ValidationMode {
        self.service.mode()
    }

    /// Last successful report, if one is showing
    pub fn report(&self) -> Option<&BmiReport> {
        self.report.as_ref()
    }

    /// Message for the last refused calculation, if one is showing
    pub fn error(&self) -> Option<&BmiServiceError> {
        self.error.as_ref()
    }

    /// True when every field and message is back to its initial state
    pub fn is_cleared(&self) -> bool {
        self.weight.is_empty()
            && self.height.is_empty()
            && self.gender == Gender::default()
            && self.report.is_none()
            && self.error.is_none()
    }

    /// Snapshot of the current fields as a request
    pub fn request(&self) -> CalculateBmiRequest {
        CalculateBmiRequest {
            weight: self.weight.clone(),
            height: self.height.clone(),
            gender: self.gender,
        }
    }

    /// Run validation and calculation on the current fields
    pub fn calculate(&mut self) -> CalculateOutcome {
        match self.service.generate_report(&self.request()) {
            Ok(report) => {
                info!(
                    bmi = report.result.value,
                    category = %report.result.category,
                    "BMI calculated"
                );
                self.report = Some(report);
                self.error = None;
                CalculateOutcome::Calculated
            }
            Err(BmiServiceError::Input(BmiInputError::MissingInput))
                if self.service.mode() == ValidationMode::Basic =>
            {
                debug!("Empty field in basic mode, nothing to calculate");
                CalculateOutcome::Skipped
            }
            Err(err) => {
                debug!(error = %err, "Calculation refused");
                self.report = None;
                self.error = Some(err);
                CalculateOutcome::Rejected
            }
        }
    }

    /// Clear every field and message
    pub fn reset(&mut self) {
        self.weight.clear();
        self.height.clear();
        self.gender = Gender::default();
        self.report = None;
        self.error = None;
    }
}

impl Default for BmiForm<BmiService> {
    fn default() -> Self {
        Self::new(BmiService::default())
    }
}
