// BmiGuide Domain
// This crate contains the business logic for the BmiGuide calculator

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Form state driven by the Calculate and Reset actions
pub mod session;

pub use entities::{
    BmiCategory, BmiReport, BmiResult, CalculateBmiRequest, Gender, MeasurementInput,
    NormalRange, ValidationMode, WeightAdvice,
};
pub use services::{BmiInputError, BmiService, BmiServiceError, BmiServiceTrait};
pub use session::{BmiForm, CalculateOutcome};
