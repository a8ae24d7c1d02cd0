pub mod advisor;
pub mod bmi;
pub mod calculator;
pub mod validation;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use bmi::{create_default_bmi_service, BmiService, BmiServiceError, BmiServiceTrait};
pub use validation::BmiInputError;

#[cfg(test)]
pub use bmi::MockBmiServiceTrait;
