// Domain entities and value objects
pub mod bmi;
pub mod measurement;

// Re-export common types for easier imports
pub use bmi::{BmiCategory, BmiReport, BmiResult, NormalRange, WeightAdvice};
pub use measurement::{
    CalculateBmiRequest, ChoiceParseError, Gender, MeasurementInput, ValidationMode,
    MAX_HEIGHT_CM, MAX_WEIGHT_KG,
};
