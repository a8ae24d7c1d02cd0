use bmi_guide_domain::{BmiReport, BmiServiceError};
use serde::Serialize;

/// Standardized error response format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicErrorResponse {
    /// Error message
    pub message: String,

    /// Error code for client-side handling
    pub code: String,
}

impl From<&BmiServiceError> for PublicErrorResponse {
    fn from(err: &BmiServiceError) -> Self {
        let code = match err {
            BmiServiceError::Input(input) => input.code(),
            BmiServiceError::Calculation(_) => "calculation_error",
        };

        Self {
            message: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// JSON body printed by `--json`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PublicCalculation {
    /// A report was produced
    Ok { report: BmiReport },

    /// The input was refused
    Error { error: PublicErrorResponse },

    /// Nothing to calculate (basic mode, empty field)
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_guide_domain::BmiInputError;

    #[test]
    fn test_error_response_codes() {
        let err = BmiServiceError::Input(BmiInputError::UnrealisticValue);
        let response = PublicErrorResponse::from(&err);
        assert_eq!(response.code, "unrealistic_value");
        assert!(response.message.contains("realistic"));

        let err = BmiServiceError::Calculation("BMI is undefined".to_string());
        assert_eq!(PublicErrorResponse::from(&err).code, "calculation_error");
    }

    #[test]
    fn test_status_tag() {
        let skipped = serde_json::to_value(PublicCalculation::Skipped).unwrap();
        assert_eq!(skipped["status"], "skipped");

        let error = PublicCalculation::Error {
            error: PublicErrorResponse::from(&BmiServiceError::Input(BmiInputError::MissingInput)),
        };
        let json = serde_json::to_value(error).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["code"], "missing_input");
    }
}
