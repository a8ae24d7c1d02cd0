//! Plain-text rendering of the form's output area and footer.

use std::fmt::Write as _;

use bmi_guide_domain::{BmiForm, BmiReport, BmiServiceError, BmiServiceTrait};
use chrono::Datelike;

/// Result block shown under the buttons
pub fn render_report(report: &BmiReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Your BMI: {:.1}", report.result.value);
    let _ = writeln!(out, "BMI Category: {}", report.result.category);

    if let Some(range) = &report.normal_range {
        let _ = writeln!(
            out,
            "Normal weight range: {:.1} - {:.1} kg",
            range.min_weight_kg, range.max_weight_kg
        );
    }
    if let Some(advice) = &report.advice {
        let _ = writeln!(out, "{}", advice);
    }

    out
}

pub fn render_error(err: &BmiServiceError) -> String {
    format!("Error: {}\n", err)
}

/// Current field values, as the form would show them
pub fn render_fields<S: BmiServiceTrait>(form: &BmiForm<S>) -> String {
    let show = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };

    format!(
        "Weight (kg): {}\nHeight (cm): {}\nGender: {}\nMode: {}\n",
        show(form.weight()),
        show(form.height()),
        form.gender(),
        form.mode()
    )
}

/// Everything below the inputs: result or error, whichever is showing
pub fn render_output<S: BmiServiceTrait>(form: &BmiForm<S>) -> String {
    match (form.report(), form.error()) {
        (Some(report), _) => render_report(report),
        (None, Some(err)) => render_error(err),
        (None, None) => String::new(),
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn footer(author: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_guide_domain::{BmiInputError, Gender, ValidationMode};

    #[test]
    fn test_render_extended_report() {
        let mut form = BmiForm::with_mode(ValidationMode::Extended);
        form.set_weight("80");
        form.set_height("180");
        form.calculate();

        let text = render_output(&form);
        assert_eq!(
            text,
            format!(
                "Your BMI: 24.7\nBMI Category: Normal weight\nNormal weight range: 59.9 - 80.7 kg\n{}\n",
                bmi_guide_domain::WeightAdvice::Note { gender: Gender::Male }
            )
        );
    }

    #[test]
    fn test_render_basic_report() {
        let mut form = BmiForm::with_mode(ValidationMode::Basic);
        form.set_weight("90");
        form.set_height("170");
        form.calculate();

        assert_eq!(render_output(&form), "Your BMI: 31.1\nBMI Category: Obesity\n");
    }

    #[test]
    fn test_render_error_and_empty_state() {
        let form = BmiForm::with_mode(ValidationMode::Extended);
        assert_eq!(render_output(&form), "");

        let err = BmiServiceError::Input(BmiInputError::NonPositiveValue);
        assert_eq!(
            render_error(&err),
            "Error: Weight and height must be greater than zero.\n"
        );
    }

    #[test]
    fn test_render_fields() {
        let mut form = BmiForm::with_mode(ValidationMode::Basic);
        form.set_weight("70");

        assert_eq!(
            render_fields(&form),
            "Weight (kg): 70\nHeight (cm): -\nGender: male\nMode: basic\n"
        );
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer("Jane Doe", 2024), "© 2024 Jane Doe. All rights reserved.");
        assert!(current_year() >= 2024);
    }
}
