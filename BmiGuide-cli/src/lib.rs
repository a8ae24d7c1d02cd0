// BmiGuide-cli lib.rs
//
// Terminal front end for the BmiGuide calculator form.

pub mod cli;
pub mod config;
pub mod entities;
pub mod interactive;
pub mod render;

use std::io::Write;

use bmi_guide_domain::{BmiForm, BmiServiceTrait, CalculateOutcome};

use crate::entities::{PublicCalculation, PublicErrorResponse};

/// Run one Calculate on the form and print the outcome
///
/// Returns what the calculation did so the caller can pick an exit code.
pub fn run_once<S, W>(
    form: &mut BmiForm<S>,
    json: bool,
    output: &mut W,
) -> anyhow::Result<CalculateOutcome>
where
    S: BmiServiceTrait,
    W: Write,
{
    let outcome = form.calculate();

    if json {
        let body = match (outcome, form.report(), form.error()) {
            (CalculateOutcome::Calculated, Some(report), _) => PublicCalculation::Ok {
                report: report.clone(),
            },
            (CalculateOutcome::Rejected, _, Some(err)) => PublicCalculation::Error {
                error: PublicErrorResponse::from(err),
            },
            _ => PublicCalculation::Skipped,
        };
        serde_json::to_writer_pretty(&mut *output, &body)?;
        writeln!(output)?;
    } else {
        write!(output, "{}", render::render_output(form))?;
    }

    Ok(outcome)
}
