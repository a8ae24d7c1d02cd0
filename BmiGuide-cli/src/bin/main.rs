use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use bmi_guide_cli::cli::Args;
use bmi_guide_cli::config::AppConfig;
use bmi_guide_cli::{interactive, render, run_once};
use bmi_guide_domain::{BmiForm, BmiService, CalculateOutcome};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The main entry point for the BmiGuide terminal form
///
/// This function:
/// 1. Parses command-line flags
/// 2. Loads configuration from .env and the environment
/// 3. Sets up tracing on stderr
/// 4. Runs a single calculation or the interactive form
/// 5. Prints the footer
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = args.apply_to(AppConfig::load()?);

    // Default to warnings only so log lines don't interleave with the form
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(false)
            .with_writer(io::stderr))
        .with(env_filter)
        .init();

    info!(mode = %config.mode, gender = %config.default_gender, "Starting BmiGuide");

    let mut form = BmiForm::new(BmiService::new(config.mode));
    form.set_gender(config.default_gender);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = if args.is_one_shot() {
        form.set_weight(args.weight.clone().unwrap_or_default());
        form.set_height(args.height.clone().unwrap_or_default());
        match run_once(&mut form, args.json, &mut out)? {
            CalculateOutcome::Rejected => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    } else {
        interactive::run_session(&mut form, io::stdin().lock(), &mut out)
            .context("Interactive session failed")?;
        ExitCode::SUCCESS
    };

    // JSON only replaces the one-shot output; the interactive form stays text
    if !(args.json && args.is_one_shot()) {
        writeln!(out, "{}", render::footer(&config.author, render::current_year()))?;
    }

    Ok(code)
}
