use bmi_guide_domain::{Gender, ValidationMode};
use clap::Parser;

use crate::config::AppConfig;

/// BMI calculator. Pass weight and height for a single calculation, or
/// nothing to open the interactive form.
#[derive(Debug, Parser)]
#[command(name = "bmi-guide", version, about)]
pub struct Args {
    /// Weight in kilograms
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Height in centimeters
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Gender used for the normal-weight note (male or female)
    #[arg(short, long)]
    pub gender: Option<Gender>,

    /// Input checks to apply (basic or extended)
    #[arg(short, long)]
    pub mode: Option<ValidationMode>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// One-shot mode when either measurement is given on the command line
    pub fn is_one_shot(&self) -> bool {
        self.weight.is_some() || self.height.is_some()
    }

    /// Command-line flags take precedence over the environment
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(gender) = self.gender {
            config.default_gender = gender;
        }
        config
    }
}
