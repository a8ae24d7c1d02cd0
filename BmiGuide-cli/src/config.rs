//! Application configuration read from the environment (and `.env`).

use anyhow::{Context, Result};
use bmi_guide_domain::{Gender, ValidationMode};

/// Name shown in the footer when `BMI_GUIDE_AUTHOR` is unset
pub const DEFAULT_AUTHOR: &str = "Mohannad Nasreldin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Validation mode. Read from BMI_GUIDE_MODE.
    pub mode: ValidationMode,

    /// Initial gender selector. Read from BMI_GUIDE_DEFAULT_GENDER.
    pub default_gender: Gender,

    /// Footer name. Read from BMI_GUIDE_AUTHOR.
    pub author: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            default_gender: Gender::default(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(mode) = get("BMI_GUIDE_MODE") {
            cfg.mode = mode.parse().context("Invalid BMI_GUIDE_MODE")?;
        }
        if let Some(gender) = get("BMI_GUIDE_DEFAULT_GENDER") {
            cfg.default_gender = gender.parse().context("Invalid BMI_GUIDE_DEFAULT_GENDER")?;
        }
        if let Some(author) = get("BMI_GUIDE_AUTHOR") {
            cfg.author = author;
        }

        Ok(cfg)
    }
}
