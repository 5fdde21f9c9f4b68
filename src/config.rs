use std::env;
use std::fs;
use std::path::Path;

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One progressive tax bracket. With a calibrated table,
/// `income * rate - subtracted_amount` is continuous at each threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: f64,
    pub rate: f64,
    pub subtracted_amount: f64,
}

/// Process-wide payroll parameters, loaded once from a JSON file and
/// shared read-only across calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollConfig {
    pub overtime_multiplier_regular: f64,
    pub overtime_multiplier_weekend: f64,
    pub overtime_multiplier_holiday: f64,
    pub employee_social_insurance_rate: f64,
    pub employee_health_insurance_rate: f64,
    pub employee_unemployment_insurance_rate: f64,
    pub personal_deduction_self: f64,
    pub personal_deduction_per_dependent: f64,
    /// Ordered by ascending threshold.
    pub tax_brackets: Vec<TaxBracket>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read payroll config at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse payroll config at {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("tax_brackets must not be empty")]
    EmptyTaxBrackets,
    #[error("tax_brackets must be ordered by ascending threshold (bracket {index})")]
    UnorderedTaxBrackets { index: usize },
    #[error("{field} must not be negative")]
    NegativeRate { field: &'static str },
}

impl PayrollConfig {
    /// Loads and validates the configuration. A silently misconfigured
    /// bracket table corrupts every payslip, so validation failures are
    /// hard errors here rather than downstream oddities.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_brackets.is_empty() {
            return Err(ConfigError::EmptyTaxBrackets);
        }
        for (i, pair) in self.tax_brackets.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(ConfigError::UnorderedTaxBrackets { index: i + 1 });
            }
        }
        for bracket in &self.tax_brackets {
            if bracket.rate < 0.0 {
                return Err(ConfigError::NegativeRate {
                    field: "tax_brackets.rate",
                });
            }
        }
        let rates = [
            (
                self.employee_social_insurance_rate,
                "employee_social_insurance_rate",
            ),
            (
                self.employee_health_insurance_rate,
                "employee_health_insurance_rate",
            ),
            (
                self.employee_unemployment_insurance_rate,
                "employee_unemployment_insurance_rate",
            ),
        ];
        for (rate, field) in rates {
            if rate < 0.0 {
                return Err(ConfigError::NegativeRate { field });
            }
        }
        Ok(())
    }
}

/// Runtime settings for the batch binary, taken from the environment.
#[derive(Clone)]
pub struct Config {
    pub payroll_config_path: String,
    pub run_input_path: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            payroll_config_path: env::var("PAYROLL_CONFIG_PATH")
                .expect("PAYROLL_CONFIG_PATH must be set"),
            run_input_path: env::var("PAYROLL_RUN_INPUT")
                .expect("PAYROLL_RUN_INPUT must be set"),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        }
    }
}
