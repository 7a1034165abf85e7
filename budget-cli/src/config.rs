//! TOML budget configuration.
//!
//! A budget file has one table per model:
//!
//! ```toml
//! [income]
//! gross_annual_salary = 100300
//! federal_brackets = [[11000, 0.10], [44725, 0.12]]
//! state_brackets = [[100300, 0.05]]
//! local_tax_rate = 0.032
//! # ...
//!
//! [debt]
//! rent = 1500
//! # ...
//!
//! [utilities]
//! gas_electric_car = 250
//! # ...
//! ```
//!
//! `cable` and `landline` may be left out of `[utilities]`.

use std::path::{Path, PathBuf};

use budget_core::BudgetInputs;
use thiserror::Error;
use tracing::debug;

const HOUSEHOLD_TOML: &str = include_str!("../config/household.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read budget file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid budget file '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Parses budget inputs from TOML text. `origin` only labels errors.
pub fn parse_budget(
    text: &str,
    origin: &str,
) -> Result<BudgetInputs, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })
}

pub fn load_budget(path: &Path) -> Result<BudgetInputs, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs = parse_budget(&text, &path.display().to_string())?;
    debug!(path = %path.display(), "loaded budget file");
    Ok(inputs)
}

/// The built-in sample household.
pub fn default_budget() -> Result<BudgetInputs, ConfigError> {
    parse_budget(HOUSEHOLD_TOML, "built-in household")
}
