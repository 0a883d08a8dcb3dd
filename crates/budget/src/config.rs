//! Dashboard configuration.
//!
//! Every field has a default, so an absent file, an empty object and a
//! partial object are all valid. Secrets (service credentials) are not part
//! of this file; see the `sheets` crate.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalogue::{AgencyRecord, Catalogue, CatalogueError};
use crate::cost::{CostCalculator, DEFAULT_POPULATION_MILLIONS};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "GOVFUND_CONFIG";

pub const DEFAULT_SPREADSHEET_ID: &str = "15NR5PCoUTNVjTueWwwIhB4EwyCqj3BOJKj9f2FhkeGA";
pub const DEFAULT_WORKSHEET: &str = "Sheet1";
pub const DEFAULT_SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(String),
    Catalogue(CatalogueError),
    InvalidPopulation(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "cannot read {path}: {source}"),
            ConfigError::Parse(msg) => write!(f, "invalid config: {msg}"),
            ConfigError::Catalogue(e) => write!(f, "invalid catalogue: {e}"),
            ConfigError::InvalidPopulation(p) => {
                write!(f, "population must be positive and finite, got {p}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Catalogue(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl From<CatalogueError> for ConfigError {
    fn from(e: CatalogueError) -> Self {
        ConfigError::Catalogue(e)
    }
}

/// Where submissions are appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: String,
    pub worksheet: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            worksheet: DEFAULT_WORKSHEET.to_string(),
            api_base_url: DEFAULT_SHEETS_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub population_millions: f64,
    /// `None` selects the compiled-in table.
    pub agencies: Option<Vec<AgencyRecord>>,
    pub spreadsheet: SpreadsheetConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            population_millions: DEFAULT_POPULATION_MILLIONS,
            agencies: None,
            spreadsheet: SpreadsheetConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Load from `$GOVFUND_CONFIG` if set, otherwise use defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn catalogue(&self) -> Result<Catalogue, ConfigError> {
        match &self.agencies {
            Some(agencies) => Ok(Catalogue::new(agencies.iter().cloned())?),
            None => Ok(Catalogue::builtin()),
        }
    }

    pub fn cost_calculator(&self) -> Result<CostCalculator, ConfigError> {
        CostCalculator::new(self.population_millions)
            .ok_or(ConfigError::InvalidPopulation(self.population_millions))
    }
}
