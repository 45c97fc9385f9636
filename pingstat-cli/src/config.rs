//! Configuration file support for the pingstat CLI

use pingstat::SeqSpace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Analysis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Size of the probe sequence-number space
    #[serde(default = "default_modulus")]
    pub modulus: u32,
}

fn default_modulus() -> u32 {
    pingstat::analysis::DEFAULT_MODULUS
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            modulus: default_modulus(),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

/// Report settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format
    #[serde(default)]
    pub format: ReportFormat,
    /// Include the RTT frequency table in text output
    #[serde(default)]
    pub distribution: bool,
}

/// Combined configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create example configuration
    pub fn example() -> Self {
        Config {
            analysis: AnalysisConfig { modulus: 65_536 },
            report: ReportConfig {
                format: ReportFormat::Text,
                distribution: true,
            },
        }
    }

    /// Check values that TOML alone cannot constrain
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.seq_space().map(|_| ())
    }

    /// Sequence space for the configured modulus
    pub fn seq_space(&self) -> Result<SeqSpace, ConfigError> {
        SeqSpace::new(self.analysis.modulus).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
