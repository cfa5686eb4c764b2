//! Configuration system for numerical semigroup searches.
//!
//! Load search configuration from TOML or YAML files to pick the exact
//! Frobenius strategy, the bound criterion and a cap on lattice size without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use frobenius_config::{FrobeniusStrategy, SearchConfig};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     frobenius_strategy = "upward_run"
//!     bound_strategy = "schur"
//!     max_lattice_size = 1000000
//! "#).unwrap();
//!
//! assert_eq!(config.frobenius_strategy, FrobeniusStrategy::UpwardRun);
//! assert_eq!(config.max_lattice_size, Some(1_000_000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use frobenius_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Exact Frobenius number strategy.
    #[serde(default)]
    pub frobenius_strategy: FrobeniusStrategy,

    /// Criterion for the fast Frobenius upper bound.
    #[serde(default)]
    pub bound_strategy: BoundStrategy,

    /// Largest lattice a single search call may enumerate (None = unlimited).
    #[serde(default)]
    pub max_lattice_size: Option<u64>,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()
    }

    /// Sets the exact Frobenius strategy.
    pub fn with_frobenius_strategy(mut self, strategy: FrobeniusStrategy) -> Self {
        self.frobenius_strategy = strategy;
        self
    }

    /// Sets the bound criterion.
    pub fn with_bound_strategy(mut self, strategy: BoundStrategy) -> Self {
        self.bound_strategy = strategy;
        self
    }

    /// Caps the lattice size of a single search call.
    pub fn with_max_lattice_size(mut self, limit: u64) -> Self {
        self.max_lattice_size = Some(limit);
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.max_lattice_size == Some(0) {
            return Err(ConfigError::Invalid(
                "max_lattice_size must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// How the exact Frobenius number is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrobeniusStrategy {
    /// Scan downward from the upper bound; the first non-member is the answer.
    #[default]
    DownwardScan,

    /// Scan upward from 1 until a run of `multiplicity` consecutive members.
    UpwardRun,
}

impl fmt::Display for FrobeniusStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrobeniusStrategy::DownwardScan => write!(f, "DownwardScan"),
            FrobeniusStrategy::UpwardRun => write!(f, "UpwardRun"),
        }
    }
}

/// Criterion for the Frobenius upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundStrategy {
    /// Minimum over every applicable criterion.
    #[default]
    Best,

    /// `a*b - a - b` over the smallest coprime generator pair, Schur otherwise.
    SmallestPair,

    /// Schur's bound `(a_min - 1)(a_max - 1) - 1`.
    Schur,
}

impl fmt::Display for BoundStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundStrategy::Best => write!(f, "Best"),
            BoundStrategy::SmallestPair => write!(f, "SmallestPair"),
            BoundStrategy::Schur => write!(f, "Schur"),
        }
    }
}
