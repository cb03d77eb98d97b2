//! Configuration management for the qit shell.
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line flags (`--seed`, `--max-qubits`)
//! 2. Environment variables (`QIT_` prefix)
//! 3. Configuration file (YAML)
//! 4. Default values

use std::path::{Path, PathBuf};

use qit_sim::EngineConfig;
use serde::{Deserialize, Serialize};

/// File looked up under the home directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".qit/config.yaml";

/// Complete shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Engine limits
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Base seed; computer `k` (in creation order) uses `seed + k`
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::IoError(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// `~/.qit/config.yaml`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration:
    /// 1. From `config_file` if given (it must exist)
    /// 2. Otherwise from the default path if that file exists
    /// 3. Then apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => Config::default(),
            },
        };

        let config = config.merge_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Merge `QIT_*` variables into this configuration.
    ///
    /// Only variables returned by `lookup` override values; absent ones leave
    /// the fields unchanged. Unparseable values are rejected.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QIT_MAX_QUBITS") {
            self.engine.max_qubits = v.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("Invalid QIT_MAX_QUBITS: {v}"))
            })?;
        }
        if let Some(v) = lookup("QIT_SEED") {
            let seed = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::ValidationError(format!("Invalid QIT_SEED: {v}")))?;
            self.seed = Some(seed);
        }
        if let Some(v) = lookup("QIT_LOG_LEVEL") {
            self.logging.level = v.trim().to_lowercase();
        }
        Ok(self)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, seed: Option<u64>, max_qubits: Option<usize>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(max) = max_qubits {
            self.engine.max_qubits = max;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("Invalid engine.max_qubits: {e}")))?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
