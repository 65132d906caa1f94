//! CLI configuration management
//!
//! Handles loading configuration from a TOML file and environment variables.
//! Command-line flags are applied on top by each command.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`BSM_PRICER_*`)
//! 3. Config file (`--config FILE`, else `bsm-pricer.toml` when present)
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "bsm-pricer.toml";

/// Largest number of decimals the output accepts.
pub const MAX_PRECISION: usize = 15;

/// Output format for pricing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Name: value` lines
    #[default]
    Plain,
    /// Box-drawn table
    Table,
    /// JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config(format!(
                "Unknown format: {}. Supported: plain, table, json",
                other
            ))),
        }
    }
}

/// Unit in which theta is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThetaConvention {
    #[default]
    PerYear,
    PerDay,
}

/// Unit in which vega is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VegaConvention {
    /// Per unit of volatility (1.00 = 100 vol points)
    #[default]
    PerUnit,
    /// Per volatility percentage point
    PerPoint,
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default output format
    pub format: OutputFormat,
    /// Decimals printed for every number
    pub precision: usize,
    /// Dividend yield used when `--dividend` is omitted
    pub default_dividend: f64,
    /// Display unit for theta
    pub theta_convention: ThetaConvention,
    /// Display unit for vega
    pub vega_convention: VegaConvention,
    /// Calendar used for per-day theta
    pub days_per_year: f64,
    /// Log level when neither `RUST_LOG` nor `--verbose` is given
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            precision: 6,
            default_dividend: 0.0,
            theta_convention: ThetaConvention::PerYear,
            vega_convention: VegaConvention::PerUnit,
            days_per_year: 365.0,
            log_level: LogLevel::Warn,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from `BSM_PRICER_*` variables.
    ///
    /// `lookup` returns the value of a variable if set; `main` passes
    /// `std::env::var`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("BSM_PRICER_FORMAT") {
            self.format = format.parse()?;
        }

        if let Some(precision) = lookup("BSM_PRICER_PRECISION") {
            self.precision = precision.trim().parse().map_err(|_| {
                CliError::Config(format!("BSM_PRICER_PRECISION is not a count: {}", precision))
            })?;
        }

        if let Some(level) = lookup("BSM_PRICER_LOG_LEVEL") {
            self.log_level = level.parse()?;
        }

        if let Some(dividend) = lookup("BSM_PRICER_DEFAULT_DIVIDEND") {
            self.default_dividend = dividend.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "BSM_PRICER_DEFAULT_DIVIDEND is not a number: {}",
                    dividend
                ))
            })?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(CliError::Config(format!(
                "precision {} exceeds {}",
                self.precision, MAX_PRECISION
            )));
        }

        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            return Err(CliError::Config(format!(
                "days_per_year must be positive, got {}",
                self.days_per_year
            )));
        }

        if !(self.default_dividend.is_finite() && self.default_dividend >= 0.0) {
            return Err(CliError::Config(format!(
                "default_dividend must be non-negative, got {}",
                self.default_dividend
            )));
        }

        Ok(())
    }

    /// Build configuration from file and environment.
    ///
    /// Returns the configuration and the file it was read from, if any.
    /// An explicit path that does not exist is an error; the default file
    /// is optional.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    fn load_with<F>(explicit: Option<&Path>, lookup: F) -> Result<(Self, Option<PathBuf>)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = match explicit {
            Some(path) if !path.exists() => {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|path| path.exists()),
        };

        let mut config = match &source {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(lookup)?;
        config.validate()?;

        Ok((config, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bsm-pricer-test-{}-{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.precision, 6);
        assert_eq!(config.default_dividend, 0.0);
        assert_eq!(config.theta_convention, ThetaConvention::PerYear);
        assert_eq!(config.vega_convention, VegaConvention::PerUnit);
        assert_eq!(config.days_per_year, 365.0);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            format = "table"
            theta_convention = "per_day"
            "#,
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.theta_convention, ThetaConvention::PerDay);
        assert_eq!(config.precision, 6);
        assert_eq!(config.vega_convention, VegaConvention::PerUnit);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: std::result::Result<CliConfig, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let path = write_temp(
            "from-file",
            "precision = 4\nvega_convention = \"per_point\"\nlog_level = \"debug\"\n",
        );
        let config = CliConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.precision, 4);
        assert_eq!(config.vega_convention, VegaConvention::PerPoint);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_from_file_invalid_values() {
        let path = write_temp("invalid", "days_per_year = 0.0\n");
        let result = CliConfig::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(CliError::Config(_))));

        let path = write_temp("garbage", "precision = \"six\"\n");
        let result = CliConfig::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("TOML")));
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                ("BSM_PRICER_FORMAT", "JSON"),
                ("BSM_PRICER_PRECISION", "3"),
                ("BSM_PRICER_LOG_LEVEL", "info"),
                ("BSM_PRICER_DEFAULT_DIVIDEND", "0.015"),
            ]))
            .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.precision, 3);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_dividend, 0.015);
    }

    #[test]
    fn test_apply_env_rejects_garbage() {
        let mut config = CliConfig::default();
        assert!(config
            .apply_env(env(&[("BSM_PRICER_PRECISION", "many")]))
            .is_err());
        assert!(config
            .apply_env(env(&[("BSM_PRICER_FORMAT", "xml")]))
            .is_err());
        assert!(config
            .apply_env(env(&[("BSM_PRICER_LOG_LEVEL", "loud")]))
            .is_err());
    }

    #[test]
    fn test_validate() {
        let config = CliConfig {
            precision: 16,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            default_dividend: -0.01,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            days_per_year: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let missing = std::env::temp_dir().join("bsm-pricer-test-does-not-exist.toml");
        let result = CliConfig::load_with(Some(missing.as_path()), env(&[]));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_explicit_file_then_env() {
        let path = write_temp("layered", "format = \"table\"\nprecision = 2\n");
        let result = CliConfig::load_with(Some(path.as_path()), env(&[("BSM_PRICER_PRECISION", "8")]));
        std::fs::remove_file(&path).ok();

        let (config, source) = result.unwrap();
        assert_eq!(source.as_deref(), Some(path.as_path()));
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.precision, 8);
    }

    #[test]
    fn test_load_env_result_is_validated() {
        let path = write_temp("env-invalid", "");
        let result = CliConfig::load_with(Some(path.as_path()), env(&[("BSM_PRICER_PRECISION", "99")]));
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::Error.to_string(), "error");
        assert!(LogLevel::from_str("verbose").is_err());
    }
}
