//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type which assembles a
//! [`ReportConfig`] from defaults, an optional YAML file and environment
//! overrides, in that order.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};

use super::types::ReportConfig;

/// Loads and layers report configuration.
///
/// # Example
///
/// ```no_run
/// use sizp_report::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/report.yaml")?
///     .with_env_overrides()?
///     .into_config();
/// println!("Reading {}", config.report);
/// # Ok::<(), sizp_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Starts from the built-in defaults.
    pub fn defaults() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    /// Loads configuration from a YAML file.
    ///
    /// Keys missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`ReportConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %path_str, "Loaded configuration file");

        Ok(Self { config })
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> ReportResult<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides from `lookup`, keyed by `REPORT`, `INPUT_DIR`,
    /// `OUTPUT_DIR`, `CODE_TO`, `REG_NUMBER`, `ALLOW_CATEGORY_CODE`
    /// (comma-separated) and `OUTPUT_STYLE`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfigValue` for an unparsable allow-list or output
    /// style.
    pub fn with_overrides<F>(mut self, lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = &mut self.config;
        if let Some(value) = lookup("REPORT") {
            config.report = value;
        }
        if let Some(value) = lookup("INPUT_DIR") {
            config.input_dir = value.into();
        }
        if let Some(value) = lookup("OUTPUT_DIR") {
            config.output_dir = value.into();
        }
        if let Some(value) = lookup("CODE_TO") {
            config.code_to = value;
        }
        if let Some(value) = lookup("REG_NUMBER") {
            config.reg_number = value;
        }
        if let Some(value) = lookup("ALLOW_CATEGORY_CODE") {
            config.allow_category_code = parse_code_list("ALLOW_CATEGORY_CODE", &value)?;
        }
        if let Some(value) = lookup("OUTPUT_STYLE") {
            config.output_style =
                value
                    .parse()
                    .map_err(|message| ReportError::InvalidConfigValue {
                        key: "OUTPUT_STYLE".to_string(),
                        message,
                    })?;
        }
        debug!(?config, "Configuration after overrides");
        Ok(self)
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportConfig {
        self.config
    }
}

fn parse_code_list(key: &str, value: &str) -> ReportResult<Vec<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ReportError::InvalidConfigValue {
                    key: key.to_string(),
                    message: format!("'{part}' is not a category code"),
                })
        })
        .collect()
}
