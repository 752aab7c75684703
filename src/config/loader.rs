//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policy configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads a `payroll.yaml` file from a directory and
/// exposes the rates and thresholds the aggregation layer needs.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── payroll.yaml   # Rates and overtime thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Default rate: ${}/h", loader.default_hourly_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing from the directory
    /// - The file contains invalid YAML
    /// - Any required field is missing
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timeclock_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), timeclock_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let payroll_path = path.as_ref().join("payroll.yaml");
        let config = Self::load_yaml::<PayrollConfig>(&payroll_path)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the default hourly rate.
    pub fn default_hourly_rate(&self) -> Decimal {
        self.config.rates.default_hourly_rate
    }

    /// Returns the overtime pay multiplier.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.config.rates.overtime_multiplier
    }

    /// Returns the daily overtime threshold in minutes.
    pub fn daily_threshold_minutes(&self) -> i64 {
        self.config.overtime.daily_threshold_minutes
    }

    /// Returns the per-period overtime threshold in hours.
    pub fn period_threshold_hours(&self) -> Decimal {
        self.config.overtime.period_threshold_hours
    }
}
