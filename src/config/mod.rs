//! Configuration loading and management for the Timeclock Engine.
//!
//! This module provides functionality to load payroll policy from YAML
//! files: default rates, the overtime multiplier, and the daily and
//! per-period overtime thresholds.
//!
//! # Example
//!
//! ```no_run
//! use timeclock_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.config().policy.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimeSettings, PayrollConfig, PolicyMetadata, RateSettings};
