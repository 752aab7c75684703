//! Configuration types for payroll aggregation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the payroll policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Pay rate settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSettings {
    /// Hourly rate applied when no per-employee rate is supplied.
    pub default_hourly_rate: Decimal,
    /// Multiplier applied to overtime hours.
    pub overtime_multiplier: Decimal,
}

/// Overtime threshold settings.
///
/// The daily and period thresholds are independent policies: the daily
/// split feeds display aggregation, the period split feeds pay.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeSettings {
    /// Minutes per calendar day before daily overtime starts.
    pub daily_threshold_minutes: i64,
    /// Hours per bi-weekly period before period overtime starts.
    pub period_threshold_hours: Decimal,
}

/// The complete payroll configuration loaded from `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Pay rate settings.
    pub rates: RateSettings,
    /// Overtime threshold settings.
    pub overtime: OvertimeSettings,
}
