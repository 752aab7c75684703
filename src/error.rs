//! Error types for the Timeclock Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during timesheet aggregation
//! and payroll submission handling.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Timeclock Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required field failed validation before a state transition.
    ///
    /// Validation errors block the transition locally; no collaborator
    /// call is made.
    #[error("Validation failed for '{field}': {message}")]
    ValidationError {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A state transition was requested from a state that does not allow it.
    #[error("Cannot {action} '{id}' in state '{from}'")]
    InvalidTransition {
        /// The identifier of the record the transition was attempted on.
        id: String,
        /// The state the record was in.
        from: String,
        /// The transition that was attempted (e.g., "approve", "reject").
        action: String,
    },

    /// No materialized pay period starts on the requested date.
    #[error("No pay period starting on {start_date}")]
    PeriodNotFound {
        /// The requested period start date.
        start_date: NaiveDate,
    },

    /// No payroll submission exists with the given id.
    #[error("Payroll submission not found: {id}")]
    SubmissionNotFound {
        /// The submission id that was not found.
        id: Uuid,
    },

    /// No timesheet entry exists with the given id.
    #[error("Timesheet not found: {id}")]
    TimesheetNotFound {
        /// The timesheet id that was not found.
        id: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_validation_error_displays_field_and_message() {
        let error = EngineError::ValidationError {
            field: "reason".to_string(),
            message: "must not be blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation failed for 'reason': must not be blank"
        );
    }

    #[test]
    fn test_invalid_transition_displays_state_and_action() {
        let error = EngineError::InvalidTransition {
            id: "ts_001".to_string(),
            from: "rejected".to_string(),
            action: "approve".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot approve 'ts_001' in state 'rejected'"
        );
    }

    #[test]
    fn test_period_not_found_displays_date() {
        let error = EngineError::PeriodNotFound {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        };
        assert_eq!(error.to_string(), "No pay period starting on 2025-03-02");
    }

    #[test]
    fn test_submission_not_found_displays_id() {
        let error = EngineError::SubmissionNotFound { id: Uuid::nil() };
        assert_eq!(
            error.to_string(),
            "Payroll submission not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative hours calculated".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: negative hours calculated"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_timesheet_not_found() -> EngineResult<()> {
            Err(EngineError::TimesheetNotFound {
                id: "ts_404".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_timesheet_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
