//! Core error types for kairos-core.
//!
//! Malformed text and unknown categories never reach this module: the
//! classifier, composer and tracker recover from those locally. What remains
//! is storage, configuration and the scenario state machine, whose contract
//! violations must reach the caller.

use std::path::PathBuf;
use thiserror::Error;

use crate::scenario::SessionState;

/// Core error type for kairos-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario state machine violations
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Scenario engine contract violations.
///
/// These indicate the caller is out of sync with the session state; they are
/// not recoverable runtime conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Operation invoked outside its valid predecessor state
    #[error("cannot {operation} while session is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: SessionState,
    },

    /// Choice id not present in the active scenario
    #[error("choice '{choice_id}' does not belong to scenario '{scenario_id}'")]
    UnknownChoice {
        scenario_id: String,
        choice_id: String,
    },

    /// The library offers no candidate at all for the requested hint
    #[error("scenario library has no candidates")]
    NoScenarios,
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_names_operation_and_state() {
        let err = ScenarioError::InvalidTransition {
            operation: "select a choice",
            state: SessionState::Idle,
        };
        assert_eq!(err.to_string(), "cannot select a choice while session is idle");
    }

    #[test]
    fn scenario_error_converts_into_core_error() {
        let core: CoreError = ScenarioError::NoScenarios.into();
        assert!(matches!(core, CoreError::Scenario(ScenarioError::NoScenarios)));
    }
}
