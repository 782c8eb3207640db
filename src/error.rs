//! Error types for the database query probe.
//!
//! Every variant is terminal for the current invocation: the probe reports
//! the error as a CRITICAL outcome and exits. There is no retry anywhere in
//! the core; the monitoring scheduler owns rescheduling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("config file '{path}' not found or unreadable: {message}")]
    ConfigNotFound { path: String, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    ConfigParse { path: String, message: String },

    #[error("database '{name}' not found in config file")]
    DatabaseNotFound { name: String },

    #[error("query '{name}' not defined for database '{database}'")]
    QueryNotFound { database: String, name: String },

    #[error("query is not a SELECT statement: {sql}")]
    NotASelectQuery { sql: String },

    #[error("database '{database}' is missing required field '{field}'")]
    MissingConnectionField { database: String, field: String },

    #[error("connection failed: {message}")]
    Connection { message: String },

    #[error("failed to prepare query: {message}")]
    Prepare { message: String },

    #[error("query execution failed: {message}")]
    Execution { message: String },

    #[error("invalid threshold range '{input}': {message}")]
    ThresholdParse { input: String, message: String },
}

impl CheckError {
    /// Create a config-not-found error.
    pub fn config_not_found(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigNotFound {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config-parse error.
    pub fn config_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a database-not-found error.
    pub fn database_not_found(name: impl Into<String>) -> Self {
        Self::DatabaseNotFound { name: name.into() }
    }

    /// Create a query-not-found error.
    pub fn query_not_found(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self::QueryNotFound {
            database: database.into(),
            name: name.into(),
        }
    }

    /// Create a not-a-SELECT error.
    pub fn not_a_select(sql: impl Into<String>) -> Self {
        Self::NotASelectQuery { sql: sql.into() }
    }

    /// Create a missing-connection-field error.
    pub fn missing_field(database: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingConnectionField {
            database: database.into(),
            field: field.into(),
        }
    }

    /// Create a connection error carrying the driver's diagnostic text.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a prepare error.
    pub fn prepare(message: impl Into<String>) -> Self {
        Self::Prepare {
            message: message.into(),
        }
    }

    /// Create an execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    /// Create a threshold-parse error.
    pub fn threshold_parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ThresholdParse {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for probe operations.
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckError::database_not_found("SalesDB");
        assert_eq!(
            err.to_string(),
            "database 'SalesDB' not found in config file"
        );
    }

    #[test]
    fn test_query_not_found_names_database() {
        let err = CheckError::query_not_found("SalesDB", "row_count");
        let msg = err.to_string();
        assert!(msg.contains("row_count"));
        assert!(msg.contains("SalesDB"));
    }

    #[test]
    fn test_connection_error_surfaces_driver_text() {
        let err = CheckError::connection("FATAL: password authentication failed");
        assert!(err.to_string().contains("password authentication failed"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = CheckError::missing_field("SalesDB", "password");
        assert!(err.to_string().contains("missing required field 'password'"));
    }
}
