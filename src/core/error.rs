//! Typed error handling for the Leadger dashboard
//!
//! The filter/sort engine itself never fails; every error here comes from
//! the surrounding layers (record ingestion, request validation,
//! configuration, settings files and the chat boundary).
//!
//! # Error Categories
//!
//! - [`RecordError`]: record lookup and ingestion
//! - [`QueryError`]: invalid table or report requests
//! - [`ConfigError`]: configuration parsing and validation
//! - [`SettingsError`]: dashboard settings file access
//! - [`ChatError`]: chat transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use leadger::prelude::*;
//!
//! match store.get("1045").await? {
//!     Some(record) => println!("{}", record.text),
//!     None => return Err(RecordError::NotFound { id: "1045".into() }.into()),
//! }
//! ```

use crate::chat::ChatError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type of the crate
#[derive(Debug)]
pub enum LeadgerError {
    /// Record lookup/ingestion errors
    Record(RecordError),

    /// Invalid table, filter or report requests
    Query(QueryError),

    /// Configuration errors
    Config(ConfigError),

    /// Settings file errors
    Settings(SettingsError),

    /// Chat boundary errors
    Chat(ChatError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for LeadgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadgerError::Record(e) => write!(f, "{}", e),
            LeadgerError::Query(e) => write!(f, "{}", e),
            LeadgerError::Config(e) => write!(f, "{}", e),
            LeadgerError::Settings(e) => write!(f, "{}", e),
            LeadgerError::Chat(e) => write!(f, "{}", e),
            LeadgerError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for LeadgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadgerError::Record(e) => Some(e),
            LeadgerError::Query(e) => Some(e),
            LeadgerError::Config(e) => Some(e),
            LeadgerError::Settings(e) => Some(e),
            LeadgerError::Chat(e) => Some(e),
            LeadgerError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LeadgerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LeadgerError::Record(e) => e.status_code(),
            LeadgerError::Query(_) => StatusCode::BAD_REQUEST,
            LeadgerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LeadgerError::Settings(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LeadgerError::Chat(e) => e.status_code(),
            LeadgerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            LeadgerError::Record(e) => e.error_code(),
            LeadgerError::Query(e) => e.error_code(),
            LeadgerError::Config(_) => "CONFIG_ERROR",
            LeadgerError::Settings(_) => "SETTINGS_ERROR",
            LeadgerError::Chat(e) => e.error_code(),
            LeadgerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            LeadgerError::Record(RecordError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            LeadgerError::Query(QueryError::InvalidColumn { column, width }) => {
                Some(serde_json::json!({ "column": column, "width": width }))
            }
            LeadgerError::Query(QueryError::NoMatchingSeats { requested }) => {
                Some(serde_json::json!({ "requested": requested }))
            }
            LeadgerError::Chat(ChatError::Status(status)) => {
                Some(serde_json::json!({ "upstream_status": status }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for LeadgerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to records
#[derive(Debug)]
pub enum RecordError {
    /// No record with this id
    NotFound { id: String },

    /// Record data could not be read
    InvalidData { message: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotFound { id } => write!(f, "Record '{}' not found", id),
            RecordError::InvalidData { message } => {
                write!(f, "Invalid record data: {}", message)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl RecordError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
            RecordError::InvalidData { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::InvalidData { .. } => "INVALID_RECORD_DATA",
        }
    }
}

impl From<RecordError> for LeadgerError {
    fn from(err: RecordError) -> Self {
        LeadgerError::Record(err)
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors related to table and report requests
#[derive(Debug)]
pub enum QueryError {
    /// Sort column outside every row
    InvalidColumn { column: usize, width: usize },

    /// Blank subject code for a report link or analysis
    EmptySubjectCode,

    /// None of the requested seat numbers is on the ledger
    NoMatchingSeats { requested: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidColumn { column, width } => write!(
                f,
                "Column {} does not exist (table has {} columns)",
                column, width
            ),
            QueryError::EmptySubjectCode => write!(f, "Subject code must not be empty"),
            QueryError::NoMatchingSeats { requested } => write!(
                f,
                "None of the {} requested seat numbers is on the ledger",
                requested
            ),
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidColumn { .. } => "INVALID_COLUMN",
            QueryError::EmptySubjectCode => "EMPTY_SUBJECT_CODE",
            QueryError::NoMatchingSeats { .. } => "NO_MATCHING_SEATS",
        }
    }
}

impl From<QueryError> for LeadgerError {
    fn from(err: QueryError) -> Self {
        LeadgerError::Query(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for LeadgerError {
    fn from(err: ConfigError) -> Self {
        LeadgerError::Config(err)
    }
}

// =============================================================================
// Settings Errors
// =============================================================================

/// Errors related to the dashboard settings file
#[derive(Debug)]
pub enum SettingsError {
    /// Reading or writing the file failed
    Io { path: String, message: String },

    /// The file exists but is not valid settings JSON
    Malformed { path: String, message: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, message } => {
                write!(f, "Settings file '{}' could not be accessed: {}", path, message)
            }
            SettingsError::Malformed { path, message } => {
                write!(f, "Settings file '{}' is malformed: {}", path, message)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<SettingsError> for LeadgerError {
    fn from(err: SettingsError) -> Self {
        LeadgerError::Settings(err)
    }
}

// =============================================================================
// Chat Errors
// =============================================================================

impl From<ChatError> for LeadgerError {
    fn from(err: ChatError) -> Self {
        LeadgerError::Chat(err)
    }
}

// =============================================================================
// Conversions from anyhow
// =============================================================================

impl From<anyhow::Error> for LeadgerError {
    fn from(err: anyhow::Error) -> Self {
        LeadgerError::Internal(err.to_string())
    }
}

/// Result type alias for Leadger operations
pub type LeadgerResult<T> = Result<T, LeadgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_details() {
        let err = LeadgerError::from(RecordError::NotFound {
            id: "1045".to_string(),
        });
        let response = err.to_response();
        assert_eq!(response.code, "RECORD_NOT_FOUND");
        assert_eq!(response.details, Some(serde_json::json!({ "id": "1045" })));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;
        let err = LeadgerError::from(QueryError::EmptySubjectCode);
        assert!(err.source().is_some());
        assert!(LeadgerError::Internal("x".into()).source().is_none());
    }
}
