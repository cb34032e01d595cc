//! Error types for grantflow
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for grantflow operations
pub type Result<T> = std::result::Result<T, GrantflowError>;

/// Main error type for all grantflow operations
#[derive(Debug, Error)]
pub enum GrantflowError {
    /// Workspace not found - no .grantflow directory
    #[error("Workspace not found: {0}")]
    RepoNotFound(String),

    /// A status value outside its enumerated set
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// A closure-workflow transition between non-adjacent states, or a
    /// state-changing operation whose precondition does not hold
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Presentation mapping requested for an unmapped status/entity pair
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// A reference (requisition -> milestone, partner id) that resolves to nothing
    #[error("Missing reference: {0}")]
    MissingReference(String),

    /// Structural validation failed
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Operation has no implementation in this build
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrantflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            GrantflowError::RepoNotFound(_) => "REPO_NOT_FOUND",
            GrantflowError::InvalidStatus(_) => "INVALID_STATUS",
            GrantflowError::InvalidTransition(_) => "INVALID_TRANSITION",
            GrantflowError::UnknownStatus(_) => "UNKNOWN_STATUS",
            GrantflowError::MissingReference(_) => "MISSING_REFERENCE",
            GrantflowError::SchemaValidation(_) => "SCHEMA_VALIDATION",
            GrantflowError::InvalidJson(_) => "INVALID_JSON",
            GrantflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            GrantflowError::ConfigError(_) => "CONFIG_ERROR",
            GrantflowError::NotImplemented(_) => "NOT_IMPLEMENTED",
            GrantflowError::Io(_) => "IO_ERROR",
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &GrantflowError) -> i32 {
    match error {
        GrantflowError::InvalidStatus(_)
        | GrantflowError::InvalidTransition(_)
        | GrantflowError::UnknownStatus(_)
        | GrantflowError::MissingReference(_)
        | GrantflowError::SchemaValidation(_) => 2,
        _ => 1,
    }
}
