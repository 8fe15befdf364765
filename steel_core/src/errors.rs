//! # Error Types
//!
//! Every fallible operation in steel_core returns [`CalcResult`]. Errors
//! serialize to JSON alongside the results they replace.
//!
//! Two kinds of failure deserve a note:
//!
//! - [`CalcError::NotImplemented`] marks a code provision this crate does not
//!   cover (slender-element columns, non-compact webs in flexure, channels...).
//!   It is returned instead of a strength computed with the wrong formula.
//! - [`CalcError::EmptyCriteria`] is a programming error: a load check was
//!   asked for a governing strength with no applicable limit state.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_mm".to_string(),
//!             value: length_mm.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for steel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for strength calculations.
///
/// Variants carry the offending field, provision or path so callers can
/// react without parsing the message.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Section name not found in the shapes database
    #[error("Section not found: {section_name}")]
    SectionNotFound { section_name: String },

    /// The code provision needed for this member is not implemented
    #[error("Not implemented: {provision} - {reason}")]
    NotImplemented { provision: String, reason: String },

    /// Governing strength requested from a load check without criteria
    #[error("No applicable strength criteria for {load}")]
    EmptyCriteria { load: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or CSV (de)serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(section_name: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            section_name: section_name.into(),
        }
    }

    /// Create a NotImplemented error
    pub fn not_implemented(provision: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NotImplemented {
            provision: provision.into(),
            reason: reason.into(),
        }
    }

    /// Create an EmptyCriteria error
    pub fn empty_criteria(load: impl Into<String>) -> Self {
        CalcError::EmptyCriteria { load: load.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this error marks an unimplemented code provision
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, CalcError::NotImplemented { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            CalcError::EmptyCriteria { .. } => "EMPTY_CRITERIA",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}
