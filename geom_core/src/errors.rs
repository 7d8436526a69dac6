//! # Error Types
//!
//! Structured error types for geom_core. Numeric edge cases (negative depth,
//! zero perimeter, near-empty parabolic channels) never produce an error; they
//! are clamped inside the evaluators. What remains are configuration problems
//! (unknown shape kinds, short parameter lists, malformed dimensions) and the
//! file/serialization errors of the geometry table layer.
//!
//! ## Example
//!
//! ```rust
//! use geom_core::errors::{GeomError, GeomResult};
//!
//! fn validate_diameter(diameter_m: f64) -> GeomResult<()> {
//!     if diameter_m <= 0.0 {
//!         return Err(GeomError::InvalidInput {
//!             field: "diameter_m".to_string(),
//!             value: diameter_m.to_string(),
//!             reason: "Diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for geom_core operations
pub type GeomResult<T> = Result<T, GeomError>;

/// Structured error type for geometry configuration and I/O.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GeomError {
    /// Numeric geometry code outside the persisted 1-9 table
    #[error("Unknown geometry code: {code}")]
    UnknownGeometryCode { code: i64 },

    /// Symbolic geometry name (or typed shape tag) not in the registry
    #[error("Unknown geometry name: '{name}'{}", link_suffix(.link))]
    UnknownGeometryName {
        name: String,
        /// Label of the geometry table link that named it
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    },

    /// Legacy parameter list too short for the requested kind
    #[error("Missing parameter g{slot} for {kind} geometry")]
    MissingParameter { kind: String, slot: usize },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl GeomError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GeomError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownGeometryName error
    pub fn unknown_name(name: impl Into<String>) -> Self {
        GeomError::UnknownGeometryName {
            name: name.into(),
            link: None,
        }
    }

    /// Attach a geometry table link label to the error.
    ///
    /// `InvalidInput` fields become `label.field`; unknown names record the
    /// link. Other variants pass through unchanged.
    pub fn in_link(self, label: &str) -> Self {
        match self {
            GeomError::InvalidInput { field, value, reason } => GeomError::InvalidInput {
                field: format!("{}.{}", label, field),
                value,
                reason,
            },
            GeomError::UnknownGeometryName { name, .. } => GeomError::UnknownGeometryName {
                name,
                link: Some(label.to_string()),
            },
            other => other,
        }
    }

    /// Create a MissingParameter error (`slot` is 1-based, matching g1..g6)
    pub fn missing_parameter(kind: impl Into<String>, slot: usize) -> Self {
        GeomError::MissingParameter {
            kind: kind.into(),
            slot,
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        GeomError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the link geometry configuration itself.
    ///
    /// These should stop network setup; they will not go away on retry.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GeomError::UnknownGeometryCode { .. }
                | GeomError::UnknownGeometryName { .. }
                | GeomError::MissingParameter { .. }
                | GeomError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GeomError::UnknownGeometryCode { .. } => "UNKNOWN_GEOMETRY_CODE",
            GeomError::UnknownGeometryName { .. } => "UNKNOWN_GEOMETRY_NAME",
            GeomError::MissingParameter { .. } => "MISSING_PARAMETER",
            GeomError::InvalidInput { .. } => "INVALID_INPUT",
            GeomError::FileError { .. } => "FILE_ERROR",
            GeomError::SerializationError { .. } => "SERIALIZATION_ERROR",
            GeomError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

fn link_suffix(link: &Option<String>) -> String {
    match link {
        Some(label) => format!(" in link '{}'", label),
        None => String::new(),
    }
}

impl From<serde_json::Error> for GeomError {
    fn from(err: serde_json::Error) -> Self {
        GeomError::SerializationError {
            reason: err.to_string(),
        }
    }
}
