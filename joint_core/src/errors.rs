//! # Error Types
//!
//! Structured error types for joint_core. Every failure the engine can
//! produce is a variant here, with enough context for the host UI to render
//! an inline message instead of crashing.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::errors::{JointError, JointResult};
//!
//! fn validate_thickness(thickness_in: f64) -> JointResult<()> {
//!     if thickness_in <= 0.0 {
//!         return Err(JointError::invalid_input(
//!             "thickness_in",
//!             thickness_in.to_string(),
//!             "Member thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for joint_core operations
pub type JointResult<T> = Result<T, JointError>;

/// Structured error type for joint calculations.
///
/// Only `DataLoad` is fatal (the reference tables could not be read at
/// startup); everything else is a recoverable selection or geometry problem
/// that the UI should surface next to the offending input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum JointError {
    /// A reference data file is missing or malformed
    #[error("Data load failed for '{path}': {reason}")]
    DataLoad { path: String, reason: String },

    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Bolt size designation not found in the size table
    #[error("Bolt size not found: {size}")]
    BoltSizeNotFound { size: String },

    /// TPI not available for the selected bolt size
    #[error("Thread not found: {tpi} TPI is not available for bolt size {size}")]
    ThreadNotFound { size: String, tpi: u32 },

    /// Material not found in the material table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// No clearance hole entry for the selected bolt size
    #[error("Clearance hole not found for bolt size: {size}")]
    ClearanceHoleNotFound { size: String },

    /// The joint configuration is non-physical (empty stack, etc.)
    #[error("Invalid joint: {reason}")]
    InvalidJoint { reason: String },

    /// Selections conflict with each other (hole smaller than bolt, etc.)
    #[error("Incompatible selection: {reason}")]
    IncompatibleSelection { reason: String },

    /// A stiffness denominator collapsed to zero
    #[error("Degenerate geometry: {quantity} is zero")]
    DegenerateGeometry { quantity: String },
}

impl JointError {
    /// Create a DataLoad error
    pub fn data_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        JointError::DataLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        JointError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a BoltSizeNotFound error
    pub fn bolt_size_not_found(size: impl Into<String>) -> Self {
        JointError::BoltSizeNotFound { size: size.into() }
    }

    /// Create a ThreadNotFound error
    pub fn thread_not_found(size: impl Into<String>, tpi: u32) -> Self {
        JointError::ThreadNotFound {
            size: size.into(),
            tpi,
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        JointError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a ClearanceHoleNotFound error
    pub fn clearance_hole_not_found(size: impl Into<String>) -> Self {
        JointError::ClearanceHoleNotFound { size: size.into() }
    }

    /// Create an InvalidJoint error
    pub fn invalid_joint(reason: impl Into<String>) -> Self {
        JointError::InvalidJoint {
            reason: reason.into(),
        }
    }

    /// Create an IncompatibleSelection error
    pub fn incompatible_selection(reason: impl Into<String>) -> Self {
        JointError::IncompatibleSelection {
            reason: reason.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(quantity: impl Into<String>) -> Self {
        JointError::DegenerateGeometry {
            quantity: quantity.into(),
        }
    }

    /// Check if this error is recoverable by changing a selection.
    ///
    /// Everything except a failed data load can be fixed from the UI.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, JointError::DataLoad { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            JointError::DataLoad { .. } => "DATA_LOAD",
            JointError::InvalidInput { .. } => "INVALID_INPUT",
            JointError::BoltSizeNotFound { .. } => "BOLT_SIZE_NOT_FOUND",
            JointError::ThreadNotFound { .. } => "THREAD_NOT_FOUND",
            JointError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            JointError::ClearanceHoleNotFound { .. } => "CLEARANCE_HOLE_NOT_FOUND",
            JointError::InvalidJoint { .. } => "INVALID_JOINT",
            JointError::IncompatibleSelection { .. } => "INCOMPATIBLE_SELECTION",
            JointError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = JointError::invalid_input("thickness_in", "-0.1", "Thickness must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: JointError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            JointError::material_not_found("unobtainium").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            JointError::thread_not_found("#10", 99).error_code(),
            "THREAD_NOT_FOUND"
        );
        assert_eq!(
            JointError::invalid_joint("no members").error_code(),
            "INVALID_JOINT"
        );
    }

    #[test]
    fn test_recoverability() {
        assert!(!JointError::data_load("materials.json", "missing").is_recoverable());
        assert!(JointError::incompatible_selection("hole too small").is_recoverable());
        assert!(JointError::degenerate_geometry("effective length").is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = JointError::thread_not_found("1/4", 99);
        assert_eq!(
            err.to_string(),
            "Thread not found: 99 TPI is not available for bolt size 1/4"
        );
    }
}
