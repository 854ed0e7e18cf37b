//! # Error Types
//!
//! Domain-specific error types for billing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Error Types                              │
//! │                                                                 │
//! │  billing-core errors (this file)                                │
//! │  ├── ValidationError  - Form input failures                     │
//! │  └── ExportError      - CSV rendering failures                  │
//! │                                                                 │
//! │  billing-db errors (separate crate)                             │
//! │  └── DbError          - Database operation failures             │
//! │                                                                 │
//! │  Tauri API errors (in app)                                      │
//! │  └── ApiError         - What the frontend sees (serialized)     │
//! │                                                                 │
//! │  Flow: ValidationError / DbError → ApiError → Frontend dialog   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Each error variant maps to a user-facing dialog message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// These occur when user-entered text doesn't meet requirements. They are
/// surfaced as blocking dialogs and never mutate any state.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is unset or empty after trimming.
    ///
    /// An unset field is one the view reports as `None` because its
    /// placeholder is still showing; it is never compared against the
    /// placeholder text itself.
    #[error("{field} cannot be empty")]
    Required { field: &'static str },

    /// A numeric field failed to parse.
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// A numeric field parsed but was negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },
}

// =============================================================================
// Export Error
// =============================================================================

/// CSV invoice rendering/writing errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// The underlying buffer or file failed.
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name cannot be empty");

        let err = ValidationError::InvalidNumber {
            field: "price",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a valid number: 'abc'");

        let err = ValidationError::MustBeNonNegative { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must not be negative");
    }
}
