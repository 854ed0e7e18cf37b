//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Error Flow in Billing Desktop                   │
//! │                                                                 │
//! │  Frontend                    Rust Backend                       │
//! │  ────────                    ────────────                       │
//! │                                                                 │
//! │  invoke('add_product')                                          │
//! │         │                                                       │
//! │         ▼                                                       │
//! │  Command: Result<T, ApiError>                                   │
//! │         │                                                       │
//! │         ├── ValidationError ──► VALIDATION_ERROR (error dialog) │
//! │         ├── no rows to export ─► NOTHING_TO_EXPORT (warning)    │
//! │         ├── DbError ──────────► STORAGE_ERROR (error dialog)    │
//! │         └── ExportError ──────► EXPORT_FAILED (error dialog)    │
//! │                                                                 │
//! │  Every failure aborts the pending action, leaves prior state    │
//! │  intact, and returns control to the user. No error is fatal.    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use billing_core::{ExportError, ValidationError};
use billing_db::DbError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price is not a valid number: 'abc'"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for dialog selection
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// The frontend maps these onto the three dialog classes: validation
/// errors and storage/export failures get a blocking error dialog,
/// not-found/nothing-to-export conditions get a warning dialog.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input failed validation; nothing was persisted.
    ValidationError,

    /// The targeted row no longer exists.
    NotFound,

    /// Export requested on an empty product list (warning, not error).
    NothingToExport,

    /// Database operation failed.
    StorageError,

    /// CSV rendering or file write failed.
    ExportFailed,

    /// Internal error.
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a nothing-to-export warning.
    pub fn nothing_to_export() -> Self {
        ApiError::new(ErrorCode::NothingToExport, "No products to export")
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::new(
                ErrorCode::NotFound,
                format!("{} not found: {}", entity, id),
            ),
            DbError::ExportFailed(message) => {
                tracing::error!("Export failed: {}", message);
                ApiError::new(ErrorCode::ExportFailed, format!("Failed to export: {}", message))
            }
            other => {
                // Surface the underlying message; the app stays usable
                tracing::error!("Storage failure: {}", other);
                ApiError::new(ErrorCode::StorageError, other.to_string())
            }
        }
    }
}

/// Converts CSV rendering errors to API errors.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        tracing::error!("Export failed: {}", err);
        ApiError::new(ErrorCode::ExportFailed, format!("Failed to export: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
