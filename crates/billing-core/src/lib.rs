//! # billing-core: Pure Business Logic for Billing Desktop
//!
//! This crate is the **heart** of Billing Desktop. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Billing Desktop Architecture                   │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │                 Frontend (webview form/table)             │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │ Tauri IPC                       │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │                    Tauri Commands                         │ │
//! │  │   list_products, add_product, get_totals, export_invoice  │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │             ★ billing-core (THIS CRATE) ★                 │ │
//! │  │                                                           │ │
//! │  │   ┌──────────┐ ┌────────────┐ ┌──────────┐ ┌──────────┐  │ │
//! │  │   │  types   │ │ validation │ │  export  │ │  error   │  │ │
//! │  │   │ Product  │ │   rules    │ │ CSV rows │ │  typed   │  │ │
//! │  │   │  Totals  │ │   checks   │ │ + totals │ │  errors  │  │ │
//! │  │   └──────────┘ └────────────┘ └──────────┘ └──────────┘  │ │
//! │  │                                                           │ │
//! │  │   NO I/O • NO DATABASE • NO DIALOGS • PURE FUNCTIONS      │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │                billing-db (Database Layer)                │ │
//! │  │           SQLite queries, migrations, repository          │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductKey, Totals)
//! - [`validation`] - Form input validation and VAT parsing
//! - [`export`] - CSV invoice rendering (to in-memory buffers)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, dialog, file system access is FORBIDDEN here
//! 3. **Derived total**: `total = price * quantity` is computed in exactly
//!    one place and stored redundantly at write time
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ExportError, ValidationError};
pub use types::{Product, ProductInput, ProductKey, Totals};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// VAT percentage applied when the VAT field is unset, blank, or unparseable.
///
/// ## Why a constant?
/// The VAT field is optional on the form. Every consumer (totals refresh,
/// invoice export) must fall back to the same rate, so it lives here rather
/// than in any one call site.
pub const DEFAULT_VAT_PERCENT: f64 = 20.0;
