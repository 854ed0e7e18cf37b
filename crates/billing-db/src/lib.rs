//! # billing-db: Database Layer for Billing Desktop
//!
//! This crate provides database access for Billing Desktop.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Billing Desktop Data Flow                     │
//! │                                                                 │
//! │  Tauri Command (add_product)                                    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │                  billing-db (THIS CRATE)                  │ │
//! │  │                                                           │ │
//! │  │  ┌──────────────┐  ┌───────────────┐  ┌───────────────┐  │ │
//! │  │  │   Database   │  │  Repository   │  │  Migrations   │  │ │
//! │  │  │  (pool.rs)   │  │ (product.rs)  │  │  (embedded)   │  │ │
//! │  │  │              │  │               │  │               │  │ │
//! │  │  │ SqlitePool   │◄─│ ProductRepo   │  │ 001_products  │  │ │
//! │  │  └──────────────┘  └───────────────┘  └───────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SQLite file under the platform app-data directory              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use billing_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/billing.db")).await?;
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
