//! # Database State
//!
//! Wraps the `Database` connection for use in Tauri commands.
//!
//! ## Thread Safety
//! The `Database` struct from `billing-db` contains a `SqlitePool` which
//! is inherently thread-safe. Commands can execute queries without
//! explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! #[tauri::command]
//! async fn list_products(db: State<'_, DbState>) -> Result<Vec<ProductDto>, ApiError> {
//!     let products = db.inner().products().list().await?;
//!     Ok(products.into_iter().map(ProductDto::from).collect())
//! }
//! ```

use billing_db::Database;

/// Wrapper around `Database` for Tauri state management.
///
/// ## Why a Wrapper?
/// Tauri's state management requires types to implement `Send + Sync`.
/// This wrapper makes the intent explicit and provides a clean API
/// for accessing the database in commands.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
