//! # Product Repository
//!
//! Database operations for the products table.
//!
//! ## Key Operations
//! - The four parameterized statements: insert, select-all,
//!   update-first-match, delete-first-match
//! - The `SUM(total)` aggregate feeding the totals display
//! - Surrogate-id update/delete used by the view for row identity
//!
//! ## First-Match Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │          Natural-Key Update/Delete (legacy interface)           │
//! │                                                                 │
//! │  Key: ("Pen", 1.50, 10)                                         │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────┐                      │
//! │  │ products                              │                      │
//! │  │                                       │                      │
//! │  │ rowid 1 | Pen  | 1.50 | 10 | 15.00   │ ← MATCH (first only) │
//! │  │ rowid 2 | Pen  | 1.50 | 10 | 15.00   │   untouched          │
//! │  │ rowid 3 | Book | 9.99 |  2 | 19.98   │                      │
//! │  └───────────────────────────────────────┘                      │
//! │                                                                 │
//! │  Stock SQLite has no UPDATE/DELETE ... LIMIT 1, so the first    │
//! │  match is pinned with a rowid subquery instead.                 │
//! │  No match ⇒ silent no-op, never an error.                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use billing_core::export;
use billing_core::{Product, ProductInput, ProductKey, Totals};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let product = repo.add(input).await?;
/// let totals = repo.totals(20.0).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product from validated input.
    ///
    /// The surrogate id and the stored total are produced by
    /// [`Product::new`]; the returned value is exactly what was persisted.
    pub async fn add(&self, input: ProductInput) -> DbResult<Product> {
        let product = Product::new(input);
        debug!(name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, quantity, total)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .bind(product.total)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Returns all products in storage (insertion) order.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, quantity, total
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Sum of all stored line totals; zero when the table is empty.
    pub async fn subtotal(&self) -> DbResult<f64> {
        let subtotal: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(total), 0.0) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(subtotal)
    }

    /// Computes subtotal/VAT/total for the given VAT percentage.
    ///
    /// The subtotal comes from the SQL aggregate; the VAT math lives in
    /// [`Totals::from_subtotal`]. An empty table yields (0, 0, 0).
    pub async fn totals(&self, vat_percent: f64) -> DbResult<Totals> {
        let subtotal = self.subtotal().await?;
        Ok(Totals::from_subtotal(subtotal, vat_percent))
    }

    /// Updates the first row matching the natural key, rewriting all four
    /// data fields with a recomputed total.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - The new stored values
    /// * `Ok(None)` - No row matched; silent no-op
    pub async fn update_first_match(
        &self,
        key: &ProductKey,
        input: ProductInput,
    ) -> DbResult<Option<Product>> {
        debug!(name = %key.name, "Updating first matching product");

        let total = input.total();
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?1, price = ?2, quantity = ?3, total = ?4
            WHERE rowid = (
                SELECT rowid FROM products
                WHERE name = ?5 AND price = ?6 AND quantity = ?7
                LIMIT 1
            )
            RETURNING id, name, price, quantity, total
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.quantity)
        .bind(total)
        .bind(&key.name)
        .bind(key.price)
        .bind(key.quantity)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Deletes the first row matching the natural key.
    ///
    /// ## Returns
    /// * `Ok(true)` - One row removed
    /// * `Ok(false)` - No row matched; silent no-op
    pub async fn delete_first_match(&self, key: &ProductKey) -> DbResult<bool> {
        debug!(name = %key.name, "Deleting first matching product");

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE rowid = (
                SELECT rowid FROM products
                WHERE name = ?1 AND price = ?2 AND quantity = ?3
                LIMIT 1
            )
            "#,
        )
        .bind(&key.name)
        .bind(key.price)
        .bind(key.quantity)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Updates a row by its surrogate id, rewriting all four data fields
    /// with a recomputed total.
    ///
    /// Unlike the natural-key path, a missing id is an error here: the view
    /// asked to edit a specific row it believes exists.
    pub async fn update_by_id(&self, id: &str, input: ProductInput) -> DbResult<Product> {
        debug!(id = %id, "Updating product by id");

        let total = input.total();
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?2, price = ?3, quantity = ?4, total = ?5
            WHERE id = ?1
            RETURNING id, name, price, quantity, total
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.quantity)
        .bind(total)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Deletes a row by its surrogate id. Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: &str) -> DbResult<bool> {
        debug!(id = %id, "Deleting product by id");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts products (feeds the `example{count+1}.csv` export hint).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Writes the data-only export (header plus one row per product, no
    /// summary block) to the given path.
    pub async fn export_csv(&self, path: &Path) -> DbResult<()> {
        let products = self.list().await?;
        let bytes = export::render_product_rows(&products)
            .map_err(|e| DbError::ExportFailed(e.to_string()))?;

        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| DbError::ExportFailed(e.to_string()))?;

        debug!(path = %path.display(), "Exported product rows");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn input(name: &str, price: f64, quantity: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_add_then_list_roundtrip() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.add(input("Book", 9.99, 2)).await.unwrap();
        assert_eq!(stored.total, 19.98);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], stored);
        assert_eq!(listed[0].total, listed[0].price * listed[0].quantity as f64);
    }

    #[tokio::test]
    async fn test_totals_empty_table() {
        let db = test_db().await;
        let repo = db.products();

        for vat in [0.0, 20.0, 100.0] {
            let totals = repo.totals(vat).await.unwrap();
            assert_eq!(totals.subtotal, 0.0);
            assert_eq!(totals.vat, 0.0);
            assert_eq!(totals.total, 0.0);
        }
    }

    #[tokio::test]
    async fn test_totals_sums_stored_totals() {
        let db = test_db().await;
        let repo = db.products();

        repo.add(input("Book", 9.99, 2)).await.unwrap();
        let totals = repo.totals(20.0).await.unwrap();

        // Exact values; rounding is a display concern
        assert!((totals.subtotal - 19.98).abs() < 1e-9);
        assert!((totals.vat - 3.996).abs() < 1e-9);
        assert!((totals.total - 23.976).abs() < 1e-9);

        repo.add(input("Pen", 1.5, 10)).await.unwrap();
        let totals = repo.totals(10.0).await.unwrap();
        assert!((totals.subtotal - 34.98).abs() < 1e-9);
        assert!((totals.vat - 3.498).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_update_first_match_touches_one_duplicate() {
        let db = test_db().await;
        let repo = db.products();

        repo.add(input("Pen", 1.5, 10)).await.unwrap();
        repo.add(input("Pen", 1.5, 10)).await.unwrap();

        let key = ProductKey {
            name: "Pen".to_string(),
            price: 1.5,
            quantity: 10,
        };
        let updated = repo
            .update_first_match(&key, input("Pencil", 0.5, 4))
            .await
            .unwrap()
            .expect("a row should match");
        assert_eq!(updated.name, "Pencil");
        assert_eq!(updated.total, 2.0);

        // Exactly one of the two duplicates changed
        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        let pens = listed.iter().filter(|p| p.name == "Pen").count();
        let pencils = listed.iter().filter(|p| p.name == "Pencil").count();
        assert_eq!((pens, pencils), (1, 1));
    }

    #[tokio::test]
    async fn test_update_first_match_missing_key_is_noop() {
        let db = test_db().await;
        let repo = db.products();

        repo.add(input("Book", 9.99, 2)).await.unwrap();

        let key = ProductKey {
            name: "Ghost".to_string(),
            price: 1.0,
            quantity: 1,
        };
        let updated = repo
            .update_first_match(&key, input("Anything", 2.0, 2))
            .await
            .unwrap();
        assert!(updated.is_none());

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Book");
    }

    #[tokio::test]
    async fn test_delete_first_match_removes_exactly_one() {
        let db = test_db().await;
        let repo = db.products();

        repo.add(input("Pen", 1.5, 10)).await.unwrap();
        repo.add(input("Pen", 1.5, 10)).await.unwrap();

        let key = ProductKey {
            name: "Pen".to_string(),
            price: 1.5,
            quantity: 10,
        };
        assert!(repo.delete_first_match(&key).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);

        assert!(repo.delete_first_match(&key).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);

        // Deleting a non-existent key is a no-op, not an error
        assert!(!repo.delete_first_match(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_by_id() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.add(input("Book", 9.99, 2)).await.unwrap();
        let updated = repo
            .update_by_id(&stored.id, input("Novel", 12.0, 3))
            .await
            .unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.name, "Novel");
        assert_eq!(updated.total, 36.0);

        let missing = repo.update_by_id("no-such-id", input("X", 1.0, 1)).await;
        assert!(matches!(missing, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.add(input("Book", 9.99, 2)).await.unwrap();
        assert!(repo.delete_by_id(&stored.id).await.unwrap());
        assert!(!repo.delete_by_id(&stored.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_export_csv_writes_header_and_rows() {
        let db = test_db().await;
        let repo = db.products();

        repo.add(input("Pen", 1.5, 10)).await.unwrap();
        repo.add(input("Book", 9.99, 2)).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        repo.export_csv(&path).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Name,Price,Quantity,Total\n\
             Pen,1.50,10,15.00\n\
             Book,9.99,2,19.98\n"
        );
    }

    #[tokio::test]
    async fn test_export_csv_unwritable_path_fails() {
        let db = test_db().await;
        let repo = db.products();
        repo.add(input("Pen", 1.5, 10)).await.unwrap();

        let result = repo.export_csv(Path::new("/no/such/dir/out.csv")).await;
        assert!(matches!(result, Err(DbError::ExportFailed(_))));
    }
}
