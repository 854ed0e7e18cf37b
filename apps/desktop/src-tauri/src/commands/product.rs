//! # Product Commands
//!
//! Tauri commands for the product table: load, add, edit, delete, totals.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Add Product Flow                           │
//! │                                                                 │
//! │  User fills the form, clicks "Add Product"                      │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  invoke('add_product', { name, price, quantity })               │
//! │  (unset fields arrive as null)                                  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  validation::product_input ── error? ──► VALIDATION_ERROR,      │
//! │       │                                  storage never touched  │
//! │       ▼                                                         │
//! │  repo.add(input) ── inserts row, auto-commits                   │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Frontend appends the row, refreshes totals, resets the form    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DbState;
use billing_core::{validation, Product, Totals};
use billing_db::Database;

/// Product DTO (Data Transfer Object) for the frontend table.
///
/// ## Why DTO?
/// - Decouples internal domain model from the IPC contract
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub total: f64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            price: p.price,
            quantity: p.quantity,
            total: p.total,
        }
    }
}

/// Totals DTO for the totals label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDto {
    pub subtotal: f64,
    pub vat_percent: f64,
    pub vat: f64,
    pub total: f64,
}

impl From<Totals> for TotalsDto {
    fn from(t: Totals) -> Self {
        TotalsDto {
            subtotal: t.subtotal,
            vat_percent: t.vat_percent,
            vat: t.vat,
            total: t.total,
        }
    }
}

/// Returns all products for (re)populating the table.
///
/// The frontend clears its table and repopulates from this list; the
/// display mirrors storage, never an in-memory cache.
#[tauri::command]
pub async fn list_products(db: State<'_, DbState>) -> Result<Vec<ProductDto>, ApiError> {
    debug!("list_products command");
    let db_inner: &Database = (*db).inner();

    let products = db_inner.products().list().await?;
    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// Validates the raw form fields and inserts a new product.
///
/// ## Arguments
/// Raw field text; `None` while a field's placeholder is showing.
///
/// ## Errors
/// `VALIDATION_ERROR` on unset/empty/unparseable input (storage is not
/// contacted), `STORAGE_ERROR` if the insert fails.
#[tauri::command]
pub async fn add_product(
    db: State<'_, DbState>,
    name: Option<String>,
    price: Option<String>,
    quantity: Option<String>,
) -> Result<ProductDto, ApiError> {
    debug!("add_product command");

    let input =
        validation::product_input(name.as_deref(), price.as_deref(), quantity.as_deref())?;

    let db_inner: &Database = (*db).inner();
    let product = db_inner.products().add(input).await?;
    Ok(ProductDto::from(product))
}

/// Computes subtotal/VAT/total for the raw VAT field.
///
/// VAT defaults to 20.0 when the field is unset, blank, or unparseable,
/// and is clamped to [0, 100] only when a numeric value was supplied.
#[tauri::command]
pub async fn get_totals(
    db: State<'_, DbState>,
    vat: Option<String>,
) -> Result<TotalsDto, ApiError> {
    let vat_percent = validation::vat_percent(vat.as_deref());
    debug!(vat_percent, "get_totals command");

    let db_inner: &Database = (*db).inner();
    let totals = db_inner.products().totals(vat_percent).await?;
    Ok(TotalsDto::from(totals))
}

/// Applies an edit to the selected row: validates the new values, rewrites
/// all four fields with a recomputed total.
#[tauri::command]
pub async fn update_product(
    db: State<'_, DbState>,
    id: String,
    name: Option<String>,
    price: Option<String>,
    quantity: Option<String>,
) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "update_product command");

    let input =
        validation::product_input(name.as_deref(), price.as_deref(), quantity.as_deref())?;

    let db_inner: &Database = (*db).inner();
    let product = db_inner.products().update_by_id(&id, input).await?;
    Ok(ProductDto::from(product))
}

/// Deletes the selected row. Returns whether a row was actually removed;
/// the user confirmation happens in the view before this is invoked.
#[tauri::command]
pub async fn delete_product(db: State<'_, DbState>, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_product command");

    let db_inner: &Database = (*db).inner();
    Ok(db_inner.products().delete_by_id(&id).await?)
}
