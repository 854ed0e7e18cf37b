//! # Export Commands
//!
//! Tauri commands for the CSV invoice export.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Export CSV Flow                           │
//! │                                                                 │
//! │  User clicks "Export CSV"                                       │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  invoke('export_filename_hint') ──► "example{count+1}.csv"      │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  OS save dialog (dialog plugin) ── cancelled? ──► nothing       │
//! │       │                                            mutated      │
//! │       ▼                                                         │
//! │  invoke('export_invoice', { path, vat })                        │
//! │       │                                                         │
//! │       ├── empty table ──► NOTHING_TO_EXPORT (warning dialog)    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  render data rows + blank row + summary block, write the file   │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Success dialog ("Invoice exported successfully")               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use billing_core::{export, validation};
use billing_db::Database;

/// Suggested filename for the save dialog: `example{count+1}.csv`.
#[tauri::command]
pub async fn export_filename_hint(db: State<'_, DbState>) -> Result<String, ApiError> {
    let db_inner: &Database = (*db).inner();
    let count = db_inner.products().count().await?;
    Ok(format!("example{}.csv", count + 1))
}

/// Writes the full invoice to `path`: product rows, a blank separator row,
/// then the `Subtotal` / `VAT (P.PP%)` / `Total` summary rows, all amounts
/// formatted to two decimals.
///
/// ## Errors
/// `NOTHING_TO_EXPORT` when the product list is empty (warning, nothing
/// written), `EXPORT_FAILED` when the path is unwritable.
#[tauri::command]
pub async fn export_invoice(
    db: State<'_, DbState>,
    path: String,
    vat: Option<String>,
) -> Result<(), ApiError> {
    debug!(path = %path, "export_invoice command");

    let db_inner: &Database = (*db).inner();
    let repo = db_inner.products();

    let products = repo.list().await?;
    if products.is_empty() {
        return Err(ApiError::nothing_to_export());
    }

    let vat_percent = validation::vat_percent(vat.as_deref());
    let totals = repo.totals(vat_percent).await?;

    let bytes = export::render_invoice(&products, &totals)?;
    tokio::fs::write(&path, bytes)
        .await
        .map_err(billing_core::ExportError::from)?;

    info!(path = %path, rows = products.len(), "Invoice exported");
    Ok(())
}
