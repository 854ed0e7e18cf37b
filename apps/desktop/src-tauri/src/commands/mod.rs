//! # Tauri Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Product CRUD + totals
//! └── export.rs   ◄─── CSV invoice export
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Tauri Command Flow                          │
//! │                                                                 │
//! │  Frontend (form/table page)                                     │
//! │  ──────────────────────────                                     │
//! │  const { invoke } = window.__TAURI__.core;                      │
//! │                                                                 │
//! │  const product = await invoke('add_product', {                  │
//! │    name: 'Pen', price: '1.50', quantity: '10'                   │
//! │  });                                                            │
//! │         │                                                       │
//! │         │ (IPC via WebView)                                     │
//! │         ▼                                                       │
//! │  Rust Backend                                                   │
//! │  ────────────                                                   │
//! │  #[tauri::command]                                              │
//! │  async fn add_product(                                          │
//! │      db: State<'_, DbState>,   ◄── Injected by Tauri            │
//! │      name: Option<String>,     ◄── null while the field's       │
//! │      price: Option<String>,        placeholder is showing       │
//! │      quantity: Option<String>,                                  │
//! │  ) -> Result<ProductDto, ApiError>                              │
//! │         │                                                       │
//! │         │ (JSON serialization)                                  │
//! │         ▼                                                       │
//! │  Frontend receives: ProductDto (or {code, message} on error)    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Raw form fields always cross this boundary as `Option<String>`;
//! `None` is the distinct unset representation, so no command ever
//! compares input against placeholder text.

pub mod export;
pub mod product;
