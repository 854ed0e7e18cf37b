//! # Billing Desktop Library
//!
//! Core library for the Billing Desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! billing_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── db.rs       ◄─── Database state wrapper
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product CRUD + totals commands
//! │   └── export.rs   ◄─── CSV invoice export commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use billing_db::{Database, DbConfig};
use state::DbState;

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │                     Application Startup                         │
/// │                                                                 │
/// │  1. Initialize Logging ──────────────────────────────────────►  │
/// │     • tracing-subscriber with env filter                        │
/// │     • Default: INFO, can be overridden with RUST_LOG            │
/// │                                                                 │
/// │  2. Determine Database Path ─────────────────────────────────►  │
/// │     • Platform app-data directory, BILLING_DB_PATH override     │
/// │                                                                 │
/// │  3. Connect to Database ─────────────────────────────────────►  │
/// │     • SQLite with WAL mode, run pending migrations              │
/// │                                                                 │
/// │  4. Register State & Commands, Launch Window ────────────────►  │
/// │     • The page then triggers the initial list_products +        │
/// │       get_totals load                                           │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Billing Desktop application");

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        // Setup hook runs before the app starts
        .setup(|app| {
            let db_path = get_database_path(app)?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                Database::new(DbConfig::new(db_path)).await
            })?;

            info!("Database connected and migrations applied");

            app.manage(DbState::new(db));
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Product commands
            commands::product::list_products,
            commands::product::add_product,
            commands::product::get_totals,
            commands::product::update_product,
            commands::product::delete_product,
            // Export commands
            commands::export::export_filename_hint,
            commands::export::export_invoice,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=billing=trace` - Show trace for billing crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,billing=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.billing.desktop/billing.db`
/// - **Windows**: `%APPDATA%\billing\desktop\billing.db`
/// - **Linux**: `~/.local/share/billing-desktop/billing.db`
///
/// ## Development Override
/// Set `BILLING_DB_PATH` environment variable to use a custom path.
fn get_database_path(_app: &tauri::App) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("BILLING_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "billing", "desktop")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("billing.db"))
}
