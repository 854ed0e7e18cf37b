//! # Billing Desktop Application Entry Point
//!
//! Launches the form window; the page triggers the initial load of all
//! products and totals once it is ready. All setup lives in
//! [`billing_desktop_lib::run`].

// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    billing_desktop_lib::run()
}
