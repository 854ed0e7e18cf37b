//! # Application State
//!
//! State types registered with Tauri and injected into commands.
//!
//! A single explicit state object (the database handle) replaces any
//! global mutable form state: commands receive what they need through
//! `State<'_, DbState>`, nothing is a singleton.

pub mod db;

pub use db::DbState;
