//! # Repository Module
//!
//! Database repository implementations for Billing Desktop.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Repository Pattern Explained                    │
//! │                                                                 │
//! │  Tauri Command                                                  │
//! │       │                                                         │
//! │       │  db.products().add(input)                               │
//! │       ▼                                                         │
//! │  ProductRepository                                              │
//! │  ├── add / list / totals                                        │
//! │  ├── update_by_id / delete_by_id                                │
//! │  ├── update_first_match / delete_first_match                    │
//! │  └── export_csv                                                 │
//! │       │                                                         │
//! │       │  Parameterized SQL                                      │
//! │       ▼                                                         │
//! │  SQLite Database                                                │
//! │                                                                 │
//! │  Benefits:                                                      │
//! │  • SQL is isolated in one place                                 │
//! │  • Easy to test against an in-memory pool                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
