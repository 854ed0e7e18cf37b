//! # Domain Types
//!
//! Core domain types used throughout Billing Desktop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌────────────────┐  │
//! │  │    Product      │  │   ProductKey    │  │     Totals     │  │
//! │  │  ─────────────  │  │  ─────────────  │  │  ────────────  │  │
//! │  │  id (UUID)      │  │  name           │  │  subtotal      │  │
//! │  │  name           │  │  price          │  │  vat_percent   │  │
//! │  │  price          │  │  quantity       │  │  vat           │  │
//! │  │  quantity       │  └─────────────────┘  │  total         │  │
//! │  │  total (derived)│                       └────────────────┘  │
//! │  └─────────────────┘                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, used by the view for row identity
//! - Natural key: `(name, price, quantity)` - what the legacy store interface
//!   identifies rows by; duplicates collapse to first-match semantics there

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// A product row as persisted in the store.
///
/// ## Invariant
/// `total == price * quantity` holds whenever a product is created or
/// updated. [`Product::new`] and the repository update statements are the
/// only write paths; both derive the stored value from
/// [`ProductInput::total`], nothing else assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Surrogate identifier (UUID v4), stable across edits.
    pub id: String,

    /// Product name shown in the table and on the invoice.
    pub name: String,

    /// Unit price, non-negative decimal.
    pub price: f64,

    /// Quantity, non-negative integer.
    pub quantity: i64,

    /// Derived line total, stored redundantly at write time
    /// (not recomputed on read).
    pub total: f64,
}

impl Product {
    /// Creates a product from validated input, generating its id and
    /// computing the stored total.
    pub fn new(input: ProductInput) -> Self {
        let total = input.total();
        Product {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            price: input.price,
            quantity: input.quantity,
            total,
        }
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// Validated form input for creating or rewriting a product.
///
/// Produced by [`crate::validation::product_input`]; the derived total is
/// computed here so no caller multiplies price and quantity by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductInput {
    /// The derived line total: `price * quantity`.
    pub fn total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// Product Key
// =============================================================================

/// The natural key `(name, price, quantity)` identifying a row for the
/// legacy update/delete operations.
///
/// Two products with identical name/price/quantity are indistinguishable
/// under this key; an update/delete affects at most one matching row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductKey {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

// =============================================================================
// Totals
// =============================================================================

/// Subtotal/VAT/total for the current product list.
///
/// Values are exact; two-decimal rounding happens only at display and
/// CSV-formatting time (see [`crate::export::format_amount`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all stored line totals (zero when the table is empty).
    pub subtotal: f64,

    /// The VAT percentage the other fields were computed with.
    pub vat_percent: f64,

    /// `subtotal * vat_percent / 100`.
    pub vat: f64,

    /// `subtotal + vat`.
    pub total: f64,
}

impl Totals {
    /// Computes VAT and grand total from a subtotal and a VAT percentage.
    pub fn from_subtotal(subtotal: f64, vat_percent: f64) -> Self {
        let vat = subtotal * vat_percent / 100.0;
        Totals {
            subtotal,
            vat_percent,
            vat,
            total: subtotal + vat,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_computes_total() {
        let product = Product::new(ProductInput {
            name: "Book".to_string(),
            price: 9.99,
            quantity: 2,
        });
        assert_eq!(product.total, 19.98);
        assert_eq!(product.id.len(), 36);
    }

    #[test]
    fn test_zero_quantity_gives_zero_total() {
        let input = ProductInput {
            name: "Sample".to_string(),
            price: 3.25,
            quantity: 0,
        };
        assert_eq!(input.total(), 0.0);
    }

    #[test]
    fn test_totals_from_subtotal() {
        let totals = Totals::from_subtotal(19.98, 20.0);
        assert_eq!(totals.subtotal, 19.98);
        assert!((totals.vat - 3.996).abs() < 1e-9);
        assert!((totals.total - 23.976).abs() < 1e-9);
    }

    #[test]
    fn test_totals_empty_table() {
        let totals = Totals::from_subtotal(0.0, 20.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.vat, 0.0);
        assert_eq!(totals.total, 0.0);
    }

}
