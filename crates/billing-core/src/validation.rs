//! # Validation Module
//!
//! Form input validation for Billing Desktop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                           │
//! │                                                                 │
//! │  Layer 1: Frontend (webview)                                    │
//! │  ├── Keystroke filters (digits only, one decimal point, 0-100)  │
//! │  └── Placeholder handling: unset fields cross the IPC boundary  │
//! │      as `null`, never as the placeholder text                   │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: Tauri Command (Rust)                                  │
//! │  └── THIS MODULE: required fields, numeric parsing, sign checks │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 3: Database (SQLite)                                     │
//! │  └── NOT NULL constraints                                       │
//! │                                                                 │
//! │  Defense in depth: multiple layers catch different errors       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An input of `None` means the field is unset (its placeholder is still
//! showing). The placeholder string itself never reaches this module, so a
//! product literally named "Product name" is representable.

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductInput;
use crate::DEFAULT_VAT_PERCENT;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Rules
/// - `None` (unset/placeholder) is rejected
/// - Empty or whitespace-only text is rejected
/// - The value is returned trimmed
pub fn required_text(field: &'static str, raw: Option<&str>) -> ValidationResult<String> {
    let value = raw.map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

/// Parses the price field as a non-negative decimal.
pub fn parse_price(raw: Option<&str>) -> ValidationResult<f64> {
    let text = required_text("price", raw)?;
    let price: f64 = text
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field: "price",
            value: text.clone(),
        })?;
    if !price.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "price",
            value: text,
        });
    }
    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative { field: "price" });
    }
    Ok(price)
}

/// Parses the quantity field as a non-negative integer.
pub fn parse_quantity(raw: Option<&str>) -> ValidationResult<i64> {
    let text = required_text("quantity", raw)?;
    let quantity: i64 = text
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field: "quantity",
            value: text.clone(),
        })?;
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative { field: "quantity" });
    }
    Ok(quantity)
}

/// Validates all three product fields and assembles a [`ProductInput`].
///
/// Fails fast on the first invalid field; nothing is persisted until every
/// field passes, so a validation error never contacts storage.
pub fn product_input(
    name: Option<&str>,
    price: Option<&str>,
    quantity: Option<&str>,
) -> ValidationResult<ProductInput> {
    let name = required_text("name", name)?;
    let price = parse_price(price)?;
    let quantity = parse_quantity(quantity)?;
    Ok(ProductInput {
        name,
        price,
        quantity,
    })
}

// =============================================================================
// VAT Parsing
// =============================================================================

/// Reads the VAT percentage from the raw form field.
///
/// ## Rules
/// - Unset, blank, or unparseable → [`DEFAULT_VAT_PERCENT`] (20.0)
/// - Clamped to `[0, 100]`, but only when a numeric value was actually
///   supplied; the fallback is never clamped
///
/// This function never fails: a bad VAT field degrades to the default
/// rather than blocking a totals refresh.
pub fn vat_percent(raw: Option<&str>) -> f64 {
    let text = match raw.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return DEFAULT_VAT_PERCENT,
    };
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value.clamp(0.0, 100.0),
        _ => DEFAULT_VAT_PERCENT,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("name", Some("  Book ")).unwrap(), "Book");

        // Unset (placeholder showing) and empty are both rejected
        assert!(required_text("name", None).is_err());
        assert!(required_text("name", Some("")).is_err());
        assert!(required_text("name", Some("   ")).is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(Some("9.99")).unwrap(), 9.99);
        assert_eq!(parse_price(Some("0")).unwrap(), 0.0);

        assert!(matches!(
            parse_price(Some("abc")),
            Err(ValidationError::InvalidNumber { field: "price", .. })
        ));
        assert!(matches!(
            parse_price(Some("-1.5")),
            Err(ValidationError::MustBeNonNegative { field: "price" })
        ));
        assert!(parse_price(Some("NaN")).is_err());
        assert!(parse_price(None).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(Some("10")).unwrap(), 10);
        assert_eq!(parse_quantity(Some("0")).unwrap(), 0);

        assert!(parse_quantity(Some("1.5")).is_err());
        assert!(parse_quantity(Some("-3")).is_err());
        assert!(parse_quantity(None).is_err());
    }

    #[test]
    fn test_product_input_rejected_before_storage() {
        // An unset name fails validation outright; callers never reach the
        // store with invalid input.
        assert!(product_input(None, Some("1.50"), Some("10")).is_err());
        assert!(product_input(Some(""), Some("1.50"), Some("10")).is_err());

        let input = product_input(Some("Pen"), Some("1.50"), Some("10")).unwrap();
        assert_eq!(input.name, "Pen");
        assert_eq!(input.total(), 15.0);
    }

    #[test]
    fn test_vat_percent_defaults() {
        assert_eq!(vat_percent(None), 20.0);
        assert_eq!(vat_percent(Some("")), 20.0);
        assert_eq!(vat_percent(Some("   ")), 20.0);
        assert_eq!(vat_percent(Some("abc")), 20.0);
        assert_eq!(vat_percent(Some("NaN")), 20.0);
    }

    #[test]
    fn test_vat_percent_clamps_supplied_values_only() {
        assert_eq!(vat_percent(Some("5.5")), 5.5);
        assert_eq!(vat_percent(Some("0")), 0.0);
        assert_eq!(vat_percent(Some("100")), 100.0);

        // Out-of-range numeric input clamps; garbage falls back to 20
        assert_eq!(vat_percent(Some("150")), 100.0);
        assert_eq!(vat_percent(Some("-4")), 0.0);
    }
}
