//! # CSV Export Rendering
//!
//! Renders the product list (and invoice summary block) to CSV bytes.
//!
//! ## Invoice Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Exported Invoice File                        │
//! │                                                                 │
//! │  Name,Price,Quantity,Total          ← header                    │
//! │  Pen,1.50,10,15.00                  ← data rows, store order    │
//! │  Book,9.99,2,19.98                                              │
//! │                                     ← one blank separator row   │
//! │  ,,Subtotal,34.98                   ← 4-column summary rows:    │
//! │  ,,VAT (20.00%),7.00                  columns 3-4 hold label    │
//! │  ,,Total,41.98                        and two-decimal value     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering targets in-memory buffers only; writing the bytes to disk is
//! the caller's concern (this crate does no I/O).

use std::io::Write;

use crate::error::ExportError;
use crate::types::{Product, Totals};

/// Column headers for the export file.
pub const CSV_HEADER: [&str; 4] = ["Name", "Price", "Quantity", "Total"];

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount for display and CSV output: exactly two decimals.
///
/// ## Example
/// ```rust
/// use billing_core::export::format_amount;
///
/// assert_eq!(format_amount(3.996), "4.00");
/// assert_eq!(format_amount(19.98), "19.98");
/// assert_eq!(format_amount(0.0), "0.00");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

// =============================================================================
// Rendering
// =============================================================================

/// Writes the header row plus one data row per product.
fn write_product_rows<W: Write>(
    wtr: &mut csv::Writer<W>,
    products: &[Product],
) -> Result<(), ExportError> {
    wtr.write_record(CSV_HEADER)?;
    for product in products {
        wtr.write_record(&[
            product.name.clone(),
            format_amount(product.price),
            product.quantity.to_string(),
            format_amount(product.total),
        ])?;
    }
    Ok(())
}

/// Renders header + data rows only (the store-level export format).
pub fn render_product_rows(products: &[Product]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        write_product_rows(&mut wtr, products)?;
        wtr.flush()?;
    }
    Ok(buf)
}

/// Renders the full invoice: data rows, one blank separator row, then the
/// three summary rows (`Subtotal`, `VAT (P.PP%)`, `Total`).
pub fn render_invoice(products: &[Product], totals: &Totals) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        write_product_rows(&mut wtr, products)?;
        wtr.flush()?;
    }

    // The separator is a genuinely blank line, not a ",,," record, so it is
    // appended outside the CSV writer.
    buf.extend_from_slice(b"\n");

    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        let vat_label = format!("VAT ({:.2}%)", totals.vat_percent);
        wtr.write_record(["", "", "Subtotal", format_amount(totals.subtotal).as_str()])?;
        wtr.write_record(["", "", vat_label.as_str(), format_amount(totals.vat).as_str()])?;
        wtr.write_record(["", "", "Total", format_amount(totals.total).as_str()])?;
        wtr.flush()?;
    }
    Ok(buf)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductInput;

    fn product(name: &str, price: f64, quantity: i64) -> Product {
        Product::new(ProductInput {
            name: name.to_string(),
            price,
            quantity,
        })
    }

    #[test]
    fn test_format_amount_rounds_for_display() {
        // The Book scenario: exact values round only at the formatting edge
        assert_eq!(format_amount(19.98), "19.98");
        assert_eq!(format_amount(3.996), "4.00");
        assert_eq!(format_amount(23.976), "23.98");
    }

    #[test]
    fn test_render_product_rows() {
        let products = vec![product("Pen", 1.5, 10), product("Book", 9.99, 2)];
        let bytes = render_product_rows(&products).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Name,Price,Quantity,Total\n\
             Pen,1.50,10,15.00\n\
             Book,9.99,2,19.98\n"
        );
    }

    #[test]
    fn test_render_invoice_summary_block() {
        let products = vec![product("Pen", 1.5, 10)];
        let totals = Totals::from_subtotal(15.0, 20.0);
        let text = String::from_utf8(render_invoice(&products, &totals).unwrap()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name,Price,Quantity,Total");
        assert_eq!(lines[1], "Pen,1.50,10,15.00");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], ",,Subtotal,15.00");
        assert_eq!(lines[4], ",,VAT (20.00%),3.00");
        assert_eq!(lines[5], ",,Total,18.00");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_invoice_vat_is_percentage_of_subtotal() {
        // VAT row must equal 20% of the subtotal, both two-decimal formatted
        let products = vec![product("Pen", 1.5, 10), product("Book", 9.99, 2)];
        let subtotal: f64 = products.iter().map(|p| p.total).sum();
        let totals = Totals::from_subtotal(subtotal, 20.0);
        let text = String::from_utf8(render_invoice(&products, &totals).unwrap()).unwrap();

        assert!(text.contains(",,Subtotal,34.98\n"));
        assert!(text.contains(",,VAT (20.00%),7.00\n"));
        assert!(text.contains(",,Total,41.98\n"));
    }

    #[test]
    fn test_name_with_comma_is_quoted() {
        let products = vec![product("Pen, blue", 1.0, 1)];
        let text = String::from_utf8(render_product_rows(&products).unwrap()).unwrap();
        assert!(text.contains("\"Pen, blue\",1.00,1,1.00"));
    }
}
