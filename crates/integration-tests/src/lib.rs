//! Integration tests for Packstore pricing.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p packstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `documents` - Full document contract: deserialize, price, serialize
//! - `pricing_properties` - Property tests for the pricing invariants
//!
//! This crate holds the fixture documents the tests share. Each fixture is
//! the body a storefront or back-office surface would send.

use packstore_core::PricingDocument;

/// Invoice editor: three lines with their own discounts plus logo printing.
pub const PRINTED_INVOICE_YAML: &str = r"
kind: invoice
reference: INV-2024-0042
currency: TND
mode: lineDiscounts
items:
  - title: Kraft box 20x20
    unitPrice: 25
    quantity: 2
    discountPercent: 0
  - title: Pizza box 33cm
    unitPrice: 40
    quantity: 1
    discountPercent: 10
  - title: Paper bag
    unitPrice: 60
    quantity: 0
    discountPercent: 50
addendum:
  label: Logo printing
  included: true
  unitCost: 0.35
  quantity: 500
";

/// Multi-product quote dialog: volume pricing across three products.
pub const BULK_QUOTE_JSON: &str = r#"{
  "kind": "quote",
  "reference": "Q-118",
  "currency": "TND",
  "mode": "volumeTiers",
  "items": [
    {"title": "Kraft box 20x20", "unitPrice": "1.250", "quantity": 60},
    {"title": "Pizza box 33cm", "unitPrice": "0.900", "quantity": 30, "discountPercent": 20},
    {"title": "Paper bag", "unitPrice": "0.400", "quantity": 15}
  ]
}"#;

/// Cart sidebar state with the kind of values forms produce.
pub const MESSY_CART_JSON: &str = r#"{
  "kind": "cart",
  "currency": "USD",
  "items": [
    {"unitPrice": "12.5", "quantity": "", "discountPercent": null},
    {"unitPrice": -4, "quantity": 3},
    {"unitPrice": "9,99", "quantity": "2", "discountPercent": 150},
    {"unitPrice": "abc", "quantity": 7, "discountPercent": "5"}
  ],
  "addendum": {"included": false, "unitCost": "1.5", "quantity": 10}
}"#;

/// Parse a YAML fixture.
///
/// # Panics
///
/// Panics if the fixture is not a valid document.
#[must_use]
#[allow(clippy::expect_used)]
pub fn yaml_document(yaml: &str) -> PricingDocument {
    serde_yaml::from_str(yaml).expect("fixture should be a valid YAML document")
}

/// Parse a JSON fixture.
///
/// # Panics
///
/// Panics if the fixture is not a valid document.
#[must_use]
#[allow(clippy::expect_used)]
pub fn json_document(json: &str) -> PricingDocument {
    serde_json::from_str(json).expect("fixture should be a valid JSON document")
}
