//! Integration tests for the pricing document contract.
//!
//! Each test takes a document as a UI surface would send it, prices it, and
//! checks the totals that would be written back to the order, invoice or
//! quote record.

#![allow(clippy::unwrap_used)]

use packstore_core::{
    DocumentKind, PricingError, PricingMode, TierSchedule, compute_line_total, price_document,
};
use packstore_integration_tests::{
    BULK_QUOTE_JSON, MESSY_CART_JSON, PRINTED_INVOICE_YAML, json_document, yaml_document,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

// ============================================================================
// Invoice editor
// ============================================================================

#[test]
fn test_printed_invoice_totals() {
    let document = yaml_document(PRINTED_INVOICE_YAML);
    assert_eq!(document.kind, DocumentKind::Invoice);

    let totals = price_document(&document, None).unwrap();
    assert_eq!(totals.line_totals, vec![dec!(50), dec!(36), dec!(0)]);
    assert_eq!(totals.summary.subtotal, dec!(90));
    assert_eq!(totals.summary.total_discount, dec!(4));
    assert_eq!(totals.summary.addenda_cost, dec!(175));
    assert_eq!(totals.summary.grand_total, dec!(261));
    assert_eq!(totals.display.grand_total, "261.000 DT");
    assert_eq!(totals.display.addenda_cost, "175.000 DT");
}

#[test]
fn test_invoice_totals_agree_with_line_totals() {
    let document = yaml_document(PRINTED_INVOICE_YAML);
    let totals = price_document(&document, None).unwrap();

    let lines: Decimal = document
        .items
        .iter()
        .map(|item| {
            compute_line_total(
                item.unit_price(),
                i64::try_from(item.quantity()).unwrap(),
                item.discount_percent(),
            )
        })
        .sum();
    assert_eq!(
        totals.summary.grand_total,
        lines + totals.summary.addenda_cost
    );
}

#[test]
fn test_totals_serialize_for_persistence() {
    let document = yaml_document(PRINTED_INVOICE_YAML);
    let totals = price_document(&document, None).unwrap();
    let json = serde_json::to_value(&totals).unwrap();

    assert_eq!(json["kind"], "invoice");
    assert_eq!(json["reference"], "INV-2024-0042");
    assert_eq!(json["currency"], "TND");
    assert_eq!(json["mode"], "lineDiscounts");
    assert_eq!(json["lineTotals"].as_array().unwrap().len(), 3);
    assert!(json["summary"]["grandTotal"].is_string());
    assert_eq!(json["display"]["grandTotal"], "261.000 DT");
    assert!(json.get("volume").is_none());
}

#[test]
fn test_document_survives_reserialization() {
    let document = yaml_document(PRINTED_INVOICE_YAML);
    let json = serde_json::to_string(&document).unwrap();
    let reparsed = json_document(&json);
    assert_eq!(reparsed, document);
}

// ============================================================================
// Bulk quote dialog
// ============================================================================

#[test]
fn test_bulk_quote_with_bulk_schedule() {
    let document = json_document(BULK_QUOTE_JSON);
    assert_eq!(document.mode, PricingMode::VolumeTiers);

    let totals = price_document(&document, Some(&TierSchedule::bulk())).unwrap();
    assert_eq!(totals.summary.subtotal, dec!(108));
    assert_eq!(totals.summary.total_discount, dec!(16.2));
    assert_eq!(totals.summary.grand_total, dec!(91.8));
    assert_eq!(totals.display.grand_total, "91.800 DT");

    let volume = totals.volume.unwrap();
    assert_eq!(volume.total_quantity, 105);
    assert_eq!(volume.discount_percent, dec!(15));
    assert_eq!(volume.schedule, "bulk");
}

#[test]
fn test_bulk_quote_with_standard_schedule() {
    let document = json_document(BULK_QUOTE_JSON);
    let totals = price_document(&document, Some(&TierSchedule::standard())).unwrap();

    assert_eq!(totals.summary.total_discount, dec!(10.8));
    assert_eq!(totals.summary.grand_total, dec!(97.2));
    assert!(totals.volume.unwrap().next_tier.is_none());
}

#[test]
fn test_bulk_quote_requires_schedule() {
    let document = json_document(BULK_QUOTE_JSON);
    assert_eq!(
        price_document(&document, None),
        Err(PricingError::MissingSchedule)
    );
}

#[test]
fn test_bulk_quote_with_loaded_schedule() {
    let schedule: TierSchedule = serde_yaml::from_str(
        r"
name: trade-2025
version: 4
tiers:
  - min: 1
    max: 49
    discountPercent: 0
  - min: 50
    max: 199
    discountPercent: 7.5
  - min: 200
    discountPercent: 12
",
    )
    .unwrap();
    assert_eq!(schedule.validate(), Ok(()));

    let document = json_document(BULK_QUOTE_JSON);
    let totals = price_document(&document, Some(&schedule)).unwrap();
    let volume = totals.volume.unwrap();
    assert_eq!(volume.discount_percent, dec!(7.5));
    assert_eq!(volume.schedule_version, 4);
    assert_eq!(volume.next_tier.unwrap().units_needed, 95);
    assert_eq!(totals.summary.grand_total, dec!(99.9));
}

// ============================================================================
// Cart sidebar with form values
// ============================================================================

#[test]
fn test_messy_cart_is_coerced_not_rejected() {
    let document = json_document(MESSY_CART_JSON);

    let quantities: Vec<u64> = document.items.iter().map(|item| item.quantity()).collect();
    assert_eq!(quantities, vec![1, 3, 2, 7]);

    let totals = price_document(&document, None).unwrap();
    assert_eq!(
        totals.line_totals,
        vec![dec!(12.5), dec!(0), dec!(0), dec!(0)]
    );
    assert_eq!(totals.summary.subtotal, dec!(32.48));
    assert_eq!(totals.summary.total_discount, dec!(19.98));
    assert_eq!(totals.summary.addenda_cost, dec!(0));
    assert_eq!(totals.summary.grand_total, dec!(12.5));
    assert_eq!(totals.display.grand_total, "$12.50");
}

#[test]
fn test_messy_cart_serializes_sanitized_values() {
    let document = json_document(MESSY_CART_JSON);
    let json: Value = serde_json::to_value(&document).unwrap();

    assert_eq!(json["items"][1]["unitPrice"], "0");
    assert_eq!(json["items"][2]["discountPercent"], "100");
    assert_eq!(json["items"][2]["unitPrice"], "9.99");
}
