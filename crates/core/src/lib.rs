//! Packstore Core - Pricing engine and shared types.
//!
//! This crate provides the one canonical pricing computation used across all
//! Packstore surfaces:
//! - invoice create/edit screens in the back-office
//! - cart sidebar and checkout dialogs on the storefront
//! - the multi-product bulk quote dialog
//! - `ps-cli` for pricing stored documents
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. Every pricing call is a synchronous function of its
//! inputs, so it can be used anywhere and called concurrently.
//!
//! # Modules
//!
//! - [`types`] - Money, currency codes and document kinds
//! - [`pricing`] - Line totals, invoice totals, volume tiers and documents

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::{
    AddendumCost, DocumentTotals, LineItem, PricingDocument, PricingError, PricingMode,
    PricingSummary, TierSchedule, TierScheduleError, VolumeDiscountResult, VolumeDiscountTier,
    apply_volume_discount, compute_invoice_totals, compute_line_total, next_volume_tier,
    price_document,
};
pub use types::*;
