//! The pricing engine.
//!
//! Every storefront and back-office surface that shows a total prices through
//! this module, so invoices, quotes, carts and checkout can never disagree.
//!
//! All operations are pure: no I/O, no shared state, O(n) in line items.
//! Money is fixed-point [`rust_decimal::Decimal`] throughout and is never
//! rounded here; rounding belongs to [`crate::Money`] at display time.
//!
//! # Operations
//!
//! - [`compute_line_total`] - one line, its own discount applied
//! - [`compute_invoice_totals`] - per-line discounts plus a face-value addendum
//! - [`apply_volume_discount`] - one tiered discount over the whole quantity
//! - [`price_document`] - either of the above for a serialized document
//!
//! # Invalid input
//!
//! Pricing never fails on numbers. Negative or non-numeric prices become 0,
//! negative or non-numeric quantities become 1, and discounts are clamped to
//! `[0, 100]`. See [`lenient`] for how form values are read.

mod addendum;
pub mod document;
mod error;
pub mod lenient;
mod line_item;
mod schedule;
mod totals;
pub mod volume;

pub use addendum::AddendumCost;
pub use document::{DocumentTotals, PricingDocument, PricingMode, price_document};
pub use error::{PricingError, TierScheduleError};
pub use line_item::{LineItem, compute_line_total};
pub use schedule::TierSchedule;
pub use totals::{PricingSummary, compute_invoice_totals};
pub use volume::{
    VolumeDiscountResult, VolumeDiscountTier, apply_volume_discount, next_volume_tier,
};
