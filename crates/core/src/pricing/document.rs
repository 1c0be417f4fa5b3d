//! Pricing documents: the request a UI surface sends and the totals it gets back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::volume::NextTier;
use super::{
    AddendumCost, LineItem, PricingError, PricingSummary, TierSchedule, compute_invoice_totals,
};
use crate::types::{CurrencyCode, DocumentKind, Money};

/// How a document's discount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PricingMode {
    /// Each line carries its own discount percentage.
    #[default]
    LineDiscounts,
    /// One discount picked by total quantity from a tier schedule.
    VolumeTiers,
}

/// A document to price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDocument {
    #[serde(default)]
    pub kind: DocumentKind,
    /// Caller's own reference (invoice number, quote id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub mode: PricingMode,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addendum: Option<AddendumCost>,
}

/// Volume tier details attached to volume-priced totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDetails {
    pub schedule: String,
    pub schedule_version: u32,
    pub total_quantity: u64,
    pub discount_percent: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<NextTier>,
}

/// Totals formatted for display in the document's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTotals {
    pub subtotal: String,
    pub total_discount: String,
    pub addenda_cost: String,
    pub grand_total: String,
}

impl DisplayTotals {
    fn new(summary: &PricingSummary, currency: CurrencyCode) -> Self {
        let show = |amount: Decimal| Money::new(amount, currency).display();
        Self {
            subtotal: show(summary.subtotal),
            total_discount: show(summary.total_discount),
            addenda_cost: show(summary.addenda_cost),
            grand_total: show(summary.grand_total),
        }
    }
}

/// The priced result of a [`PricingDocument`].
///
/// `summary` holds unrounded figures; `display` holds the same figures rounded
/// to the currency's minor unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    pub kind: DocumentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub currency: CurrencyCode,
    pub mode: PricingMode,
    pub line_totals: Vec<Decimal>,
    pub summary: PricingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeDetails>,
    pub display: DisplayTotals,
}

impl DocumentTotals {
    /// The grand total as money in the document's currency.
    #[must_use]
    pub const fn grand_total(&self) -> Money {
        Money::new(self.summary.grand_total, self.currency)
    }
}

/// Price a document.
///
/// Line-discount documents go through [`compute_invoice_totals`]. Volume
/// documents use the schedule's tier for the whole quantity, then add the
/// addendum at face value.
///
/// # Errors
///
/// Returns [`PricingError::MissingSchedule`] when a volume-priced document is
/// given no schedule.
pub fn price_document(
    document: &PricingDocument,
    schedule: Option<&TierSchedule>,
) -> Result<DocumentTotals, PricingError> {
    let addendum = document.addendum.as_ref();

    let (summary, line_totals, volume) = match document.mode {
        PricingMode::LineDiscounts => {
            let line_totals = document.items.iter().map(LineItem::line_total).collect();
            (
                compute_invoice_totals(&document.items, addendum),
                line_totals,
                None,
            )
        }
        PricingMode::VolumeTiers => {
            let schedule = schedule.ok_or(PricingError::MissingSchedule)?;
            let result = schedule.apply(&document.items);
            let addenda_cost = addendum.map_or(Decimal::ZERO, AddendumCost::total);
            let summary = PricingSummary {
                subtotal: result.subtotal,
                total_discount: result.discount_amount,
                addenda_cost,
                grand_total: result.total.saturating_add(addenda_cost),
            };
            let line_totals = document.items.iter().map(LineItem::gross_amount).collect();
            let volume = VolumeDetails {
                schedule: schedule.name.clone(),
                schedule_version: schedule.version,
                total_quantity: result.total_quantity,
                discount_percent: result.discount_percent,
                next_tier: schedule.next_tier(result.total_quantity),
            };
            (summary, line_totals, Some(volume))
        }
    };

    tracing::debug!(
        kind = %document.kind,
        reference = document.reference.as_deref().unwrap_or("-"),
        items = document.items.len(),
        grand_total = %summary.grand_total,
        "priced document"
    );

    Ok(DocumentTotals {
        kind: document.kind,
        reference: document.reference.clone(),
        currency: document.currency,
        mode: document.mode,
        line_totals,
        display: DisplayTotals::new(&summary, document.currency),
        summary,
        volume,
    })
}
