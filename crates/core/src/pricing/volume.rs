//! Tiered volume discounts for bulk quotes.
//!
//! A volume discount is selected by the aggregate quantity across all line
//! items and applied to the aggregate subtotal. It supersedes per-item
//! discounts: line discount percentages are ignored in this flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;
use super::line_item::{clamp_percent, percent_of};

/// One band of a volume discount table. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDiscountTier {
    pub min: u64,
    /// Upper bound; `None` means unbounded.
    #[serde(default)]
    pub max: Option<u64>,
    pub discount_percent: Decimal,
}

impl VolumeDiscountTier {
    #[must_use]
    pub const fn new(min: u64, max: u64, discount_percent: Decimal) -> Self {
        Self {
            min,
            max: Some(max),
            discount_percent,
        }
    }

    /// A tier with no upper bound.
    #[must_use]
    pub const fn unbounded(min: u64, discount_percent: Decimal) -> Self {
        Self {
            min,
            max: None,
            discount_percent,
        }
    }

    /// Whether `quantity` falls within `[min, max]`.
    #[must_use]
    pub fn contains(&self, quantity: u64) -> bool {
        quantity >= self.min && self.max.is_none_or(|max| quantity <= max)
    }
}

/// Outcome of applying a volume discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDiscountResult {
    pub total_quantity: u64,
    /// Zero when no tier matched.
    pub discount_percent: Decimal,
    /// `Σ unit_price × quantity`, ignoring per-item discounts.
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

/// The next tier a quantity could reach, and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTier {
    pub tier: VolumeDiscountTier,
    pub units_needed: u64,
}

/// Select the tier for `quantity`.
///
/// Tiers are scanned in ascending `min` order and the first one containing
/// the quantity wins, regardless of the order they are stored in.
#[must_use]
pub fn select_tier(tiers: &[VolumeDiscountTier], quantity: u64) -> Option<&VolumeDiscountTier> {
    tiers
        .iter()
        .filter(|tier| tier.contains(quantity))
        .min_by_key(|tier| tier.min)
}

/// Apply a tiered volume discount across all items.
///
/// ```
/// use packstore_core::{LineItem, VolumeDiscountTier, apply_volume_discount};
/// use rust_decimal::Decimal;
///
/// let tiers = [
///     VolumeDiscountTier::new(11, 20, Decimal::from(5)),
///     VolumeDiscountTier::unbounded(21, Decimal::from(10)),
/// ];
/// let items = [LineItem::new(Decimal::from(2), 25, Decimal::ZERO)];
///
/// let result = apply_volume_discount(&items, &tiers);
/// assert_eq!(result.discount_percent, Decimal::from(10));
/// assert_eq!(result.total, Decimal::from(45));
/// ```
#[must_use]
pub fn apply_volume_discount(
    items: &[LineItem],
    tiers: &[VolumeDiscountTier],
) -> VolumeDiscountResult {
    let total_quantity = items
        .iter()
        .fold(0_u64, |total, item| total.saturating_add(item.quantity()));
    let subtotal = items.iter().fold(Decimal::ZERO, |total, item| {
        total.saturating_add(item.gross_amount())
    });

    let discount_percent = select_tier(tiers, total_quantity)
        .map_or(Decimal::ZERO, |tier| clamp_percent(Some(tier.discount_percent)));
    let discount_amount = percent_of(subtotal, discount_percent);

    tracing::debug!(
        total_quantity,
        discount_percent = %discount_percent,
        "volume tier selected"
    );

    VolumeDiscountResult {
        total_quantity,
        discount_percent,
        subtotal,
        discount_amount,
        total: subtotal.saturating_sub(discount_amount),
    }
}

/// Find the closest tier that would raise the discount for `quantity`.
///
/// Returns `None` when the quantity already sits in the best reachable tier.
#[must_use]
pub fn next_volume_tier(quantity: u64, tiers: &[VolumeDiscountTier]) -> Option<NextTier> {
    let current = select_tier(tiers, quantity).map_or(Decimal::ZERO, |tier| tier.discount_percent);

    tiers
        .iter()
        .filter(|tier| tier.min > quantity && tier.discount_percent > current)
        .min_by_key(|tier| tier.min)
        .map(|tier| NextTier {
            tier: *tier,
            units_needed: tier.min - quantity,
        })
}
