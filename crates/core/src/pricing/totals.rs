//! Invoice totals with per-line discounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AddendumCost, LineItem};

/// Totals derived from a set of line items and an optional addendum.
///
/// Always satisfies `grand_total == Σ line_total + addenda_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    /// `Σ unit_price × quantity`, before any discount.
    pub subtotal: Decimal,
    /// Sum of every line's own discount.
    pub total_discount: Decimal,
    /// Addendum cost, added at face value.
    pub addenda_cost: Decimal,
    /// `subtotal − total_discount + addenda_cost`.
    pub grand_total: Decimal,
}

/// Compute invoice totals.
///
/// Each line is discounted individually; the addendum is added after the
/// discounts and is never discounted itself. An empty item list yields zero
/// totals plus the addendum cost.
///
/// ```
/// use packstore_core::{AddendumCost, LineItem, compute_invoice_totals};
/// use rust_decimal::Decimal;
///
/// let items = [LineItem::new(Decimal::from(40), 1, Decimal::from(10))];
/// let printing = AddendumCost::new(true, Decimal::new(35, 2), 500);
///
/// let summary = compute_invoice_totals(&items, Some(&printing));
/// assert_eq!(summary.grand_total, Decimal::from(211));
/// ```
#[must_use]
pub fn compute_invoice_totals(
    items: &[LineItem],
    addendum: Option<&AddendumCost>,
) -> PricingSummary {
    let (subtotal, total_discount) =
        items
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(subtotal, discount), item| {
                (
                    subtotal.saturating_add(item.gross_amount()),
                    discount.saturating_add(item.discount_amount()),
                )
            });
    let addenda_cost = addendum.map_or(Decimal::ZERO, AddendumCost::total);

    PricingSummary {
        subtotal,
        total_discount,
        addenda_cost,
        grand_total: subtotal
            .saturating_sub(total_discount)
            .saturating_add(addenda_cost),
    }
}
