//! Line items and per-line totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// One product entry in an order, invoice, quote or cart.
///
/// Fields are sanitized on construction, so a `LineItem` always satisfies
/// `unit_price >= 0` and `0 <= discount_percent <= 100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawLineItem")]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    unit_price: Decimal,
    quantity: u64,
    discount_percent: Decimal,
}

impl LineItem {
    /// Create a line item, coercing unsafe inputs.
    ///
    /// A negative price becomes 0, a negative quantity becomes 1 and the
    /// discount is clamped to `[0, 100]`.
    #[must_use]
    pub fn new(unit_price: Decimal, quantity: i64, discount_percent: Decimal) -> Self {
        Self::from_form(Some(unit_price), Some(quantity), Some(discount_percent))
    }

    /// Create a line item from form values that may be missing or unparsable.
    ///
    /// A missing price becomes 0, a missing quantity becomes 1 and a missing
    /// discount becomes 0. See [`crate::pricing::lenient`] for parsing.
    #[must_use]
    pub fn from_form(
        unit_price: Option<Decimal>,
        quantity: Option<i64>,
        discount_percent: Option<Decimal>,
    ) -> Self {
        Self {
            title: None,
            unit_price: coerce_price(unit_price),
            quantity: coerce_quantity(quantity),
            discount_percent: clamp_percent(discount_percent),
        }
    }

    /// Attach a display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    #[must_use]
    pub const fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    /// `unit_price × quantity`, before any discount.
    #[must_use]
    pub fn gross_amount(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    /// The part of the gross amount removed by this line's own discount.
    #[must_use]
    pub fn discount_amount(&self) -> Decimal {
        percent_of(self.gross_amount(), self.discount_percent)
    }

    /// Gross amount minus this line's discount, never below zero.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.gross_amount()
            .saturating_sub(self.discount_amount())
            .max(Decimal::ZERO)
    }
}

/// Compute the total of a single line.
///
/// Inputs are coerced the same way [`LineItem::new`] coerces them, so the
/// result is always `>= 0` and the call never panics.
///
/// ```
/// use packstore_core::compute_line_total;
/// use rust_decimal::Decimal;
///
/// let total = compute_line_total(Decimal::from(40), 1, Decimal::from(10));
/// assert_eq!(total, Decimal::from(36));
/// ```
#[must_use]
pub fn compute_line_total(unit_price: Decimal, quantity: i64, discount_percent: Decimal) -> Decimal {
    LineItem::new(unit_price, quantity, discount_percent).line_total()
}

/// `amount × percent / 100`.
pub(crate) fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.saturating_mul(percent / Decimal::ONE_HUNDRED)
}

pub(crate) fn coerce_price(value: Option<Decimal>) -> Decimal {
    match value {
        Some(price) if !price.is_sign_negative() => price,
        other => {
            tracing::debug!(input = ?other, "coercing invalid unit price to 0");
            Decimal::ZERO
        }
    }
}

pub(crate) fn coerce_quantity(value: Option<i64>) -> u64 {
    match value.and_then(|qty| u64::try_from(qty).ok()) {
        Some(qty) => qty,
        None => {
            tracing::debug!(input = ?value, "coercing invalid quantity to 1");
            1
        }
    }
}

pub(crate) fn clamp_percent(value: Option<Decimal>) -> Decimal {
    let Some(percent) = value else {
        return Decimal::ZERO;
    };
    let clamped = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    if clamped != percent {
        tracing::debug!(input = %percent, clamped = %clamped, "discount percent out of range");
    }
    clamped
}

/// Wire shape of a line item before coercion.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLineItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    unit_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::quantity")]
    quantity: Option<i64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    discount_percent: Option<Decimal>,
}

impl From<RawLineItem> for LineItem {
    fn from(raw: RawLineItem) -> Self {
        let item = Self::from_form(raw.unit_price, raw.quantity, raw.discount_percent);
        match raw.title {
            Some(title) => item.with_title(title),
            None => item,
        }
    }
}
