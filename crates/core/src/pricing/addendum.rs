//! Fixed-cost add-ons such as printing or customization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// A fixed-cost add-on charged at face value.
///
/// Addenda bypass per-item discounting: they are added to the total after
/// line discounts are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawAddendum")]
pub struct AddendumCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    included: bool,
    unit_cost: Decimal,
    quantity: u64,
}

impl AddendumCost {
    /// Create an addendum. Negative cost or quantity is treated as zero.
    #[must_use]
    pub fn new(included: bool, unit_cost: Decimal, quantity: i64) -> Self {
        Self {
            label: None,
            included,
            unit_cost: coerce_non_negative(Some(unit_cost)),
            quantity: coerce_addendum_quantity(Some(quantity)),
        }
    }

    /// Attach a display label (e.g. "Logo printing").
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub const fn included(&self) -> bool {
        self.included
    }

    #[must_use]
    pub const fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// `unit_cost × quantity` when included, otherwise zero.
    #[must_use]
    pub fn total(&self) -> Decimal {
        if self.included {
            self.unit_cost.saturating_mul(Decimal::from(self.quantity))
        } else {
            Decimal::ZERO
        }
    }
}

fn coerce_non_negative(value: Option<Decimal>) -> Decimal {
    match value {
        Some(cost) if !cost.is_sign_negative() => cost,
        other => {
            tracing::debug!(input = ?other, "coercing invalid addendum cost to 0");
            Decimal::ZERO
        }
    }
}

// Unlike line items, a bad addendum quantity falls to 0 so no cost appears
// that the customer never asked for.
fn coerce_addendum_quantity(value: Option<i64>) -> u64 {
    value.and_then(|qty| u64::try_from(qty).ok()).unwrap_or_else(|| {
        tracing::debug!(input = ?value, "coercing invalid addendum quantity to 0");
        0
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAddendum {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    included: bool,
    #[serde(default, deserialize_with = "lenient::decimal")]
    unit_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::quantity")]
    quantity: Option<i64>,
}

impl From<RawAddendum> for AddendumCost {
    fn from(raw: RawAddendum) -> Self {
        Self {
            label: raw.label,
            included: raw.included,
            unit_cost: coerce_non_negative(raw.unit_cost),
            quantity: coerce_addendum_quantity(raw.quantity),
        }
    }
}
