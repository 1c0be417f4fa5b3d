//! Kinds of commercial documents that carry priced line items.

use serde::{Deserialize, Serialize};

/// The commercial document a set of line items belongs to.
///
/// Every surface that shows totals (invoice editor, quote dialog, checkout,
/// cart sidebar) prices through the same engine; the kind is carried through
/// so the caller can label the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Admin-issued invoice.
    Invoice,
    /// Customer quote request.
    #[default]
    Quote,
    /// Placed order.
    Order,
    /// Cart contents before checkout.
    Cart,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invoice => write!(f, "invoice"),
            Self::Quote => write!(f, "quote"),
            Self::Order => write!(f, "order"),
            Self::Cart => write!(f, "cart"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoice" => Ok(Self::Invoice),
            "quote" => Ok(Self::Quote),
            "order" => Ok(Self::Order),
            "cart" => Ok(Self::Cart),
            _ => Err(format!("invalid document kind: {s}")),
        }
    }
}
