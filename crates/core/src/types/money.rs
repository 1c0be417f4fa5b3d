//! Type-safe money representation using decimal arithmetic.
//!
//! Amounts are carried at full precision through every pricing computation.
//! Rounding to the currency's minor unit happens only when a value crosses a
//! presentation boundary ([`Money::rounded`], [`Money::display`]).
//!
//! ```
//! use packstore_core::{CurrencyCode, Money};
//! use rust_decimal::Decimal;
//!
//! let total = Money::new(Decimal::new(2_610_004, 4), CurrencyCode::TND);
//! assert_eq!(total.display(), "261.000 DT");
//!
//! let total = Money::from_minor_units(1999, CurrencyCode::USD);
//! assert_eq!(total.display(), "$19.99");
//! ```

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing money-related values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The currency code is not one we price in.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// An amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dinars, not millimes).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create an amount from integer minor units (cents, millimes).
    #[must_use]
    pub fn from_minor_units(units: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(units, currency_code.minor_units()),
            currency_code,
        }
    }

    /// Round to the currency's minor unit, midpoint away from zero.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency_code.minor_units(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency_code: self.currency_code,
        }
    }

    /// Format for display (e.g., `$19.99`, `261.000 DT`).
    #[must_use]
    pub fn display(&self) -> String {
        let dp = self.currency_code.minor_units() as usize;
        let amount = self.rounded().amount;
        match self.currency_code {
            CurrencyCode::TND => format!("{amount:.dp$} DT"),
            other => format!("{}{amount:.dp$}", other.symbol()),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes the storefront prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Tunisian dinar, divided into 1000 millimes.
    #[default]
    TND,
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Number of decimal places in the minor unit.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::TND => 3,
            Self::USD | Self::EUR | Self::GBP | Self::CAD | Self::AUD => 2,
        }
    }

    /// Currency symbol used when formatting amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::TND => "DT",
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TND => "TND",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TND" => Ok(Self::TND),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(MoneyError::UnknownCurrency(s.to_owned())),
        }
    }
}
