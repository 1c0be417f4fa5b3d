//! Lenient numeric deserialization for form-sourced values.
//!
//! Values reach the engine straight from form state: numbers, numeric strings,
//! empty strings, `null`, or junk. None of these may fail a request. Anything
//! that does not read as a number deserializes to `None` and the caller applies
//! its own safe default.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(Decimal),
    Text(String),
    Other(IgnoredAny),
}

impl Loose {
    fn into_decimal(self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(value),
            Self::Text(text) => parse_decimal(&text),
            Self::Other(_) => None,
        }
    }
}

/// Parse a user-typed number, accepting a decimal comma.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| trimmed.replace(',', ".").parse::<Decimal>())
        .ok()
}

/// Parse a user-typed integer quantity. Fractions truncate toward zero.
pub fn parse_quantity(text: &str) -> Option<i64> {
    parse_decimal(text).and_then(decimal_to_quantity)
}

fn decimal_to_quantity(value: Decimal) -> Option<i64> {
    value.trunc().to_i64()
}

/// Deserialize any value as an optional decimal.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.into_decimal())
}

/// Deserialize any value as an optional integer quantity.
pub(crate) fn quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?
        .into_decimal()
        .and_then(decimal_to_quantity))
}
