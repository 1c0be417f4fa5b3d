//! Compute one line total from raw form values.
//!
//! Values are taken as typed into a form, so `--quantity abc` or
//! `--price -3` are accepted and coerced the same way the storefront does.

use packstore_core::pricing::lenient::{parse_decimal, parse_quantity};
use packstore_core::{CurrencyCode, LineItem, Money};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CliError, to_pretty_json};

/// The coerced line and its total.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub item: LineItem,
    pub discount_amount: Decimal,
    pub line_total: Decimal,
    pub display: String,
}

/// Build the report for raw price, quantity and discount strings.
#[must_use]
pub fn report(price: &str, quantity: &str, discount: &str, currency: CurrencyCode) -> LineReport {
    let item = LineItem::from_form(
        parse_decimal(price),
        parse_quantity(quantity),
        parse_decimal(discount),
    );
    let line_total = item.line_total();
    LineReport {
        discount_amount: item.discount_amount(),
        display: Money::new(line_total, currency).display(),
        line_total,
        item,
    }
}

/// Print the report as JSON.
///
/// # Errors
///
/// Returns an error if the report cannot be rendered.
pub fn print(
    price: &str,
    quantity: &str,
    discount: &str,
    currency: CurrencyCode,
) -> Result<(), CliError> {
    let rendered = to_pretty_json(&report(price, quantity, discount, currency))?;

    #[allow(clippy::print_stdout)]
    {
        println!("{rendered}");
    }

    Ok(())
}
