//! Price a stored document.
//!
//! # Usage
//!
//! ```bash
//! # Invoice with per-line discounts
//! ps-cli price invoices/INV-0042.yaml
//!
//! # Bulk quote priced with the 5/10/15% table
//! ps-cli --schedule bulk price quotes/Q-118.json
//! ```
//!
//! The document format is the same JSON body the storefront and back-office
//! send: `kind`, `reference`, `currency`, `mode` (`lineDiscounts` or
//! `volumeTiers`), `items` and an optional `addendum`.

use std::path::Path;

use packstore_core::{DocumentTotals, PricingDocument, TierSchedule, price_document};
use tracing::info;

use super::{CliError, load_file, to_pretty_json};

/// Load a document and price it.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or a volume-priced document
/// has no schedule.
pub async fn run(path: &Path, schedule: Option<&TierSchedule>) -> Result<DocumentTotals, CliError> {
    let document: PricingDocument = load_file(path, "pricing document").await?;
    info!(
        path = %path.display(),
        kind = %document.kind,
        items = document.items.len(),
        "Pricing document"
    );

    let totals = price_document(&document, schedule)?;
    info!(grand_total = %totals.display.grand_total, "Document priced");
    Ok(totals)
}

/// Price a document and print the totals as JSON.
///
/// # Errors
///
/// See [`run`].
pub async fn print(path: &Path, schedule: Option<&TierSchedule>) -> Result<(), CliError> {
    let totals = run(path, schedule).await?;
    let rendered = to_pretty_json(&totals)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{rendered}");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    async fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ps-cli-{}-{name}", std::process::id()));
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_price_yaml_invoice() {
        let path = write_temp(
            "invoice.yaml",
            r"
kind: invoice
reference: INV-0042
items:
  - unitPrice: 25
    quantity: 2
  - unitPrice: 40
    quantity: 1
    discountPercent: 10
  - unitPrice: 60
    quantity: 0
    discountPercent: 50
addendum:
  label: Logo printing
  included: true
  unitCost: 0.35
  quantity: 500
",
        )
        .await;

        let totals = run(&path, None).await.unwrap();
        assert_eq!(totals.summary.grand_total, dec!(261));
        assert_eq!(totals.display.grand_total, "261.000 DT");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_volume_quote_without_schedule_fails() {
        let path = write_temp(
            "quote.json",
            r#"{"mode": "volumeTiers", "items": [{"unitPrice": "1.5", "quantity": 30}]}"#,
        )
        .await;

        let result = run(&path, None).await;
        assert!(matches!(result, Err(CliError::Pricing(_))));

        let totals = run(&path, Some(&TierSchedule::standard())).await.unwrap();
        assert_eq!(totals.summary.grand_total, dec!(40.5));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
