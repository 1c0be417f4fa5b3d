//! Property tests for the pricing invariants.

#![allow(clippy::unwrap_used)]

use packstore_core::{
    AddendumCost, LineItem, TierSchedule, VolumeDiscountTier, apply_volume_discount,
    compute_invoice_totals, compute_line_total,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── Strategies ──────────────────────────────────────────────────────────────

/// A price between 0.000 and 9999.999 in millimes.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|millimes| Decimal::new(millimes, 3))
}

/// A discount between 0.00% and 100.00%.
fn arb_discount() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|basis| Decimal::new(basis, 2))
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_price(), 0i64..=1_000, arb_discount())
        .prop_map(|(price, quantity, discount)| LineItem::new(price, quantity, discount))
}

fn arb_lines() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(arb_line(), 0..=20)
}

fn arb_addendum() -> impl Strategy<Value = AddendumCost> {
    (any::<bool>(), arb_price(), 0i64..=5_000)
        .prop_map(|(included, cost, quantity)| AddendumCost::new(included, cost, quantity))
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    /// Line totals are never negative, whatever the input.
    #[test]
    fn line_total_is_never_negative(
        price in any::<i64>().prop_map(|raw| Decimal::new(raw, 3)),
        quantity in any::<i64>(),
        discount in any::<i32>().prop_map(|raw| Decimal::new(i64::from(raw), 2)),
    ) {
        prop_assert!(compute_line_total(price, quantity, discount) >= Decimal::ZERO);
    }

    /// The summary path and the per-line path agree exactly.
    #[test]
    fn grand_total_equals_sum_of_line_totals(lines in arb_lines(), addendum in arb_addendum()) {
        let summary = compute_invoice_totals(&lines, Some(&addendum));
        let line_sum: Decimal = lines.iter().map(LineItem::line_total).sum();
        prop_assert_eq!(summary.grand_total, line_sum + summary.addenda_cost);
    }

    /// Line discounts never touch the addendum.
    #[test]
    fn discounts_do_not_change_addenda_cost(
        lines in arb_lines(),
        addendum in arb_addendum(),
        new_discount in arb_discount(),
    ) {
        let before = compute_invoice_totals(&lines, Some(&addendum));
        let rediscounted: Vec<LineItem> = lines
            .iter()
            .map(|item| {
                LineItem::new(
                    item.unit_price(),
                    i64::try_from(item.quantity()).unwrap(),
                    new_discount,
                )
            })
            .collect();
        let after = compute_invoice_totals(&rediscounted, Some(&addendum));
        prop_assert_eq!(before.addenda_cost, after.addenda_cost);
        prop_assert_eq!(before.addenda_cost, addendum.total());
    }

    /// With no items only the addendum remains.
    #[test]
    fn empty_items_leave_only_addendum(addendum in arb_addendum()) {
        let summary = compute_invoice_totals(&[], Some(&addendum));
        prop_assert_eq!(summary.subtotal, Decimal::ZERO);
        prop_assert_eq!(summary.total_discount, Decimal::ZERO);
        prop_assert_eq!(summary.grand_total, summary.addenda_cost);
    }

    /// More units never mean a smaller volume discount on a contiguous table.
    #[test]
    fn volume_discount_is_monotonic(a in 0i64..500, b in 0i64..500) {
        let schedule = TierSchedule::bulk();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = schedule.apply(&[LineItem::new(dec!(1), low, dec!(0))]);
        let high = schedule.apply(&[LineItem::new(dec!(1), high, dec!(0))]);
        prop_assert!(low.discount_percent <= high.discount_percent);
    }

    /// Volume totals never exceed the undiscounted subtotal or fall below zero.
    #[test]
    fn volume_total_is_bounded(lines in arb_lines()) {
        let result = TierSchedule::bulk().apply(&lines);
        prop_assert!(result.total <= result.subtotal);
        prop_assert!(result.total >= Decimal::ZERO);
        prop_assert_eq!(result.total, result.subtotal - result.discount_amount);
    }
}

// ── Fixed scenarios ─────────────────────────────────────────────────────────

#[test]
fn test_tier_table_percentages() {
    let tiers = [
        VolumeDiscountTier::new(11, 20, dec!(5)),
        VolumeDiscountTier::new(21, 99, dec!(10)),
        VolumeDiscountTier::unbounded(100, dec!(15)),
    ];
    let percentages: Vec<Decimal> = [10, 11, 20, 21, 99, 100, 150]
        .into_iter()
        .map(|quantity| {
            apply_volume_discount(&[LineItem::new(dec!(2.5), quantity, dec!(0))], &tiers)
                .discount_percent
        })
        .collect();
    assert_eq!(
        percentages,
        vec![
            dec!(0),
            dec!(5),
            dec!(5),
            dec!(10),
            dec!(10),
            dec!(15),
            dec!(15)
        ]
    );
}

#[test]
fn test_thousand_small_items_sum_exactly() {
    let lines = vec![LineItem::new(dec!(0.1), 3, dec!(0)); 1_000];
    let summary = compute_invoice_totals(&lines, None);
    assert_eq!(summary.subtotal, dec!(300.00));
    assert_eq!(summary.subtotal.to_string(), "300.0");
}
