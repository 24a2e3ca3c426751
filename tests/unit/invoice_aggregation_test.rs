// Property-based tests for monthly invoice aggregation
//
// - Net revenue per invoice = gross × (1 − tax/100), commission = net × rate/100
// - Monthly buckets only hold months inside the requested range
// - Bucket sums equal the per-invoice figures of in-range invoices

use chrono::{Duration, NaiveDate};
use consultant_performance::core::{MonthKey, MonthRange};
use consultant_performance::invoices::{Invoice, InvoiceAggregator};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn invoice_strategy() -> impl Strategy<Value = Invoice> {
    (
        0i64..730,
        -1_000_000i64..100_000_000,
        proptest::option::of(0u32..=100),
        proptest::option::of(0u32..=100),
    )
        .prop_map(|(offset, cents, tax, commission)| {
            let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            Invoice::new(
                "ana",
                base + Duration::days(offset),
                Decimal::new(cents, 2),
                tax.map(Decimal::from),
                commission.map(Decimal::from),
            )
        })
}

fn range_strategy() -> impl Strategy<Value = MonthRange> {
    (0u32..24, 0u32..24).prop_map(|(a, b)| {
        let start = MonthKey::new(2023, 1).unwrap();
        let nth = |n: u32| (0..n).fold(start, |m, _| m.succ().unwrap());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        MonthRange::new(nth(lo), nth(hi)).unwrap()
    })
}

proptest! {
    #[test]
    fn test_buckets_stay_inside_range(
        invoices in proptest::collection::vec(invoice_strategy(), 0..40),
        range in range_strategy()
    ) {
        let buckets = InvoiceAggregator::monthly(&invoices, &range);

        for month in buckets.keys() {
            prop_assert!(range.contains(*month), "bucket {} outside range", month);
        }
    }

    #[test]
    fn test_bucket_sums_match_in_range_invoices(
        invoices in proptest::collection::vec(invoice_strategy(), 0..40),
        range in range_strategy()
    ) {
        let buckets = InvoiceAggregator::monthly(&invoices, &range);

        let in_range: Vec<&Invoice> = invoices
            .iter()
            .filter(|inv| range.contains(inv.month()))
            .collect();

        let expected_net: Decimal = in_range.iter().map(|inv| inv.net_revenue()).sum();
        let expected_commission: Decimal = in_range.iter().map(|inv| inv.commission()).sum();

        let net: Decimal = buckets.values().map(|b| b.net_revenue).sum();
        let commission: Decimal = buckets.values().map(|b| b.commission).sum();

        prop_assert_eq!(net, expected_net);
        prop_assert_eq!(commission, expected_commission);
    }

    #[test]
    fn test_zero_rates_keep_gross_as_net(
        cents in 0i64..100_000_000
    ) {
        let gross = Decimal::new(cents, 2);
        let invoice = Invoice::new(
            "ana",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            gross,
            None,
            Some(Decimal::ZERO),
        );

        prop_assert_eq!(invoice.net_revenue(), gross);
        prop_assert_eq!(invoice.commission(), Decimal::ZERO);
    }
}

#[test]
fn test_percentage_rates_are_converted_once() {
    let invoice = Invoice::new(
        "ana",
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        dec!(1000.00),
        Some(dec!(10)),
        Some(dec!(5)),
    );

    assert_eq!(invoice.net_revenue(), dec!(900.00));
    assert_eq!(invoice.commission(), dec!(45.00));
}

#[test]
fn test_full_precision_is_kept_before_aggregation() {
    // 3 × 0.333 net each; truncating per invoice would lose the third cent
    let invoices: Vec<Invoice> = (1..=3)
        .map(|day| {
            Invoice::new(
                "ana",
                NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                dec!(0.37),
                Some(dec!(10)),
                None,
            )
        })
        .collect();

    let range = MonthRange::new(MonthKey::new(2024, 3).unwrap(), MonthKey::new(2024, 3).unwrap()).unwrap();
    let buckets = InvoiceAggregator::monthly(&invoices, &range);

    assert_eq!(buckets[&MonthKey::new(2024, 3).unwrap()].net_revenue, dec!(0.999));
}
