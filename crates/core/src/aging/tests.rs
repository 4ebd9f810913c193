//! Tests for receivables aging.

use chrono::NaiveDate;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invoice(customer: &str, due: NaiveDate, amount: Decimal) -> ReceivableInvoice {
    ReceivableInvoice::new(customer, due - chrono::Days::new(30), due, amount)
}

#[rstest]
#[case(-5, AgingBucket::Current)]
#[case(0, AgingBucket::Current)]
#[case(1, AgingBucket::Days1To30)]
#[case(30, AgingBucket::Days1To30)]
#[case(31, AgingBucket::Days31To60)]
#[case(60, AgingBucket::Days31To60)]
#[case(61, AgingBucket::Days61To90)]
#[case(90, AgingBucket::Days61To90)]
#[case(91, AgingBucket::Over90)]
fn test_bucket_for_days(#[case] days: i64, #[case] expected: AgingBucket) {
    assert_eq!(AgingBucket::for_days(days), expected);
}

#[test]
fn test_invoice_74_days_overdue_lands_in_61_90() {
    let inv = invoice("C1", date(2024, 1, 1), dec!(100));
    let days = inv.days_overdue(date(2024, 3, 15));
    assert_eq!(days, 74);
    assert_eq!(AgingBucket::for_days(days).to_string(), "61-90");
    assert_eq!(serde_json::to_value(AgingBucket::for_days(days)).unwrap(), "61-90");

    let report = AgingEngine::age(&[inv], &AgingQuery::new(date(2024, 3, 15), 10), 2);
    assert_eq!(report.customers[0].buckets.days61to90, dec!(100));
    assert_eq!(report.customers[0].max_days_overdue, 74);
}

#[test]
fn test_customer_rollup() {
    let as_of = date(2024, 3, 15);
    let invoices = vec![
        invoice("C1", date(2024, 3, 20), dec!(100)),
        invoice("C1", date(2024, 3, 1), dec!(200)).with_paid(dec!(50)),
        invoice("C1", date(2023, 11, 1), dec!(300)),
        invoice("C2", date(2024, 3, 10), dec!(80)).with_paid(dec!(80)),
    ];

    let report = AgingEngine::age(&invoices, &AgingQuery::new(as_of, 10), 2);

    assert_eq!(report.customers.len(), 1);
    let c1 = &report.customers[0];
    assert_eq!(c1.total_outstanding, dec!(550));
    assert_eq!(c1.buckets.current, dec!(100));
    assert_eq!(c1.buckets.days1to30, dec!(150));
    assert_eq!(c1.buckets.over90_days, dec!(300));
    assert_eq!(c1.invoice_count, 3);
    assert_eq!(c1.max_days_overdue, 135);
    // (0 + 14 + 135) / 3
    assert_eq!(c1.avg_days_overdue, dec!(49.67));
}

#[test]
fn test_include_paid_counts_settled_invoices() {
    let as_of = date(2024, 3, 15);
    let invoices = vec![
        invoice("C1", date(2024, 3, 1), dec!(100)),
        invoice("C2", date(2024, 3, 10), dec!(80)).with_paid(dec!(80)),
    ];

    let report = AgingEngine::age(&invoices, &AgingQuery::new(as_of, 10).including_paid(), 2);

    assert_eq!(report.customers.len(), 2);
    assert_eq!(report.customers[1].customer_id.as_str(), "C2");
    assert_eq!(report.customers[1].total_outstanding, Decimal::ZERO);
    assert_eq!(report.summary.invoice_count, 2);
}

#[test]
fn test_ranking_ties_and_truncation_keep_full_summary() {
    let as_of = date(2024, 3, 15);
    let invoices = vec![
        invoice("C3", as_of, dec!(100)),
        invoice("C1", as_of, dec!(100)),
        invoice("C2", as_of, dec!(500)),
    ];

    let report = AgingEngine::age(&invoices, &AgingQuery::new(as_of, 2), 2);

    let ids: Vec<_> = report.customers.iter().map(|c| c.customer_id.as_str()).collect();
    assert_eq!(ids, vec!["C2", "C1"]);
    assert_eq!(report.summary.customer_count, 3);
    assert_eq!(report.summary.total_outstanding, dec!(700));
}

#[rstest]
#[case(dec!(21), RiskLevel::High)]
#[case(dec!(20), RiskLevel::Medium)]
#[case(dec!(10.5), RiskLevel::Medium)]
#[case(dec!(10), RiskLevel::Low)]
fn test_risk_level(#[case] share: Decimal, #[case] expected: RiskLevel) {
    assert_eq!(RiskLevel::from_over90_share(share), expected);
}

#[test]
fn test_summary_percentages() {
    let as_of = date(2024, 3, 15);
    let invoices = vec![
        invoice("C1", as_of, dec!(750)),
        invoice("C2", date(2023, 6, 1), dec!(250)),
    ];

    let summary = AgingEngine::age(&invoices, &AgingQuery::new(as_of, 10), 2).summary;

    assert_eq!(summary.percentages.current, dec!(75.00));
    assert_eq!(summary.percentages.over90_days, dec!(25.00));
    assert_eq!(summary.risk_level, RiskLevel::High);
}

#[test]
fn test_empty_feed() {
    let report = AgingEngine::age(&[], &AgingQuery::new(date(2024, 1, 1), 10), 2);
    assert!(report.customers.is_empty());
    assert_eq!(report.summary.total_outstanding, Decimal::ZERO);
    assert_eq!(report.summary.risk_level, RiskLevel::Low);
}

fn invoice_strategy() -> impl Strategy<Value = ReceivableInvoice> {
    (
        prop::sample::select(vec!["C1", "C2", "C3", "C4"]),
        0u64..400,
        (1i64..1_000_000).prop_map(|n| Decimal::new(n, 2)),
        (0i64..1_000_000).prop_map(|n| Decimal::new(n, 2)),
    )
        .prop_map(|(customer, offset, due, paid)| {
            invoice(customer, date(2023, 6, 1) + chrono::Days::new(offset), due).with_paid(paid)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each customer's buckets sum to its total outstanding.
    #[test]
    fn prop_buckets_sum_to_total(
        invoices in prop::collection::vec(invoice_strategy(), 0..40),
        offset in 0u64..500,
        include_paid in any::<bool>(),
    ) {
        let mut query = AgingQuery::new(date(2023, 6, 1) + chrono::Days::new(offset), 100);
        query.include_paid = include_paid;
        let report = AgingEngine::age(&invoices, &query, 2);

        for customer in &report.customers {
            prop_assert_eq!(customer.buckets.total(), customer.total_outstanding);
        }
        prop_assert_eq!(report.summary.buckets.total(), report.summary.total_outstanding);
        let open: Decimal = invoices.iter().filter(|i| i.is_open()).map(ReceivableInvoice::outstanding).sum();
        prop_assert_eq!(report.summary.total_outstanding, open);
    }
}
