//! Tests for profitability analysis.

use finstat_shared::types::{CustomerId, OrderId, ProductId};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::ledger::Period;
use crate::reports::ReportError;

fn line(
    customer: &str,
    product: &str,
    order: &str,
    quantity: Decimal,
    unit_price: Decimal,
    unit_cost: Option<Decimal>,
) -> RevenueCostLine {
    RevenueCostLine {
        customer_id: CustomerId::new(customer),
        product_id: ProductId::new(product),
        order_id: OrderId::new(order),
        order_date: None,
        quantity,
        unit_price,
        unit_cost,
    }
}

fn query(dimension: ProfitabilityDimension, limit: usize) -> ProfitabilityQuery {
    ProfitabilityQuery {
        dimension,
        limit,
        estimated_cost_ratio: dec!(0.6),
    }
}

#[test]
fn test_missing_unit_cost_is_estimated() {
    let l = line("C1", "P1", "O1", dec!(2), dec!(50), None);
    assert_eq!(l.revenue(), dec!(100));
    assert_eq!(l.cost(dec!(0.6)), dec!(60));
}

#[test]
fn test_analyze_by_customer() {
    let lines = vec![
        line("C1", "P1", "O1", dec!(2), dec!(50), Some(dec!(30))),
        line("C1", "P2", "O1", dec!(1), dec!(100), None),
        line("C1", "P1", "O2", dec!(1), dec!(50), Some(dec!(30))),
        line("C2", "P1", "O3", dec!(10), dec!(50), Some(dec!(45))),
    ];

    let report = ProfitabilityAnalyzer::analyze(
        &lines,
        Period::default(),
        &query(ProfitabilityDimension::Customer, 10),
        2,
    );

    assert_eq!(report.rows.len(), 2);
    let c1 = &report.rows[0];
    assert_eq!(c1.key, "C1");
    assert_eq!(c1.revenue, dec!(250));
    assert_eq!(c1.estimated_cost, dec!(150));
    assert_eq!(c1.gross_profit, dec!(100));
    assert_eq!(c1.gross_profit_margin, dec!(40.00));
    assert_eq!(c1.order_count, 2);
    assert_eq!(c1.quantity, dec!(4));

    assert_eq!(report.rows[1].gross_profit, dec!(50));
    assert_eq!(report.summary.total_revenue, dec!(750));
    assert_eq!(report.summary.total_gross_profit, dec!(150));
    assert_eq!(report.summary.overall_margin, dec!(20.00));
}

#[test]
fn test_analyze_by_product_truncates() {
    let lines = vec![
        line("C1", "P1", "O1", dec!(1), dec!(100), Some(dec!(10))),
        line("C1", "P2", "O1", dec!(1), dec!(100), Some(dec!(20))),
        line("C1", "P3", "O1", dec!(1), dec!(100), Some(dec!(30))),
    ];

    let report = ProfitabilityAnalyzer::analyze(
        &lines,
        Period::default(),
        &query(ProfitabilityDimension::Product, 2),
        2,
    );

    let keys: Vec<_> = report.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["P1", "P2"]);
    assert_eq!(report.summary.ranked_keys, 3);
    assert_eq!(report.summary.total_revenue, dec!(300));
}

#[test]
fn test_non_positive_revenue_excluded_from_ranking() {
    let lines = vec![
        line("C1", "P1", "O1", dec!(1), dec!(100), Some(dec!(50))),
        line("C2", "P1", "O2", dec!(1), dec!(0), Some(dec!(5))),
        line("C3", "P1", "O3", dec!(-1), dec!(40), Some(dec!(20))),
    ];

    let report = ProfitabilityAnalyzer::analyze(
        &lines,
        Period::default(),
        &query(ProfitabilityDimension::Customer, 10),
        2,
    );

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.summary.ranked_keys, 1);
    assert_eq!(report.summary.excluded_keys, 2);
    // 100 + 0 - 40
    assert_eq!(report.summary.total_revenue, dec!(60));
    // 50 + 5 - 20
    assert_eq!(report.summary.total_cost, dec!(35));
}

#[test]
fn test_margin_without_revenue_is_zero() {
    assert_eq!(ProfitabilityAnalyzer::margin(dec!(10), Decimal::ZERO), Decimal::ZERO);
}

#[rstest]
#[case("customer", ProfitabilityDimension::Customer)]
#[case("Product", ProfitabilityDimension::Product)]
#[case(" CUSTOMER ", ProfitabilityDimension::Customer)]
fn test_parse_dimension(#[case] input: &str, #[case] expected: ProfitabilityDimension) {
    assert_eq!(input.parse::<ProfitabilityDimension>().unwrap(), expected);
}

#[test]
fn test_parse_dimension_rejects_unknown() {
    let err = "region".parse::<ProfitabilityDimension>().unwrap_err();
    assert!(matches!(err, ReportError::InvalidParameter { .. }));
    assert!(err.to_string().contains("region"));
}
