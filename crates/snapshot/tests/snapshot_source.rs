//! End-to-end report derivation over the bundled first-quarter snapshot.

use chrono::NaiveDate;
use finstat_core::aging::RiskLevel;
use finstat_core::budget::VarianceStatus;
use finstat_core::ledger::Period;
use finstat_core::ratios::LiquidityRating;
use finstat_core::ReportService;
use finstat_shared::{AppError, ReportingConfig};
use finstat_snapshot::{SnapshotError, SnapshotSource};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn first_quarter() -> Period {
    Period::between(date(2024, 1, 1), date(2024, 3, 31))
}

async fn service() -> ReportService<SnapshotSource> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/snapshot.json");
    let source = SnapshotSource::load(path).await.unwrap();
    ReportService::new(source, ReportingConfig::default())
}

#[tokio::test]
async fn test_fixture_loads() {
    let service = service().await;
    let snapshot = service.source().snapshot();
    assert_eq!(snapshot.accounts.len(), 14);
    assert_eq!(snapshot.ledger_entries.len(), 28);
    assert_eq!(snapshot.budget_targets.len(), 4);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let err = SnapshotSource::load("/nonexistent/finstat/snapshot.json")
        .await
        .unwrap_err();
    assert!(matches!(err, SnapshotError::Io { .. }));
    assert!(matches!(AppError::from(err), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_quarter_profit_and_loss() {
    let report = service()
        .await
        .profit_and_loss(first_quarter(), None)
        .await
        .unwrap();

    assert_eq!(report.figures.revenue, dec!(42000));
    assert_eq!(report.figures.cost_of_goods_sold, dec!(17000));
    assert_eq!(report.figures.gross_profit, dec!(25000));
    assert_eq!(report.figures.operating_expenses, dec!(8000));
    assert_eq!(report.figures.operating_income, dec!(17000));
    assert_eq!(report.figures.financial_items, dec!(150));
    assert_eq!(report.figures.extraordinary_items, dec!(500));
    assert_eq!(report.figures.net_income, dec!(16350));
}

#[tokio::test]
async fn test_unclosed_result_shows_as_imbalance() {
    let report = service()
        .await
        .balance_sheet(date(2024, 3, 31), false)
        .await
        .unwrap();

    assert_eq!(report.assets.total, dec!(166350));
    assert_eq!(report.liabilities.total, dec!(100000));
    assert_eq!(report.equity.total, dec!(50000));
    assert_eq!(report.balance_check, dec!(16350));
    assert!(!report.is_balanced);
    assert!(report.equity.accounts.iter().all(|a| a.account_number != 2099));
}

#[tokio::test]
async fn test_trial_balance_balances() {
    let report = service()
        .await
        .trial_balance(date(2024, 3, 31))
        .await
        .unwrap();

    assert_eq!(report.accounts.len(), 12);
    assert_eq!(report.totals.total_debit, dec!(335650));
    assert_eq!(report.totals.total_credit, dec!(335650));
    assert!(report.totals.is_balanced);
}

#[tokio::test]
async fn test_cash_flow_reconciles_with_bank() {
    let report = service().await.cash_flow(first_quarter()).await.unwrap();

    assert_eq!(report.operating_activities.total, dec!(56350));
    assert_eq!(report.investing_activities.total, dec!(-60000));
    assert_eq!(report.financing_activities.total, dec!(95000));
    assert_eq!(report.net_cash_flow, dec!(91350));
    assert_eq!(report.cash_account_change, dec!(91350));
    assert!(report.reconciles);
}

#[tokio::test]
async fn test_quarter_ratios() {
    let report = service().await.ratios(first_quarter()).await.unwrap();

    assert_eq!(report.inputs.current_assets, dec!(106350));
    assert_eq!(report.inputs.current_liabilities, dec!(5000));
    assert_eq!(report.inputs.inventory, dec!(3000));
    assert_eq!(report.ratios.liquidity_ratios.working_capital, dec!(101350));
    assert_eq!(report.ratios.leverage_ratios.debt_to_equity, dec!(2.00));
    assert_eq!(report.ratios.interpretation.liquidity, LiquidityRating::Strong);
}

#[tokio::test]
async fn test_aging_skips_settled_and_future_invoices() {
    let report = service()
        .await
        .aging(date(2024, 3, 31), false, None)
        .await
        .unwrap();

    assert_eq!(report.customers.len(), 2);
    assert_eq!(report.customers[0].customer_id.as_str(), "C-100");
    assert_eq!(report.customers[0].buckets.days1to30, dec!(12000));
    assert_eq!(report.customers[1].buckets.over90_days, dec!(4500));
    assert_eq!(report.summary.total_outstanding, dec!(16500));
    assert_eq!(report.summary.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn test_customer_profitability_in_quarter() {
    let report = service()
        .await
        .profitability("customer", first_quarter(), None)
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].key, "C-100");
    assert_eq!(report.rows[0].gross_profit, dec!(17000));
    assert_eq!(report.rows[0].gross_profit_margin, dec!(56.67));
    assert_eq!(report.rows[1].gross_profit_margin, dec!(60.00));
    assert_eq!(report.summary.total_revenue, dec!(32500));
    assert_eq!(report.summary.overall_margin, dec!(56.92));
}

#[tokio::test]
async fn test_budget_variance_in_quarter() {
    let report = service()
        .await
        .variance(first_quarter(), dec!(5))
        .await
        .unwrap();

    assert_eq!(report.summary.accounts_compared, 4);
    assert_eq!(report.rows.len(), 4);
    assert_eq!(report.rows[0].account_number, 3010);
    assert_eq!(report.rows[0].variance, dec!(2000));
    assert_eq!(report.rows[0].variance_status, VarianceStatus::Favorable);
    assert_eq!(report.rows[1].variance_percentage, dec!(6.25));
    assert_eq!(report.rows[1].variance_status, VarianceStatus::Unfavorable);
    assert_eq!(report.summary.net_actual, dec!(16850));
    assert_eq!(report.summary.net_budget, dec!(16400));
    assert_eq!(report.summary.net_variance, dec!(450));
}

#[tokio::test]
async fn test_cost_center_breakdown() {
    let report = service()
        .await
        .dimensional("R1", first_quarter())
        .await
        .unwrap();

    let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["Retail", "Retail Stockholm", "Head office", "Untagged"]
    );
    assert_eq!(report.rows[0].total, dec!(-18000));
    assert_eq!(report.rows[1].parent_key.as_deref(), Some("100"));
    assert_eq!(report.rows[2].total, dec!(8000));
    assert_eq!(report.grand_total, dec!(0));
}
