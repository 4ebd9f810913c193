//! finstat report runner
//!
//! Loads a ledger snapshot and prints one report as JSON on stdout.
//! Logs go to stderr.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use finstat_core::aging::AgingReport;
use finstat_core::format::{self, OutputOptions};
use finstat_core::ledger::Period;
use finstat_core::ratios::RatioReport;
use finstat_core::reports::{
    BalanceSheetReport, CashFlowReport, ProfitLossReport, TrialBalanceReport,
};
use finstat_core::ReportService;
use finstat_shared::config::LoggingConfig;
use finstat_shared::{AppConfig, AppError};
use finstat_snapshot::SnapshotSource;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

/// Every report that can be produced for one closing date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AllReports {
    profit_and_loss: ProfitLossReport,
    balance_sheet: BalanceSheetReport,
    cash_flow: CashFlowReport,
    ratios: RatioReport,
    trial_balance: TrialBalanceReport,
    aging: AgingReport,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => return fail(&AppError::from(err)),
    };

    if let Err(err) = init_tracing(&config.logging) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run(cli, config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(kind = err.error_code(), error = %err, "Report failed");
            fail(&err)
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            logging
                .json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with((!logging.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .try_init()
        .context("failed to install tracing subscriber")
}

/// Prints the structured error body and yields a failing exit status.
fn fail(err: &AppError) -> ExitCode {
    match serde_json::to_string_pretty(&err.to_body()) {
        Ok(body) => println!("{body}"),
        Err(_) => eprintln!("{err}"),
    }
    ExitCode::FAILURE
}

async fn run(cli: Cli, config: AppConfig) -> Result<String, AppError> {
    let options = OutputOptions {
        omit_nulls: cli.omit_nulls || config.reporting.omit_nulls,
        pretty: !cli.compact,
    };
    let path = cli
        .snapshot
        .unwrap_or_else(|| PathBuf::from(&config.snapshot.path));

    let source = SnapshotSource::load(&path).await?;
    let service = ReportService::new(source, config.reporting);
    info!(command = ?cli.command, "Running report");

    match cli.command {
        Command::ProfitLoss {
            window,
            prior_from,
            prior_to,
        } => {
            let prior = Command::prior_period(prior_from, prior_to);
            emit(&service.profit_and_loss(window.period(), prior).await?, options)
        }
        Command::BalanceSheet {
            as_of,
            include_zero,
        } => emit(&service.balance_sheet(as_of, include_zero).await?, options),
        Command::CashFlow { window } => emit(&service.cash_flow(window.period()).await?, options),
        Command::Ratios { window } => emit(&service.ratios(window.period()).await?, options),
        Command::Aging {
            as_of,
            include_paid,
            limit,
        } => emit(&service.aging(as_of, include_paid, limit).await?, options),
        Command::Profitability { by, window, limit } => emit(
            &service.profitability(&by, window.period(), limit).await?,
            options,
        ),
        Command::Variance { window, threshold } => {
            emit(&service.variance(window.period(), threshold).await?, options)
        }
        Command::TrialBalance { as_of } => emit(&service.trial_balance(as_of).await?, options),
        Command::Dimensional { dimension, window } => emit(
            &service.dimensional(&dimension, window.period()).await?,
            options,
        ),
        Command::All { from, as_of } => emit(&all(&service, from, as_of).await?, options),
    }
}

/// Runs the closing-date reports concurrently over the same snapshot.
async fn all(
    service: &ReportService<SnapshotSource>,
    from: Option<NaiveDate>,
    as_of: NaiveDate,
) -> Result<AllReports, AppError> {
    let period = Period::new(from, Some(as_of));
    let (profit_and_loss, balance_sheet, cash_flow, ratios, trial_balance, aging) = tokio::join!(
        service.profit_and_loss(period, None),
        service.balance_sheet(as_of, false),
        service.cash_flow(period),
        service.ratios(period),
        service.trial_balance(as_of),
        service.aging(as_of, false, None),
    );

    Ok(AllReports {
        profit_and_loss: profit_and_loss?,
        balance_sheet: balance_sheet?,
        cash_flow: cash_flow?,
        ratios: ratios?,
        trial_balance: trial_balance?,
        aging: aging?,
    })
}

fn emit<T: Serialize>(report: &T, options: OutputOptions) -> Result<String, AppError> {
    format::render(report, options).map_err(|e| AppError::Internal(e.to_string()))
}
