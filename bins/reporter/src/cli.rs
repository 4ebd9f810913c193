//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use finstat_core::ledger::Period;
use rust_decimal::Decimal;

/// Financial statements and ratios from a ledger snapshot.
#[derive(Debug, Parser)]
#[command(name = "finstat", version, about)]
pub struct Cli {
    /// Snapshot file; defaults to `snapshot.path` from configuration.
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Print single-line JSON.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Drop null fields from the output.
    #[arg(long, global = true)]
    pub omit_nulls: bool,

    /// Report to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Optional reporting window. Either bound may be left open.
#[derive(Debug, Clone, Copy, Args)]
pub struct Window {
    /// First date included (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last date included (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl Window {
    /// Converts the bounds into a reporting window.
    pub const fn period(self) -> Period {
        Period::new(self.from, self.to)
    }
}

/// Available reports.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Profit & loss over a window.
    ProfitLoss {
        #[command(flatten)]
        window: Window,
        /// Start of the comparison window.
        #[arg(long)]
        prior_from: Option<NaiveDate>,
        /// End of the comparison window.
        #[arg(long)]
        prior_to: Option<NaiveDate>,
    },

    /// Balance sheet as of a date.
    BalanceSheet {
        /// Closing date.
        #[arg(long)]
        as_of: NaiveDate,
        /// List accounts with a zero balance.
        #[arg(long)]
        include_zero: bool,
    },

    /// Cash flow over a window.
    CashFlow {
        #[command(flatten)]
        window: Window,
    },

    /// Financial ratios; `--to` is required.
    Ratios {
        #[command(flatten)]
        window: Window,
    },

    /// Receivables aging as of a date.
    Aging {
        /// Aging date.
        #[arg(long)]
        as_of: NaiveDate,
        /// Count settled invoices too.
        #[arg(long)]
        include_paid: bool,
        /// Maximum number of customers listed.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Gross margin ranking by customer or product.
    Profitability {
        /// `customer` or `product`.
        #[arg(long, default_value = "customer")]
        by: String,
        #[command(flatten)]
        window: Window,
        /// Maximum number of rows listed.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Actual against budget per P&L account.
    Variance {
        #[command(flatten)]
        window: Window,
        /// Minimum absolute variance percentage listed.
        #[arg(long, default_value = "0")]
        threshold: Decimal,
    },

    /// Debit and credit totals per account as of a date.
    TrialBalance {
        /// Closing date.
        #[arg(long)]
        as_of: NaiveDate,
    },

    /// Balances per value of one dimension.
    Dimensional {
        /// `R1`..`R12` or `1`..`12`.
        #[arg(long)]
        dimension: String,
        #[command(flatten)]
        window: Window,
    },

    /// Statements, ratios, trial balance and aging in one document.
    All {
        /// Start of the income window.
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Closing date.
        #[arg(long)]
        as_of: NaiveDate,
    },
}

impl Command {
    /// Comparison window for `profit-loss`, when either bound is given.
    pub const fn prior_period(
        prior_from: Option<NaiveDate>,
        prior_to: Option<NaiveDate>,
    ) -> Option<Period> {
        if prior_from.is_none() && prior_to.is_none() {
            None
        } else {
            Some(Period::new(prior_from, prior_to))
        }
    }
}
