//! Aging data types.

use chrono::NaiveDate;
use finstat_shared::types::CustomerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice as delivered by the receivables feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivableInvoice {
    /// Customer the invoice was issued to.
    pub customer_id: CustomerId,
    /// Customer display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Invoice number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Issue date.
    pub invoice_date: NaiveDate,
    /// Due date.
    pub due_date: NaiveDate,
    /// Invoiced amount.
    pub amount_due: Decimal,
    /// Amount paid so far.
    #[serde(default)]
    pub amount_paid: Decimal,
}

impl ReceivableInvoice {
    /// Creates an unpaid invoice.
    #[must_use]
    pub fn new(
        customer_id: impl Into<CustomerId>,
        invoice_date: NaiveDate,
        due_date: NaiveDate,
        amount_due: Decimal,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            customer_name: None,
            invoice_number: None,
            invoice_date,
            due_date,
            amount_due,
            amount_paid: Decimal::ZERO,
        }
    }

    /// Records a payment amount.
    #[must_use]
    pub fn with_paid(mut self, amount_paid: Decimal) -> Self {
        self.amount_paid = amount_paid;
        self
    }

    /// Amount still owed.
    #[must_use]
    pub fn outstanding(&self) -> Decimal {
        self.amount_due - self.amount_paid
    }

    /// Returns true while something is still owed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.outstanding() > Decimal::ZERO
    }

    /// Days past the due date; zero or negative when not yet due.
    #[must_use]
    pub fn days_overdue(&self, as_of: NaiveDate) -> i64 {
        (as_of - self.due_date).num_days()
    }
}

/// Age bucket of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgingBucket {
    /// Not yet due.
    Current,
    /// 1 to 30 days overdue.
    #[serde(rename = "1-30")]
    Days1To30,
    /// 31 to 60 days overdue.
    #[serde(rename = "31-60")]
    Days31To60,
    /// 61 to 90 days overdue.
    #[serde(rename = "61-90")]
    Days61To90,
    /// More than 90 days overdue.
    Over90,
}

impl AgingBucket {
    /// Picks the bucket for a number of days overdue.
    #[must_use]
    pub const fn for_days(days_overdue: i64) -> Self {
        match days_overdue {
            i64::MIN..=0 => Self::Current,
            1..=30 => Self::Days1To30,
            31..=60 => Self::Days31To60,
            61..=90 => Self::Days61To90,
            _ => Self::Over90,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Days1To30 => "1-30",
            Self::Days31To60 => "31-60",
            Self::Days61To90 => "61-90",
            Self::Over90 => "Over90",
        }
    }
}

impl std::fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outstanding amounts per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAmounts {
    /// Not yet due.
    pub current: Decimal,
    /// 1 to 30 days overdue.
    pub days1to30: Decimal,
    /// 31 to 60 days overdue.
    pub days31to60: Decimal,
    /// 61 to 90 days overdue.
    pub days61to90: Decimal,
    /// More than 90 days overdue.
    pub over90_days: Decimal,
}

impl BucketAmounts {
    /// Adds an amount to one bucket.
    pub fn add(&mut self, bucket: AgingBucket, amount: Decimal) {
        let slot = match bucket {
            AgingBucket::Current => &mut self.current,
            AgingBucket::Days1To30 => &mut self.days1to30,
            AgingBucket::Days31To60 => &mut self.days31to60,
            AgingBucket::Days61To90 => &mut self.days61to90,
            AgingBucket::Over90 => &mut self.over90_days,
        };
        *slot += amount;
    }

    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.current + self.days1to30 + self.days31to60 + self.days61to90 + self.over90_days
    }
}

/// Aging of one customer's receivables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAging {
    /// Customer.
    pub customer_id: CustomerId,
    /// Customer display name, when the feed carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Total outstanding; equals the sum of the buckets.
    pub total_outstanding: Decimal,
    /// Per-bucket amounts.
    #[serde(flatten)]
    pub buckets: BucketAmounts,
    /// Invoices counted.
    pub invoice_count: usize,
    /// Mean days overdue, counting not-yet-due invoices as zero.
    pub avg_days_overdue: Decimal,
    /// Largest days overdue, zero when nothing is overdue.
    pub max_days_overdue: i64,
}

/// Share of the total outstanding per bucket, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPercentages {
    /// Not yet due.
    pub current: Decimal,
    /// 1 to 30 days overdue.
    pub days1to30: Decimal,
    /// 31 to 60 days overdue.
    pub days31to60: Decimal,
    /// 61 to 90 days overdue.
    pub days61to90: Decimal,
    /// More than 90 days overdue.
    pub over90_days: Decimal,
}

/// Collection risk of the receivables portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Over-90 share at most 10%.
    Low,
    /// Over-90 share above 10%.
    Medium,
    /// Over-90 share above 20%.
    High,
}

impl RiskLevel {
    /// Rates the share of the portfolio more than 90 days overdue, in percent.
    #[must_use]
    pub fn from_over90_share(share_pct: Decimal) -> Self {
        if share_pct > Decimal::from(20) {
            Self::High
        } else if share_pct > Decimal::TEN {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Portfolio-wide aging summary over every customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingSummary {
    /// Total outstanding.
    pub total_outstanding: Decimal,
    /// Per-bucket totals.
    pub buckets: BucketAmounts,
    /// Per-bucket share of the total.
    pub percentages: BucketPercentages,
    /// Risk label.
    pub risk_level: RiskLevel,
    /// Customers with counted invoices.
    pub customer_count: usize,
    /// Invoices counted.
    pub invoice_count: usize,
}

/// Aging report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingReport {
    /// Reference date.
    pub as_of_date: NaiveDate,
    /// Customers by total outstanding, largest first.
    pub customers: Vec<CustomerAging>,
    /// Summary over all customers, before truncation.
    pub summary: AgingSummary,
}

/// Parameters of an aging run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgingQuery {
    /// Reference date.
    pub as_of: NaiveDate,
    /// Also count fully paid invoices.
    pub include_paid: bool,
    /// Maximum number of customers listed.
    pub limit: usize,
}

impl AgingQuery {
    /// Creates a query over open invoices.
    #[must_use]
    pub const fn new(as_of: NaiveDate, limit: usize) -> Self {
        Self {
            as_of,
            include_paid: false,
            limit,
        }
    }

    /// Also counts fully paid invoices.
    #[must_use]
    pub const fn including_paid(mut self) -> Self {
        self.include_paid = true;
        self
    }
}
