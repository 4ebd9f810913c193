//! Receivables bucketing.

use std::collections::BTreeMap;

use finstat_shared::types::{CustomerId, round_display, safe_div};
use rust_decimal::Decimal;

use super::types::{
    AgingBucket, AgingQuery, AgingReport, AgingSummary, BucketAmounts, BucketPercentages,
    CustomerAging, ReceivableInvoice, RiskLevel,
};

#[derive(Default)]
struct CustomerAccumulator {
    name: Option<String>,
    buckets: BucketAmounts,
    invoice_count: usize,
    days_total: i64,
    max_days: i64,
}

/// Buckets receivables by days overdue.
pub struct AgingEngine;

impl AgingEngine {
    /// Ages invoices as of `query.as_of`.
    ///
    /// Settled invoices are skipped unless `query.include_paid` is set; they
    /// then count towards invoice counts and day statistics with a zero amount.
    #[must_use]
    pub fn age(invoices: &[ReceivableInvoice], query: &AgingQuery, precision: u32) -> AgingReport {
        let mut customers: BTreeMap<&CustomerId, CustomerAccumulator> = BTreeMap::new();

        for invoice in invoices {
            let is_open = invoice.is_open();
            if !is_open && !query.include_paid {
                continue;
            }

            let days = invoice.days_overdue(query.as_of).max(0);
            let acc = customers.entry(&invoice.customer_id).or_default();
            if acc.name.is_none() {
                acc.name.clone_from(&invoice.customer_name);
            }
            if is_open {
                acc.buckets.add(
                    AgingBucket::for_days(invoice.days_overdue(query.as_of)),
                    invoice.outstanding(),
                );
            }
            acc.invoice_count += 1;
            acc.days_total += days;
            acc.max_days = acc.max_days.max(days);
        }

        let mut rows: Vec<CustomerAging> = customers
            .into_iter()
            .map(|(id, acc)| CustomerAging {
                customer_id: id.clone(),
                customer_name: acc.name,
                total_outstanding: acc.buckets.total(),
                buckets: acc.buckets,
                invoice_count: acc.invoice_count,
                avg_days_overdue: round_display(
                    safe_div(
                        Decimal::from(acc.days_total),
                        Decimal::from(acc.invoice_count),
                    ),
                    precision,
                ),
                max_days_overdue: acc.max_days,
            })
            .collect();

        let summary = Self::summarize(&rows, precision);

        rows.sort_by(|a, b| {
            b.total_outstanding
                .cmp(&a.total_outstanding)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        rows.truncate(query.limit);

        AgingReport {
            as_of_date: query.as_of,
            customers: rows,
            summary,
        }
    }

    fn summarize(rows: &[CustomerAging], precision: u32) -> AgingSummary {
        let mut buckets = BucketAmounts::default();
        for row in rows {
            buckets.current += row.buckets.current;
            buckets.days1to30 += row.buckets.days1to30;
            buckets.days31to60 += row.buckets.days31to60;
            buckets.days61to90 += row.buckets.days61to90;
            buckets.over90_days += row.buckets.over90_days;
        }
        let total = buckets.total();
        let share = |amount: Decimal| safe_div(amount, total) * Decimal::ONE_HUNDRED;
        let over90_share = share(buckets.over90_days);

        AgingSummary {
            total_outstanding: total,
            buckets,
            percentages: BucketPercentages {
                current: round_display(share(buckets.current), precision),
                days1to30: round_display(share(buckets.days1to30), precision),
                days31to60: round_display(share(buckets.days31to60), precision),
                days61to90: round_display(share(buckets.days61to90), precision),
                over90_days: round_display(over90_share, precision),
            },
            risk_level: RiskLevel::from_over90_share(over90_share),
            customer_count: rows.len(),
            invoice_count: rows.iter().map(|r| r.invoice_count).sum(),
        }
    }
}
