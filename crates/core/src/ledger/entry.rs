//! Ledger posting domain types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Side of a ledger posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry (increases assets/expenses, decreases liabilities/equity/revenue).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/equity/revenue).
    Credit,
}

/// A single posting against one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// The account affected by this entry.
    pub account_number: u32,
    /// Voucher date.
    pub voucher_date: NaiveDate,
    /// Whether this is a credit posting.
    pub is_credit: bool,
    /// Unsigned amount.
    pub amount: Decimal,
    /// Dimension tags, one value per dimension at most.
    #[serde(default)]
    pub dimension_tags: BTreeMap<Dimension, String>,
    /// Voucher the posting belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_number: Option<String>,
    /// Optional description for this line item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LedgerEntry {
    /// Creates a debit posting without tags.
    #[must_use]
    pub fn debit(account_number: u32, voucher_date: NaiveDate, amount: Decimal) -> Self {
        Self::posting(account_number, voucher_date, false, amount)
    }

    /// Creates a credit posting without tags.
    #[must_use]
    pub fn credit(account_number: u32, voucher_date: NaiveDate, amount: Decimal) -> Self {
        Self::posting(account_number, voucher_date, true, amount)
    }

    fn posting(account_number: u32, voucher_date: NaiveDate, is_credit: bool, amount: Decimal) -> Self {
        Self {
            account_number,
            voucher_date,
            is_credit,
            amount,
            dimension_tags: BTreeMap::new(),
            voucher_number: None,
            description: None,
        }
    }

    /// Tags the posting with a dimension value.
    #[must_use]
    pub fn with_tag(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        self.dimension_tags.insert(dimension, value.into());
        self
    }

    /// Returns whether this is a debit or credit.
    #[must_use]
    pub const fn entry_type(&self) -> EntryType {
        if self.is_credit {
            EntryType::Credit
        } else {
            EntryType::Debit
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type() {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }

    /// Returns the value tagged for a dimension, if any.
    #[must_use]
    pub fn tag(&self, dimension: Dimension) -> Option<&str> {
        self.dimension_tags.get(&dimension).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(LedgerEntry::debit(5500, date(), dec!(400)).signed_amount(), dec!(400));
        assert_eq!(LedgerEntry::credit(3500, date(), dec!(1000)).signed_amount(), dec!(-1000));
    }

    #[test]
    fn test_tags() {
        let entry = LedgerEntry::debit(5500, date(), dec!(1)).with_tag(Dimension::R1, "100");
        assert_eq!(entry.tag(Dimension::R1), Some("100"));
        assert_eq!(entry.tag(Dimension::R2), None);
    }

    #[test]
    fn test_deserialize_without_tags() {
        let json = r#"{"account_number":1930,"voucher_date":"2024-01-31","is_credit":false,"amount":"12.50"}"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.signed_amount(), dec!(12.50));
        assert!(entry.dimension_tags.is_empty());
    }
}
