//! Account master data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::{AccountClassifier, Category};

/// An account from the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account number.
    pub number: u32,
    /// Account name.
    pub name: String,
    /// Account group as labelled by the source system.
    #[serde(default)]
    pub group: String,
    /// Whether the account is suspended for new postings.
    #[serde(default)]
    pub suspended: bool,
}

impl Account {
    /// Creates an active account with an empty group.
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            group: String::new(),
            suspended: false,
        }
    }

    /// Returns the statement category for this account.
    #[must_use]
    pub fn category(&self) -> Category {
        AccountClassifier::classify(self.number)
    }
}

/// Immutable index over the accounts fetched for one request.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: BTreeMap<u32, Account>,
}

impl ChartOfAccounts {
    /// Builds the index. Later duplicates of an account number replace earlier ones.
    #[must_use]
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: accounts.into_iter().map(|a| (a.number, a)).collect(),
        }
    }

    /// Looks up an account by number.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Looks up an account that takes part in statement generation.
    #[must_use]
    pub fn reportable(&self, number: u32) -> Option<&Account> {
        self.get(number).filter(|a| AccountClassifier::is_reportable(a))
    }

    /// Iterates over reportable accounts in account-number order.
    pub fn reportable_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts
            .values()
            .filter(|a| AccountClassifier::is_reportable(a))
    }

    /// Returns the number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if there are no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
