//! Range table mapping account numbers to categories.

use super::category::Category;
use crate::ledger::account::Account;

/// One inclusive range of account numbers and the category it maps to.
#[derive(Debug, Clone, Copy)]
struct RangeRule {
    first: u32,
    last: u32,
    category: Category,
}

impl RangeRule {
    const fn new(first: u32, last: u32, category: Category) -> Self {
        Self {
            first,
            last,
            category,
        }
    }

    const fn contains(&self, account_number: u32) -> bool {
        account_number >= self.first && account_number <= self.last
    }
}

/// Ordered, non-overlapping rules. First match wins.
const RULES: [RangeRule; 12] = [
    RangeRule::new(1000, 1399, Category::FixedAssets),
    RangeRule::new(1400, 1999, Category::CurrentAssets),
    RangeRule::new(2000, 2099, Category::Equity),
    RangeRule::new(2100, 2199, Category::UntaxedReserves),
    RangeRule::new(2200, 2399, Category::LongTermLiabilities),
    RangeRule::new(2400, 2999, Category::CurrentLiabilities),
    RangeRule::new(3000, 3999, Category::Revenue),
    RangeRule::new(4000, 4999, Category::CostOfGoodsSold),
    RangeRule::new(5000, 5999, Category::OperatingExpenses),
    RangeRule::new(6000, 6999, Category::FinancialItems),
    RangeRule::new(7000, 7999, Category::OtherIncomeExpense),
    RangeRule::new(8000, 8999, Category::ExtraordinaryItems),
];

/// Lowest account number that takes part in statement generation.
pub const FIRST_REPORTABLE: u32 = 1000;
/// Highest account number that takes part in statement generation.
pub const LAST_REPORTABLE: u32 = 8999;

/// Names the source system uses for unused chart slots.
const PLACEHOLDER_NAMES: [&str; 5] = ["n/a", "na", "unused", "placeholder", "tbd"];

/// Maps account numbers to statement categories.
pub struct AccountClassifier;

impl AccountClassifier {
    /// Classifies an account number.
    ///
    /// Total over all numbers: anything outside the table is [`Category::Other`].
    #[must_use]
    pub fn classify(account_number: u32) -> Category {
        RULES
            .iter()
            .find(|rule| rule.contains(account_number))
            .map_or(Category::Other, |rule| rule.category)
    }

    /// Returns true if the number lies in the reportable range.
    #[must_use]
    pub const fn is_reportable_number(account_number: u32) -> bool {
        account_number >= FIRST_REPORTABLE && account_number <= LAST_REPORTABLE
    }

    /// Returns true for blank names or placeholder names such as "-" or "N/A".
    #[must_use]
    pub fn is_placeholder_name(name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.chars().all(|c| !c.is_alphanumeric()) {
            return true;
        }
        let lowered = trimmed.to_lowercase();
        PLACEHOLDER_NAMES.contains(&lowered.as_str())
    }

    /// Returns true if the account takes part in statement generation.
    #[must_use]
    pub fn is_reportable(account: &Account) -> bool {
        Self::is_reportable_number(account.number) && !Self::is_placeholder_name(&account.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(3050, Category::Revenue)]
    #[case(4500, Category::CostOfGoodsSold)]
    #[case(5200, Category::OperatingExpenses)]
    #[case(1200, Category::FixedAssets)]
    #[case(1399, Category::FixedAssets)]
    #[case(1400, Category::CurrentAssets)]
    #[case(1930, Category::CurrentAssets)]
    #[case(2081, Category::Equity)]
    #[case(2150, Category::UntaxedReserves)]
    #[case(2350, Category::LongTermLiabilities)]
    #[case(2440, Category::CurrentLiabilities)]
    #[case(6100, Category::FinancialItems)]
    #[case(7990, Category::OtherIncomeExpense)]
    #[case(8999, Category::ExtraordinaryItems)]
    #[case(999, Category::Other)]
    #[case(9999, Category::Other)]
    fn test_classify(#[case] account_number: u32, #[case] expected: Category) {
        assert_eq!(AccountClassifier::classify(account_number), expected);
    }

    #[test]
    fn test_out_of_range_is_excluded() {
        assert!(!AccountClassifier::is_reportable_number(9999));
        assert!(!AccountClassifier::is_reportable_number(999));
        assert!(AccountClassifier::is_reportable_number(1000));
        assert!(AccountClassifier::is_reportable_number(8999));
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("-", true)]
    #[case("N/A", true)]
    #[case("Unused", true)]
    #[case("Bank", false)]
    #[case("Sales 25% VAT", false)]
    fn test_placeholder_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(AccountClassifier::is_placeholder_name(name), expected);
    }

    #[test]
    fn test_reportable_account() {
        let account = Account::new(1930, "Bank");
        assert!(AccountClassifier::is_reportable(&account));
        assert!(!AccountClassifier::is_reportable(&Account::new(1930, "")));
        assert!(!AccountClassifier::is_reportable(&Account::new(9100, "Suspense")));
    }

    #[test]
    fn test_rules_are_ordered_and_contiguous() {
        for pair in RULES.windows(2) {
            assert_eq!(pair[0].last + 1, pair[1].first);
        }
        assert_eq!(RULES[0].first, FIRST_REPORTABLE);
        assert_eq!(RULES[RULES.len() - 1].last, LAST_REPORTABLE);
    }

    proptest! {
        /// Every reportable number matches exactly one rule.
        #[test]
        fn prop_reportable_numbers_match_one_rule(n in FIRST_REPORTABLE..=LAST_REPORTABLE) {
            let matches = RULES.iter().filter(|rule| rule.contains(n)).count();
            prop_assert_eq!(matches, 1);
            prop_assert_ne!(AccountClassifier::classify(n), Category::Other);
        }

        /// Classification is deterministic.
        #[test]
        fn prop_classify_is_pure(n in any::<u32>()) {
            prop_assert_eq!(AccountClassifier::classify(n), AccountClassifier::classify(n));
        }
    }
}
