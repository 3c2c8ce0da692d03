//! Chart of accounts entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tallybook_shared::types::{AccountId, CompanyId};

/// Account classification in the chart of accounts.
///
/// In double-entry bookkeeping, asset and expense accounts are
/// debit-normal; liability, equity and revenue accounts are credit-normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned by the company.
    Asset,
    /// Obligations owed to others.
    Liability,
    /// The owners' residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl AccountType {
    /// Returns true for debit-normal accounts (asset, expense).
    #[must_use]
    pub fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }

    /// Returns true for accounts reported on the balance sheet.
    #[must_use]
    pub fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Returns true for accounts reported on the income statement.
    #[must_use]
    pub fn is_income_statement(self) -> bool {
        matches!(self, Self::Revenue | Self::Expense)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        };
        write!(f, "{name}")
    }
}

/// An account in a company's chart of accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Company this account belongs to.
    pub company_id: CompanyId,
    /// Account code, unique within the company.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Parent account for hierarchical charts (same company).
    pub parent_id: Option<AccountId>,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the account accepts new transaction lines. Deactivated
    /// accounts stay visible in reports and historical data.
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AccountType::Asset, true)]
    #[case(AccountType::Expense, true)]
    #[case(AccountType::Liability, false)]
    #[case(AccountType::Equity, false)]
    #[case(AccountType::Revenue, false)]
    fn test_debit_normal_classification(#[case] account_type: AccountType, #[case] expected: bool) {
        assert_eq!(account_type.is_debit_normal(), expected);
    }

    #[rstest]
    #[case(AccountType::Asset, true, false)]
    #[case(AccountType::Liability, true, false)]
    #[case(AccountType::Equity, true, false)]
    #[case(AccountType::Revenue, false, true)]
    #[case(AccountType::Expense, false, true)]
    fn test_report_membership(
        #[case] account_type: AccountType,
        #[case] balance_sheet: bool,
        #[case] income_statement: bool,
    ) {
        assert_eq!(account_type.is_balance_sheet(), balance_sheet);
        assert_eq!(account_type.is_income_statement(), income_statement);
    }

    #[test]
    fn test_account_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&AccountType::Asset).unwrap(),
            "\"asset\""
        );
        let parsed: AccountType = serde_json::from_str("\"revenue\"").unwrap();
        assert_eq!(parsed, AccountType::Revenue);
    }

    #[test]
    fn test_account_type_display() {
        assert_eq!(AccountType::Liability.to_string(), "liability");
    }
}
