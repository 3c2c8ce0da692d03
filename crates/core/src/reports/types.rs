//! Report data types.
//!
//! Reports are derived value objects, computed on demand and never
//! persisted. All of them serialize cleanly for API responses.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::directory::Account;
use crate::ledger::Transaction;

/// An account with its accumulated totals and net balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The account.
    pub account: Account,
    /// Sum of positive line amounts.
    pub debit_total: Decimal,
    /// Sum of absolute values of negative line amounts.
    pub credit_total: Decimal,
    /// Net balance (`debit_total - credit_total`).
    pub balance: Decimal,
}

impl AccountBalance {
    /// Creates a balance with all totals at zero.
    #[must_use]
    pub fn zeroed(account: Account) -> Self {
        Self {
            account,
            debit_total: Decimal::ZERO,
            credit_total: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Balance sheet report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Balances are cumulative up to this date.
    pub as_of_date: NaiveDate,
    /// Asset accounts, sorted by code.
    pub assets: Vec<AccountBalance>,
    /// Liability accounts, sorted by code.
    pub liabilities: Vec<AccountBalance>,
    /// Equity accounts, sorted by code.
    pub equity: Vec<AccountBalance>,
    /// Sum of asset balances.
    pub total_assets: Decimal,
    /// Sum of absolute liability balances.
    pub total_liabilities: Decimal,
    /// Sum of absolute equity balances.
    pub total_equity: Decimal,
}

/// Trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Balances are cumulative up to this date.
    pub as_of_date: NaiveDate,
    /// Accounts with a non-zero balance, sorted by code.
    pub accounts: Vec<AccountBalance>,
    /// Sum of debit totals over the listed accounts.
    pub total_debits: Decimal,
    /// Sum of credit totals over the listed accounts.
    pub total_credits: Decimal,
}

/// One side of a journal entry: an account paired with an amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// The account the line hits.
    pub account: Account,
    /// Line amount, always positive.
    pub amount: Decimal,
}

/// A transaction exploded into its debit and credit sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The underlying transaction.
    pub transaction: Transaction,
    /// Lines with positive amounts.
    pub debits: Vec<JournalLine>,
    /// Lines with negative amounts, reported as absolute values.
    pub credits: Vec<JournalLine>,
}

/// Journal report over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalReport {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Entries, most recent first.
    pub entries: Vec<JournalEntry>,
}

/// A single row in an account's general ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// Transaction reference, if any.
    pub reference: Option<String>,
    /// Debit amount (zero for credit lines).
    pub debit: Decimal,
    /// Credit amount (zero for debit lines).
    pub credit: Decimal,
    /// Running balance after this row, in ascending date order.
    pub running_balance: Decimal,
}

/// General ledger report for a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralLedgerReport {
    /// The account.
    pub account: Account,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Cumulative balance the day before the range starts.
    pub opening_balance: Decimal,
    /// Ledger rows, most recent first.
    pub entries: Vec<LedgerEntry>,
    /// Balance after the last in-range entry.
    pub closing_balance: Decimal,
}

/// Income statement report over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Revenue accounts, sorted by code.
    pub revenues: Vec<AccountBalance>,
    /// Expense accounts, sorted by code.
    pub expenses: Vec<AccountBalance>,
    /// Sum of absolute revenue balances.
    pub total_revenue: Decimal,
    /// Sum of expense balances.
    pub total_expenses: Decimal,
    /// `total_revenue - total_expenses`.
    pub net_income: Decimal,
}
