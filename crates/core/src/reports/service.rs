//! Report generation service.
//!
//! Each report is assembled in two steps: the service fetches accounts
//! and transactions through the storage ports, then hands them to a pure
//! builder that shapes the report. The builders are deterministic and
//! can be driven directly in tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tallybook_shared::types::{AccountId, CompanyId};

use super::balance::fold_balances;
use super::error::ReportError;
use super::types::{
    AccountBalance, BalanceSheetReport, GeneralLedgerReport, IncomeStatementReport, JournalEntry,
    JournalLine, JournalReport, LedgerEntry, TrialBalanceReport,
};
use crate::directory::{Account, AccountType};
use crate::ledger::Transaction;
use crate::store::{AccountStore, TransactionStore};

/// Service for generating financial reports.
#[derive(Clone)]
pub struct ReportingService {
    accounts: Arc<dyn AccountStore>,
    transactions: Arc<dyn TransactionStore>,
}

impl ReportingService {
    /// Creates a new reporting service.
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            accounts,
            transactions,
        }
    }

    /// Computes cumulative balances for the company's accounts.
    ///
    /// Covers every posted transaction dated up to and including `as_of`,
    /// since the beginning of the ledger. `types` narrows the account set
    /// when given; accounts with no activity keep zero totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn account_balances(
        &self,
        company_id: CompanyId,
        as_of: NaiveDate,
        types: Option<&[AccountType]>,
    ) -> Result<HashMap<AccountId, AccountBalance>, ReportError> {
        self.balances_between(company_id, NaiveDate::MIN, as_of, types)
            .await
    }

    async fn balances_between(
        &self,
        company_id: CompanyId,
        start: NaiveDate,
        end: NaiveDate,
        types: Option<&[AccountType]>,
    ) -> Result<HashMap<AccountId, AccountBalance>, ReportError> {
        let mut accounts = self.accounts.list_all(company_id).await?;
        if let Some(types) = types {
            accounts.retain(|account| types.contains(&account.account_type));
        }
        let transactions = self
            .transactions
            .list_by_date_range(company_id, start, end)
            .await?;
        Ok(fold_balances(&accounts, &transactions))
    }

    /// Generates a balance sheet as of a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn generate_balance_sheet(
        &self,
        company_id: CompanyId,
        as_of_date: NaiveDate,
    ) -> Result<BalanceSheetReport, ReportError> {
        let balances = self
            .account_balances(
                company_id,
                as_of_date,
                Some(&[
                    AccountType::Asset,
                    AccountType::Liability,
                    AccountType::Equity,
                ]),
            )
            .await?;
        Ok(Self::build_balance_sheet(
            as_of_date,
            balances.into_values().collect(),
        ))
    }

    /// Generates a trial balance as of a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn generate_trial_balance(
        &self,
        company_id: CompanyId,
        as_of_date: NaiveDate,
    ) -> Result<TrialBalanceReport, ReportError> {
        let balances = self.account_balances(company_id, as_of_date, None).await?;
        Ok(Self::build_trial_balance(
            as_of_date,
            balances.into_values().collect(),
        ))
    }

    /// Generates the journal for a date range.
    ///
    /// Draft transactions are included alongside posted ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn generate_journal(
        &self,
        company_id: CompanyId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<JournalReport, ReportError> {
        let transactions = self
            .transactions
            .list_by_date_range(company_id, start_date, end_date)
            .await?;
        let accounts = self.accounts.list_all(company_id).await?;
        let account_map: HashMap<AccountId, Account> = accounts
            .into_iter()
            .map(|account| (account.id, account))
            .collect();
        Ok(Self::build_journal(
            start_date,
            end_date,
            transactions,
            &account_map,
        ))
    }

    /// Generates the general ledger for one account over a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Account does not exist in the company
    /// - The storage backend fails
    pub async fn generate_general_ledger(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<GeneralLedgerReport, ReportError> {
        let account = self
            .accounts
            .get(company_id, account_id)
            .await?
            .ok_or(ReportError::AccountNotFound(account_id))?;

        // Nothing can predate the minimum date, so a range starting
        // there opens at zero.
        let opening_balance = match start_date.checked_sub_days(Days::new(1)) {
            Some(cutoff) => {
                let prior = self
                    .transactions
                    .list_by_account(company_id, account_id, None, Some(cutoff))
                    .await?;
                fold_balances(std::slice::from_ref(&account), &prior)
                    .get(&account_id)
                    .map_or(Decimal::ZERO, |balance| balance.balance)
            }
            None => Decimal::ZERO,
        };

        let transactions = self
            .transactions
            .list_by_account(company_id, account_id, Some(start_date), Some(end_date))
            .await?;

        Ok(Self::build_general_ledger(
            account,
            start_date,
            end_date,
            opening_balance,
            &transactions,
        ))
    }

    /// Generates an income statement for a period.
    ///
    /// Unlike the cumulative reports, balances here cover only posted
    /// transactions dated inside the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn generate_income_statement(
        &self,
        company_id: CompanyId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<IncomeStatementReport, ReportError> {
        let balances = self
            .balances_between(
                company_id,
                start_date,
                end_date,
                Some(&[AccountType::Revenue, AccountType::Expense]),
            )
            .await?;
        Ok(Self::build_income_statement(
            start_date,
            end_date,
            balances.into_values().collect(),
        ))
    }

    /// Builds a balance sheet from already-computed balances.
    ///
    /// Groups asset, liability and equity accounts, each sorted by code.
    /// Liability and equity totals are reported as positive magnitudes.
    #[must_use]
    pub fn build_balance_sheet(
        as_of_date: NaiveDate,
        balances: Vec<AccountBalance>,
    ) -> BalanceSheetReport {
        let mut assets = Vec::new();
        let mut liabilities = Vec::new();
        let mut equity = Vec::new();

        for balance in balances {
            match balance.account.account_type {
                AccountType::Asset => assets.push(balance),
                AccountType::Liability => liabilities.push(balance),
                AccountType::Equity => equity.push(balance),
                AccountType::Revenue | AccountType::Expense => {}
            }
        }

        sort_by_code(&mut assets);
        sort_by_code(&mut liabilities);
        sort_by_code(&mut equity);

        let total_assets: Decimal = assets.iter().map(|b| b.balance).sum();
        let total_liabilities: Decimal = liabilities.iter().map(|b| b.balance.abs()).sum();
        let total_equity: Decimal = equity.iter().map(|b| b.balance.abs()).sum();

        BalanceSheetReport {
            as_of_date,
            assets,
            liabilities,
            equity,
            total_assets,
            total_liabilities,
            total_equity,
        }
    }

    /// Builds a trial balance from already-computed balances.
    ///
    /// Accounts with a zero net balance are dropped. For balanced posted
    /// data the two totals agree.
    #[must_use]
    pub fn build_trial_balance(
        as_of_date: NaiveDate,
        balances: Vec<AccountBalance>,
    ) -> TrialBalanceReport {
        let mut accounts: Vec<AccountBalance> = balances
            .into_iter()
            .filter(|balance| balance.balance != Decimal::ZERO)
            .collect();
        sort_by_code(&mut accounts);

        let total_debits: Decimal = accounts.iter().map(|b| b.debit_total).sum();
        let total_credits: Decimal = accounts.iter().map(|b| b.credit_total).sum();

        TrialBalanceReport {
            as_of_date,
            accounts,
            total_debits,
            total_credits,
        }
    }

    /// Builds a journal report from transactions in ascending date order.
    ///
    /// Entries are reversed at the end so the most recent transaction
    /// comes first.
    #[must_use]
    pub fn build_journal(
        start_date: NaiveDate,
        end_date: NaiveDate,
        transactions: Vec<Transaction>,
        accounts: &HashMap<AccountId, Account>,
    ) -> JournalReport {
        let mut entries: Vec<JournalEntry> = transactions
            .into_iter()
            .map(|transaction| Self::journal_entry(transaction, accounts))
            .collect();
        entries.reverse();

        JournalReport {
            start_date,
            end_date,
            entries,
        }
    }

    fn journal_entry(
        transaction: Transaction,
        accounts: &HashMap<AccountId, Account>,
    ) -> JournalEntry {
        let mut debits = Vec::new();
        let mut credits = Vec::new();

        for line in &transaction.lines {
            // Lines whose account cannot be resolved are dropped.
            let Some(account) = accounts.get(&line.account_id) else {
                continue;
            };
            if line.amount > Decimal::ZERO {
                debits.push(JournalLine {
                    account: account.clone(),
                    amount: line.amount,
                });
            } else {
                credits.push(JournalLine {
                    account: account.clone(),
                    amount: line.amount.abs(),
                });
            }
        }

        JournalEntry {
            transaction,
            debits,
            credits,
        }
    }

    /// Builds a general ledger report from transactions in ascending
    /// date order.
    ///
    /// The running balance accumulates signed line amounts across posted
    /// transactions, and the closing balance is taken from that ascending
    /// pass. Rows are reversed afterwards so the most recent entry comes
    /// first.
    #[must_use]
    pub fn build_general_ledger(
        account: Account,
        start_date: NaiveDate,
        end_date: NaiveDate,
        opening_balance: Decimal,
        transactions: &[Transaction],
    ) -> GeneralLedgerReport {
        let mut running_balance = opening_balance;
        let mut entries = Vec::new();

        for transaction in transactions {
            if !transaction.status.is_posted() {
                continue;
            }
            for line in &transaction.lines {
                if line.account_id != account.id {
                    continue;
                }
                running_balance += line.amount;
                entries.push(LedgerEntry {
                    transaction_date: transaction.transaction_date,
                    description: transaction.description.clone(),
                    reference: transaction.reference.clone(),
                    debit: line.debit_amount(),
                    credit: line.credit_amount(),
                    running_balance,
                });
            }
        }

        let closing_balance = running_balance;
        entries.reverse();

        GeneralLedgerReport {
            account,
            start_date,
            end_date,
            opening_balance,
            entries,
            closing_balance,
        }
    }

    /// Builds an income statement from already-computed period balances.
    ///
    /// Revenue totals are reported as positive magnitudes; expense totals
    /// keep their signed sum.
    #[must_use]
    pub fn build_income_statement(
        start_date: NaiveDate,
        end_date: NaiveDate,
        balances: Vec<AccountBalance>,
    ) -> IncomeStatementReport {
        let mut revenues = Vec::new();
        let mut expenses = Vec::new();

        for balance in balances {
            match balance.account.account_type {
                AccountType::Revenue => revenues.push(balance),
                AccountType::Expense => expenses.push(balance),
                AccountType::Asset | AccountType::Liability | AccountType::Equity => {}
            }
        }

        sort_by_code(&mut revenues);
        sort_by_code(&mut expenses);

        let total_revenue: Decimal = revenues.iter().map(|b| b.balance.abs()).sum();
        let total_expenses: Decimal = expenses.iter().map(|b| b.balance).sum();
        let net_income = total_revenue - total_expenses;

        IncomeStatementReport {
            start_date,
            end_date,
            revenues,
            expenses,
            total_revenue,
            total_expenses,
            net_income,
        }
    }
}

fn sort_by_code(balances: &mut [AccountBalance]) {
    balances.sort_by(|a, b| a.account.code.cmp(&b.account.code));
}
