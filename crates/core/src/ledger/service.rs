//! Transaction service for recording and managing journal entries.
//!
//! Drafts can be edited, posted and deleted; posting locks every field
//! until the transaction is unposted again.

use std::sync::Arc;

use chrono::NaiveDate;
use tallybook_shared::types::{AccountId, CompanyId, PageRequest, PageResponse, TransactionId};
use tracing::info;

use super::error::LedgerError;
use super::transaction::{Transaction, TransactionStatus};
use super::types::{
    CreateTransactionInput, LineInput, NewLine, NewTransaction, TransactionPatch,
    UpdateTransactionInput,
};
use super::validation::validate_lines;
use crate::store::{AccountStore, TransactionStore};

/// Service for recording and managing journal transactions.
#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionStore>,
    accounts: Arc<dyn AccountStore>,
}

impl TransactionService {
    /// Creates a new transaction service.
    #[must_use]
    pub fn new(
        transactions: Arc<dyn TransactionStore>,
        accounts: Arc<dyn AccountStore>,
    ) -> Self {
        Self {
            transactions,
            accounts,
        }
    }

    /// Records a new transaction, posted immediately or left in draft.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than 2 lines are given
    /// - Line amounts do not sum to zero
    /// - A line references a missing or inactive account
    pub async fn create_transaction(
        &self,
        input: CreateTransactionInput,
    ) -> Result<Transaction, LedgerError> {
        validate_lines(&input.lines)?;
        self.check_accounts(input.company_id, &input.lines).await?;

        let status = if input.post_immediately {
            TransactionStatus::Posted
        } else {
            TransactionStatus::Draft
        };

        let transaction = self
            .transactions
            .insert(NewTransaction {
                company_id: input.company_id,
                created_by: input.created_by,
                transaction_date: input.transaction_date,
                description: input.description,
                reference: input.reference,
                status,
                lines: input.lines.into_iter().map(NewLine::from).collect(),
            })
            .await?;

        info!(
            transaction_id = %transaction.id,
            company_id = %transaction.company_id,
            status = ?transaction.status,
            line_count = transaction.lines.len(),
            "transaction recorded"
        );

        Ok(transaction)
    }

    /// Gets a transaction with its lines.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the transaction does not exist in the company.
    pub async fn get_transaction(
        &self,
        company_id: CompanyId,
        transaction_id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        self.transactions
            .get_with_lines(company_id, transaction_id)
            .await?
            .ok_or(LedgerError::NotFound(transaction_id))
    }

    /// Lists transactions for a company, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn list_transactions(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<PageResponse<Transaction>, LedgerError> {
        let (transactions, total) = self.transactions.list(company_id, page).await?;
        Ok(PageResponse::new(transactions, page, total))
    }

    /// Lists posted transactions for a company, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn posted_transactions(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<PageResponse<Transaction>, LedgerError> {
        let (transactions, total) = self.transactions.list_posted(company_id, page).await?;
        Ok(PageResponse::new(transactions, page, total))
    }

    /// Lists draft transactions for a company, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn draft_transactions(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<PageResponse<Transaction>, LedgerError> {
        let (transactions, total) = self.transactions.list_unposted(company_id, page).await?;
        Ok(PageResponse::new(transactions, page, total))
    }

    /// Returns transactions within an inclusive date range, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn transactions_by_date_range(
        &self,
        company_id: CompanyId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self
            .transactions
            .list_by_date_range(company_id, start, end)
            .await?)
    }

    /// Returns transactions touching an account, oldest first. Each
    /// transaction appears once even when several lines hit the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn transactions_by_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self
            .transactions
            .list_by_account(company_id, account_id, start, end)
            .await?)
    }

    /// Updates a draft transaction. Absent header fields are left
    /// unchanged; `lines` replaces all existing lines when present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Transaction not found in the company
    /// - Transaction is already posted
    /// - Replacement lines fail validation
    pub async fn update_transaction(
        &self,
        company_id: CompanyId,
        transaction_id: TransactionId,
        input: UpdateTransactionInput,
    ) -> Result<Transaction, LedgerError> {
        let transaction = self.get_transaction(company_id, transaction_id).await?;

        if transaction.status.is_posted() {
            return Err(LedgerError::CannotModifyPosted);
        }

        let lines = match input.lines {
            Some(lines) => {
                validate_lines(&lines)?;
                self.check_accounts(company_id, &lines).await?;
                Some(lines.into_iter().map(NewLine::from).collect())
            }
            None => None,
        };

        let patch = TransactionPatch {
            transaction_date: input
                .transaction_date
                .unwrap_or(transaction.transaction_date),
            description: input.description.unwrap_or(transaction.description),
            reference: input.reference.or(transaction.reference),
            status: transaction.status,
            lines,
        };

        let updated = self
            .transactions
            .update(company_id, transaction_id, patch)
            .await?
            .ok_or(LedgerError::NotFound(transaction_id))?;

        info!(
            transaction_id = %updated.id,
            company_id = %company_id,
            "transaction updated"
        );

        Ok(updated)
    }

    /// Posts a draft transaction, locking it against modification.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is missing or already posted.
    pub async fn post_transaction(
        &self,
        company_id: CompanyId,
        transaction_id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        let transaction = self.get_transaction(company_id, transaction_id).await?;

        if transaction.status.is_posted() {
            return Err(LedgerError::AlreadyPosted);
        }

        let posted = self
            .set_status(transaction, TransactionStatus::Posted)
            .await?;

        info!(
            transaction_id = %posted.id,
            company_id = %company_id,
            "transaction posted"
        );

        Ok(posted)
    }

    /// Reverts a posted transaction to draft. Lines are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is missing or not posted.
    pub async fn unpost_transaction(
        &self,
        company_id: CompanyId,
        transaction_id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        let transaction = self.get_transaction(company_id, transaction_id).await?;

        if !transaction.status.is_posted() {
            return Err(LedgerError::NotPosted);
        }

        let draft = self
            .set_status(transaction, TransactionStatus::Draft)
            .await?;

        info!(
            transaction_id = %draft.id,
            company_id = %company_id,
            "transaction unposted"
        );

        Ok(draft)
    }

    /// Deletes a draft transaction and its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is missing or posted.
    pub async fn delete_transaction(
        &self,
        company_id: CompanyId,
        transaction_id: TransactionId,
    ) -> Result<(), LedgerError> {
        let transaction = self.get_transaction(company_id, transaction_id).await?;

        if transaction.status.is_posted() {
            return Err(LedgerError::CannotDeletePosted);
        }

        let deleted = self
            .transactions
            .delete(company_id, transaction_id)
            .await?;
        if !deleted {
            return Err(LedgerError::NotFound(transaction_id));
        }

        info!(
            transaction_id = %transaction_id,
            company_id = %company_id,
            "transaction deleted"
        );

        Ok(())
    }

    /// Flips the status while keeping header fields and lines untouched.
    async fn set_status(
        &self,
        transaction: Transaction,
        status: TransactionStatus,
    ) -> Result<Transaction, LedgerError> {
        let company_id = transaction.company_id;
        let transaction_id = transaction.id;

        let patch = TransactionPatch {
            transaction_date: transaction.transaction_date,
            description: transaction.description,
            reference: transaction.reference,
            status,
            lines: None,
        };

        self.transactions
            .update(company_id, transaction_id, patch)
            .await?
            .ok_or(LedgerError::NotFound(transaction_id))
    }

    /// Checks every referenced account exists in the company and is active.
    async fn check_accounts(
        &self,
        company_id: CompanyId,
        lines: &[LineInput],
    ) -> Result<(), LedgerError> {
        for line in lines {
            let account = self
                .accounts
                .get(company_id, line.account_id)
                .await?
                .ok_or(LedgerError::AccountNotFound(line.account_id))?;

            if !account.is_active {
                return Err(LedgerError::InactiveAccount { code: account.code });
            }
        }
        Ok(())
    }
}
