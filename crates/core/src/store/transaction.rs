//! Storage port for journal transactions.

use async_trait::async_trait;
use chrono::NaiveDate;
use tallybook_shared::types::{AccountId, CompanyId, PageRequest, TransactionId};

use super::error::StoreError;
use crate::ledger::{NewTransaction, Transaction, TransactionPatch};

/// Persistence operations for transactions and their lines.
///
/// Lines are owned by their transaction: they are loaded with it and
/// replaced wholesale through [`TransactionPatch`]. The store assigns
/// transaction and line ids, timestamps, and `line_order` from input
/// position.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Gets a transaction with its lines, ordered by `line_order`.
    async fn get_with_lines(
        &self,
        company_id: CompanyId,
        id: TransactionId,
    ) -> Result<Option<Transaction>, StoreError>;

    /// Lists one page of a company's transactions, most recent date
    /// first, with the total count.
    async fn list(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError>;

    /// Like [`TransactionStore::list`], restricted to posted transactions.
    async fn list_posted(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError>;

    /// Like [`TransactionStore::list`], restricted to draft transactions.
    async fn list_unposted(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError>;

    /// Lists transactions within an inclusive date range, oldest first.
    async fn list_by_date_range(
        &self,
        company_id: CompanyId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, StoreError>;

    /// Lists transactions with at least one line on the account, oldest
    /// first, optionally bounded by an inclusive date range. Each
    /// transaction appears once even when several lines hit the account.
    async fn list_by_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, StoreError>;

    /// Inserts a transaction with its lines, assigning ids, timestamps
    /// and `line_order`.
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, StoreError>;

    /// Applies a patch to a stored transaction, bumping `updated_at`.
    /// When the patch carries lines, the stored lines are replaced with
    /// fresh ids and resequenced order. Returns `None` when no
    /// transaction with that id exists in the company.
    async fn update(
        &self,
        company_id: CompanyId,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> Result<Option<Transaction>, StoreError>;

    /// Deletes a transaction and its lines. Returns false when it does
    /// not exist.
    async fn delete(
        &self,
        company_id: CompanyId,
        id: TransactionId,
    ) -> Result<bool, StoreError>;
}
