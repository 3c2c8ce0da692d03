//! Storage port for the chart of accounts.

use async_trait::async_trait;
use tallybook_shared::types::{AccountId, CompanyId, PageRequest};

use super::error::StoreError;
use crate::directory::{Account, AccountType, NewAccount};

/// Persistence operations for accounts.
///
/// Every read is scoped by `company_id`; an account is invisible to
/// queries carrying another tenant. The store assigns ids and timestamps
/// on insert and bumps `updated_at` on update.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Gets an account by id within a company.
    async fn get(
        &self,
        company_id: CompanyId,
        id: AccountId,
    ) -> Result<Option<Account>, StoreError>;

    /// Gets an account by code within a company.
    async fn get_by_code(
        &self,
        company_id: CompanyId,
        code: &str,
    ) -> Result<Option<Account>, StoreError>;

    /// Lists one page of a company's accounts ordered by code, with the
    /// total count.
    async fn list(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Account>, u64), StoreError>;

    /// Lists every account of a company ordered by code.
    async fn list_all(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError>;

    /// Lists a company's accounts of one classification, ordered by code.
    async fn list_by_type(
        &self,
        company_id: CompanyId,
        account_type: AccountType,
    ) -> Result<Vec<Account>, StoreError>;

    /// Lists a company's active accounts, ordered by code.
    async fn list_active(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError>;

    /// Inserts a new account, assigning id and timestamps.
    ///
    /// # Errors
    ///
    /// `UniqueViolation` when the code is already used in the company.
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// Overwrites a stored account, bumping `updated_at`. Returns `None`
    /// when no account with that id exists in the company.
    async fn update(&self, account: Account) -> Result<Option<Account>, StoreError>;

    /// Deletes an account. Returns false when it does not exist.
    ///
    /// # Errors
    ///
    /// `ForeignKeyViolation` when transaction lines or child accounts
    /// still reference the account.
    async fn delete(&self, company_id: CompanyId, id: AccountId) -> Result<bool, StoreError>;
}
