//! Account service for chart of accounts management.
//!
//! All operations are scoped by `company_id`; an account is only ever
//! visible to queries carrying its own tenant.

use std::sync::Arc;

use tallybook_shared::types::{AccountId, CompanyId, PageRequest, PageResponse};
use tracing::info;

use super::account::{Account, AccountType};
use super::error::DirectoryError;
use super::types::{CreateAccountInput, NewAccount, UpdateAccountInput};
use crate::store::AccountStore;

/// Service for managing a company's chart of accounts.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    /// Creates a new account service.
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Creates a new account with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Account code already exists in the company
    /// - Parent account does not exist in the company
    pub async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<Account, DirectoryError> {
        // Validate unique code within the company
        if self
            .store
            .get_by_code(input.company_id, &input.code)
            .await?
            .is_some()
        {
            return Err(DirectoryError::DuplicateCode(input.code));
        }

        // Validate parent exists in the same company
        if let Some(parent_id) = input.parent_id {
            self.resolve_parent(input.company_id, parent_id).await?;
        }

        let account = self
            .store
            .insert(NewAccount {
                company_id: input.company_id,
                code: input.code,
                name: input.name,
                account_type: input.account_type,
                parent_id: input.parent_id,
                description: input.description,
                is_active: true,
            })
            .await?;

        info!(
            account_id = %account.id,
            company_id = %account.company_id,
            code = %account.code,
            "account created"
        );

        Ok(account)
    }

    /// Gets an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist in the company.
    pub async fn get_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
    ) -> Result<Account, DirectoryError> {
        self.store
            .get(company_id, account_id)
            .await?
            .ok_or(DirectoryError::NotFound(account_id))
    }

    /// Looks up an account by its code within the company.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn get_account_by_code(
        &self,
        company_id: CompanyId,
        code: &str,
    ) -> Result<Option<Account>, DirectoryError> {
        Ok(self.store.get_by_code(company_id, code).await?)
    }

    /// Lists accounts for a company, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn list_accounts(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<PageResponse<Account>, DirectoryError> {
        let (accounts, total) = self.store.list(company_id, page).await?;
        Ok(PageResponse::new(accounts, page, total))
    }

    /// Returns the full chart of accounts, active or not, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn chart_of_accounts(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<Account>, DirectoryError> {
        Ok(self.store.list_all(company_id).await?)
    }

    /// Returns the accounts of one classification, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn accounts_by_type(
        &self,
        company_id: CompanyId,
        account_type: AccountType,
    ) -> Result<Vec<Account>, DirectoryError> {
        Ok(self.store.list_by_type(company_id, account_type).await?)
    }

    /// Returns the accounts currently accepting transaction lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn active_accounts(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<Account>, DirectoryError> {
        Ok(self.store.list_active(company_id).await?)
    }

    /// Updates an account. Absent input fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Account not found in the company
    /// - New code already exists in the company
    /// - New parent account does not exist in the company
    pub async fn update_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
        input: UpdateAccountInput,
    ) -> Result<Account, DirectoryError> {
        let mut account = self.get_account(company_id, account_id).await?;

        // If changing code, validate uniqueness
        if let Some(new_code) = &input.code
            && *new_code != account.code
            && self.store.get_by_code(company_id, new_code).await?.is_some()
        {
            return Err(DirectoryError::DuplicateCode(new_code.clone()));
        }

        // If changing parent, validate
        if let Some(Some(parent_id)) = input.parent_id {
            self.resolve_parent(company_id, parent_id).await?;
        }

        if let Some(code) = input.code {
            account.code = code;
        }
        if let Some(name) = input.name {
            account.name = name;
        }
        if let Some(account_type) = input.account_type {
            account.account_type = account_type;
        }
        if let Some(parent_id) = input.parent_id {
            account.parent_id = parent_id;
        }
        if let Some(description) = input.description {
            account.description = description;
        }
        if let Some(is_active) = input.is_active {
            account.is_active = is_active;
        }

        let updated = self
            .store
            .update(account)
            .await?
            .ok_or(DirectoryError::NotFound(account_id))?;

        info!(
            account_id = %updated.id,
            company_id = %updated.company_id,
            code = %updated.code,
            "account updated"
        );

        Ok(updated)
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Account not found in the company
    /// - Transaction lines or child accounts still reference it
    pub async fn delete_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
    ) -> Result<(), DirectoryError> {
        let deleted = self.store.delete(company_id, account_id).await?;
        if !deleted {
            return Err(DirectoryError::NotFound(account_id));
        }

        info!(
            account_id = %account_id,
            company_id = %company_id,
            "account deleted"
        );

        Ok(())
    }

    async fn resolve_parent(
        &self,
        company_id: CompanyId,
        parent_id: AccountId,
    ) -> Result<Account, DirectoryError> {
        self.store
            .get(company_id, parent_id)
            .await?
            .ok_or(DirectoryError::ParentNotFound(parent_id))
    }
}
