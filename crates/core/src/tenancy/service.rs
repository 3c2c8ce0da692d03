//! Company and user services.

use std::sync::Arc;

use tallybook_shared::types::{CompanyId, PageRequest, PageResponse, UserId};
use tracing::info;

use super::company::Company;
use super::error::TenancyError;
use super::types::{
    CreateCompanyInput, CreateUserInput, NewCompany, NewCompanyAccess, NewUser,
    UpdateCompanyInput, UpdateUserInput,
};
use super::user::{CompanyAccess, User, UserRole};
use crate::store::{CompanyStore, UserStore};

/// Service for managing companies (tenants).
#[derive(Clone)]
pub struct CompanyService {
    store: Arc<dyn CompanyStore>,
}

impl CompanyService {
    /// Creates a new company service.
    #[must_use]
    pub fn new(store: Arc<dyn CompanyStore>) -> Self {
        Self { store }
    }

    /// Creates a new company.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCode` when the code is already taken.
    pub async fn create_company(
        &self,
        input: CreateCompanyInput,
    ) -> Result<Company, TenancyError> {
        if self.store.code_exists(&input.code).await? {
            return Err(TenancyError::DuplicateCode(input.code));
        }

        let company = self
            .store
            .insert(NewCompany {
                name: input.name,
                code: input.code,
                fiscal_year_start_month: input.fiscal_year_start_month,
                currency: input.currency,
                is_active: true,
            })
            .await?;

        info!(
            company_id = %company.id,
            code = %company.code,
            "company created"
        );

        Ok(company)
    }

    /// Gets a company by ID.
    ///
    /// # Errors
    ///
    /// Returns `CompanyNotFound` if the company does not exist.
    pub async fn get_company(&self, company_id: CompanyId) -> Result<Company, TenancyError> {
        self.store
            .get(company_id)
            .await?
            .ok_or(TenancyError::CompanyNotFound(company_id))
    }

    /// Looks up a company by its code.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn get_company_by_code(
        &self,
        code: &str,
    ) -> Result<Option<Company>, TenancyError> {
        Ok(self.store.get_by_code(code).await?)
    }

    /// Lists companies, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn list_companies(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<Company>, TenancyError> {
        let (companies, total) = self.store.list(page).await?;
        Ok(PageResponse::new(companies, page, total))
    }

    /// Lists active companies, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn active_companies(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<Company>, TenancyError> {
        let (companies, total) = self.store.list_active(page).await?;
        Ok(PageResponse::new(companies, page, total))
    }

    /// Updates a company. Absent input fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the company is missing or the new code is
    /// already taken.
    pub async fn update_company(
        &self,
        company_id: CompanyId,
        input: UpdateCompanyInput,
    ) -> Result<Company, TenancyError> {
        let mut company = self.get_company(company_id).await?;

        // If changing code, validate uniqueness
        if let Some(new_code) = &input.code
            && *new_code != company.code
            && self.store.code_exists(new_code).await?
        {
            return Err(TenancyError::DuplicateCode(new_code.clone()));
        }

        if let Some(name) = input.name {
            company.name = name;
        }
        if let Some(code) = input.code {
            company.code = code;
        }
        if let Some(month) = input.fiscal_year_start_month {
            company.fiscal_year_start_month = month;
        }
        if let Some(currency) = input.currency {
            company.currency = currency;
        }
        if let Some(is_active) = input.is_active {
            company.is_active = is_active;
        }

        let updated = self
            .store
            .update(company)
            .await?
            .ok_or(TenancyError::CompanyNotFound(company_id))?;

        info!(company_id = %updated.id, code = %updated.code, "company updated");

        Ok(updated)
    }

    /// Deletes a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the company is missing or accounts,
    /// transactions or access grants still reference it.
    pub async fn delete_company(&self, company_id: CompanyId) -> Result<(), TenancyError> {
        let deleted = self.store.delete(company_id).await?;
        if !deleted {
            return Err(TenancyError::CompanyNotFound(company_id));
        }

        info!(company_id = %company_id, "company deleted");

        Ok(())
    }
}

/// Service for managing users and their company access grants.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmail` when the email is already taken.
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, TenancyError> {
        if self.store.email_exists(&input.email).await? {
            return Err(TenancyError::DuplicateEmail(input.email));
        }

        let user = self
            .store
            .insert(NewUser {
                email: input.email,
                full_name: input.full_name,
                is_active: true,
                is_superuser: input.is_superuser,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "user created");

        Ok(user)
    }

    /// Gets a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub async fn get_user(&self, user_id: UserId) -> Result<User, TenancyError> {
        self.store
            .get(user_id)
            .await?
            .ok_or(TenancyError::UserNotFound(user_id))
    }

    /// Looks up a user by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, TenancyError> {
        Ok(self.store.get_by_email(email).await?)
    }

    /// Lists users, ordered by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn list_users(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, TenancyError> {
        let (users, total) = self.store.list(page).await?;
        Ok(PageResponse::new(users, page, total))
    }

    /// Lists active users, ordered by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn active_users(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, TenancyError> {
        let (users, total) = self.store.list_active(page).await?;
        Ok(PageResponse::new(users, page, total))
    }

    /// Updates a user. Absent input fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is missing or the new email is
    /// already taken.
    pub async fn update_user(
        &self,
        user_id: UserId,
        input: UpdateUserInput,
    ) -> Result<User, TenancyError> {
        let mut user = self.get_user(user_id).await?;

        // If changing email, validate uniqueness
        if let Some(new_email) = &input.email
            && *new_email != user.email
            && self.store.email_exists(new_email).await?
        {
            return Err(TenancyError::DuplicateEmail(new_email.clone()));
        }

        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(full_name) = input.full_name {
            user.full_name = full_name;
        }
        if let Some(is_active) = input.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = input.is_superuser {
            user.is_superuser = is_superuser;
        }

        let updated = self
            .store
            .update(user)
            .await?
            .ok_or(TenancyError::UserNotFound(user_id))?;

        info!(user_id = %updated.id, email = %updated.email, "user updated");

        Ok(updated)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is missing or transactions still
    /// reference them.
    pub async fn delete_user(&self, user_id: UserId) -> Result<(), TenancyError> {
        let deleted = self.store.delete(user_id).await?;
        if !deleted {
            return Err(TenancyError::UserNotFound(user_id));
        }

        info!(user_id = %user_id, "user deleted");

        Ok(())
    }

    /// Grants a user access to a company with a role.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user; an unknown company
    /// surfaces as the store's foreign key rejection.
    pub async fn grant_company_access(
        &self,
        user_id: UserId,
        company_id: CompanyId,
        role: UserRole,
        is_default: bool,
    ) -> Result<CompanyAccess, TenancyError> {
        self.get_user(user_id).await?;

        let access = self
            .store
            .grant_access(NewCompanyAccess {
                user_id,
                company_id,
                role,
                is_default,
            })
            .await?;

        info!(
            user_id = %user_id,
            company_id = %company_id,
            role = %role,
            "company access granted"
        );

        Ok(access)
    }

    /// Lists a user's company access grants.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user.
    pub async fn company_access(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CompanyAccess>, TenancyError> {
        self.get_user(user_id).await?;
        Ok(self.store.list_access_for_user(user_id).await?)
    }
}
