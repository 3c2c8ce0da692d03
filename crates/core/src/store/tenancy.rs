//! Storage ports for companies, users, and access grants.

use async_trait::async_trait;
use tallybook_shared::types::{CompanyId, PageRequest, UserId};

use super::error::StoreError;
use crate::tenancy::{Company, CompanyAccess, NewCompany, NewCompanyAccess, NewUser, User};

/// Persistence operations for companies.
///
/// Company codes are unique across all tenants.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Gets a company by id.
    async fn get(&self, id: CompanyId) -> Result<Option<Company>, StoreError>;

    /// Gets a company by its code.
    async fn get_by_code(&self, code: &str) -> Result<Option<Company>, StoreError>;

    /// Returns true when a company with the code exists.
    async fn code_exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Lists one page of companies ordered by code, with the total count.
    async fn list(&self, page: &PageRequest) -> Result<(Vec<Company>, u64), StoreError>;

    /// Like [`CompanyStore::list`], restricted to active companies.
    async fn list_active(&self, page: &PageRequest) -> Result<(Vec<Company>, u64), StoreError>;

    /// Inserts a new company, assigning id and timestamps.
    ///
    /// # Errors
    ///
    /// `UniqueViolation` when the code is already taken.
    async fn insert(&self, company: NewCompany) -> Result<Company, StoreError>;

    /// Overwrites a stored company, bumping `updated_at`. Returns `None`
    /// when no company with that id exists.
    async fn update(&self, company: Company) -> Result<Option<Company>, StoreError>;

    /// Deletes a company. Returns false when it does not exist.
    ///
    /// # Errors
    ///
    /// `ForeignKeyViolation` when accounts, transactions or access
    /// grants still reference the company.
    async fn delete(&self, id: CompanyId) -> Result<bool, StoreError>;
}

/// Persistence operations for users and their access grants.
///
/// Email addresses are unique across all users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Gets a user by id.
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Gets a user by email address.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Returns true when a user with the email exists.
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Lists one page of users ordered by email, with the total count.
    async fn list(&self, page: &PageRequest) -> Result<(Vec<User>, u64), StoreError>;

    /// Like [`UserStore::list`], restricted to active users.
    async fn list_active(&self, page: &PageRequest) -> Result<(Vec<User>, u64), StoreError>;

    /// Inserts a new user, assigning id and timestamps.
    ///
    /// # Errors
    ///
    /// `UniqueViolation` when the email is already taken.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Overwrites a stored user, bumping `updated_at`. Returns `None`
    /// when no user with that id exists.
    async fn update(&self, user: User) -> Result<Option<User>, StoreError>;

    /// Deletes a user. Returns false when they do not exist.
    ///
    /// # Errors
    ///
    /// `ForeignKeyViolation` when transactions or access grants still
    /// reference the user.
    async fn delete(&self, id: UserId) -> Result<bool, StoreError>;

    /// Records a company access grant, assigning id and timestamp.
    ///
    /// # Errors
    ///
    /// `ForeignKeyViolation` when the user or company does not exist.
    async fn grant_access(
        &self,
        access: NewCompanyAccess,
    ) -> Result<CompanyAccess, StoreError>;

    /// Lists a user's access grants in creation order.
    async fn list_access_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CompanyAccess>, StoreError>;
}
