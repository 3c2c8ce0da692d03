//! Input types for chart of accounts operations.

use tallybook_shared::types::{AccountId, CompanyId};

use super::account::AccountType;

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Company (tenant) the account belongs to.
    pub company_id: CompanyId,
    /// Account code, unique within the company.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Optional parent account in the same company.
    pub parent_id: Option<AccountId>,
    /// Optional description.
    pub description: Option<String>,
}

/// Input for updating an account. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    /// New account code (checked for uniqueness when it differs).
    pub code: Option<String>,
    /// New account name.
    pub name: Option<String>,
    /// New account classification.
    pub account_type: Option<AccountType>,
    /// New parent link. `Some(None)` clears the parent; `Some(Some(id))`
    /// is validated like a create.
    pub parent_id: Option<Option<AccountId>>,
    /// New description. `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// A validated account ready for insertion. The store assigns the id and
/// timestamps.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Company (tenant) the account belongs to.
    pub company_id: CompanyId,
    /// Account code, unique within the company.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Optional parent account in the same company.
    pub parent_id: Option<AccountId>,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the account accepts new transaction lines.
    pub is_active: bool,
}
