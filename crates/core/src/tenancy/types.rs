//! Input types for company and user operations.

use tallybook_shared::types::{CompanyId, UserId};

use super::user::UserRole;

/// Input for creating a company.
#[derive(Debug, Clone)]
pub struct CreateCompanyInput {
    /// Company name.
    pub name: String,
    /// Company code, unique across all tenants.
    pub code: String,
    /// First month of the fiscal year (1 = January).
    pub fiscal_year_start_month: u8,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl CreateCompanyInput {
    /// Creates an input with a January fiscal year start and EUR currency.
    #[must_use]
    pub fn new(name: String, code: String) -> Self {
        Self {
            name,
            code,
            fiscal_year_start_month: 1,
            currency: "EUR".to_string(),
        }
    }
}

/// Input for updating a company. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyInput {
    /// New company name.
    pub name: Option<String>,
    /// New company code (checked for uniqueness when it differs).
    pub code: Option<String>,
    /// New fiscal year start month.
    pub fiscal_year_start_month: Option<u8>,
    /// New currency code.
    pub currency: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// A validated company ready for insertion. The store assigns the id and
/// timestamps.
#[derive(Debug, Clone)]
pub struct NewCompany {
    /// Company name.
    pub name: String,
    /// Company code, unique across all tenants.
    pub code: String,
    /// First month of the fiscal year (1 = January).
    pub fiscal_year_start_month: u8,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Whether the company is active.
    pub is_active: bool,
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Email address, unique across all users.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    /// Whether the user has cross-tenant privileges.
    pub is_superuser: bool,
}

/// Input for updating a user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    /// New email address (checked for uniqueness when it differs).
    pub email: Option<String>,
    /// New full name.
    pub full_name: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New superuser flag.
    pub is_superuser: Option<bool>,
}

/// A validated user ready for insertion.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Email address, unique across all users.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    /// Whether the user is active.
    pub is_active: bool,
    /// Whether the user has cross-tenant privileges.
    pub is_superuser: bool,
}

/// A company access grant ready for insertion.
#[derive(Debug, Clone)]
pub struct NewCompanyAccess {
    /// The user receiving access.
    pub user_id: UserId,
    /// The company being opened.
    pub company_id: CompanyId,
    /// Role within the company.
    pub role: UserRole,
    /// Whether this company becomes the user's default.
    pub is_default: bool,
}
