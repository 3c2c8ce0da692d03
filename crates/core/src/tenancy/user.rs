//! User identities and company access grants.
//!
//! Authentication lives outside the core; users are recorded here as
//! pre-authenticated identities, and roles are recorded for a transport
//! layer to enforce.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tallybook_shared::types::{AccessId, CompanyId, UserId};

/// A user identity. No credential material is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Email address, unique across all users.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    /// Whether the user is active.
    pub is_active: bool,
    /// Whether the user has cross-tenant privileges.
    pub is_superuser: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Role of a user within one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full control including company settings.
    Owner,
    /// Manages users and the chart of accounts.
    Admin,
    /// Records and posts transactions.
    Accountant,
    /// Read-only access.
    Viewer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Accountant => "accountant",
            Self::Viewer => "viewer",
        };
        write!(f, "{name}")
    }
}

/// Membership grant linking a user to a company with a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAccess {
    /// Unique identifier.
    pub id: AccessId,
    /// The user the grant belongs to.
    pub user_id: UserId,
    /// The company the grant opens.
    pub company_id: CompanyId,
    /// Role within the company.
    pub role: UserRole,
    /// Whether this company is the user's default.
    pub is_default: bool,
    /// When the grant was created.
    pub created_at: DateTime<Utc>,
}
