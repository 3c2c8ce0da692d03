//! Error types for company and user operations.

use tallybook_shared::AppError;
use tallybook_shared::types::{CompanyId, UserId};
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during company and user operations.
#[derive(Debug, Error)]
pub enum TenancyError {
    /// Company not found.
    #[error("Company with ID {0} not found")]
    CompanyNotFound(CompanyId),

    /// User not found.
    #[error("User with ID {0} not found")]
    UserNotFound(UserId),

    /// Company code already used by another tenant.
    #[error("Company with code '{0}' already exists")]
    DuplicateCode(String),

    /// Email address already used by another user.
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    /// Storage error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TenancyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CompanyNotFound(_) => "COMPANY_NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::DuplicateCode(_) => "DUPLICATE_COMPANY_CODE",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::Store(e) => e.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::CompanyNotFound(_) | Self::UserNotFound(_) => 404,
            Self::DuplicateCode(_) | Self::DuplicateEmail(_) => 409,
            Self::Store(e) => e.http_status_code(),
        }
    }
}

impl From<TenancyError> for AppError {
    fn from(err: TenancyError) -> Self {
        match err {
            TenancyError::CompanyNotFound(_) | TenancyError::UserNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            TenancyError::DuplicateCode(_) | TenancyError::DuplicateEmail(_) => {
                Self::Conflict(err.to_string())
            }
            TenancyError::Store(e) => e.into(),
        }
    }
}
