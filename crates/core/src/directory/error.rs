//! Error types for chart of accounts operations.

use tallybook_shared::AppError;
use tallybook_shared::types::AccountId;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during chart of accounts operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Account not found in the company.
    #[error("Account with ID {0} not found")]
    NotFound(AccountId),

    /// Account code already used within the company.
    #[error("Account with code '{0}' already exists")]
    DuplicateCode(String),

    /// Parent account not found in the company.
    #[error("Parent account with ID {0} not found")]
    ParentNotFound(AccountId),

    /// Storage error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DirectoryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::DuplicateCode(_) => "DUPLICATE_ACCOUNT_CODE",
            Self::ParentNotFound(_) => "PARENT_ACCOUNT_NOT_FOUND",
            Self::Store(e) => e.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::ParentNotFound(_) => 404,
            Self::DuplicateCode(_) => 409,
            Self::Store(e) => e.http_status_code(),
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) | DirectoryError::ParentNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            DirectoryError::DuplicateCode(_) => Self::Conflict(err.to_string()),
            DirectoryError::Store(e) => e.into(),
        }
    }
}
