//! Error types for report generation.

use tallybook_shared::AppError;
use tallybook_shared::types::AccountId;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while generating reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested account does not exist in the company.
    #[error("Account with ID {0} not found")]
    AccountNotFound(AccountId),

    /// Storage error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::Store(e) => e.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::AccountNotFound(_) => 404,
            Self::Store(e) => e.http_status_code(),
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::AccountNotFound(_) => Self::NotFound(err.to_string()),
            ReportError::Store(e) => e.into(),
        }
    }
}
