//! Error types for transaction operations.

use rust_decimal::Decimal;
use tallybook_shared::AppError;
use tallybook_shared::types::{AccountId, TransactionId};
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during transaction operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Transaction must have at least 2 lines.
    #[error("Transaction must have at least 2 lines")]
    InsufficientLines,

    /// Transaction line amounts do not sum to zero.
    #[error(
        "Transaction does not balance. Difference: {difference}. \
         Total debits must equal total credits."
    )]
    NotBalanced {
        /// Signed sum of the line amounts.
        difference: Decimal,
    },

    /// A line references an account that does not exist in the company.
    #[error("Account with ID {0} not found")]
    AccountNotFound(AccountId),

    /// A line references a deactivated account.
    #[error("Account {code} is inactive and cannot be used")]
    InactiveAccount {
        /// Code of the deactivated account.
        code: String,
    },

    // ========== State Errors ==========
    /// Transaction not found in the company.
    #[error("Transaction with ID {0} not found")]
    NotFound(TransactionId),

    /// Posted transactions cannot be updated.
    #[error("Cannot update a posted transaction")]
    CannotModifyPosted,

    /// Transaction is already posted.
    #[error("Transaction is already posted")]
    AlreadyPosted,

    /// Transaction is not posted.
    #[error("Transaction is not posted")]
    NotPosted,

    /// Posted transactions cannot be deleted.
    #[error("Cannot delete a posted transaction")]
    CannotDeletePosted,

    /// Storage error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientLines => "INSUFFICIENT_LINES",
            Self::NotBalanced { .. } => "TRANSACTION_NOT_BALANCED",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::InactiveAccount { .. } => "ACCOUNT_INACTIVE",
            Self::NotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::CannotModifyPosted => "CANNOT_MODIFY_POSTED",
            Self::AlreadyPosted => "ALREADY_POSTED",
            Self::NotPosted => "NOT_POSTED",
            Self::CannotDeletePosted => "CANNOT_DELETE_POSTED",
            Self::Store(e) => e.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 422 Unprocessable Entity - validation and state errors
            Self::InsufficientLines
            | Self::NotBalanced { .. }
            | Self::InactiveAccount { .. }
            | Self::CannotModifyPosted
            | Self::AlreadyPosted
            | Self::NotPosted
            | Self::CannotDeletePosted => 422,

            // 404 Not Found
            Self::AccountNotFound(_) | Self::NotFound(_) => 404,

            Self::Store(e) => e.http_status_code(),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientLines
            | LedgerError::NotBalanced { .. }
            | LedgerError::InactiveAccount { .. }
            | LedgerError::CannotModifyPosted
            | LedgerError::AlreadyPosted
            | LedgerError::NotPosted
            | LedgerError::CannotDeletePosted => Self::Validation(err.to_string()),
            LedgerError::AccountNotFound(_) | LedgerError::NotFound(_) => {
                Self::NotFound(err.to_string())
            }
            LedgerError::Store(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InsufficientLines.error_code(), "INSUFFICIENT_LINES");
        assert_eq!(
            LedgerError::NotBalanced {
                difference: dec!(50.00)
            }
            .error_code(),
            "TRANSACTION_NOT_BALANCED"
        );
        assert_eq!(
            LedgerError::AccountNotFound(AccountId::new()).error_code(),
            "ACCOUNT_NOT_FOUND"
        );
        assert_eq!(LedgerError::AlreadyPosted.error_code(), "ALREADY_POSTED");
        assert_eq!(LedgerError::NotPosted.error_code(), "NOT_POSTED");
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::InsufficientLines.http_status_code(), 422);
        assert_eq!(LedgerError::CannotModifyPosted.http_status_code(), 422);
        assert_eq!(LedgerError::CannotDeletePosted.http_status_code(), 422);
        assert_eq!(
            LedgerError::NotFound(TransactionId::new()).http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::Store(StoreError::Backend("boom".to_string())).http_status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::NotBalanced {
            difference: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Transaction does not balance. Difference: 50.00. \
             Total debits must equal total credits."
        );

        assert_eq!(
            LedgerError::InsufficientLines.to_string(),
            "Transaction must have at least 2 lines"
        );

        let err = LedgerError::InactiveAccount {
            code: "1000".to_string(),
        };
        assert_eq!(err.to_string(), "Account 1000 is inactive and cannot be used");
    }

    #[test]
    fn test_app_error_conversion() {
        let err: AppError = LedgerError::NotBalanced {
            difference: dec!(1.00),
        }
        .into();
        assert_eq!(err.status_code(), 422);

        let err: AppError = LedgerError::NotFound(TransactionId::new()).into();
        assert_eq!(err.status_code(), 404);
    }
}
