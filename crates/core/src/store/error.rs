//! Error type shared by all storage ports.

use tallybook_shared::AppError;
use thiserror::Error;

/// Errors surfaced by the storage ports.
///
/// Constraint names follow relational naming (`table_column_key` for
/// unique constraints, `table_column_fkey` for foreign keys) so a SQL
/// backend can map its violations one to one.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated.
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation {
        /// Name of the violated constraint.
        constraint: &'static str,
    },

    /// A foreign key constraint was violated.
    #[error("Foreign key constraint violated: {constraint}")]
    ForeignKeyViolation {
        /// Name of the violated constraint.
        constraint: &'static str,
    },

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UniqueViolation { .. } => "UNIQUE_VIOLATION",
            Self::ForeignKeyViolation { .. } => "FOREIGN_KEY_VIOLATION",
            Self::Backend(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::UniqueViolation { .. } | Self::ForeignKeyViolation { .. } => 409,
            Self::Backend(_) => 500,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { .. } | StoreError::ForeignKeyViolation { .. } => {
                Self::Conflict(err.to_string())
            }
            StoreError::Backend(message) => Self::Storage(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StoreError::UniqueViolation {
                constraint: "accounts_company_id_code_key"
            }
            .error_code(),
            "UNIQUE_VIOLATION"
        );
        assert_eq!(
            StoreError::ForeignKeyViolation {
                constraint: "transaction_lines_account_id_fkey"
            }
            .error_code(),
            "FOREIGN_KEY_VIOLATION"
        );
        assert_eq!(
            StoreError::Backend("boom".to_string()).error_code(),
            "STORAGE_ERROR"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            StoreError::UniqueViolation {
                constraint: "companies_code_key"
            }
            .http_status_code(),
            409
        );
        assert_eq!(StoreError::Backend("boom".to_string()).http_status_code(), 500);
    }

    #[test]
    fn test_app_error_conversion() {
        let err: AppError = StoreError::ForeignKeyViolation {
            constraint: "accounts_parent_id_fkey",
        }
        .into();
        assert_eq!(err.status_code(), 409);

        let err: AppError = StoreError::Backend("disk full".to_string()).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Storage error: disk full");
    }
}
