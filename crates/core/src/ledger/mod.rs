//! Double-entry journal logic.
//!
//! This module implements the transaction ledger:
//! - Transaction aggregates with signed-amount lines
//! - Draft/posted lifecycle rules
//! - Balance validation (line amounts must sum to zero)
//! - Input types for transaction creation and update
//! - Error types for ledger operations

pub mod error;
pub mod service;
pub mod transaction;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use service::TransactionService;
pub use transaction::{Transaction, TransactionLine, TransactionStatus};
pub use types::{
    CreateTransactionInput, LineInput, NewLine, NewTransaction, TransactionPatch,
    UpdateTransactionInput,
};
pub use validation::{MIN_LINES, validate_lines};
