//! Financial report generation.
//!
//! This module provides pure business logic for generating financial reports:
//! - Balance Sheet
//! - Trial Balance
//! - Journal
//! - General Ledger
//! - Income Statement
//!
//! Balances come from folding posted transaction lines; reports are
//! value objects shaped from those balances.

pub mod balance;
pub mod error;
pub mod service;
pub mod types;


pub use balance::fold_balances;
pub use error::ReportError;
pub use service::ReportingService;
pub use types::{
    AccountBalance, BalanceSheetReport, GeneralLedgerReport, IncomeStatementReport, JournalEntry,
    JournalLine, JournalReport, LedgerEntry, TrialBalanceReport,
};
