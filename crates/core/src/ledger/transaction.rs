//! Transaction aggregate for the journal.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tallybook_shared::types::{AccountId, CompanyId, LineId, TransactionId, UserId};

/// Transaction lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Transaction is being drafted and can still be edited.
    Draft,
    /// Transaction has been posted to the ledger and is immutable.
    Posted,
}

impl TransactionStatus {
    /// Returns true if the transaction has been posted.
    #[must_use]
    pub const fn is_posted(self) -> bool {
        matches!(self, Self::Posted)
    }
}

/// A journal transaction consisting of balanced lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Company this transaction belongs to.
    pub company_id: CompanyId,
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// Optional reference number (invoice number, receipt).
    pub reference: Option<String>,
    /// Current lifecycle status.
    pub status: TransactionStatus,
    /// User who created the transaction.
    pub created_by: UserId,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
    /// When the transaction was last updated.
    pub updated_at: DateTime<Utc>,
    /// Transaction lines, ordered by `line_order`.
    #[serde(default)]
    pub lines: Vec<TransactionLine>,
}

impl Transaction {
    /// Returns true if the transaction can still be edited or deleted.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.status == TransactionStatus::Draft
    }

    /// Sum of all debit (positive) line amounts.
    #[must_use]
    pub fn total_debits(&self) -> Decimal {
        self.lines.iter().map(TransactionLine::debit_amount).sum()
    }

    /// Sum of all credit (negative) line amounts, as a positive number.
    #[must_use]
    pub fn total_credits(&self) -> Decimal {
        self.lines.iter().map(TransactionLine::credit_amount).sum()
    }

    /// Returns true if the signed line amounts sum to exactly zero.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.lines.iter().map(|line| line.amount).sum::<Decimal>() == Decimal::ZERO
    }
}

/// A single line of a transaction.
///
/// Amounts are signed: positive is a debit, negative is a credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLine {
    /// Unique identifier.
    pub id: LineId,
    /// Transaction this line belongs to.
    pub transaction_id: TransactionId,
    /// Account being debited or credited.
    pub account_id: AccountId,
    /// Signed amount: positive = debit, negative = credit.
    pub amount: Decimal,
    /// Optional line description.
    pub description: Option<String>,
    /// Zero-based position within the transaction.
    pub line_order: u32,
}

impl TransactionLine {
    /// Returns true if this line is a debit (amount > 0).
    #[must_use]
    pub fn is_debit(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if this line is a credit (amount < 0).
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// The debit portion of this line: the amount when positive, else zero.
    #[must_use]
    pub fn debit_amount(&self) -> Decimal {
        if self.amount > Decimal::ZERO {
            self.amount
        } else {
            Decimal::ZERO
        }
    }

    /// The credit portion of this line: the absolute amount when negative,
    /// else zero.
    #[must_use]
    pub fn credit_amount(&self) -> Decimal {
        if self.amount < Decimal::ZERO {
            -self.amount
        } else {
            Decimal::ZERO
        }
    }
}
