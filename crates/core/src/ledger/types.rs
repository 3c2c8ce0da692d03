//! Input types for transaction operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook_shared::types::{AccountId, CompanyId, UserId};

use super::transaction::TransactionStatus;

/// One line of a transaction input.
///
/// Amounts are signed: positive is a debit, negative is a credit. A zero
/// amount is legal and counts toward the line minimum.
#[derive(Debug, Clone)]
pub struct LineInput {
    /// Account to debit or credit.
    pub account_id: AccountId,
    /// Signed amount.
    pub amount: Decimal,
    /// Optional line description.
    pub description: Option<String>,
}

impl LineInput {
    /// Creates a line input without a description.
    #[must_use]
    pub const fn new(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            amount,
            description: None,
        }
    }
}

/// Input for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Company (tenant) the transaction belongs to.
    pub company_id: CompanyId,
    /// User recording the transaction.
    pub created_by: UserId,
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// Optional reference number.
    pub reference: Option<String>,
    /// Post directly instead of leaving the transaction in draft.
    pub post_immediately: bool,
    /// Transaction lines, at least two, summing to zero.
    pub lines: Vec<LineInput>,
}

/// Input for updating a draft transaction. `None` fields are left
/// unchanged; `lines` replaces all existing lines when present.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    /// New transaction date.
    pub transaction_date: Option<NaiveDate>,
    /// New description.
    pub description: Option<String>,
    /// New reference number.
    pub reference: Option<String>,
    /// Replacement lines, validated like a create.
    pub lines: Option<Vec<LineInput>>,
}

/// A validated transaction ready for insertion. The store assigns the
/// transaction id, line ids, `line_order` and timestamps.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Company (tenant) the transaction belongs to.
    pub company_id: CompanyId,
    /// User recording the transaction.
    pub created_by: UserId,
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// Optional reference number.
    pub reference: Option<String>,
    /// Initial lifecycle status.
    pub status: TransactionStatus,
    /// Lines in input order.
    pub lines: Vec<NewLine>,
}

/// A validated line ready for insertion.
#[derive(Debug, Clone)]
pub struct NewLine {
    /// Account to debit or credit.
    pub account_id: AccountId,
    /// Signed amount.
    pub amount: Decimal,
    /// Optional line description.
    pub description: Option<String>,
}

impl From<LineInput> for NewLine {
    fn from(input: LineInput) -> Self {
        Self {
            account_id: input.account_id,
            amount: input.amount,
            description: input.description,
        }
    }
}

/// Replacement values for a stored transaction.
///
/// Header fields are the full merged values; `lines` is `Some` only when
/// the line set is replaced wholesale (fresh ids, resequenced order).
#[derive(Debug, Clone)]
pub struct TransactionPatch {
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// Transaction description.
    pub description: String,
    /// Optional reference number.
    pub reference: Option<String>,
    /// Lifecycle status.
    pub status: TransactionStatus,
    /// Replacement lines, or `None` to keep the stored lines.
    pub lines: Option<Vec<NewLine>>,
}
