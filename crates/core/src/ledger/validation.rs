//! Business rule validation for transaction lines.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::LineInput;

/// Minimum number of lines in a transaction.
pub const MIN_LINES: usize = 2;

/// Validates that a set of transaction lines forms a legal transaction.
///
/// The line count is checked first; only then is the balance checked.
/// Signed amounts must sum to exactly zero (decimal arithmetic, no
/// epsilon). Zero-amount lines are legal and count toward the minimum.
///
/// # Errors
///
/// Returns `InsufficientLines` when fewer than [`MIN_LINES`] lines are
/// given, or `NotBalanced` carrying the signed sum otherwise.
pub fn validate_lines(lines: &[LineInput]) -> Result<(), LedgerError> {
    if lines.len() < MIN_LINES {
        return Err(LedgerError::InsufficientLines);
    }

    let difference: Decimal = lines.iter().map(|line| line.amount).sum();
    if difference != Decimal::ZERO {
        return Err(LedgerError::NotBalanced { difference });
    }

    Ok(())
}
