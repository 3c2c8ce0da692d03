//! Property-based tests for transaction line validation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tallybook_shared::types::AccountId;

use super::error::LedgerError;
use super::types::LineInput;
use super::validation::validate_lines;

/// Strategy to generate a signed amount between -1,000,000.00 and
/// 1,000,000.00 with two decimal places.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-zero signed amount.
fn nonzero_amount() -> impl Strategy<Value = Decimal> {
    signed_amount().prop_filter("amount must be non-zero", |d| *d != Decimal::ZERO)
}

fn line(amount: Decimal) -> LineInput {
    LineInput::new(AccountId::new(), amount)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* set of signed amounts, appending the negated sum yields
    /// a balanced set that validation accepts.
    #[test]
    fn prop_balanced_lines_accepted(amounts in prop::collection::vec(signed_amount(), 1..8)) {
        let sum: Decimal = amounts.iter().copied().sum();

        let mut lines: Vec<LineInput> = amounts.into_iter().map(line).collect();
        lines.push(line(-sum));

        let result = validate_lines(&lines);
        prop_assert!(
            result.is_ok(),
            "balanced lines should be accepted, got: {:?}",
            result
        );
    }

    /// *For any* set of at least two lines whose sum is non-zero,
    /// validation rejects it and reports the exact signed difference.
    #[test]
    fn prop_unbalanced_lines_report_difference(
        amounts in prop::collection::vec(signed_amount(), 2..8),
    ) {
        let sum: Decimal = amounts.iter().copied().sum();
        prop_assume!(sum != Decimal::ZERO);

        let lines: Vec<LineInput> = amounts.into_iter().map(line).collect();

        match validate_lines(&lines) {
            Err(LedgerError::NotBalanced { difference }) => {
                prop_assert_eq!(difference, sum);
            }
            other => prop_assert!(false, "expected NotBalanced, got: {:?}", other),
        }
    }

    /// *For any* single line, validation rejects it before ever checking
    /// the balance, even when the amount is zero.
    #[test]
    fn prop_single_line_rejected(amount in signed_amount()) {
        let lines = vec![line(amount)];

        let result = validate_lines(&lines);
        prop_assert!(
            matches!(result, Err(LedgerError::InsufficientLines)),
            "single line should be rejected, got: {:?}",
            result
        );
    }

    /// *For any* balanced pair, inserting zero-amount lines keeps the
    /// set valid: zero lines count toward the minimum and never unbalance.
    #[test]
    fn prop_zero_lines_never_unbalance(
        amount in nonzero_amount(),
        zero_count in 0usize..4,
    ) {
        let mut lines = vec![line(amount), line(-amount)];
        for _ in 0..zero_count {
            lines.push(line(Decimal::ZERO));
        }

        let result = validate_lines(&lines);
        prop_assert!(
            result.is_ok(),
            "zero-amount lines should not unbalance, got: {:?}",
            result
        );
    }
}
