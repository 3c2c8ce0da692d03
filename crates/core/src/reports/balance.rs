//! Balance calculation over posted transactions.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tallybook_shared::types::AccountId;

use super::types::AccountBalance;
use crate::directory::Account;
use crate::ledger::Transaction;

/// Folds posted transactions into per-account balances.
///
/// Every input account is seeded with a zeroed balance, so accounts with
/// no activity still appear in the result. Draft transactions and lines
/// on accounts outside the input set are ignored. Positive amounts
/// accumulate into the debit total, negative amounts accumulate their
/// absolute value into the credit total, and zero amounts touch neither.
#[must_use]
pub fn fold_balances(
    accounts: &[Account],
    transactions: &[Transaction],
) -> HashMap<AccountId, AccountBalance> {
    let mut balances: HashMap<AccountId, AccountBalance> = accounts
        .iter()
        .map(|account| (account.id, AccountBalance::zeroed(account.clone())))
        .collect();

    for transaction in transactions {
        if !transaction.status.is_posted() {
            continue;
        }
        for line in &transaction.lines {
            let Some(balance) = balances.get_mut(&line.account_id) else {
                continue;
            };
            if line.amount > Decimal::ZERO {
                balance.debit_total += line.amount;
            } else if line.amount < Decimal::ZERO {
                balance.credit_total += line.amount.abs();
            }
        }
    }

    for balance in balances.values_mut() {
        balance.balance = balance.debit_total - balance.credit_total;
    }

    balances
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use tallybook_shared::types::{CompanyId, LineId, TransactionId, UserId};

    use super::*;
    use crate::directory::AccountType;
    use crate::ledger::{TransactionLine, TransactionStatus};

    fn account(company_id: CompanyId, code: &str, account_type: AccountType) -> Account {
        let now = Utc::now();
        Account {
            id: AccountId::new(),
            company_id,
            code: code.to_string(),
            name: format!("Account {code}"),
            account_type,
            parent_id: None,
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn transaction(
        company_id: CompanyId,
        status: TransactionStatus,
        amounts: &[(AccountId, Decimal)],
    ) -> Transaction {
        let now = Utc::now();
        let id = TransactionId::new();
        Transaction {
            id,
            company_id,
            transaction_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            description: "test".to_string(),
            reference: None,
            status,
            created_by: UserId::new(),
            created_at: now,
            updated_at: now,
            lines: amounts
                .iter()
                .enumerate()
                .map(|(i, (account_id, amount))| TransactionLine {
                    id: LineId::new(),
                    transaction_id: id,
                    account_id: *account_id,
                    amount: *amount,
                    description: None,
                    line_order: u32::try_from(i).unwrap(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_every_account_seeded_with_zero_balance() {
        let company_id = CompanyId::new();
        let cash = account(company_id, "1000", AccountType::Asset);
        let sales = account(company_id, "4000", AccountType::Revenue);

        let balances = fold_balances(&[cash.clone(), sales.clone()], &[]);

        assert_eq!(balances.len(), 2);
        let cash_balance = &balances[&cash.id];
        assert_eq!(cash_balance.debit_total, Decimal::ZERO);
        assert_eq!(cash_balance.credit_total, Decimal::ZERO);
        assert_eq!(cash_balance.balance, Decimal::ZERO);
        assert_eq!(balances[&sales.id].balance, Decimal::ZERO);
    }

    #[test]
    fn test_posted_lines_split_into_debit_and_credit_totals() {
        let company_id = CompanyId::new();
        let cash = account(company_id, "1000", AccountType::Asset);
        let sales = account(company_id, "4000", AccountType::Revenue);

        let sale = transaction(
            company_id,
            TransactionStatus::Posted,
            &[(cash.id, dec!(100.00)), (sales.id, dec!(-100.00))],
        );

        let balances = fold_balances(&[cash.clone(), sales.clone()], &[sale]);

        let cash_balance = &balances[&cash.id];
        assert_eq!(cash_balance.debit_total, dec!(100.00));
        assert_eq!(cash_balance.credit_total, Decimal::ZERO);
        assert_eq!(cash_balance.balance, dec!(100.00));

        let sales_balance = &balances[&sales.id];
        assert_eq!(sales_balance.debit_total, Decimal::ZERO);
        assert_eq!(sales_balance.credit_total, dec!(100.00));
        assert_eq!(sales_balance.balance, dec!(-100.00));
    }

    #[test]
    fn test_draft_transactions_excluded() {
        let company_id = CompanyId::new();
        let cash = account(company_id, "1000", AccountType::Asset);
        let sales = account(company_id, "4000", AccountType::Revenue);

        let draft = transaction(
            company_id,
            TransactionStatus::Draft,
            &[(cash.id, dec!(500.00)), (sales.id, dec!(-500.00))],
        );

        let balances = fold_balances(&[cash.clone(), sales], &[draft]);

        assert_eq!(balances[&cash.id].balance, Decimal::ZERO);
    }

    #[test]
    fn test_zero_amount_lines_touch_neither_total() {
        let company_id = CompanyId::new();
        let cash = account(company_id, "1000", AccountType::Asset);
        let memo = account(company_id, "1900", AccountType::Asset);

        let entry = transaction(
            company_id,
            TransactionStatus::Posted,
            &[
                (cash.id, dec!(0.00)),
                (memo.id, dec!(25.00)),
                (cash.id, dec!(-25.00)),
            ],
        );

        let balances = fold_balances(&[cash.clone(), memo.clone()], &[entry]);

        let cash_balance = &balances[&cash.id];
        assert_eq!(cash_balance.debit_total, Decimal::ZERO);
        assert_eq!(cash_balance.credit_total, dec!(25.00));
        assert_eq!(balances[&memo.id].debit_total, dec!(25.00));
    }

    #[test]
    fn test_lines_on_unknown_accounts_ignored() {
        let company_id = CompanyId::new();
        let cash = account(company_id, "1000", AccountType::Asset);
        let foreign = AccountId::new();

        let entry = transaction(
            company_id,
            TransactionStatus::Posted,
            &[(cash.id, dec!(40.00)), (foreign, dec!(-40.00))],
        );

        let balances = fold_balances(&[cash.clone()], &[entry]);

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[&cash.id].debit_total, dec!(40.00));
    }

    #[test]
    fn test_balances_accumulate_across_transactions() {
        let company_id = CompanyId::new();
        let cash = account(company_id, "1000", AccountType::Asset);
        let sales = account(company_id, "4000", AccountType::Revenue);

        let first = transaction(
            company_id,
            TransactionStatus::Posted,
            &[(cash.id, dec!(100.00)), (sales.id, dec!(-100.00))],
        );
        let second = transaction(
            company_id,
            TransactionStatus::Posted,
            &[(cash.id, dec!(-30.00)), (sales.id, dec!(30.00))],
        );

        let balances = fold_balances(&[cash.clone(), sales.clone()], &[first, second]);

        let cash_balance = &balances[&cash.id];
        assert_eq!(cash_balance.debit_total, dec!(100.00));
        assert_eq!(cash_balance.credit_total, dec!(30.00));
        assert_eq!(cash_balance.balance, dec!(70.00));

        let sales_balance = &balances[&sales.id];
        assert_eq!(sales_balance.debit_total, dec!(30.00));
        assert_eq!(sales_balance.credit_total, dec!(100.00));
        assert_eq!(sales_balance.balance, dec!(-70.00));
    }
}
