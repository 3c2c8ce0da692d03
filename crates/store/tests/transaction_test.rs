//! Integration tests for the transaction service over the in-memory store.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tallybook_core::directory::{
    Account, AccountService, AccountType, CreateAccountInput, UpdateAccountInput,
};
use tallybook_core::ledger::{
    CreateTransactionInput, LedgerError, LineInput, TransactionService, TransactionStatus,
    UpdateTransactionInput,
};
use tallybook_shared::types::{AccountId, CompanyId, PageRequest, UserId};
use tallybook_store::MemoryStore;

struct Fixture {
    accounts: AccountService,
    transactions: TransactionService,
    company_id: CompanyId,
    user_id: UserId,
    cash: Account,
    sales: Account,
}

async fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let accounts = AccountService::new(store.clone());
    let transactions = TransactionService::new(store.clone(), store);
    let company_id = CompanyId::new();

    let cash = accounts
        .create_account(CreateAccountInput {
            company_id,
            code: "1000".to_string(),
            name: "Cash".to_string(),
            account_type: AccountType::Asset,
            parent_id: None,
            description: None,
        })
        .await
        .expect("create cash");
    let sales = accounts
        .create_account(CreateAccountInput {
            company_id,
            code: "4000".to_string(),
            name: "Sales".to_string(),
            account_type: AccountType::Revenue,
            parent_id: None,
            description: None,
        })
        .await
        .expect("create sales");

    Fixture {
        accounts,
        transactions,
        company_id,
        user_id: UserId::new(),
        cash,
        sales,
    }
}

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
}

fn sale(fx: &Fixture, date: NaiveDate, amount: Decimal, post: bool) -> CreateTransactionInput {
    CreateTransactionInput {
        company_id: fx.company_id,
        created_by: fx.user_id,
        transaction_date: date,
        description: "Cash sale".to_string(),
        reference: None,
        post_immediately: post,
        lines: vec![
            LineInput::new(fx.cash.id, amount),
            LineInput::new(fx.sales.id, -amount),
        ],
    }
}

// ============================================================================
// Creation and validation
// ============================================================================

#[tokio::test]
async fn test_create_balanced_draft() {
    let fx = fixture().await;

    let transaction = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(100.00), false))
        .await
        .expect("create transaction");

    assert_eq!(transaction.status, TransactionStatus::Draft);
    assert!(transaction.is_editable());
    assert!(transaction.is_balanced());
    assert_eq!(transaction.total_debits(), dec!(100.00));
    assert_eq!(transaction.total_credits(), dec!(100.00));

    let orders: Vec<u32> = transaction.lines.iter().map(|l| l.line_order).collect();
    assert_eq!(orders, [0, 1]);
    assert!(
        transaction
            .lines
            .iter()
            .all(|l| l.transaction_id == transaction.id)
    );
}

#[tokio::test]
async fn test_post_immediately() {
    let fx = fixture().await;

    let transaction = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(75.00), true))
        .await
        .expect("create transaction");

    assert_eq!(transaction.status, TransactionStatus::Posted);
    assert!(!transaction.is_editable());
}

#[tokio::test]
async fn test_single_line_rejected_before_balance_check() {
    let fx = fixture().await;

    let mut input = sale(&fx, day(3, 10), dec!(100.00), false);
    // One wildly unbalanced line: the count check must fire first.
    input.lines = vec![LineInput::new(fx.cash.id, dec!(999.00))];

    let err = fx
        .transactions
        .create_transaction(input)
        .await
        .expect_err("single line rejected");
    assert!(matches!(err, LedgerError::InsufficientLines));
    assert_eq!(err.to_string(), "Transaction must have at least 2 lines");
    assert_eq!(err.http_status_code(), 422);
}

#[tokio::test]
async fn test_unbalanced_lines_report_difference() {
    let fx = fixture().await;

    let mut input = sale(&fx, day(3, 10), dec!(100.00), false);
    input.lines = vec![
        LineInput::new(fx.cash.id, dec!(100.00)),
        LineInput::new(fx.sales.id, dec!(-50.00)),
    ];

    let err = fx
        .transactions
        .create_transaction(input)
        .await
        .expect_err("unbalanced rejected");
    match &err {
        LedgerError::NotBalanced { difference } => assert_eq!(*difference, dec!(50.00)),
        other => panic!("expected NotBalanced, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Transaction does not balance. Difference: 50.00. \
         Total debits must equal total credits."
    );
}

#[tokio::test]
async fn test_unknown_account_rejected() {
    let fx = fixture().await;

    let mut input = sale(&fx, day(3, 10), dec!(10.00), false);
    input.lines = vec![
        LineInput::new(fx.cash.id, dec!(10.00)),
        LineInput::new(AccountId::new(), dec!(-10.00)),
    ];

    let err = fx
        .transactions
        .create_transaction(input)
        .await
        .expect_err("unknown account rejected");
    assert!(matches!(err, LedgerError::AccountNotFound(_)));
    assert_eq!(err.http_status_code(), 404);
}

#[tokio::test]
async fn test_inactive_account_rejected() {
    let fx = fixture().await;

    fx.accounts
        .update_account(
            fx.company_id,
            fx.sales.id,
            UpdateAccountInput {
                is_active: Some(false),
                ..UpdateAccountInput::default()
            },
        )
        .await
        .expect("deactivate sales");

    let err = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(10.00), false))
        .await
        .expect_err("inactive account rejected");
    assert_eq!(
        err.to_string(),
        "Account 4000 is inactive and cannot be used"
    );
    assert_eq!(err.error_code(), "ACCOUNT_INACTIVE");
}

#[tokio::test]
async fn test_zero_amount_lines_allowed() {
    let fx = fixture().await;

    let mut input = sale(&fx, day(3, 10), dec!(50.00), false);
    input.lines.push(LineInput::new(fx.cash.id, Decimal::ZERO));

    let transaction = fx
        .transactions
        .create_transaction(input)
        .await
        .expect("zero-amount line is legal");
    assert_eq!(transaction.lines.len(), 3);
    assert_eq!(transaction.lines[2].amount, Decimal::ZERO);
    assert_eq!(transaction.lines[2].debit_amount(), Decimal::ZERO);
    assert_eq!(transaction.lines[2].credit_amount(), Decimal::ZERO);
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_listings_and_date_range() {
    let fx = fixture().await;

    fx.transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(10.00), true))
        .await
        .expect("first");
    fx.transactions
        .create_transaction(sale(&fx, day(3, 20), dec!(20.00), false))
        .await
        .expect("second");
    fx.transactions
        .create_transaction(sale(&fx, day(3, 15), dec!(15.00), true))
        .await
        .expect("third");

    let page = fx
        .transactions
        .list_transactions(fx.company_id, &PageRequest::default())
        .await
        .expect("list");
    let dates: Vec<NaiveDate> = page.data.iter().map(|t| t.transaction_date).collect();
    assert_eq!(dates, [day(3, 20), day(3, 15), day(3, 10)]);
    assert_eq!(page.meta.total, 3);

    let posted = fx
        .transactions
        .posted_transactions(fx.company_id, &PageRequest::default())
        .await
        .expect("posted");
    assert_eq!(posted.data.len(), 2);
    assert!(posted.data.iter().all(|t| t.status.is_posted()));

    let drafts = fx
        .transactions
        .draft_transactions(fx.company_id, &PageRequest::default())
        .await
        .expect("drafts");
    assert_eq!(drafts.data.len(), 1);
    assert_eq!(drafts.data[0].transaction_date, day(3, 20));

    let ranged = fx
        .transactions
        .transactions_by_date_range(fx.company_id, day(3, 12), day(3, 20))
        .await
        .expect("range");
    let dates: Vec<NaiveDate> = ranged.iter().map(|t| t.transaction_date).collect();
    assert_eq!(dates, [day(3, 15), day(3, 20)]);
}

#[tokio::test]
async fn test_transactions_by_account_deduplicated() {
    let fx = fixture().await;

    let mut input = sale(&fx, day(3, 10), dec!(25.00), true);
    // Two lines on the same account within one transaction.
    input.lines = vec![
        LineInput::new(fx.cash.id, dec!(25.00)),
        LineInput::new(fx.cash.id, dec!(5.00)),
        LineInput::new(fx.sales.id, dec!(-30.00)),
    ];
    fx.transactions
        .create_transaction(input)
        .await
        .expect("create");

    let touching = fx
        .transactions
        .transactions_by_account(fx.company_id, fx.cash.id, None, None)
        .await
        .expect("by account");
    assert_eq!(touching.len(), 1);
    assert_eq!(touching[0].lines.len(), 3);
}

// ============================================================================
// Update and lifecycle
// ============================================================================

#[tokio::test]
async fn test_update_draft_header_keeps_lines() {
    let fx = fixture().await;

    let draft = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(100.00), false))
        .await
        .expect("create");
    let original_line_ids: Vec<_> = draft.lines.iter().map(|l| l.id).collect();

    let updated = fx
        .transactions
        .update_transaction(
            fx.company_id,
            draft.id,
            UpdateTransactionInput {
                description: Some("March sale".to_string()),
                transaction_date: Some(day(3, 12)),
                ..UpdateTransactionInput::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.description, "March sale");
    assert_eq!(updated.transaction_date, day(3, 12));
    // Header-only updates leave the stored lines untouched.
    let line_ids: Vec<_> = updated.lines.iter().map(|l| l.id).collect();
    assert_eq!(line_ids, original_line_ids);
}

#[tokio::test]
async fn test_update_replaces_lines_wholesale() {
    let fx = fixture().await;

    let draft = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(100.00), false))
        .await
        .expect("create");
    let original_line_ids: Vec<_> = draft.lines.iter().map(|l| l.id).collect();

    let updated = fx
        .transactions
        .update_transaction(
            fx.company_id,
            draft.id,
            UpdateTransactionInput {
                lines: Some(vec![
                    LineInput::new(fx.cash.id, dec!(70.00)),
                    LineInput::new(fx.sales.id, dec!(-40.00)),
                    LineInput::new(fx.sales.id, dec!(-30.00)),
                ]),
                ..UpdateTransactionInput::default()
            },
        )
        .await
        .expect("replace lines");

    assert_eq!(updated.lines.len(), 3);
    let orders: Vec<u32> = updated.lines.iter().map(|l| l.line_order).collect();
    assert_eq!(orders, [0, 1, 2]);
    // Replacement lines get fresh identities.
    assert!(
        updated
            .lines
            .iter()
            .all(|l| !original_line_ids.contains(&l.id))
    );
    assert!(updated.is_balanced());
}

#[tokio::test]
async fn test_update_rejects_unbalanced_replacement() {
    let fx = fixture().await;

    let draft = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(100.00), false))
        .await
        .expect("create");

    let err = fx
        .transactions
        .update_transaction(
            fx.company_id,
            draft.id,
            UpdateTransactionInput {
                lines: Some(vec![
                    LineInput::new(fx.cash.id, dec!(70.00)),
                    LineInput::new(fx.sales.id, dec!(-40.00)),
                ]),
                ..UpdateTransactionInput::default()
            },
        )
        .await
        .expect_err("unbalanced replacement rejected");
    assert!(matches!(err, LedgerError::NotBalanced { .. }));

    // The stored transaction is untouched.
    let stored = fx
        .transactions
        .get_transaction(fx.company_id, draft.id)
        .await
        .expect("get");
    assert_eq!(stored.lines.len(), 2);
    assert_eq!(stored.total_debits(), dec!(100.00));
}

#[tokio::test]
async fn test_posted_transaction_is_immutable() {
    let fx = fixture().await;

    let posted = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(100.00), true))
        .await
        .expect("create");

    let err = fx
        .transactions
        .update_transaction(
            fx.company_id,
            posted.id,
            UpdateTransactionInput {
                description: Some("rewritten".to_string()),
                ..UpdateTransactionInput::default()
            },
        )
        .await
        .expect_err("posted cannot be updated");
    assert!(matches!(err, LedgerError::CannotModifyPosted));
    assert_eq!(err.to_string(), "Cannot update a posted transaction");

    let stored = fx
        .transactions
        .get_transaction(fx.company_id, posted.id)
        .await
        .expect("get");
    assert_eq!(stored.description, "Cash sale");
}

#[tokio::test]
async fn test_post_and_unpost_lifecycle() {
    let fx = fixture().await;

    let draft = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(100.00), false))
        .await
        .expect("create");
    let line_ids: Vec<_> = draft.lines.iter().map(|l| l.id).collect();

    let posted = fx
        .transactions
        .post_transaction(fx.company_id, draft.id)
        .await
        .expect("post");
    assert_eq!(posted.status, TransactionStatus::Posted);
    // Posting flips the status without touching the lines.
    let posted_line_ids: Vec<_> = posted.lines.iter().map(|l| l.id).collect();
    assert_eq!(posted_line_ids, line_ids);

    let err = fx
        .transactions
        .post_transaction(fx.company_id, draft.id)
        .await
        .expect_err("already posted");
    assert!(matches!(err, LedgerError::AlreadyPosted));
    assert_eq!(err.to_string(), "Transaction is already posted");

    let unposted = fx
        .transactions
        .unpost_transaction(fx.company_id, draft.id)
        .await
        .expect("unpost");
    assert_eq!(unposted.status, TransactionStatus::Draft);

    let err = fx
        .transactions
        .unpost_transaction(fx.company_id, draft.id)
        .await
        .expect_err("not posted");
    assert!(matches!(err, LedgerError::NotPosted));
    assert_eq!(err.to_string(), "Transaction is not posted");
}

#[tokio::test]
async fn test_delete_draft_but_not_posted() {
    let fx = fixture().await;

    let draft = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(10.00), false))
        .await
        .expect("create draft");
    fx.transactions
        .delete_transaction(fx.company_id, draft.id)
        .await
        .expect("delete draft");
    let err = fx
        .transactions
        .get_transaction(fx.company_id, draft.id)
        .await
        .expect_err("gone");
    assert!(matches!(err, LedgerError::NotFound(_)));

    let posted = fx
        .transactions
        .create_transaction(sale(&fx, day(3, 11), dec!(10.00), true))
        .await
        .expect("create posted");
    let err = fx
        .transactions
        .delete_transaction(fx.company_id, posted.id)
        .await
        .expect_err("posted cannot be deleted");
    assert!(matches!(err, LedgerError::CannotDeletePosted));
    assert_eq!(err.to_string(), "Cannot delete a posted transaction");
}

#[tokio::test]
async fn test_delete_account_with_lines_rejected() {
    let fx = fixture().await;

    fx.transactions
        .create_transaction(sale(&fx, day(3, 10), dec!(10.00), true))
        .await
        .expect("create");

    let err = fx
        .accounts
        .delete_account(fx.company_id, fx.cash.id)
        .await
        .expect_err("referenced account cannot be deleted");
    assert_eq!(err.http_status_code(), 409);
}
