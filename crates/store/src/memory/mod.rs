//! The in-memory dataset and the store built on it.

mod account;
mod tenancy;
mod transaction;

use std::collections::HashMap;

use tokio::sync::RwLock;

use tallybook_core::directory::Account;
use tallybook_core::ledger::Transaction;
use tallybook_core::store::StoreError;
use tallybook_core::tenancy::{Company, CompanyAccess, User};
use tallybook_shared::types::{AccountId, CompanyId, PageRequest, TransactionId, UserId};

/// Every table of the backend, guarded together.
#[derive(Debug, Default)]
struct Dataset {
    companies: HashMap<CompanyId, Company>,
    users: HashMap<UserId, User>,
    accounts: HashMap<AccountId, Account>,
    transactions: HashMap<TransactionId, Transaction>,
    grants: Vec<CompanyAccess>,
}

/// In-memory store implementing all storage ports.
///
/// A single `RwLock` guards the whole dataset, so every operation sees
/// and leaves a consistent state, matching what a transactional backend
/// guarantees. Ids (UUIDv7), timestamps, and line ordering are assigned
/// here, never by callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Dataset>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T: Clone>(items: &[T], page: &PageRequest) -> (Vec<T>, u64) {
    let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    let data = items.iter().skip(offset).take(limit).cloned().collect();
    (data, total)
}

fn line_order(index: usize) -> Result<u32, StoreError> {
    u32::try_from(index).map_err(|_| StoreError::Backend("line count exceeds u32".to_string()))
}
