//! Transaction table operations.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use tallybook_core::ledger::{
    NewLine, NewTransaction, Transaction, TransactionLine, TransactionPatch,
};
use tallybook_core::store::{StoreError, TransactionStore};
use tallybook_shared::types::{AccountId, CompanyId, LineId, PageRequest, TransactionId};

use super::{Dataset, MemoryStore, line_order, paginate};

/// Most recent date first, newest record first within a date.
fn by_company_desc(data: &Dataset, company_id: CompanyId) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = data
        .transactions
        .values()
        .filter(|transaction| transaction.company_id == company_id)
        .cloned()
        .collect();
    transactions.sort_by(|a, b| {
        b.transaction_date
            .cmp(&a.transaction_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    transactions
}

fn sort_ascending(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        a.transaction_date
            .cmp(&b.transaction_date)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

fn build_lines(
    transaction_id: TransactionId,
    new_lines: Vec<NewLine>,
) -> Result<Vec<TransactionLine>, StoreError> {
    let mut lines = Vec::with_capacity(new_lines.len());
    for (index, line) in new_lines.into_iter().enumerate() {
        lines.push(TransactionLine {
            id: LineId::new(),
            transaction_id,
            account_id: line.account_id,
            amount: line.amount,
            description: line.description,
            line_order: line_order(index)?,
        });
    }
    Ok(lines)
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn get_with_lines(
        &self,
        company_id: CompanyId,
        id: TransactionId,
    ) -> Result<Option<Transaction>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .transactions
            .get(&id)
            .filter(|transaction| transaction.company_id == company_id)
            .cloned())
    }

    async fn list(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError> {
        let data = self.data.read().await;
        Ok(paginate(&by_company_desc(&data, company_id), page))
    }

    async fn list_posted(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError> {
        let data = self.data.read().await;
        let mut transactions = by_company_desc(&data, company_id);
        transactions.retain(|transaction| transaction.status.is_posted());
        Ok(paginate(&transactions, page))
    }

    async fn list_unposted(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError> {
        let data = self.data.read().await;
        let mut transactions = by_company_desc(&data, company_id);
        transactions.retain(|transaction| !transaction.status.is_posted());
        Ok(paginate(&transactions, page))
    }

    async fn list_by_date_range(
        &self,
        company_id: CompanyId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, StoreError> {
        let data = self.data.read().await;
        let mut transactions: Vec<Transaction> = data
            .transactions
            .values()
            .filter(|transaction| {
                transaction.company_id == company_id
                    && transaction.transaction_date >= start
                    && transaction.transaction_date <= end
            })
            .cloned()
            .collect();
        sort_ascending(&mut transactions);
        Ok(transactions)
    }

    async fn list_by_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, StoreError> {
        let data = self.data.read().await;
        let mut transactions: Vec<Transaction> = data
            .transactions
            .values()
            .filter(|transaction| {
                transaction.company_id == company_id
                    && start.is_none_or(|s| transaction.transaction_date >= s)
                    && end.is_none_or(|e| transaction.transaction_date <= e)
                    && transaction
                        .lines
                        .iter()
                        .any(|line| line.account_id == account_id)
            })
            .cloned()
            .collect();
        sort_ascending(&mut transactions);
        Ok(transactions)
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, StoreError> {
        let mut data = self.data.write().await;
        let now = Utc::now();
        let id = TransactionId::new();
        let stored = Transaction {
            id,
            company_id: transaction.company_id,
            transaction_date: transaction.transaction_date,
            description: transaction.description,
            reference: transaction.reference,
            status: transaction.status,
            created_by: transaction.created_by,
            created_at: now,
            updated_at: now,
            lines: build_lines(id, transaction.lines)?,
        };
        data.transactions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        company_id: CompanyId,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> Result<Option<Transaction>, StoreError> {
        let mut data = self.data.write().await;
        let Some(existing) = data.transactions.get(&id) else {
            return Ok(None);
        };
        if existing.company_id != company_id {
            return Ok(None);
        }

        let mut stored = existing.clone();
        stored.transaction_date = patch.transaction_date;
        stored.description = patch.description;
        stored.reference = patch.reference;
        stored.status = patch.status;
        stored.updated_at = Utc::now();
        if let Some(new_lines) = patch.lines {
            stored.lines = build_lines(id, new_lines)?;
        }

        data.transactions.insert(id, stored.clone());
        Ok(Some(stored))
    }

    async fn delete(&self, company_id: CompanyId, id: TransactionId) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        match data.transactions.get(&id) {
            Some(transaction) if transaction.company_id == company_id => {}
            _ => return Ok(false),
        }
        data.transactions.remove(&id);
        Ok(true)
    }
}
