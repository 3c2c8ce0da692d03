//! Account table operations.

use async_trait::async_trait;
use chrono::Utc;

use tallybook_core::directory::{Account, AccountType, NewAccount};
use tallybook_core::store::{AccountStore, StoreError};
use tallybook_shared::types::{AccountId, CompanyId, PageRequest};

use super::{Dataset, MemoryStore, paginate};

fn by_company(data: &Dataset, company_id: CompanyId) -> Vec<Account> {
    let mut accounts: Vec<Account> = data
        .accounts
        .values()
        .filter(|account| account.company_id == company_id)
        .cloned()
        .collect();
    accounts.sort_by(|a, b| a.code.cmp(&b.code));
    accounts
}

fn code_taken(data: &Dataset, company_id: CompanyId, code: &str, except: Option<AccountId>) -> bool {
    data.accounts.values().any(|account| {
        account.company_id == company_id
            && account.code == code
            && Some(account.id) != except
    })
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn get(
        &self,
        company_id: CompanyId,
        id: AccountId,
    ) -> Result<Option<Account>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .accounts
            .get(&id)
            .filter(|account| account.company_id == company_id)
            .cloned())
    }

    async fn get_by_code(
        &self,
        company_id: CompanyId,
        code: &str,
    ) -> Result<Option<Account>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .accounts
            .values()
            .find(|account| account.company_id == company_id && account.code == code)
            .cloned())
    }

    async fn list(
        &self,
        company_id: CompanyId,
        page: &PageRequest,
    ) -> Result<(Vec<Account>, u64), StoreError> {
        let data = self.data.read().await;
        Ok(paginate(&by_company(&data, company_id), page))
    }

    async fn list_all(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError> {
        let data = self.data.read().await;
        Ok(by_company(&data, company_id))
    }

    async fn list_by_type(
        &self,
        company_id: CompanyId,
        account_type: AccountType,
    ) -> Result<Vec<Account>, StoreError> {
        let data = self.data.read().await;
        let mut accounts = by_company(&data, company_id);
        accounts.retain(|account| account.account_type == account_type);
        Ok(accounts)
    }

    async fn list_active(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError> {
        let data = self.data.read().await;
        let mut accounts = by_company(&data, company_id);
        accounts.retain(|account| account.is_active);
        Ok(accounts)
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut data = self.data.write().await;
        if code_taken(&data, account.company_id, &account.code, None) {
            return Err(StoreError::UniqueViolation {
                constraint: "accounts_company_id_code_key",
            });
        }

        let now = Utc::now();
        let stored = Account {
            id: AccountId::new(),
            company_id: account.company_id,
            code: account.code,
            name: account.name,
            account_type: account.account_type,
            parent_id: account.parent_id,
            description: account.description,
            is_active: account.is_active,
            created_at: now,
            updated_at: now,
        };
        data.accounts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, account: Account) -> Result<Option<Account>, StoreError> {
        let mut data = self.data.write().await;
        match data.accounts.get(&account.id) {
            Some(existing) if existing.company_id == account.company_id => {}
            _ => return Ok(None),
        }
        if code_taken(&data, account.company_id, &account.code, Some(account.id)) {
            return Err(StoreError::UniqueViolation {
                constraint: "accounts_company_id_code_key",
            });
        }

        let mut stored = account;
        stored.updated_at = Utc::now();
        data.accounts.insert(stored.id, stored.clone());
        Ok(Some(stored))
    }

    async fn delete(&self, company_id: CompanyId, id: AccountId) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        match data.accounts.get(&id) {
            Some(account) if account.company_id == company_id => {}
            _ => return Ok(false),
        }
        if data
            .transactions
            .values()
            .any(|transaction| transaction.lines.iter().any(|line| line.account_id == id))
        {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "transaction_lines_account_id_fkey",
            });
        }
        if data
            .accounts
            .values()
            .any(|account| account.parent_id == Some(id))
        {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "accounts_parent_id_fkey",
            });
        }

        data.accounts.remove(&id);
        Ok(true)
    }
}
