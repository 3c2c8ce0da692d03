//! Company, user, and access grant table operations.

use async_trait::async_trait;
use chrono::Utc;

use tallybook_core::store::{CompanyStore, StoreError, UserStore};
use tallybook_core::tenancy::{Company, CompanyAccess, NewCompany, NewCompanyAccess, NewUser, User};
use tallybook_shared::types::{AccessId, CompanyId, PageRequest, UserId};

use super::{Dataset, MemoryStore, paginate};

fn companies_by_code(data: &Dataset) -> Vec<Company> {
    let mut companies: Vec<Company> = data.companies.values().cloned().collect();
    companies.sort_by(|a, b| a.code.cmp(&b.code));
    companies
}

fn users_by_email(data: &Dataset) -> Vec<User> {
    let mut users: Vec<User> = data.users.values().cloned().collect();
    users.sort_by(|a, b| a.email.cmp(&b.email));
    users
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn get(&self, id: CompanyId) -> Result<Option<Company>, StoreError> {
        let data = self.data.read().await;
        Ok(data.companies.get(&id).cloned())
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<Company>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .companies
            .values()
            .find(|company| company.code == code)
            .cloned())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, StoreError> {
        let data = self.data.read().await;
        Ok(data.companies.values().any(|company| company.code == code))
    }

    async fn list(&self, page: &PageRequest) -> Result<(Vec<Company>, u64), StoreError> {
        let data = self.data.read().await;
        Ok(paginate(&companies_by_code(&data), page))
    }

    async fn list_active(&self, page: &PageRequest) -> Result<(Vec<Company>, u64), StoreError> {
        let data = self.data.read().await;
        let mut companies = companies_by_code(&data);
        companies.retain(|company| company.is_active);
        Ok(paginate(&companies, page))
    }

    async fn insert(&self, company: NewCompany) -> Result<Company, StoreError> {
        let mut data = self.data.write().await;
        if data.companies.values().any(|c| c.code == company.code) {
            return Err(StoreError::UniqueViolation {
                constraint: "companies_code_key",
            });
        }

        let now = Utc::now();
        let stored = Company {
            id: CompanyId::new(),
            name: company.name,
            code: company.code,
            fiscal_year_start_month: company.fiscal_year_start_month,
            currency: company.currency,
            is_active: company.is_active,
            created_at: now,
            updated_at: now,
        };
        data.companies.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, company: Company) -> Result<Option<Company>, StoreError> {
        let mut data = self.data.write().await;
        if !data.companies.contains_key(&company.id) {
            return Ok(None);
        }
        if data
            .companies
            .values()
            .any(|c| c.id != company.id && c.code == company.code)
        {
            return Err(StoreError::UniqueViolation {
                constraint: "companies_code_key",
            });
        }

        let mut stored = company;
        stored.updated_at = Utc::now();
        data.companies.insert(stored.id, stored.clone());
        Ok(Some(stored))
    }

    async fn delete(&self, id: CompanyId) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        if !data.companies.contains_key(&id) {
            return Ok(false);
        }
        if data
            .accounts
            .values()
            .any(|account| account.company_id == id)
        {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "accounts_company_id_fkey",
            });
        }
        if data
            .transactions
            .values()
            .any(|transaction| transaction.company_id == id)
        {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "transactions_company_id_fkey",
            });
        }
        if data.grants.iter().any(|grant| grant.company_id == id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "company_access_company_id_fkey",
            });
        }

        data.companies.remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.values().find(|user| user.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.values().any(|user| user.email == email))
    }

    async fn list(&self, page: &PageRequest) -> Result<(Vec<User>, u64), StoreError> {
        let data = self.data.read().await;
        Ok(paginate(&users_by_email(&data), page))
    }

    async fn list_active(&self, page: &PageRequest) -> Result<(Vec<User>, u64), StoreError> {
        let data = self.data.read().await;
        let mut users = users_by_email(&data);
        users.retain(|user| user.is_active);
        Ok(paginate(&users, page))
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut data = self.data.write().await;
        if data.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation {
                constraint: "users_email_key",
            });
        }

        let now = Utc::now();
        let stored = User {
            id: UserId::new(),
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            created_at: now,
            updated_at: now,
        };
        data.users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: User) -> Result<Option<User>, StoreError> {
        let mut data = self.data.write().await;
        if !data.users.contains_key(&user.id) {
            return Ok(None);
        }
        if data
            .users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::UniqueViolation {
                constraint: "users_email_key",
            });
        }

        let mut stored = user;
        stored.updated_at = Utc::now();
        data.users.insert(stored.id, stored.clone());
        Ok(Some(stored))
    }

    async fn delete(&self, id: UserId) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        if !data.users.contains_key(&id) {
            return Ok(false);
        }
        if data
            .transactions
            .values()
            .any(|transaction| transaction.created_by == id)
        {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "transactions_created_by_fkey",
            });
        }
        if data.grants.iter().any(|grant| grant.user_id == id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "company_access_user_id_fkey",
            });
        }

        data.users.remove(&id);
        Ok(true)
    }

    async fn grant_access(&self, access: NewCompanyAccess) -> Result<CompanyAccess, StoreError> {
        let mut data = self.data.write().await;
        if !data.users.contains_key(&access.user_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "company_access_user_id_fkey",
            });
        }
        if !data.companies.contains_key(&access.company_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "company_access_company_id_fkey",
            });
        }

        let stored = CompanyAccess {
            id: AccessId::new(),
            user_id: access.user_id,
            company_id: access.company_id,
            role: access.role,
            is_default: access.is_default,
            created_at: Utc::now(),
        };
        data.grants.push(stored.clone());
        Ok(stored)
    }

    async fn list_access_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CompanyAccess>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .grants
            .iter()
            .filter(|grant| grant.user_id == user_id)
            .cloned()
            .collect())
    }
}
