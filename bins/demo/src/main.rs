//! Tallybook demo runner.
//!
//! Seeds an in-memory tenant with the standard demo chart of accounts
//! and a handful of transactions, then generates every report and logs
//! the results.
//!
//! Usage: cargo run --bin demo

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tallybook_core::directory::{Account, AccountService, AccountType, CreateAccountInput};
use tallybook_core::ledger::{CreateTransactionInput, LineInput, TransactionService};
use tallybook_core::reports::ReportingService;
use tallybook_core::tenancy::{
    Company, CompanyService, CreateCompanyInput, CreateUserInput, User, UserRole, UserService,
};
use tallybook_shared::AppConfig;
use tallybook_shared::config::DemoSettings;
use tallybook_store::MemoryStore;

/// Seeded chart of accounts, keyed by role in the demo transactions.
struct Chart {
    cash: Account,
    bank: Account,
    capital: Account,
    salaries: Account,
    services: Account,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(app = %config.app.name, "starting demo run");

    let store = Arc::new(MemoryStore::new());
    let companies = CompanyService::new(store.clone());
    let users = UserService::new(store.clone());
    let accounts = AccountService::new(store.clone());
    let transactions = TransactionService::new(store.clone(), store.clone());
    let reports = ReportingService::new(store.clone(), store);

    let (company, user) = seed_tenant(&companies, &users, &config.demo).await?;
    let chart = seed_chart(&accounts, &company).await?;
    seed_transactions(&transactions, &company, &user, &chart).await?;

    print_reports(&reports, &company, &chart).await?;

    info!("demo run complete");
    Ok(())
}

/// Creates the demo company and its administrator.
async fn seed_tenant(
    companies: &CompanyService,
    users: &UserService,
    settings: &DemoSettings,
) -> anyhow::Result<(Company, User)> {
    let company = companies
        .create_company(CreateCompanyInput {
            name: settings.company_name.clone(),
            code: settings.company_code.clone(),
            fiscal_year_start_month: 1,
            currency: settings.currency.clone(),
        })
        .await?;
    info!(code = %company.code, "seeded company");

    let user = users
        .create_user(CreateUserInput {
            email: settings.admin_email.clone(),
            full_name: settings.admin_name.clone(),
            is_superuser: false,
        })
        .await?;
    users
        .grant_company_access(user.id, company.id, UserRole::Admin, true)
        .await?;
    info!(email = %user.email, "seeded administrator");

    Ok((company, user))
}

/// Creates the demo chart of accounts.
async fn seed_chart(accounts: &AccountService, company: &Company) -> anyhow::Result<Chart> {
    let cash = seed_account(accounts, company, "38.00.00", "Ταμείο", AccountType::Asset).await?;
    let bank =
        seed_account(accounts, company, "38.03.01", "Εθνική Τράπεζα", AccountType::Asset).await?;
    seed_account(
        accounts,
        company,
        "50.00.00",
        "Προμηθευτές Εσωτερικού",
        AccountType::Liability,
    )
    .await?;
    let capital =
        seed_account(accounts, company, "40.00.00", "Κεφάλαιο", AccountType::Equity).await?;
    seed_account(accounts, company, "40.00.01", "Κέρδη εις νέον", AccountType::Equity).await?;
    let salaries =
        seed_account(accounts, company, "64.00.00", "Μισθοί", AccountType::Expense).await?;
    let services = seed_account(
        accounts,
        company,
        "73.00.00",
        "Παροχή Υπηρεσιών",
        AccountType::Revenue,
    )
    .await?;
    info!(count = 7, "seeded chart of accounts");

    Ok(Chart {
        cash,
        bank,
        capital,
        salaries,
        services,
    })
}

async fn seed_account(
    accounts: &AccountService,
    company: &Company,
    code: &str,
    name: &str,
    account_type: AccountType,
) -> anyhow::Result<Account> {
    Ok(accounts
        .create_account(CreateAccountInput {
            company_id: company.id,
            code: code.to_string(),
            name: name.to_string(),
            account_type,
            parent_id: None,
            description: None,
        })
        .await?)
}

/// Records two months of sample activity, leaving one entry in draft.
async fn seed_transactions(
    transactions: &TransactionService,
    company: &Company,
    user: &User,
    chart: &Chart,
) -> anyhow::Result<()> {
    let entries = [
        (
            45,
            "Initial capital contribution",
            true,
            vec![
                LineInput::new(chart.cash.id, dec!(10000.00)),
                LineInput::new(chart.capital.id, dec!(-10000.00)),
            ],
        ),
        (
            30,
            "Transfer to bank account",
            true,
            vec![
                LineInput::new(chart.bank.id, dec!(6000.00)),
                LineInput::new(chart.cash.id, dec!(-6000.00)),
            ],
        ),
        (
            21,
            "Consulting services rendered",
            true,
            vec![
                LineInput::new(chart.bank.id, dec!(2500.00)),
                LineInput::new(chart.services.id, dec!(-2500.00)),
            ],
        ),
        (
            14,
            "Monthly payroll",
            true,
            vec![
                LineInput::new(chart.salaries.id, dec!(1800.00)),
                LineInput::new(chart.bank.id, dec!(-1800.00)),
            ],
        ),
        (
            7,
            "Pending client invoice",
            false,
            vec![
                LineInput::new(chart.cash.id, dec!(400.00)),
                LineInput::new(chart.services.id, dec!(-400.00)),
            ],
        ),
    ];

    let count = entries.len();
    for (age_days, description, post_immediately, lines) in entries {
        let transaction = transactions
            .create_transaction(CreateTransactionInput {
                company_id: company.id,
                created_by: user.id,
                transaction_date: days_ago(age_days),
                description: description.to_string(),
                reference: None,
                post_immediately,
                lines,
            })
            .await?;
        info!(
            date = %transaction.transaction_date,
            status = ?transaction.status,
            description = %transaction.description,
            "seeded transaction"
        );
    }
    info!(count, "seeded transactions");

    Ok(())
}

/// Generates every report for the seeded tenant and logs the totals.
async fn print_reports(
    reports: &ReportingService,
    company: &Company,
    chart: &Chart,
) -> anyhow::Result<()> {
    let today = Utc::now().date_naive();
    let period_start = days_ago(60);

    let trial = reports.generate_trial_balance(company.id, today).await?;
    info!(
        as_of = %trial.as_of_date,
        total_debits = %trial.total_debits,
        total_credits = %trial.total_credits,
        "trial balance"
    );
    for balance in &trial.accounts {
        info!(
            code = %balance.account.code,
            name = %balance.account.name,
            debit = %balance.debit_total,
            credit = %balance.credit_total,
            "  account"
        );
    }

    let sheet = reports.generate_balance_sheet(company.id, today).await?;
    info!(
        total_assets = %sheet.total_assets,
        total_liabilities = %sheet.total_liabilities,
        total_equity = %sheet.total_equity,
        "balance sheet"
    );

    let income = reports
        .generate_income_statement(company.id, period_start, today)
        .await?;
    info!(
        total_revenue = %income.total_revenue,
        total_expenses = %income.total_expenses,
        net_income = %income.net_income,
        "income statement"
    );

    let journal = reports
        .generate_journal(company.id, period_start, today)
        .await?;
    info!(entries = journal.entries.len(), "journal");

    let ledger = reports
        .generate_general_ledger(company.id, chart.bank.id, period_start, today)
        .await?;
    info!(
        account = %ledger.account.code,
        opening = %ledger.opening_balance,
        closing = %ledger.closing_balance,
        movements = ledger.entries.len(),
        "general ledger"
    );

    Ok(())
}

fn days_ago(days: i64) -> NaiveDate {
    Utc::now().date_naive() - Duration::days(days)
}
