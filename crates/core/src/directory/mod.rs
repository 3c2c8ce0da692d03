//! Chart of accounts management.
//!
//! Every company (tenant) owns its own chart. Account codes are unique
//! within a company and accounts may reference a same-company parent to
//! form a hierarchy.

pub mod account;
pub mod error;
pub mod service;
pub mod types;

pub use account::{Account, AccountType};
pub use error::DirectoryError;
pub use service::AccountService;
pub use types::{CreateAccountInput, NewAccount, UpdateAccountInput};
