//! Storage ports.
//!
//! Interface-segregated async traits, one per aggregate, that storage
//! backends implement. The core depends only on these traits; the
//! in-memory reference backend lives in its own crate, and a relational
//! backend can plug in behind the same interfaces.

pub mod account;
pub mod error;
pub mod tenancy;
pub mod transaction;

pub use account::AccountStore;
pub use error::StoreError;
pub use tenancy::{CompanyStore, UserStore};
pub use transaction::TransactionStore;
