//! Core business logic for Tallybook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `directory` - Chart of accounts management
//! - `ledger` - Double-entry transactions and the draft/posted lifecycle
//! - `reports` - Balance folds and financial report generation
//! - `store` - Storage ports implemented by persistence backends
//! - `tenancy` - Companies (tenants), users, and access grants

pub mod directory;
pub mod ledger;
pub mod reports;
pub mod store;
pub mod tenancy;
