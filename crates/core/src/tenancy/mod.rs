//! Multi-tenancy: companies, users, and access grants.
//!
//! Companies are the unit of tenancy. Users are pre-authenticated
//! identities; roles are recorded per company for a transport layer to
//! enforce.

pub mod company;
pub mod error;
pub mod service;
pub mod types;
pub mod user;

pub use company::Company;
pub use error::TenancyError;
pub use service::{CompanyService, UserService};
pub use types::{
    CreateCompanyInput, CreateUserInput, NewCompany, NewCompanyAccess, NewUser,
    UpdateCompanyInput, UpdateUserInput,
};
pub use user::{CompanyAccess, User, UserRole};
