//! Company (tenant) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tallybook_shared::types::CompanyId;

/// A company: the unit of tenancy.
///
/// Every account and transaction belongs to exactly one company, and all
/// bookkeeping operations are scoped by the company id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Company name.
    pub name: String,
    /// Company code, unique across all tenants.
    pub code: String,
    /// First month of the fiscal year (1 = January).
    pub fiscal_year_start_month: u8,
    /// ISO 4217 currency code. Carried as data, never converted.
    pub currency: String,
    /// Whether the company is active.
    pub is_active: bool,
    /// When the company was created.
    pub created_at: DateTime<Utc>,
    /// When the company was last updated.
    pub updated_at: DateTime<Utc>,
}
