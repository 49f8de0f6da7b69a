//! Company domain types.

use serde::{Deserialize, Serialize};
use cuadra_shared::types::{CompanyId, UserId};

/// A registered company.
///
/// The optional fields feed the exported balance header (address, commune,
/// business line) and may be filled in later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Owning user.
    pub user_id: UserId,
    /// Legal or trade name.
    pub name: String,
    /// Chilean tax identifier (RUT).
    pub rut: String,
    /// Street address.
    pub address: Option<String>,
    /// Commune.
    pub commune: Option<String>,
    /// Business line ("giro").
    pub business_line: Option<String>,
}

/// Input for registering a new company.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCompany {
    /// Legal or trade name.
    pub name: String,
    /// Chilean tax identifier (RUT).
    pub rut: String,
    /// Street address.
    pub address: Option<String>,
    /// Commune.
    pub commune: Option<String>,
    /// Business line ("giro").
    pub business_line: Option<String>,
}
