//! Company registration validation.

use cuadra_shared::types::{CompanyId, UserId};

use super::error::CompanyError;
use super::types::{Company, NewCompany};

/// Company service for registration rules.
pub struct CompanyService;

impl CompanyService {
    /// Validates a new company and builds the entity to persist.
    ///
    /// Name and RUT are mandatory; the remaining fields are optional and
    /// only decorate the exported balance header.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::MissingField` when name or RUT is blank.
    pub fn validate_new(input: NewCompany, user_id: UserId) -> Result<Company, CompanyError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CompanyError::MissingField("name"));
        }

        let rut = input.rut.trim();
        if rut.is_empty() {
            return Err(CompanyError::MissingField("rut"));
        }

        Ok(Company {
            id: CompanyId::new(),
            user_id,
            name: name.to_string(),
            rut: rut.to_string(),
            address: normalize_optional(input.address),
            commune: normalize_optional(input.commune),
            business_line: normalize_optional(input.business_line),
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
