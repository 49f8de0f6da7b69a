//! Account-type registry rules.
//!
//! The registry itself is persisted externally; this module holds the pure
//! rules: listing order and validation of user-created custom types.

use serde::{Deserialize, Serialize};
use cuadra_shared::types::AccountTypeId;

use super::error::AccountTypeError;

/// An account type available to a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountType {
    /// Unique identifier.
    pub id: AccountTypeId,
    /// Display name (e.g., "Caja").
    pub name: String,
    /// Whether this is one of the fixed base types.
    pub is_base: bool,
    /// Whether the type is shared across companies rather than
    /// company-scoped.
    pub is_global: bool,
}

/// Pure registry rules for account types.
///
/// The caller supplies the persisted set (global plus company-scoped types)
/// and persists the results.
pub struct AccountTypeRegistry;

impl AccountTypeRegistry {
    /// Orders account types for listings: base types first, then by name.
    pub fn sort_for_listing(types: &mut [AccountType]) {
        types.sort_by(|a, b| b.is_base.cmp(&a.is_base).then_with(|| a.name.cmp(&b.name)));
    }

    /// Validates the name of a new custom account type against the
    /// existing set and returns the normalized (trimmed) name.
    ///
    /// New types are always custom: company-scoped, `is_base = false`.
    ///
    /// # Errors
    ///
    /// Returns `AccountTypeError::EmptyName` if the trimmed name is empty,
    /// or `AccountTypeError::Duplicate` if a global or company-scoped type
    /// with the same name already exists.
    pub fn validate_new(
        name: &str,
        existing: &[AccountType],
    ) -> Result<String, AccountTypeError> {
        let normalized = name.trim();
        if normalized.is_empty() {
            return Err(AccountTypeError::EmptyName);
        }

        if existing.iter().any(|t| t.name == normalized) {
            return Err(AccountTypeError::Duplicate(normalized.to_string()));
        }

        tracing::debug!(name = normalized, "validated new custom account type");
        Ok(normalized.to_string())
    }

    /// Resolves an account-type name against the existing set.
    ///
    /// # Errors
    ///
    /// Returns `AccountTypeError::Unknown` if no type with this name exists.
    pub fn resolve<'a>(
        name: &str,
        existing: &'a [AccountType],
    ) -> Result<&'a AccountType, AccountTypeError> {
        existing
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| AccountTypeError::Unknown(name.to_string()))
    }
}
