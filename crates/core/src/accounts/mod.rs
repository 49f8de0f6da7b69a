//! Account-type registry and canonical ordering.
//!
//! Every ledger line is tagged with an account type. A fixed set of base
//! types ships with the system; companies can add their own custom types.
//! This module owns the canonical display order and the rules for creating
//! custom types.

pub mod error;
pub mod order;
pub mod registry;

pub use error::AccountTypeError;
pub use order::{BASE_ACCOUNT_ORDER, canonical_position, compare_account_names};
pub use registry::{AccountType, AccountTypeRegistry};
