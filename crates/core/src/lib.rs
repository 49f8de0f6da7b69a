//! Core business logic for Cuadra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `accounts` - Account-type registry and canonical ordering
//! - `ledger` - Monthly record validation and annual aggregation
//! - `company` - Company registration rules
//! - `balance` - Annual balance sheet engine

pub mod accounts;
pub mod balance;
pub mod company;
pub mod ledger;
