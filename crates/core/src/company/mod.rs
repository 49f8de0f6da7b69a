//! Company registration rules.

pub mod error;
pub mod service;
pub mod types;

pub use error::CompanyError;
pub use service::CompanyService;
pub use types::{Company, NewCompany};
