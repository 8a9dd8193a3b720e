//! Row models and insert DTOs, one module per table.

pub mod account;
pub mod dress;
pub mod measurement;
pub mod session;
pub mod tailor;
