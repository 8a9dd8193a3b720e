pub mod auth;
pub mod catalog;
pub mod health;
pub mod measurement;
pub mod tailor;
