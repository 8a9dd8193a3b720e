//! Domain types shared by the tailor shop crates.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these definitions.

pub mod error;
pub mod price;
pub mod types;
pub mod validation;
