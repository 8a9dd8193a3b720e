//! Administrative commands for the tailor shop: database backup and restore,
//! and the catalog maintenance that has no web page.

pub mod cli;
pub mod commands;
