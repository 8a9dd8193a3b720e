//! Request extractors for the session account and path parameters.
//!
//! - [`auth::RequestContext`] -- The account behind the session cookie, if any.
//! - [`auth::AuthAccount`] -- Requires a logged-in account; redirects to the
//!   login page otherwise.
//! - [`path::IdPath`] -- An integer path id; anything else is a 404.

pub mod auth;
pub mod path;
