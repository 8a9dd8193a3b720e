//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing, verification, and the
//!   registration password policy.
//! - [`session`] -- Session tokens and the `sessionid` cookie.

pub mod password;
pub mod session;
