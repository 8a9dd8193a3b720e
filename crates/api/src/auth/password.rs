//! Argon2id password hashing, verification, and strength validation.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Passwords rejected regardless of length. Compared case-insensitively.
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "password123",
    "12345678",
    "123456789",
    "1234567890",
    "qwerty123",
    "qwertyuiop",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "welcome1",
    "letmein1",
    "trustno1",
    "superman",
    "starwars",
    "whatever",
    "passw0rd",
    "abc12345",
    "11111111",
    "00000000",
    "asdfghjkl",
    "zaq12wsx",
];

/// Usernames shorter than this are not checked for similarity.
const MIN_SIMILARITY_LENGTH: usize = 3;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Validate a new password against the registration policy.
///
/// Checks, in order: minimum length, similarity to the username, the common
/// password list, and all-digit passwords. Every failing check contributes
/// one message.
pub fn validate_password_strength(
    password: &str,
    username: &str,
    min_length: usize,
) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if password.chars().count() < min_length {
        problems.push(format!(
            "This password is too short. It must contain at least {min_length} characters."
        ));
    }

    if is_similar_to_username(password, username) {
        problems.push("The password is too similar to the username.".to_string());
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        problems.push("This password is too common.".to_string());
    }

    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

fn is_similar_to_username(password: &str, username: &str) -> bool {
    let username = username.trim().to_lowercase();
    if username.chars().count() < MIN_SIMILARITY_LENGTH {
        return false;
    }
    let password = password.to_lowercase();
    password.contains(&username) || (!password.is_empty() && username.contains(&password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");

        // The hash must be a valid PHC string starting with the argon2id identifier.
        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );

        let verified = verify_password(password, &hash).expect("verify should succeed");
        assert!(verified, "correct password should verify as true");
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified, "wrong password should verify as false");
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_password_too_short() {
        let problems = validate_password_strength("test123", "newuser", 8).unwrap_err();
        assert_eq!(problems.len(), 1);
        assert!(
            problems[0].contains("at least 8 characters"),
            "error message should state the minimum length"
        );
    }

    #[test]
    fn test_password_meets_policy() {
        assert!(validate_password_strength("test123test123", "newuser", 8).is_ok());
        // Exactly at the minimum boundary.
        assert!(validate_password_strength("kq7!vbzm", "newuser", 8).is_ok());
    }

    #[test]
    fn test_common_and_numeric_passwords_rejected() {
        let problems = validate_password_strength("Password123", "newuser", 8).unwrap_err();
        assert_eq!(problems, vec!["This password is too common.".to_string()]);

        let problems = validate_password_strength("83920571", "newuser", 8).unwrap_err();
        assert_eq!(problems, vec!["This password is entirely numeric.".to_string()]);
    }

    #[test]
    fn test_password_similar_to_username() {
        let problems = validate_password_strength("MargaretTailor", "margaret", 8).unwrap_err();
        assert_eq!(
            problems,
            vec!["The password is too similar to the username.".to_string()]
        );

        // Very short usernames are not compared.
        assert!(validate_password_strength("al-is-tailoring", "al", 8).is_ok());
    }

    #[test]
    fn test_every_failure_is_reported() {
        let problems = validate_password_strength("1234", "newuser", 8).unwrap_err();
        assert_eq!(problems.len(), 2, "too short and entirely numeric: {problems:?}");
    }
}
