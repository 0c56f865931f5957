//! Administrator password hashing.
//!
//! Passwords are stored as Argon2 PHC strings and never in clear text.
//! Request handlers go through [`hash_in_background`] and
//! [`find_match_in_background`], which run Argon2 on tokio's blocking pool.

use std::sync::LazyLock;

use anyhow::{anyhow, Context, Result};
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use rand::rngs::OsRng;

/// Checked when an email has no administrator, so that lookup costs the
/// same as a real mismatch.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("vendor-console-placeholder").ok());

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow!("failed to hash password: {e}"))
}

/// Check `password` against a stored hash.
///
/// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| anyhow!("stored password hash is malformed: {e}"))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow!("failed to verify password: {e}")),
    }
}

/// Index of the first stored hash that `password` verifies against.
///
/// An empty candidate list is still charged one verification against a
/// placeholder hash.
pub fn find_match(password: &str, stored_hashes: &[String]) -> Result<Option<usize>> {
    if stored_hashes.is_empty() {
        if let Some(dummy) = DUMMY_HASH.as_deref() {
            verify_password(password, dummy)?;
        }
        return Ok(None);
    }

    for (index, stored_hash) in stored_hashes.iter().enumerate() {
        if verify_password(password, stored_hash)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

pub async fn hash_in_background(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("password hashing task failed")?
}

pub async fn find_match_in_background(
    password: String,
    stored_hashes: Vec<String>,
) -> Result<Option<usize>> {
    tokio::task::spawn_blocking(move || find_match(&password, &stored_hashes))
        .await
        .context("password verification task failed")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips_and_rejects_wrong_password() {
        let hash = hash_password("s3cret").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("s3cret"));
        assert!(verify_password("s3cret", &hash).unwrap());
        assert!(!verify_password("S3cret", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(hash_password("pw").unwrap(), hash_password("pw").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("pw", "plaintext-pw").is_err());
    }

    #[test]
    fn find_match_picks_the_first_verifying_hash() {
        let hashes = vec![
            hash_password("other").unwrap(),
            hash_password("pw").unwrap(),
            hash_password("pw").unwrap(),
        ];

        assert_eq!(find_match("pw", &hashes).unwrap(), Some(1));
        assert_eq!(find_match("nope", &hashes).unwrap(), None);
    }

    #[test]
    fn find_match_without_candidates_still_verifies() {
        assert!(DUMMY_HASH.is_some());
        assert_eq!(find_match("pw", &[]).unwrap(), None);
    }

    #[tokio::test]
    async fn background_helpers_round_trip() {
        let hash = hash_in_background("s3cret".to_string()).await.unwrap();

        let found = find_match_in_background("s3cret".to_string(), vec![hash])
            .await
            .unwrap();
        assert_eq!(found, Some(0));
    }
}
