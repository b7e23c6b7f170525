use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check `password` against a stored PHC string. A malformed hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| hash_password("no-such-account").ok())
        .as_deref()
}

/// Run one full verification against a throwaway hash and report no match.
///
/// Used for unknown logins so they take as long as a wrong password.
pub fn verify_without_account(password: &str) -> bool {
    if let Some(hash) = dummy_hash() {
        let _ = verify_password(password, hash);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_with_the_same_password() {
        let hash = hash_password("correct horse").expect("hashing failed");
        assert!(verify_password("correct horse", &hash));
    }

    #[test]
    fn hash_rejects_a_different_password() {
        let hash = hash_password("correct horse").expect("hashing failed");
        assert!(!verify_password("battery staple", &hash));
    }

    #[test]
    fn hash_is_salted() {
        let a = hash_password("same").expect("hashing failed");
        let b = hash_password("same").expect("hashing failed");
        assert_ne!(a, b);
        assert!(!a.contains("same"));
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!verify_password("secret", "not-a-phc-string"));
        assert!(!verify_password("secret", "secret"));
    }

    #[test]
    fn verification_without_account_hashes_but_never_matches() {
        assert!(!verify_without_account("no-such-account"));
        assert!(!verify_without_account("anything"));

        let hash = dummy_hash().expect("dummy hash missing");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("no-such-account", hash));
    }
}
