use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString},
};
use password_hash::rand_core::OsRng;

/// Hash-and-compare capability used by registration and login.
pub trait PasswordScheme: Send + Sync {
    fn hash(&self, password: &str) -> anyhow::Result<String>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
    fn verify(&self, password: &str, stored_hash: &str) -> anyhow::Result<bool>;
}

/// Argon2id with the crate's default parameters, stored as a PHC string.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Scheme;

impl PasswordScheme for Argon2Scheme {
    fn hash(&self, password: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    fn verify(&self, password: &str, stored_hash: &str) -> anyhow::Result<bool> {
        let parsed_hash =
            PasswordHash::new(stored_hash).map_err(|_| anyhow::anyhow!("Invalid password hash"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifies() {
        let scheme = Argon2Scheme;
        let first = scheme.hash("hunter2").unwrap();
        let second = scheme.hash("hunter2").unwrap();

        assert_ne!(first, "hunter2");
        assert_ne!(first, second);
        assert!(scheme.verify("hunter2", &first).unwrap());
        assert!(scheme.verify("hunter2", &second).unwrap());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let scheme = Argon2Scheme;
        let hash = scheme.hash("hunter2").unwrap();
        assert!(!scheme.verify("Hunter2", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(Argon2Scheme.verify("hunter2", "hunter2").is_err());
    }
}
