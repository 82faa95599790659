//! Argon2 password hashing shared by the API and the user factory.

use std::str::FromStr;

use argon2::{
    Algorithm, Argon2, Params, PasswordHasher as _, Version,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;

/// Work factor for new hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashCost {
    /// Argon2 recommended parameters.
    #[default]
    Default,
    /// Minimum parameters. Only meant for tests and throwaway seeds.
    Low,
}

impl FromStr for HashCost {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(HashCost::Default),
            "low" => Ok(HashCost::Low),
            other => Err(anyhow::anyhow!(
                "unknown PASSWORD_HASH_COST {other:?}, expected \"default\" or \"low\""
            )),
        }
    }
}

#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new(cost: HashCost) -> Self {
        let argon2 = match cost {
            HashCost::Default => Argon2::default(),
            HashCost::Low => {
                let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, 1, None)
                    .unwrap_or_default();
                Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            }
        };
        Self { argon2 }
    }

    pub fn hash(&self, plain: &str) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self.argon2.hash_password(plain.as_bytes(), &salt)?.to_string())
    }

    pub fn verify(&self, plain: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                self.argon2
                    .verify_password(plain.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(HashCost::Default)
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_equals_plaintext_and_verifies() {
        let hasher = PasswordHasher::new(HashCost::Low);
        let hash = hasher.hash("foo").expect("hash");
        assert_ne!(hash, "foo");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("foo", &hash));
        assert!(!hasher.verify("bar", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new(HashCost::Low);
        let first = hasher.hash("admin").expect("hash");
        let second = hasher.hash("admin").expect("hash");
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_hash_does_not_verify() {
        let hasher = PasswordHasher::new(HashCost::Low);
        assert!(!hasher.verify("foo", "not-a-phc-string"));
    }

    #[test]
    fn cost_parses_from_env_spelling() {
        assert_eq!("LOW".parse::<HashCost>().unwrap(), HashCost::Low);
        assert_eq!("default".parse::<HashCost>().unwrap(), HashCost::Default);
        assert!("extreme".parse::<HashCost>().is_err());
    }
}
