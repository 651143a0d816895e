//! Password hashing and verification.

#[cfg(test)]
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::errors::Error;

/// Argon2id cost settings.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Params {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Argon2Params {
    /// Argon2 rejects some combinations (e.g. memory below `8 * parallelism` KiB).
    pub fn check(self) -> Result<Params, argon2::Error> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
    }

    fn to_argon2(self) -> Result<Argon2<'static>, Error> {
        let params = self.check().map_err(|e| {
            tracing::error!("Invalid argon2 parameters {self:?}: {e}");
            hashing_failed()
        })?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2Params {
    /// OWASP baseline for Argon2id: 19 MiB, two passes, one lane
    fn default() -> Self {
        Self {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

fn hashing_failed() -> Error {
    Error::Internal {
        operation: "hash password".to_string(),
    }
}

/// Hash a password with Argon2id, returning a PHC string that embeds salt and parameters.
pub fn hash_password(password: &str, params: Argon2Params) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = params.to_argon2()?;

    let hash = argon2.hash_password(password.as_bytes(), &salt).map_err(|e| {
        tracing::error!("Argon2 hashing failed: {e}");
        hashing_failed()
    })?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash, using the cost recorded in the hash.
#[cfg(test)]
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        tracing::error!("Malformed password hash: {e}");
        Error::Internal {
            operation: "verify password".to_string(),
        }
    })?;

    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}
