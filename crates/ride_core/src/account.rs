//! Accounts and credential hashing.

use std::fmt;

use constant_time_eq::constant_time_eq;
use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Which namespace an account lives in. Drivers and riders never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Driver,
    Rider,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Rider => "rider",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salted SHA-256 digest of a password. The plaintext is never stored.
///
/// No `PartialEq`: compare through [`PasswordHash::verify`] only.
#[derive(Clone)]
pub struct PasswordHash {
    salt: Vec<u8>,
    digest: [u8; 32],
}

impl PasswordHash {
    /// Hash `password` with a fresh salt of `salt_len` bytes drawn from `rng`.
    pub fn generate<R: RngCore + ?Sized>(password: &str, salt_len: usize, rng: &mut R) -> Self {
        let mut salt = vec![0u8; salt_len];
        rng.fill_bytes(&mut salt);
        let digest = salted_digest(&salt, password);
        Self { salt, digest }
    }

    /// Constant-time comparison against a candidate password.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = salted_digest(&self.salt, password);
        constant_time_eq(&candidate, &self.digest)
    }

    /// Hex fingerprint of the digest, for diagnostics only.
    pub fn fingerprint(&self) -> String {
        self.digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}

// Never print password material, even hashed.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("salt_len", &self.salt.len())
            .finish_non_exhaustive()
    }
}

fn salted_digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// A registered driver or rider. Username is immutable once created.
#[derive(Debug, Clone)]
pub struct Account {
    pub role: Role,
    pub username: String,
    pub password: PasswordHash,
}

impl Account {
    pub fn new(role: Role, username: impl Into<String>, password: PasswordHash) -> Self {
        Self {
            role,
            username: username.into(),
            password,
        }
    }
}
