use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bytes::{decode_hex32, preview_hex, HASH_LEN};
use crate::error::TypeError;

/// SHA-256 commitment to a [`Secret`](crate::Secret).
///
/// Published by the committing party when an envelope is created. The value
/// is opaque to this crate: producing it from a secret is the job of
/// `htlc-crypto`. On the wire it is always 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretHash([u8; HASH_LEN]);

impl SecretHash {
    /// Wrap a pre-computed digest.
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// The all-zero hash. Held by a ledger before any envelope is created.
    pub const fn zero() -> Self {
        Self([0u8; HASH_LEN])
    }

    /// Returns `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Lowercase hex encoding (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Truncated form for logs.
    pub fn preview(&self) -> String {
        preview_hex(&self.0)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        decode_hex32(s).map(Self)
    }
}

impl Default for SecretHash {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for SecretHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretHash({})", self.preview())
    }
}

impl fmt::Display for SecretHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; HASH_LEN]> for SecretHash {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<SecretHash> for [u8; HASH_LEN] {
    fn from(hash: SecretHash) -> Self {
        hash.0
    }
}

impl From<SecretHash> for String {
    fn from(hash: SecretHash) -> Self {
        hash.to_hex()
    }
}

impl TryFrom<String> for SecretHash {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}
