use htlc_types::{Secret, SecretHash};
use sha2::{Digest, Sha256};

use crate::compare::digests_match;

/// SHA-256 commitment hasher.
///
/// No domain tag is mixed in: a commitment is the plain `SHA256(secret)` so
/// that hashes produced by other tools (`sha256sum`, browser crypto) line up.
pub struct SecretHasher;

impl SecretHasher {
    /// Hash raw bytes.
    pub fn hash(data: &[u8]) -> SecretHash {
        let digest: [u8; 32] = Sha256::digest(data).into();
        SecretHash::from_bytes(digest)
    }

    /// Commitment for a secret.
    pub fn commit(secret: &Secret) -> SecretHash {
        Self::hash(secret.as_bytes())
    }

    /// Recompute the commitment of `secret` and compare it with `expected`.
    ///
    /// Returns the recomputed hash alongside the verdict. The comparison runs
    /// over all 32 bytes regardless of where the first difference is.
    pub fn verify(secret: &Secret, expected: &SecretHash) -> (SecretHash, bool) {
        let actual = Self::commit(secret);
        let matches = digests_match(&actual, expected);
        (actual, matches)
    }
}
