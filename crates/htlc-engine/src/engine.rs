use htlc_crypto::SecretHasher;
use htlc_ledger::{InMemoryLedger, LedgerStore};
use htlc_types::{Secret, SecretHash, HASH_LEN};

use crate::error::EngineError;
use crate::outcome::ClaimOutcome;

// ---------------------------------------------------------------------------
// CommitmentEngine
// ---------------------------------------------------------------------------

/// Create/claim state machine over a single-slot ledger.
///
/// There is no per-envelope status: a second create overwrites the first
/// commitment's queryable hash, and a successful claim overwrites the slot
/// with the hash recomputed from the revealed secret.
pub struct CommitmentEngine<S = InMemoryLedger> {
    store: S,
}

impl CommitmentEngine<InMemoryLedger> {
    /// Engine over a fresh in-memory ledger.
    pub fn in_memory() -> Self {
        Self::new(InMemoryLedger::new())
    }
}

impl<S: LedgerStore> CommitmentEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store `secret_hash` as the outstanding commitment.
    pub fn create(&self, secret_hash: SecretHash) {
        self.store.set(secret_hash);
        tracing::info!(hash = %secret_hash.preview(), "envelope created");
    }

    /// Byte-slice form of [`Self::create`]; rejects anything but 32 bytes.
    pub fn create_envelope(&self, secret_hash: &[u8]) -> Result<(), EngineError> {
        let hash = SecretHash::from_bytes(fixed("secretHash", secret_hash)?);
        self.create(hash);
        Ok(())
    }

    /// Hash the revealed `secret` and compare it with `expected`.
    ///
    /// On a match the recomputed hash is written to the ledger. On a mismatch
    /// nothing is written. Either way the call succeeds.
    pub fn claim(&self, secret: &Secret, expected: &SecretHash) -> ClaimOutcome {
        let (actual, matches) = SecretHasher::verify(secret, expected);
        if matches {
            self.store.set(actual);
            tracing::info!(hash = %actual.preview(), "envelope claimed");
            ClaimOutcome::Claimed(actual)
        } else {
            tracing::warn!(expected = %expected.preview(), "claim rejected: hash mismatch");
            ClaimOutcome::Mismatch
        }
    }

    /// Byte-slice form of [`Self::claim`]; both inputs must be 32 bytes.
    pub fn claim_envelope(
        &self,
        secret: &[u8],
        expected_hash: &[u8],
    ) -> Result<ClaimOutcome, EngineError> {
        let secret = Secret::from_bytes(fixed("secret", secret)?);
        let expected = SecretHash::from_bytes(fixed("expectedHash", expected_hash)?);
        Ok(self.claim(&secret, &expected))
    }

    /// Read-only view of the last stored hash. All zero before any create.
    pub fn last_secret_hash(&self) -> SecretHash {
        self.store.get()
    }
}

fn fixed(field: &'static str, bytes: &[u8]) -> Result<[u8; HASH_LEN], EngineError> {
    bytes
        .try_into()
        .map_err(|_| EngineError::InvalidInputLength {
            field,
            expected: HASH_LEN,
            actual: bytes.len(),
        })
}
