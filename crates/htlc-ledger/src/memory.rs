use std::sync::{PoisonError, RwLock};

use htlc_types::SecretHash;

use crate::traits::LedgerStore;

/// In-memory ledger for the local runtime, tests, and embedding.
///
/// State lives for as long as the value does; there is no persistence.
pub struct InMemoryLedger {
    inner: RwLock<SecretHash>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SecretHash::zero()),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

// The guarded value is a plain `Copy` array that is replaced in a single
// assignment, so a poisoned lock still holds a whole hash.
impl LedgerStore for InMemoryLedger {
    fn get(&self) -> SecretHash {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, hash: SecretHash) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = hash;
        tracing::debug!(hash = %hash.preview(), "ledger hash updated");
    }
}
