use htlc_types::SecretHash;

/// Storage boundary for the single last accepted secret hash.
///
/// No validation happens here. Callers hand in values that are already
/// 32 bytes by construction. `set` must be atomic with respect to concurrent
/// `get` and `set` calls; the last writer wins.
pub trait LedgerStore: Send + Sync {
    fn get(&self) -> SecretHash;

    fn set(&self, hash: SecretHash);
}
