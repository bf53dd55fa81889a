/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("transaction log lock poisoned")]
    LockPoisoned,

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("unsupported backup version: {0}")]
    UnsupportedBackupVersion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
