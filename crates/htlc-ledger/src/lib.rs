//! Ledger state for the HTLC envelope service.
//!
//! This crate provides:
//! - the `LedgerStore` boundary holding the single last accepted secret hash
//! - `InMemoryLedger`, the process-lifetime implementation of that boundary
//! - an append-only `TransactionLog` that assigns transaction identifiers
//! - `TransactionBackup`, the JSON export document and its merge rules

pub mod backup;
pub mod error;
pub mod log;
pub mod memory;
pub mod records;
pub mod traits;

pub use backup::{TransactionBackup, BACKUP_VERSION};
pub use error::LedgerError;
pub use log::TransactionLog;
pub use memory::InMemoryLedger;
pub use records::{TransactionEntry, TransactionRecord};
pub use traits::LedgerStore;
