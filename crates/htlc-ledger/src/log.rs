use std::sync::Mutex;

use chrono::Utc;
use htlc_types::TransactionId;

use crate::error::LedgerError;
use crate::records::{TransactionEntry, TransactionRecord};

/// Append-only log of accepted transactions.
///
/// Identifiers are assigned under the same lock that performs the append, so
/// two concurrent appends can never share a counter value. Records are never
/// mutated or removed once appended. The log grows without bound.
pub struct TransactionLog {
    inner: Mutex<LogState>,
}

#[derive(Default)]
struct LogState {
    records: Vec<TransactionRecord>,
    counter: u64,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LogState::default()),
        }
    }

    /// Assign an id and timestamp to `entry` and append it.
    pub fn append(&self, entry: TransactionEntry) -> Result<TransactionRecord, LedgerError> {
        let mut state = self.inner.lock().map_err(|_| LedgerError::LockPoisoned)?;

        state.counter += 1;
        let now = Utc::now();
        let tx_id = TransactionId::new(now.timestamp_millis(), state.counter);
        let record = TransactionRecord::new(tx_id, now, entry);
        state.records.push(record.clone());

        tracing::info!(tx_id = %record.tx_id, kind = %record.kind, success = record.success, "transaction appended");
        Ok(record)
    }

    /// Snapshot of all records in arrival order.
    pub fn records(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
        let state = self.inner.lock().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.records.clone())
    }

    pub fn len(&self) -> Result<usize, LedgerError> {
        let state = self.inner.lock().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new()
    }
}
