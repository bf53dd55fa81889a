use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use htlc_types::TransactionId;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::records::TransactionRecord;

/// Version tag written into every exported backup.
pub const BACKUP_VERSION: &str = "1.0";

/// Portable JSON export of a transaction history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBackup {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub transactions: Vec<TransactionRecord>,
}

impl TransactionBackup {
    /// Wrap `transactions` in a backup stamped with the current time.
    pub fn new(transactions: Vec<TransactionRecord>) -> Self {
        Self {
            version: BACKUP_VERSION.into(),
            export_date: Utc::now(),
            transactions,
        }
    }

    /// Merge two record lists, deduplicating by transaction id.
    ///
    /// A record in `imported` replaces an `existing` record with the same id
    /// (last write wins). The position of each id is where it first appeared
    /// in `existing` followed by `imported`. Secrets in the result are cut to
    /// preview form.
    pub fn merge(
        existing: Vec<TransactionRecord>,
        imported: Vec<TransactionRecord>,
    ) -> Vec<TransactionRecord> {
        let mut positions: HashMap<TransactionId, usize> = HashMap::new();
        let mut merged: Vec<TransactionRecord> = Vec::new();

        for mut record in existing.into_iter().chain(imported) {
            record.redact_secret();
            match positions.get(&record.tx_id).copied() {
                Some(index) => merged[index] = record,
                None => {
                    positions.insert(record.tx_id.clone(), merged.len());
                    merged.push(record);
                }
            }
        }

        merged
    }

    /// Merge another backup's transactions into this one.
    pub fn import(&mut self, other: TransactionBackup) {
        let existing = std::mem::take(&mut self.transactions);
        self.transactions = Self::merge(existing, other.transactions);
    }

    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        let backup: Self =
            serde_json::from_str(json).map_err(|e| LedgerError::Serialization(e.to_string()))?;
        if backup.version != BACKUP_VERSION {
            return Err(LedgerError::UnsupportedBackupVersion(backup.version));
        }
        Ok(backup)
    }

    pub fn to_json_pretty(&self) -> Result<String, LedgerError> {
        serde_json::to_string_pretty(self).map_err(|e| LedgerError::Serialization(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LedgerError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TransactionEntry;
    use htlc_types::SecretHash;

    fn record(id: u64, fill: u8) -> TransactionRecord {
        TransactionRecord::new(
            TransactionId::new(1_000, id),
            DateTime::from_timestamp(1, 0).unwrap(),
            TransactionEntry::create(SecretHash::from_bytes([fill; 32])),
        )
    }

    #[test]
    fn merge_deduplicates_last_write_wins() {
        let existing = vec![record(1, 1), record(2, 2)];
        let imported = vec![record(2, 9), record(3, 3)];

        let merged = TransactionBackup::merge(existing, imported);

        assert_eq!(merged.len(), 3);
        let ids: Vec<_> = merged.iter().map(|r| r.tx_id.to_string()).collect();
        assert_eq!(ids, vec!["local-tx-1000-1", "local-tx-1000-2", "local-tx-1000-3"]);
        assert_eq!(merged[1].secret_hash, Some(SecretHash::from_bytes([9; 32])));
    }

    #[test]
    fn merge_collapses_duplicates_within_one_side() {
        let merged = TransactionBackup::merge(vec![], vec![record(5, 1), record(5, 2)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].secret_hash, Some(SecretHash::from_bytes([2; 32])));
    }

    #[test]
    fn import_merges_into_backup() {
        let mut backup = TransactionBackup::new(vec![record(1, 1)]);
        backup.import(TransactionBackup::new(vec![record(1, 4), record(2, 2)]));
        assert_eq!(backup.transactions.len(), 2);
        assert_eq!(
            backup.transactions[0].secret_hash,
            Some(SecretHash::from_bytes([4; 32]))
        );
    }

    #[test]
    fn document_shape() {
        let backup = TransactionBackup::new(vec![record(1, 1)]);
        let json: serde_json::Value =
            serde_json::from_str(&backup.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["version"], "1.0");
        assert!(json["exportDate"].is_string());
        assert_eq!(json["transactions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn rejects_unknown_version() {
        let json = r#"{"version":"2.0","exportDate":"2024-01-01T00:00:00Z","transactions":[]}"#;
        assert!(matches!(
            TransactionBackup::from_json(json),
            Err(LedgerError::UnsupportedBackupVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            TransactionBackup::from_json("{not json"),
            Err(LedgerError::Serialization(_))
        ));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");
        let backup = TransactionBackup::new(vec![record(1, 1), record(2, 2)]);

        backup.save(&path).unwrap();
        let loaded = TransactionBackup::load(&path).unwrap();

        assert_eq!(loaded, backup);
    }

    #[test]
    fn imported_full_secret_is_reduced_to_preview() {
        let full = "ab".repeat(32);
        let json = format!(
            r#"{{"version":"1.0","exportDate":"2024-01-01T00:00:00Z","transactions":[{{"txId":"local-tx-1-7","type":"claimEnvelope","timestamp":"2024-01-01T00:00:00Z","secret":"{full}","expectedHash":"{}","success":true}}]}}"#,
            "cd".repeat(32)
        );

        let mut backup = TransactionBackup::new(vec![record(1, 1)]);
        backup.import(TransactionBackup::from_json(&json).unwrap());
        let out = backup.to_json_pretty().unwrap();

        assert!(!out.contains(&full));
        assert!(out.contains("abababababababab..."));
    }

    #[test]
    fn merge_redacts_records_built_in_memory() {
        let mut leaked = record(2, 2);
        leaked.secret = Some("ef".repeat(32));

        let merged = TransactionBackup::merge(vec![], vec![leaked]);

        assert_eq!(merged[0].secret.as_deref(), Some("efefefefefefefef..."));
    }
}
