use chrono::{DateTime, Utc};
use htlc_types::{preview_str, Secret, SecretHash, TransactionId, TransactionKind};
use serde::{Deserialize, Deserializer, Serialize};

/// The payload of a transaction before the log assigns it an id and a time.
#[derive(Clone, Debug)]
pub enum TransactionEntry {
    Create {
        secret_hash: SecretHash,
    },
    Claim {
        secret_preview: String,
        expected_hash: SecretHash,
        success: bool,
    },
}

impl TransactionEntry {
    pub fn create(secret_hash: SecretHash) -> Self {
        Self::Create { secret_hash }
    }

    /// Only a truncated preview of `secret` is kept.
    pub fn claim(secret: &Secret, expected_hash: SecretHash, success: bool) -> Self {
        Self::Claim {
            secret_preview: secret.preview(),
            expected_hash,
            success,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Create { .. } => TransactionKind::Create,
            Self::Claim { .. } => TransactionKind::Claim,
        }
    }
}

/// One accepted request, as stored in the log and in backups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub tx_id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_hash: Option<SecretHash>,
    /// Truncated preview, never the full secret.
    #[serde(
        default,
        deserialize_with = "deserialize_preview",
        skip_serializing_if = "Option::is_none"
    )]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_hash: Option<SecretHash>,
    pub success: bool,
}

impl TransactionRecord {
    pub fn new(tx_id: TransactionId, timestamp: DateTime<Utc>, entry: TransactionEntry) -> Self {
        let kind = entry.kind();
        match entry {
            TransactionEntry::Create { secret_hash } => Self {
                tx_id,
                kind,
                timestamp,
                secret_hash: Some(secret_hash),
                secret: None,
                expected_hash: None,
                success: true,
            },
            TransactionEntry::Claim {
                secret_preview,
                expected_hash,
                success,
            } => Self {
                tx_id,
                kind,
                timestamp,
                secret_hash: None,
                secret: Some(secret_preview),
                expected_hash: Some(expected_hash),
                success,
            },
        }
    }

    /// Cut `secret` down to preview form if it holds more than that.
    pub fn redact_secret(&mut self) {
        if let Some(secret) = self.secret.as_mut() {
            *secret = preview_str(secret);
        }
    }
}

fn deserialize_preview<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| preview_str(&s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(0, 0).unwrap()
    }

    #[test]
    fn create_record_shape() {
        let record = TransactionRecord::new(
            TransactionId::new(0, 1),
            at_epoch(),
            TransactionEntry::create(SecretHash::from_bytes([0xaa; 32])),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["txId"], "local-tx-0-1");
        assert_eq!(json["type"], "createEnvelope");
        assert_eq!(json["secretHash"], "aa".repeat(32));
        assert_eq!(json["success"], true);
        assert!(json.get("secret").is_none());
        assert!(json.get("expectedHash").is_none());
    }

    #[test]
    fn claim_record_keeps_only_preview() {
        let secret = Secret::from_bytes([0x5e; 32]);
        let record = TransactionRecord::new(
            TransactionId::new(0, 2),
            at_epoch(),
            TransactionEntry::claim(&secret, SecretHash::from_bytes([1; 32]), false),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains(&secret.to_hex()));
        assert!(json.contains("5e5e5e5e5e5e5e5e..."));
        assert!(json.contains("\"type\":\"claimEnvelope\""));
        assert!(json.contains("\"success\":false"));
    }

    #[test]
    fn record_parses_back() {
        let record = TransactionRecord::new(
            TransactionId::new(10, 3),
            at_epoch(),
            TransactionEntry::create(SecretHash::from_bytes([2; 32])),
        );
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn full_secret_is_cut_to_preview_on_parse() {
        let full = "ab".repeat(32);
        let json = format!(
            r#"{{"txId":"local-tx-1-1","type":"claimEnvelope","timestamp":"2024-01-01T00:00:00Z","secret":"{full}","expectedHash":"{}","success":true}}"#,
            "cd".repeat(32)
        );
        let parsed: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.secret.as_deref(), Some("abababababababab..."));
    }

    #[test]
    fn redact_secret_keeps_existing_preview() {
        let secret = Secret::from_bytes([0x11; 32]);
        let mut record = TransactionRecord::new(
            TransactionId::new(0, 4),
            at_epoch(),
            TransactionEntry::claim(&secret, SecretHash::from_bytes([1; 32]), true),
        );
        record.redact_secret();
        assert_eq!(record.secret, Some(secret.preview()));

        record.secret = Some(secret.to_hex());
        record.redact_secret();
        assert_eq!(record.secret, Some(secret.preview()));
    }
}
