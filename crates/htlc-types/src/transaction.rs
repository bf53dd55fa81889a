use std::fmt;

use serde::{Deserialize, Serialize};

/// Process-unique identifier of an accepted request.
///
/// Formatted as `local-tx-<unix-millis>-<counter>`. The counter alone is
/// unique within one process; the timestamp keeps ids from different runs
/// apart when backups are merged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub const PREFIX: &'static str = "local-tx";

    pub fn new(physical_ms: i64, counter: u64) -> Self {
        Self(format!("{}-{physical_ms}-{counter}", Self::PREFIX))
    }

    /// Wrap an identifier read back from a backup.
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of transaction recorded in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "createEnvelope")]
    Create,
    #[serde(rename = "claimEnvelope")]
    Claim,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "createEnvelope"),
            Self::Claim => write!(f, "claimEnvelope"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_format() {
        let id = TransactionId::new(1_700_000_000_000, 7);
        assert_eq!(id.as_str(), "local-tx-1700000000000-7");
        assert_eq!(format!("{id}"), "local-tx-1700000000000-7");
    }

    #[test]
    fn id_serializes_transparently() {
        let id = TransactionId::new(5, 1);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"local-tx-5-1\"");
    }

    #[test]
    fn kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Create).unwrap(),
            "\"createEnvelope\""
        );
        let parsed: TransactionKind = serde_json::from_str("\"claimEnvelope\"").unwrap();
        assert_eq!(parsed, TransactionKind::Claim);
        assert_eq!(format!("{}", TransactionKind::Claim), "claimEnvelope");
    }
}
