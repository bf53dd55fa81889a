use htlc_ledger::TransactionRecord;
use htlc_types::{SecretHash, TransactionId};
use serde::{Deserialize, Serialize};

/// Response to an accepted `createEnvelope`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvelopeResponse {
    pub success: bool,
    pub tx_id: TransactionId,
    pub secret_hash: SecretHash,
    pub message: String,
}

impl CreateEnvelopeResponse {
    pub fn created(tx_id: TransactionId, secret_hash: SecretHash) -> Self {
        Self {
            success: true,
            tx_id,
            secret_hash,
            message: "Envelope created successfully".into(),
        }
    }
}

/// Response to an accepted `claimEnvelope`, matching or not.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEnvelopeResponse {
    pub success: bool,
    pub tx_id: TransactionId,
    pub message: String,
    pub verified: bool,
}

impl ClaimEnvelopeResponse {
    pub fn new(tx_id: TransactionId, verified: bool) -> Self {
        let message = if verified {
            "Envelope claimed successfully"
        } else {
            "Invalid secret - hash mismatch"
        };
        Self {
            success: verified,
            tx_id,
            message: message.into(),
            verified,
        }
    }
}

/// Response to `getLastSecretHash`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSecretHashResponse {
    pub secret_hash: SecretHash,
    pub is_empty: bool,
}

impl From<SecretHash> for LastSecretHashResponse {
    fn from(secret_hash: SecretHash) -> Self {
        Self {
            secret_hash,
            is_empty: secret_hash.is_zero(),
        }
    }
}

/// Response to `state`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    pub last_secret_hash: SecretHash,
    pub total_transactions: u64,
}

/// Response to `transactions`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionRecord>,
    pub total: u64,
}

/// Response to `generateSecret`. The only place a full secret leaves the service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateSecretResponse {
    pub secret: String,
    pub hash: SecretHash,
    pub note: String,
}

impl GenerateSecretResponse {
    pub const NOTE: &'static str = "Store the secret securely! You need it to claim the envelope.";
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub contract: String,
    /// Seconds since the service started.
    pub uptime: f64,
    pub transactions: u64,
}

impl HealthResponse {
    pub fn healthy(uptime: f64, transactions: u64) -> Self {
        Self {
            status: "healthy".into(),
            contract: "HTLC".into(),
            uptime,
            transactions,
        }
    }
}

/// Body of every rejected request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a request to an unknown route.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub error: String,
    pub available_endpoints: Vec<String>,
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self {
            error: "Not found".into(),
            available_endpoints: crate::AVAILABLE_ENDPOINTS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}
