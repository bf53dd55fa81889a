use htlc_types::{Secret, SecretHash, HASH_LEN};
use serde::{Deserialize, Serialize};

use crate::error::{Operation, ProtocolError, ProtocolResult};

/// Body of `POST /createEnvelope`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvelopeRequest {
    #[serde(default)]
    pub secret_hash: Option<String>,
}

impl CreateEnvelopeRequest {
    pub fn new(secret_hash: impl Into<String>) -> Self {
        Self {
            secret_hash: Some(secret_hash.into()),
        }
    }

    /// Check presence, then hex, then length.
    pub fn validate(&self) -> ProtocolResult<SecretHash> {
        let op = Operation::Create;
        let raw = present(&self.secret_hash).ok_or(ProtocolError::MissingField { op })?;
        let bytes = decode(op, "secretHash", raw)?;
        Ok(SecretHash::from_bytes(fixed(op, "secretHash", &bytes)?))
    }
}

/// Body of `POST /claimEnvelope`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEnvelopeRequest {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub expected_hash: Option<String>,
}

impl ClaimEnvelopeRequest {
    pub fn new(secret: impl Into<String>, expected_hash: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            expected_hash: Some(expected_hash.into()),
        }
    }

    /// Both fields must be present before either is decoded, and both must
    /// decode as hex before either length is checked.
    pub fn validate(&self) -> ProtocolResult<(Secret, SecretHash)> {
        let op = Operation::Claim;
        let (Some(secret), Some(expected)) = (present(&self.secret), present(&self.expected_hash))
        else {
            return Err(ProtocolError::MissingField { op });
        };

        let secret = decode(op, "secret", secret)?;
        let expected = decode(op, "expectedHash", expected)?;

        let secret = Secret::from_bytes(fixed(op, "secret", &secret)?);
        let expected = SecretHash::from_bytes(fixed(op, "expectedHash", &expected)?);
        Ok((secret, expected))
    }
}

/// Absent and empty fields are both treated as missing.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn decode(op: Operation, field: &'static str, raw: &str) -> ProtocolResult<Vec<u8>> {
    hex::decode(raw).map_err(|_| ProtocolError::MalformedHex { op, field })
}

fn fixed(op: Operation, field: &'static str, bytes: &[u8]) -> ProtocolResult<[u8; HASH_LEN]> {
    bytes
        .try_into()
        .map_err(|_| ProtocolError::InvalidInputLength {
            op,
            field,
            actual: bytes.len(),
        })
}
