use std::fmt;

use thiserror::Error;

/// The operation a rejected request was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Claim,
}

impl Operation {
    fn missing_message(&self) -> &'static str {
        match self {
            Self::Create => "secretHash required",
            Self::Claim => "secret and expectedHash required",
        }
    }

    fn length_message(&self) -> &'static str {
        match self {
            Self::Create => "secretHash must be 32 bytes (64 hex chars)",
            Self::Claim => "secret and expectedHash must be 32 bytes each",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "createEnvelope"),
            Self::Claim => write!(f, "claimEnvelope"),
        }
    }
}

/// Client input rejected at the boundary. Nothing has touched the ledger or
/// the transaction log when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("{}", .op.missing_message())]
    MissingField { op: Operation },

    #[error("{field} must be valid hex")]
    MalformedHex { op: Operation, field: &'static str },

    #[error("{}", .op.length_message())]
    InvalidInputLength {
        op: Operation,
        field: &'static str,
        actual: usize,
    },

    #[error("invalid JSON body: {0}")]
    InvalidBody(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages() {
        assert_eq!(
            ProtocolError::MissingField { op: Operation::Create }.to_string(),
            "secretHash required"
        );
        assert_eq!(
            ProtocolError::MissingField { op: Operation::Claim }.to_string(),
            "secret and expectedHash required"
        );
        assert_eq!(
            ProtocolError::InvalidInputLength {
                op: Operation::Create,
                field: "secretHash",
                actual: 3
            }
            .to_string(),
            "secretHash must be 32 bytes (64 hex chars)"
        );
        assert_eq!(
            ProtocolError::MalformedHex {
                op: Operation::Claim,
                field: "secret"
            }
            .to_string(),
            "secret must be valid hex"
        );
    }
}
