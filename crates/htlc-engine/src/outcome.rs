use htlc_types::SecretHash;

/// Result of a claim attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The revealed secret hashed to the expected value. Carries that hash,
    /// which is now the ledger's last secret hash.
    Claimed(SecretHash),
    /// The revealed secret did not match. The ledger was left untouched.
    Mismatch,
}

impl ClaimOutcome {
    pub const SUCCESS_BYTE: u8 = 0x01;
    pub const FAILURE_BYTE: u8 = 0x00;

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Claimed(_))
    }

    /// Single-byte encoding: `0x01` on success, `0x00` on mismatch.
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Claimed(_) => Self::SUCCESS_BYTE,
            Self::Mismatch => Self::FAILURE_BYTE,
        }
    }
}
