use std::fmt;

use crate::bytes::{decode_hex32, preview_hex, HASH_LEN};
use crate::error::TypeError;

/// 32-byte pre-image whose hash unlocks an envelope.
///
/// Deliberately has no `Display` and no serde impls: the full value must not
/// end up in logs or in the transaction log. Use [`Secret::preview`] for those.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; HASH_LEN]);

impl Secret {
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Full lowercase hex encoding. Only for handing the secret back to its owner.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First 16 hex characters followed by `...`.
    pub fn preview(&self) -> String {
        preview_hex(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        decode_hex32(s).map(Self)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<[u8; HASH_LEN]> for Secret {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn debug_is_redacted() {
        let s = Secret::from_bytes([0x42; 32]);
        assert_eq!(format!("{s:?}"), "Secret(<redacted>)");
    }

    #[test]
    fn preview_keeps_sixteen_chars() {
        let s = Secret::from_hex(&"9f".repeat(32)).unwrap();
        assert_eq!(s.preview(), "9f9f9f9f9f9f9f9f...");
    }

    proptest! {
        #[test]
        fn preview_never_contains_full_secret(bytes in proptest::array::uniform32(any::<u8>())) {
            let s = Secret::from_bytes(bytes);
            let preview = s.preview();
            prop_assert_eq!(preview.len(), 19);
            prop_assert!(s.to_hex().starts_with(&preview[..16]));
        }
    }
}
