use htlc_types::SecretHash;
use subtle::ConstantTimeEq;

/// Constant-time equality of two 32-byte digests.
///
/// `==` on arrays may return at the first differing byte; this walks the
/// whole buffer so timing does not reveal the length of the matching prefix.
pub fn digests_match(a: &SecretHash, b: &SecretHash) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_digests_match() {
        let a = SecretHash::from_bytes([3; 32]);
        assert!(digests_match(&a, &a));
    }

    #[test]
    fn last_byte_difference_detected() {
        let a = SecretHash::from_bytes([3; 32]);
        let mut b = [3u8; 32];
        b[31] = 4;
        assert!(!digests_match(&a, &SecretHash::from_bytes(b)));
    }

    proptest! {
        #[test]
        fn agrees_with_plain_equality(
            a in proptest::array::uniform32(any::<u8>()),
            b in proptest::array::uniform32(any::<u8>()),
        ) {
            let (ha, hb) = (SecretHash::from_bytes(a), SecretHash::from_bytes(b));
            prop_assert_eq!(digests_match(&ha, &hb), a == b);
        }
    }
}
