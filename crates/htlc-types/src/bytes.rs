use crate::error::TypeError;

/// Width in bytes of every secret and secret hash.
pub const HASH_LEN: usize = 32;

/// Number of hex characters kept when a value is shown in logs or records.
pub const PREVIEW_CHARS: usize = 16;

/// Decode a hex string into exactly [`HASH_LEN`] bytes.
///
/// Upper- and lower-case digits are both accepted. Decoding happens before
/// the length check so that a malformed string is reported as such even when
/// its length is also wrong.
pub fn decode_hex32(s: &str) -> Result<[u8; HASH_LEN], TypeError> {
    let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
    if bytes.len() != HASH_LEN {
        return Err(TypeError::InvalidLength {
            expected: HASH_LEN,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; HASH_LEN];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

/// Truncated hex preview: the first [`PREVIEW_CHARS`] characters plus `...`.
pub fn preview_hex(bytes: &[u8]) -> String {
    let mut out = hex::encode(bytes);
    if out.len() > PREVIEW_CHARS {
        out.truncate(PREVIEW_CHARS);
        out.push_str("...");
    }
    out
}

/// Reduce already-encoded text to preview form.
///
/// Text that is already a preview (at most [`PREVIEW_CHARS`] characters
/// followed by `...`) is returned unchanged, as is anything no longer than
/// [`PREVIEW_CHARS`].
pub fn preview_str(s: &str) -> String {
    if s.ends_with("...") && s.len() <= PREVIEW_CHARS + 3 {
        return s.to_owned();
    }
    match s.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_mixed_case() {
        let s = "AB".repeat(32);
        assert_eq!(decode_hex32(&s).unwrap(), [0xab; 32]);
    }

    #[test]
    fn decode_rejects_short_input() {
        let err = decode_hex32("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn decode_rejects_long_input() {
        let err = decode_hex32(&"00".repeat(33)).unwrap_err();
        assert!(matches!(err, TypeError::InvalidLength { actual: 33, .. }));
    }

    #[test]
    fn decode_rejects_non_hex() {
        let s = format!("zz{}", "00".repeat(31));
        assert!(matches!(decode_hex32(&s), Err(TypeError::InvalidHex(_))));
    }

    #[test]
    fn decode_rejects_odd_length() {
        assert!(matches!(decode_hex32("abc"), Err(TypeError::InvalidHex(_))));
    }

    #[test]
    fn preview_truncates() {
        assert_eq!(preview_hex(&[0xff; 32]), "ffffffffffffffff...");
        assert_eq!(preview_hex(&[0x01, 0x02]), "0102");
    }

    #[test]
    fn preview_str_matches_preview_hex() {
        let full = "c0".repeat(32);
        assert_eq!(preview_str(&full), preview_hex(&[0xc0; 32]));
        assert_eq!(preview_str(&preview_str(&full)), preview_hex(&[0xc0; 32]));
        assert_eq!(preview_str("0102"), "0102");
    }
}
