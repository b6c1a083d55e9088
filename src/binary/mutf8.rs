//! Java Modified UTF-8, the string encoding of the format.
//!
//! The conversion itself is done by the `cesu8` crate. NUL is written as the
//! two-byte sequence `C0 80` and supplementary characters as surrogate pairs
//! of three bytes each.
//!
//! Decoding is lenient: a raw `00` byte and four-byte UTF-8 sequences are
//! accepted as well, since other writers emit them. Encoding is always strict.

use std::borrow::Cow;

pub use cesu8::Cesu8DecodingError as DecodeError;

pub fn encode(s: &str) -> Cow<'_, [u8]> {
    cesu8::to_java_cesu8(s)
}

pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    cesu8::from_java_cesu8(bytes)
}

/// Encoded length of `s` in bytes, without encoding it.
pub fn encoded_len(s: &str) -> usize {
    s.chars()
        .map(|c| match c as u32 {
            0 => 2,
            0x01..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 6,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_unchanged() {
        assert_eq!(&*encode("Bananrama"), b"Bananrama");
        assert_eq!(decode(b"Bananrama").unwrap(), "Bananrama");
    }

    #[test]
    fn test_nul_uses_two_bytes() {
        assert_eq!(&*encode("a\0b"), &[b'a', 0xC0, 0x80, b'b']);
        assert_eq!(decode(&[b'a', 0xC0, 0x80, b'b']).unwrap(), "a\0b");
    }

    #[test]
    fn test_supplementary_uses_surrogate_pair() {
        let s = "\u{1F600}";
        let bytes = encode(s);
        assert_eq!(bytes.len(), 6);
        assert_eq!(decode(&bytes).unwrap(), s);
    }

    #[test]
    fn test_encoded_len_agrees_with_encoder() {
        for s in ["", "abc", "\0", "\u{e9}t\u{e9}", "\u{4e2d}\u{6587}", "x\u{1F600}y"] {
            assert_eq!(encoded_len(s), encode(s).len(), "input {s:?}");
        }
    }

    #[test]
    fn test_decode_accepts_raw_nul() {
        assert_eq!(decode(&[b'a', 0x00]).unwrap(), "a\0");
        assert_eq!(&*encode("a\0"), &[b'a', 0xC0, 0x80]);
    }

    #[test]
    fn test_decode_accepts_four_byte_utf8() {
        let s = decode(&[0xF0, 0x9F, 0x98, 0x80]).unwrap();
        assert_eq!(s, "\u{1F600}");
        assert_eq!(encode(&s).len(), 6);
    }

    #[test]
    fn test_ill_formed_input_fails() {
        // Lone continuation byte.
        assert!(decode(&[0x80]).is_err());
        // Truncated three-byte sequence.
        assert!(decode(&[0xE4, 0xB8]).is_err());
    }
}
