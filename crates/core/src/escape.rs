//! Hex escape decoding for `\'XX` control words.
//!
//! RTF writes characters outside 7-bit ASCII as an apostrophe followed by
//! two hex digits. The scanner captures everything up to the next
//! terminator as one word, so text that directly follows the digits
//! (`\'e9t` in `caf\'e9t`) arrives attached to the escape and is handed back
//! as [`HexEscape::trailing`].

/// A decoded `'XX` escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexEscape<'a> {
    /// The character whose code point is the hex value.
    pub ch: char,
    /// Bytes of the word after the hex digits, to be emitted verbatim.
    pub trailing: &'a [u8],
}

/// Decode a control word of the form `'` + 1–2 hex digits + anything.
///
/// Returns `None` when the word does not start with an apostrophe followed
/// by at least one hex digit.
pub fn decode_hex_escape(word: &[u8]) -> Option<HexEscape<'_>> {
    let digits = word.strip_prefix(b"'")?;
    let count = digits
        .iter()
        .take(2)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if count == 0 {
        return None;
    }
    let value = digits[..count]
        .iter()
        .fold(0u8, |acc, &b| (acc << 4) | hex_digit_value(b));
    Some(HexEscape {
        ch: char::from(value),
        trailing: &digits[count..],
    })
}

/// Convert a single ASCII hex digit to its numeric value (0-15).
fn hex_digit_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => unreachable!("hex_digit_value called with non-hex byte: {}", b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_two_digits() {
        let esc = decode_hex_escape(b"'A9").unwrap();
        assert_eq!(esc.ch, '©');
        assert!(esc.trailing.is_empty());
    }

    #[test]
    fn decode_case_insensitive() {
        assert_eq!(decode_hex_escape(b"'e9").unwrap().ch, 'é');
        assert_eq!(decode_hex_escape(b"'E9").unwrap().ch, 'é');
    }

    #[test]
    fn decode_single_digit() {
        let esc = decode_hex_escape(b"'4x").unwrap();
        assert_eq!(esc.ch, '\u{4}');
        assert_eq!(esc.trailing, b"x");
    }

    #[test]
    fn trailing_bytes_are_not_rescanned() {
        // Only the first two digits belong to the escape; the rest is text,
        // even when it looks like another escape.
        let esc = decode_hex_escape(b"'41'42BC").unwrap();
        assert_eq!(esc.ch, 'A');
        assert_eq!(esc.trailing, b"'42BC");
    }

    #[test]
    fn rejects_non_escapes() {
        assert!(decode_hex_escape(b"").is_none());
        assert!(decode_hex_escape(b"'").is_none());
        assert!(decode_hex_escape(b"'zz").is_none());
        assert!(decode_hex_escape(b"par").is_none());
    }
}
