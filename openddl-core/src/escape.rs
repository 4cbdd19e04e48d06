//! Escape sequence decoding.
//!
//! Two layers: [`escaped_char`] decodes the single-byte escapes usable in
//! both character and string literals, and [`escaped_unicode`] adds the
//! string-only `\u`/`\U` forms, which are consumed but not decoded (a `?`
//! placeholder is emitted instead, with a warning through `tracing`).

use tracing::warn;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, Parsed};

#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode one escape sequence starting at `\`, yielding the decoded byte.
///
/// Handles the two-character escapes `\\ \' \a \b \f \n \r \t \v \? \"`
/// and the four-character `\xHH` form. Anything else is
/// `InvalidEscapeSequence` at the backslash.
pub fn escaped_char(cur: Cursor<'_>) -> Parsed<'_, u8> {
    debug_assert_eq!(cur.first(), Some(b'\\'));

    let error = ParseError::at(ParseErrorKind::InvalidEscapeSequence, cur.offset());
    let Some(selector) = cur.get(1) else {
        return Err(error);
    };

    let decoded = match selector {
        // \' decodes to the same byte as \\ in this grammar.
        b'\\' | b'\'' => b'\\',
        b'a' => 0x07,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        b'?' => b'?',
        b'"' => b'"',
        b'x' => {
            let (hi, lo) = match (cur.get(2).and_then(hex_value), cur.get(3).and_then(hex_value)) {
                (Some(hi), Some(lo)) => (hi, lo),
                _ => return Err(error),
            };
            return Ok((cur.advance(4), hi * 16 + lo));
        }
        _ => return Err(error),
    };
    Ok((cur.advance(2), decoded))
}

/// Decode one escape sequence inside a string literal, appending the
/// result to `out`.
///
/// Recognizes `\uXXXX` and `\UXXXXXXXX` by length only: the sequence is
/// consumed and a `?` placeholder is appended, since Unicode decoding is
/// not implemented. Every other escape goes through [`escaped_char`].
pub fn escaped_unicode<'a>(cur: Cursor<'a>, out: &mut Vec<u8>) -> Result<Cursor<'a>, ParseError> {
    debug_assert_eq!(cur.first(), Some(b'\\'));

    match cur.get(1) {
        Some(b'u') if cur.len() >= 6 => {
            warn!(offset = cur.offset(), "unicode escape not decoded, substituting '?'");
            out.push(b'?');
            Ok(cur.advance(6))
        }
        Some(b'U') if cur.len() >= 10 => {
            warn!(offset = cur.offset(), "unicode escape not decoded, substituting '?'");
            out.push(b'?');
            Ok(cur.advance(10))
        }
        _ => {
            let (next, decoded) = escaped_char(cur)?;
            out.push(decoded);
            Ok(next)
        }
    }
}
