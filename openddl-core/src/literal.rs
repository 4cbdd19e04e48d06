//! The primitive literal parsers.
//!
//! Each parser consumes a prefix of the cursor and yields a decoded
//! value. Names and references are zero-copy slices of the input; string
//! literals materialize into owned bytes because escapes and segment
//! concatenation can change the content. Numeric literals live in
//! [`crate::number`].

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, Parsed};
use crate::escape::{escaped_char, escaped_unicode};
use crate::types::{Type, TYPE_KEYWORDS};

#[inline]
fn is_identifier_start(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

#[inline]
fn is_identifier_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_')
}

/// Parse an identifier: an ASCII letter or `_`, then any run of letters,
/// digits, and `_`. Yields the matched text.
///
/// Empty input is `ExpectedIdentifier`; a bad first byte is
/// `InvalidIdentifier` at that byte.
pub fn identifier<'a>(cur: Cursor<'a>) -> Parsed<'a, &'a [u8]> {
    let Some(first) = cur.first() else {
        return Err(ParseError::new(ParseErrorKind::ExpectedIdentifier));
    };
    if !is_identifier_start(first) {
        return Err(ParseError::at(ParseErrorKind::InvalidIdentifier, cur.offset()));
    }

    let mut end = cur.advance(1);
    while end.first().is_some_and(is_identifier_byte) {
        end = end.advance(1);
    }
    Ok((end, cur.text_to(end)))
}

/// Parse a name: a `$` or `%` sigil followed by an identifier. The
/// yielded text keeps the sigil.
pub fn name_literal<'a>(cur: Cursor<'a>) -> Parsed<'a, &'a [u8]> {
    if cur.is_empty() {
        return Err(ParseError::at(ParseErrorKind::ExpectedName, cur.offset()));
    }
    if !matches!(cur.first(), Some(b'$' | b'%')) {
        return Err(ParseError::at(ParseErrorKind::InvalidName, cur.offset()));
    }

    let (end, _) = identifier(cur.advance(1))?;
    Ok((end, cur.text_to(end)))
}

/// Parse a reference: the keyword `null` (an absent reference, `None`) or
/// a name followed by any number of `%`-prefixed path segments. The
/// yielded text spans the whole chain.
pub fn reference_literal<'a>(cur: Cursor<'a>) -> Parsed<'a, Option<&'a [u8]>> {
    if cur.is_empty() {
        return Err(ParseError::expected(ParseErrorKind::ExpectedLiteral, Type::Reference));
    }
    if cur.starts_with(b"null") {
        return Ok((cur.advance(4), None));
    }
    if !matches!(cur.first(), Some(b'$' | b'%')) {
        return Err(ParseError::expected_at(
            ParseErrorKind::InvalidLiteral,
            Type::Reference,
            cur.offset(),
        ));
    }

    let (mut end, _) = identifier(cur.advance(1))?;
    while end.first() == Some(b'%') {
        let (next, _) = identifier(end.advance(1))?;
        end = next;
    }
    Ok((end, Some(cur.text_to(end))))
}

/// Parse `true` or `false`. Case-sensitive; consumes exactly the keyword.
pub fn bool_literal(cur: Cursor<'_>) -> Parsed<'_, bool> {
    if cur.starts_with(b"true") {
        return Ok((cur.advance(4), true));
    }
    if cur.starts_with(b"false") {
        return Ok((cur.advance(5), false));
    }
    Err(ParseError::expected_at(ParseErrorKind::InvalidLiteral, Type::Bool, cur.offset()))
}

/// Parse a character literal: `'` + one printable ASCII byte or one
/// escape sequence + `'`. Yields the byte value.
///
/// Every malformed shape, a bad inner escape included, reports
/// `InvalidCharacterLiteral` at the opening quote.
pub fn character_literal(cur: Cursor<'_>) -> Parsed<'_, u8> {
    let error = ParseError::at(ParseErrorKind::InvalidCharacterLiteral, cur.offset());
    if cur.len() < 3 || cur.first() != Some(b'\'') {
        return Err(error);
    }

    match cur.get(1) {
        Some(b'\\') => {
            if let Ok((next, decoded)) = escaped_char(cur.advance(1)) {
                if next.first() == Some(b'\'') {
                    return Ok((next.advance(1), decoded));
                }
            }
            Err(error)
        }
        Some(b) if (0x20..=0x7E).contains(&b) && b != b'\'' => {
            if cur.get(2) == Some(b'\'') {
                Ok((cur.advance(3), b))
            } else {
                Err(error)
            }
        }
        _ => Err(error),
    }
}

/// Parse a string literal into owned bytes.
///
/// A `"` closes the current segment; if another `"` follows after
/// whitespace or comments, the segments concatenate into one logical
/// string. The returned cursor sits past that trailing whitespace.
/// Unescaped control bytes are `InvalidLiteral`; missing the closing
/// quote entirely is reported as `LiteralOutOfRange` (a historical reuse
/// of that kind) with no position.
pub fn string_literal(cur: Cursor<'_>) -> Parsed<'_, Vec<u8>> {
    if cur.first() != Some(b'"') {
        return Err(ParseError::expected_at(
            ParseErrorKind::ExpectedLiteral,
            Type::String,
            cur.offset(),
        ));
    }

    let mut out = Vec::new();
    let mut i = cur.advance(1);
    while let Some(b) = i.first() {
        match b {
            _ if b < 0x20 => {
                return Err(ParseError::expected_at(
                    ParseErrorKind::InvalidLiteral,
                    Type::String,
                    i.offset(),
                ));
            }
            b'\\' => i = escaped_unicode(i, &mut out)?,
            b'"' => {
                let j = i.advance(1).skip_whitespace();
                // A further quote with at least one byte after it
                // continues the same logical string.
                if j.len() >= 2 && j.first() == Some(b'"') {
                    i = j.advance(1);
                } else {
                    return Ok((j, out));
                }
            }
            _ => {
                out.push(b);
                i = i.advance(1);
            }
        }
    }
    Err(ParseError::expected(ParseErrorKind::LiteralOutOfRange, Type::String))
}

/// Match a type keyword without erroring: `None` means no table entry is
/// a prefix of the input, and the caller tries something else.
pub fn type_keyword(cur: Cursor<'_>) -> Option<(Cursor<'_>, Type)> {
    for &(keyword, ty) in TYPE_KEYWORDS {
        if cur.starts_with(keyword) {
            return Some((cur.advance(keyword.len()), ty));
        }
    }
    None
}

/// Parse a type keyword, erroring when none matches.
pub fn type_literal(cur: Cursor<'_>) -> Parsed<'_, Type> {
    if cur.is_empty() {
        return Err(ParseError::expected_at(
            ParseErrorKind::ExpectedLiteral,
            Type::Type,
            cur.offset(),
        ));
    }
    type_keyword(cur).ok_or_else(|| {
        ParseError::expected_at(ParseErrorKind::InvalidLiteral, Type::Type, cur.offset())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        let (end, text) = identifier(Cursor::new(b"abc_123 rest")).unwrap();
        assert_eq!(text, b"abc_123");
        assert_eq!(end.offset(), 7);

        let (_, text) = identifier(Cursor::new(b"_private")).unwrap();
        assert_eq!(text, b"_private");

        let (end, text) = identifier(Cursor::new(b"x")).unwrap();
        assert_eq!(text, b"x");
        assert!(end.is_empty());
    }

    #[test]
    fn test_identifier_errors() {
        let err = identifier(Cursor::new(b"")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
        // Historical shape: no position on the empty case.
        assert_eq!(err.position, None);

        let err = identifier(Cursor::new(b"1abc")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidIdentifier);
        assert_eq!(err.position, Some(0));

        let err = identifier(Cursor::new(b"$x")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidIdentifier);
    }

    #[test]
    fn test_name() {
        let (end, text) = name_literal(Cursor::new(b"$foo ")).unwrap();
        assert_eq!(text, b"$foo");
        assert_eq!(end.offset(), 4);

        let (_, text) = name_literal(Cursor::new(b"%bar")).unwrap();
        assert_eq!(text, b"%bar");
    }

    #[test]
    fn test_name_errors() {
        let err = name_literal(Cursor::new(b"")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedName);
        assert_eq!(err.position, Some(0));

        let err = name_literal(Cursor::new(b"foo")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidName);
        assert_eq!(err.position, Some(0));

        // The sigil must be followed by a well-formed identifier.
        let err = name_literal(Cursor::new(b"$1")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidIdentifier);
        assert_eq!(err.position, Some(1));
    }

    #[test]
    fn test_reference_null() {
        let (end, value) = reference_literal(Cursor::new(b"null")).unwrap();
        assert_eq!(value, None);
        assert_eq!(end.offset(), 4);
    }

    #[test]
    fn test_reference_chain() {
        let (end, value) = reference_literal(Cursor::new(b"$a%b%c rest")).unwrap();
        assert_eq!(value, Some(&b"$a%b%c"[..]));
        assert_eq!(end.offset(), 6);

        // Only % continues a chain.
        let (end, value) = reference_literal(Cursor::new(b"%x$y")).unwrap();
        assert_eq!(value, Some(&b"%x"[..]));
        assert_eq!(end.offset(), 2);
    }

    #[test]
    fn test_reference_errors() {
        let err = reference_literal(Cursor::new(b"")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedLiteral);
        assert_eq!(err.expected, Some(Type::Reference));
        assert_eq!(err.position, None);

        let err = reference_literal(Cursor::new(b"foo")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidLiteral);
        assert_eq!(err.expected, Some(Type::Reference));

        // A chained segment has to be an identifier.
        let err = reference_literal(Cursor::new(b"$a%1")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidIdentifier);
        assert_eq!(err.position, Some(3));
    }

    #[test]
    fn test_bool() {
        assert_eq!(bool_literal(Cursor::new(b"true")).unwrap().1, true);
        assert_eq!(bool_literal(Cursor::new(b"false")).unwrap().1, false);

        // Prefix match: trailing bytes stay unconsumed.
        let (end, value) = bool_literal(Cursor::new(b"true}")).unwrap();
        assert!(value);
        assert_eq!(end.offset(), 4);
    }

    #[test]
    fn test_bool_errors() {
        for input in [&b""[..], b"TRUE", b"tru", b"yes"] {
            let err = bool_literal(Cursor::new(input)).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::InvalidLiteral, "input {:?}", input);
            assert_eq!(err.expected, Some(Type::Bool));
        }
    }

    #[test]
    fn test_character() {
        let (end, byte) = character_literal(Cursor::new(b"'A'")).unwrap();
        assert_eq!(byte, b'A');
        assert_eq!(end.offset(), 3);

        assert_eq!(character_literal(Cursor::new(b"' '")).unwrap().1, b' ');
        assert_eq!(character_literal(Cursor::new(b"'~'")).unwrap().1, b'~');
    }

    #[test]
    fn test_character_escapes() {
        assert_eq!(character_literal(Cursor::new(b"'\\n'")).unwrap().1, b'\n');
        assert_eq!(character_literal(Cursor::new(b"'\\x41'")).unwrap().1, b'A');
        assert_eq!(character_literal(Cursor::new(b"'\\''")).unwrap().1, b'\\');
    }

    #[test]
    fn test_character_errors() {
        for input in [
            &b""[..],
            b"A",
            b"'",
            b"''",
            b"'A",
            b"'AB'",
            b"'''",
            b"'\\q'",
            b"'\\n",
            b"'\n'",
        ] {
            let err = character_literal(Cursor::new(input)).unwrap_err();
            assert_eq!(
                err.kind,
                ParseErrorKind::InvalidCharacterLiteral,
                "input {:?}",
                input
            );
            assert_eq!(err.position, Some(0));
        }
    }

    #[test]
    fn test_string() {
        let (end, value) = string_literal(Cursor::new(b"\"hello\"")).unwrap();
        assert_eq!(value, b"hello");
        assert_eq!(end.offset(), 7);

        let (_, value) = string_literal(Cursor::new(b"\"\"")).unwrap();
        assert_eq!(value, b"");
    }

    #[test]
    fn test_string_escapes() {
        let (_, value) = string_literal(Cursor::new(b"\"a\\tb\\x21\"")).unwrap();
        assert_eq!(value, b"a\tb!");

        let (_, value) = string_literal(Cursor::new(b"\"q\\\"q\"")).unwrap();
        assert_eq!(value, b"q\"q");

        // Unicode escapes survive as placeholders.
        let (_, value) = string_literal(Cursor::new(b"\"a\\u0041b\"")).unwrap();
        assert_eq!(value, b"a?b");
    }

    #[test]
    fn test_string_concatenation() {
        let (end, value) = string_literal(Cursor::new(b"\"ab\" \"cd\"")).unwrap();
        assert_eq!(value, b"abcd");
        assert_eq!(end.offset(), 9);

        let (_, value) = string_literal(Cursor::new(b"\"ab\" /* glue */ \"cd\" \"ef\"")).unwrap();
        assert_eq!(value, b"abcdef");
    }

    #[test]
    fn test_string_end_skips_trailing_whitespace() {
        // The scanner has to look past trailing whitespace for a
        // continuation, and the final cursor reflects that.
        let (end, value) = string_literal(Cursor::new(b"\"ab\"  x")).unwrap();
        assert_eq!(value, b"ab");
        assert_eq!(end.offset(), 6);
        assert_eq!(end.first(), Some(b'x'));
    }

    #[test]
    fn test_string_control_byte() {
        let err = string_literal(Cursor::new(b"\"a\nb\"")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidLiteral);
        assert_eq!(err.expected, Some(Type::String));
        assert_eq!(err.position, Some(2));
    }

    #[test]
    fn test_string_unterminated() {
        // Historical kind reuse: running out of input reports
        // LiteralOutOfRange, with no position.
        for input in [&b"\"abc"[..], b"\"", b"\"ab\" \"cd"] {
            let err = string_literal(Cursor::new(input)).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::LiteralOutOfRange, "input {:?}", input);
            assert_eq!(err.expected, Some(Type::String));
            assert_eq!(err.position, None);
        }
    }

    #[test]
    fn test_string_requires_opening_quote() {
        let err = string_literal(Cursor::new(b"abc")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedLiteral);
        assert_eq!(err.expected, Some(Type::String));
        assert_eq!(err.position, Some(0));
    }

    #[test]
    fn test_type_keyword_lookahead() {
        let (end, ty) = type_keyword(Cursor::new(b"unsigned_int16 x")).unwrap();
        assert_eq!(ty, Type::UnsignedShort);
        assert_eq!(end.offset(), 14);

        assert!(type_keyword(Cursor::new(b"quaternion")).is_none());
        assert!(type_keyword(Cursor::new(b"")).is_none());
    }

    #[test]
    fn test_type_keyword_is_a_prefix_match() {
        // "floaty" still matches float; the caller sees the leftover.
        let (end, ty) = type_keyword(Cursor::new(b"floaty")).unwrap();
        assert_eq!(ty, Type::Float);
        assert_eq!(end.offset(), 5);
    }

    #[test]
    fn test_type_literal() {
        let (_, ty) = type_literal(Cursor::new(b"ref")).unwrap();
        assert_eq!(ty, Type::Reference);

        let err = type_literal(Cursor::new(b"qux")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidLiteral);
        assert_eq!(err.expected, Some(Type::Type));
        assert_eq!(err.position, Some(0));

        let err = type_literal(Cursor::new(b"")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedLiteral);
        assert_eq!(err.expected, Some(Type::Type));
    }
}
