//! Property value classification.
//!
//! Properties carry one value of unknown type, so the dispatcher decides
//! the interpretation from the leading byte(s) and hands off to exactly
//! one primitive parser. Integer notation is preserved in the tag so the
//! document layer can tell `10` from `0x0A` from `'\n'` when it coerces
//! the value into the property's declared type.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, Parsed};
use crate::literal::{bool_literal, reference_literal, string_literal, type_keyword};
use crate::number::{float_literal, integer_literal, is_digit, Base};
use crate::types::Type;

/// A property value, tagged with its syntactic interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<'a> {
    /// `true` or `false`
    Bool(bool),

    /// Integer written as a character literal: `'A'`
    Character(i32),

    /// Integer written in decimal: `-12`
    Integral(i32),

    /// Integer written with a base prefix: `0x0A`, `0o17`, `0b101`
    Binary(i32),

    /// Decimal float: `3.14`
    Float(f32),

    /// Quoted string, unescaped and concatenated
    String(Vec<u8>),

    /// Reference path; `None` is the `null` reference
    Reference(Option<&'a [u8]>),

    /// Type keyword: `float`, `unsigned_int16`, ...
    Type(Type),
}

/// Classify and parse one property value.
///
/// The branch is chosen from the leading byte(s) alone and never
/// reconsidered: a numeric-looking token that fails to parse as a number
/// is a terminal error, not a fallthrough to another interpretation.
pub fn property_value<'a>(
    cur: Cursor<'a>,
    buffer: &mut String,
) -> Parsed<'a, PropertyValue<'a>> {
    let Some(first) = cur.first() else {
        return Err(ParseError::new(ParseErrorKind::ExpectedPropertyValue));
    };

    if first == b'"' {
        let (end, value) = string_literal(cur)?;
        return Ok((end, PropertyValue::String(value)));
    }

    if first == b'$' || first == b'%' {
        let (end, value) = reference_literal(cur)?;
        return Ok((end, PropertyValue::Reference(value)));
    }

    if is_digit(first, 10) || matches!(first, b'.' | b'\'' | b'+' | b'-') {
        // Float exactly when a dot shows up before any byte outside
        // [0-9+-_]; everything else numeric goes through the integer
        // parser, so `12e5` stops after `12`.
        let mut scan = cur;
        loop {
            match scan.first() {
                Some(b'.') => {
                    let (end, value) = float_literal::<f32>(cur, buffer)?;
                    return Ok((end, PropertyValue::Float(value)));
                }
                Some(b) if is_digit(b, 10) || matches!(b, b'+' | b'-' | b'_') => {
                    scan = scan.advance(1);
                }
                _ => break,
            }
        }

        let (end, value, base) = integer_literal::<i32>(cur, buffer)?;
        let tagged = match base {
            Base::Decimal => PropertyValue::Integral(value),
            Base::Character => PropertyValue::Character(value),
            Base::Binary | Base::Octal | Base::Hexadecimal => PropertyValue::Binary(value),
        };
        return Ok((end, tagged));
    }

    if cur.starts_with(b"null") {
        return Ok((cur.advance(4), PropertyValue::Reference(None)));
    }

    if cur.starts_with(b"true") || cur.starts_with(b"false") {
        let (end, value) = bool_literal(cur)?;
        return Ok((end, PropertyValue::Bool(value)));
    }

    if let Some((end, ty)) = type_keyword(cur) {
        return Ok((end, PropertyValue::Type(ty)));
    }

    Err(ParseError::at(ParseErrorKind::InvalidPropertyValue, cur.offset()))
}
