//! Numeric literal parsing.
//!
//! Both engines are generic over a closed set of target widths: integers
//! over `u8`..`i64` through [`Integral`], floats over `f32`/`f64` through
//! [`Floating`]. Integers accept decimal, `0x`/`0o`/`0b` prefixed, and
//! character-literal notation, with `_` digit separators. Floats add the
//! decimal/exponent form; a base-prefixed float is the raw bit pattern of
//! the target width, reinterpreted rather than numerically converted, so
//! exact encodings (NaN payloads included) can be written in a document.
//!
//! Digit text is stripped of separators into a caller-owned scratch
//! `String` before conversion, so repeated calls share one allocation.

use core::ops::Neg;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, Parsed};
use crate::literal::character_literal;
use crate::types::Type;

/// Notation an integer literal was written in.
///
/// The discriminants are the radix itself, with 256 standing in for
/// character literals, which have no positional notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Base {
    /// `0b101`
    Binary = 2,

    /// `0o17`
    Octal = 8,

    /// `123`
    Decimal = 10,

    /// `0x1F`
    Hexadecimal = 16,

    /// `'A'`
    Character = 256,
}

mod private {
    pub trait Sealed {}
}

/// Integer widths a literal can be parsed into.
///
/// The set is closed: the eight fixed-width integer types below. Errors
/// are tagged with the matching grammar [`Type`].
pub trait Integral: private::Sealed + Copy {
    /// Grammar type used to tag errors for this width.
    const TYPE: Type;

    /// Whether a leading minus sign is accepted.
    const SIGNED: bool;

    /// Largest magnitude the width can hold, checked before the sign is
    /// applied.
    const MAX_MAGNITUDE: u64;

    /// Apply the sign to a range-checked magnitude.
    fn assemble(negative: bool, magnitude: u64) -> Self;
}

macro_rules! impl_integral {
    ($ty:ty, signed, $type:expr) => {
        impl private::Sealed for $ty {}

        impl Integral for $ty {
            const TYPE: Type = $type;
            const SIGNED: bool = true;
            const MAX_MAGNITUDE: u64 = <$ty>::MAX as u64;

            #[inline]
            fn assemble(negative: bool, magnitude: u64) -> Self {
                let value = magnitude as $ty;
                if negative {
                    -value
                } else {
                    value
                }
            }
        }
    };
    ($ty:ty, unsigned, $type:expr) => {
        impl private::Sealed for $ty {}

        impl Integral for $ty {
            const TYPE: Type = $type;
            const SIGNED: bool = false;
            const MAX_MAGNITUDE: u64 = <$ty>::MAX as u64;

            #[inline]
            fn assemble(_negative: bool, magnitude: u64) -> Self {
                magnitude as $ty
            }
        }
    };
}

impl_integral!(u8, unsigned, Type::UnsignedByte);
impl_integral!(i8, signed, Type::Byte);
impl_integral!(u16, unsigned, Type::UnsignedShort);
impl_integral!(i16, signed, Type::Short);
impl_integral!(u32, unsigned, Type::UnsignedInt);
impl_integral!(i32, signed, Type::Int);
impl_integral!(u64, unsigned, Type::UnsignedLong);
impl_integral!(i64, signed, Type::Long);

/// Float widths a literal can be parsed into: `f32` or `f64`.
pub trait Floating: private::Sealed + Copy + Neg<Output = Self> {
    /// Grammar type used to tag errors for this width.
    const TYPE: Type;

    /// Unsigned integer of the same bit width, parsed for base-prefixed
    /// literals.
    type Bits: Integral;

    /// Reinterpret a raw bit pattern as a value of this width.
    fn from_bit_pattern(bits: u64) -> Self;

    /// Convert decimal text (separators already stripped).
    fn from_decimal(text: &str) -> Option<Self>;
}

impl private::Sealed for f32 {}

impl Floating for f32 {
    const TYPE: Type = Type::Float;
    type Bits = u32;

    #[inline]
    fn from_bit_pattern(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn from_decimal(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl private::Sealed for f64 {}

impl Floating for f64 {
    const TYPE: Type = Type::Double;
    type Bits = u64;

    #[inline]
    fn from_bit_pattern(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn from_decimal(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

#[inline]
pub(crate) fn is_digit(b: u8, radix: u32) -> bool {
    match radix {
        2 => matches!(b, b'0'..=b'1'),
        8 => matches!(b, b'0'..=b'7'),
        10 => matches!(b, b'0'..=b'9'),
        16 => matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F'),
        _ => false,
    }
}

/// End of the run of base-`radix` digits starting at `start`. Underscore
/// separators are part of the run anywhere but its first byte. The run
/// may be empty.
fn digit_run(start: Cursor<'_>, radix: u32) -> Cursor<'_> {
    let mut cur = start;
    while let Some(b) = cur.first() {
        if !is_digit(b, radix) && !(b == b'_' && cur.offset() > start.offset()) {
            break;
        }
        cur = cur.advance(1);
    }
    cur
}

/// Like [`digit_run`], but an empty run is `InvalidLiteral`.
fn required_digit_run(
    start: Cursor<'_>,
    radix: u32,
    expected: Type,
) -> Result<Cursor<'_>, ParseError> {
    let end = digit_run(start, radix);
    if end.offset() == start.offset() {
        return Err(ParseError::expected_at(
            ParseErrorKind::InvalidLiteral,
            expected,
            start.offset(),
        ));
    }
    Ok(end)
}

/// Copy `text` into the scratch buffer with `_` separators removed.
/// Prior contents are overwritten.
fn extract_digits(text: &[u8], buffer: &mut String) {
    buffer.clear();
    buffer.extend(text.iter().filter(|&&b| b != b'_').map(|&b| b as char));
}

/// Parse one or more base-`radix` digits into a magnitude no larger than
/// `max`. Errors are anchored at the start of the digit run.
fn base_n_magnitude<'a>(
    start: Cursor<'a>,
    radix: u32,
    max: u64,
    expected: Type,
    buffer: &mut String,
) -> Parsed<'a, u64> {
    let end = required_digit_run(start, radix, expected)?;
    extract_digits(start.text_to(end), buffer);
    // from_str_radix only fails on overflow here; the run is pre-validated.
    let magnitude = u64::from_str_radix(buffer, radix).map_err(|_| {
        ParseError::expected_at(ParseErrorKind::LiteralOutOfRange, expected, start.offset())
    })?;
    if magnitude > max {
        return Err(ParseError::expected_at(
            ParseErrorKind::LiteralOutOfRange,
            expected,
            start.offset(),
        ));
    }
    Ok((end, magnitude))
}

/// Parse an integer literal into `T`, also reporting the notation it was
/// written in.
///
/// Grammar: optional `+`/`-` sign, then a character literal, a
/// `0x`/`0o`/`0b` prefixed digit run, or a decimal digit run. A minus
/// sign on an unsigned target is `LiteralOutOfRange` immediately; a
/// magnitude exceeding the width is `LiteralOutOfRange` at the digit run.
pub fn integer_literal<'a, T: Integral>(
    cur: Cursor<'a>,
    buffer: &mut String,
) -> Result<(Cursor<'a>, T, Base), ParseError> {
    if cur.is_empty() {
        return Err(ParseError::expected_at(
            ParseErrorKind::ExpectedLiteral,
            T::TYPE,
            cur.offset(),
        ));
    }

    let mut negative = false;
    let body = match cur.first() {
        Some(b'+') => cur.advance(1),
        Some(b'-') => {
            if !T::SIGNED {
                return Err(ParseError::expected_at(
                    ParseErrorKind::LiteralOutOfRange,
                    T::TYPE,
                    cur.offset(),
                ));
            }
            negative = true;
            cur.advance(1)
        }
        _ => cur,
    };

    // 'A' is an integer literal too; its base is the 256 sentinel.
    if body.first() == Some(b'\'') {
        let (end, byte) = character_literal(body)?;
        let magnitude = u64::from(byte);
        if magnitude > T::MAX_MAGNITUDE {
            return Err(ParseError::expected_at(
                ParseErrorKind::LiteralOutOfRange,
                T::TYPE,
                body.offset(),
            ));
        }
        return Ok((end, T::assemble(negative, magnitude), Base::Character));
    }

    let (radix, base, digits) = match (body.first(), body.get(1)) {
        (Some(b'0'), Some(b'x' | b'X')) => (16, Base::Hexadecimal, body.advance(2)),
        (Some(b'0'), Some(b'o' | b'O')) => (8, Base::Octal, body.advance(2)),
        (Some(b'0'), Some(b'b' | b'B')) => (2, Base::Binary, body.advance(2)),
        _ => (10, Base::Decimal, body),
    };

    let (end, magnitude) = base_n_magnitude(digits, radix, T::MAX_MAGNITUDE, T::TYPE, buffer)?;
    Ok((end, T::assemble(negative, magnitude), base))
}

/// Parse a floating-point literal into `T`.
///
/// A base-prefixed literal (`0x3F800000`) is parsed as an unsigned
/// integer of the target's bit width and reinterpreted; errors on that
/// path are tagged with the bit integer's type. The decimal form needs at
/// least one digit before an optional `.`, so `5.` parses and `.5` does
/// not; an exponent needs at least one digit after `e`/`E` and optional
/// sign. The decimal conversion saturates per IEEE rules rather than
/// range-checking.
pub fn float_literal<'a, T: Floating>(cur: Cursor<'a>, buffer: &mut String) -> Parsed<'a, T> {
    if cur.is_empty() {
        return Err(ParseError::expected_at(
            ParseErrorKind::ExpectedLiteral,
            T::TYPE,
            cur.offset(),
        ));
    }

    let mut negative = false;
    let body = match cur.first() {
        Some(b'+') => cur.advance(1),
        Some(b'-') => {
            negative = true;
            cur.advance(1)
        }
        _ => cur,
    };

    // Base-prefixed form: the digits are the raw bit pattern.
    if body.first() == Some(b'0') {
        let radix = match body.get(1) {
            Some(b'x' | b'X') => Some(16),
            Some(b'o' | b'O') => Some(8),
            Some(b'b' | b'B') => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let (end, bits) = base_n_magnitude(
                body.advance(2),
                radix,
                <T::Bits as Integral>::MAX_MAGNITUDE,
                <T::Bits as Integral>::TYPE,
                buffer,
            )?;
            let value = T::from_bit_pattern(bits);
            return Ok((end, if negative { -value } else { value }));
        }
    }

    let whole = digit_run(body, 10);
    if whole.offset() == body.offset() {
        return Err(ParseError::expected_at(
            ParseErrorKind::InvalidLiteral,
            T::TYPE,
            cur.offset(),
        ));
    }

    let mut end = whole;
    if end.first() == Some(b'.') {
        end = digit_run(end.advance(1), 10);
    }

    if let Some(b'e' | b'E') = end.first() {
        let mut exponent = end.advance(1);
        if let Some(b'+' | b'-') = exponent.first() {
            exponent = exponent.advance(1);
        }
        end = required_digit_run(exponent, 10, T::TYPE)?;
    }

    // The sign rides along in the text, so it is already applied here.
    extract_digits(cur.text_to(end), buffer);
    let value = T::from_decimal(buffer).ok_or_else(|| {
        ParseError::expected_at(ParseErrorKind::InvalidLiteral, T::TYPE, cur.offset())
    })?;
    Ok((end, value))
}
