//! Parse failure reporting.
//!
//! Failures are values, never panics: every parser returns a [`Parsed`]
//! result, and `?` carries the first failure out through the whole call
//! chain untouched. An error records what went wrong, optionally which
//! [`Type`] was being read, and optionally the absolute byte offset.

use core::fmt;

use thiserror::Error;

use crate::cursor::Cursor;
use crate::types::Type;

/// Result of one literal parse attempt: the cursor just past the consumed
/// bytes plus the decoded value, or the first error encountered.
pub type Parsed<'a, T> = Result<(Cursor<'a>, T), ParseError>;

/// What went wrong, without context.
///
/// The taxonomy is flat and shared with the document-level parser that
/// sequences literals into structures; the `Expected*` kinds about lists,
/// separators, and property punctuation have no producer in this crate but
/// are part of the common vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[repr(u8)]
pub enum ParseErrorKind {
    /// Nothing failed. The default state of an error slot.
    #[default]
    #[error("no error")]
    NoError = 0,

    #[error("invalid escape sequence")]
    InvalidEscapeSequence = 1,

    #[error("invalid identifier")]
    InvalidIdentifier = 2,

    #[error("invalid name")]
    InvalidName = 3,

    #[error("invalid character literal")]
    InvalidCharacterLiteral = 4,

    #[error("invalid literal")]
    InvalidLiteral = 5,

    #[error("invalid property value")]
    InvalidPropertyValue = 6,

    #[error("invalid subarray size")]
    InvalidSubArraySize = 7,

    #[error("literal out of range")]
    LiteralOutOfRange = 8,

    #[error("expected identifier")]
    ExpectedIdentifier = 9,

    #[error("expected name")]
    ExpectedName = 10,

    #[error("expected literal")]
    ExpectedLiteral = 11,

    #[error("expected separator")]
    ExpectedSeparator = 12,

    #[error("expected list start")]
    ExpectedListStart = 13,

    #[error("expected list end")]
    ExpectedListEnd = 14,

    #[error("expected array size end")]
    ExpectedArraySizeEnd = 15,

    #[error("expected property value")]
    ExpectedPropertyValue = 16,

    #[error("expected property assignment")]
    ExpectedPropertyAssignment = 17,

    #[error("expected property list end")]
    ExpectedPropertyListEnd = 18,
}

/// A literal parse failure.
///
/// `expected` is the grammar type the parser was trying to produce, when
/// one applies; `position` is the absolute byte offset the failure is
/// anchored to. Both are optional because a few historical error shapes
/// omit them (an empty identifier reports no position at all, for one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub expected: Option<Type>,
    pub position: Option<usize>,
}

impl ParseError {
    /// Error with no context.
    #[inline]
    pub fn new(kind: ParseErrorKind) -> Self {
        ParseError { kind, expected: None, position: None }
    }

    /// Error anchored to a byte offset.
    #[inline]
    pub fn at(kind: ParseErrorKind, position: usize) -> Self {
        ParseError { kind, expected: None, position: Some(position) }
    }

    /// Error with an expected grammar type but no offset.
    #[inline]
    pub fn expected(kind: ParseErrorKind, expected: Type) -> Self {
        ParseError { kind, expected: Some(expected), position: None }
    }

    /// Error with an expected grammar type, anchored to a byte offset.
    #[inline]
    pub fn expected_at(kind: ParseErrorKind, expected: Type, position: usize) -> Self {
        ParseError { kind, expected: Some(expected), position: Some(position) }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(expected) = self.expected {
            write!(f, " ({})", expected)?;
        }
        if let Some(position) = self.position {
            write!(f, " at byte {}", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
