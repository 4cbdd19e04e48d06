//! Byte cursor over an in-memory document.
//!
//! A [`Cursor`] is a cheap `Copy` view: the full input buffer plus a
//! forward-only byte offset. Parsers take a cursor and return the cursor
//! just past what they consumed, so positions survive into error reports
//! as absolute offsets. Nothing here ever copies document bytes.

use memchr::{memchr, memmem};

/// A position within a caller-owned byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `buf`.
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Absolute byte offset from the start of the buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Unconsumed bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Number of unconsumed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True once every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Next byte, if any.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Byte `n` positions ahead, if any.
    #[inline]
    pub fn get(&self, n: usize) -> Option<u8> {
        self.buf.get(self.pos + n).copied()
    }

    /// Cursor moved forward by `n` bytes.
    #[inline]
    pub fn advance(&self, n: usize) -> Cursor<'a> {
        debug_assert!(self.pos + n <= self.buf.len());
        Cursor { buf: self.buf, pos: self.pos + n }
    }

    /// Do the unconsumed bytes start with `prefix`?
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Bytes between this cursor and a later cursor into the same buffer.
    #[inline]
    pub fn text_to(&self, end: Cursor<'a>) -> &'a [u8] {
        debug_assert!(core::ptr::eq(self.buf, end.buf));
        debug_assert!(self.pos <= end.pos);
        &self.buf[self.pos..end.pos]
    }

    /// Position after any run of blanks and comments.
    ///
    /// Blanks are bytes `<= 0x20`. Line comments (`//`) run to the next
    /// newline or end of input; block comments (`/*`) run to the closing
    /// `*/`. An unterminated comment of either kind silently consumes the
    /// rest of the input; it is not an error.
    pub fn skip_whitespace(mut self) -> Self {
        loop {
            match (self.first(), self.get(1)) {
                (Some(b), _) if b <= 0x20 => self = self.advance(1),
                (Some(b'/'), Some(b'/')) => {
                    let rest = &self.rest()[2..];
                    self = match memchr(b'\n', rest) {
                        Some(n) => self.advance(2 + n + 1),
                        None => self.advance(self.len()),
                    };
                }
                (Some(b'/'), Some(b'*')) => {
                    let rest = &self.rest()[2..];
                    self = match memmem::find(rest, b"*/") {
                        Some(n) => self.advance(2 + n + 2),
                        None => self.advance(self.len()),
                    };
                }
                _ => return self,
            }
        }
    }
}
