//! Byte cursor with one-byte pushback.
//!
//! The cursor is the character source of the tokenizer: it hands out the
//! input one byte at a time and lets the caller return the last byte it
//! read. It knows nothing about rows or columns; position accounting is
//! the tokenizer's job, so pushing a byte back never rewinds a counter.
//!
//! # End of Input
//!
//! Reads past the last byte return `None`. Interior null bytes are ordinary
//! data and are returned as `Some(0)`.

/// Returns `true` for the bytes C's `isspace` accepts in the "C" locale.
///
/// This is wider than [`u8::is_ascii_whitespace`], which excludes the
/// vertical tab (`0x0B`).
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Cursor over an in-memory byte buffer.
///
/// The cursor is [`Copy`], so a caller can snapshot it before speculative
/// reads.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Index of the next byte `read` will return.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor positioned before the first byte of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Consume and return the next byte, or `None` at end of input.
    #[inline]
    pub fn read(&mut self) -> Option<u8> {
        let byte = self.buf.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// Push back the byte returned by the previous [`read`](Self::read).
    ///
    /// Only one byte of pushback is meaningful: two `unread` calls without
    /// an intervening `read` step back over a byte the caller never saw
    /// returned. At position 0 this is a no-op.
    #[inline]
    pub fn unread(&mut self) {
        debug_assert!(self.pos > 0, "unread at start of input");
        self.pos = self.pos.saturating_sub(1);
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset (number of bytes consumed so far).
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The whole underlying buffer.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.buf
    }

    /// Bytes between `start` and the current position.
    ///
    /// # Contract
    ///
    /// `start <= self.pos()`.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} past cursor {}", self.pos);
        &self.buf[start..self.pos]
    }

    /// Consume bytes while `pred` holds for the next byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and return the next non-whitespace byte without
    /// consuming it.
    ///
    /// The whitespace itself *is* consumed. Callers that track positions see
    /// no counter updates for it.
    pub fn peek_non_space(&mut self) -> Option<u8> {
        self.eat_while(is_space);
        self.peek()
    }

    /// Consume through the next `\n` (inclusive) or to end of input.
    ///
    /// Returns `true` if a newline was consumed.
    pub fn skip_line(&mut self) -> bool {
        let remaining = &self.buf[self.pos..];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset + 1;
            true
        } else {
            self.pos = self.buf.len();
            false
        }
    }

    /// Consume through the next occurrence of `needle` (inclusive) or to end
    /// of input, returning the bytes consumed.
    pub fn skip_past(&mut self, needle: &[u8]) -> &'a [u8] {
        let start = self.pos;
        let remaining = &self.buf[start..];
        match memchr::memmem::find(remaining, needle) {
            Some(offset) => self.pos += offset + needle.len(),
            None => self.pos = self.buf.len(),
        }
        &self.buf[start..self.pos]
    }
}

#[cfg(test)]
mod tests;
