/// An immutable position in the input text.
///
/// A cursor is `Copy` and every operation returns a new cursor, so saving a
/// position for backtracking is just keeping the old value around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte offset into `source`, always on a char boundary
    offset: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// The complete input this cursor points into
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Byte offset from the start of the input
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The unconsumed suffix of the input
    pub fn remainder(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// Returns a cursor `n` bytes further along.
    ///
    /// The caller must make sure the new offset is within the input and on a
    /// char boundary.
    pub fn advance(self, n: usize) -> Self {
        let offset = self.offset + n;
        debug_assert!(self.source.is_char_boundary(offset));
        Cursor {
            source: self.source,
            offset,
        }
    }

    /// Decodes the next code point, returning it together with the cursor
    /// positioned after it. Returns `None` at end of input.
    pub fn next_char(self) -> Option<(char, Self)> {
        let ch = self.remainder().chars().next()?;
        Some((ch, self.advance(ch.len_utf8())))
    }
}
