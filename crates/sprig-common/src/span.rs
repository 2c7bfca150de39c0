//! Byte spans in source text.

use std::fmt;

/// A byte offset into source text.
///
/// Offsets are stored as `u32`; anything past `u32::MAX` saturates.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(saturating_u32(pos))
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// Narrow `n` to `u32`, clamping at `u32::MAX`.
pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// A half-open byte range `start..end` in source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: BytePos,
    /// Exclusive.
    pub end: BytePos,
}

impl Span {
    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: BytePos::from(start),
            end: BytePos::from(end),
        }
    }

    /// An empty span at `pos`, used for the end-of-input token.
    pub fn point(pos: usize) -> Self {
        Span::from_usize(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The byte range, for slicing source text or handing to ariadne.
    pub fn range(&self) -> std::ops::Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_offsets_saturate() {
        assert_eq!(BytePos::from(usize::MAX), BytePos(u32::MAX));
        assert_eq!(saturating_u32(7), 7);
    }

    #[test]
    fn test_point_is_empty() {
        let span = Span::point(4);
        assert!(span.is_empty());
        assert_eq!(span.range(), 4..4);
    }
}
