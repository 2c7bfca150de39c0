//! Line/column positions.

use std::fmt;

use crate::BytePos;
use crate::span::saturating_u32;

/// A 1-based line and column in source text.
///
/// Columns count characters, so a multi-byte character advances the column
/// by one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of a file.
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        debug_assert!(line >= 1 && column >= 1, "positions are 1-based");
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets in one source text to line/column positions.
pub struct LineIndex<'src> {
    source: &'src str,
    /// Byte offset at which each line starts. Always begins with 0.
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(pos, _)| pos + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Position of the character starting at `offset`.
    ///
    /// Offsets past the end of the source resolve to the position just after
    /// the last character.
    pub fn position(&self, offset: impl Into<BytePos>) -> Position {
        let offset = usize::from(offset.into()).min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count());

        Position::new(
            saturating_u32(line).saturating_add(1),
            saturating_u32(column).saturating_add(1),
        )
    }
}
