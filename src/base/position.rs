//! Position tracking for tokens and syntax nodes
//!
//! Stores the source location (line/column) of every node so editor features
//! like completion and hover can map a cursor back into the tree.

use std::fmt;

/// A span representing a range in source code (0-indexed, end exclusive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed)
///
/// Columns count Unicode scalar values; a `\n` moves to the next line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this span, end exclusive
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    /// Check if a position falls within this span or sits right at its end
    pub fn touches(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position reached after walking over `text` from `self`
    pub fn advance(self, text: &str) -> Self {
        text.chars().fold(self, |pos, c| {
            if c == '\n' {
                Position::new(pos.line + 1, 0)
            } else {
                Position::new(pos.line, pos.column + 1)
            }
        })
    }
}
