//! Span module - Source location tracking.
//!
//! This module provides the [`Position`] type used by every compiler phase
//! to point at a place in SLX source text. The lexer stamps each token with
//! the position of its first character; downstream phases carry those
//! positions into their own diagnostics.
//!
//! # Examples
//!
//! ```
//! use slxc_util::span::Position;
//!
//! let pos = Position::new(3, 7);
//! assert_eq!(pos.line, 3);
//! assert_eq!(pos.column, 7);
//! ```

use std::fmt;

/// A line/column position in source text.
///
/// Lines are 1-based. Columns are 0-based: the first character on each line
/// is at column 0. SLX sources are read from streams rather than in-memory
/// buffers, so there is no byte offset; the position is the whole story.
///
/// # Examples
///
/// ```
/// use slxc_util::span::Position;
///
/// let start = Position::START;
/// assert_eq!(start, Position::new(1, 0));
///
/// // Positions order by line, then column.
/// assert!(Position::new(1, 9) < Position::new(2, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (0-based, in characters).
    pub column: u32,
}

impl Position {
    /// The position of the first character of a source: line 1, column 0.
    pub const START: Position = Position { line: 1, column: 0 };

    /// Creates a position from a line and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use slxc_util::span::Position;
    ///
    /// let pos = Position::new(1, 0);
    /// assert_eq!(pos, Position::START);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
