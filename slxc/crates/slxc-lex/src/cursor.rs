//! Character cursor for traversing SLX source.
//!
//! This module provides the [`Cursor`] struct, which pulls one code point at
//! a time from a [`CharSource`] and tracks line/column information for error
//! reporting. "Not yet started", "end of input", and "I/O fault" are explicit
//! [`CursorState`] variants rather than in-band sentinel values, so they can
//! never collide with real code points.

use std::io;
use std::mem;

use slxc_util::Position;

use crate::source::CharSource;

/// What the cursor currently rests on.
///
/// The lexer dispatches on this. `Fault` retains the originating error until
/// the lexer takes it for reporting; after that (and after any terminal
/// lexical error) the state is permanently [`CursorState::Eof`].
#[derive(Debug)]
pub enum CursorState {
    /// No read has happened yet; the first `advance` is pending.
    Pending,
    /// Resting on a code point.
    At(char),
    /// The source is exhausted.
    Eof,
    /// The source failed; the error is held here until reported.
    Fault(io::Error),
}

/// A cursor for traversing source one code point at a time.
///
/// The cursor owns its [`CharSource`] and maintains the position of the code
/// point it currently rests on. Lines are 1-based; columns are 0-based and
/// reset when a newline is consumed. There is no lookahead beyond the current
/// code point and no rewinding.
///
/// # Example
///
/// ```
/// use slxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab".chars());
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('b'));
/// cursor.advance();
/// assert_eq!(cursor.current(), None);
/// ```
pub struct Cursor<S> {
    /// The character source being traversed.
    source: S,

    /// State after the most recent `advance`.
    state: CursorState,

    /// Line of the current code point (1-based).
    line: u32,

    /// Column of the current code point (0-based).
    column: u32,
}

impl<S: CharSource> Cursor<S> {
    /// Creates a cursor over the given source.
    ///
    /// No read is performed here; the cursor starts in
    /// [`CursorState::Pending`] and the first [`advance`](Cursor::advance)
    /// happens when the caller asks for it.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: CursorState::Pending,
            line: 1,
            column: 0,
        }
    }

    /// Attempts to pull the next code point from the source.
    ///
    /// On success the state becomes `At(c)` and line/column are updated: the
    /// column advances by one, except that the code point following a `\n`
    /// starts the next line at column 0. End of input becomes `Eof`; an I/O
    /// failure becomes `Fault` and retains the error. Never panics, and does
    /// nothing once the state is `Eof` or `Fault`.
    pub fn advance(&mut self) {
        let (started, after_newline) = match self.state {
            CursorState::Pending => (false, false),
            CursorState::At(c) => (true, c == '\n'),
            // Terminal states stay terminal; the source is not read again.
            CursorState::Eof | CursorState::Fault(_) => return,
        };

        match self.source.next_char() {
            Ok(Some(c)) => {
                if after_newline {
                    self.line += 1;
                    self.column = 0;
                } else if started {
                    self.column += 1;
                }
                self.state = CursorState::At(c);
            },
            Ok(None) => self.state = CursorState::Eof,
            Err(e) => self.state = CursorState::Fault(e),
        }
    }

    /// Returns the current code point, or `None` in any non-character state.
    #[inline]
    pub fn current(&self) -> Option<char> {
        match self.state {
            CursorState::At(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// Returns true if the source is exhausted.
    pub fn is_eof(&self) -> bool {
        matches!(self.state, CursorState::Eof)
    }

    /// Takes the retained I/O error out of a `Fault` state, leaving the
    /// cursor at `Eof`. Returns `None` in every other state.
    pub fn take_fault(&mut self) -> Option<io::Error> {
        match mem::replace(&mut self.state, CursorState::Eof) {
            CursorState::Fault(e) => Some(e),
            other => {
                self.state = other;
                None
            },
        }
    }

    /// Forces the cursor into the terminal `Eof` state.
    ///
    /// Used by the lexer after a terminal lexical error; from here on,
    /// `advance` is a no-op and no further code points are produced.
    pub fn terminate(&mut self) {
        self.state = CursorState::Eof;
    }

    /// Returns the line of the current code point (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the current code point (0-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the position of the current code point.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}
