//! Whitespace and comment elision.
//!
//! Trivia - whitespace runs and `;` line comments - is consumed between
//! tokens and never appears in the output stream.

use crate::source::CharSource;
use crate::Lexer;

impl<S: CharSource> Lexer<S> {
    /// Skips whitespace and `;` line comments.
    ///
    /// Alternates between consuming whitespace runs and, when the cursor
    /// rests on `;`, consuming the remainder of that line. The terminating
    /// `\n` is left for the following whitespace pass, which keeps line
    /// accounting in one place. Stops at the first non-trivia character or
    /// at any terminal cursor state.
    ///
    /// Called after every token's last character, so each token production
    /// leaves the cursor on the start of the next token.
    pub(crate) fn skip_trivia(&mut self) {
        loop {
            while matches!(self.cursor.current(), Some(c) if c.is_whitespace()) {
                self.cursor.advance();
            }
            if self.cursor.current() == Some(';') {
                while matches!(self.cursor.current(), Some(c) if c != '\n') {
                    self.cursor.advance();
                }
            } else {
                break;
            }
        }
    }
}
