//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct: lazy startup, the
//! top-level dispatch, and the terminal-error discipline.

use slxc_util::Position;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::source::CharSource;
use crate::token::{LiteralKind, Token, TokenKind};
use crate::unicode::is_symbol_start;

/// Lexer for the SLX lexer-definition language.
///
/// The lexer pulls code points from a [`CharSource`] and produces a
/// forward-only stream of [`Token`]s. Whitespace and `;` line comments are
/// elided between tokens. Every failure - I/O faults included - surfaces as
/// a single `Error`-kind token, after which the lexer treats itself as
/// exhausted and produces nothing further.
///
/// Construction performs no I/O; the first read happens on the first call to
/// [`has_next`](Lexer::has_next) or [`next_token`](Lexer::next_token).
///
/// # Example
///
/// ```
/// use slxc_lex::{Lexer, OpKind, TokenKind};
///
/// let mut lexer = Lexer::new("(cat \"a\" [0-9])".chars());
/// assert_eq!(lexer.next_token().kind, TokenKind::ParenStart);
/// assert_eq!(lexer.next_token().kind, TokenKind::Op(OpKind::Cat));
/// assert_eq!(lexer.next_token().kind, TokenKind::Str("a".to_string()));
/// assert_eq!(lexer.next_token().kind, TokenKind::CharSet("0-9".to_string()));
/// assert_eq!(lexer.next_token().kind, TokenKind::ParenEnd);
/// assert!(!lexer.has_next());
/// ```
pub struct Lexer<S> {
    /// Character cursor over the source.
    pub(crate) cursor: Cursor<S>,

    /// Whether the lazy first read has happened.
    started: bool,
}

impl<S: CharSource> Lexer<S> {
    /// Creates a lexer over the given character source.
    pub fn new(source: S) -> Self {
        Self {
            cursor: Cursor::new(source),
            started: false,
        }
    }

    /// Performs the lazy first read plus the initial trivia elision.
    ///
    /// Construction must not force I/O, so this runs on the first access
    /// instead. Afterwards the cursor rests on the first character of the
    /// first token, or on a terminal state.
    fn ensure_started(&mut self) {
        if !self.started {
            self.started = true;
            self.cursor.advance();
            self.skip_trivia();
        }
    }

    /// Returns true if another token (possibly an error token) is available.
    ///
    /// This may itself trigger the lazy first read. Once it returns false,
    /// iteration must stop; pulling more tokens is a contract violation.
    pub fn has_next(&mut self) -> bool {
        self.ensure_started();
        !self.cursor.is_eof()
    }

    /// Returns the next token from the source.
    ///
    /// Dispatches once on the current character. Each successful production
    /// ends with a trivia-elision pass, so the cursor always rests on the
    /// start of the next token when this returns. Calling this again after
    /// [`has_next`](Lexer::has_next) reported false (or after an error token
    /// was observed) yields an `Error(UnexpectedEof)` token.
    pub fn next_token(&mut self) -> Token {
        self.ensure_started();
        let position = self.cursor.position();

        let c = match self.cursor.current() {
            Some(c) => c,
            None => {
                if let Some(fault) = self.cursor.take_fault() {
                    return self.error(LexError::Io(fault), position);
                }
                return self.error(LexError::UnexpectedEof, position);
            },
        };

        match c {
            '(' => self.lex_paren(TokenKind::ParenStart, position),
            ')' => self.lex_paren(TokenKind::ParenEnd, position),
            '"' => self.lex_delimited(LiteralKind::Str, position),
            '[' => self.lex_delimited(LiteralKind::CharSet, position),
            c if is_symbol_start(c) => self.lex_symbol(position),
            // The offending character is deliberately not consumed; there is
            // no resynchronization after a lexical error.
            c => self.error(LexError::UnexpectedChar(c), position),
        }
    }

    /// Consumes a paren and elides trailing trivia.
    fn lex_paren(&mut self, kind: TokenKind, position: Position) -> Token {
        self.cursor.advance();
        self.skip_trivia();
        Token::new(kind, position)
    }

    /// Wraps an error in a token and moves to the terminal state.
    pub(crate) fn error(&mut self, error: LexError, position: Position) -> Token {
        self.cursor.terminate();
        Token::new(TokenKind::Error(error), position)
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_token())
        } else {
            None
        }
    }
}
