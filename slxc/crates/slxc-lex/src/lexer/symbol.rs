//! Symbol scanning and keyword classification.
//!
//! An identifier-like run is accumulated and then looked up in the
//! predefined vocabulary: operator names become `Op` tokens, `def`/`alias`
//! become self-naming declaration tokens, everything else is a generic
//! `Symbol`.

use slxc_util::Position;

use crate::error::LexError;
use crate::source::CharSource;
use crate::token::{reserved, Token, TokenKind};
use crate::unicode::is_symbol_continue;
use crate::Lexer;

impl<S: CharSource> Lexer<S> {
    /// Scans a symbol and classifies it against the predefined vocabulary.
    ///
    /// Entered with the cursor on a symbol-start character. Accumulates
    /// while characters satisfy [`is_symbol_continue`], stopping at the
    /// first character outside that set or at end of input. A fault during
    /// the scan discards the partial symbol and terminates with an error.
    pub(crate) fn lex_symbol(&mut self, position: Position) -> Token {
        let mut text = String::new();
        loop {
            let Some(c) = self.cursor.current() else { break };
            text.push(c);
            self.cursor.advance();
            if !matches!(self.cursor.current(), Some(c) if is_symbol_continue(c)) {
                break;
            }
        }

        if let Some(fault) = self.cursor.take_fault() {
            return self.error(LexError::Io(fault), position);
        }

        self.skip_trivia();
        let kind = match reserved(&text) {
            Some(entry) => entry.into_kind(),
            None => TokenKind::Symbol(text),
        };
        Token::new(kind, position)
    }
}
