//! Delimited-literal scanning.
//!
//! One algorithm serves both literal forms: `"`-delimited strings and
//! `[`...`]` character sets. Only the closing delimiter and the produced
//! token kind differ; the escape grammar is shared.

use slxc_util::Position;

use crate::error::LexError;
use crate::source::CharSource;
use crate::token::{LiteralKind, Token};
use crate::unicode::hex_digit_to_value;
use crate::Lexer;

impl<S: CharSource> Lexer<S> {
    /// Scans a delimited literal, decoding escapes into `kind`'s token.
    ///
    /// The cursor rests on the opening delimiter; scanning runs to the
    /// matching unescaped closing delimiter, which is consumed along with
    /// any trailing trivia. End of input with the literal still open, a
    /// fault, or a bad escape all terminate the lexer with an error token.
    pub(crate) fn lex_delimited(&mut self, kind: LiteralKind, position: Position) -> Token {
        let end = kind.closing();

        // Shave off the opening delimiter.
        self.cursor.advance();

        let mut text = String::new();
        loop {
            match self.cursor.current() {
                Some(c) if c == end => break,
                Some('\\') => {
                    self.cursor.advance();
                    match self.lex_escape() {
                        Ok(c) => text.push(c),
                        Err(e) => return self.error(e, position),
                    }
                },
                Some(c) => text.push(c),
                None => {
                    if let Some(fault) = self.cursor.take_fault() {
                        return self.error(LexError::Io(fault), position);
                    }
                    return self.error(LexError::UnterminatedLiteral(kind), position);
                },
            }
            self.cursor.advance();
        }

        // Flush out the closing delimiter.
        self.cursor.advance();
        self.skip_trivia();
        Token::new(kind.into_kind(text), position)
    }

    /// Decodes one escape sequence.
    ///
    /// The cursor rests on the character after the backslash on entry, and
    /// on the last consumed character of the escape on success (the caller
    /// advances past it).
    fn lex_escape(&mut self) -> Result<char, LexError> {
        let c = match self.cursor.current() {
            Some(c) => c,
            None => {
                if let Some(fault) = self.cursor.take_fault() {
                    return Err(LexError::Io(fault));
                }
                return Err(LexError::PrematureEofInEscape);
            },
        };

        match c {
            // Structural characters pass through literally.
            '\\' | '[' | ']' | '"' | ';' => Ok(c),
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            'u' => self.lex_hex_escape(4),
            'x' => self.lex_hex_escape(2),
            c => Err(LexError::UnknownEscape(c)),
        }
    }

    /// Reads exactly `digits` hex digits, big-endian, into a character.
    ///
    /// `\u` values cover the full 16-bit range, which includes lone
    /// surrogates; those are not scalar values and are rejected.
    fn lex_hex_escape(&mut self, digits: u32) -> Result<char, LexError> {
        let mut code = 0u32;
        for _ in 0..digits {
            self.cursor.advance();
            let c = match self.cursor.current() {
                Some(c) => c,
                None => {
                    if let Some(fault) = self.cursor.take_fault() {
                        return Err(LexError::Io(fault));
                    }
                    return Err(LexError::PrematureEofInEscape);
                },
            };
            match hex_digit_to_value(c) {
                Some(value) => code = 0x10 * code + u32::from(value),
                None => return Err(LexError::MalformedHexEscape(c)),
            }
        }
        char::from_u32(code).ok_or(LexError::InvalidCodePoint(code))
    }
}
