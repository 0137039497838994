//! Lexical error types.
//!
//! Every error the lexer can hit is a [`LexError`]. Errors never cross the
//! token-stream boundary as panics or `Result`s: the lexer wraps the error in
//! a single `Error`-kind token, hands it to the caller, and treats itself as
//! exhausted from then on.

use std::io;

use thiserror::Error;

use crate::token::LiteralKind;

/// A lexical error, carried by an `Error`-kind token.
///
/// All variants are terminal: after producing one, the lexer yields no
/// further tokens.
#[derive(Debug, Error)]
pub enum LexError {
    /// The underlying character source failed.
    #[error("I/O error while reading source: {0}")]
    Io(#[from] io::Error),

    /// End of input where a token was demanded. Only reachable by pulling a
    /// token after the stream already reported itself exhausted.
    #[error("unexpectedly found end of input")]
    UnexpectedEof,

    /// A character that cannot start any token.
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),

    /// End of input with a string or char-set literal still open.
    #[error("found end of input, but {0} is still open")]
    UnterminatedLiteral(LiteralKind),

    /// End of input inside an escape sequence, either directly after the
    /// backslash or among the hex digits of `\x`/`\u`.
    #[error("end of input in the middle of an escape sequence")]
    PrematureEofInEscape,

    /// Something other than a hex digit where `\x`/`\u` required one.
    #[error("malformed hex escape: expected a hexadecimal digit, but '{0}' was given")]
    MalformedHexEscape(char),

    /// An unrecognized character after a backslash.
    #[error("unknown escaped character after backslash ('{0}')")]
    UnknownEscape(char),

    /// A `\u` escape naming a value that is not a Unicode scalar value
    /// (a lone surrogate).
    #[error("escape does not name a valid character: U+{0:04X}")]
    InvalidCodePoint(u32),
}

// io::Error carries no useful equality, so faults compare by kind. Everything
// else compares structurally. Used by token assertions in tests and by any
// consumer that wants to match on specific errors.
impl PartialEq for LexError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LexError::Io(a), LexError::Io(b)) => a.kind() == b.kind(),
            (LexError::UnexpectedEof, LexError::UnexpectedEof) => true,
            (LexError::UnexpectedChar(a), LexError::UnexpectedChar(b)) => a == b,
            (LexError::UnterminatedLiteral(a), LexError::UnterminatedLiteral(b)) => a == b,
            (LexError::PrematureEofInEscape, LexError::PrematureEofInEscape) => true,
            (LexError::MalformedHexEscape(a), LexError::MalformedHexEscape(b)) => a == b,
            (LexError::UnknownEscape(a), LexError::UnknownEscape(b)) => a == b,
            (LexError::InvalidCodePoint(a), LexError::InvalidCodePoint(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            LexError::UnexpectedChar('#').to_string(),
            "unexpected character: '#'"
        );
        assert_eq!(
            LexError::UnterminatedLiteral(LiteralKind::Str).to_string(),
            "found end of input, but string is still open"
        );
        assert_eq!(
            LexError::UnterminatedLiteral(LiteralKind::CharSet).to_string(),
            "found end of input, but char set is still open"
        );
        assert_eq!(
            LexError::MalformedHexEscape('Z').to_string(),
            "malformed hex escape: expected a hexadecimal digit, but 'Z' was given"
        );
        assert_eq!(
            LexError::UnknownEscape('q').to_string(),
            "unknown escaped character after backslash ('q')"
        );
        assert_eq!(
            LexError::InvalidCodePoint(0xD800).to_string(),
            "escape does not name a valid character: U+D800"
        );
    }

    #[test]
    fn test_io_errors_compare_by_kind() {
        let a = LexError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "first"));
        let b = LexError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "second"));
        let c = LexError::Io(io::Error::new(io::ErrorKind::NotFound, "third"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_distinct_variants_unequal() {
        assert_ne!(LexError::UnexpectedEof, LexError::PrematureEofInEscape);
        assert_ne!(
            LexError::UnknownEscape('u'),
            LexError::MalformedHexEscape('u')
        );
    }
}
