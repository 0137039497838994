//! Token definitions for the SLX lexer.
//!
//! A [`Token`] is one classified lexical unit: a [`TokenKind`] plus the
//! position where its first character sat. Operator and declaration names are
//! closed enums compared by value ([`OpKind`], [`DeclKind`]); the predefined
//! vocabulary mapping source text to those names is built once, lazily, and
//! read-only thereafter.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use slxc_util::Position;

use crate::error::LexError;

/// A combinator operator name.
///
/// # Example
///
/// ```
/// use slxc_lex::token::OpKind;
///
/// assert_eq!(OpKind::Cat.as_str(), "cat");
/// assert_eq!(OpKind::Star.to_string(), "star");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Alternation: `or`.
    Or,
    /// Concatenation: `cat`.
    Cat,
    /// Zero-or-more repetition: `star`.
    Star,
    /// One-or-more repetition: `plus`.
    Plus,
    /// Zero-or-one: `opt`.
    Opt,
    /// Complement: `not`.
    Not,
}

impl OpKind {
    /// Every operator, in vocabulary order.
    pub const ALL: [OpKind; 6] = [
        OpKind::Or,
        OpKind::Cat,
        OpKind::Star,
        OpKind::Plus,
        OpKind::Opt,
        OpKind::Not,
    ];

    /// The canonical source-text name of this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            OpKind::Or => "or",
            OpKind::Cat => "cat",
            OpKind::Star => "star",
            OpKind::Plus => "plus",
            OpKind::Opt => "opt",
            OpKind::Not => "not",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declaration keyword name.
///
/// These tokens are self-naming: the kind and the payload are the same
/// datum, so the variant carries nothing but the canonical name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// A lexeme definition: `def`.
    Def,
    /// A name for an existing definition: `alias`.
    Alias,
}

impl DeclKind {
    /// Every declaration keyword.
    pub const ALL: [DeclKind; 2] = [DeclKind::Def, DeclKind::Alias];

    /// The canonical source-text name of this keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclKind::Def => "def",
            DeclKind::Alias => "alias",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which delimited literal form is being scanned or reported on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// A `"`-delimited string literal.
    Str,
    /// A `[`...`]` character-set literal.
    CharSet,
}

impl LiteralKind {
    /// The closing delimiter this literal form scans toward.
    pub const fn closing(self) -> char {
        match self {
            LiteralKind::Str => '"',
            LiteralKind::CharSet => ']',
        }
    }

    /// Wraps decoded literal text in this form's token kind.
    pub fn into_kind(self, text: String) -> TokenKind {
        match self {
            LiteralKind::Str => TokenKind::Str(text),
            LiteralKind::CharSet => TokenKind::CharSet(text),
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::Str => "string",
            LiteralKind::CharSet => "char set",
        })
    }
}

/// The closed set of token classifications.
#[derive(Debug, PartialEq)]
pub enum TokenKind {
    /// A terminal lexical error; see [`LexError`].
    Error(LexError),
    /// `(`.
    ParenStart,
    /// `)`.
    ParenEnd,
    /// A predefined combinator operator.
    Op(OpKind),
    /// An identifier that matched nothing in the predefined vocabulary.
    Symbol(String),
    /// A decoded `[`...`]` character-set literal.
    CharSet(String),
    /// A decoded `"`-delimited string literal.
    Str(String),
    /// A self-naming declaration keyword (`def` or `alias`).
    Decl(DeclKind),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Error(e) => write!(f, "error: {e}"),
            TokenKind::ParenStart => f.write_str("'('"),
            TokenKind::ParenEnd => f.write_str("')'"),
            TokenKind::Op(op) => write!(f, "operator '{op}'"),
            TokenKind::Symbol(s) => write!(f, "symbol '{s}'"),
            TokenKind::CharSet(_) => f.write_str("char set"),
            TokenKind::Str(_) => f.write_str("string"),
            TokenKind::Decl(d) => write!(f, "keyword '{d}'"),
        }
    }
}

/// One classified lexical unit.
///
/// Tokens are pure values: once returned by the lexer they never change.
/// `position` is the line/column where the token's first character sat,
/// captured after any preceding whitespace and comments were elided.
#[derive(Debug, PartialEq)]
pub struct Token {
    /// The classification and payload.
    pub kind: TokenKind,
    /// Start of the token in the source, when known.
    pub position: Option<Position>,
}

impl Token {
    /// Creates a token at the given position.
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    /// Returns true if this token reports a terminal lexical error.
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    /// Discards the position, leaving just the classification.
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }
}

/// A vocabulary entry: what a predefined name classifies as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reserved {
    /// One of the six combinator operators.
    Op(OpKind),
    /// One of the two declaration keywords.
    Decl(DeclKind),
}

impl Reserved {
    /// Converts the entry into the token kind it stands for.
    pub fn into_kind(self) -> TokenKind {
        match self {
            Reserved::Op(op) => TokenKind::Op(op),
            Reserved::Decl(d) => TokenKind::Decl(d),
        }
    }
}

/// Looks up an identifier in the predefined vocabulary.
///
/// The table is built on first use and immutable afterwards. Lookup is exact
/// string match; anything absent becomes a generic symbol.
///
/// # Example
///
/// ```
/// use slxc_lex::token::{reserved, OpKind, Reserved};
///
/// assert_eq!(reserved("cat"), Some(Reserved::Op(OpKind::Cat)));
/// assert_eq!(reserved("foo"), None);
/// ```
pub fn reserved(text: &str) -> Option<Reserved> {
    static TABLE: OnceLock<FxHashMap<&'static str, Reserved>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut map = FxHashMap::default();
        for op in OpKind::ALL {
            map.insert(op.as_str(), Reserved::Op(op));
        }
        for decl in DeclKind::ALL {
            map.insert(decl.as_str(), Reserved::Decl(decl));
        }
        map
    });
    table.get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_is_reserved() {
        for op in OpKind::ALL {
            assert_eq!(reserved(op.as_str()), Some(Reserved::Op(op)));
        }
    }

    #[test]
    fn test_every_declaration_is_reserved() {
        for decl in DeclKind::ALL {
            assert_eq!(reserved(decl.as_str()), Some(Reserved::Decl(decl)));
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert_eq!(reserved("Cat"), None);
        assert_eq!(reserved("cats"), None);
        assert_eq!(reserved("ca"), None);
        assert_eq!(reserved(""), None);
        assert_eq!(reserved(" cat"), None);
    }

    #[test]
    fn test_decl_is_self_naming() {
        let kind = Reserved::Decl(DeclKind::Def).into_kind();
        assert_eq!(kind, TokenKind::Decl(DeclKind::Def));
        assert_eq!(DeclKind::Def.as_str(), "def");
        assert_eq!(DeclKind::Alias.as_str(), "alias");
    }

    #[test]
    fn test_literal_kind_delimiters() {
        assert_eq!(LiteralKind::Str.closing(), '"');
        assert_eq!(LiteralKind::CharSet.closing(), ']');
        assert_eq!(
            LiteralKind::Str.into_kind("ab".to_string()),
            TokenKind::Str("ab".to_string())
        );
        assert_eq!(
            LiteralKind::CharSet.into_kind("a-z".to_string()),
            TokenKind::CharSet("a-z".to_string())
        );
    }

    #[test]
    fn test_token_helpers() {
        let token = Token::new(TokenKind::ParenStart, Position::new(1, 0));
        assert!(!token.is_error());
        assert_eq!(token.position, Some(Position::new(1, 0)));
        assert_eq!(token.into_kind(), TokenKind::ParenStart);

        let err = Token::new(
            TokenKind::Error(LexError::UnexpectedChar('#')),
            Position::new(2, 4),
        );
        assert!(err.is_error());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::ParenStart.to_string(), "'('");
        assert_eq!(TokenKind::Op(OpKind::Or).to_string(), "operator 'or'");
        assert_eq!(
            TokenKind::Symbol("ident".to_string()).to_string(),
            "symbol 'ident'"
        );
        assert_eq!(TokenKind::Decl(DeclKind::Alias).to_string(), "keyword 'alias'");
    }
}
