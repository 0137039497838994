//! slxc-lex - Lexical Analyzer for the SLX Lexer-Definition Language
//!
//! This crate tokenizes SLX, a small S-expression-style language describing
//! regular-expression-like combinators. It turns a raw character stream into
//! typed tokens for the parser/automaton builder to consume.
//!
//! # Overview
//!
//! The lexer is a hand-built state machine: strictly forward-scanning with
//! one code point of current lookahead, pulling characters lazily from any
//! [`CharSource`]. Whitespace and `;` line comments are elided between
//! tokens. I/O failures never surface as panics or `Err` returns across the
//! token boundary; they become `Error`-kind tokens, after which the lexer is
//! exhausted.
//!
//! # Example Usage
//!
//! ```
//! use slxc_lex::{Lexer, TokenKind};
//!
//! let source = r#"(def digit [0-9]) ; a single digit"#;
//! let mut lexer = Lexer::new(source.chars());
//!
//! while lexer.has_next() {
//!     let token = lexer.next_token();
//!     if token.is_error() {
//!         break;
//!     }
//!     println!("{:?} at {:?}", token.kind, token.position);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the predefined vocabulary
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor with explicit terminal states
//! - [`source`] - Character sources (in-memory and UTF-8 readers)
//! - [`error`] - The lexical error taxonomy
//! - [`unicode`] - Character classification helpers
//!
//! # Lexical Grammar
//!
//! | Form | Surface |
//! |------|---------|
//! | Structural | `(`, `)` |
//! | String literal | `"` ... `"` with escapes |
//! | Character-set literal | `[` ... `]` with escapes |
//! | Symbol | `[A-Za-z+*%&?_\-$!][A-Za-z0-9+*%&?_\-$!'/]*` |
//! | Operators | `or` `cat` `star` `plus` `opt` `not` |
//! | Declarations | `def` `alias` |
//! | Comment | `;` to end of line |
//! | Whitespace | any Unicode whitespace |
//!
//! Escapes inside both literal forms: `\\` `\[` `\]` `\"` `\;` pass through,
//! `\n` `\t` `\r` name controls, `\xNN` is a two-digit hex escape, and
//! `\uNNNN` a four-digit one.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, CursorState};
pub use error::LexError;
pub use lexer::Lexer;
pub use source::{CharSource, Utf8Reader};
pub use token::{reserved, DeclKind, LiteralKind, OpKind, Reserved, Token, TokenKind};
