//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, lazy startup, and dispatch
//! - `delimited` - The shared string / char-set literal scanner and escapes
//! - `symbol` - Symbol scanning and keyword classification
//! - `trivia` - Whitespace and comment elision

mod core;
mod delimited;
mod symbol;
mod trivia;

pub use self::core::Lexer;
