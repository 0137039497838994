//! Character classification for the SLX lexer.
//!
//! This module provides the predicates that decide where symbols start and
//! end, and the hex-digit conversion used by `\x` and `\u` escapes.

/// The punctuation allowed to start a symbol, in addition to letters.
const SYMBOL_START_PUNCT: &str = "+*%&?_-$!";

/// The punctuation allowed inside a symbol: the start set plus `'` and `/`.
const SYMBOL_CONTINUE_PUNCT: &str = "+*%&?_-$!'/";

/// Checks if a character can start a symbol.
///
/// Valid symbol start characters are Unicode letters and the punctuation set
/// `+ * % & ? _ - $ !`.
///
/// # Example
///
/// ```
/// use slxc_lex::unicode::is_symbol_start;
///
/// assert!(is_symbol_start('a'));
/// assert!(is_symbol_start('?'));
/// assert!(is_symbol_start('-'));
/// assert!(!is_symbol_start('1'));
/// assert!(!is_symbol_start('('));
/// ```
pub fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || SYMBOL_START_PUNCT.contains(c)
}

/// Checks if a character can continue a symbol.
///
/// Valid continuation characters are Unicode letters and digits, the symbol
/// start punctuation, and additionally `'` and `/`.
///
/// # Example
///
/// ```
/// use slxc_lex::unicode::is_symbol_continue;
///
/// assert!(is_symbol_continue('a'));
/// assert!(is_symbol_continue('7'));
/// assert!(is_symbol_continue('\''));
/// assert!(is_symbol_continue('/'));
/// assert!(!is_symbol_continue(' '));
/// assert!(!is_symbol_continue(')'));
/// ```
pub fn is_symbol_continue(c: char) -> bool {
    c.is_alphanumeric() || SYMBOL_CONTINUE_PUNCT.contains(c)
}

/// Converts a hex character to its numeric value.
///
/// # Returns
///
/// The value (0-15) for `0-9`, `a-f`, `A-F`; `None` otherwise.
///
/// # Example
///
/// ```
/// use slxc_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value('0'), Some(0));
/// assert_eq!(hex_digit_to_value('a'), Some(10));
/// assert_eq!(hex_digit_to_value('F'), Some(15));
/// assert_eq!(hex_digit_to_value('g'), None);
/// ```
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}
