//! Edge case tests for slxc-lex

#[cfg(test)]
mod tests {
    use crate::{DeclKind, LexError, Lexer, OpKind, Token, TokenKind};
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<TokenKind> {
        Lexer::new(source.chars()).map(Token::into_kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_nested_parens() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| **x == TokenKind::ParenStart).count(), 3);
        assert_eq!(t.iter().filter(|x| **x == TokenKind::ParenEnd).count(), 3);
    }

    #[test]
    fn test_edge_long_symbol() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t, vec![TokenKind::Symbol(name)]);
    }

    #[test]
    fn test_edge_adjacent_literals() {
        let t = lex_all(r#""a""b"[c][d]"#);
        assert_eq!(
            t,
            vec![
                TokenKind::Str("a".to_string()),
                TokenKind::Str("b".to_string()),
                TokenKind::CharSet("c".to_string()),
                TokenKind::CharSet("d".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_symbol_hugging_paren() {
        let t = lex_all("(star)");
        assert_eq!(
            t,
            vec![
                TokenKind::ParenStart,
                TokenKind::Op(OpKind::Star),
                TokenKind::ParenEnd,
            ]
        );
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Def def");
        assert_eq!(t[0], TokenKind::Symbol("Def".to_string()));
        assert_eq!(t[1], TokenKind::Decl(DeclKind::Def));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("def\r\nalias");
        assert_eq!(t[0], TokenKind::Decl(DeclKind::Def));
        assert_eq!(t[1], TokenKind::Decl(DeclKind::Alias));
    }

    #[test]
    fn test_edge_comment_then_token_same_stream() {
        let t = lex_all("; header\n(or)");
        assert_eq!(
            t,
            vec![
                TokenKind::ParenStart,
                TokenKind::Op(OpKind::Or),
                TokenKind::ParenEnd,
            ]
        );
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("def\talias\u{00A0}or");
        assert_eq!(t.len(), 3);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_digit_cannot_start_token() {
        let t = lex_all("1foo");
        assert_eq!(t, vec![TokenKind::Error(LexError::UnexpectedChar('1'))]);
    }

    #[test]
    fn test_err_stray_close_bracket() {
        let t = lex_all("]");
        assert_eq!(t, vec![TokenKind::Error(LexError::UnexpectedChar(']'))]);
    }

    #[test]
    fn test_err_stray_backslash() {
        let t = lex_all("\\n");
        assert_eq!(t, vec![TokenKind::Error(LexError::UnexpectedChar('\\'))]);
    }

    #[test]
    fn test_err_nothing_after_error_token() {
        let t = lex_all("# (def a)");
        assert_eq!(t.len(), 1);
        assert!(matches!(t[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_err_unterminated_literal_ends_stream() {
        let t = lex_all("(cat \"abc");
        assert_eq!(t.len(), 3);
        assert!(matches!(t[2], TokenKind::Error(_)));
    }

    // ==================== PROPERTIES ====================

    /// Token texts that stay the same regardless of surrounding trivia.
    const TOKENS: &[&str] = &[
        "(",
        ")",
        "foo",
        "bar7",
        "def",
        "alias",
        "cat",
        "star",
        "not",
        "\"a b\"",
        "\"\\x41\"",
        "[0-9]",
        "[\\]]",
        "+-?",
    ];

    /// Trivia separators: each contains whitespace, and comments always end
    /// in a newline so they cannot swallow the next token.
    const SEPARATORS: &[&str] = &[
        " ",
        "  ",
        "\t",
        "\n",
        "\r\n",
        " \t \n ",
        "; comment\n",
        " ;; note \n\t",
        "\n;\n",
    ];

    proptest! {
        /// Inserting arbitrary extra whitespace/comments between tokens
        /// never changes the token values, only their positions.
        #[test]
        fn prop_trivia_insertion_preserves_tokens(
            picks in prop::collection::vec(
                (0..TOKENS.len(), 0..SEPARATORS.len()),
                0..12,
            ),
            leading in 0..SEPARATORS.len(),
        ) {
            let mut padded = String::from(SEPARATORS[leading]);
            let mut plain = String::new();
            for &(token, sep) in &picks {
                padded.push_str(TOKENS[token]);
                padded.push_str(SEPARATORS[sep]);
                plain.push_str(TOKENS[token]);
                plain.push(' ');
            }
            prop_assert_eq!(lex_all(&padded), lex_all(&plain));
        }

        /// Streams of nothing but trivia produce no tokens at all.
        #[test]
        fn prop_trivia_only_stream_is_empty(
            seps in prop::collection::vec(0..SEPARATORS.len(), 0..10),
        ) {
            let source: String = seps.iter().map(|&i| SEPARATORS[i]).collect();
            prop_assert!(lex_all(&source).is_empty());
            prop_assert!(!Lexer::new(source.chars()).has_next());
        }
    }
}
