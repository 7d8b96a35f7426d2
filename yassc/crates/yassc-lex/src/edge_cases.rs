//! Edge case tests for yassc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_with, IndentMode, LexConfig, LexError, TokenKind};
    use proptest::prelude::*;
    use yassc_util::Position;

    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source)
            .unwrap()
            .iter()
            .map(|t| (t.kind, t.lexeme(source)))
            .collect()
    }

    // ==================== SCENARIOS ====================

    #[test]
    fn test_edge_assignment_with_decimal() {
        assert_eq!(
            lex_all("x = 3.14\n"),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Assignment, "="),
                (TokenKind::Decimal, "3.14"),
                (TokenKind::SentenceBreak, "\n"),
            ]
        );
    }

    #[test]
    fn test_edge_unclosed_string_at_newline() {
        assert_eq!(
            tokenize("\"abc\n").unwrap_err(),
            LexError::UnterminatedString {
                position: Position::new(1, 5, 4)
            }
        );
    }

    #[test]
    fn test_edge_number_touching_letter() {
        assert_eq!(
            tokenize("5x").unwrap_err(),
            LexError::NumberLetterAdjacency {
                found: 'x',
                position: Position::new(1, 2, 1)
            }
        );
    }

    #[test]
    fn test_edge_double_point_is_always_multiple_points() {
        for source in ["..", "..5", "x = ..", "1.."] {
            assert!(
                matches!(
                    tokenize(source).unwrap_err(),
                    LexError::MultipleDecimalPoints { .. }
                ),
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_edge_if_statement() {
        assert_eq!(
            lex_all("IF a == 1 THEN\n"),
            vec![
                (TokenKind::ReservedWord, "IF"),
                (TokenKind::Identifier, "a"),
                (TokenKind::Equality, "=="),
                (TokenKind::Integer, "1"),
                (TokenKind::ReservedWord, "THEN"),
                (TokenKind::SentenceBreak, "\n"),
            ]
        );
    }

    #[test]
    fn test_edge_comment_touching_word() {
        assert!(matches!(
            tokenize("~ note ~x").unwrap_err(),
            LexError::NoConcatViolation { found: 'x', .. }
        ));
    }

    // ==================== WORDS ====================

    #[test]
    fn test_edge_foreach_is_one_identifier() {
        assert_eq!(
            lex_all("FOREACH"),
            vec![
                (TokenKind::Identifier, "FOREACH"),
                (TokenKind::SentenceBreak, ""),
            ]
        );
    }

    #[test]
    fn test_edge_keyword_case() {
        let kinds: Vec<_> = lex_all("IF if If").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ReservedWord,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::SentenceBreak,
            ]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = tokenize(&name).unwrap();
        assert_eq!(tokens[0].length, 10_000);
        assert_eq!(tokens[1].location.offset, 10_000);
    }

    // ==================== LAYOUT ====================

    #[test]
    fn test_edge_eof_break_position_on_second_line() {
        let tokens = tokenize("a\nbc").unwrap();
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::SentenceBreak);
        assert_eq!(eof.location, Position::new(2, 3, 4));
        assert_eq!(eof.length, 1);
    }

    #[test]
    fn test_edge_indent_after_blank_line() {
        let kinds: Vec<_> = lex_all("\n  x").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::SentenceBreak,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::SentenceBreak,
            ]
        );
    }

    #[test]
    fn test_edge_string_then_comment() {
        let source = "OUTPUT \"hi\" ~ greet ~\n";
        let kinds: Vec<_> = lex_all(source).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ReservedWord,
                TokenKind::StrDelimiter,
                TokenKind::String,
                TokenKind::StrDelimiter,
                TokenKind::Comment,
                TokenKind::SentenceBreak,
            ]
        );
    }

    #[test]
    fn test_edge_tilde_inside_string_is_text() {
        let source = "\"a ~ b\"";
        assert_eq!(lex_all(source)[1], (TokenKind::String, "a ~ b"));
    }

    #[test]
    fn test_edge_quote_inside_comment_is_text() {
        let source = "~ say \"hi ~";
        assert_eq!(lex_all(source)[0], (TokenKind::Comment, source));
    }

    #[test]
    fn test_edge_first_error_wins() {
        assert!(matches!(
            tokenize("# \"open").unwrap_err(),
            LexError::UnknownSymbol { found: '#', .. }
        ));
    }

    #[test]
    fn test_edge_marker_and_width_agree_on_kinds() {
        let source = "IF x THEN\n    OUTPUT x\n";
        let width = tokenize(source).unwrap();
        let marker =
            tokenize_with(source, &LexConfig::default().with_indent(IndentMode::Marker)).unwrap();
        assert!(width.kinds().eq(marker.kinds()));
        assert_eq!(width[4].length, 4);
        assert_eq!(marker[4].length, 1);
    }

    // ==================== PROPERTIES ====================

    const YASSOU_CHARS: &str = "[a-zA-Z0-9_ \t\n\".~=<>!/+*(),%^|&#\\\\-]{0,80}";

    proptest! {
        #[test]
        fn prop_never_panics(source in any::<String>()) {
            let _ = tokenize(&source);
        }

        #[test]
        fn prop_deterministic(source in YASSOU_CHARS) {
            prop_assert_eq!(tokenize(&source), tokenize(&source));
        }

        #[test]
        fn prop_stream_shape(source in YASSOU_CHARS) {
            if let Ok(tokens) = tokenize(&source) {
                prop_assert!(!tokens.is_empty());
                prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::SentenceBreak));
                for token in &tokens {
                    prop_assert!(token.length >= 1);
                }
                for pair in tokens.as_slice().windows(2) {
                    prop_assert!(pair[0].location.offset < pair[1].location.offset);
                    prop_assert!(pair[0].end() <= pair[1].location.offset);
                }
            }
        }

        #[test]
        fn prop_breaks_match_newlines(source in "[a-z \n]{0,80}") {
            let tokens = tokenize(&source).unwrap();
            let newline_breaks = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::SentenceBreak && t.location.offset < source.len())
                .count();
            prop_assert_eq!(newline_breaks, source.matches('\n').count());
        }

        #[test]
        fn prop_errors_point_into_source(source in YASSOU_CHARS) {
            if let Err(err) = tokenize(&source) {
                prop_assert!(err.position().offset <= source.len());
            }
        }

        #[test]
        fn prop_identifier_lexeme_roundtrip(word in "[a-z][a-z0-9_]{0,20}") {
            let tokens = tokenize(&word).unwrap();
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
            prop_assert_eq!(tokens[0].lexeme(&word), word.as_str());
        }
    }
}
