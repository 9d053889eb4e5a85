//! rillc-lex - Lexical Analyzer for the Rill Programming Language
//!
//! This crate provides the scanner for Rill, a small C-like language.
//! It transforms source text into a stream of classified, span-tagged
//! tokens that a future parser consumes.
//!
//! # Overview
//!
//! The scanner is pull-based: construct a [`Lexer`] over the full
//! source text and call [`Lexer::next_token`] repeatedly (or use the
//! `Iterator` impl). Each call skips whitespace and comments, then
//! recognizes exactly one token. At end of input it returns `None`,
//! and keeps returning `None` on every later call.
//!
//! Lexical errors do not abort scanning. They come back in-band as
//! [`Token::Error`] values carrying the offending substring, and the
//! scanner always advances past the bad region, so a consumer can
//! collect every lexical error in one pass.
//!
//! # Example Usage
//!
//! ```
//! use rillc_lex::{Lexer, Token};
//!
//! let source = "while (n) { n -= 1; }";
//! for token in Lexer::new(source) {
//!     println!("{:?} at {}", token, token.span());
//! }
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert!(matches!(lexer.next_token(), Some(Token::Keyword { .. })));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Scanner implementation (dispatch, skipper, recognizers)
//! - [`cursor`] - Character cursor and span builder
//! - [`unicode`] - Character classification helpers
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `while`
//!
//! ## Identifiers
//!
//! Underscore or letter followed by letters, digits, underscores.
//!
//! ## Number Literals
//!
//! - Decimal: `0`, `42` (no leading zeros)
//! - Hexadecimal: `0x1A3`, `0XFF`
//!
//! ## Operators
//!
//! `-`, `+`, `*`, `/`, `%`, their compound-assignment forms `-=`,
//! `+=`, `*=`, `/=`, `%=`, and plain assignment `=`.
//!
//! ## Separators
//!
//! `(`, `)`, `{`, `}`, `;`
//!
//! ## Errors
//!
//! Unterminated block comments, unrecognized characters, `0x` with no
//! digits, and decimal literals with a leading zero.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
mod edge_cases;
pub mod lexer;
pub mod token;
pub mod unicode;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{
    keyword_from_ident, KeywordKind, LexErrorKind, NumberBase, OperatorKind, SeparatorKind, Token,
};
pub use unicode::{is_digit, is_hex_digit, is_ident_char};

#[cfg(test)]
mod tests {
    use super::*;
    use rillc_util::Span;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_compound_minus_scenario() {
        let tokens = lex_all("-=");
        assert_eq!(
            tokens,
            vec![Token::Operator {
                kind: OperatorKind::AssignMinus,
                span: Span::new(0, 0, 0, 2),
            }]
        );
    }

    #[test]
    fn test_hex_literal_scenario() {
        let tokens = lex_all("0x1A3");
        assert_eq!(
            tokens,
            vec![Token::Number {
                text: "0x1A3".to_string(),
                base: NumberBase::Hexadecimal,
                span: Span::new(0, 0, 0, 5),
            }]
        );
    }

    #[test]
    fn test_leading_zero_scenario() {
        let tokens = lex_all("007");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_error());
        assert_eq!(tokens[0].span(), Span::new(0, 0, 0, 3));
    }

    #[test]
    fn test_keyword_versus_identifier_scenario() {
        let tokens = lex_all("if");
        assert!(matches!(
            tokens[0],
            Token::Keyword {
                kind: KeywordKind::If,
                ..
            }
        ));

        let tokens = lex_all("iff");
        assert!(matches!(
            tokens[0],
            Token::Identifier { ref name, .. } if name == "iff"
        ));
    }

    #[test]
    fn test_unterminated_comment_scenario() {
        let tokens = lex_all("/* unterminated");
        assert_eq!(tokens.len(), 1);
        match &tokens[0] {
            Token::Error { kind, message, .. } => {
                assert_eq!(*kind, LexErrorKind::UnterminatedBlockComment);
                assert_eq!(message, "/* unterminated");
            },
            other => panic!("expected error token, got {other:?}"),
        }
    }

    #[test]
    fn test_line_comment_scenario() {
        let tokens = lex_all("a // comment\nb");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            tokens[0],
            Token::Identifier { ref name, .. } if name == "a"
        ));
        assert_eq!(tokens[0].span(), Span::new(0, 0, 0, 1));
        assert!(matches!(
            tokens[1],
            Token::Identifier { ref name, .. } if name == "b"
        ));
        assert_eq!(tokens[1].span(), Span::new(1, 0, 1, 1));
    }

    #[test]
    fn test_countdown_program() {
        let source = r#"
            n = 10;
            while (n) {
                n -= 1; /* decrement */
            }
        "#;
        let tokens = lex_all(source);
        assert!(!tokens.iter().any(Token::is_error));

        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Keyword {
                kind: KeywordKind::While,
                ..
            }
        )));
        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Operator {
                kind: OperatorKind::AssignMinus,
                ..
            }
        )));
        assert!(tokens.iter().any(
            |t| matches!(t, Token::Identifier { name, .. } if name == "n")
        ));
        assert!(tokens.iter().any(
            |t| matches!(t, Token::Number { text, .. } if text == "10")
        ));
    }

    #[test]
    fn test_branching_program() {
        let source = "if (x % 2) { y += 1; } else { y /= 2; }";
        let tokens = lex_all(source);
        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Keyword {
                kind: KeywordKind::Else,
                ..
            }
        )));
        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Operator {
                kind: OperatorKind::Mod,
                ..
            }
        )));
        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Operator {
                kind: OperatorKind::AssignDiv,
                ..
            }
        )));
    }

    #[test]
    fn test_error_recovery_collects_all_errors() {
        let tokens = lex_all("x = 007; y = 0x; z = #;");
        let errors: Vec<&Token> = tokens.iter().filter(|t| t.is_error()).collect();
        assert_eq!(errors.len(), 3);
        // Valid tokens around the errors still come through
        assert!(tokens.iter().any(
            |t| matches!(t, Token::Identifier { name, .. } if name == "z")
        ));
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }
}
