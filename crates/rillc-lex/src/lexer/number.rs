//! Number literal recognition.
//!
//! Rill has two literal forms: plain decimal runs and `0x`/`0X`
//! prefixed hexadecimal. The literal text is kept exactly as written;
//! converting it to a value is the consumer's concern.

use crate::token::{LexErrorKind, NumberBase, Token};
use crate::unicode::{is_digit, is_hex_digit};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Recognizes one number literal.
    ///
    /// Dispatch guarantees the current character is an ASCII digit.
    /// Two malformed shapes become error tokens: a hex prefix with no
    /// digits after it (span covers just the prefix), and a multi-digit
    /// decimal run starting with `0` (span covers the whole run).
    pub(crate) fn lex_number(&mut self) -> Token {
        if self.cursor.peek(0) == '0' && matches!(self.cursor.peek(1), 'x' | 'X') {
            let mut len = 2;
            while self.cursor.has_more(len) && is_hex_digit(self.cursor.peek(len)) {
                len += 1;
            }

            if len == 2 {
                return Token::Error {
                    kind: LexErrorKind::MalformedHexLiteral,
                    message: self.cursor.slice_ahead(2).to_string(),
                    span: self.cursor.build_span(2),
                };
            }

            let text = self.cursor.slice_ahead(len).to_string();
            return Token::Number {
                text,
                base: NumberBase::Hexadecimal,
                span: self.cursor.build_span(len),
            };
        }

        let mut len = 0;
        while self.cursor.has_more(len) && is_digit(self.cursor.peek(len)) {
            len += 1;
        }

        let text = self.cursor.slice_ahead(len).to_string();
        if len > 1 && text.starts_with('0') {
            return Token::Error {
                kind: LexErrorKind::LeadingZeroLiteral,
                message: text,
                span: self.cursor.build_span(len),
            };
        }

        Token::Number {
            text,
            base: NumberBase::Decimal,
            span: self.cursor.build_span(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{LexErrorKind, NumberBase, Token};
    use crate::Lexer;
    use rillc_util::Span;

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).next_token().expect("expected a token")
    }

    #[test]
    fn test_decimal_literal() {
        let token = lex_one("123");
        assert_eq!(
            token,
            Token::Number {
                text: "123".to_string(),
                base: NumberBase::Decimal,
                span: Span::new(0, 0, 0, 3),
            }
        );
    }

    #[test]
    fn test_lone_zero_is_valid() {
        let token = lex_one("0");
        assert_eq!(
            token,
            Token::Number {
                text: "0".to_string(),
                base: NumberBase::Decimal,
                span: Span::new(0, 0, 0, 1),
            }
        );
    }

    #[test]
    fn test_zero_before_separator_is_valid() {
        let mut lexer = Lexer::new("0;");
        assert!(matches!(
            lexer.next_token(),
            Some(Token::Number { ref text, .. }) if text == "0"
        ));
        assert!(matches!(lexer.next_token(), Some(Token::Separator { .. })));
    }

    #[test]
    fn test_hex_literal() {
        let token = lex_one("0x1A3");
        assert_eq!(
            token,
            Token::Number {
                text: "0x1A3".to_string(),
                base: NumberBase::Hexadecimal,
                span: Span::new(0, 0, 0, 5),
            }
        );
    }

    #[test]
    fn test_hex_literal_uppercase_prefix() {
        let token = lex_one("0Xff");
        assert_eq!(
            token,
            Token::Number {
                text: "0Xff".to_string(),
                base: NumberBase::Hexadecimal,
                span: Span::new(0, 0, 0, 4),
            }
        );
    }

    #[test]
    fn test_leading_zero_is_error() {
        let token = lex_one("007");
        match token {
            Token::Error {
                kind,
                message,
                span,
            } => {
                assert_eq!(kind, LexErrorKind::LeadingZeroLiteral);
                assert_eq!(message, "007");
                assert_eq!(span, Span::new(0, 0, 0, 3));
            },
            other => panic!("expected error token, got {other:?}"),
        }
    }

    #[test]
    fn test_hex_prefix_without_digits_is_error() {
        let mut lexer = Lexer::new("0x;");
        let token = lexer.next_token().unwrap();
        match token {
            Token::Error {
                kind,
                message,
                span,
            } => {
                assert_eq!(kind, LexErrorKind::MalformedHexLiteral);
                assert_eq!(message, "0x");
                assert_eq!(span, Span::new(0, 0, 0, 2));
            },
            other => panic!("expected error token, got {other:?}"),
        }
        // The scanner advanced past the prefix and keeps going
        assert!(matches!(lexer.next_token(), Some(Token::Separator { .. })));
    }

    #[test]
    fn test_hex_stops_at_non_hex_letter() {
        let mut lexer = Lexer::new("0x1Ag");
        let token = lexer.next_token().unwrap();
        assert!(matches!(
            token,
            Token::Number { ref text, base: NumberBase::Hexadecimal, .. } if text == "0x1A"
        ));
        // 'g' begins an identifier
        assert!(matches!(
            lexer.next_token(),
            Some(Token::Identifier { ref name, .. }) if name == "g"
        ));
    }

    #[test]
    fn test_zero_x_alone_at_eof() {
        let mut lexer = Lexer::new("0x");
        let token = lexer.next_token().unwrap();
        assert!(matches!(
            token,
            Token::Error {
                kind: LexErrorKind::MalformedHexLiteral,
                ..
            }
        ));
        assert_eq!(lexer.next_token(), None);
    }

    #[test]
    fn test_decimal_stops_at_letter() {
        let mut lexer = Lexer::new("10px");
        assert!(matches!(
            lexer.next_token(),
            Some(Token::Number { ref text, .. }) if text == "10"
        ));
        assert!(matches!(
            lexer.next_token(),
            Some(Token::Identifier { ref name, .. }) if name == "px"
        ));
    }
}
