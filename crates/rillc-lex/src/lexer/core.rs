//! Core scanner implementation.
//!
//! This module contains the main Lexer struct, the token dispatch, and
//! the Iterator impl that represents the end-of-stream sentinel.

use crate::cursor::Cursor;
use crate::token::{LexErrorKind, OperatorKind, SeparatorKind, Token};
use crate::unicode::{is_digit, is_ident_char};

/// Pull-based scanner for Rill source code.
///
/// The lexer borrows the full source text and mutates a cursor
/// monotonically forward. Each call to [`Lexer::next_token`] first
/// skips whitespace and comments, then recognizes exactly one token.
/// Lexical errors come back in-band as [`Token::Error`] values; the
/// cursor always advances past the erroneous region, so the caller can
/// keep pulling tokens after an error.
///
/// # Example
///
/// ```
/// use rillc_lex::{Lexer, Token};
///
/// let mut lexer = Lexer::new("while (x) { x -= 1; }");
/// assert!(matches!(lexer.next_token(), Some(Token::Keyword { .. })));
///
/// // Or drain the stream through the Iterator impl:
/// let tokens: Vec<Token> = Lexer::new("a + b;").collect();
/// assert_eq!(tokens.len(), 4);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code, positioned at
    /// offset 0, line 0. Construction cannot fail.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips
    /// whitespace and comments, then dispatches to the appropriate
    /// recognizer based on the current character.
    ///
    /// # Returns
    /// `Some(token)` while tokens remain, `None` at end of input and on
    /// every call after that.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(error) = self.skip_trivia() {
            return Some(error);
        }

        if self.cursor.is_at_end() {
            return None;
        }

        let token = match self.cursor.peek(0) {
            '(' => self.separator(SeparatorKind::ParenOpen),
            ')' => self.separator(SeparatorKind::ParenClose),
            '{' => self.separator(SeparatorKind::BraceOpen),
            '}' => self.separator(SeparatorKind::BraceClose),
            ';' => self.separator(SeparatorKind::Semicolon),
            '-' => self.single_or_assign(OperatorKind::Minus, OperatorKind::AssignMinus),
            '+' => self.single_or_assign(OperatorKind::Plus, OperatorKind::AssignPlus),
            '*' => self.single_or_assign(OperatorKind::Mul, OperatorKind::AssignMul),
            '/' => self.single_or_assign(OperatorKind::Div, OperatorKind::AssignDiv),
            '%' => self.single_or_assign(OperatorKind::Mod, OperatorKind::AssignMod),
            '=' => Token::Operator {
                kind: OperatorKind::Assign,
                span: self.cursor.build_span(1),
            },
            c if is_ident_char(c) => {
                if is_digit(c) {
                    self.lex_number()
                } else {
                    self.lex_identifier_or_keyword()
                }
            },
            c => Token::Error {
                kind: LexErrorKind::UnrecognizedCharacter,
                message: c.to_string(),
                span: self.cursor.build_span(c.len_utf8()),
            },
        };

        Some(token)
    }

    /// Emits a single-character separator token.
    fn separator(&mut self, kind: SeparatorKind) -> Token {
        Token::Separator {
            kind,
            span: self.cursor.build_span(1),
        }
    }

    /// Returns the line the next token will start on (0-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the column the next token will start at (0-based byte
    /// offset from the line start).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
