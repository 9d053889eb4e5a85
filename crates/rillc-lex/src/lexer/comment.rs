//! Whitespace and comment skipping.
//!
//! The skipper runs before every token and advances the cursor past
//! spaces, tabs, newlines, `//` line comments, and (possibly nested)
//! `/* */` block comments. It is the only part of the scanner that
//! crosses line boundaries.

use crate::token::{LexErrorKind, Token};
use crate::Lexer;

/// Which kind of comment the skipper is currently inside.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CommentState {
    None,
    Line,
    Block,
}

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments before the next token.
    ///
    /// Block comments nest: every `/*` increments a depth counter,
    /// every `*/` decrements it, and the comment ends when the depth
    /// returns to zero. A newline terminates a line comment.
    ///
    /// # Returns
    /// `Some(error)` if the input ends while a block comment is still
    /// open. The error token carries the source remainder from the
    /// outermost `/*` and a zero-width span at the end of input.
    pub(crate) fn skip_trivia(&mut self) -> Option<Token> {
        let mut state = CommentState::None;
        let mut depth: u32 = 0;
        let mut comment_start = 0;

        while self.cursor.has_more(0) {
            match self.cursor.peek(0) {
                ' ' | '\t' => self.cursor.advance(1),
                '\n' | '\r' => {
                    self.cursor.consume_newline();
                    if state == CommentState::Line {
                        state = CommentState::None;
                    }
                },
                '/' => {
                    if state == CommentState::Line {
                        self.cursor.advance(1);
                    } else if self.cursor.has_more(1) {
                        match self.cursor.peek(1) {
                            '/' if state == CommentState::None => {
                                state = CommentState::Line;
                                self.cursor.advance(2);
                            },
                            '*' => {
                                if depth == 0 {
                                    comment_start = self.cursor.position();
                                }
                                state = CommentState::Block;
                                depth += 1;
                                self.cursor.advance(2);
                            },
                            _ if state == CommentState::Block => self.cursor.advance(1),
                            // A real `/` token starts here
                            _ => return None,
                        }
                    } else if state == CommentState::Block {
                        self.cursor.advance(1);
                    } else {
                        return None;
                    }
                },
                '*' if state == CommentState::Block && self.cursor.peek(1) == '/' => {
                    self.cursor.advance(2);
                    depth -= 1;
                    if depth == 0 {
                        state = CommentState::None;
                    }
                },
                _ => {
                    if state == CommentState::None {
                        return None;
                    }
                    self.cursor.advance_char();
                },
            }
        }

        if state == CommentState::Block {
            return Some(Token::Error {
                kind: LexErrorKind::UnterminatedBlockComment,
                message: self.cursor.slice_to_end(comment_start).to_string(),
                span: self.cursor.build_span(0),
            });
        }
        None
    }
}
