//! Operator recognition.
//!
//! Every arithmetic operator is "single-or-compound": the symbol alone,
//! or the symbol immediately followed by `=` for compound assignment.
//! Plain `=` is handled directly in the dispatch because it has no
//! compound form.

use crate::token::{OperatorKind, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Recognizes one arithmetic operator, preferring the compound
    /// assignment form when the next character is `=`.
    pub(crate) fn single_or_assign(
        &mut self,
        single: OperatorKind,
        assign: OperatorKind,
    ) -> Token {
        if self.cursor.has_more(1) && self.cursor.peek(1) == '=' {
            Token::Operator {
                kind: assign,
                span: self.cursor.build_span(2),
            }
        } else {
            Token::Operator {
                kind: single,
                span: self.cursor.build_span(1),
            }
        }
    }
}
