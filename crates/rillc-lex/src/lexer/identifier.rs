//! Identifier and keyword recognition.

use crate::token::{keyword_from_ident, Token};
use crate::unicode::is_ident_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Recognizes one identifier or keyword.
    ///
    /// Consumes a maximal run of identifier characters, then checks the
    /// text against the keyword table; an exact match produces a
    /// keyword token. Dispatch guarantees the first character is not a
    /// digit.
    pub(crate) fn lex_identifier_or_keyword(&mut self) -> Token {
        let mut len = 0;
        while self.cursor.has_more(len) && is_ident_char(self.cursor.peek(len)) {
            len += self.cursor.peek(len).len_utf8();
        }

        let text = self.cursor.slice_ahead(len);
        match keyword_from_ident(text) {
            Some(kind) => Token::Keyword {
                kind,
                span: self.cursor.build_span(len),
            },
            None => Token::Identifier {
                name: text.to_string(),
                span: self.cursor.build_span(len),
            },
        }
    }
}
