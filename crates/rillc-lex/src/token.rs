//! Token type definitions.
//!
//! This module defines the closed set of tokens the scanner produces,
//! the fixed-cardinality kind enumerations, the keyword spelling table,
//! and the lexical error taxonomy.

use rillc_util::Span;
use thiserror::Error;

/// Classification of a lexical error carried by [`Token::Error`].
///
/// Lexical errors are not raised; they flow through the token stream so
/// a consumer can collect several of them and keep scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A `/*` comment was still open at end of input.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    /// A character that starts no separator, operator, identifier, or number.
    #[error("unrecognized character")]
    UnrecognizedCharacter,

    /// A `0x`/`0X` prefix with no hex digits after it.
    #[error("missing digits after hex prefix")]
    MalformedHexLiteral,

    /// A multi-digit decimal literal starting with `0`, e.g. `007`.
    #[error("decimal literal with leading zero")]
    LeadingZeroLiteral,
}

/// Operator tokens.
///
/// Each of the arithmetic symbols has a compound-assignment form
/// produced when the symbol is immediately followed by `=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `-`
    Minus,
    /// `-=`
    AssignMinus,
    /// `+`
    Plus,
    /// `+=`
    AssignPlus,
    /// `*`
    Mul,
    /// `*=`
    AssignMul,
    /// `/`
    Div,
    /// `/=`
    AssignDiv,
    /// `%`
    Mod,
    /// `%=`
    AssignMod,
    /// `=`
    Assign,
}

impl OperatorKind {
    /// Returns the operator's spelling in source code.
    pub const fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Minus => "-",
            OperatorKind::AssignMinus => "-=",
            OperatorKind::Plus => "+",
            OperatorKind::AssignPlus => "+=",
            OperatorKind::Mul => "*",
            OperatorKind::AssignMul => "*=",
            OperatorKind::Div => "/",
            OperatorKind::AssignDiv => "/=",
            OperatorKind::Mod => "%",
            OperatorKind::AssignMod => "%=",
            OperatorKind::Assign => "=",
        }
    }
}

/// Separator (punctuation) tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorKind {
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `;`
    Semicolon,
}

impl SeparatorKind {
    /// Returns the separator's spelling in source code.
    pub const fn symbol(self) -> &'static str {
        match self {
            SeparatorKind::ParenOpen => "(",
            SeparatorKind::ParenClose => ")",
            SeparatorKind::BraceOpen => "{",
            SeparatorKind::BraceClose => "}",
            SeparatorKind::Semicolon => ";",
        }
    }
}

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
}

impl KeywordKind {
    /// Every keyword together with its spelling, used for classification.
    pub const TABLE: [(KeywordKind, &'static str); 3] = [
        (KeywordKind::If, "if"),
        (KeywordKind::Else, "else"),
        (KeywordKind::While, "while"),
    ];

    /// Returns the keyword's spelling in source code.
    pub const fn spelling(self) -> &'static str {
        match self {
            KeywordKind::If => "if",
            KeywordKind::Else => "else",
            KeywordKind::While => "while",
        }
    }
}

/// Looks up an identifier-shaped string in the keyword table.
///
/// Returns `Some` only on an exact spelling match.
///
/// # Example
///
/// ```
/// use rillc_lex::token::{keyword_from_ident, KeywordKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(KeywordKind::While));
/// assert_eq!(keyword_from_ident("iff"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<KeywordKind> {
    KeywordKind::TABLE
        .iter()
        .find(|(_, spelling)| *spelling == ident)
        .map(|(kind, _)| *kind)
}

/// Numeric base of a number literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberBase {
    /// A plain digit run, e.g. `42`.
    Decimal,
    /// A `0x`/`0X` prefixed literal, e.g. `0x1A3`.
    Hexadecimal,
}

impl NumberBase {
    /// Returns the radix as a number, suitable for `from_str_radix`.
    pub const fn radix(self) -> u32 {
        match self {
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }
}

/// A classified, span-tagged unit of source text.
///
/// This is a closed sum type: a parser consuming the stream can match
/// exhaustively and the compiler will flag any missing case when a new
/// token kind is added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Lexically invalid input. `message` is the offending substring
    /// (for an unterminated block comment, the source remainder from
    /// the comment's opening `/*`).
    Error {
        /// Which failure produced this token.
        kind: LexErrorKind,
        /// The offending source excerpt.
        message: String,
        /// Location of the diagnostic excerpt.
        span: Span,
    },

    /// An operator, single or compound-assignment.
    Operator {
        /// Which operator.
        kind: OperatorKind,
        /// Location of the operator.
        span: Span,
    },

    /// A punctuation separator.
    Separator {
        /// Which separator.
        kind: SeparatorKind,
        /// Location of the separator.
        span: Span,
    },

    /// A name that is not a reserved word.
    Identifier {
        /// The identifier text.
        name: String,
        /// Location of the identifier.
        span: Span,
    },

    /// A reserved word.
    Keyword {
        /// Which keyword.
        kind: KeywordKind,
        /// Location of the keyword.
        span: Span,
    },

    /// A numeric literal, stored exactly as written (including any
    /// `0x`/`0X` prefix).
    Number {
        /// The literal text as it appears in source.
        text: String,
        /// Decimal or hexadecimal.
        base: NumberBase,
        /// Location of the literal.
        span: Span,
    },
}

impl Token {
    /// Returns the span of this token, whatever its kind.
    pub fn span(&self) -> Span {
        match self {
            Token::Error { span, .. }
            | Token::Operator { span, .. }
            | Token::Separator { span, .. }
            | Token::Identifier { span, .. }
            | Token::Keyword { span, .. }
            | Token::Number { span, .. } => *span,
        }
    }

    /// Returns the literal source text of this token, or `None` for an
    /// error token (whose span need not cover its full message).
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Token::Error { .. } => None,
            Token::Operator { kind, .. } => Some(kind.symbol()),
            Token::Separator { kind, .. } => Some(kind.symbol()),
            Token::Identifier { name, .. } => Some(name),
            Token::Keyword { kind, .. } => Some(kind.spelling()),
            Token::Number { text, .. } => Some(text),
        }
    }

    /// Returns true if this is an error token.
    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error { .. })
    }
}
