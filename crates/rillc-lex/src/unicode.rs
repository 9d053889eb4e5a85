//! Character classification helpers for the Rill scanner.
//!
//! Classification stays deliberately simple: alphabetic/digit checks
//! only, no normalization.

/// Checks if a character may appear in an identifier.
///
/// Identifier characters are underscore, alphabetic characters
/// (including non-ASCII letters), and ASCII digits. A digit in first
/// position never reaches the identifier recognizer; dispatch sends it
/// to the number recognizer instead.
///
/// # Example
///
/// ```
/// use rillc_lex::unicode::is_ident_char;
///
/// assert!(is_ident_char('a'));
/// assert!(is_ident_char('_'));
/// assert!(is_ident_char('7'));
/// assert!(is_ident_char('α'));
/// assert!(!is_ident_char('+'));
/// assert!(!is_ident_char(' '));
/// ```
pub fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_ascii_digit()
}

/// Checks if a character is a decimal digit.
///
/// Only ASCII digits form number literals; non-ASCII digit characters
/// are rejected as unrecognized.
///
/// # Example
///
/// ```
/// use rillc_lex::unicode::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// ```
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a hexadecimal digit (`0-9`, `a-f`, `A-F`).
///
/// # Example
///
/// ```
/// use rillc_lex::unicode::is_hex_digit;
///
/// assert!(is_hex_digit('7'));
/// assert!(is_hex_digit('a'));
/// assert!(is_hex_digit('F'));
/// assert!(!is_hex_digit('g'));
/// ```
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
