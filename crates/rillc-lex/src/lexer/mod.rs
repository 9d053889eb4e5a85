//! Lexer module.
//!
//! This module organizes the scanner implementation into smaller,
//! focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Identifier and keyword recognition
//! - `number` - Number literal recognition
//! - `operator` - Single-or-compound operator recognition

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
