//! Edge case and property tests for rillc-lex
