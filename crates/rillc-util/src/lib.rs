//! rillc-util - Foundation Types for the Rill Compiler
//!
//! This crate provides the small set of types shared between compiler
//! phases. Today that is source location tracking; later phases (parser,
//! semantic analysis) will build on the same types.
//!
//! # Example
//!
//! ```
//! use rillc_util::Span;
//!
//! let span = Span::new(0, 4, 0, 7);
//! assert_eq!(span.width(), 3);
//! ```

#![warn(missing_docs)]

pub mod span;

pub use span::Span;
