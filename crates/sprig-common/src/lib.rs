//! Common utilities and data structures for Sprig.
//!
//! This crate provides the source location types used across the front-end:
//! - `Span`: byte ranges, used to underline source text in diagnostics
//! - `Position`: 1-based line/column, carried by every token and AST node
//! - `LineIndex`: maps byte offsets to positions

mod position;
mod span;

pub use position::{LineIndex, Position};
pub use span::{BytePos, Span};
