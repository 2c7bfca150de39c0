//! AST and syntax definitions for Sprig.
//!
//! This crate defines the abstract syntax tree produced by the parser. Each
//! grammar family (commands, declarations, expressions, parameters) is a
//! struct carrying a `kind` enum and the position of its first token.

mod ast;
mod command;
mod config;
mod decl;
mod expr;
pub mod printer;

pub use ast::*;
pub use command::*;
pub use config::PrintConfig;
pub use decl::*;
pub use expr::*;
