//! Syntax index for the `abc` function language.
//!
//! The language only knows function declarations:
//!
//! ```text
//! func main {
//!   helper
//! }
//! func helper {
//! }
//! ```
//!
//! A header line (`func <name> {`) opens a declaration and a line holding
//! only `}` closes it. Everything between is the body, which the parser never
//! looks inside. [`SyntaxIndex`] keeps the most recent [`SyntaxTree`] per
//! document and re-parses whenever the document version moves on.

mod error;
mod index;
mod outline;
mod parser;
mod tree;

pub use error::SyntaxError;
pub use index::SyntaxIndex;
pub use outline::document_symbols;
pub use parser::Parser;
pub use tree::{Declaration, SyntaxTree};

#[cfg(test)]
mod tests;
