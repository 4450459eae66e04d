//! Tolerant SQL parser
//!
//! Builds a lossless tree out of text that is usually mid-edit:
//! - **logos** for lexing, with every byte kept in some token
//! - a fixed pipeline of fold passes that group sibling nodes bottom-up
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind and exact spans
//!     ↓
//! Statement split at top-level `;`
//!     ↓
//! Leaves → keywords become Items, names become Identifiers
//!     ↓
//! Fold passes → parenthesis, multi keyword, member, function,
//!               case, operator, alias, identifier list
//!     ↓
//! Document → Statements → Nodes
//! ```
//!
//! Nothing here returns an error. Input the passes do not recognize is left
//! as flat leaves in its statement.

#[allow(clippy::module_inception)]
mod parser;

mod grammar;
pub mod keywords;
mod lexer;

pub use lexer::{Lexer, tokenize};
pub use parser::parse;
