//! Syntax tree types and the generic traversal utilities over them.
//!
//! - [`SyntaxKind`], [`Token`] - lexical tokens with exact spans
//! - [`Node`], [`Document`] - the lossless tree built by the parser
//! - [`Cursor`] - restorable reader over tokens or nodes
//! - [`NodeMatcher`], [`scan`], [`walk`] - predicate-driven traversal
//!
//! The tree is immutable once built. Every container owns its children, so
//! there is exactly one path from a [`Document`] to each node.

mod cursor;
mod document;
mod matcher;
mod node;
mod nodes;
mod syntax_kind;
mod token;

pub use cursor::{Cursor, Element};
pub use document::Document;
pub use matcher::{Matcher, NodeMatcher, scan, walk};
pub use node::{Node, NodeKind, TokenList};
pub use nodes::{
    Aliased, BinaryExpr, FunctionLiteral, IdentifierList, MemberIdentifier, MultiKeyword,
    Parenthesis, Statement, SwitchCase,
};
pub use syntax_kind::SyntaxKind;
pub use token::Token;
