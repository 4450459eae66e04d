//! # sqlfold
//!
//! Lossless, position-exact SQL syntax trees for editor tooling.
//!
//! Text being edited is rarely valid SQL, so nothing here fails on input:
//! every byte lands in some token, every token in some node, and the text of
//! the tree is the text that was parsed.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Position queries (statement at cursor, identifiers, aliases)
//!   ↓
//! parser    → Logos lexer, keyword tables, fold passes
//!   ↓
//! syntax    → Token, Node, Document, Cursor, NodeMatcher/scan/walk
//!   ↓
//! base      → Primitives (Position, Span, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use sqlfold::syntax::{Node, NodeKind, TokenList};
//!
//! let document = sqlfold::parse("select a.id, count(*) c from t a where a.x = 1");
//! let statement = document.statements().next().unwrap();
//! let kinds: Vec<_> = statement.children().iter().map(Node::kind).collect();
//! assert!(kinds.contains(&NodeKind::IdentifierList));
//! assert!(kinds.contains(&NodeKind::Comparison));
//! assert_eq!(document.text(), "select a.id, count(*) c from t a where a.x = 1");
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → ide)
// ============================================================================

/// Foundation types: Position, Span, TextRange
pub mod base;

/// Syntax: tokens, the node tree, cursor and matcher
pub mod syntax;

/// Parser: logos lexer and the fold-pass tree builder
pub mod parser;

/// IDE queries: statement and node lookup by position
pub mod ide;

// Re-export the entry points
pub use parser::{parse, tokenize};

pub use base::{Position, Span, TextRange, TextSize};
pub use ide::{QueryError, extract_identifiers, locate_statement};
pub use syntax::{Document, Node, NodeKind, TokenList};
