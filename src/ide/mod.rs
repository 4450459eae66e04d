//! IDE queries: position-based lookups over a parsed document.
//!
//! Completion, hover and diagnostics providers call these with the cursor
//! position from the editor.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take a document and a position, return borrowed nodes
//! 2. **No protocol types**: positions are our own [`Position`](crate::base::Position)
//! 3. **Built on the matcher**: every query is a [`walk`](crate::syntax::walk) over one statement
//!
//! ## Usage
//!
//! ```
//! use sqlfold::base::Position;
//! use sqlfold::ide::extract_identifiers;
//!
//! let document = sqlfold::parse("select name from users");
//! let identifiers = extract_identifiers(&document, Position::new(0, 7)).unwrap();
//! let names: Vec<_> = identifiers.iter().map(|node| node.text()).collect();
//! assert_eq!(names, ["name", "users"]);
//! ```

mod error;
mod identifiers;
mod statement;

pub use error::QueryError;
pub use identifiers::{extract_aliased, extract_identifiers, nodes_at};
pub use statement::locate_statement;
