//! Finding the statement under a cursor.

use tracing::debug;

use super::QueryError;
use crate::base::Position;
use crate::syntax::{Document, Node, Statement, TokenList};

/// The statement whose span contains `position`
///
/// Spans are end exclusive, so a cursor right after `;` belongs to the next
/// statement. Positions at or past the end of the document resolve to the
/// last statement.
///
/// ```
/// use sqlfold::base::Position;
/// use sqlfold::syntax::TokenList;
///
/// let document = sqlfold::parse("select 1;select 2");
/// let statement = sqlfold::locate_statement(&document, Position::new(0, 12)).unwrap();
/// assert_eq!(statement.text(), "select 2");
/// ```
pub fn locate_statement(document: &Document, position: Position) -> Result<&Statement, QueryError> {
    let index = statement_index(document, position).ok_or(QueryError::NoStatement(position))?;
    debug!(%position, index, "located statement");
    document
        .statements()
        .nth(index)
        .ok_or(QueryError::NoStatement(position))
}

/// The statement node under `position`, as it sits in the document
pub(super) fn statement_node(document: &Document, position: Position) -> Option<&Node> {
    statement_index(document, position).and_then(|index| document.children().get(index))
}

fn statement_index(document: &Document, position: Position) -> Option<usize> {
    let statements = document.children();
    statements
        .iter()
        .position(|statement| statement.span().contains(position))
        .or_else(|| statements.len().checked_sub(1))
}
