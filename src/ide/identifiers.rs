//! Pulling nodes out of the statement under a cursor.
//!
//! Completion needs the names in scope of the statement being edited,
//! the aliases that map back to tables, and the node chain the cursor sits
//! in. All of these resolve the statement first, then walk it.

use tracing::debug;

use super::QueryError;
use super::statement::{locate_statement, statement_node};
use crate::base::Position;
use crate::syntax::{Document, Node, NodeKind, NodeMatcher, TokenList, walk};

const IDENTIFIER: NodeMatcher<'static> = NodeMatcher::new().kinds(&[NodeKind::Identifier]);

const ALIASED: NodeMatcher<'static> = NodeMatcher::new().kinds(&[NodeKind::Aliased]);

/// Every `Identifier` node in the statement at `position`, in source order
///
/// Identifiers nested in members, functions, aliases and subqueries are
/// included. A statement without identifiers gives an empty list.
pub fn extract_identifiers(
    document: &Document,
    position: Position,
) -> Result<Vec<&Node>, QueryError> {
    let statement = locate_statement(document, position)?;
    let identifiers = walk(statement.children(), &IDENTIFIER, |cursor| cursor.current());
    debug!(%position, count = identifiers.len(), "extracted identifiers");
    Ok(identifiers)
}

/// Every `Aliased` node in the statement at `position`, in source order
///
/// Aliases inside an aliased subquery come after the subquery's own alias.
pub fn extract_aliased(document: &Document, position: Position) -> Result<Vec<&Node>, QueryError> {
    let statement = locate_statement(document, position)?;
    let aliased = collect_aliased(statement.children());
    debug!(%position, count = aliased.len(), "extracted aliases");
    Ok(aliased)
}

fn collect_aliased(nodes: &[Node]) -> Vec<&Node> {
    walk(nodes, &ALIASED, |cursor| {
        let node = cursor.current();
        let nested = node
            .and_then(Node::children)
            .map(collect_aliased)
            .unwrap_or_default();
        node.into_iter().chain(nested)
    })
}

/// The nodes whose span contains `position`, outermost first
///
/// Starts at the statement node and ends at the innermost node, usually a
/// leaf. A position past the end of the document gives just the last
/// statement. Empty when the document has no statements.
pub fn nodes_at(document: &Document, position: Position) -> Vec<&Node> {
    let mut chain: Vec<&Node> = statement_node(document, position).into_iter().collect();
    while let Some(child) = chain
        .last()
        .and_then(|node| node.children())
        .and_then(|children| children.iter().find(|child| child.span().contains(position)))
    {
        chain.push(child);
    }
    debug!(%position, depth = chain.len(), "resolved node chain");
    chain
}
