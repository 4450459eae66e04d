//! Function call folding: `count(*)`, `schema.fn(a, b)`
//!
//! The name must touch the parenthesis. `foo (a)` is a name followed by a
//! group, which the alias and list passes may still combine.

use super::{Fold, fold_with};
use crate::syntax::{Cursor, FunctionLiteral, Node, NodeKind, NodeMatcher};

const CALLEE: NodeMatcher<'static> =
    NodeMatcher::new().kinds(&[NodeKind::Identifier, NodeKind::MemberIdentifier]);

pub(super) fn fold(nodes: Vec<Node>) -> Vec<Node> {
    fold_with("function", nodes, &CALLEE, function)
}

fn function(cursor: &mut Cursor<'_, Node>) -> Option<Fold> {
    if cursor.current()?.is_wildcard() {
        return None;
    }
    if cursor.peek(1)?.kind() != NodeKind::Parenthesis {
        return None;
    }
    let start = cursor.index();
    cursor.advance();
    Some(Fold::new(start..start + 2, |nodes| {
        Node::FunctionLiteral(FunctionLiteral::from_nodes(nodes))
    }))
}
