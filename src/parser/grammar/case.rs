//! `CASE ... END` folding into one opaque node

use super::{Fold, consume_balanced, fold_with};
use crate::syntax::{Cursor, Node, NodeKind, NodeMatcher, SwitchCase};

const CASE: NodeMatcher<'static> = NodeMatcher::new().kinds(&[NodeKind::Item]).texts(&["case"]);

pub(super) fn fold(nodes: Vec<Node>) -> Vec<Node> {
    fold_with("case", nodes, &CASE, switch_case)
}

/// Nested `CASE` blocks each need their own `END`
fn switch_case(cursor: &mut Cursor<'_, Node>) -> Option<Fold> {
    let start = cursor.index();
    let closed = consume_balanced(
        cursor,
        |node| node.is_keyword("case"),
        |node| node.is_keyword("end"),
    );
    Some(Fold::new(start..cursor.index() + 1, move |nodes| {
        Node::SwitchCase(SwitchCase::from_nodes(nodes, closed))
    }))
}
